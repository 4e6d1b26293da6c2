//! Default-choice policy for the dashboard's account and campaign.
//!
//! Each choice is a ranked list of strategies evaluated in input order; the
//! first strategy to produce a match wins. The final strategy in each list
//! matches any non-empty input, so selection only fails on empty lists.

use crate::models::{AdAccount, Campaign, CampaignStatus};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No ad accounts available")]
    NoAccounts,
    #[error("No campaigns available")]
    NoCampaigns,
}

type AccountStrategy = fn(&[AdAccount], &str) -> Option<usize>;

const ACCOUNT_STRATEGIES: &[AccountStrategy] = &[exact_account_name, first_account];

fn exact_account_name(accounts: &[AdAccount], preferred: &str) -> Option<usize> {
    accounts.iter().position(|account| account.name == preferred)
}

fn first_account(accounts: &[AdAccount], _preferred: &str) -> Option<usize> {
    if accounts.is_empty() {
        None
    } else {
        Some(0)
    }
}

pub fn choose_account<'a>(
    accounts: &'a [AdAccount],
    preferred_name: &str,
) -> Result<&'a AdAccount, SelectionError> {
    ACCOUNT_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(accounts, preferred_name))
        .map(|index| &accounts[index])
        .ok_or(SelectionError::NoAccounts)
}

type CampaignStrategy = fn(&[Campaign], &str) -> Option<usize>;

const CAMPAIGN_STRATEGIES: &[CampaignStrategy] = &[keyword_match, first_active, first_campaign];

fn keyword_match(campaigns: &[Campaign], keyword: &str) -> Option<usize> {
    let keyword = keyword.to_lowercase();
    campaigns
        .iter()
        .position(|campaign| campaign.name.to_lowercase().contains(&keyword))
}

fn first_active(campaigns: &[Campaign], _keyword: &str) -> Option<usize> {
    campaigns
        .iter()
        .position(|campaign| campaign.status == CampaignStatus::Active)
}

fn first_campaign(campaigns: &[Campaign], _keyword: &str) -> Option<usize> {
    if campaigns.is_empty() {
        None
    } else {
        Some(0)
    }
}

pub fn choose_campaign<'a>(
    campaigns: &'a [Campaign],
    name_keyword: &str,
) -> Result<&'a Campaign, SelectionError> {
    CAMPAIGN_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(campaigns, name_keyword))
        .map(|index| &campaigns[index])
        .ok_or(SelectionError::NoCampaigns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str, id: &str) -> AdAccount {
        AdAccount {
            name: name.to_string(),
            account_id: id.to_string(),
            account_status: 1,
        }
    }

    fn campaign(name: &str, id: &str, status: CampaignStatus) -> Campaign {
        Campaign {
            id: id.to_string(),
            name: name.to_string(),
            status,
            objective: None,
        }
    }

    #[test]
    fn account_exact_name_wins() {
        let accounts = vec![
            account("Someone Else", "111"),
            account("Chaitanya Soni", "222"),
        ];
        let chosen = choose_account(&accounts, "Chaitanya Soni").unwrap();
        assert_eq!(chosen.account_id, "222");
    }

    #[test]
    fn account_name_match_is_case_sensitive() {
        let accounts = vec![
            account("Someone Else", "111"),
            account("chaitanya soni", "222"),
        ];
        let chosen = choose_account(&accounts, "Chaitanya Soni").unwrap();
        assert_eq!(chosen.account_id, "111");
    }

    #[test]
    fn account_falls_back_to_first_in_input_order() {
        let accounts = vec![account("B", "2"), account("A", "1")];
        let chosen = choose_account(&accounts, "Missing").unwrap();
        assert_eq!(chosen.account_id, "2");
    }

    #[test]
    fn account_empty_list_fails() {
        assert!(matches!(
            choose_account(&[], "Any"),
            Err(SelectionError::NoAccounts)
        ));
    }

    #[test]
    fn campaign_priority_chain_all_cases_present() {
        // One list exercising every rung: a paused first element, an active
        // campaign, and a keyword match further down.
        let campaigns = vec![
            campaign("Diwali Push", "c1", CampaignStatus::Paused),
            campaign("Evening Ads", "c2", CampaignStatus::Active),
            campaign("Sardi ki Chai 2024", "c3", CampaignStatus::Paused),
        ];

        let keyword_hit = choose_campaign(&campaigns, "sardi KI chai").unwrap();
        assert_eq!(keyword_hit.id, "c3");

        let active_fallback = choose_campaign(&campaigns, "Monsoon").unwrap();
        assert_eq!(active_fallback.id, "c2");

        let all_paused = vec![
            campaign("Diwali Push", "c1", CampaignStatus::Paused),
            campaign("Evening Ads", "c2", CampaignStatus::Paused),
        ];
        let first_fallback = choose_campaign(&all_paused, "Monsoon").unwrap();
        assert_eq!(first_fallback.id, "c1");
    }

    #[test]
    fn campaign_keyword_takes_first_match_in_input_order() {
        let campaigns = vec![
            campaign("Sardi ki Chai - morning", "c1", CampaignStatus::Paused),
            campaign("Sardi ki Chai - evening", "c2", CampaignStatus::Active),
        ];
        let chosen = choose_campaign(&campaigns, "sardi").unwrap();
        assert_eq!(chosen.id, "c1");
    }

    #[test]
    fn campaign_empty_list_fails() {
        assert!(matches!(
            choose_campaign(&[], "Any"),
            Err(SelectionError::NoCampaigns)
        ));
    }
}
