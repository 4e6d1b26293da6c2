use crate::constants::LANDING_PAGE_VIEW;
use crate::insights::summarize;
use crate::meta::MetaApi;
use crate::models::{AccountLabel, CampaignLabel, Dashboard};
use crate::selector::{choose_account, choose_campaign};
use crate::trend::build_trend;
use thiserror::Error;
use tracing::{info, warn};

/// Selection targets resolved from config at startup.
#[derive(Debug, Clone)]
pub struct DashboardDefaults {
    pub account_name: String,
    pub campaign_keyword: String,
}

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("No Ad Accounts found linked to this profile.")]
    NoAccounts,
    #[error("No active or paused campaigns found for account: {0}")]
    NoCampaigns(String),
}

/// One dashboard load: fetch, select, fetch again, derive.
///
/// Transport and API failures on any fetch degrade to an empty result with a
/// warning; only an empty selection pool stops the flow, since there is
/// nothing sensible to render without an account or a campaign.
pub async fn load_dashboard(
    api: &MetaApi,
    defaults: &DashboardDefaults,
) -> Result<Dashboard, DashboardError> {
    let accounts = api.get_ad_accounts().await.unwrap_or_else(|err| {
        warn!("failed to fetch ad accounts: {err}");
        Vec::new()
    });

    let account =
        choose_account(&accounts, &defaults.account_name).map_err(|_| DashboardError::NoAccounts)?;

    let campaigns = api
        .get_campaigns(&account.account_id)
        .await
        .unwrap_or_else(|err| {
            warn!(
                "failed to fetch campaigns for act_{}: {err}",
                account.account_id
            );
            Vec::new()
        });

    let campaign = choose_campaign(&campaigns, &defaults.campaign_keyword)
        .map_err(|_| DashboardError::NoCampaigns(account.name.clone()))?;

    info!(
        "selected campaign {} ({}) on account {}",
        campaign.name, campaign.id, account.name
    );

    let (summary, daily) = tokio::join!(
        api.get_campaign_summary(&campaign.id),
        api.get_daily_insights(&campaign.id),
    );

    let summary = summary.unwrap_or_else(|err| {
        warn!("failed to fetch summary insights: {err}");
        None
    });
    let daily = daily.unwrap_or_else(|err| {
        warn!("failed to fetch daily insights: {err}");
        Vec::new()
    });

    Ok(Dashboard {
        account: AccountLabel {
            name: account.name.clone(),
            id: account.account_id.clone(),
        },
        campaign: CampaignLabel {
            name: campaign.name.clone(),
            id: campaign.id.clone(),
            status: campaign.status,
            objective: campaign.objective.clone(),
        },
        summary: summary.map(|insight| summarize(&insight, LANDING_PAGE_VIEW)),
        trend: build_trend(&daily, LANDING_PAGE_VIEW),
    })
}
