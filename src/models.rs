use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdAccount {
    pub name: String,
    pub account_id: String,
    // Graph encodes account status as an integer code; 1 means active
    #[serde(default)]
    pub account_status: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum CampaignStatus {
    Active,
    Paused,
    Other,
}

impl From<String> for CampaignStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ACTIVE" => CampaignStatus::Active,
            "PAUSED" => CampaignStatus::Paused,
            _ => CampaignStatus::Other,
        }
    }
}

impl Default for CampaignStatus {
    fn default() -> Self {
        CampaignStatus::Other
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default)]
    pub objective: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ActionRecord {
    pub action_type: String,
    #[serde(default)]
    pub value: String,
}

/// One insights row as the Graph API returns it: metric values are decimal
/// strings. Summary rows aggregate the campaign lifetime; daily rows carry
/// `date_start`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Insight {
    #[serde(default)]
    pub date_start: Option<String>,
    #[serde(default)]
    pub spend: Option<String>,
    #[serde(default)]
    pub impressions: Option<String>,
    #[serde(default)]
    pub reach: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub cpc: Option<String>,
    #[serde(default)]
    pub ctr: Option<String>,
    #[serde(default)]
    pub actions: Vec<ActionRecord>,
}

/// Typed lifetime metrics behind the dashboard tiles.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SummaryMetrics {
    pub spend: f64,
    pub impressions: i64,
    pub reach: i64,
    pub frequency: f64,
    pub cpc: f64,
    pub ctr: f64,
    pub landing_page_views: i64,
}

/// One day of the trend, with running totals over the date-sorted series.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub spend: f64,
    pub impressions: i64,
    pub reach: i64,
    pub landing_page_views: i64,
    pub cumulative_spend: f64,
    pub cumulative_impressions: i64,
    pub cumulative_reach: i64,
    pub cumulative_landing_page_views: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccountLabel {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CampaignLabel {
    pub name: String,
    pub id: String,
    pub status: CampaignStatus,
    pub objective: Option<String>,
}

/// Everything the dashboard page renders from. `summary` stays `None` when
/// the campaign has no insight rows yet, which the page reports as "no data"
/// rather than four zero tiles.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Dashboard {
    pub account: AccountLabel,
    pub campaign: CampaignLabel,
    pub summary: Option<SummaryMetrics>,
    pub trend: Vec<TrendPoint>,
}
