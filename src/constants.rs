// API Versions
pub const META_API_VERSION: &str = "v20.0";

// API Base URLs
pub const META_BASE_URL: &str = "https://graph.facebook.com";

// Server Settings
pub const DEFAULT_PORT: u16 = 8080;

// Pages followed per list call before giving up on the cursor chain
pub const MAX_LIST_PAGES: usize = 8;

// Meta API Fields
pub const ACCOUNT_FIELDS: &str = "name,account_id,account_status";
pub const CAMPAIGN_FIELDS: &str = "name,id,status,objective";
pub const SUMMARY_INSIGHT_FIELDS: &str = "impressions,reach,spend,frequency,cpc,ctr,actions";
pub const DAILY_INSIGHT_FIELDS: &str = "date_start,impressions,reach,spend,actions";

// Campaign listing is restricted server-side to these statuses
pub const CAMPAIGN_EFFECTIVE_STATUSES: &str = r#"["ACTIVE","PAUSED"]"#;

// Conversion action shown as the "Interested Audience" tile
pub const LANDING_PAGE_VIEW: &str = "landing_page_view";

// Default selection targets
pub const DEFAULT_ACCOUNT_NAME: &str = "Chaitanya Soni";
pub const DEFAULT_CAMPAIGN_KEYWORD: &str = "Sardi ki Chai";
