use crate::constants::{
    ACCOUNT_FIELDS, CAMPAIGN_EFFECTIVE_STATUSES, CAMPAIGN_FIELDS, DAILY_INSIGHT_FIELDS,
    MAX_LIST_PAGES, META_API_VERSION, SUMMARY_INSIGHT_FIELDS,
};
use crate::models::{AdAccount, Campaign, Insight};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetaApiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Graph API error {code}: {message}")]
    Api { code: i64, message: String },
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct GraphPage<T> {
    #[serde(default)]
    data: Vec<T>,
    #[serde(default)]
    paging: Option<Paging>,
}

#[derive(Debug, Deserialize)]
struct Paging {
    #[serde(default)]
    cursors: Option<Cursors>,
    #[serde(default)]
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Cursors {
    #[serde(default)]
    after: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphErrorEnvelope {
    error: GraphError,
}

#[derive(Debug, Deserialize)]
struct GraphError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: i64,
}

/// Handle on the Meta Marketing Graph API. Built once from config and passed
/// to every call site; the access token rides along as a query parameter.
pub struct MetaApi {
    client: Client,
    access_token: String,
    base_url: String,
}

impl MetaApi {
    pub fn new(access_token: String, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            access_token,
            base_url: format!("{}/{}", base_url.trim_end_matches('/'), META_API_VERSION),
        }
    }

    /// Ad accounts linked to the token's user.
    pub async fn get_ad_accounts(&self) -> Result<Vec<AdAccount>, MetaApiError> {
        let url = format!("{}/me/adaccounts", self.base_url);
        self.fetch_all(&url, &[("fields", ACCOUNT_FIELDS)]).await
    }

    /// Active and paused campaigns under an account.
    pub async fn get_campaigns(&self, account_id: &str) -> Result<Vec<Campaign>, MetaApiError> {
        let url = format!("{}/act_{}/campaigns", self.base_url, account_id);
        self.fetch_all(
            &url,
            &[
                ("fields", CAMPAIGN_FIELDS),
                ("effective_status", CAMPAIGN_EFFECTIVE_STATUSES),
            ],
        )
        .await
    }

    /// Lifetime summary insights for a campaign; `None` when the campaign
    /// has no data yet.
    pub async fn get_campaign_summary(
        &self,
        campaign_id: &str,
    ) -> Result<Option<Insight>, MetaApiError> {
        let url = format!("{}/{}/insights", self.base_url, campaign_id);
        let page: GraphPage<Insight> = self
            .fetch_page(
                &url,
                &[
                    ("fields", SUMMARY_INSIGHT_FIELDS),
                    ("date_preset", "maximum"),
                ],
                None,
            )
            .await?;
        Ok(page.data.into_iter().next())
    }

    /// Per-day insight rows over the campaign lifetime.
    pub async fn get_daily_insights(
        &self,
        campaign_id: &str,
    ) -> Result<Vec<Insight>, MetaApiError> {
        let url = format!("{}/{}/insights", self.base_url, campaign_id);
        self.fetch_all(
            &url,
            &[
                ("fields", DAILY_INSIGHT_FIELDS),
                ("date_preset", "maximum"),
                ("time_increment", "1"),
            ],
        )
        .await
    }

    // Follows `paging.cursors.after` while the response advertises a next
    // page, capped at MAX_LIST_PAGES per call.
    async fn fetch_all<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, MetaApiError> {
        let mut rows = Vec::new();
        let mut after: Option<String> = None;

        for _ in 0..MAX_LIST_PAGES {
            let page = self.fetch_page::<T>(url, params, after.as_deref()).await?;
            rows.extend(page.data);

            after = match page.paging {
                Some(paging) if paging.next.is_some() => {
                    paging.cursors.and_then(|cursors| cursors.after)
                }
                _ => None,
            };
            if after.is_none() {
                break;
            }
        }

        Ok(rows)
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
        after: Option<&str>,
    ) -> Result<GraphPage<T>, MetaApiError> {
        let mut request = self
            .client
            .get(url)
            .query(&[("access_token", self.access_token.as_str())])
            .query(params);
        if let Some(cursor) = after {
            request = request.query(&[("after", cursor)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| MetaApiError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<GraphErrorEnvelope>(&body) {
                Ok(envelope) => MetaApiError::Api {
                    code: envelope.error.code,
                    message: envelope.error.message,
                },
                Err(_) => MetaApiError::RequestFailed(format!("HTTP {status}")),
            });
        }

        response
            .json::<GraphPage<T>>()
            .await
            .map_err(|e| MetaApiError::InvalidResponse(e.to_string()))
    }
}
