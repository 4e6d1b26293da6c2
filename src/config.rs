use crate::constants::{
    DEFAULT_ACCOUNT_NAME, DEFAULT_CAMPAIGN_KEYWORD, DEFAULT_PORT, META_BASE_URL,
};
use dotenv::dotenv;
use std::env;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub access_token: String,
    pub base_url: String,
    pub preferred_account_name: String,
    pub campaign_name_keyword: String,
    pub port: u16,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    MissingEnv(String),
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("Invalid port: {0}")]
    InvalidPort(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let access_token = env::var("META_ACCESS_TOKEN")
            .map_err(|_| ConfigError::MissingEnv("META_ACCESS_TOKEN".to_string()))?;

        // Overridable so tests and staging can point at a different Graph host
        let base_url = env::var("META_BASE_URL").unwrap_or_else(|_| META_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;

        let preferred_account_name =
            env::var("PREFERRED_ACCOUNT_NAME").unwrap_or_else(|_| DEFAULT_ACCOUNT_NAME.to_string());

        let campaign_name_keyword =
            env::var("CAMPAIGN_NAME_KEYWORD").unwrap_or_else(|_| DEFAULT_CAMPAIGN_KEYWORD.to_string());

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            access_token,
            base_url,
            preferred_account_name,
            campaign_name_keyword,
            port,
        })
    }
}
