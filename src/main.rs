use cafe_marketing_dashboard::{router, AppState, Config, DashboardDefaults, MetaApi};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // One explicit API handle, shared by every request
    let api = MetaApi::new(config.access_token, &config.base_url);
    let defaults = DashboardDefaults {
        account_name: config.preferred_account_name,
        campaign_keyword: config.campaign_name_keyword,
    };
    let state = AppState::new(api, defaults);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
