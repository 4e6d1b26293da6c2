pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod insights;
pub mod meta;
pub mod models;
pub mod selector;
pub mod service;
pub mod state;
pub mod trend;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use meta::MetaApi;
pub use service::DashboardDefaults;
pub use state::AppState;
