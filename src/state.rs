use crate::meta::MetaApi;
use crate::service::DashboardDefaults;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<MetaApi>,
    pub defaults: DashboardDefaults,
}

impl AppState {
    pub fn new(api: MetaApi, defaults: DashboardDefaults) -> Self {
        Self {
            api: Arc::new(api),
            defaults,
        }
    }
}
