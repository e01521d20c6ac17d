use std::sync::Arc;

use business::application::dashboard::controller::DashboardController;
use logger::TracingLogger;
use remote_store::{HttpProductStore, StoreClient};

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub controller: DashboardController,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let client = StoreClient::new(config.store.base_url.clone(), config.store.timeout());
        let store = Arc::new(HttpProductStore::new(client));

        let controller = DashboardController::new(store, logger);

        Self { controller }
    }
}
