use super::store_config::StoreConfig;

pub struct AppConfig {
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            store: StoreConfig::from_env(),
        }
    }
}
