pub mod app_config;
pub mod store_config;
