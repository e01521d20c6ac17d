use std::time::Duration;

use reqwest::Client;

/// Shared HTTP client configuration for the remote product store.
pub struct StoreClient {
    pub client: Client,
    pub base_url: String,
}

impl StoreClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn products_url(&self) -> String {
        format!("{}/api/products/all", self.base_url)
    }

    pub fn create_product_url(&self) -> String {
        format!("{}/api/products/create", self.base_url)
    }

    pub fn product_url(&self, id: i64) -> String {
        format!("{}/api/products/{}", self.base_url, id)
    }

    pub fn apply_discount_url(&self, id: i64) -> String {
        format!("{}/api/products/{}/apply_discount", self.base_url, id)
    }

    pub fn recommendations_url(&self) -> String {
        format!("{}/api/kpi/waste_recommendations", self.base_url)
    }

    pub fn kpi_overview_url(&self) -> String {
        format!("{}/api/kpi/overview", self.base_url)
    }

    pub fn sales_summary_url(&self) -> String {
        format!("{}/api/sales/summary", self.base_url)
    }

    pub fn top_products_url(&self) -> String {
        format!("{}/api/sales/top_products", self.base_url)
    }

    pub fn seasonality_url(&self) -> String {
        format!("{}/api/sales/seasonality", self.base_url)
    }

    pub fn popular_by_season_url(&self) -> String {
        format!("{}/api/sales/popular_by_season", self.base_url)
    }

    pub fn sales_by_age_groups_url(&self) -> String {
        format!("{}/api/sales/by_age_groups", self.base_url)
    }
}
