use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::errors::StoreError;
use crate::domain::product::model::Product;
use crate::domain::recommendation::model::Recommendation;

/// Fields accepted by the remote store when creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category_id: Option<i64>,
    pub stock: i64,
    pub unit_price: f64,
    pub supplier: Option<String>,
    pub expiration_date: Option<NaiveDate>,
}

/// Partial update: only present fields are sent to the remote store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub stock: Option<i64>,
    pub expiration_date: Option<NaiveDate>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.stock.is_none() && self.expiration_date.is_none()
    }
}

/// Port to the remote product store, the authoritative source of truth.
///
/// Analytics payloads are opaque: consumed only for display, never for
/// decision logic, so they pass through as raw JSON.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;
    async fn create_product(&self, fields: NewProduct) -> Result<Product, StoreError>;
    async fn update_product(&self, id: i64, patch: ProductPatch) -> Result<Product, StoreError>;
    async fn apply_discount(&self, id: i64, discount_percent: u8) -> Result<(), StoreError>;
    async fn list_recommendations(&self) -> Result<Vec<Recommendation>, StoreError>;

    async fn sales_summary(&self) -> Result<Vec<Value>, StoreError>;
    async fn top_products(&self) -> Result<Vec<Value>, StoreError>;
    async fn kpi_overview(&self) -> Result<Value, StoreError>;
    async fn seasonality(&self) -> Result<Value, StoreError>;
    async fn popular_by_season(&self) -> Result<Value, StoreError>;
    async fn sales_by_age_groups(&self) -> Result<Value, StoreError>;
}
