use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::recommendation::model::Recommendation;
use business::domain::store::{NewProduct, ProductPatch};

#[derive(Debug, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub warehouse_location: Option<String>,
    #[serde(default)]
    pub sales_volume: Option<f64>,
    #[serde(default)]
    pub turnover_rate: Option<f64>,
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        Product::from_store(
            self.id,
            self.name,
            self.category_id,
            self.stock,
            self.unit_price,
            self.supplier,
            self.expiration_date,
            self.warehouse_location,
            self.sales_volume,
            self.turnover_rate,
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendationDto {
    pub product_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub days_remaining: Option<i64>,
    /// The backend emits this as a number that may carry a decimal part.
    #[serde(default)]
    pub recommended_discount: f64,
    #[serde(default)]
    pub recommended_action: String,
    #[serde(default)]
    pub risk_score: f64,
}

impl RecommendationDto {
    pub fn into_domain(self) -> Recommendation {
        Recommendation {
            product_id: self.product_id,
            name: self.name,
            stock: self.stock,
            unit_price: self.unit_price,
            days_remaining: self.days_remaining,
            recommended_discount: self.recommended_discount.clamp(0.0, 100.0).round() as u8,
            recommended_action: self.recommended_action,
            risk_score: self.risk_score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NewProductBody {
    pub name: String,
    pub category_id: Option<i64>,
    pub stock: i64,
    pub unit_price: f64,
    pub supplier: Option<String>,
    pub expiration_date: Option<NaiveDate>,
}

impl From<NewProduct> for NewProductBody {
    fn from(fields: NewProduct) -> Self {
        Self {
            name: fields.name,
            category_id: fields.category_id,
            stock: fields.stock,
            unit_price: fields.unit_price,
            supplier: fields.supplier,
            expiration_date: fields.expiration_date,
        }
    }
}

/// Absent fields are omitted entirely so the backend only touches what the
/// operator actually changed.
#[derive(Debug, Serialize)]
pub struct ProductPatchBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
}

impl From<ProductPatch> for ProductPatchBody {
    fn from(patch: ProductPatch) -> Self {
        Self {
            stock: patch.stock,
            expiration_date: patch.expiration_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiscountBody {
    pub discount_percent: u8,
}
