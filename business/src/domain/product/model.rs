use chrono::NaiveDate;

use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category_id: Option<i64>,
    pub stock: i64,
    pub unit_price: f64,
    pub supplier: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub warehouse_location: Option<String>,
    /// Server-computed sales metric, read-only on the client.
    pub sales_volume: Option<f64>,
    /// Server-computed turnover metric, read-only on the client.
    pub turnover_rate: Option<f64>,
}

pub struct NewProductProps {
    pub id: i64,
    pub name: String,
    pub category_id: Option<i64>,
    pub stock: i64,
    pub unit_price: f64,
    pub supplier: Option<String>,
    pub expiration_date: Option<NaiveDate>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if props.stock < 0 {
            return Err(ProductError::NegativeStock);
        }
        if props.unit_price < 0.0 {
            return Err(ProductError::NegativePrice);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            category_id: props.category_id,
            stock: props.stock,
            unit_price: props.unit_price,
            supplier: props.supplier,
            expiration_date: props.expiration_date,
            warehouse_location: None,
            sales_volume: None,
            turnover_rate: None,
        })
    }

    /// Constructor for data the remote store already owns (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_store(
        id: i64,
        name: String,
        category_id: Option<i64>,
        stock: i64,
        unit_price: f64,
        supplier: Option<String>,
        expiration_date: Option<NaiveDate>,
        warehouse_location: Option<String>,
        sales_volume: Option<f64>,
        turnover_rate: Option<f64>,
    ) -> Self {
        Self {
            id,
            name,
            category_id,
            stock,
            unit_price,
            supplier,
            expiration_date,
            warehouse_location,
            sales_volume,
            turnover_rate,
        }
    }
}
