use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde_json::Value;

use business::domain::errors::StoreError;
use business::domain::product::model::Product;
use business::domain::recommendation::model::Recommendation;
use business::domain::store::{NewProduct, ProductPatch, ProductStore};

use crate::client::StoreClient;
use crate::dto::{DiscountBody, NewProductBody, ProductDto, ProductPatchBody, RecommendationDto};
use crate::normalize::{unwrap_item, unwrap_list};

/// `ProductStore` adapter over the JSON-over-HTTP backend API.
pub struct HttpProductStore {
    client: StoreClient,
}

impl HttpProductStore {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    async fn into_json(response: Response) -> Result<Value, StoreError> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }
        if !response.status().is_success() {
            return Err(StoreError::Rejected);
        }
        response.json().await.map_err(|_| StoreError::MalformedResponse)
    }

    async fn get_json(&self, url: String) -> Result<Value, StoreError> {
        let response = self
            .client
            .client
            .get(url)
            .send()
            .await
            .map_err(|_| StoreError::Fetch)?;
        Self::into_json(response).await
    }

    fn parse_product(payload: Value) -> Result<Product, StoreError> {
        let item = unwrap_item(payload, "product");
        serde_json::from_value::<ProductDto>(item)
            .map(ProductDto::into_domain)
            .map_err(|_| StoreError::MalformedResponse)
    }
}

#[async_trait]
impl ProductStore for HttpProductStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let payload = self.get_json(self.client.products_url()).await?;
        unwrap_list(payload, &["products"])
            .into_iter()
            .map(|item| {
                serde_json::from_value::<ProductDto>(item)
                    .map(ProductDto::into_domain)
                    .map_err(|_| StoreError::MalformedResponse)
            })
            .collect()
    }

    async fn create_product(&self, fields: NewProduct) -> Result<Product, StoreError> {
        let response = self
            .client
            .client
            .post(self.client.create_product_url())
            .json(&NewProductBody::from(fields))
            .send()
            .await
            .map_err(|_| StoreError::Fetch)?;

        Self::parse_product(Self::into_json(response).await?)
    }

    async fn update_product(&self, id: i64, patch: ProductPatch) -> Result<Product, StoreError> {
        let response = self
            .client
            .client
            .patch(self.client.product_url(id))
            .json(&ProductPatchBody::from(patch))
            .send()
            .await
            .map_err(|_| StoreError::Fetch)?;

        Self::parse_product(Self::into_json(response).await?)
    }

    async fn apply_discount(&self, id: i64, discount_percent: u8) -> Result<(), StoreError> {
        let response = self
            .client
            .client
            .post(self.client.apply_discount_url(id))
            .json(&DiscountBody { discount_percent })
            .send()
            .await
            .map_err(|_| StoreError::Fetch)?;

        // Acknowledgement only: the payload is discarded, the workflow
        // reloads authoritative state itself.
        Self::into_json(response).await.map(|_| ())
    }

    async fn list_recommendations(&self) -> Result<Vec<Recommendation>, StoreError> {
        let payload = self.get_json(self.client.recommendations_url()).await?;
        unwrap_list(payload, &["recommendations"])
            .into_iter()
            .map(|item| {
                serde_json::from_value::<RecommendationDto>(item)
                    .map(RecommendationDto::into_domain)
                    .map_err(|_| StoreError::MalformedResponse)
            })
            .collect()
    }

    async fn sales_summary(&self) -> Result<Vec<Value>, StoreError> {
        let payload = self.get_json(self.client.sales_summary_url()).await?;
        Ok(unwrap_list(payload, &["daily", "data"]))
    }

    async fn top_products(&self) -> Result<Vec<Value>, StoreError> {
        let payload = self.get_json(self.client.top_products_url()).await?;
        Ok(unwrap_list(payload, &["top_products", "data"]))
    }

    async fn kpi_overview(&self) -> Result<Value, StoreError> {
        self.get_json(self.client.kpi_overview_url()).await
    }

    async fn seasonality(&self) -> Result<Value, StoreError> {
        self.get_json(self.client.seasonality_url()).await
    }

    async fn popular_by_season(&self) -> Result<Value, StoreError> {
        self.get_json(self.client.popular_by_season_url()).await
    }

    async fn sales_by_age_groups(&self) -> Result<Value, StoreError> {
        self.get_json(self.client.sales_by_age_groups_url()).await
    }
}
