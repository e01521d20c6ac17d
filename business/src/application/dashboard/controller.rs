use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::application::dashboard::fallback::sample_catalog;
use crate::domain::logger::Logger;
use crate::domain::notification::Notification;
use crate::domain::pricing::heuristic::{action_label, preview_price};
use crate::domain::product::expiry::{AtRiskProduct, at_risk};
use crate::domain::product::model::Product;
use crate::domain::recommendation::model::Recommendation;
use crate::domain::recommendation::workflow::{PendingApplication, WorkflowError, WorkflowState};
use crate::domain::store::{NewProduct, ProductStore};
use crate::domain::waste::stats::{WasteStats, compute_stats};

/// Opaque analytics payloads consumed only for display.
#[derive(Debug, Default)]
pub struct Analytics {
    pub sales_summary: Vec<Value>,
    pub top_products: Vec<Value>,
    pub kpi_overview: Option<Value>,
    pub seasonality: Option<Value>,
    pub popular_by_season: Option<Value>,
    pub sales_by_age: Option<Value>,
}

/// Owns all session state of one dashboard view: the product collection,
/// derived waste aggregates, fetched recommendations, the confirm-flow state
/// machine, optimistic price previews, and the notification slot.
///
/// Created on view mount, dropped on unmount; never shared between views.
/// Pending preview prices are kept apart from confirmed prices and are
/// reconciled by the authoritative reload or removed on rollback.
pub struct DashboardController {
    store: Arc<dyn ProductStore>,
    logger: Arc<dyn Logger>,
    products: Vec<Product>,
    at_risk: Vec<AtRiskProduct>,
    waste_stats: WasteStats,
    recommendations: Vec<Recommendation>,
    analytics: Analytics,
    workflow: WorkflowState,
    price_previews: HashMap<i64, f64>,
    notification: Option<Notification>,
}

impl DashboardController {
    pub fn new(store: Arc<dyn ProductStore>, logger: Arc<dyn Logger>) -> Self {
        Self {
            store,
            logger,
            products: Vec::new(),
            at_risk: Vec::new(),
            waste_stats: WasteStats::default(),
            recommendations: Vec::new(),
            analytics: Analytics::default(),
            workflow: WorkflowState::Idle,
            price_previews: HashMap::new(),
            notification: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn at_risk(&self) -> &[AtRiskProduct] {
        &self.at_risk
    }

    pub fn waste_stats(&self) -> &WasteStats {
        &self.waste_stats
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    /// Preview price when an optimistic markdown is pending, confirmed price
    /// otherwise.
    pub fn display_price(&self, product: &Product) -> f64 {
        self.price_previews
            .get(&product.id)
            .copied()
            .unwrap_or(product.unit_price)
    }

    pub fn notification(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.notification
            .as_ref()
            .filter(|toast| toast.is_visible_at(now))
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self.workflow, WorkflowState::Confirming(_))
    }

    pub async fn refresh(&mut self) {
        self.load_products().await;
        self.load_recommendations().await;
        self.load_analytics().await;
    }

    /// Reloads the catalog from the store. The store is the source of truth:
    /// a successful load discards every pending price preview. A failed load
    /// degrades to the fixed sample catalog so the view keeps rendering.
    pub async fn load_products(&mut self) {
        match self.store.list_products().await {
            Ok(products) => {
                self.products = products;
                self.price_previews.clear();
            }
            Err(e) => {
                self.logger
                    .error(&format!("Product listing fetch failed: {}", e));
                self.products = sample_catalog();
            }
        }
        self.recompute_derived();
    }

    pub async fn load_recommendations(&mut self) {
        match self.store.list_recommendations().await {
            Ok(recommendations) => self.recommendations = recommendations,
            Err(e) => {
                self.logger
                    .error(&format!("Recommendations fetch failed: {}", e));
                self.recommendations = Vec::new();
            }
        }
    }

    pub async fn load_analytics(&mut self) {
        match self.store.sales_summary().await {
            Ok(rows) => self.analytics.sales_summary = rows,
            Err(e) => {
                self.logger.warn(&format!("Sales summary fetch failed: {}", e));
                self.analytics.sales_summary = Vec::new();
            }
        }
        match self.store.top_products().await {
            Ok(rows) => self.analytics.top_products = rows,
            Err(e) => {
                self.logger.warn(&format!("Top products fetch failed: {}", e));
                self.analytics.top_products = Vec::new();
            }
        }
        match self.store.kpi_overview().await {
            Ok(value) => self.analytics.kpi_overview = Some(value),
            Err(e) => {
                self.logger.warn(&format!("KPI overview fetch failed: {}", e));
                self.analytics.kpi_overview = None;
            }
        }
        match self.store.seasonality().await {
            Ok(value) => self.analytics.seasonality = Some(value),
            Err(e) => {
                self.logger.warn(&format!("Seasonality fetch failed: {}", e));
                self.analytics.seasonality = None;
            }
        }
        match self.store.popular_by_season().await {
            Ok(value) => self.analytics.popular_by_season = Some(value),
            Err(e) => {
                self.logger
                    .warn(&format!("Popular-by-season fetch failed: {}", e));
                self.analytics.popular_by_season = None;
            }
        }
        match self.store.sales_by_age_groups().await {
            Ok(value) => self.analytics.sales_by_age = Some(value),
            Err(e) => {
                self.logger.warn(&format!("Sales-by-age fetch failed: {}", e));
                self.analytics.sales_by_age = None;
            }
        }
    }

    /// Creates a product through the store, folds it into the local catalog,
    /// and refreshes recommendations so the new product gets evaluated.
    pub async fn create_product(&mut self, fields: NewProduct) {
        match self.store.create_product(fields).await {
            Ok(product) => {
                self.logger.info(&format!("Product created: {}", product.id));
                self.products.push(product);
                self.recompute_derived();
                self.load_recommendations().await;
            }
            Err(e) => {
                self.logger.error(&format!("Product creation failed: {}", e));
            }
        }
    }

    /// Picks a recommendation and enters the confirmation step, pre-filling
    /// the suggested discount and the editable product fields.
    pub fn select_recommendation(&mut self, product_id: i64) -> Result<(), WorkflowError> {
        let recommendation = self
            .recommendations
            .iter()
            .find(|r| r.product_id == product_id)
            .cloned()
            .ok_or(WorkflowError::UnknownRecommendation)?;

        let product = self.products.iter().find(|p| p.id == product_id);
        self.workflow = WorkflowState::Confirming(PendingApplication::select(recommendation, product));
        Ok(())
    }

    pub fn set_manual_discount(&mut self, percent: u8) -> Result<(), WorkflowError> {
        match &mut self.workflow {
            WorkflowState::Confirming(pending) => pending.set_manual_discount(percent),
            _ => Err(WorkflowError::NotConfirming),
        }
    }

    pub fn use_suggested_discount(&mut self) -> Result<(), WorkflowError> {
        match &mut self.workflow {
            WorkflowState::Confirming(pending) => {
                pending.use_suggested();
                Ok(())
            }
            _ => Err(WorkflowError::NotConfirming),
        }
    }

    pub fn edit_stock(&mut self, stock: i64) -> Result<(), WorkflowError> {
        match &mut self.workflow {
            WorkflowState::Confirming(pending) => {
                pending.edit_stock(stock);
                Ok(())
            }
            _ => Err(WorkflowError::NotConfirming),
        }
    }

    pub fn edit_expiration(&mut self, date: chrono::NaiveDate) -> Result<(), WorkflowError> {
        match &mut self.workflow {
            WorkflowState::Confirming(pending) => {
                pending.edit_expiration(date);
                Ok(())
            }
            _ => Err(WorkflowError::NotConfirming),
        }
    }

    /// Abandons the pending recommendation without side effects.
    pub fn cancel(&mut self) {
        self.workflow = WorkflowState::Idle;
    }

    /// Runs the confirm flow: best-effort field update, optimistic price
    /// preview, discount application, then reconcile or rollback. The
    /// workflow always lands back in Idle once the apply settles.
    ///
    /// Rejected unless a recommendation is awaiting confirmation, which also
    /// bars re-entry while a sequence is in flight.
    pub async fn confirm(&mut self) -> Result<(), WorkflowError> {
        let pending = match std::mem::replace(&mut self.workflow, WorkflowState::Applying) {
            WorkflowState::Confirming(pending) => pending,
            other => {
                self.workflow = other;
                return Err(WorkflowError::NotConfirming);
            }
        };

        let product_id = pending.recommendation.product_id;
        let Some(index) = self.products.iter().position(|p| p.id == product_id) else {
            self.logger.warn(&format!(
                "Recommendation references unknown product {}, apply abandoned",
                product_id
            ));
            self.workflow = WorkflowState::Idle;
            return Err(WorkflowError::UnknownProduct);
        };

        let discount = pending.chosen_discount();

        // Field edits are best effort: a failed update never blocks the apply.
        let patch = pending.changed_fields();
        if !patch.is_empty() {
            match self.store.update_product(product_id, patch).await {
                Ok(updated) => {
                    let product = &mut self.products[index];
                    product.stock = updated.stock;
                    product.expiration_date = updated.expiration_date;
                }
                Err(e) => {
                    self.logger.warn(&format!(
                        "Product update before discount failed for {}: {}",
                        product_id, e
                    ));
                }
            }
        }

        let name = self.products[index].name.clone();
        let original_price = self.products[index].unit_price;
        self.price_previews
            .insert(product_id, preview_price(original_price, discount));
        if let Some(row) = self
            .recommendations
            .iter_mut()
            .find(|r| r.product_id == product_id)
        {
            row.recommended_discount = discount;
            row.recommended_action = action_label(discount);
        }

        match self.store.apply_discount(product_id, discount).await {
            Ok(()) => {
                self.logger
                    .info(&format!("Discount {}% applied to product {}", discount, product_id));
                self.load_products().await;
                self.load_recommendations().await;
                self.notify(Notification::success(
                    format!("Applied {}% discount to {}", discount, name),
                    Utc::now(),
                ));
            }
            Err(e) => {
                self.logger.error(&format!(
                    "Discount application failed for product {}: {}",
                    product_id, e
                ));
                self.price_previews.remove(&product_id);
                self.load_recommendations().await;
                self.notify(Notification::failure(
                    format!("Failed to apply {}% discount to {}", discount, name),
                    Utc::now(),
                ));
            }
        }

        self.workflow = WorkflowState::Idle;
        Ok(())
    }

    fn notify(&mut self, toast: Notification) {
        self.notification = Some(toast);
    }

    fn recompute_derived(&mut self) {
        let now = Utc::now();
        self.at_risk = at_risk(&self.products, now);
        self.waste_stats = compute_stats(&self.products, now);
    }
}
