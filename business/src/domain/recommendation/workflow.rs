use chrono::NaiveDate;

use super::model::Recommendation;
use crate::domain::pricing::heuristic::recommended_discount;
use crate::domain::product::expiry::FAR_FUTURE_DAYS;
use crate::domain::product::model::Product;
use crate::domain::store::ProductPatch;

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("workflow.not_confirming")]
    NotConfirming,
    #[error("workflow.unknown_recommendation")]
    UnknownRecommendation,
    #[error("workflow.unknown_product")]
    UnknownProduct,
    #[error("workflow.invalid_discount")]
    InvalidDiscount,
}

/// Which discount value the operator has chosen to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountMode {
    Suggested,
    Manual,
}

/// Confirm-flow lifecycle for one markdown application.
///
/// Idle -> Confirming -> Applying -> Idle. The transition back to Idle is
/// unconditional once the apply settles, success or failure. Only one
/// sequence can be in flight at a time.
#[derive(Debug, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    Confirming(PendingApplication),
    Applying,
}

/// A selected recommendation awaiting operator confirmation, together with
/// the editable product fields and their pre-edit snapshot.
#[derive(Debug, Clone)]
pub struct PendingApplication {
    pub recommendation: Recommendation,
    pub suggested_discount: u8,
    pub mode: DiscountMode,
    pub manual_discount: Option<u8>,
    pub edited_stock: Option<i64>,
    pub edited_expiration: Option<NaiveDate>,
    snapshot_stock: Option<i64>,
    snapshot_expiration: Option<NaiveDate>,
}

impl PendingApplication {
    /// Selects a recommendation: derives the suggested discount from its
    /// days remaining (absent days count as far future, so 0%) and pre-fills
    /// the editable fields from the local product record when one exists.
    pub fn select(recommendation: Recommendation, product: Option<&Product>) -> Self {
        let days = recommendation.days_remaining.unwrap_or(FAR_FUTURE_DAYS);
        let suggested = recommended_discount(days);
        let snapshot_stock = product.map(|p| p.stock);
        let snapshot_expiration = product.and_then(|p| p.expiration_date);

        Self {
            recommendation,
            suggested_discount: suggested,
            mode: DiscountMode::Suggested,
            manual_discount: Some(suggested),
            edited_stock: snapshot_stock,
            edited_expiration: snapshot_expiration,
            snapshot_stock,
            snapshot_expiration,
        }
    }

    pub fn use_suggested(&mut self) {
        self.mode = DiscountMode::Suggested;
    }

    pub fn set_manual_discount(&mut self, percent: u8) -> Result<(), WorkflowError> {
        if percent > 100 {
            return Err(WorkflowError::InvalidDiscount);
        }
        self.manual_discount = Some(percent);
        self.mode = DiscountMode::Manual;
        Ok(())
    }

    pub fn edit_stock(&mut self, stock: i64) {
        self.edited_stock = Some(stock);
    }

    pub fn edit_expiration(&mut self, date: NaiveDate) {
        self.edited_expiration = Some(date);
    }

    /// The percentage the confirm flow will apply. Manual mode uses the
    /// operator's value; suggested mode falls back to the server's
    /// recommended discount when the heuristic yields 0%.
    pub fn chosen_discount(&self) -> u8 {
        match self.mode {
            DiscountMode::Manual => self.manual_discount.unwrap_or(self.suggested_discount),
            DiscountMode::Suggested => {
                if self.suggested_discount > 0 {
                    self.suggested_discount
                } else {
                    self.recommendation.recommended_discount
                }
            }
        }
    }

    /// A field counts as changed only when its edited value differs from the
    /// snapshot taken at selection time.
    pub fn changed_fields(&self) -> ProductPatch {
        ProductPatch {
            stock: self
                .edited_stock
                .filter(|s| Some(*s) != self.snapshot_stock),
            expiration_date: self
                .edited_expiration
                .filter(|d| Some(*d) != self.snapshot_expiration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;

    fn recommendation(days_remaining: Option<i64>) -> Recommendation {
        Recommendation {
            product_id: 7,
            name: "Sliced Bread".to_string(),
            stock: 45,
            unit_price: 2.10,
            days_remaining,
            recommended_discount: 15,
            recommended_action: "Markdown 15%".to_string(),
            risk_score: 0.72,
        }
    }

    fn product() -> Product {
        Product::new(NewProductProps {
            id: 7,
            name: "Sliced Bread".to_string(),
            category_id: Some(2),
            stock: 45,
            unit_price: 2.10,
            supplier: None,
            expiration_date: NaiveDate::from_ymd_opt(2026, 9, 28),
        })
        .unwrap()
    }

    #[test]
    fn should_default_to_heuristic_discount_on_selection() {
        let pending = PendingApplication::select(recommendation(Some(10)), Some(&product()));
        assert_eq!(pending.suggested_discount, 30);
        assert_eq!(pending.mode, DiscountMode::Suggested);
        assert_eq!(pending.chosen_discount(), 30);
    }

    #[test]
    fn should_default_to_zero_discount_when_days_unavailable() {
        let pending = PendingApplication::select(recommendation(None), None);
        assert_eq!(pending.suggested_discount, 0);
    }

    #[test]
    fn should_fall_back_to_server_discount_when_heuristic_yields_zero() {
        let pending = PendingApplication::select(recommendation(Some(90)), Some(&product()));
        assert_eq!(pending.suggested_discount, 0);
        assert_eq!(pending.chosen_discount(), 15);
    }

    #[test]
    fn should_prefer_manual_discount_when_set() {
        let mut pending = PendingApplication::select(recommendation(Some(10)), Some(&product()));
        pending.set_manual_discount(25).unwrap();
        assert_eq!(pending.chosen_discount(), 25);

        pending.use_suggested();
        assert_eq!(pending.chosen_discount(), 30);
    }

    #[test]
    fn should_reject_manual_discount_above_100() {
        let mut pending = PendingApplication::select(recommendation(Some(10)), Some(&product()));
        assert!(matches!(
            pending.set_manual_discount(101),
            Err(WorkflowError::InvalidDiscount)
        ));
    }

    #[test]
    fn should_prefill_editable_fields_from_local_product() {
        let pending = PendingApplication::select(recommendation(Some(10)), Some(&product()));
        assert_eq!(pending.edited_stock, Some(45));
        assert_eq!(pending.edited_expiration, product().expiration_date);
    }

    #[test]
    fn should_leave_editable_fields_unset_without_local_product() {
        let pending = PendingApplication::select(recommendation(Some(10)), None);
        assert_eq!(pending.edited_stock, None);
        assert_eq!(pending.edited_expiration, None);
    }

    #[test]
    fn should_report_no_changes_when_fields_untouched() {
        let pending = PendingApplication::select(recommendation(Some(10)), Some(&product()));
        assert!(pending.changed_fields().is_empty());
    }

    #[test]
    fn should_report_no_changes_when_edit_equals_current_value() {
        let mut pending = PendingApplication::select(recommendation(Some(10)), Some(&product()));
        pending.edit_stock(45);
        assert!(pending.changed_fields().is_empty());
    }

    #[test]
    fn should_include_only_differing_fields_in_patch() {
        let mut pending = PendingApplication::select(recommendation(Some(10)), Some(&product()));
        pending.edit_stock(30);

        let patch = pending.changed_fields();
        assert_eq!(patch.stock, Some(30));
        assert_eq!(patch.expiration_date, None);
    }

    #[test]
    fn should_include_edited_expiration_when_it_differs() {
        let mut pending = PendingApplication::select(recommendation(Some(10)), Some(&product()));
        pending.edit_expiration(NaiveDate::from_ymd_opt(2026, 10, 3).unwrap());

        let patch = pending.changed_fields();
        assert_eq!(patch.stock, None);
        assert_eq!(
            patch.expiration_date,
            NaiveDate::from_ymd_opt(2026, 10, 3)
        );
    }

    #[test]
    fn workflow_state_defaults_to_idle() {
        assert!(matches!(WorkflowState::default(), WorkflowState::Idle));
    }
}
