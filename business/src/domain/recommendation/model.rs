/// Markdown recommendation produced by the backend's waste analysis.
///
/// Session-scoped: fetched on demand, consumed or discarded after the
/// operator decides, never persisted on the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub product_id: i64,
    pub name: String,
    pub stock: i64,
    pub unit_price: f64,
    /// May be stale relative to the current time; recomputed server-side.
    pub days_remaining: Option<i64>,
    pub recommended_discount: u8,
    pub recommended_action: String,
    /// Server-computed ranking signal, pass-through only.
    pub risk_score: f64,
}
