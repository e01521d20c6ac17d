use chrono::{DateTime, Utc};

use crate::domain::product::expiry::days_remaining;
use crate::domain::product::model::Product;

/// How close to expiry a product sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WasteBucket {
    /// More than 7 days left.
    PlentyOfTime,
    /// Between 3 (exclusive) and 7 (inclusive) days left.
    Soon,
    /// 3 days or fewer, including already expired.
    Urgent,
}

impl WasteBucket {
    /// Buckets are mutually exclusive and exhaustive: every day count lands
    /// in exactly one.
    pub fn classify(days_remaining: i64) -> Self {
        if days_remaining > 7 {
            return WasteBucket::PlentyOfTime;
        }
        if days_remaining > 3 {
            return WasteBucket::Soon;
        }
        WasteBucket::Urgent
    }
}

impl std::fmt::Display for WasteBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WasteBucket::PlentyOfTime => write!(f, ">7d"),
            WasteBucket::Soon => write!(f, "3-7d"),
            WasteBucket::Urgent => write!(f, "<=3d"),
        }
    }
}

/// Aggregate near-expiry view of the catalog, recomputed in full on every
/// product-list change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WasteStats {
    /// Rounded mean of per-product day counts; products without an
    /// expiration date contribute the far-future sentinel.
    pub average_days_remaining: i64,
    pub plenty_of_time: usize,
    pub soon: usize,
    pub urgent: usize,
}

impl WasteStats {
    pub fn total(&self) -> usize {
        self.plenty_of_time + self.soon + self.urgent
    }
}

pub fn compute_stats(products: &[Product], reference: DateTime<Utc>) -> WasteStats {
    if products.is_empty() {
        return WasteStats::default();
    }

    let days: Vec<i64> = products
        .iter()
        .map(|p| days_remaining(reference, p.expiration_date))
        .collect();

    let sum: i64 = days.iter().sum();
    let average = (sum as f64 / days.len() as f64).round() as i64;

    let mut stats = WasteStats {
        average_days_remaining: average,
        ..WasteStats::default()
    };
    for d in days {
        match WasteBucket::classify(d) {
            WasteBucket::PlentyOfTime => stats.plenty_of_time += 1,
            WasteBucket::Soon => stats.soon += 1,
            WasteBucket::Urgent => stats.urgent += 1,
        }
    }
    stats
}
