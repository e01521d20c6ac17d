use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::model::Product;

/// Sentinel for products without an expiration date: large enough to sort
/// last and fall outside every risk bucket, finite so averages stay numeric.
pub const FAR_FUTURE_DAYS: i64 = 9_999;

/// Products within this many days of expiry appear on the at-risk list.
pub const AT_RISK_WINDOW_DAYS: i64 = 14;

const SECONDS_PER_DAY: i64 = 86_400;

/// Calculates the number of days until an expiration date, ceiling-rounded.
///
/// Returns `FAR_FUTURE_DAYS` when no date is set. Negative results mean the
/// date has already passed; callers decide how to treat them. The caller
/// supplies the reference instant so repeated calls are consistent.
pub fn days_remaining(reference: DateTime<Utc>, expiration: Option<NaiveDate>) -> i64 {
    let Some(date) = expiration else {
        return FAR_FUTURE_DAYS;
    };

    let expiry = date.and_time(NaiveTime::MIN).and_utc();
    let seconds = (expiry - reference).num_seconds();
    seconds.div_euclid(SECONDS_PER_DAY) + (seconds.rem_euclid(SECONDS_PER_DAY) != 0) as i64
}

/// A product paired with its computed days remaining.
#[derive(Debug, Clone)]
pub struct AtRiskProduct {
    pub product: Product,
    pub days_remaining: i64,
}

/// Products expiring within the risk window, most urgent first.
pub fn at_risk(products: &[Product], reference: DateTime<Utc>) -> Vec<AtRiskProduct> {
    let mut risky: Vec<AtRiskProduct> = products
        .iter()
        .map(|product| AtRiskProduct {
            days_remaining: days_remaining(reference, product.expiration_date),
            product: product.clone(),
        })
        .filter(|entry| entry.days_remaining <= AT_RISK_WINDOW_DAYS)
        .collect();

    risky.sort_by_key(|entry| entry.days_remaining);
    risky
}
