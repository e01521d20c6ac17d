use chrono::NaiveDate;

use crate::domain::product::model::Product;

/// Fixed sample catalog shown when the product listing cannot be fetched,
/// so the dashboard keeps rendering with degraded data instead of failing.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::from_store(
            1,
            "Plain Yogurt".to_string(),
            Some(1),
            120,
            1.20,
            Some("Alpine Dairy".to_string()),
            NaiveDate::from_ymd_opt(2026, 10, 5),
            Some("A1-B3".to_string()),
            Some(25.0),
            Some(0.8),
        ),
        Product::from_store(
            2,
            "Sliced Bread".to_string(),
            Some(2),
            45,
            2.10,
            Some("Martin Bakery".to_string()),
            NaiveDate::from_ymd_opt(2026, 9, 28),
            Some("B2-C4".to_string()),
            Some(12.0),
            Some(0.6),
        ),
        Product::from_store(
            3,
            "Golden Apples".to_string(),
            Some(3),
            80,
            2.50,
            Some("Organic Orchards".to_string()),
            NaiveDate::from_ymd_opt(2026, 10, 10),
            Some("D1-E2".to_string()),
            Some(15.0),
            Some(0.5),
        ),
        Product::from_store(
            5,
            "Semi-skimmed Milk".to_string(),
            Some(1),
            65,
            1.05,
            Some("Alpine Dairy".to_string()),
            NaiveDate::from_ymd_opt(2026, 10, 15),
            Some("A2-B1".to_string()),
            Some(18.0),
            Some(0.9),
        ),
    ]
}
