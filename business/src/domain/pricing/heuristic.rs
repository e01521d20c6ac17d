/// Markdown percentage suggested for a product, keyed on days remaining.
///
/// Bucket table, first match wins:
/// - more than 60 days: 0%
/// - 31-60 days: 10%
/// - 15-30 days: 20%
/// - 8-14 days: 30%
/// - 4-7 days: 40%
/// - 3 days or fewer (including expired): 50%
pub fn recommended_discount(days_remaining: i64) -> u8 {
    if days_remaining > 60 {
        return 0;
    }
    if days_remaining > 30 {
        return 10;
    }
    if days_remaining > 14 {
        return 20;
    }
    if days_remaining > 7 {
        return 30;
    }
    if days_remaining > 3 {
        return 40;
    }
    50
}

/// Operator-facing action label for a discount percentage.
pub fn action_label(discount: u8) -> String {
    if discount == 0 {
        return "Monitor stock (0%)".to_string();
    }
    if discount >= 40 {
        return format!("Immediate deep markdown ({discount}%)");
    }
    if discount >= 30 {
        return format!("Markdown {discount}%");
    }
    if discount >= 20 {
        return format!("Multi-buy promotion ({discount}%)");
    }
    if discount >= 10 {
        return format!("Small promotion ({discount}%)");
    }
    format!("Markdown {discount}%")
}

/// Discounted display price, rounded to currency scale (2 decimals).
pub fn preview_price(original: f64, discount: u8) -> f64 {
    let reduced = original * (1.0 - f64::from(discount) / 100.0);
    (reduced * 100.0).round() / 100.0
}
