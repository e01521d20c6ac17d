use std::fmt::Write;

use business::application::dashboard::controller::DashboardController;

/// Plain-text snapshot of the dashboard state. Charts and templates belong
/// to the web frontend; this rendering carries no decision logic.
pub fn render(controller: &DashboardController) -> String {
    let mut out = String::new();
    let stats = controller.waste_stats();

    let _ = writeln!(out, "Waste overview");
    let _ = writeln!(
        out,
        "  average days remaining: {}",
        stats.average_days_remaining
    );
    let _ = writeln!(
        out,
        "  >7d: {}  3-7d: {}  <=3d: {}",
        stats.plenty_of_time, stats.soon, stats.urgent
    );

    let _ = writeln!(out, "\nAt-risk products (within 14 days)");
    if controller.at_risk().is_empty() {
        let _ = writeln!(out, "  none");
    }
    for entry in controller.at_risk() {
        let _ = writeln!(
            out,
            "  [{:>4}d] #{} {} - stock {}, price {:.2}",
            entry.days_remaining,
            entry.product.id,
            entry.product.name,
            entry.product.stock,
            controller.display_price(&entry.product),
        );
    }

    let _ = writeln!(out, "\nRecommendations");
    if controller.recommendations().is_empty() {
        let _ = writeln!(out, "  none");
    }
    for rec in controller.recommendations() {
        let _ = writeln!(
            out,
            "  #{} {} - {} (risk {:.2})",
            rec.product_id, rec.name, rec.recommended_action, rec.risk_score
        );
    }

    if let Some(kpi) = &controller.analytics().kpi_overview {
        let _ = writeln!(out, "\nKPI overview: {kpi}");
    }

    out
}
