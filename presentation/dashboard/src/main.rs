use dotenvy::dotenv;

mod config;
mod setup;
mod view;

use business::application::dashboard::controller::DashboardController;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Dashboard Entry Point
///
/// Initializes configuration, wires the remote-store and logger adapters
/// into a dashboard controller, and renders a snapshot of the inventory
/// state. `dashboard apply <product-id> [percent]` runs the markdown
/// confirm flow for one recommendation.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies and mount the controller
    tracing::info!("Dashboard starting against {}", config.store.base_url);
    let mut container = DependencyContainer::new(&config);
    container.controller.refresh().await;

    // 5. Dispatch
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => print!("{}", view::render(&container.controller)),
        [cmd, id] if cmd == "apply" => {
            apply(&mut container.controller, id.parse()?, None).await?;
        }
        [cmd, id, percent] if cmd == "apply" => {
            apply(&mut container.controller, id.parse()?, Some(percent.parse()?)).await?;
        }
        _ => anyhow::bail!("usage: dashboard [apply <product-id> [percent]]"),
    }

    Ok(())
}

async fn apply(
    controller: &mut DashboardController,
    product_id: i64,
    percent: Option<u8>,
) -> anyhow::Result<()> {
    controller.select_recommendation(product_id)?;
    if let Some(percent) = percent {
        controller.set_manual_discount(percent)?;
    }
    controller.confirm().await?;

    if let Some(toast) = controller.notification(chrono::Utc::now()) {
        println!("{}", toast.message);
    }
    print!("{}", view::render(controller));
    Ok(())
}
