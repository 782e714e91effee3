// Pattern 2: Structural Patterns - Adapter, Facade
// Each pattern runs twice: without it, then with it.
//
// Usage: p2_structural [config.toml]

use colored::Colorize;
use std::path::PathBuf;

use pattern_catalog::structural::adapter::{
    WeatherAdapter, WeatherApi, WeatherApp, WeatherAppWithoutAdapter,
};
use pattern_catalog::structural::facade::{ControllerWithoutFacade, UserController};
use pattern_catalog::{telemetry, CatalogConfig};

// ============================================================================
// Adapter
// ============================================================================

fn adapter_without_pattern() {
    let app = WeatherAppWithoutAdapter::new(WeatherApi::new());
    println!("{}", app.show_temperature());
}

fn adapter_with_pattern() {
    let adapter = WeatherAdapter::new(WeatherApi::new());
    let app = WeatherApp::new(adapter);
    println!("{}", app.show_temperature());
}

// ============================================================================
// Facade
// ============================================================================

async fn facade_without_pattern() -> anyhow::Result<()> {
    let controller = ControllerWithoutFacade;
    let user = controller
        .register_user("John Doe", "john@example.com", "securepassword")
        .await?;
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

async fn facade_with_pattern() -> anyhow::Result<()> {
    let controller = UserController::new();
    let user = controller
        .register_user("John Doe", "john@example.com", "securepassword")
        .await?;
    println!("{}", serde_json::to_string_pretty(&user)?);

    if let Err(err) = controller
        .register_user("John Again", "john@example.com", "other")
        .await
    {
        println!("Second sign-up rejected: {}", err);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = CatalogConfig::load_or_default(config_path.as_deref())?;
    telemetry::init(&config.telemetry);

    println!("{}", "Pattern 2: Structural Patterns".bold());
    println!("===============================\n");

    println!("{}", "=== Adapter (without) ===".yellow());
    adapter_without_pattern();
    println!();

    println!("{}", "=== Adapter (with) ===".green());
    adapter_with_pattern();
    println!();

    println!("{}", "=== Facade (without) ===".yellow());
    facade_without_pattern().await?;
    println!();

    println!("{}", "=== Facade (with) ===".green());
    facade_with_pattern().await?;

    Ok(())
}
