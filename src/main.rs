use dotenvy::dotenv;
use product_categories::{
    bot::framework::run_bot,
    config::{catalog::load_catalog, settings::Settings},
    core::catalog::Catalog,
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Settings
    let settings = Settings::from_env()
        .inspect_err(|e| error!("Failed to read settings (is DISCORD_BOT_TOKEN set?): {}", e))?;

    // 4. Load and validate reference data; integrity problems stop startup here
    let catalog = load_catalog(&settings.catalog_path)
        .and_then(Catalog::from_file)
        .inspect_err(|e| error!("Failed to load catalog: {}", e))?;
    info!(
        products = catalog.products().len(),
        "Catalog ready from {}",
        settings.catalog_path.display()
    );

    // 5. Run the bot
    run_bot(settings, catalog).await
}
