use dotenvy::dotenv;
use homer::{
    config::{database, seed, settings::AppConfig},
    errors::Result,
    server::{AppState, run_server},
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = AppConfig::load()?;
    info!("Successfully processed application configuration.");

    // 4. Initialize the database
    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database schema ensured."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed default categories and tags (if a seed file is present)
    if std::path::Path::new(&app_config.seed_path).exists() {
        let seed_config = seed::load_config(&app_config.seed_path)?;
        seed::seed_defaults(&db, &seed_config)
            .await
            .inspect_err(|e| error!("Failed to seed defaults: {}", e))?;
    } else {
        warn!(
            "Seed file {} not found, starting without default classification",
            app_config.seed_path
        );
    }

    // 6. Run the HTTP server
    let state = AppState::new(db, app_config);
    run_server(state).await?;

    Ok(())
}
