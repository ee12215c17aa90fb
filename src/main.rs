use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pet_store::infrastructure::AppState;
use pet_store::{config, db, seed, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pet_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    // Check for --profile CLI argument
    let args: Vec<String> = std::env::args().collect();
    let profile = args
        .iter()
        .position(|arg| arg == "--profile")
        .and_then(|pos| args.get(pos + 1))
        .cloned();

    let config = config::Config::from_env_with_profile(profile);
    tracing::info!("Starting with profile '{}'", config.profile);

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    // Check for seed flag
    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_data(&db).await {
            tracing::error!("Failed to seed data: {}", e);
        }
    }

    let app = server::build_router(AppState::new(db), &config.cors_allowed_origins);

    if let Err(e) = server::start_server(app, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
