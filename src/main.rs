mod config;
mod database;
mod models;

use config::Settings;

#[tokio::main]
async fn main() {
    // Load environment variables from config/.env
    dotenv::from_path(config::ENV_FILE).ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("🚀 Starting User Service...");

    // Settings are required; abort startup rather than defaulting
    let settings = Settings::from_env().expect("MONGO_URL must be set");

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&settings.mongo_url)
        .await
        .expect("Failed to connect to MongoDB");

    log::info!("✅ MongoDB client connected: {}", db.database().name());
}
