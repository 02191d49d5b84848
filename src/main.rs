use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uisyllabi::config::{AppConfig, StoreBackend};
use uisyllabi::routes::router;
use uisyllabi::state::AppState;
use uisyllabi::store::{SqliteStoreFactory, StoreFactory, SupabaseFactory};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "uisyllabi=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;
    info!("using {} store, table {}", config.backend.name(), config.courses_table);

    let stores: Arc<dyn StoreFactory> = match config.backend {
        StoreBackend::Supabase(supabase) => Arc::new(SupabaseFactory::new(supabase)?),
        StoreBackend::Sqlite { database_url } => {
            let options = database_url.parse::<SqliteConnectOptions>()?.create_if_missing(true);
            let pool = SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?;

            sqlx::migrate!("./migrations").run(&pool).await?;
            Arc::new(SqliteStoreFactory::new(pool))
        }
    };

    let state = AppState::new(stores, config.courses_table);

    let app = router(state);

    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
