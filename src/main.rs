use std::error::Error;
use std::sync::Arc;

use paddock::adapters::http::{app_router, AppState};
use paddock::adapters::memory::{
    InMemoryContentReader, InMemoryEventReader, InMemorySubscriptionReader, InMemoryVenueReader,
};
use paddock::adapters::postgres::{
    PostgresContentReader, PostgresEventReader, PostgresSubscriptionReader, PostgresVenueReader,
};
use paddock::config::{AppConfig, DatabaseConfig};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, Registry};

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));

    if config.is_production() {
        Registry::default()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        Registry::default()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn postgres_state(
    database: &DatabaseConfig,
    config: &AppConfig,
) -> Result<AppState, Box<dyn Error>> {
    let pool = database.pool_options().connect(&database.url).await?;
    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Migrations applied");
    }

    Ok(AppState {
        subscription_reader: Arc::new(PostgresSubscriptionReader::new(pool.clone())),
        content_reader: Arc::new(PostgresContentReader::new(pool.clone())),
        venue_reader: Arc::new(PostgresVenueReader::new(pool.clone())),
        event_reader: Arc::new(PostgresEventReader::new(pool)),
        listing: Arc::new(config.listing.clone()),
    })
}

fn in_memory_state(config: &AppConfig) -> AppState {
    AppState {
        subscription_reader: Arc::new(InMemorySubscriptionReader::new()),
        content_reader: Arc::new(InMemoryContentReader::new()),
        venue_reader: Arc::new(InMemoryVenueReader::new()),
        event_reader: Arc::new(InMemoryEventReader::new()),
        listing: Arc::new(config.listing.clone()),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config);

    let state = match &config.database {
        Some(database) => postgres_state(database, &config).await?,
        None => {
            warn!("No database configured; serving empty in-memory stores");
            in_memory_state(&config)
        }
    };

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Paddock listening");

    axum::serve(listener, app_router(state, &config.server))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
