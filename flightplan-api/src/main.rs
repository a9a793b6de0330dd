use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use flightplan_api::{app, AppState};
use flightplan_core::SeatService;
use flightplan_store::app_config::Config;
use flightplan_store::InMemoryFlightRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flightplan_api=debug,flightplan_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Flightplan API on port {}", config.server.port);

    let seat_service = SeatService::new(config.layout.clone(), config.business_rules.first_class_surcharge)
        .context("Invalid seat layout")?;
    tracing::info!(
        "Cabin layout: {} rows x {} columns, first-class surcharge {} {}",
        seat_service.layout().total_rows,
        seat_service.layout().columns.len(),
        seat_service.first_class_surcharge(),
        config.business_rules.currency
    );
    let flight_repo = InMemoryFlightRepository::seeded(
        &config.layout,
        config.business_rules.occupancy_rate,
        &config.business_rules.currency,
    )
    .context("Failed to seed flights")?;

    let app_state = AppState {
        flight_repo: Arc::new(flight_repo),
        seat_service: Arc::new(seat_service),
    };

    let app = app(app_state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
