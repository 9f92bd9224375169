//! Player Back binary entrypoint wiring configuration, the player store, and the REST layer.

use std::{env, net::SocketAddr, sync::Arc};

use anyhow::Context;
use player_back::{
    config::AppConfig,
    dao::player_store::InMemoryPlayerStore,
    routes,
    state::{AppState, Clock, SystemClock},
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // The local offset can only be read while the process is still single-threaded.
    let clock = SystemClock::detect();
    info!(offset = %clock.offset(), "local clock offset detected");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?
        .block_on(serve(clock))
}

/// Load configuration, seed the player store, and serve HTTP until shutdown.
async fn serve(clock: SystemClock) -> anyhow::Result<()> {
    let config = AppConfig::load();
    let store =
        InMemoryPlayerStore::with_limit(config.max_players(), config.seed_entities(clock.now()));
    info!(
        players = store.len(),
        max_players = store.max_players(),
        "player store seeded"
    );

    let app_state = AppState::new(Arc::new(store), Arc::new(clock));
    let app = routes::app(app_state);

    let port = env::var("PORT")
        .or_else(|_| env::var("SERVER_PORT"))
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("shutdown signal received");
}
