use anyhow::Result;
use logdeck::application::logs::LogQueryService;
use logdeck::application::ports::{log_source::LogSource, time::Clock};
use logdeck::config::AppConfig;
use logdeck::infrastructure::security::AdminKeyCache;
use logdeck::infrastructure::sources::HttpLogSource;
use logdeck::infrastructure::time::SystemClock;
use logdeck::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let client = reqwest::Client::builder()
        .timeout(config.upstream_timeout())
        .build()?;

    let admin_key = Arc::new(AdminKeyCache::new(
        client.clone(),
        config.auth_service_url().to_string(),
        config.admin_api_key().map(str::to_string),
    ));

    // The core service mounts its log endpoints under the master-admin
    // prefix; the auth service exposes them at its root.
    let sources: Vec<Arc<dyn LogSource>> = vec![
        Arc::new(HttpLogSource::new(
            "auth",
            client.clone(),
            config.auth_service_url(),
            Arc::clone(&admin_key),
        )),
        Arc::new(HttpLogSource::new(
            "core",
            client.clone(),
            format!("{}/admin/master", config.core_service_url()),
            Arc::clone(&admin_key),
        )),
    ];

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let logs = Arc::new(LogQueryService::new(sources, clock));

    let state = HttpState {
        logs,
        admin_key: Arc::clone(&admin_key),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
