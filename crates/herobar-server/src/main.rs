use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use herobar_core::{LocationProvider, NullLocation, StaticLocation};
use herobar_server::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = herobar_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let registry = Arc::new(herobar_core::load_pages(&config.pages_path)?);
    tracing::info!(
        pages = registry.len(),
        path = %config.pages_path.display(),
        "page registry loaded"
    );

    let provider: Arc<dyn LocationProvider> = if config.has_location() {
        Arc::new(StaticLocation {
            name: config.location_name.clone(),
            telephone: config.site_phone.clone(),
        })
    } else {
        tracing::warn!("no location configured; copy keeps raw [location] tokens");
        Arc::new(NullLocation)
    };

    let engine = Arc::new(herobar_core::Engine::new(provider));
    let app = build_app(AppState { engine, registry });

    tracing::info!(addr = %config.bind_addr, env = %config.env, "starting server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
