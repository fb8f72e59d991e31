use anyhow::{Context, Result};
use lumezza_catalog::application::{
    ports::{
        contact::{ContactEnvelope, ContactForwarder},
        images::ProductImageInventory,
        time::Clock,
    },
    services::ApplicationServices,
};
use lumezza_catalog::config::AppConfig;
use lumezza_catalog::domain::product::ProductReadRepository;
use lumezza_catalog::infrastructure::{
    catalog::JsonFileCatalogLoader,
    contact::{FormspreeForwarder, LogOnlyForwarder},
    images::FsProductImageInventory,
    repositories::InMemoryProductRepository,
    time::SystemClock,
};
use lumezza_catalog::presentation::http::{
    middleware::rate_limit::ContactRateLimit, routes::build_router, state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    // Loads `.env` first so `RUST_LOG` from it reaches the subscriber.
    let config = AppConfig::from_env()?;
    init_tracing();

    let catalog = JsonFileCatalogLoader::new(config.catalog_path())
        .load()
        .await
        .context("loading product catalog")?;

    let product_repo: Arc<dyn ProductReadRepository> =
        Arc::new(InMemoryProductRepository::new(catalog));
    let image_inventory: Arc<dyn ProductImageInventory> =
        Arc::new(FsProductImageInventory::new(config.product_image_dir()));
    let contact_forwarder = build_contact_forwarder(&config)?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let envelope = ContactEnvelope {
        subject: config.contact_subject().to_string(),
        recipient: config.contact_recipient().map(str::to_string),
    };

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&product_repo),
        Arc::clone(&image_inventory),
        Arc::clone(&contact_forwarder),
        envelope,
        Arc::clone(&clock),
        config.site_base_url(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
        allowed_origins: config.allowed_origins().to_vec(),
        contact_rate_limit: ContactRateLimit {
            replenish_every: config.contact_rate_limit_period(),
            burst: config.contact_rate_limit_burst(),
        },
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn build_contact_forwarder(config: &AppConfig) -> Result<Arc<dyn ContactForwarder>> {
    match config.contact_endpoint() {
        Some(endpoint) => {
            let forwarder = FormspreeForwarder::new(endpoint, config.contact_timeout())?;
            tracing::info!(endpoint, "contact relay enabled");
            Ok(Arc::new(forwarder))
        }
        None => {
            tracing::warn!("CONTACT_ENDPOINT not set; contact submissions will only be logged");
            Ok(Arc::new(LogOnlyForwarder))
        }
    }
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
