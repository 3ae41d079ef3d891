mod acquisition;
mod config;
mod errors;
mod extraction;
mod ner;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ner::{EntityTagger, StatisticalTagger};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cvparse v{}", env!("CARGO_PKG_VERSION"));

    std::fs::create_dir_all(&config.upload_dir).with_context(|| {
        format!(
            "Failed to create upload directory {}",
            config.upload_dir.display()
        )
    })?;
    info!("Upload directory: {}", config.upload_dir.display());

    // Load the entity tagger once; every request shares it read-only.
    let tagger = load_tagger(&config)?;

    let state = AppState {
        config: config.clone(),
        tagger,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_tagger(config: &Config) -> Result<Arc<dyn EntityTagger>> {
    let tagger = match &config.given_names_path {
        Some(path) => StatisticalTagger::from_given_names_file(path)?,
        None => ner::default_tagger().clone(),
    };
    info!(
        "Entity tagger loaded ({} given names)",
        tagger.given_name_count()
    );
    Ok(Arc::new(tagger))
}
