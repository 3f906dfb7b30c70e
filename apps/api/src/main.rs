mod config;
mod db;
mod errors;
mod matching;
mod models;
mod recommendation;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::matching::composite::ScoringWeights;
use crate::matching::keywords::SkillVocabulary;
use crate::matching::scorer::KeywordMatchScorer;
use crate::recommendation::orchestrator::RecommendationService;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::memory::MemoryStore;
use crate::store::postgres::PgStore;
use crate::store::{demo, JobOfferRepository, RecommendationRepository, SeekerRepository};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    let vocabulary = match &config.skill_vocabulary_path {
        Some(path) => SkillVocabulary::from_json_file(path)?,
        None => SkillVocabulary::default(),
    };
    info!("Skill vocabulary loaded ({} terms)", vocabulary.len());
    let scorer = Arc::new(KeywordMatchScorer::new(vocabulary, ScoringWeights::default()));

    let recommendations = match &config.database_url {
        Some(url) => {
            let store = Arc::new(PgStore::new(create_pool(url).await?));
            info!("PostgreSQL store initialized");
            service_over(store, scorer)
        }
        None => {
            let store = if config.seed_demo_data {
                MemoryStore::with_catalogue(demo::job_offers(), demo::job_seekers())
            } else {
                MemoryStore::new()
            };
            info!(
                seeded = config.seed_demo_data,
                "In-memory store initialized"
            );
            service_over(Arc::new(store), scorer)
        }
    };

    let state = AppState {
        config: config.clone(),
        recommendations,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: restrict allowed origins once a frontend host is fixed
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// One store instance backs every repository seam.
fn service_over<S>(store: Arc<S>, scorer: Arc<KeywordMatchScorer>) -> RecommendationService
where
    S: JobOfferRepository + SeekerRepository + RecommendationRepository + 'static,
{
    RecommendationService::new(store.clone(), store.clone(), store, scorer)
}
