use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{EnvFilter, fmt};

use event_api::modules::events::core::model::event_schema;
use event_api::shared::infrastructure::authorization::Authorizer;
use event_api::shared::infrastructure::authorization::static_tokens::{
    PermitAllAuthorizer, StaticTokenAuthorizer,
};
use event_api::shared::infrastructure::record_store::RecordStore;
use event_api::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use event_api::shell::config::HttpConfig;
use event_api::shell::http::router;
use event_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = HttpConfig::from_env()?;

    // In-memory store for now; swapping in a persistent backend only
    // changes this wiring.
    let store: Arc<dyn RecordStore> = Arc::new(InMemoryRecordStore::new());
    store.register_schema(event_schema()).await?;

    let authorizer: Arc<dyn Authorizer> = if config.admin_tokens.is_empty() {
        tracing::warn!("ADMIN_TOKENS is not set; every caller is treated as an administrator");
        Arc::new(PermitAllAuthorizer)
    } else {
        Arc::new(StaticTokenAuthorizer::new(config.admin_tokens.clone()))
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(AppState::new(store, authorizer)).layer(cors);

    tracing::info!("event API listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
