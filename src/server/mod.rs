//! HTTP server for the re-invite page.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{Router, routing::get};
use log::info;
use tower_http::trace::TraceLayer;

use crate::config::{Catalog, Organization, Settings};
use crate::reinvite::ReinviteClient;

pub use error::ApiError;

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Organization the form serves
    pub organization: Arc<Organization>,
    pub client: ReinviteClient,
}

impl AppState {
    /// Resolve the configured organization from `catalog` and build the
    /// endpoint client.
    pub fn from_settings(settings: &Settings, catalog: &Catalog) -> anyhow::Result<Self> {
        let organization = catalog
            .organization(&settings.organization)
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!("Organization {} is not in the catalog", settings.organization)
            })?;

        let client = ReinviteClient::builder()
            .endpoint(settings.endpoint.clone())
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            organization: Arc::new(organization),
            client,
        })
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::show_form).post(handlers::submit_form))
        .route("/api/assignments", get(handlers::list_assignments))
        .route("/api/repo-name", get(handlers::repo_name))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until the process exits.
pub async fn serve(settings: &Settings, state: AppState) -> anyhow::Result<()> {
    let addr = settings.listen_addr()?;
    info!(
        "Serving re-invite form for {} on http://{addr} (endpoint {})",
        state.organization.name,
        state.client.endpoint()
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
