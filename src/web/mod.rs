pub mod handlers;
pub mod views;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::adapters::hubspot::HubSpotClient;
use crate::config::AppConfig;
use crate::domain::ports::CrmClient;

/// Immutable per-process state shared by all handlers. `crm` is `None` when
/// no access token was configured; handlers then degrade to empty views and
/// skipped writes.
pub struct ServerState {
    pub crm: Option<Arc<dyn CrmClient>>,
}

impl ServerState {
    pub fn new(config: &AppConfig, access_token: Option<String>) -> Self {
        let crm = access_token.map(|token| {
            Arc::new(HubSpotClient::new(
                &config.hubspot_base_url,
                &config.object_type,
                token,
            )) as Arc<dyn CrmClient>
        });

        Self { crm }
    }
}

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_cobjs))
        .route("/updates", get(handlers::show_update_form))
        .route(
            "/update-cobj",
            get(handlers::show_update_form).post(handlers::submit_cobj),
        )
        .with_state(state)
}
