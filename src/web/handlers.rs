use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Form;
use tracing::{error, info, warn};

use crate::domain::model::CobjFormInput;
use crate::web::views::{HomepageTemplate, UpdatesTemplate};
use crate::web::ServerState;

const HOME_TITLE: &str = "Home | Integrating With HubSpot I Practicum";
const FORM_TITLE: &str = "Update Custom Object Form | Integrating With HubSpot I Practicum";

/// Fixed page size of the list view; there is no pagination.
const LIST_LIMIT: u32 = 100;
const LIST_PROPERTIES: &str = "name,bio,species";

/// GET / — fetch custom object records and render the homepage.
///
/// Upstream problems never surface to the caller: missing token and failed
/// calls both render a normal page with an empty list.
pub async fn list_cobjs(State(state): State<Arc<ServerState>>) -> HomepageTemplate {
    let Some(crm) = &state.crm else {
        warn!("PRIVATE_APP_ACCESS not set; rendering homepage with empty data");
        return HomepageTemplate {
            title: HOME_TITLE,
            data: Vec::new(),
        };
    };

    let data = match crm.list_records(LIST_LIMIT, LIST_PROPERTIES).await {
        Ok(records) => records,
        Err(e) => {
            error!("❌ Error fetching custom objects from HubSpot: {}", e);
            Vec::new()
        }
    };

    HomepageTemplate {
        title: HOME_TITLE,
        data,
    }
}

/// GET /updates and GET /update-cobj — the static create/update form.
pub async fn show_update_form() -> UpdatesTemplate {
    UpdatesTemplate { title: FORM_TITLE }
}

/// POST /update-cobj — forward the form to HubSpot, then send the user home.
///
/// The upstream call happens at most once; success, skipped call, and
/// failure all end in the same redirect.
pub async fn submit_cobj(
    State(state): State<Arc<ServerState>>,
    Form(input): Form<CobjFormInput>,
) -> impl IntoResponse {
    let properties = input.into_properties();
    info!("Received custom object data: {:?}", properties);

    if let Some(crm) = &state.crm {
        if let Err(e) = crm.create_record(properties).await {
            error!("❌ Error creating custom object in HubSpot: {}", e);
        }
    } else {
        warn!("PRIVATE_APP_ACCESS is not set; skipping HubSpot API call");
    }

    redirect_to_home()
}

// axum 的 Redirect 只提供 303/307/308，這裡要的是傳統的 302。
fn redirect_to_home() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/")])
}
