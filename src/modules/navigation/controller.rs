use axum::{Json, extract::Query};
use schoolhub_models::{NavigationAction, NavigationQuery, NavigationResponse, Section};
use tracing::instrument;

use crate::middleware::auth::Viewer;
use crate::navigation::{Decision, decide_destination};

/// Where the caller belongs when viewing a section.
///
/// Works with or without a token: an anonymous caller is sent to login.
#[utoipa::path(
    get,
    path = "/api/navigation",
    params(NavigationQuery),
    responses(
        (status = 200, description = "Gate decision for the requested section", body = NavigationResponse)
    ),
    tag = "Navigation"
)]
#[instrument(skip(viewer))]
pub async fn get_navigation(
    Viewer(viewer): Viewer,
    Query(query): Query<NavigationQuery>,
) -> Json<NavigationResponse> {
    Json(resolve(decide_destination(&viewer, query.section), query.section))
}

fn resolve(decision: Decision, current: Section) -> NavigationResponse {
    match decision {
        Decision::Redirect(section) => NavigationResponse {
            action: NavigationAction::Redirect,
            section,
        },
        // A request always carries a resolved session, so Hold never occurs here
        Decision::Stay | Decision::Hold => NavigationResponse {
            action: NavigationAction::Stay,
            section: current,
        },
    }
}
