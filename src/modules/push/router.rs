use axum::{
    Router,
    http::{HeaderName, HeaderValue, header},
    routing::post,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;

use super::controller::{preflight, send_push_notification};

pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Function routes, mounted under `/functions/v1`.
///
/// Every response carries permissive cross-origin headers, pre-flight included.
pub fn init_functions_router() -> Router<AppState> {
    Router::new()
        .route(
            "/send-push-notification",
            post(send_push_notification).options(preflight),
        )
        .layer(cors_header(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(cors_header(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
}

fn cors_header(name: HeaderName, value: HeaderValue) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, value)
}
