use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

use super::controller::{create_notification, delete_notification, get_notifications};

pub fn init_notifications_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_notifications).post(create_notification))
        .route("/{id}", delete(delete_notification))
}
