use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_lecture, delete_lecture, get_lecture_by_id, get_lectures, update_lecture};

pub fn init_lectures_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_lectures).post(create_lecture))
        .route(
            "/{id}",
            get(get_lecture_by_id)
                .put(update_lecture)
                .delete(delete_lecture),
        )
}
