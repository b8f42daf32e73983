//! Feature modules. Each has `controller.rs` (handlers), `service.rs`
//! (remote calls), `model.rs` (re-exported models) and `router.rs`.

pub mod auth;
pub mod exams;
pub mod lectures;
pub mod navigation;
pub mod notifications;
pub mod push;
pub mod teachers;

use anyhow::anyhow;
use schoolhub_core::AppError;
use serde::Serialize;

/// Rejects partial updates that carry no fields.
pub(crate) fn ensure_changes<T: Serialize>(dto: &T) -> Result<(), AppError> {
    let value = serde_json::to_value(dto).map_err(AppError::internal)?;
    match value.as_object() {
        Some(fields) if !fields.is_empty() => Ok(()),
        _ => Err(AppError::bad_request(anyhow!("No fields to update"))),
    }
}
