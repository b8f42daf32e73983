//! Extractors for authentication and section-based authorization.
//!
//! - [`auth`]: [`AuthUser`](auth::AuthUser) validates the bearer token;
//!   [`Viewer`](auth::Viewer) yields the caller's session state without rejecting
//! - [`role`]: `RequireMember`, `RequireStaff` and `RequireAdmin` guards built
//!   on the navigation gate
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::role::RequireStaff;
//!
//! async fn create_exam(
//!     State(state): State<AppState>,
//!     RequireStaff(auth_user): RequireStaff,
//!     ValidatedJson(dto): ValidatedJson<CreateExamDto>,
//! ) -> Result<Json<Exam>, AppError> {
//!     // Only teachers and admins get here
//! }
//! ```

pub mod auth;
pub mod role;
