//! Section-based route guards.
//!
//! Every protected route group is bound to the sections allowed to use it.
//! The guard asks the navigation gate where the caller belongs: staying in
//! an allowed section lets the request through, being sent to login is a
//! 401, being sent anywhere else is a 403.

use schoolhub_core::AppError;
use schoolhub_models::{AuthState, Section};

use crate::metrics::track_authorization_check;
use crate::navigation::{Decision, decide_destination};

pub fn authorize(auth: &AuthState, sections: &[Section]) -> Result<(), AppError> {
    let role = auth.role().map(|r| r.as_str()).unwrap_or("none");
    let mut home = None;

    for &section in sections {
        match decide_destination(auth, section) {
            Decision::Stay => {
                track_authorization_check(true, role);
                return Ok(());
            }
            Decision::Redirect(Section::Login) | Decision::Hold => {
                track_authorization_check(false, role);
                return Err(AppError::unauthorized("Authentication required"));
            }
            Decision::Redirect(target) => home = Some(target),
        }
    }

    track_authorization_check(false, role);
    let allowed = sections
        .iter()
        .map(Section::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Err(AppError::forbidden(format!(
        "Access denied. Allowed sections: {}; your section is {}",
        allowed,
        home.map(|s| s.as_str()).unwrap_or("login")
    )))
}

/// Declares an extractor that authenticates the caller and admits only the
/// listed sections.
#[macro_export]
macro_rules! require_sections {
    ($name:ident, [$($section:expr),+ $(,)?]) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = schoolhub_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = <$crate::middleware::auth::AuthUser as axum::extract::FromRequestParts<
                    $crate::state::AppState,
                >>::from_request_parts(parts, state)
                .await?;

                $crate::middleware::role::authorize(&auth_user.auth_state(), &[$($section),+])?;

                Ok($name(auth_user))
            }
        }
    };
}

// Any signed-in member of the school
require_sections!(
    RequireMember,
    [Section::Student, Section::Teacher, Section::Admin]
);
// Teachers and admins
require_sections!(RequireStaff, [Section::Teacher, Section::Admin]);
require_sections!(RequireAdmin, [Section::Admin]);
