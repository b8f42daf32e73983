use anyhow::anyhow;
use schoolhub_core::AppError;
use schoolhub_models::Section;
use schoolhub_remote::{AuthSession, RemoteClient, RemoteError};
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::metrics::{track_user_login_failure, track_user_login_success, track_user_registered};
use crate::modules::auth::model::{AuthState, Identity, LoginRequest, LoginResponse, RegisterRequest};
use crate::navigation::home_section;

const USERS_TABLE: &str = "users";

pub struct AuthService;

impl AuthService {
    /// Profile row of a user, if one exists.
    #[instrument(skip(remote))]
    pub async fn fetch_identity(
        remote: &RemoteClient,
        user_id: Uuid,
    ) -> Result<Option<Identity>, AppError> {
        Ok(remote
            .from(USERS_TABLE)
            .select("*")
            .eq("id", user_id)
            .fetch_optional()
            .await?)
    }

    /// Password sign-in followed by the profile lookup.
    ///
    /// An account without a profile row cannot use the app.
    #[instrument(skip(remote, password))]
    pub async fn sign_in(
        remote: &RemoteClient,
        email: &str,
        password: &str,
    ) -> Result<(AuthSession, Identity), AppError> {
        let session = match remote.auth().sign_in_with_password(email, password).await {
            Ok(session) => session,
            Err(e) => {
                track_user_login_failure("invalid_credentials");
                return Err(e.into());
            }
        };

        let user_remote = remote.as_user(&session.access_token);
        let identity = Self::fetch_identity(&user_remote, session.user.id)
            .await?
            .ok_or_else(|| {
                track_user_login_failure("missing_profile");
                AppError::forbidden("No profile found for this account")
            })?;

        Ok((session, identity))
    }

    pub async fn login(remote: &RemoteClient, dto: LoginRequest) -> Result<LoginResponse, AppError> {
        let (session, identity) = Self::sign_in(remote, &dto.email, &dto.password).await?;

        let destination =
            home_section(&AuthState::signed_in(identity.clone())).unwrap_or(Section::Login);
        let role = identity.role.map(|r| r.as_str()).unwrap_or("none");
        track_user_login_success(role);
        info!(user_id = %identity.id, %destination, "User signed in");

        Ok(LoginResponse {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_in: session.expires_in,
            user: identity,
            destination,
        })
    }

    /// Identity behind a stored access token.
    ///
    /// A token the auth service rejects resolves to `None`; other failures
    /// propagate.
    #[instrument(skip_all)]
    pub async fn restore(
        remote: &RemoteClient,
        access_token: &str,
    ) -> Result<Option<Identity>, AppError> {
        let user = match remote.auth().get_user(access_token).await {
            Ok(user) => user,
            Err(RemoteError::Api { status: 401 | 403, message }) => {
                warn!(%message, "Stored session rejected");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        Self::fetch_identity(&remote.as_user(access_token), user.id).await
    }

    /// Creates an account and its profile row. `remote` must act as an admin.
    #[instrument(skip(remote, dto), fields(email = %dto.email, role = %dto.role))]
    pub async fn register(remote: &RemoteClient, dto: RegisterRequest) -> Result<Identity, AppError> {
        let existing: Option<Identity> = remote
            .from(USERS_TABLE)
            .select("*")
            .eq_ignore_case("email", dto.email.as_str())
            .fetch_optional()
            .await?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow!(
                "An account with this email already exists"
            )));
        }

        let user = remote
            .auth()
            .sign_up(
                dto.email.as_str(),
                &dto.password,
                json!({ "name": dto.name, "role": dto.role }),
            )
            .await?;

        let profile = json!({
            "id": user.id,
            "email": dto.email.as_str(),
            "name": dto.name,
            "role": dto.role,
            "roll_number": dto.roll_number,
            "class": dto.class,
            "phone": dto.phone.as_ref().map(|p| p.as_str()),
            "guardian_name": dto.guardian_name,
            "guardian_phone": dto.guardian_phone.as_ref().map(|p| p.as_str()),
        });

        let identity: Identity = remote.from(USERS_TABLE).insert(&profile).await?;
        track_user_registered(dto.role.as_str());
        info!(user_id = %identity.id, "Account registered");

        Ok(identity)
    }

    #[instrument(skip_all)]
    pub async fn logout(remote: &RemoteClient, access_token: &str) -> Result<(), AppError> {
        remote.auth().sign_out(access_token).await?;
        Ok(())
    }
}
