use reqwest::Method;
use serde::Serialize;
use shared_types::{AppError, AppErrorKind, BackendConfig, ProfileRole, Session, UserRole};

use crate::config::app_config;
use crate::rest::{self, RestClient};

#[derive(Serialize)]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpData<'a> {
    full_name: &'a str,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpData<'a>,
}

/// Client for the hosted auth provider plus the role lookup on profiles.
#[derive(Clone, Debug)]
pub struct AuthClient {
    rest: RestClient,
}

impl AuthClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            rest: RestClient::new(config),
        }
    }

    pub fn from_app_config() -> Self {
        Self::new(app_config().backend.clone())
    }

    /// Exchange email and password for a session.
    #[tracing::instrument(skip(self, password))]
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let url = self.rest.config().auth_url("token");
        let req = self
            .rest
            .request(Method::POST, &url, None)
            .query(&[("grant_type", "password")])
            .json(&PasswordCredentials { email, password });

        let session: Session = self.rest.send_json(req).await?;
        tracing::info!(user_id = %session.user.id, "Signed in");
        Ok(session)
    }

    /// Register an account. Returns `None` when the provider requires email
    /// confirmation before issuing a session.
    #[tracing::instrument(skip(self, password))]
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<Option<Session>, AppError> {
        let url = self.rest.config().auth_url("signup");
        let req = self.rest.request(Method::POST, &url, None).json(&SignUpRequest {
            email,
            password,
            data: SignUpData { full_name },
        });

        let body: serde_json::Value = self.rest.send_json(req).await?;
        if body.get("access_token").is_none() {
            tracing::info!(email = email, "Sign-up pending email confirmation");
            return Ok(None);
        }
        serde_json::from_value(body)
            .map(Some)
            .map_err(|e| AppError::decode(e.to_string()))
    }

    /// Revoke the session server-side. A token the provider no longer knows
    /// counts as already signed out.
    #[tracing::instrument(skip(self, access_token))]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        let url = self.rest.config().auth_url("logout");
        let req = self.rest.request(Method::POST, &url, Some(access_token));

        match rest::send(req).await {
            Ok(_) => Ok(()),
            Err(e) if matches!(e.kind, AppErrorKind::Unauthorized | AppErrorKind::NotFound) => {
                tracing::debug!(error = %e, "Session already gone");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Role stored on the user's profile row. Missing rows and unknown values
    /// resolve to Viewer.
    #[tracing::instrument(skip(self, session), fields(user_id = %session.user.id))]
    pub async fn fetch_role(&self, session: &Session) -> Result<UserRole, AppError> {
        let config = self.rest.config();
        let url = config.rest_url(&config.profiles_table);
        let filter = format!("eq.{}", session.user.id);
        let req = self
            .rest
            .request(Method::GET, &url, Some(&session.access_token))
            .query(&[("select", "role"), ("id", filter.as_str())]);

        let rows: Vec<ProfileRole> = self.rest.send_json(req).await?;
        Ok(rows.first().map(ProfileRole::user_role).unwrap_or_default())
    }
}
