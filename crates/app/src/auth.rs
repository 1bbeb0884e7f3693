use backend::AuthClient;
use dioxus::prelude::*;
use shared_types::{AuthUser, Session, UserRole};

/// Global authentication state.
///
/// Provided once at the app root and read by every screen through
/// [`use_auth`]. Nothing is persisted; a reload starts signed out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
    pub role: Signal<Option<UserRole>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            role: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.session.read().as_ref().map(|s| s.user.clone())
    }

    /// Role for permission checks. Unknown resolves to Viewer.
    pub fn role(&self) -> UserRole {
        UserRole::effective(*self.role.read())
    }

    /// Bearer token for backend calls, read without subscribing.
    pub fn access_token(&self) -> Option<String> {
        self.session.peek().as_ref().map(|s| s.access_token.clone())
    }

    pub fn set_session(&mut self, session: Session, role: UserRole) {
        self.session.set(Some(session));
        self.role.set(Some(role));
    }

    pub fn clear_auth(&mut self) {
        self.session.set(None);
        self.role.set(None);
    }

    /// Look up the user's role and store the session.
    /// A failed lookup still signs the user in, as a viewer.
    pub async fn establish(mut self, session: Session) {
        let role = match AuthClient::from_app_config().fetch_role(&session).await {
            Ok(role) => role,
            Err(e) => {
                tracing::warn!(error = %e, "Role lookup failed, falling back to viewer");
                UserRole::Viewer
            }
        };
        tracing::info!(user_id = %session.user.id, role = %role, "Session established");
        self.set_session(session, role);
    }

    /// Drop the local session and hand back its token. Returns `None` when
    /// already signed out.
    pub fn take_session(&mut self) -> Option<String> {
        let token = self.access_token();
        self.clear_auth();
        token
    }

    /// Clear local state, then revoke the token. Safe to call when already
    /// signed out; a failed revoke is logged and otherwise ignored.
    ///
    /// Clearing the session unmounts the screen that called this, so the
    /// revoke runs on a task that outlives it.
    pub fn sign_out(mut self) {
        let Some(token) = self.take_session() else {
            return;
        };
        tracing::info!("Signed out");

        spawn_forever(async move {
            if let Err(e) = AuthClient::from_app_config().sign_out(&token).await {
                tracing::warn!(error = %e, "Sign-out request failed");
            }
        });
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Effective role of the signed-in user (Viewer when unknown).
pub fn use_user_role() -> UserRole {
    use_auth().role()
}

/// What a protected route does for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect,
}

pub fn guard_outcome(authenticated: bool) -> GuardOutcome {
    if authenticated {
        GuardOutcome::Render
    } else {
        GuardOutcome::Redirect
    }
}
