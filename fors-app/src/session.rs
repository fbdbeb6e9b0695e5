//! Session context
//!
//! Holds the current authenticated user (or none) and exposes login, logout
//! and signup to the rest of the view tree. A single identity check runs at
//! startup; until it resolves the user is Unknown, not Anonymous, so the UI
//! can show a loading state instead of flashing the logged-out view.

use std::sync::Arc;

use tracing::{debug, warn};

use fors_client::{LoginRequest, SignupRequest};
use shared::models::User;

use crate::context::AppContext;
use crate::router::Route;

/// Authentication phase
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthPhase {
    /// Startup identity check has not resolved yet
    #[default]
    Unknown,
    /// No session; not an error state
    Anonymous,
    Authenticated(User),
}

/// Session view-model
pub struct Session {
    ctx: Arc<AppContext>,
    phase: AuthPhase,
}

impl Session {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self {
            ctx,
            phase: AuthPhase::Unknown,
        }
    }

    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    /// Cached identity, if authenticated
    pub fn current_user(&self) -> Option<&User> {
        match &self.phase {
            AuthPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(User::is_admin)
    }

    /// Startup identity check. Failure means "no session", never a toast.
    pub async fn bootstrap(&mut self) {
        match self.ctx.api().me().await {
            Ok(user) => {
                debug!(email = %user.email, "session restored");
                self.phase = AuthPhase::Authenticated(user);
            }
            Err(err) => {
                debug!(%err, "no active session");
                self.phase = AuthPhase::Anonymous;
            }
        }
    }

    /// Login with email and password. On success the identity is re-fetched
    /// and the caller should navigate to the returned route.
    pub async fn login(&mut self, email: &str, password: &str) -> Option<Route> {
        if email.trim().is_empty() || password.is_empty() {
            self.ctx.notifier().error("Enter your email and password");
            return None;
        }

        let req = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        if let Err(err) = self.ctx.api().login(&req).await {
            debug!(%err, "login failed");
            self.ctx.notifier().error("Login failed");
            return None;
        }

        // The login response carries no body; the session cookie is set and
        // the identity comes from a follow-up /me call.
        match self.ctx.api().me().await {
            Ok(user) => {
                self.ctx.notifier().success(format!("Welcome, {}", user.email));
                self.phase = AuthPhase::Authenticated(user);
                Some(Route::Drops)
            }
            Err(err) => {
                warn!(%err, "identity fetch failed after login");
                self.ctx.notifier().error("Login failed");
                self.phase = AuthPhase::Anonymous;
                None
            }
        }
    }

    /// Logout. The server call is best-effort; local state clears regardless.
    pub async fn logout(&mut self) -> Route {
        if let Err(err) = self.ctx.api().logout().await {
            debug!(%err, "logout request failed");
        }
        self.phase = AuthPhase::Anonymous;
        Route::Login
    }

    /// Register a new account. On success the caller navigates to login.
    pub async fn signup(&mut self, email: &str, password: &str) -> Option<Route> {
        if email.trim().is_empty() || password.is_empty() {
            self.ctx.notifier().error("Enter your email and password");
            return None;
        }

        let req = SignupRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        match self.ctx.api().signup(&req).await {
            Ok(()) => {
                self.ctx.notifier().success("Account created, please log in");
                Some(Route::Login)
            }
            Err(err) => {
                debug!(%err, "signup failed");
                self.ctx.notifier().error("Signup failed");
                None
            }
        }
    }
}
