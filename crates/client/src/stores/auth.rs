//! Auth store: session state and the login/register/restore/logout actions.
//!
//! This is the only store that touches the durable token. `user` and
//! `is_authenticated` always move together; nothing else flips either field.

use dioxus::prelude::*;
use giglance_shared::{AuthPayload, LoginRequest, RegisterRequest, User};

use crate::api_client::{ApiClient, TOKEN_KEY};
use crate::storage;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn signed_in(&mut self, user: User) {
        self.user = Some(user);
        self.is_authenticated = true;
        self.loading = false;
    }

    pub fn signed_out(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        self.loading = false;
    }

    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

pub static AUTH: GlobalSignal<AuthState> = Signal::global(AuthState::default);

/// Log in; on success the token is persisted and the session becomes
/// authenticated. Returns whether the login succeeded.
pub async fn login(email: String, password: String) -> bool {
    AUTH.write().pending();
    let client = ApiClient::new();
    match client
        .post_json::<_, AuthPayload>("/auth/login", &LoginRequest { email, password })
        .await
    {
        Ok(payload) => {
            storage::save(TOKEN_KEY, &payload.token);
            AUTH.write().signed_in(payload.user);
            true
        }
        Err(err) => {
            AUTH.write().failed(err.user_message("Login failed"));
            false
        }
    }
}

/// Create an account; behaves like `login` on success.
pub async fn register(name: String, email: String, password: String) -> bool {
    AUTH.write().pending();
    let client = ApiClient::new();
    match client
        .post_json::<_, AuthPayload>(
            "/auth/register",
            &RegisterRequest {
                name,
                email,
                password,
            },
        )
        .await
    {
        Ok(payload) => {
            storage::save(TOKEN_KEY, &payload.token);
            AUTH.write().signed_in(payload.user);
            true
        }
        Err(err) => {
            AUTH.write().failed(err.user_message("Registration failed"));
            false
        }
    }
}

/// Restore the session from a persisted token at app start. A dead token is
/// discarded silently; the user just lands logged out.
pub async fn restore_session() {
    if !storage::exists(TOKEN_KEY) {
        return;
    }
    AUTH.write().pending();
    let client = ApiClient::new();
    match client.get_json::<User>("/auth/me").await {
        Ok(user) => AUTH.write().signed_in(user),
        Err(err) => {
            crate::log_info!("stored session rejected: {}", err);
            storage::remove(TOKEN_KEY);
            AUTH.write().signed_out();
        }
    }
}

/// Log out: best-effort server notification, then clear the token and the
/// session. The push channel tears itself down when `is_authenticated`
/// flips false.
pub async fn logout() {
    let client = ApiClient::new();
    if let Err(err) = client.post_ack("/auth/logout", &serde_json::json!({})).await {
        crate::log_warn!("logout request failed: {}", err);
    }
    storage::remove(TOKEN_KEY);
    AUTH.write().signed_out();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[test]
    fn user_and_is_authenticated_stay_consistent() {
        let mut state = AuthState::default();
        assert!(state.user.is_none() && !state.is_authenticated);

        state.signed_in(user());
        assert!(state.user.is_some() && state.is_authenticated);

        state.signed_out();
        assert!(state.user.is_none() && !state.is_authenticated);
    }

    #[test]
    fn pending_clears_previous_error_and_sets_loading() {
        let mut state = AuthState::default();
        state.failed("Invalid credentials".to_string());
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
        assert!(!state.loading);

        state.pending();
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn failure_stops_loading_without_touching_session() {
        let mut state = AuthState::default();
        state.signed_in(user());
        state.pending();
        state.failed("boom".to_string());
        assert!(!state.loading);
        assert!(state.is_authenticated);
    }
}
