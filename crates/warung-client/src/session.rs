//! # Session
//!
//! Authentication and account-settings round-trips.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Lifecycle                                 │
//! │                                                                         │
//! │  login / register / login_with_google                                   │
//! │       └── POST /auth/* ──► { token, user } ──► token attached to client │
//! │                                                                         │
//! │  restore(saved_token)                                                   │
//! │       └── GET /auth/me ──► user      (invalid token → token cleared)    │
//! │                                                                         │
//! │  logout                                                                 │
//! │       └── token + cached user dropped (no server round-trip)            │
//! │                                                                         │
//! │  The data engine subscribes to the authenticated/unauthenticated        │
//! │  transition: full snapshot load on login, full clear on logout.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Duplicate-email on registration and wrong-current-password on password
//! change remain distinguishable through the rejection body's `code` field
//! (see `error::codes`).

use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// The authenticated account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
}

/// Server reply to a successful login/registration.
#[derive(Debug, Clone, Deserialize)]
struct AuthPayload {
    token: String,
    user: UserProfile,
}

/// Server envelope for endpoints that return the updated account.
#[derive(Debug, Clone, Deserialize)]
struct UserEnvelope {
    user: UserProfile,
}

/// Authenticated session over an [`ApiClient`].
///
/// Holds the current user in memory; the bearer token itself lives on the
/// shared client so every collaborator sends it.
#[derive(Debug)]
pub struct Session {
    client: ApiClient,
    user: RwLock<Option<UserProfile>>,
}

impl Session {
    pub fn new(client: ApiClient) -> Self {
        Session {
            client,
            user: RwLock::new(None),
        }
    }

    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.read().expect("session lock poisoned").is_some()
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.user.read().expect("session lock poisoned").clone()
    }

    /// Token for the caller to persist across restarts.
    pub fn token(&self) -> Option<String> {
        self.client.token()
    }

    fn apply(&self, payload: AuthPayload) -> UserProfile {
        self.client.set_token(payload.token);
        *self.user.write().expect("session lock poisoned") = Some(payload.user.clone());
        payload.user
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Signs in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<UserProfile> {
        let payload: AuthPayload = self
            .client
            .post("/auth/login", &json!({ "email": email, "password": password }))
            .await?;
        let user = self.apply(payload);
        info!(email = %user.email, "signed in");
        Ok(user)
    }

    /// Creates an account and signs in. Duplicate email surfaces as a
    /// rejection with code `email_taken`.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<UserProfile> {
        let payload: AuthPayload = self
            .client
            .post(
                "/auth/register",
                &json!({ "name": name, "email": email, "password": password }),
            )
            .await?;
        let user = self.apply(payload);
        info!(email = %user.email, "account registered");
        Ok(user)
    }

    /// Signs in (or up) with a verified Google identity.
    pub async fn login_with_google(&self, name: &str, email: &str) -> ApiResult<UserProfile> {
        let payload: AuthPayload = self
            .client
            .post("/auth/google", &json!({ "name": name, "email": email }))
            .await?;
        let user = self.apply(payload);
        info!(email = %user.email, "signed in with google");
        Ok(user)
    }

    /// Restores a session from a persisted token. An invalid or expired
    /// token is dropped so the caller lands in the signed-out state.
    pub async fn restore(&self, token: &str) -> ApiResult<UserProfile> {
        self.client.set_token(token);

        match self.client.get::<UserEnvelope>("/auth/me").await {
            Ok(envelope) => {
                *self.user.write().expect("session lock poisoned") = Some(envelope.user.clone());
                info!(email = %envelope.user.email, "session restored");
                Ok(envelope.user)
            }
            Err(err) => {
                warn!("session token is invalid, signing out");
                self.client.clear_token();
                Err(err)
            }
        }
    }

    /// Signs out locally: the token and cached user are discarded and the
    /// in-memory data snapshot should be cleared by the data engine.
    pub fn logout(&self) {
        self.client.clear_token();
        *self.user.write().expect("session lock poisoned") = None;
        info!("signed out");
    }

    // =========================================================================
    // Account Settings
    // =========================================================================

    /// Updates display name and email.
    pub async fn update_profile(&self, name: &str, email: &str) -> ApiResult<UserProfile> {
        let envelope: UserEnvelope = self
            .client
            .put("/user/profile", &json!({ "name": name, "email": email }))
            .await?;
        *self.user.write().expect("session lock poisoned") = Some(envelope.user.clone());
        Ok(envelope.user)
    }

    /// Changes the password. A wrong current password surfaces as a
    /// rejection with code `wrong_password`.
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> ApiResult<()> {
        self.client
            .put_no_content(
                "/user/password",
                &json!({ "oldPassword": old_password, "newPassword": new_password }),
            )
            .await
    }

    /// Picks a new avatar.
    pub async fn update_avatar(&self, avatar_url: &str) -> ApiResult<UserProfile> {
        let envelope: UserEnvelope = self
            .client
            .put("/user/avatar", &json!({ "avatarUrl": avatar_url }))
            .await?;
        *self.user.write().expect("session lock poisoned") = Some(envelope.user.clone());
        Ok(envelope.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn test_session_starts_signed_out() {
        let client = ApiClient::new(&ClientConfig::default()).unwrap();
        let session = Session::new(client);
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_apply_sets_token_and_user() {
        let client = ApiClient::new(&ClientConfig::default()).unwrap();
        let session = Session::new(client.clone());

        let user = session.apply(AuthPayload {
            token: "tok-1".to_string(),
            user: UserProfile {
                id: "u-1".to_string(),
                name: "Budi".to_string(),
                email: "budi@example.com".to_string(),
                avatar_url: "/avatars/1.png".to_string(),
            },
        });

        assert!(session.is_authenticated());
        assert_eq!(client.token().as_deref(), Some("tok-1"));
        assert_eq!(user.name, "Budi");

        session.logout();
        assert!(!session.is_authenticated());
        assert!(client.token().is_none());
    }

    #[test]
    fn test_user_profile_wire_names() {
        let user: UserProfile = serde_json::from_str(
            r#"{"id":"u-1","name":"Budi","email":"budi@example.com","avatarUrl":"/a.png"}"#,
        )
        .unwrap();
        assert_eq!(user.avatar_url, "/a.png");
    }
}
