//! The session store: authenticated user and bearer token.
//!
//! Login and signup replace the token and user record atomically on
//! success; nothing else mutates auth state. The wizard and the other
//! stores read the token from here to authorize their calls.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::RwLock;

use ziptrip_client::requests::{LoginRequest, SignupRequest};
use ziptrip_client::CarServiceApi;
use ziptrip_core::types::{DbId, Role, User};

use crate::error::StoreError;

#[derive(Default)]
struct SessionState {
    user: Option<User>,
    token: Option<String>,
    loading: bool,
}

/// Holds the authenticated user and bearer token.
pub struct SessionStore {
    api: Arc<CarServiceApi>,
    inner: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new(api: Arc<CarServiceApi>) -> Self {
        Self {
            api,
            inner: RwLock::new(SessionState::default()),
        }
    }

    /// Exchange credentials for a session. Token and user are replaced
    /// together on success; on failure the previous session is kept.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, StoreError> {
        self.set_loading(true).await;
        let result = self
            .api
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await;
        self.set_loading(false).await;

        let response = result?;
        let user = self.apply_auth(response.token, response.user).await;
        tracing::info!(user_id = user.id, role = user.role.as_str(), "Logged in");
        Ok(user)
    }

    /// Register a new account and start a session for it. The display
    /// name is split into first and last name on the first space.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
        phone: &str,
    ) -> Result<User, StoreError> {
        let (first_name, last_name) = match name.split_once(' ') {
            Some((first, rest)) => (first.to_string(), rest.to_string()),
            None => (name.to_string(), String::new()),
        };

        self.set_loading(true).await;
        let result = self
            .api
            .signup(&SignupRequest {
                first_name,
                last_name,
                email: email.to_string(),
                phone: phone.to_string(),
                password: password.to_string(),
                role: role.as_str().to_string(),
            })
            .await;
        self.set_loading(false).await;

        let response = result?;
        let user = self.apply_auth(response.token, response.user).await;
        tracing::info!(user_id = user.id, role = user.role.as_str(), "Signed up");
        Ok(user)
    }

    /// Drop the session. Token and user are cleared together.
    pub async fn logout(&self) {
        let mut state = self.inner.write().await;
        state.user = None;
        state.token = None;
        tracing::info!("Logged out");
    }

    /// The current bearer token, if authenticated.
    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.token.clone()
    }

    /// The current user record, if authenticated.
    pub async fn user(&self) -> Option<User> {
        self.inner.read().await.user.clone()
    }

    /// The current user's role; guests and anonymous sessions both read
    /// as [`Role::Guest`].
    pub async fn role(&self) -> Role {
        self.inner
            .read()
            .await
            .user
            .as_ref()
            .map(|u| u.role)
            .unwrap_or(Role::Guest)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.token.is_some()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.loading
    }

    async fn set_loading(&self, loading: bool) {
        self.inner.write().await.loading = loading;
    }

    /// Install a new session in one critical section, resolving the role
    /// from the user record, then the token claims, then guest.
    async fn apply_auth(
        &self,
        token: String,
        auth_user: Option<ziptrip_client::requests::AuthUser>,
    ) -> User {
        let claim_role = role_from_token(&token);
        let user = match auth_user {
            Some(record) => {
                let role = record
                    .role
                    .as_deref()
                    .or(claim_role.as_deref())
                    .map(Role::from_str_or_guest)
                    .unwrap_or(Role::Guest);
                User {
                    id: record.id,
                    first_name: record.first_name,
                    last_name: record.last_name,
                    email: record.email,
                    role,
                }
            }
            // Some deployments omit the user record; fall back to the
            // token claims alone.
            None => User {
                id: id_from_token(&token).unwrap_or_default(),
                first_name: String::new(),
                last_name: String::new(),
                email: String::new(),
                role: claim_role
                    .as_deref()
                    .map(Role::from_str_or_guest)
                    .unwrap_or(Role::Guest),
            },
        };

        let mut state = self.inner.write().await;
        state.token = Some(token);
        state.user = Some(user.clone());
        user
    }

    /// Install a pre-built session without a network call.
    #[cfg(test)]
    pub(crate) async fn install_for_tests(&self, user: User, token: &str) {
        let mut state = self.inner.write().await;
        state.user = Some(user);
        state.token = Some(token.to_string());
    }
}

#[derive(Debug, Deserialize)]
struct PeekedClaims {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    sub: Option<DbId>,
}

/// Decode a JWT payload without verifying the signature. The client has
/// no signing secret; this is a convenience peek, not authentication.
fn peek_claims(token: &str) -> Option<PeekedClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    jsonwebtoken::decode::<PeekedClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .ok()
}

/// The `role` claim of an access token, if present.
fn role_from_token(token: &str) -> Option<String> {
    peek_claims(token).and_then(|claims| claims.role)
}

/// The `sub` claim of an access token, if present.
fn id_from_token(token: &str) -> Option<DbId> {
    peek_claims(token).and_then(|claims| claims.sub)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
