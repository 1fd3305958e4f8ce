use dioxus::prelude::*;
use shared_types::{AppError, AuthUser, Credentials, CurrentUserResponse, LoginResponse};

use crate::lifetime::{use_lifetime, LifetimeToken};
use crate::routes::Route;
use crate::token_store::{LocalStorageTokenStore, TokenStore};

/// Shown when login fails for a reason other than rejected credentials.
pub const LOGIN_FAILED: &str = "تعذر تسجيل الدخول، حاول مرة أخرى";

/// Where the client stands with respect to sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Initial state while the stored token is being checked.
    Checking,
    Authenticated,
    Unauthenticated,
}

/// The auth endpoints as seen by the client.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, credentials: Credentials) -> Result<LoginResponse, AppError>;

    async fn logout(&self, token: String) -> Result<(), AppError>;

    async fn current_user(&self, token: String) -> Result<CurrentUserResponse, AppError>;
}

/// [`AuthApi`] backed by the office server functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerAuthApi;

impl AuthApi for ServerAuthApi {
    async fn login(&self, credentials: Credentials) -> Result<LoginResponse, AppError> {
        server::api::login(credentials)
            .await
            .map_err(|e| AppError::from_transport(&e.to_string()))
    }

    async fn logout(&self, token: String) -> Result<(), AppError> {
        server::api::logout(token)
            .await
            .map_err(|e| AppError::from_transport(&e.to_string()))
    }

    async fn current_user(&self, token: String) -> Result<CurrentUserResponse, AppError> {
        server::api::get_current_user(token)
            .await
            .map_err(|e| AppError::from_transport(&e.to_string()))
    }
}

/// Auth state after a transition.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSnapshot {
    pub status: AuthStatus,
    pub user: Option<AuthUser>,
    pub error: Option<String>,
}

impl AuthSnapshot {
    pub fn checking() -> Self {
        Self {
            status: AuthStatus::Checking,
            user: None,
            error: None,
        }
    }

    fn signed_in(user: AuthUser) -> Self {
        Self {
            status: AuthStatus::Authenticated,
            user: Some(user),
            error: None,
        }
    }

    fn signed_out(error: Option<String>) -> Self {
        Self {
            status: AuthStatus::Unauthenticated,
            user: None,
            error,
        }
    }
}

/// Page the client should move to after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRedirect {
    Home,
    Login,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthTransition {
    pub snapshot: AuthSnapshot,
    pub redirect: Option<AuthRedirect>,
}

impl From<AuthSnapshot> for AuthTransition {
    fn from(snapshot: AuthSnapshot) -> Self {
        Self {
            snapshot,
            redirect: None,
        }
    }
}

/// Sign-in transitions over an API and a token store.
///
/// No retries and no refresh. Each call is one request.
pub struct AuthSession<A, S> {
    api: A,
    tokens: S,
}

impl<A: AuthApi, S: TokenStore> AuthSession<A, S> {
    pub fn new(api: A, tokens: S) -> Self {
        Self { api, tokens }
    }

    /// Resolve the stored token. Without one, no request is made.
    pub async fn check(&self) -> AuthTransition {
        let Some(token) = self.tokens.load().await else {
            return AuthSnapshot::signed_out(None).into();
        };
        match self.api.current_user(token).await {
            Ok(CurrentUserResponse {
                success: true,
                data: Some(user),
            }) => AuthSnapshot::signed_in(user).into(),
            Ok(_) => {
                tracing::warn!("stored token was rejected");
                self.tokens.clear().await;
                AuthSnapshot::signed_out(None).into()
            }
            Err(e) => {
                tracing::warn!(error = %e, "fetching the current user failed");
                self.tokens.clear().await;
                AuthSnapshot::signed_out(None).into()
            }
        }
    }

    pub async fn login(&self, credentials: Credentials) -> AuthTransition {
        match self.api.login(credentials).await {
            Ok(LoginResponse {
                success: true,
                data: Some(data),
                ..
            }) => {
                self.tokens.save(&data.token).await;
                AuthTransition {
                    snapshot: AuthSnapshot::signed_in(data.user),
                    redirect: Some(AuthRedirect::Home),
                }
            }
            Ok(response) => {
                let message = if response.message.is_empty() {
                    LOGIN_FAILED.to_string()
                } else {
                    response.message
                };
                AuthSnapshot::signed_out(Some(message)).into()
            }
            Err(e) => {
                tracing::warn!(error = %e, "login request failed");
                AuthSnapshot::signed_out(Some(LOGIN_FAILED.to_string())).into()
            }
        }
    }

    /// Sign out locally whatever the server says, and always go to login.
    pub async fn logout(&self) -> AuthTransition {
        if let Some(token) = self.tokens.load().await {
            if let Err(e) = self.api.logout(token).await {
                tracing::warn!(error = %e, "logout request failed");
            }
        }
        self.tokens.clear().await;
        AuthTransition {
            snapshot: AuthSnapshot::signed_out(None),
            redirect: Some(AuthRedirect::Login),
        }
    }
}

fn default_session() -> AuthSession<ServerAuthApi, LocalStorageTokenStore> {
    AuthSession::new(ServerAuthApi, LocalStorageTokenStore)
}

/// App-wide auth signals, provided once at the root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub status: Signal<AuthStatus>,
    pub user: Signal<Option<AuthUser>>,
    pub error: Signal<Option<String>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            status: Signal::new(AuthStatus::Checking),
            user: Signal::new(None),
            error: Signal::new(None),
        }
    }

    pub fn apply(&mut self, snapshot: AuthSnapshot) {
        self.status.set(snapshot.status);
        self.user.set(snapshot.user);
        self.error.set(snapshot.error);
    }

    pub fn is_authenticated(&self) -> bool {
        *self.status.read() == AuthStatus::Authenticated
    }
}

/// Check the stored token once when the root mounts.
pub fn use_auth_check() {
    let mut state = use_context::<AuthState>();
    let lifetime = use_lifetime();

    use_effect(move || {
        let lifetime = lifetime.clone();
        spawn(async move {
            if let Some(transition) = lifetime.guard(default_session().check()).await {
                state.apply(transition.snapshot);
            }
        });
    });
}

/// Auth actions bound to the calling component. Must be used inside the
/// router so redirects can navigate.
#[derive(Clone)]
pub struct AuthHandle {
    pub state: AuthState,
    lifetime: LifetimeToken,
}

impl AuthHandle {
    pub fn status(&self) -> AuthStatus {
        *self.state.status.read()
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.state.user.read().clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error.read().clone()
    }

    fn finish(&self, transition: AuthTransition) {
        if self.lifetime.is_cancelled() {
            return;
        }
        let mut state = self.state;
        state.apply(transition.snapshot);
        match transition.redirect {
            Some(AuthRedirect::Home) => {
                navigator().push(Route::Dashboard {});
            }
            Some(AuthRedirect::Login) => {
                navigator().push(Route::Login {});
            }
            None => {}
        }
    }

    pub async fn login(&self, credentials: Credentials) {
        let transition = default_session().login(credentials).await;
        self.finish(transition);
    }

    pub async fn logout(&self) {
        let transition = default_session().logout().await;
        self.finish(transition);
    }
}

pub fn use_auth() -> AuthHandle {
    AuthHandle {
        state: use_context::<AuthState>(),
        lifetime: use_lifetime(),
    }
}
