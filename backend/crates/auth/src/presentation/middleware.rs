//! Auth Middleware
//!
//! `require_principal` resolves the session token and stores the principal
//! in the request extensions as [`CurrentPrincipal`]. The gates run after it
//! and only inspect that value.
//!
//! ```ignore
//! Router::new()
//!     .route("/appointments", get(list))
//!     .route_layer(middleware::from_fn(require_teacher))
//!     .route_layer(middleware::from_fn_with_state(auth_state, require_principal::<R>))
//! ```

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::principal::Principal;
use crate::domain::repository::PrincipalStore;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: PrincipalStore,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthMiddlewareState<R>
where
    R: PrincipalStore,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }
}

/// The authenticated principal of the current request
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Principal);

impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Absent only when the route is not behind `require_principal`
        parts
            .extensions
            .get::<CurrentPrincipal>()
            .cloned()
            .ok_or(AuthError::NoToken)
    }
}

/// Session token from the cookie, falling back to `Authorization: Bearer`
pub fn extract_token(headers: &HeaderMap, config: &AuthConfig) -> Option<String> {
    platform::cookie::extract_cookie(headers, &config.token_cookie_name)
        .or_else(|| platform::cookie::extract_bearer(headers))
}

/// Middleware that requires a valid session and attaches its principal
pub async fn require_principal<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    R: PrincipalStore,
{
    let token = extract_token(req.headers(), &state.config).ok_or(AuthError::NoToken)?;

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    let principal = use_case.execute(&token).await?;

    req.extensions_mut().insert(CurrentPrincipal(principal));

    Ok(next.run(req).await)
}

/// Gate: the principal is a teacher record
pub async fn require_teacher(req: Request<Body>, next: Next) -> Result<Response, AuthError> {
    let is_teacher = req
        .extensions()
        .get::<CurrentPrincipal>()
        .map(|CurrentPrincipal(p)| p.as_teacher().is_some());

    match is_teacher {
        Some(true) => Ok(next.run(req).await),
        Some(false) => Err(AuthError::NotTeacher),
        None => Err(AuthError::NoToken),
    }
}

/// Gate: the principal holds the admin role
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, AuthError> {
    let is_admin = req
        .extensions()
        .get::<CurrentPrincipal>()
        .map(|CurrentPrincipal(p)| p.is_admin());

    match is_admin {
        Some(true) => Ok(next.run(req).await),
        Some(false) => Err(AuthError::NotAdmin),
        None => Err(AuthError::NoToken),
    }
}
