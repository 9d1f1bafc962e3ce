//! Auth Router
//!
//! Paths carry their resource prefix (`/student/...`, `/teacher/...`,
//! `/admin/...`) so that the router can be merged with other crates'
//! routers sharing those prefixes.

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::PrincipalStore;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{
    AuthMiddlewareState, require_admin, require_principal, require_teacher,
};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(Arc::new(repo), Arc::new(config))
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: PrincipalStore,
{
    let state = AuthAppState {
        repo: repo.clone(),
        config: config.clone(),
    };
    let auth_state = AuthMiddlewareState::new(repo, config);

    let public = Router::new()
        .route("/student/register", post(handlers::register_student::<R>))
        .route("/student/login", post(handlers::login_student::<R>))
        .route("/teacher/register", post(handlers::register_teacher::<R>))
        .route("/teacher/login", post(handlers::login_teacher::<R>));

    let teacher_only = Router::new()
        .route(
            "/teacher/update-details",
            put(handlers::update_teacher_details::<R>),
        )
        .route(
            "/teacher/update-password",
            put(handlers::update_password::<R>),
        )
        .route(
            "/teacher/delete",
            delete(handlers::delete_own_teacher_account::<R>),
        )
        .route_layer(middleware::from_fn(require_teacher));

    let admin_only = Router::new()
        .route("/admin/teachers", post(handlers::admin_add_teacher::<R>))
        .route(
            "/admin/teachers/{id}",
            put(handlers::admin_update_teacher::<R>).delete(handlers::admin_delete_teacher::<R>),
        )
        .route(
            "/admin/students/{id}/promote",
            put(handlers::admin_promote_student::<R>),
        )
        .route_layer(middleware::from_fn(require_admin));

    let signed_in = Router::new()
        .route("/student/logout", post(handlers::logout::<R>))
        .route("/student/me", get(handlers::me))
        .route(
            "/student/update-password",
            put(handlers::update_password::<R>),
        )
        .route(
            "/student/{id}",
            put(handlers::update_student::<R>).delete(handlers::delete_student::<R>),
        )
        .route("/teacher/logout", post(handlers::logout::<R>))
        .route("/teacher/me", get(handlers::me))
        .merge(teacher_only)
        .merge(admin_only)
        .route_layer(middleware::from_fn_with_state(
            auth_state,
            require_principal::<R>,
        ));

    public.merge(signed_in).with_state(state)
}
