//! School Router
//!
//! Shares the `/student` and `/teacher` prefixes with the auth router, so
//! paths are spelled out in full and the two routers are merged.

use auth::PrincipalStore;
use auth::middleware::{AuthMiddlewareState, require_admin, require_principal, require_teacher};
use axum::{
    Router, middleware,
    routing::{get, patch, post, put},
};
use std::sync::Arc;

use crate::domain::repository::SchoolStore;
use crate::infra::postgres::PgSchoolRepository;
use crate::presentation::handlers::{self, SchoolAppState};

/// Create the School router with PostgreSQL repository
pub fn school_router<P>(repo: PgSchoolRepository, auth: AuthMiddlewareState<P>) -> Router
where
    P: PrincipalStore,
{
    school_router_generic(Arc::new(repo), auth)
}

/// Create a generic School router for any repository implementation
pub fn school_router_generic<S, P>(repo: Arc<S>, auth: AuthMiddlewareState<P>) -> Router
where
    S: SchoolStore,
    P: PrincipalStore,
{
    let state = SchoolAppState { repo };

    let teacher_only = Router::new()
        .route(
            "/teacher/schedule-appointment",
            post(handlers::schedule_appointment::<S>),
        )
        .route(
            "/teacher/appointments",
            get(handlers::teacher_appointments::<S>),
        )
        .route(
            "/teacher/appointments/approve/{id}",
            put(handlers::approve_appointment::<S>),
        )
        .route(
            "/teacher/appointments/cancel/{id}",
            put(handlers::cancel_appointment::<S>),
        )
        .route(
            "/teacher/appointments/reject/{id}",
            put(handlers::reject_appointment::<S>),
        )
        .route(
            "/teacher/appointments/complete/{id}",
            put(handlers::complete_appointment::<S>),
        )
        .route_layer(middleware::from_fn(require_teacher));

    let admin_only = Router::new()
        .route(
            "/appointment/appointments",
            get(handlers::list_appointments::<S>),
        )
        .route(
            "/appointment/appointments/{id}",
            patch(handlers::override_appointment_status::<S>),
        )
        .route_layer(middleware::from_fn(require_admin));

    let signed_in = Router::new()
        .route(
            "/student/book-appointment",
            post(handlers::book_appointment::<S>),
        )
        .route(
            "/student/appointments",
            get(handlers::student_appointments::<S>),
        )
        .route(
            "/appointment/appointments",
            post(handlers::create_appointment::<S>),
        )
        .merge(teacher_only)
        .merge(admin_only)
        .route_layer(middleware::from_fn_with_state(auth, require_principal::<P>));

    let catalog = Router::new()
        .route(
            "/department/departments",
            post(handlers::create_department::<S>).get(handlers::list_departments::<S>),
        )
        .route(
            "/department/departments/{id}",
            get(handlers::get_department::<S>)
                .put(handlers::update_department::<S>)
                .delete(handlers::delete_department::<S>),
        )
        .route(
            "/subject/subjects",
            post(handlers::create_subject::<S>).get(handlers::list_subjects::<S>),
        )
        .route(
            "/subject/subjects/{id}",
            get(handlers::get_subject::<S>)
                .put(handlers::update_subject::<S>)
                .delete(handlers::delete_subject::<S>),
        )
        .route(
            "/feedback/feedbacks",
            post(handlers::create_feedback::<S>).get(handlers::list_feedback::<S>),
        )
        .route(
            "/feedback/feedbacks/{id}",
            get(handlers::get_feedback::<S>)
                .put(handlers::update_feedback::<S>)
                .delete(handlers::delete_feedback::<S>),
        );

    let notifications = Router::new()
        .route(
            "/notification/notifications",
            post(handlers::create_notification::<S>).get(handlers::list_notifications::<S>),
        )
        .route(
            "/notification/notifications/{id}",
            get(handlers::user_notifications::<S>).delete(handlers::delete_notification::<S>),
        )
        .route(
            "/notification/notifications/{id}/read",
            put(handlers::mark_notification_read::<S>),
        );

    signed_in
        .merge(catalog)
        .merge(notifications)
        .with_state(state)
}
