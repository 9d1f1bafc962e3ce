//! HTTP Handlers

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use kernel::id::{StudentId, TeacherId};
use kernel::response::{ApiResponse, Payload};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    AdminUpdateTeacherUseCase, ChangePasswordUseCase, DeleteStudentUseCase, DeleteTeacherUseCase,
    PrincipalKind, PromoteStudentUseCase, RegisterStudentUseCase, RegisterTeacherUseCase,
    SignInUseCase, UpdateStudentUseCase, UpdateTeacherDetailsUseCase,
};
use crate::domain::entity::principal::Principal;
use crate::domain::repository::PrincipalStore;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    ChangePasswordRequest, PrincipalResponse, RegisterStudentRequest, RegisterTeacherRequest,
    SessionResponse, SignInRequest, StudentPatchRequest, StudentResponse, TeacherDetailsRequest,
    TeacherPatchRequest, TeacherResponse,
};
use crate::presentation::middleware::CurrentPrincipal;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: PrincipalStore,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Student account
// ============================================================================

/// POST /student/register
///
/// Registration also signs the student in.
pub async fn register_student<R>(
    State(state): State<AuthAppState<R>>,
    Payload(req): Payload<RegisterStudentRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: PrincipalStore,
{
    let use_case = RegisterStudentUseCase::new(state.repo.clone(), state.config.clone());
    let student = use_case.execute(req.into()).await?;

    let principal = Principal::Student(student);
    let token = state.config.issue_token(principal.id())?;
    let cookie = state.config.cookie().build_set_cookie(&token);

    Ok((
        [(header::SET_COOKIE, cookie)],
        ApiResponse::created(
            SessionResponse {
                user: (&principal).into(),
                token,
            },
            "Student registered successfully",
        ),
    ))
}

/// POST /student/login
pub async fn login_student<R>(
    state: State<AuthAppState<R>>,
    req: Payload<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: PrincipalStore,
{
    sign_in(state, req, PrincipalKind::Student, "Student login successful").await
}

/// PUT /student/{id}
pub async fn update_student<R>(
    State(state): State<AuthAppState<R>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(id): Path<String>,
    Payload(req): Payload<StudentPatchRequest>,
) -> AuthResult<ApiResponse<StudentResponse>>
where
    R: PrincipalStore,
{
    let student_id = StudentId::parse(&id, "student")?;

    let use_case = UpdateStudentUseCase::new(state.repo.clone());
    let student = use_case.execute(&principal, student_id, req.into()).await?;

    Ok(ApiResponse::ok(
        (&student).into(),
        "Student updated successfully",
    ))
}

/// DELETE /student/{id}
pub async fn delete_student<R>(
    State(state): State<AuthAppState<R>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(id): Path<String>,
) -> AuthResult<ApiResponse<()>>
where
    R: PrincipalStore,
{
    let student_id = StudentId::parse(&id, "student")?;

    let use_case = DeleteStudentUseCase::new(state.repo.clone());
    use_case.execute(&principal, student_id).await?;

    Ok(ApiResponse::ok((), "Student deleted successfully"))
}

// ============================================================================
// Teacher account
// ============================================================================

/// POST /teacher/register
pub async fn register_teacher<R>(
    State(state): State<AuthAppState<R>>,
    Payload(req): Payload<RegisterTeacherRequest>,
) -> AuthResult<ApiResponse<TeacherResponse>>
where
    R: PrincipalStore,
{
    let use_case = RegisterTeacherUseCase::new(state.repo.clone(), state.config.clone());
    let teacher = use_case.execute(req.into()).await?;

    Ok(ApiResponse::created(
        (&teacher).into(),
        "Teacher registered successfully",
    ))
}

/// POST /teacher/login
pub async fn login_teacher<R>(
    state: State<AuthAppState<R>>,
    req: Payload<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: PrincipalStore,
{
    sign_in(state, req, PrincipalKind::Teacher, "Teacher login successful").await
}

/// PUT /teacher/update-details
pub async fn update_teacher_details<R>(
    State(state): State<AuthAppState<R>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Payload(req): Payload<TeacherDetailsRequest>,
) -> AuthResult<ApiResponse<TeacherResponse>>
where
    R: PrincipalStore,
{
    let current = principal.as_teacher().ok_or(AuthError::NotTeacher)?;

    let use_case = UpdateTeacherDetailsUseCase::new(state.repo.clone());
    let teacher = use_case.execute(current, req.into()).await?;

    Ok(ApiResponse::ok(
        (&teacher).into(),
        "Teacher details updated successfully",
    ))
}

/// DELETE /teacher/delete
pub async fn delete_own_teacher_account<R>(
    State(state): State<AuthAppState<R>>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> AuthResult<impl IntoResponse>
where
    R: PrincipalStore,
{
    let teacher = principal.as_teacher().ok_or(AuthError::NotTeacher)?;

    let use_case = DeleteTeacherUseCase::new(state.repo.clone());
    use_case.execute(teacher.teacher_id).await?;

    let cookie = state.config.cookie().build_delete_cookie();

    Ok((
        [(header::SET_COOKIE, cookie)],
        ApiResponse::ok((), "Teacher account deleted successfully"),
    ))
}

// ============================================================================
// Either principal
// ============================================================================

/// POST /student/logout, POST /teacher/logout
///
/// Tokens are stateless; logging out clears the cookie.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> impl IntoResponse
where
    R: PrincipalStore,
{
    tracing::info!(principal_id = %principal.id(), "Principal signed out");

    let cookie = state.config.cookie().build_delete_cookie();

    (
        [(header::SET_COOKIE, cookie)],
        ApiResponse::ok((), "Logout successful"),
    )
}

/// GET /student/me, GET /teacher/me
pub async fn me(CurrentPrincipal(principal): CurrentPrincipal) -> ApiResponse<PrincipalResponse> {
    ApiResponse::ok((&principal).into(), "Profile fetched successfully")
}

/// PUT /student/update-password, PUT /teacher/update-password
///
/// Changes the password of whoever is signed in.
pub async fn update_password<R>(
    State(state): State<AuthAppState<R>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Payload(req): Payload<ChangePasswordRequest>,
) -> AuthResult<ApiResponse<()>>
where
    R: PrincipalStore,
{
    let use_case = ChangePasswordUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(&principal, req.into()).await?;

    Ok(ApiResponse::ok((), "Password updated successfully"))
}

// ============================================================================
// Admin
// ============================================================================

/// POST /admin/teachers
pub async fn admin_add_teacher<R>(
    State(state): State<AuthAppState<R>>,
    Payload(req): Payload<RegisterTeacherRequest>,
) -> AuthResult<ApiResponse<TeacherResponse>>
where
    R: PrincipalStore,
{
    let use_case = RegisterTeacherUseCase::new(state.repo.clone(), state.config.clone());
    let teacher = use_case.execute(req.into()).await?;

    Ok(ApiResponse::created(
        (&teacher).into(),
        "Teacher added successfully",
    ))
}

/// PUT /admin/teachers/{id}
pub async fn admin_update_teacher<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
    Payload(req): Payload<TeacherPatchRequest>,
) -> AuthResult<ApiResponse<TeacherResponse>>
where
    R: PrincipalStore,
{
    let teacher_id = TeacherId::parse(&id, "teacher")?;

    let use_case = AdminUpdateTeacherUseCase::new(state.repo.clone());
    let teacher = use_case.execute(teacher_id, req.into()).await?;

    Ok(ApiResponse::ok(
        (&teacher).into(),
        "Teacher updated successfully",
    ))
}

/// DELETE /admin/teachers/{id}
pub async fn admin_delete_teacher<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
) -> AuthResult<ApiResponse<()>>
where
    R: PrincipalStore,
{
    let teacher_id = TeacherId::parse(&id, "teacher")?;

    let use_case = DeleteTeacherUseCase::new(state.repo.clone());
    use_case.execute(teacher_id).await?;

    Ok(ApiResponse::ok((), "Teacher deleted successfully"))
}

/// PUT /admin/students/{id}/promote
pub async fn admin_promote_student<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
) -> AuthResult<ApiResponse<StudentResponse>>
where
    R: PrincipalStore,
{
    let student_id = StudentId::parse(&id, "student")?;

    let use_case = PromoteStudentUseCase::new(state.repo.clone());
    let student = use_case.execute(student_id).await?;

    Ok(ApiResponse::ok(
        (&student).into(),
        "Student promoted to admin successfully",
    ))
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Payload(req): Payload<SignInRequest>,
    kind: PrincipalKind,
    message: &'static str,
) -> AuthResult<impl IntoResponse>
where
    R: PrincipalStore,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(kind, req.into()).await?;

    let cookie = state.config.cookie().build_set_cookie(&output.token);

    Ok((
        [(header::SET_COOKIE, cookie)],
        ApiResponse::ok(
            SessionResponse {
                user: (&output.principal).into(),
                token: output.token,
            },
            message,
        ),
    ))
}
