use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        enrollment::EnrollmentDto,
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::student::UpdateStudentParams,
        service::{enrollment::EnrollmentService, student::StudentService},
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// List all student profiles.
///
/// # Access Control
/// - `Admin` - Only admins can list students
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - All student profiles
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All student profiles", body = Vec<StudentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let students = StudentService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            students
                .into_iter()
                .map(|student| student.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a student profile with its backing account.
///
/// Inserts the account (role `student`) and the profile in one transaction; a
/// failure on either side leaves no partial record.
///
/// # Access Control
/// - `Admin` - Only admins can create students directly
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Account and profile data
///
/// # Returns
/// - `201 Created` - The created student profile
/// - `400 Bad Request` - Missing or malformed fields
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - Username, email or student code already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = StudentDto),
        (status = 400, description = "Missing or malformed fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Username, email or student code already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let student = StudentService::new(&state.db)
        .create(
            &payload.username,
            &payload.email,
            &payload.password,
            &payload.name,
            payload.age,
            &payload.student_code,
            payload.enrollment_year,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// Get a student profile by id.
///
/// # Access Control
/// - `Admin` - Admins can fetch any student
/// - Self - The owning account can fetch its own profile
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `student_id` - Id of the profile to fetch
///
/// # Returns
/// - `200 OK` - The student profile
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the owner nor an admin
/// - `404 Not Found` - No profile with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student profile id")
    ),
    responses(
        (status = 200, description = "The student profile", body = StudentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither the owner nor an admin", body = ErrorDto),
        (status = 404, description = "No profile with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::StudentSelfOrAdmin(student_id)])
        .await?;

    let student = StudentService::new(&state.db)
        .get_by_id(student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Patch a student profile.
///
/// Only whitelisted fields (name, age, student code, enrollment year) can
/// change; the account link is immutable.
///
/// # Access Control
/// - `Admin` - Admins can patch any student
/// - Self - The owning account can patch its own profile
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `student_id` - Id of the profile to patch
/// - `payload` - Fields to change; absent fields stay untouched
///
/// # Returns
/// - `200 OK` - The updated student profile
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the owner nor an admin
/// - `404 Not Found` - No profile with that id
/// - `409 Conflict` - New student code already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student profile id")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "The updated student profile", body = StudentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither the owner nor an admin", body = ErrorDto),
        (status = 404, description = "No profile with that id", body = ErrorDto),
        (status = 409, description = "New student code already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::StudentSelfOrAdmin(student_id)])
        .await?;

    let student = StudentService::new(&state.db)
        .update(UpdateStudentParams {
            id: student_id,
            name: payload.name,
            age: payload.age,
            student_code: payload.student_code,
            enrollment_year: payload.enrollment_year,
        })
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student profile.
///
/// Removes the profile and its enrollments. The backing account survives and
/// can be deleted separately through the user endpoints.
///
/// # Access Control
/// - `Admin` - Only admins can delete students
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `student_id` - Id of the profile to delete
///
/// # Returns
/// - `200 OK` - Deletion acknowledgment
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No profile with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student profile id")
    ),
    responses(
        (status = 200, description = "Deletion acknowledgment", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "No profile with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let deleted = StudentService::new(&state.db).delete(student_id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Student deleted successfully".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Student not found".to_string()))
    }
}

/// List a student's enrollments.
///
/// # Access Control
/// - `Admin` - Admins can list any student's enrollments
/// - Self - The owning account can list its own enrollments
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `student_id` - Id of the student profile
///
/// # Returns
/// - `200 OK` - The student's enrollments
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the owner nor an admin
/// - `404 Not Found` - No profile with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/{id}/enrollments",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student profile id")
    ),
    responses(
        (status = 200, description = "The student's enrollments", body = Vec<EnrollmentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither the owner nor an admin", body = ErrorDto),
        (status = 404, description = "No profile with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_enrollments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::StudentSelfOrAdmin(student_id)])
        .await?;

    // 404 is only reachable by admins; other callers were already refused.
    StudentService::new(&state.db)
        .get_by_id(student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    let enrollments = EnrollmentService::new(&state.db)
        .get_by_student_id(student_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            enrollments
                .into_iter()
                .map(|enrollment| enrollment.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
