use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        course::CourseDto,
        instructor::{CreateInstructorDto, InstructorDto, UpdateInstructorDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::instructor::UpdateInstructorParams,
        service::{course::CourseService, instructor::InstructorService},
        state::AppState,
    },
};

/// Tag for grouping instructor endpoints in OpenAPI documentation
pub static INSTRUCTOR_TAG: &str = "instructor";

/// List all instructor profiles.
///
/// # Access Control
/// - `Admin` - Only admins can list instructors
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - All instructor profiles
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/instructors",
    tag = INSTRUCTOR_TAG,
    responses(
        (status = 200, description = "All instructor profiles", body = Vec<InstructorDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_instructors(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let instructors = InstructorService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            instructors
                .into_iter()
                .map(|instructor| instructor.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create an instructor profile with its backing account.
///
/// Inserts the account (role `instructor`) and the profile in one transaction.
///
/// # Access Control
/// - `Admin` - Only admins can create instructors
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Account and profile data
///
/// # Returns
/// - `201 Created` - The created instructor profile
/// - `400 Bad Request` - Missing or malformed fields
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - Username or email already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/instructors",
    tag = INSTRUCTOR_TAG,
    request_body = CreateInstructorDto,
    responses(
        (status = 201, description = "Instructor created", body = InstructorDto),
        (status = 400, description = "Missing or malformed fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_instructor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateInstructorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let instructor = InstructorService::new(&state.db)
        .create(
            &payload.username,
            &payload.email,
            &payload.password,
            &payload.name,
            &payload.specialty,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(instructor.into_dto())))
}

/// Get an instructor profile by id.
///
/// # Access Control
/// - `Admin` - Admins can fetch any instructor
/// - Self - The owning account can fetch its own profile
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `instructor_id` - Id of the profile to fetch
///
/// # Returns
/// - `200 OK` - The instructor profile
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the owner nor an admin
/// - `404 Not Found` - No profile with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/instructors/{id}",
    tag = INSTRUCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Instructor profile id")
    ),
    responses(
        (status = 200, description = "The instructor profile", body = InstructorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither the owner nor an admin", body = ErrorDto),
        (status = 404, description = "No profile with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_instructor_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(instructor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::InstructorSelfOrAdmin(instructor_id)])
        .await?;

    let instructor = InstructorService::new(&state.db)
        .get_by_id(instructor_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Instructor not found".to_string()))?;

    Ok((StatusCode::OK, Json(instructor.into_dto())))
}

/// Patch an instructor profile.
///
/// Only whitelisted fields (name, specialty) can change; the account link is
/// immutable.
///
/// # Access Control
/// - `Admin` - Admins can patch any instructor
/// - Self - The owning account can patch its own profile
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `instructor_id` - Id of the profile to patch
/// - `payload` - Fields to change; absent fields stay untouched
///
/// # Returns
/// - `200 OK` - The updated instructor profile
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the owner nor an admin
/// - `404 Not Found` - No profile with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/instructors/{id}",
    tag = INSTRUCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Instructor profile id")
    ),
    request_body = UpdateInstructorDto,
    responses(
        (status = 200, description = "The updated instructor profile", body = InstructorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither the owner nor an admin", body = ErrorDto),
        (status = 404, description = "No profile with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_instructor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(instructor_id): Path<i32>,
    Json(payload): Json<UpdateInstructorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::InstructorSelfOrAdmin(instructor_id)])
        .await?;

    let instructor = InstructorService::new(&state.db)
        .update(UpdateInstructorParams {
            id: instructor_id,
            name: payload.name,
            specialty: payload.specialty,
        })
        .await?
        .ok_or_else(|| AppError::NotFound("Instructor not found".to_string()))?;

    Ok((StatusCode::OK, Json(instructor.into_dto())))
}

/// Delete an instructor profile.
///
/// Removes the profile, its courses, and their enrollments. The backing
/// account survives and can be deleted separately through the user endpoints.
///
/// # Access Control
/// - `Admin` - Only admins can delete instructors
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `instructor_id` - Id of the profile to delete
///
/// # Returns
/// - `200 OK` - Deletion acknowledgment
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No profile with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/instructors/{id}",
    tag = INSTRUCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Instructor profile id")
    ),
    responses(
        (status = 200, description = "Deletion acknowledgment", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "No profile with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_instructor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(instructor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let deleted = InstructorService::new(&state.db).delete(instructor_id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Instructor deleted successfully".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Instructor not found".to_string()))
    }
}

/// List an instructor's courses.
///
/// The course catalog is public, and so is the projection of it by
/// instructor.
///
/// # Access Control
/// - Public - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `instructor_id` - Id of the instructor profile
///
/// # Returns
/// - `200 OK` - The instructor's courses
/// - `404 Not Found` - No profile with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/instructors/{id}/courses",
    tag = INSTRUCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Instructor profile id")
    ),
    responses(
        (status = 200, description = "The instructor's courses", body = Vec<CourseDto>),
        (status = 404, description = "No profile with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_instructor_courses(
    State(state): State<AppState>,
    Path(instructor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    InstructorService::new(&state.db)
        .get_by_id(instructor_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Instructor not found".to_string()))?;

    let courses = CourseService::new(&state.db)
        .get_by_instructor_id(instructor_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            courses
                .into_iter()
                .map(|course| course.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
