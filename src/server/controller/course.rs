use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::user::Role;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        course::{CourseDto, CreateCourseDto, UpdateCourseDto},
        enrollment::EnrollmentDto,
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::course::{CreateCourseParams, UpdateCourseParams},
        service::{
            course::CourseService, enrollment::EnrollmentService, instructor::InstructorService,
        },
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// List the course catalog.
///
/// # Access Control
/// - Public - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - All courses
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "All courses", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db).get_all().await?;

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

/// Create a course.
///
/// Instructor callers create courses under their own profile; `instructor_id`
/// in the payload, if present, must match it. Admin callers must name the
/// owning instructor explicitly.
///
/// # Access Control
/// - `Admin` - Can create a course for any instructor
/// - `Instructor` - Can create courses under their own profile
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Course data
///
/// # Returns
/// - `201 Created` - The created course
/// - `400 Bad Request` - Missing fields or non-positive capacity/credit hours
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is a student, or an instructor naming another profile
/// - `404 Not Found` - The named instructor does not exist
/// - `409 Conflict` - Course code already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = CourseDto),
        (status = 400, description = "Missing fields or non-positive capacity", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not create courses for this instructor", body = ErrorDto),
        (status = 404, description = "The named instructor does not exist", body = ErrorDto),
        (status = 409, description = "Course code already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::InstructorOrAdmin])
        .await?;

    let instructor_id = if caller.role == Role::Admin {
        payload.instructor_id.ok_or_else(|| {
            AppError::BadRequest("instructor_id is required".to_string())
        })?
    } else {
        let own = InstructorService::new(&state.db)
            .get_by_user_id(caller.id)
            .await?
            .ok_or_else(|| {
                AppError::from(AuthError::AccessDenied(
                    caller.id,
                    "caller has no instructor profile".to_string(),
                ))
            })?;

        match payload.instructor_id {
            Some(id) if id != own.id => {
                return Err(AuthError::AccessDenied(
                    caller.id,
                    "instructors may only create their own courses".to_string(),
                )
                .into());
            }
            _ => own.id,
        }
    };

    let course = CourseService::new(&state.db)
        .create(CreateCourseParams {
            title: payload.title,
            course_code: payload.course_code,
            description: payload.description,
            credit_hours: payload.credit_hours,
            max_capacity: payload.max_capacity,
            instructor_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

/// Get a course by id.
///
/// # Access Control
/// - Public - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `course_id` - Id of the course to fetch
///
/// # Returns
/// - `200 OK` - The course
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "The course", body = CourseDto),
        (status = 404, description = "No course with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db)
        .get_by_id(course_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Patch a course.
///
/// Only whitelisted fields (title, code, description, credit hours, capacity)
/// can change; ownership is immutable.
///
/// # Access Control
/// - `Admin` - Admins can patch any course
/// - Owner - The owning instructor can patch their course
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `course_id` - Id of the course to patch
/// - `payload` - Fields to change; absent fields stay untouched
///
/// # Returns
/// - `200 OK` - The updated course
/// - `400 Bad Request` - Non-positive capacity or credit hours
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the owner nor an admin
/// - `404 Not Found` - No course with that id
/// - `409 Conflict` - New course code already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course id")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "The updated course", body = CourseDto),
        (status = 400, description = "Non-positive capacity or credit hours", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither the owner nor an admin", body = ErrorDto),
        (status = 404, description = "No course with that id", body = ErrorDto),
        (status = 409, description = "New course code already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::CourseOwnerOrAdmin(course_id)])
        .await?;

    let course = CourseService::new(&state.db)
        .update(UpdateCourseParams {
            id: course_id,
            title: payload.title,
            course_code: payload.course_code,
            description: payload.description,
            credit_hours: payload.credit_hours,
            max_capacity: payload.max_capacity,
        })
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Delete a course.
///
/// Removes the course and all its enrollments.
///
/// # Access Control
/// - `Admin` - Admins can delete any course
/// - Owner - The owning instructor can delete their course
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `course_id` - Id of the course to delete
///
/// # Returns
/// - `200 OK` - Deletion acknowledgment
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the owner nor an admin
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Deletion acknowledgment", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither the owner nor an admin", body = ErrorDto),
        (status = 404, description = "No course with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::CourseOwnerOrAdmin(course_id)])
        .await?;

    let deleted = CourseService::new(&state.db).delete(course_id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Course deleted successfully".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Course not found".to_string()))
    }
}

/// List a course's enrollments (the roster).
///
/// # Access Control
/// - `Admin` - Admins can list any course's enrollments
/// - Owner - The owning instructor can list their course's enrollments
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `course_id` - Id of the course
///
/// # Returns
/// - `200 OK` - The course's enrollments
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the owner nor an admin
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/courses/{id}/enrollments",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "The course's enrollments", body = Vec<EnrollmentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither the owner nor an admin", body = ErrorDto),
        (status = 404, description = "No course with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_enrollments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::CourseOwnerOrAdmin(course_id)])
        .await?;

    // 404 is only reachable by admins; other callers were already refused.
    CourseService::new(&state.db)
        .get_by_id(course_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    let enrollments = EnrollmentService::new(&state.db)
        .get_by_course_id(course_id)
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
