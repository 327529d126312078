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
        enrollment::{CreateEnrollmentDto, EnrollmentDto, UpdateEnrollmentDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::enrollment::{parse_status, CreateEnrollmentParams, UpdateEnrollmentParams},
        service::{
            enrollment::EnrollmentService, instructor::InstructorService, student::StudentService,
        },
        state::AppState,
    },
};

/// Tag for grouping enrollment endpoints in OpenAPI documentation
pub static ENROLLMENT_TAG: &str = "enrollment";

/// List enrollments visible to the caller.
///
/// The result is scoped by role: admins see every enrollment, instructors see
/// the enrollments of their own courses, students see their own enrollments.
///
/// # Access Control
/// - Any authenticated caller; the scope depends on the role
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Enrollments within the caller's scope
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/enrollments",
    tag = ENROLLMENT_TAG,
    responses(
        (status = 200, description = "Enrollments within the caller's scope", body = Vec<EnrollmentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enrollments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let service = EnrollmentService::new(&state.db);

    let enrollments = match caller.role {
        Role::Admin => service.get_all().await?,
        Role::Instructor => {
            match InstructorService::new(&state.db).get_by_user_id(caller.id).await? {
                Some(instructor) => service.get_by_instructor_id(instructor.id).await?,
                None => Vec::new(),
            }
        }
        Role::Student => {
            match StudentService::new(&state.db).get_by_user_id(caller.id).await? {
                Some(student) => service.get_by_student_id(student.id).await?,
                None => Vec::new(),
            }
        }
    };

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

/// Create an enrollment.
///
/// Students enroll themselves (a `student_id` in the payload must be their own
/// profile); instructors enroll students into courses they own; admins enroll
/// anyone anywhere. The new enrollment starts as `enrolled` with no grade, and
/// the duplicate/capacity checks run atomically with the insert.
///
/// # Access Control
/// - `Admin` - Any student, any course
/// - `Instructor` - Any student, own courses only
/// - `Student` - Own profile only
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Enrollment data (student, course, semester)
///
/// # Returns
/// - `201 Created` - The created enrollment
/// - `400 Bad Request` - Missing student_id or semester
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller may not enroll that student in that course
/// - `404 Not Found` - Student or course does not exist
/// - `409 Conflict` - Duplicate enrollment or course at capacity
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/enrollments",
    tag = ENROLLMENT_TAG,
    request_body = CreateEnrollmentDto,
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentDto),
        (status = 400, description = "Missing student_id or semester", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not enroll that student in that course", body = ErrorDto),
        (status = 404, description = "Student or course does not exist", body = ErrorDto),
        (status = 409, description = "Duplicate enrollment or course at capacity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEnrollmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    let caller = guard.authenticate().await?;

    let student_id = match caller.role {
        Role::Admin => payload.student_id.ok_or_else(|| {
            AppError::BadRequest("student_id is required".to_string())
        })?,
        Role::Student => {
            let own = StudentService::new(&state.db)
                .get_by_user_id(caller.id)
                .await?
                .ok_or_else(|| {
                    AppError::from(AuthError::AccessDenied(
                        caller.id,
                        "caller has no student profile".to_string(),
                    ))
                })?;

            match payload.student_id {
                Some(id) if id != own.id => {
                    return Err(AuthError::AccessDenied(
                        caller.id,
                        "students may only enroll themselves".to_string(),
                    )
                    .into());
                }
                _ => own.id,
            }
        }
        Role::Instructor => {
            guard
                .require(&[Permission::CourseOwnerOrAdmin(payload.course_id)])
                .await?;

            payload.student_id.ok_or_else(|| {
                AppError::BadRequest("student_id is required".to_string())
            })?
        }
    };

    let enrollment = EnrollmentService::new(&state.db)
        .create(CreateEnrollmentParams {
            student_id,
            course_id: payload.course_id,
            semester: payload.semester,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(enrollment.into_dto())))
}

/// Get an enrollment by id.
///
/// # Access Control
/// - `Admin` - Admins can fetch any enrollment
/// - Student - The enrolled student can fetch it
/// - Instructor - The instructor owning the course can fetch it
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `enrollment_id` - Id of the enrollment to fetch
///
/// # Returns
/// - `200 OK` - The enrollment
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not a party to the enrollment
/// - `404 Not Found` - No enrollment with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/enrollments/{id}",
    tag = ENROLLMENT_TAG,
    params(
        ("id" = i32, Path, description = "Enrollment id")
    ),
    responses(
        (status = 200, description = "The enrollment", body = EnrollmentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a party to the enrollment", body = ErrorDto),
        (status = 404, description = "No enrollment with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enrollment_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(enrollment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::EnrollmentPartyOrAdmin(enrollment_id)])
        .await?;

    let enrollment = EnrollmentService::new(&state.db)
        .get_by_id(enrollment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

    Ok((StatusCode::OK, Json(enrollment.into_dto())))
}

/// Patch an enrollment's status or grade.
///
/// Transitions follow the state machine: `enrolled` may become `completed`
/// (grade required) or `dropped` (grade cleared); both are terminal. Student
/// callers may only drop their enrollment; grading is for the owning
/// instructor or an admin.
///
/// # Access Control
/// - `Admin` - Any transition
/// - Instructor - Any transition on enrollments of their own courses
/// - Student - May only drop their own enrollment
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `enrollment_id` - Id of the enrollment to patch
/// - `payload` - Requested status and/or grade
///
/// # Returns
/// - `200 OK` - The updated enrollment
/// - `400 Bad Request` - Transition violates the state machine rules
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller may not apply this change
/// - `404 Not Found` - No enrollment with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/enrollments/{id}",
    tag = ENROLLMENT_TAG,
    params(
        ("id" = i32, Path, description = "Enrollment id")
    ),
    request_body = UpdateEnrollmentDto,
    responses(
        (status = 200, description = "The updated enrollment", body = EnrollmentDto),
        (status = 400, description = "Transition violates the state machine rules", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not apply this change", body = ErrorDto),
        (status = 404, description = "No enrollment with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(enrollment_id): Path<i32>,
    Json(payload): Json<UpdateEnrollmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::EnrollmentPartyOrAdmin(enrollment_id)])
        .await?;

    // Students may drop; they may not grade or complete.
    if caller.role == Role::Student
        && (payload.grade.is_some() || payload.status.as_deref() != Some("dropped"))
    {
        return Err(AuthError::AccessDenied(
            caller.id,
            "students may only drop their enrollments".to_string(),
        )
        .into());
    }

    let status = payload.status.as_deref().map(parse_status).transpose()?;

    let enrollment = EnrollmentService::new(&state.db)
        .update(UpdateEnrollmentParams {
            id: enrollment_id,
            status,
            grade: payload.grade,
        })
        .await?
        .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

    Ok((StatusCode::OK, Json(enrollment.into_dto())))
}

/// Delete an enrollment.
///
/// Hard deletion is an administrative correction; students drop courses by
/// patching the status to `dropped` instead.
///
/// # Access Control
/// - `Admin` - Only admins can delete enrollment records
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `enrollment_id` - Id of the enrollment to delete
///
/// # Returns
/// - `200 OK` - Deletion acknowledgment
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No enrollment with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/enrollments/{id}",
    tag = ENROLLMENT_TAG,
    params(
        ("id" = i32, Path, description = "Enrollment id")
    ),
    responses(
        (status = 200, description = "Deletion acknowledgment", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "No enrollment with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(enrollment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let deleted = EnrollmentService::new(&state.db).delete(enrollment_id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Enrollment deleted successfully".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Enrollment not found".to_string()))
    }
}
