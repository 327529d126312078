use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{auth, course, enrollment, instructor, student, user},
    state::AppState,
};

/// Informational root route.
async fn home() -> &'static str {
    "Course Hub API"
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/users", get(user::get_users).post(user::create_user))
        .route(
            "/users/{id}",
            get(user::get_user_by_id)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/students",
            get(student::get_students).post(student::create_student),
        )
        .route(
            "/students/{id}",
            get(student::get_student_by_id)
                .patch(student::update_student)
                .delete(student::delete_student),
        )
        .route(
            "/students/{id}/enrollments",
            get(student::get_student_enrollments),
        )
        .route(
            "/courses",
            get(course::get_courses).post(course::create_course),
        )
        .route(
            "/courses/{id}",
            get(course::get_course_by_id)
                .patch(course::update_course)
                .delete(course::delete_course),
        )
        .route(
            "/courses/{id}/enrollments",
            get(course::get_course_enrollments),
        )
        .route(
            "/enrollments",
            get(enrollment::get_enrollments).post(enrollment::create_enrollment),
        )
        .route(
            "/enrollments/{id}",
            get(enrollment::get_enrollment_by_id)
                .patch(enrollment::update_enrollment)
                .delete(enrollment::delete_enrollment),
        )
        .route(
            "/instructors",
            get(instructor::get_instructors).post(instructor::create_instructor),
        )
        .route(
            "/instructors/{id}",
            get(instructor::get_instructor_by_id)
                .patch(instructor::update_instructor)
                .delete(instructor::delete_instructor),
        )
        .route(
            "/instructors/{id}/courses",
            get(instructor::get_instructor_courses),
        )
}
