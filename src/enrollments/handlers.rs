// HTTP handlers for enrollments (student only)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::auth::middleware::AuthenticatedUser;
use crate::auth::models::Role;
use crate::courses::models::CourseRow;
use crate::enrollments::models::{EnrollRequest, Enrollment, EnrolledQuery};
use crate::error::ApiError;
use crate::query::CourseQueryBuilder;
use crate::AppState;

/// Handler for POST /enroll
/// Enrolls the authenticated student in a course; enrolling twice in the
/// same course is a 400
#[utoipa::path(
    post,
    path = "/enroll",
    request_body = EnrollRequest,
    responses(
        (status = 201, description = "Enrollment created", body = Enrollment),
        (status = 400, description = "Already enrolled", body = String, example = json!({"error": "Already enrolled in this course"})),
        (status = 403, description = "Not a student", body = String, example = json!({"error": "Only students can enroll in courses"})),
        (status = 500, description = "Internal server error")
    ),
    tag = "enrollments"
)]
pub async fn enroll_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<EnrollRequest>,
) -> Result<(StatusCode, Json<Enrollment>), ApiError> {
    if user.role != Role::Student {
        return Err(ApiError::Forbidden(
            "Only students can enroll in courses".to_string(),
        ));
    }

    let enrollment = state.enrollments.enroll(user.user_id, request.course_id).await?;

    tracing::info!(
        "User {} enrolled in course {}",
        user.user_id,
        request.course_id
    );
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// Handler for DELETE /unenroll/:course_id
#[utoipa::path(
    delete,
    path = "/unenroll/{course_id}",
    params(("course_id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Enrollment removed", body = String, example = json!({"message": "Successfully unenrolled from the course"})),
        (status = 403, description = "Not a student"),
        (status = 404, description = "Not enrolled in this course"),
        (status = 500, description = "Internal server error")
    ),
    tag = "enrollments"
)]
pub async fn unenroll_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(course_id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if user.role != Role::Student {
        return Err(ApiError::Forbidden(
            "Only students can unenroll from courses".to_string(),
        ));
    }

    state.enrollments.unenroll(user.user_id, course_id).await?;

    tracing::info!("User {} unenrolled from course {}", user.user_id, course_id);
    Ok(Json(json!({
        "message": "Successfully unenrolled from the course",
    })))
}

/// Handler for GET /enrolled-courses
/// Lists the courses the authenticated student is enrolled in, with the
/// same free-text search as the catalog listing
#[utoipa::path(
    get,
    path = "/enrolled-courses",
    params(("search" = Option<String>, Query, description = "Case-insensitive substring over title or description")),
    responses(
        (status = 200, description = "The student's enrolled courses", body = Vec<CourseRow>),
        (status = 403, description = "Not a student", body = String, example = json!({"error": "Only students can view enrolled courses"})),
        (status = 500, description = "Internal server error")
    ),
    tag = "enrollments"
)]
pub async fn list_enrolled_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<EnrolledQuery>,
) -> Result<Json<Vec<CourseRow>>, ApiError> {
    if user.role != Role::Student {
        return Err(ApiError::Forbidden(
            "Only students can view enrolled courses".to_string(),
        ));
    }

    let mut builder = CourseQueryBuilder::new();
    builder.add_enrolled_filter(user.user_id);
    if let Some(search) = &query.search {
        builder.add_search_filter(search);
    }

    let courses = state.courses.list(&builder).await?;
    Ok(Json(courses))
}
