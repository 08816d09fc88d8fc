// HTTP handlers for course lessons
// Reads are open to any authenticated user; mutations are admin only and
// scoped by the (lesson_id, course_id) pair

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::auth::middleware::AuthenticatedUser;
use crate::auth::models::Role;
use crate::error::ApiError;
use crate::lessons::models::{Lesson, LessonRequest};
use crate::AppState;

/// Handler for GET /courses/:courseId/lessons
/// Lists a course's lessons ordered by lesson_order
#[utoipa::path(
    get,
    path = "/courses/{id}/lessons",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "The course's lessons in display order", body = Vec<Lesson>),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid or expired token"),
        (status = 500, description = "Internal server error")
    ),
    tag = "lessons"
)]
pub async fn list_lessons_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(course_id): Path<i32>,
) -> Result<Json<Vec<Lesson>>, ApiError> {
    let lessons = state.lessons.list_for_course(course_id).await?;
    Ok(Json(lessons))
}

/// Handler for POST /courses/:courseId/lessons
#[utoipa::path(
    post,
    path = "/courses/{id}/lessons",
    params(("id" = i32, Path, description = "Course ID")),
    request_body = LessonRequest,
    responses(
        (status = 201, description = "Lesson created", body = Lesson),
        (status = 403, description = "Not an admin", body = String, example = json!({"error": "Permission denied"})),
        (status = 500, description = "Internal server error")
    ),
    tag = "lessons"
)]
pub async fn create_lesson_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(course_id): Path<i32>,
    Json(request): Json<LessonRequest>,
) -> Result<(StatusCode, Json<Lesson>), ApiError> {
    if user.role != Role::Admin {
        return Err(ApiError::Forbidden("Permission denied".to_string()));
    }
    request.validate()?;

    let lesson = state
        .lessons
        .create(course_id, &request.title, &request.content, request.lesson_order)
        .await?;

    tracing::info!("Created lesson {} in course {}", lesson.lesson_id, course_id);
    Ok((StatusCode::CREATED, Json(lesson)))
}

/// Handler for PUT /courses/:courseId/lessons/:lessonId
/// A course id that does not match the lesson's parent yields 404, not 403.
#[utoipa::path(
    put,
    path = "/courses/{id}/lessons/{lesson_id}",
    params(
        ("id" = i32, Path, description = "Course ID"),
        ("lesson_id" = i32, Path, description = "Lesson ID")
    ),
    request_body = LessonRequest,
    responses(
        (status = 200, description = "Lesson updated", body = Lesson),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such lesson under this course"),
        (status = 500, description = "Internal server error")
    ),
    tag = "lessons"
)]
pub async fn update_lesson_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path((course_id, lesson_id)): Path<(i32, i32)>,
    Json(request): Json<LessonRequest>,
) -> Result<Json<Lesson>, ApiError> {
    if user.role != Role::Admin {
        return Err(ApiError::Forbidden("Permission denied".to_string()));
    }
    request.validate()?;

    let lesson = state
        .lessons
        .update(
            lesson_id,
            course_id,
            &request.title,
            &request.content,
            request.lesson_order,
        )
        .await?;

    Ok(Json(lesson))
}

/// Handler for DELETE /courses/:courseId/lessons/:lessonId
#[utoipa::path(
    delete,
    path = "/courses/{id}/lessons/{lesson_id}",
    params(
        ("id" = i32, Path, description = "Course ID"),
        ("lesson_id" = i32, Path, description = "Lesson ID")
    ),
    responses(
        (status = 204, description = "Lesson deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such lesson under this course"),
        (status = 500, description = "Internal server error")
    ),
    tag = "lessons"
)]
pub async fn delete_lesson_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path((course_id, lesson_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    if user.role != Role::Admin {
        return Err(ApiError::Forbidden("Permission denied".to_string()));
    }

    state.lessons.delete(lesson_id, course_id).await?;

    tracing::info!("Deleted lesson {} from course {}", lesson_id, course_id);
    Ok(StatusCode::NO_CONTENT)
}
