// HTTP handlers for the courses resource and its lookup tables

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::auth::middleware::AuthenticatedUser;
use crate::auth::models::Role;
use crate::courses::models::{
    Category, Course, CourseListQuery, CourseRow, CourseType, CreateCourseRequest,
    UpdateCourseRequest,
};
use crate::error::ApiError;
use crate::query::CourseQueryBuilder;
use crate::AppState;

/// Handler for GET /courses
/// Lists courses for any authenticated user, with optional category, type
/// and free-text search filters
#[utoipa::path(
    get,
    path = "/courses",
    params(
        ("category" = Option<i32>, Query, description = "Filter by category id"),
        ("type" = Option<i32>, Query, description = "Filter by course type id"),
        ("search" = Option<String>, Query, description = "Case-insensitive substring over title or description")
    ),
    responses(
        (status = 200, description = "Matching courses", body = Vec<CourseRow>),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid or expired token"),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "Internal Server Error"}))
    ),
    tag = "courses"
)]
pub async fn list_courses_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(query): Query<CourseListQuery>,
) -> Result<Json<Vec<CourseRow>>, ApiError> {
    tracing::debug!("Listing courses with filters: {:?}", query);

    let mut builder = CourseQueryBuilder::new();
    if let Some(category_id) = query.category {
        builder.add_category_filter(category_id);
    }
    if let Some(type_id) = query.type_filter {
        builder.add_type_filter(type_id);
    }
    if let Some(search) = &query.search {
        builder.add_search_filter(search);
    }

    let courses = state.courses.list(&builder).await?;
    tracing::debug!("Query returned {} courses", courses.len());

    Ok(Json(courses))
}

/// Handler for POST /courses
/// Creates a course (admin only)
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 403, description = "Not an admin", body = String, example = json!({"error": "Permission denied"})),
        (status = 500, description = "Internal server error")
    ),
    tag = "courses"
)]
pub async fn create_course_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    if user.role != Role::Admin {
        return Err(ApiError::Forbidden("Permission denied".to_string()));
    }
    request.validate()?;

    let course = state
        .courses
        .create(
            &request.title,
            &request.description,
            request.type_id,
            request.category_id,
            request.created_by,
        )
        .await?;

    tracing::info!("Created course {} by admin {}", course.course_id, user.user_id);
    Ok((StatusCode::CREATED, Json(course)))
}

/// Handler for PUT /courses/:id
/// Replaces a course's fields (admin only)
#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(("id" = i32, Path, description = "Course ID")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "courses"
)]
pub async fn update_course_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(course_id): Path<i32>,
    Json(request): Json<UpdateCourseRequest>,
) -> Result<Json<Course>, ApiError> {
    if user.role != Role::Admin {
        return Err(ApiError::Forbidden("Permission denied".to_string()));
    }
    request.validate()?;

    let course = state
        .courses
        .update(
            course_id,
            &request.title,
            &request.description,
            request.type_id,
            request.category_id,
        )
        .await?;

    tracing::info!("Updated course {}", course_id);
    Ok(Json(course))
}

/// Handler for DELETE /courses/:id
/// Deletes a course (admin only)
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 403, description = "Not an admin"),
        (status = 500, description = "Internal server error")
    ),
    tag = "courses"
)]
pub async fn delete_course_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(course_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if user.role != Role::Admin {
        return Err(ApiError::Forbidden("Permission denied".to_string()));
    }

    state.courses.delete(course_id).await?;

    tracing::info!("Deleted course {}", course_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All course categories", body = Vec<Category>),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid or expired token"),
        (status = 500, description = "Internal server error")
    ),
    tag = "courses"
)]
pub async fn list_categories_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.courses.list_categories().await?;
    Ok(Json(categories))
}

/// Handler for GET /course-types
#[utoipa::path(
    get,
    path = "/course-types",
    responses(
        (status = 200, description = "All course types", body = Vec<CourseType>),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid or expired token"),
        (status = 500, description = "Internal server error")
    ),
    tag = "courses"
)]
pub async fn list_course_types_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<CourseType>>, ApiError> {
    let types = state.courses.list_course_types().await?;
    Ok(Json(types))
}
