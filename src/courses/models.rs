// Course data models and DTOs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Course as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub course_id: i32,
    pub title: String,
    pub description: String,
    pub type_id: i32,
    pub category_id: i32,
    pub created_by: i32,
}

/// Course row as returned by the list endpoints: the stored columns joined
/// with the type and category display names
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CourseRow {
    pub course_id: i32,
    pub title: String,
    pub description: String,
    pub type_id: i32,
    pub category_id: i32,
    pub created_by: i32,
    pub type_name: String,
    pub category_name: String,
}

/// Static lookup: course category
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
}

/// Static lookup: course type
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CourseType {
    pub type_id: i32,
    pub type_name: String,
}

/// Optional filters for GET /courses.
/// All dimensions combine with AND; `search` matches title OR description.
#[derive(Debug, Deserialize)]
pub struct CourseListQuery {
    pub category: Option<i32>,
    #[serde(rename = "type")]
    pub type_filter: Option<i32>,
    pub search: Option<String>,
}

/// Request body for POST /courses
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    pub type_id: i32,
    pub category_id: i32,
    pub created_by: i32,
}

/// Request body for PUT /courses/:id (full replacement, as the UI sends
/// every field)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    pub type_id: i32,
    pub category_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_type_keyword_rename() {
        let query: CourseListQuery =
            serde_json::from_str(r#"{"category": 2, "type": 5, "search": "intro"}"#).unwrap();
        assert_eq!(query.category, Some(2));
        assert_eq!(query.type_filter, Some(5));
        assert_eq!(query.search.as_deref(), Some("intro"));
    }

    #[test]
    fn test_list_query_all_filters_optional() {
        let query: CourseListQuery = serde_json::from_str("{}").unwrap();
        assert!(query.category.is_none());
        assert!(query.type_filter.is_none());
        assert!(query.search.is_none());
    }

    #[test]
    fn test_course_row_serializes_join_columns() {
        let row = CourseRow {
            course_id: 1,
            title: "Introduction to Rust".to_string(),
            description: "Ownership and borrowing".to_string(),
            type_id: 2,
            category_id: 3,
            created_by: 4,
            type_name: "Video".to_string(),
            category_name: "Programming".to_string(),
        };

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"type_name\":\"Video\""));
        assert!(json.contains("\"category_name\":\"Programming\""));
    }
}
