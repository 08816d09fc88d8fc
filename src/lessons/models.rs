// Lesson data models and DTOs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Lesson as stored. A lesson is addressed by the (lesson_id, course_id)
/// pair; mutations must match both.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Lesson {
    pub lesson_id: i32,
    pub course_id: i32,
    pub title: String,
    pub content: String,
    pub lesson_order: i32,
}

/// Request body for creating or replacing a lesson
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LessonRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub content: String,
    pub lesson_order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_request_deserialization() {
        let request: LessonRequest = serde_json::from_str(
            r#"{"title": "Variables", "content": "let bindings", "lesson_order": 2}"#,
        )
        .unwrap();
        assert_eq!(request.title, "Variables");
        assert_eq!(request.lesson_order, 2);
    }

    #[test]
    fn test_lesson_request_requires_title() {
        use validator::Validate;

        let request = LessonRequest {
            title: String::new(),
            content: "body".to_string(),
            lesson_order: 1,
        };
        assert!(request.validate().is_err());
    }
}
