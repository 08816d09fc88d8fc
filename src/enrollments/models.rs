// Enrollment data models and DTOs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Enrollment record linking a student to a course.
/// completion_status is initialized to "0" and never updated by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Enrollment {
    pub enrollment_id: i32,
    pub user_id: i32,
    pub course_id: i32,
    pub completion_status: String,
}

/// Request body for POST /enroll
#[derive(Debug, Deserialize, ToSchema)]
pub struct EnrollRequest {
    pub course_id: i32,
}

/// Optional search filter for GET /enrolled-courses
#[derive(Debug, Deserialize)]
pub struct EnrolledQuery {
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrollment_serialization() {
        let enrollment = Enrollment {
            enrollment_id: 1,
            user_id: 2,
            course_id: 3,
            completion_status: "0".to_string(),
        };

        let json = serde_json::to_string(&enrollment).unwrap();
        assert!(json.contains("\"completion_status\":\"0\""));
    }
}
