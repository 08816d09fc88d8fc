// Database repository for course enrollments

use sqlx::PgPool;

use crate::enrollments::models::Enrollment;
use crate::error::ApiError;

/// Initial completion status for a fresh enrollment
const INITIAL_COMPLETION_STATUS: &str = "0";

/// Repository for enrollment operations
#[derive(Clone)]
pub struct EnrollmentRepository {
    pool: PgPool,
}

impl EnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Enroll a user in a course as a single atomic conditional insert.
    ///
    /// The UNIQUE (user_id, course_id) constraint makes the insert race-free
    /// under concurrent identical requests: the conflicting insert returns
    /// no row, which maps to the already-enrolled outcome.
    pub async fn enroll(&self, user_id: i32, course_id: i32) -> Result<Enrollment, ApiError> {
        sqlx::query_as::<_, Enrollment>(
            "INSERT INTO course_enrollments (user_id, course_id, completion_status) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, course_id) DO NOTHING \
             RETURNING enrollment_id, user_id, course_id, completion_status",
        )
        .bind(user_id)
        .bind(course_id)
        .bind(INITIAL_COMPLETION_STATUS)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::BadRequest("Already enrolled in this course".to_string()))
    }

    /// Remove an enrollment; absent rows are NotFound
    pub async fn unenroll(&self, user_id: i32, course_id: i32) -> Result<(), ApiError> {
        let result =
            sqlx::query("DELETE FROM course_enrollments WHERE user_id = $1 AND course_id = $2")
                .bind(user_id)
                .bind(course_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound {
                resource: "Enrollment",
            });
        }

        Ok(())
    }
}
