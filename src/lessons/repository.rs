// Database repository for course lessons

use sqlx::PgPool;

use crate::error::ApiError;
use crate::lessons::models::Lesson;

/// Repository for lesson operations
#[derive(Clone)]
pub struct LessonRepository {
    pool: PgPool,
}

impl LessonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a course's lessons in lesson_order
    pub async fn list_for_course(&self, course_id: i32) -> Result<Vec<Lesson>, ApiError> {
        let lessons = sqlx::query_as::<_, Lesson>(
            "SELECT lesson_id, course_id, title, content, lesson_order \
             FROM course_lessons WHERE course_id = $1 ORDER BY lesson_order",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lessons)
    }

    /// Insert a lesson under a course
    pub async fn create(
        &self,
        course_id: i32,
        title: &str,
        content: &str,
        lesson_order: i32,
    ) -> Result<Lesson, ApiError> {
        let lesson = sqlx::query_as::<_, Lesson>(
            "INSERT INTO course_lessons (course_id, title, content, lesson_order) \
             VALUES ($1, $2, $3, $4) \
             RETURNING lesson_id, course_id, title, content, lesson_order",
        )
        .bind(course_id)
        .bind(title)
        .bind(content)
        .bind(lesson_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(lesson)
    }

    /// Replace a lesson, scoped by (lesson_id, course_id).
    /// A course id that does not match the lesson's parent is NotFound.
    pub async fn update(
        &self,
        lesson_id: i32,
        course_id: i32,
        title: &str,
        content: &str,
        lesson_order: i32,
    ) -> Result<Lesson, ApiError> {
        sqlx::query_as::<_, Lesson>(
            "UPDATE course_lessons SET title = $1, content = $2, lesson_order = $3 \
             WHERE lesson_id = $4 AND course_id = $5 \
             RETURNING lesson_id, course_id, title, content, lesson_order",
        )
        .bind(title)
        .bind(content)
        .bind(lesson_order)
        .bind(lesson_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ApiError::NotFound { resource: "Lesson" })
    }

    /// Delete a lesson, scoped by (lesson_id, course_id)
    pub async fn delete(&self, lesson_id: i32, course_id: i32) -> Result<(), ApiError> {
        let result =
            sqlx::query("DELETE FROM course_lessons WHERE lesson_id = $1 AND course_id = $2")
                .bind(lesson_id)
                .bind(course_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound { resource: "Lesson" });
        }

        Ok(())
    }
}
