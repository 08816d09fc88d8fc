// Database repository for courses and the lookup tables

use sqlx::PgPool;

use crate::courses::models::{Category, Course, CourseRow, CourseType};
use crate::error::ApiError;
use crate::query::{CourseQueryBuilder, SqlParam};

/// Repository for course operations
#[derive(Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Execute a built course listing query
    pub async fn list(&self, builder: &CourseQueryBuilder) -> Result<Vec<CourseRow>, ApiError> {
        let (sql, params) = builder.build();

        let mut query = sqlx::query_as::<_, CourseRow>(&sql);
        for param in &params {
            query = match param {
                SqlParam::Int(v) => query.bind(*v),
                SqlParam::Text(s) => query.bind(s.clone()),
            };
        }

        let courses = query.fetch_all(&self.pool).await?;
        Ok(courses)
    }

    /// Insert a new course
    pub async fn create(
        &self,
        title: &str,
        description: &str,
        type_id: i32,
        category_id: i32,
        created_by: i32,
    ) -> Result<Course, ApiError> {
        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (title, description, type_id, category_id, created_by) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING course_id, title, description, type_id, category_id, created_by",
        )
        .bind(title)
        .bind(description)
        .bind(type_id)
        .bind(category_id)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(course)
    }

    /// Replace a course's fields
    pub async fn update(
        &self,
        course_id: i32,
        title: &str,
        description: &str,
        type_id: i32,
        category_id: i32,
    ) -> Result<Course, ApiError> {
        sqlx::query_as::<_, Course>(
            "UPDATE courses SET title = $1, description = $2, type_id = $3, category_id = $4 \
             WHERE course_id = $5 \
             RETURNING course_id, title, description, type_id, category_id, created_by",
        )
        .bind(title)
        .bind(description)
        .bind(type_id)
        .bind(category_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ApiError::NotFound { resource: "Course" })
    }

    /// Delete a course. Idempotent: deleting an absent id is still a success.
    pub async fn delete(&self, course_id: i32) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM courses WHERE course_id = $1")
            .bind(course_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List all categories
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT category_id, category_name FROM categories",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// List all course types
    pub async fn list_course_types(&self) -> Result<Vec<CourseType>, ApiError> {
        let types = sqlx::query_as::<_, CourseType>("SELECT type_id, type_name FROM course_types")
            .fetch_all(&self.pool)
            .await?;

        Ok(types)
    }
}
