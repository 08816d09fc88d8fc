// Courses resource, plus the category and course-type lookup tables

pub mod handlers;
pub mod models;
pub mod repository;

pub use handlers::{
    create_course_handler, delete_course_handler, list_categories_handler,
    list_course_types_handler, list_courses_handler, update_course_handler,
};
pub use models::{Category, Course, CourseListQuery, CourseRow, CourseType, CreateCourseRequest, UpdateCourseRequest};
pub use repository::CourseRepository;
