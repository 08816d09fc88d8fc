// Course-scoped lessons resource

pub mod handlers;
pub mod models;
pub mod repository;

pub use handlers::{
    create_lesson_handler, delete_lesson_handler, list_lessons_handler, update_lesson_handler,
};
pub use models::{Lesson, LessonRequest};
pub use repository::LessonRepository;
