// Student enrollments resource

pub mod handlers;
pub mod models;
pub mod repository;

pub use handlers::{enroll_handler, list_enrolled_handler, unenroll_handler};
pub use models::{EnrollRequest, Enrollment};
pub use repository::EnrollmentRepository;
