mod auth;
mod config;
mod courses;
mod db;
mod enrollments;
mod error;
mod lessons;
mod query;

use axum::{
    extract::FromRef,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth::{TokenService, UserRepository};
use config::Config;
use courses::CourseRepository;
use enrollments::EnrollmentRepository;
use lessons::LessonRepository;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::register_handler,
        auth::handlers::login_handler,
        auth::handlers::get_profile_handler,
        auth::handlers::update_profile_handler,
        courses::handlers::list_courses_handler,
        courses::handlers::create_course_handler,
        courses::handlers::update_course_handler,
        courses::handlers::delete_course_handler,
        courses::handlers::list_categories_handler,
        courses::handlers::list_course_types_handler,
        lessons::handlers::list_lessons_handler,
        lessons::handlers::create_lesson_handler,
        lessons::handlers::update_lesson_handler,
        lessons::handlers::delete_lesson_handler,
        enrollments::handlers::enroll_handler,
        enrollments::handlers::unenroll_handler,
        enrollments::handlers::list_enrolled_handler,
    ),
    components(
        schemas(
            auth::models::Role,
            auth::models::RegisterRequest,
            auth::models::LoginRequest,
            auth::models::TokenResponse,
            auth::models::LoginResponse,
            auth::models::UserProfile,
            auth::models::UpdateProfileRequest,
            courses::models::Course,
            courses::models::CourseRow,
            courses::models::CreateCourseRequest,
            courses::models::UpdateCourseRequest,
            courses::models::Category,
            courses::models::CourseType,
            lessons::models::Lesson,
            lessons::models::LessonRequest,
            enrollments::models::Enrollment,
            enrollments::models::EnrollRequest,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login and profile"),
        (name = "courses", description = "Course catalog management"),
        (name = "lessons", description = "Course-scoped lesson management"),
        (name = "enrollments", description = "Student enrollments")
    ),
    info(
        title = "Course Marketplace API",
        version = "1.0.0",
        description = "RESTful API for an online course marketplace"
    )
)]
struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub token_service: TokenService,
    pub users: UserRepository,
    pub courses: CourseRepository,
    pub lessons: LessonRepository,
    pub enrollments: EnrollmentRepository,
}

impl AppState {
    pub fn new(db: PgPool, token_service: TokenService) -> Self {
        Self {
            token_service,
            users: UserRepository::new(db.clone()),
            courses: CourseRepository::new(db.clone()),
            lessons: LessonRepository::new(db.clone()),
            enrollments: EnrollmentRepository::new(db),
        }
    }
}

// The authentication extractor pulls the token service out of whatever
// state the router carries.
impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> TokenService {
        state.token_service.clone()
    }
}

/// Creates and configures the application router.
/// Registration and login are the only routes that bypass the
/// authentication gate; CORS is open to any origin.
pub fn create_router(db: PgPool, token_service: TokenService) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let state = AppState::new(db, token_service);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public routes
        .route("/register", post(auth::register_handler))
        .route("/login", post(auth::login_handler))
        // Courses
        .route("/courses", get(courses::list_courses_handler))
        .route("/courses", post(courses::create_course_handler))
        .route("/courses/:id", put(courses::update_course_handler))
        .route("/courses/:id", delete(courses::delete_course_handler))
        // Lookup tables
        .route("/categories", get(courses::list_categories_handler))
        .route("/course-types", get(courses::list_course_types_handler))
        // Lessons, scoped under their course
        .route("/courses/:id/lessons", get(lessons::list_lessons_handler))
        .route("/courses/:id/lessons", post(lessons::create_lesson_handler))
        .route(
            "/courses/:id/lessons/:lesson_id",
            put(lessons::update_lesson_handler),
        )
        .route(
            "/courses/:id/lessons/:lesson_id",
            delete(lessons::delete_lesson_handler),
        )
        // Enrollments
        .route("/enroll", post(enrollments::enroll_handler))
        .route("/unenroll/:course_id", delete(enrollments::unenroll_handler))
        .route("/enrolled-courses", get(enrollments::list_enrolled_handler))
        // Profile
        .route("/profile", get(auth::get_profile_handler))
        .route("/profile", put(auth::update_profile_handler))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    tracing::info!("Course Marketplace API - Starting...");

    let config = Config::from_env().expect("Invalid configuration");

    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    let token_service = TokenService::new(config.jwt_secret.clone());
    let app = create_router(db_pool, token_service);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Course Marketplace API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.expect("Server error");
}

#[cfg(test)]
mod tests;
