// Users resource: registration, login, profile, and the authentication gate

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod token;

pub use error::AuthError;
pub use handlers::{get_profile_handler, login_handler, register_handler, update_profile_handler};
pub use middleware::AuthenticatedUser;
pub use models::{LoginRequest, LoginResponse, RegisterRequest, Role, TokenResponse, User, UserProfile};
pub use repository::UserRepository;
pub use token::{Claims, TokenService};
