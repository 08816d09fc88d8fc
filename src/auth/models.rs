// User data models and DTOs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// User role, fixed at registration. Gates every mutation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User database model
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Profile view of a user (never exposes the password hash)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserProfile {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Registration request DTO.
///
/// Fields only have to be non-empty; email format and password strength
/// are deliberately not validated (documented behavior).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
    /// "student" or "admin"
    pub role: String,
}

/// Login request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration response: the freshly issued session token
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Login response: token plus the role the client routes on
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

/// Partial profile update; only supplied fields are changed
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::from_str("student").unwrap(), Role::Student);
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
        assert_eq!(Role::Student.to_string(), "student");
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_role_rejects_unknown_values() {
        assert!(Role::from_str("teacher").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"student\"").unwrap(),
            Role::Student
        );
    }

    #[test]
    fn test_register_request_rejects_empty_fields() {
        use validator::Validate;

        let request = RegisterRequest {
            username: "".to_string(),
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
            role: "student".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_accepts_any_nonempty_strings() {
        use validator::Validate;

        // No email-format or password-strength rules
        let request = RegisterRequest {
            username: "u".to_string(),
            email: "not-an-email".to_string(),
            password: "x".to_string(),
            role: "admin".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_profile_partial_deserialization() {
        let update: UpdateProfileRequest =
            serde_json::from_str(r#"{"email": "new@example.com"}"#).unwrap();
        assert_eq!(update.email, Some("new@example.com".to_string()));
        assert_eq!(update.username, None);
        assert_eq!(update.password, None);
    }
}
