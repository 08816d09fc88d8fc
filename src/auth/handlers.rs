// HTTP handlers for registration, login and the profile resource

use axum::{extract::State, Json};
use validator::Validate;

use crate::auth::{
    error::AuthError,
    middleware::AuthenticatedUser,
    models::{
        LoginRequest, LoginResponse, RegisterRequest, Role, TokenResponse, UpdateProfileRequest,
        UserProfile,
    },
    password::PasswordService,
};
use crate::AppState;

/// Handler for POST /register
/// Creates a user and returns a session token for it
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User created, session token issued", body = TokenResponse),
        (status = 400, description = "Empty field, unknown role or duplicate email", body = String, example = json!({"error": "Email already registered"}))
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, AuthError> {
    request.validate()?;
    let role =
        Role::from_str(&request.role).map_err(|_| AuthError::InvalidRole(request.role.clone()))?;

    let password_hash = PasswordService::hash(&request.password)?;
    let user = state
        .users
        .create_user(&request.username, &request.email, &password_hash, role)
        .await?;

    let token = state.token_service.issue(user.user_id, user.role)?;
    tracing::info!("Registered user {} with role {}", user.user_id, user.role);

    Ok(Json(TokenResponse { token }))
}

/// Handler for POST /login
/// Verifies credentials and returns a token plus the user's role.
/// An unknown email and a wrong password both map to 400; only the
/// message differs.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token and role", body = LoginResponse),
        (status = 400, description = "Unknown email or wrong password", body = String, example = json!({"error": "Invalid credentials"}))
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let user = state
        .users
        .find_by_email(&request.email)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    if !PasswordService::verify(&request.password, &user.password_hash)? {
        tracing::debug!("Failed login attempt for user {}", user.user_id);
        return Err(AuthError::InvalidCredentials);
    }

    let token = state.token_service.issue(user.user_id, user.role)?;

    Ok(Json(LoginResponse {
        token,
        role: user.role,
    }))
}

/// Handler for GET /profile
/// Returns the authenticated user's own profile
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "The authenticated user's profile", body = UserProfile),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid or expired token"),
        (status = 404, description = "User row no longer exists", body = String, example = json!({"error": "User not found"}))
    ),
    tag = "auth"
)]
pub async fn get_profile_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<UserProfile>, AuthError> {
    let profile = state
        .users
        .find_profile(user.user_id)
        .await?
        .ok_or(AuthError::ProfileNotFound)?;

    Ok(Json(profile))
}

/// Handler for PUT /profile
/// Partial update of the authenticated user's own profile; a supplied
/// password is re-hashed before storage
#[utoipa::path(
    put,
    path = "/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserProfile),
        (status = 400, description = "No fields supplied or duplicate email", body = String, example = json!({"error": "No fields to update"})),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid or expired token"),
        (status = 404, description = "User row no longer exists")
    ),
    tag = "auth"
)]
pub async fn update_profile_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, AuthError> {
    let password_hash = match &request.password {
        Some(password) => Some(PasswordService::hash(password)?),
        None => None,
    };

    let profile = state
        .users
        .update_profile(
            user.user_id,
            request.username.as_deref(),
            request.email.as_deref(),
            password_hash.as_deref(),
        )
        .await?;

    tracing::info!("Updated profile for user {}", user.user_id);
    Ok(Json(profile))
}
