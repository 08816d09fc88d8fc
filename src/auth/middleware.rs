// Authentication gate for protected routes

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use tracing::warn;

use crate::auth::{error::AuthError, models::Role, token::TokenService};

/// Identity attached to every authenticated request.
///
/// The extractor is the sole authentication gate: it rejects a missing or
/// malformed Authorization header with 401, and any token that fails
/// verification (bad signature or expired) with 403. Handlers that need a
/// specific role check `role` themselves.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub role: Role,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    TokenService: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let endpoint = parts.uri.path().to_string();

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| {
                warn!("Missing Authorization header for endpoint: {}", endpoint);
                AuthError::MissingToken
            })?
            .to_str()
            .map_err(|_| AuthError::MissingToken)?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!(
                "Authorization header missing 'Bearer ' prefix for endpoint: {}",
                endpoint
            );
            AuthError::MissingToken
        })?;

        let token_service = TokenService::from_ref(state);
        let claims = token_service.verify(token)?;

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_auth(auth_value: &str) -> Parts {
        let req = Request::builder()
            .uri("/courses")
            .header(header::AUTHORIZATION, auth_value)
            .body(())
            .unwrap();
        req.into_parts().0
    }

    fn parts_without_auth() -> Parts {
        let req = Request::builder().uri("/courses").body(()).unwrap();
        req.into_parts().0
    }

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string())
    }

    #[tokio::test]
    async fn test_valid_token_is_accepted() {
        let service = test_token_service();
        let token = service.issue(42, Role::Admin).unwrap();

        let mut parts = parts_with_auth(&format!("Bearer {}", token));
        let user = AuthenticatedUser::from_request_parts(&mut parts, &service)
            .await
            .unwrap();

        assert_eq!(user.user_id, 42);
        assert_eq!(user.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_missing_header_is_missing_token() {
        let service = test_token_service();

        let mut parts = parts_without_auth();
        let result = AuthenticatedUser::from_request_parts(&mut parts, &service).await;

        assert!(matches!(result.unwrap_err(), AuthError::MissingToken));
    }

    #[tokio::test]
    async fn test_malformed_scheme_is_missing_token() {
        let service = test_token_service();
        let token = service.issue(1, Role::Student).unwrap();

        // A valid token under the wrong scheme still short-circuits at 401
        for auth_value in [
            token.as_str(),
            "Basic dXNlcjpwYXNz",
            "bearer lowercase-scheme",
        ] {
            let mut parts = parts_with_auth(auth_value);
            let result = AuthenticatedUser::from_request_parts(&mut parts, &service).await;
            assert!(matches!(result.unwrap_err(), AuthError::MissingToken));
        }
    }

    #[tokio::test]
    async fn test_garbage_token_is_invalid() {
        let service = test_token_service();

        let mut parts = parts_with_auth("Bearer not.a.valid.jwt");
        let result = AuthenticatedUser::from_request_parts(&mut parts, &service).await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_invalid() {
        let other = TokenService::new("some_other_secret".to_string());
        let token = other.issue(1, Role::Admin).unwrap();

        let service = test_token_service();
        let mut parts = parts_with_auth(&format!("Bearer {}", token));
        let result = AuthenticatedUser::from_request_parts(&mut parts, &service).await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken));
    }
}
