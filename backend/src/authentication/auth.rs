use crate::{app_state::SharedState, web_api::api_error::ApiError, login_request::LoginRequest, login_response::LoginResponse, settings::Settings, user::User};
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}

pub fn create_token(user: &User, settings: &Settings) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expiry = now + Duration::minutes(settings.jwt_expiration_in_minutes as i64);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        exp: expiry.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
    )
}

pub fn verify_token(token: &str, settings: &Settings) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.jwt_secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Profile plus a fresh token, the body returned by both register and login.
pub fn session_for(user: &User, settings: &Settings) -> Result<LoginResponse, ApiError> {
    let token = create_token(user, settings)?;
    Ok(LoginResponse {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        is_admin: user.is_admin,
        token,
    })
}

pub fn login(state: &SharedState, payload: LoginRequest) -> Result<LoginResponse, ApiError> {
    let user = state
        .data_context
        .get_user_by_email(&payload.email)?
        .filter(|user| verify_password(payload.password.trim(), &user.password_hash))
        .ok_or_else(|| {
            warn!(email = %payload.email, "rejected login");
            ApiError::Unauthorized("Invalid credentials".to_string())
        })?;

    info!(email = %user.email, "user logged in");
    session_for(&user, &state.settings)
}

pub async fn auth_middleware(
    State(state): State<SharedState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized("Not authorized, no token".to_string()))?;

    let claims = verify_token(token, &state.settings).map_err(|e| {
        warn!(error = %e, "rejected bearer token");
        ApiError::Unauthorized("Not authorized".to_string())
    })?;

    let user = state
        .data_context
        .get_user(claims.sub)?
        .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_add_request::UserAddRequest;

    fn settings(secret: &str) -> Settings {
        Settings::parse(&format!(
            r#"{{
                "tcp_socket_binding": "127.0.0.1",
                "tcp_socket_port": 0,
                "database_path": "unused.redb",
                "jwt_secret": "{secret}",
                "jwt_expiration_in_minutes": 30,
                "default_admin_name": "Admin",
                "default_admin_email": "admin@example.com",
                "default_admin_password": "admin"
            }}"#
        ))
        .unwrap()
    }

    fn user() -> User {
        User::new(UserAddRequest {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            password: "cobol".into(),
        })
        .unwrap()
    }

    #[test]
    fn token_round_trip() {
        let settings = settings("alpha");
        let user = user();
        let token = create_token(&user, &settings).unwrap();
        let claims = verify_token(&token, &settings).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, "grace@example.com");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn token_signed_with_other_secret_rejected() {
        let token = create_token(&user(), &settings("alpha")).unwrap();
        assert!(verify_token(&token, &settings("beta")).is_err());
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn session_carries_profile_and_token() {
        let settings = settings("alpha");
        let user = user();
        let session = session_for(&user, &settings).unwrap();
        assert_eq!(session.id, user.id);
        assert!(verify_token(&session.token, &settings).is_ok());
    }
}
