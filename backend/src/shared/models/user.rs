use argon2::{Argon2, PasswordHasher, password_hash::{self, SaltString, rand_core::OsRng}};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{user_add_request::UserAddRequest, user_edit_request::UserEditRequest, user_get_response::UserGetResponse, user_preferences::UserPreferences};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub preferences: UserPreferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(request: UserAddRequest) -> Result<Self, password_hash::Error> {
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: request.name.trim().to_string(),
            email: normalize_email(&request.email),
            password_hash: User::get_hashed_password(request.password.trim().as_bytes())?,
            is_admin: false,
            preferences: UserPreferences::default(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn edit(self, request: UserEditRequest) -> Result<Self, password_hash::Error> {
        let password_hash = match request.password {
            Some(p) if !p.trim().is_empty() => User::get_hashed_password(p.trim().as_bytes())?,
            _ => self.password_hash,
        };
        Ok(Self {
            id: self.id,
            name: request.name.filter(|n| !n.trim().is_empty()).unwrap_or(self.name),
            email: request.email.filter(|e| !e.trim().is_empty()).map(|e| normalize_email(&e)).unwrap_or(self.email),
            password_hash,
            is_admin: self.is_admin,
            preferences: request.preferences.unwrap_or(self.preferences),
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }

    pub fn to_get_dto(&self) -> UserGetResponse {
        UserGetResponse {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            is_admin: self.is_admin,
            preferences: self.preferences.clone(),
            created_at: self.created_at,
        }
    }

    fn get_hashed_password(password_bytes: &[u8]) -> Result<String, password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        Ok(argon2.hash_password(password_bytes, &salt)?.to_string())
    }
}

/// Emails are the login key, so they are compared case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authentication::auth::verify_password;

    fn request() -> UserAddRequest {
        UserAddRequest {
            name: "Ada".into(),
            email: " Ada@Example.COM ".into(),
            password: "hunter22".into(),
        }
    }

    #[test]
    fn new_user_hashes_password_and_normalizes_email() {
        let user = User::new(request()).unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert_ne!(user.password_hash, "hunter22");
        assert!(verify_password("hunter22", &user.password_hash));
        assert!(!user.is_admin);
    }

    #[test]
    fn edit_keeps_password_when_not_given() {
        let user = User::new(request()).unwrap();
        let hash = user.password_hash.clone();
        let edited = user
            .edit(UserEditRequest {
                name: Some("Ada L.".into()),
                email: None,
                password: None,
                preferences: None,
            })
            .unwrap();
        assert_eq!(edited.name, "Ada L.");
        assert_eq!(edited.email, "ada@example.com");
        assert_eq!(edited.password_hash, hash);
    }

    #[test]
    fn edit_rehashes_new_password() {
        let user = User::new(request()).unwrap();
        let edited = user
            .edit(UserEditRequest {
                name: None,
                email: None,
                password: Some("correct horse".into()),
                preferences: None,
            })
            .unwrap();
        assert!(verify_password("correct horse", &edited.password_hash));
        assert!(!verify_password("hunter22", &edited.password_hash));
    }
}
