//! Signup/login with JWT issuance.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::core::persistence::user::user_entity::UserEntity;
use crate::core::persistence::user::user_repository::UserRepository;
use crate::domain::validate_body;
use crate::errors::AppError;

use super::dto::{AuthResponse, CredentialsRequest};

const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Token payload, mirroring the original `{ userId, email }` claims
/// plus the standard expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: i64,
    pub email: String,
    pub exp: i64,
}

pub struct AuthService {
    repo: UserRepository,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    pub fn new(repo: UserRepository, secret: &str) -> Self {
        Self {
            repo,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn signup(&self, req: CredentialsRequest) -> Result<AuthResponse, AppError> {
        validate_body(&req)?;

        // Duplicate emails fail the UNIQUE constraint and surface as 400.
        let user = self.repo.create(&req.email, &req.password)?;
        let token = self.issue(&user)?;

        Ok(AuthResponse {
            message: "User created",
            token,
        })
    }

    pub fn login(&self, req: CredentialsRequest) -> Result<AuthResponse, AppError> {
        validate_body(&req)?;

        let user = self
            .repo
            .find_by_email(&req.email)?
            .filter(|user| user.password == req.password)
            .ok_or_else(|| AppError::Validation("Invalid email or password".to_string()))?;

        let token = self.issue(&user)?;

        Ok(AuthResponse {
            message: "Login successful",
            token,
        })
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidToken)
    }

    fn issue(&self, user: &UserEntity) -> Result<String, AppError> {
        let claims = Claims {
            user_id: user.id,
            email: user.email.clone(),
            exp: Utc::now().timestamp() + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(e.to_string()))
    }
}
