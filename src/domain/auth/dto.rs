//! Auth API DTOs

use serde::Deserialize;
use serde::Serialize;
use validator::Validate;

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

#[derive(Serialize, Debug)]
pub struct AuthResponse {
    pub message: &'static str,
    pub token: String,
}
