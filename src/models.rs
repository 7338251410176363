use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserProfile;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[schema(example = "E100")]
    pub employee_id: String,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@x.com", format = "email", value_type = String)]
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "ann@x.com", format = "email", value_type = String)]
    pub email: String,
    pub password: String,
    /// Set by the admin portal; rejects non-admin accounts outright.
    #[serde(default)]
    pub is_admin_login: bool,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[schema(example = "ann@x.com", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "E100")]
    pub employee_id: String,
    pub new_password: String,
}

/// JWT session claims: caller identity, role, and an 8-hour expiry.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    /// Email of the authenticated user.
    pub sub: String,
    pub role: String,
    pub exp: usize,
    pub jti: String,
}
