use crate::{
    auth::{
        jwt::generate_session_token,
        password::{hash_password, verify_password},
    },
    config::Config,
    error::{ApiError, conflict_on_unique},
    model::{role::Role, user::User},
    models::{LoginRequest, LoginResponse, ResetPasswordRequest, SignupRequest},
};
use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

/// Self-service registration. Role is always Employee here; admin accounts
/// are provisioned out of band.
#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User registered", body = Object, example = json!({
            "message": "Registered",
            "id": 1
        })),
        (status = 400, description = "Missing or empty fields"),
        (status = 409, description = "Employee ID or email already exists")
    ),
    tag = "Auth"
)]
pub async fn signup(
    payload: web::Json<SignupRequest>,
    pool: web::Data<SqlitePool>,
) -> actix_web::Result<impl Responder> {
    let employee_id = payload.employee_id.trim();
    let name = payload.name.trim();
    let email = payload.email.trim();

    if employee_id.is_empty() || name.is_empty() || email.is_empty() || payload.password.is_empty()
    {
        return Err(ApiError::Validation(
            "employeeId, name, email and password must not be empty".into(),
        )
        .into());
    }

    let hashed = hash_password(&payload.password).map_err(|e| {
        tracing::error!(error = %e, "Password hashing failed");
        ApiError::Internal
    })?;

    let result = sqlx::query(
        r#"
        INSERT INTO users (employee_id, name, email, password, role, department, salary, join_date)
        VALUES (?, ?, ?, ?, ?, 'General', 50000, ?)
        "#,
    )
    .bind(employee_id)
    .bind(name)
    .bind(email)
    .bind(&hashed)
    .bind(Role::Employee.as_str())
    .bind(Utc::now().date_naive())
    .execute(pool.get_ref())
    .await
    .map_err(|e| conflict_on_unique(e, "ID or Email exists"))?;

    info!(user_id = result.last_insert_rowid(), "User registered");

    Ok(HttpResponse::Created().json(json!({
        "message": "Registered",
        "id": result.last_insert_rowid()
    })))
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Admin portal login with a non-admin account")
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_login", skip(pool, config, payload), fields(email = %payload.email))]
pub async fn login(
    payload: web::Json<LoginRequest>,
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    info!("Login request received");

    if payload.email.trim().is_empty() || payload.password.is_empty() {
        info!("Validation failed: empty email or password");
        return Err(ApiError::Validation("Email and password required".into()).into());
    }

    debug!("Fetching user from database");

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(payload.email.trim())
        .fetch_optional(pool.get_ref())
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| {
            info!("Invalid credentials: user not found");
            ApiError::Auth("Invalid Credentials".into())
        })?;

    if !verify_password(&payload.password, &user.password) {
        info!("Invalid credentials: password mismatch");
        return Err(ApiError::Auth("Invalid Credentials".into()).into());
    }

    let role = Role::parse(&user.role).ok_or_else(|| {
        tracing::error!(user_id = user.id, role = %user.role, "Unknown role in store");
        ApiError::Internal
    })?;

    // Strict admin portal check: correct credentials are not enough
    if payload.is_admin_login && role != Role::Admin {
        info!("Admin portal login rejected for non-admin account");
        return Err(ApiError::Forbidden("Access Denied: Not an Admin Account".into()).into());
    }

    let token = generate_session_token(
        user.id,
        user.email.clone(),
        role,
        &config.jwt_secret,
        config.session_ttl,
    )
    .map_err(|e| {
        tracing::error!(error = %e, "Token generation failed");
        ApiError::Internal
    })?;

    info!("Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user: user.into_profile(),
    }))
}

/// Password reset guarded by a weak identity proof: the email and employee
/// code must both belong to the same account.
#[utoipa::path(
    post,
    path = "/api/reset-password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password reset", body = Object, example = json!({
            "message": "Password Reset Successfully"
        })),
        (status = 400, description = "Email and employee ID do not match any account")
    ),
    tag = "Auth"
)]
pub async fn reset_password(
    payload: web::Json<ResetPasswordRequest>,
    pool: web::Data<SqlitePool>,
) -> actix_web::Result<impl Responder> {
    if payload.new_password.is_empty() {
        return Err(ApiError::Validation("newPassword must not be empty".into()).into());
    }

    let user_id = sqlx::query_scalar::<_, i64>(
        "SELECT id FROM users WHERE email = ? AND employee_id = ?",
    )
    .bind(payload.email.trim())
    .bind(payload.employee_id.trim())
    .fetch_optional(pool.get_ref())
    .await
    .map_err(ApiError::from)?
    .ok_or_else(|| {
        info!("Password reset verification failed");
        ApiError::Verification("Verification Failed: Details do not match.".into())
    })?;

    let hashed = hash_password(&payload.new_password).map_err(|e| {
        tracing::error!(error = %e, "Password hashing failed");
        ApiError::Internal
    })?;

    sqlx::query("UPDATE users SET password = ? WHERE id = ?")
        .bind(&hashed)
        .bind(user_id)
        .execute(pool.get_ref())
        .await
        .map_err(ApiError::from)?;

    info!(user_id, "Password reset");

    Ok(HttpResponse::Ok().json(json!({ "message": "Password Reset Successfully" })))
}
