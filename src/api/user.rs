use crate::{
    auth::{auth::AuthUser, password::hash_password},
    error::{ApiError, conflict_on_unique},
    model::user::{UserProfile, UserSummary},
    utils::db_utils::{SqlValue, UpdateBuilder, execute_update},
};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::ToSchema;

/// Partial profile update. Absent fields are untouched. jobTitle and salary
/// carry an admin-only policy; for other callers they are ignored rather
/// than rejected.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[schema(example = "ann@x.com", format = "email", value_type = Option<String>)]
    pub email: Option<String>,
    pub password: Option<String>,
    pub job_title: Option<String>,
    pub salary: Option<i64>,
}

const PUBLIC_COLUMNS: &str =
    "id, employee_id, name, email, role, phone, address, job_title, department, salary, join_date";

/// Caller's own profile, credential stripped.
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Caller profile", body = UserProfile),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Account no longer exists")
    ),
    security(("bearer_auth" = [])),
    tag = "User"
)]
pub async fn get_profile(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
) -> actix_web::Result<impl Responder> {
    let sql = format!("SELECT {} FROM users WHERE id = ?", PUBLIC_COLUMNS);

    let profile = sqlx::query_as::<_, UserProfile>(&sql)
        .bind(auth.user_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    Ok(HttpResponse::Ok().json(profile))
}

/// Field-level profile patch under the self-or-admin policy, compiled into
/// one atomic UPDATE over the present fields.
#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    params(("user_id" = i64, Path, description = "Target user ID")),
    request_body = UserPatch,
    responses(
        (status = 200, description = "Update applied", body = Object, example = json!({
            "message": "Update Successful"
        })),
        (status = 403, description = "Caller is neither the target nor an admin"),
        (status = 404, description = "Target user does not exist"),
        (status = 409, description = "New email already in use")
    ),
    security(("bearer_auth" = [])),
    tag = "User"
)]
pub async fn update_user(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<UserPatch>,
) -> actix_web::Result<impl Responder> {
    let target_id = path.into_inner();

    auth.require_self_or_admin(target_id)?;

    let patch = payload.into_inner();
    let mut builder = UpdateBuilder::new("users");

    // Self-or-admin fields
    if let Some(name) = patch.name {
        builder.set("name", SqlValue::Text(name));
    }
    if let Some(phone) = patch.phone {
        builder.set("phone", SqlValue::Text(phone));
    }
    if let Some(address) = patch.address {
        builder.set("address", SqlValue::Text(address));
    }
    if let Some(email) = patch.email {
        builder.set("email", SqlValue::Text(email));
    }
    if let Some(password) = patch.password {
        let hashed = hash_password(&password).map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            ApiError::Internal
        })?;
        builder.set("password", SqlValue::Text(hashed));
    }

    // Admin-only fields, silently dropped for everyone else
    if auth.is_admin() {
        if let Some(job_title) = patch.job_title {
            builder.set("job_title", SqlValue::Text(job_title));
        }
        if let Some(salary) = patch.salary {
            builder.set("salary", SqlValue::I64(salary));
        }
    }

    let update = match builder.build("id", target_id) {
        Some(update) => update,
        None => return Ok(HttpResponse::Ok().json(json!({ "message": "No changes" }))),
    };

    let affected = execute_update(pool.get_ref(), update)
        .await
        .map_err(|e| conflict_on_unique(e, "Email exists"))?;

    if affected == 0 {
        return Err(ApiError::NotFound("User not found".into()).into());
    }

    tracing::info!(target_id, caller_id = auth.user_id, "User updated");

    Ok(HttpResponse::Ok().json(json!({ "message": "Update Successful" })))
}

/// Admin-only user directory. Public fields only.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users' public fields", body = [UserSummary]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "User"
)]
pub async fn list_users(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let users = sqlx::query_as::<_, UserSummary>(
        "SELECT id, employee_id, name, email, role, job_title, department FROM users",
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(users))
}
