use crate::{
    auth::auth::AuthUser,
    error::ApiError,
    model::leave_request::{LeaveDecision, LeaveRequest, LeaveRequestWithUser, LeaveType},
};
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyLeaveRequest {
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    #[schema(example = "2026-01-01", value_type = String, format = "date")]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-03", value_type = String, format = "date")]
    pub end_date: NaiveDate,
    pub remarks: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct LeaveStatusRequest {
    /// Approved or Rejected; anything else fails deserialization.
    pub status: LeaveDecision,
}

/// Submit a leave request. Always enters the Pending state.
#[utoipa::path(
    post,
    path = "/api/leaves",
    request_body = ApplyLeaveRequest,
    responses(
        (status = 200, description = "Leave request submitted", body = Object, example = json!({
            "message": "Leave applied",
            "status": "Pending"
        })),
        (status = 400, description = "startDate after endDate"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn apply_leave(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    payload: web::Json<ApplyLeaveRequest>,
) -> actix_web::Result<impl Responder> {
    if payload.start_date > payload.end_date {
        return Err(ApiError::Validation("startDate cannot be after endDate".into()).into());
    }

    sqlx::query(
        r#"
        INSERT INTO leaves (user_id, leave_type, start_date, end_date, remarks)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(auth.user_id)
    .bind(payload.leave_type.as_str())
    .bind(payload.start_date)
    .bind(payload.end_date)
    .bind(&payload.remarks)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, user_id = auth.user_id, "Failed to create leave request");
        ApiError::Internal
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave applied",
        "status": "Pending"
    })))
}

/// Leave listing: admins see all requests with requester identity,
/// employees only their own. Newest first by id.
#[utoipa::path(
    get,
    path = "/api/leaves",
    responses(
        (status = 200, description = "Leave requests, newest first", body = [LeaveRequestWithUser]),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn list_leaves(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
) -> actix_web::Result<impl Responder> {
    if auth.is_admin() {
        let leaves = sqlx::query_as::<_, LeaveRequestWithUser>(
            r#"
            SELECT l.id, l.user_id, l.leave_type, l.start_date, l.end_date,
                   l.remarks, l.status, u.name, u.employee_id
            FROM leaves l
            JOIN users u ON l.user_id = u.id
            ORDER BY l.id DESC
            "#,
        )
        .fetch_all(pool.get_ref())
        .await
        .map_err(ApiError::from)?;

        return Ok(HttpResponse::Ok().json(leaves));
    }

    let leaves = sqlx::query_as::<_, LeaveRequest>(
        r#"
        SELECT id, user_id, leave_type, start_date, end_date, remarks, status
        FROM leaves
        WHERE user_id = ?
        ORDER BY id DESC
        "#,
    )
    .bind(auth.user_id)
    .fetch_all(pool.get_ref())
    .await
    .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(leaves))
}

/// Admin decision on a pending request. Approved and Rejected are terminal;
/// the conditional UPDATE refuses to touch anything already decided.
#[utoipa::path(
    put,
    path = "/api/leaves/{leave_id}",
    params(("leave_id" = i64, Path, description = "Leave request ID")),
    request_body = LeaveStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = Object, example = json!({
            "message": "Updated"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 409, description = "Leave request not found or already processed")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn set_leave_status(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<LeaveStatusRequest>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let leave_id = path.into_inner();

    let result = sqlx::query(
        r#"
        UPDATE leaves
        SET status = ?
        WHERE id = ? AND status = 'Pending'
        "#,
    )
    .bind(payload.status.as_str())
    .bind(leave_id)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, leave_id, "Leave decision failed");
        ApiError::Internal
    })?;

    if result.rows_affected() == 0 {
        return Err(
            ApiError::Conflict("Leave request not found or already processed".into()).into(),
        );
    }

    tracing::info!(leave_id, status = payload.status.as_str(), "Leave decided");

    Ok(HttpResponse::Ok().json(json!({ "message": "Updated" })))
}
