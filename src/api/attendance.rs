use crate::{
    auth::auth::AuthUser,
    error::{ApiError, conflict_on_unique},
    model::attendance::{Attendance, AttendanceWithUser},
};
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    #[schema(example = "2026-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(example = "09:02 AM")]
    pub check_in: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutRequest {
    #[schema(example = "2026-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(example = "05:31 PM")]
    pub check_out: String,
}

/// Check-in endpoint. One record per caller per date; a second check-in for
/// the same date is rejected by the unique index.
#[utoipa::path(
    post,
    path = "/api/attendance/checkin",
    request_body = CheckInRequest,
    responses(
        (status = 200, description = "Checked in", body = Object, example = json!({
            "message": "Checked In"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Already checked in for this date")
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn check_in(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    payload: web::Json<CheckInRequest>,
) -> actix_web::Result<impl Responder> {
    sqlx::query(
        r#"
        INSERT INTO attendance (user_id, date, status, check_in)
        VALUES (?, ?, 'Present', ?)
        "#,
    )
    .bind(auth.user_id)
    .bind(payload.date)
    .bind(&payload.check_in)
    .execute(pool.get_ref())
    .await
    .map_err(|e| conflict_on_unique(e, "Already checked in for this date"))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Checked In" })))
}

/// Check-out endpoint. A single conditional UPDATE; with no matching
/// check-in for the date this is a silent no-op.
#[utoipa::path(
    put,
    path = "/api/attendance/checkout",
    request_body = CheckOutRequest,
    responses(
        (status = 200, description = "Checked out (no-op when no record matches)", body = Object,
         example = json!({ "message": "Checked Out" })),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn check_out(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    payload: web::Json<CheckOutRequest>,
) -> actix_web::Result<impl Responder> {
    sqlx::query(
        r#"
        UPDATE attendance
        SET check_out = ?
        WHERE user_id = ? AND date = ?
        "#,
    )
    .bind(&payload.check_out)
    .bind(auth.user_id)
    .bind(payload.date)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, user_id = auth.user_id, "Check-out failed");
        ApiError::Internal
    })?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Checked Out" })))
}

/// Attendance listing: admins see everyone's records with owner identity,
/// employees only their own. Newest date first.
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "Attendance records, newest first", body = [AttendanceWithUser]),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn list_attendance(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
) -> actix_web::Result<impl Responder> {
    if auth.is_admin() {
        let records = sqlx::query_as::<_, AttendanceWithUser>(
            r#"
            SELECT a.id, a.user_id, a.date, a.status, a.check_in, a.check_out,
                   u.name, u.employee_id
            FROM attendance a
            JOIN users u ON a.user_id = u.id
            ORDER BY a.date DESC
            "#,
        )
        .fetch_all(pool.get_ref())
        .await
        .map_err(ApiError::from)?;

        return Ok(HttpResponse::Ok().json(records));
    }

    let records = sqlx::query_as::<_, Attendance>(
        r#"
        SELECT id, user_id, date, status, check_in, check_out
        FROM attendance
        WHERE user_id = ?
        ORDER BY date DESC
        "#,
    )
    .bind(auth.user_id)
    .fetch_all(pool.get_ref())
    .await
    .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(records))
}
