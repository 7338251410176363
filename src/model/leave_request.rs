use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub enum LeaveType {
    Sick,
    Casual,
}

impl LeaveType {
    pub fn as_str(&self) -> &str {
        match self {
            LeaveType::Sick => "Sick",
            LeaveType::Casual => "Casual",
        }
    }
}

/// Terminal leave states an admin may assign. Pending is deliberately not
/// representable here: a decision can only move a request out of Pending.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub enum LeaveDecision {
    Approved,
    Rejected,
}

impl LeaveDecision {
    pub fn as_str(&self) -> &str {
        match self {
            LeaveDecision::Approved => "Approved",
            LeaveDecision::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    #[schema(example = "Sick")]
    pub leave_type: String,
    #[schema(example = "2026-01-01", value_type = String, format = "date")]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-03", value_type = String, format = "date")]
    pub end_date: NaiveDate,
    pub remarks: Option<String>,
    #[schema(example = "Pending")]
    pub status: String,
}

/// Leave row joined with requester identity, for the admin listing.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestWithUser {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub leave_type: String,
    #[schema(example = "2026-01-01", value_type = String, format = "date")]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-03", value_type = String, format = "date")]
    pub end_date: NaiveDate,
    pub remarks: Option<String>,
    pub status: String,
    pub name: String,
    pub employee_id: String,
}
