use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full user row, including the derived credential. Never serialized to a
/// client; responses go through [`UserProfile`] or [`UserSummary`].
#[derive(Debug, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub job_title: Option<String>,
    pub department: String,
    pub salary: i64,
    pub join_date: Option<NaiveDate>,
}

impl User {
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            id: self.id,
            employee_id: self.employee_id,
            name: self.name,
            email: self.email,
            role: self.role,
            phone: self.phone,
            address: self.address,
            job_title: self.job_title,
            department: self.department,
            salary: self.salary,
            join_date: self.join_date,
        }
    }
}

/// Client-facing profile, credential stripped.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 1,
        "employeeId": "E100",
        "name": "Ann",
        "email": "ann@x.com",
        "role": "Employee",
        "phone": "+8801712345678",
        "address": "12 Park Lane",
        "jobTitle": "Engineer",
        "department": "General",
        "salary": 50000,
        "joinDate": "2026-01-01"
    })
)]
pub struct UserProfile {
    pub id: i64,
    #[schema(example = "E100")]
    pub employee_id: String,
    pub name: String,
    #[schema(example = "ann@x.com", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "Employee")]
    pub role: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub job_title: Option<String>,
    pub department: String,
    pub salary: i64,
    #[schema(example = "2026-01-01", value_type = Option<String>, format = "date")]
    pub join_date: Option<NaiveDate>,
}

/// Directory entry returned by the admin user listing.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub job_title: Option<String>,
    pub department: String,
}
