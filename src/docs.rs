use crate::api::attendance::{CheckInRequest, CheckOutRequest};
use crate::api::leave::{ApplyLeaveRequest, LeaveStatusRequest};
use crate::api::user::UserPatch;
use crate::model::attendance::{Attendance, AttendanceWithUser};
use crate::model::leave_request::{LeaveDecision, LeaveRequest, LeaveRequestWithUser, LeaveType};
use crate::model::user::{UserProfile, UserSummary};
use crate::models::{LoginRequest, LoginResponse, ResetPasswordRequest, SignupRequest};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dayflow HRMS API",
        version = "1.0.0",
        description = r#"
## Dayflow — Human Resource Management System

REST API for a small HR system: employees and admins authenticate, manage
profile data, clock daily attendance, and run a leave-request workflow.

### Key Features
- **Accounts** — signup, login (employee/admin portals), password reset
- **Profiles** — self-or-admin partial updates, admin user directory
- **Attendance** — daily check-in / check-out tracking
- **Leaves** — apply, list, approve/reject (admin)

### Security
Protected endpoints require **JWT Bearer authentication**. Tokens are valid
for 8 hours and bind the caller's identity and role.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::auth::handlers::signup,
        crate::auth::handlers::login,
        crate::auth::handlers::reset_password,

        crate::api::user::get_profile,
        crate::api::user::update_user,
        crate::api::user::list_users,

        crate::api::attendance::check_in,
        crate::api::attendance::check_out,
        crate::api::attendance::list_attendance,

        crate::api::leave::apply_leave,
        crate::api::leave::list_leaves,
        crate::api::leave::set_leave_status
    ),
    components(
        schemas(
            SignupRequest,
            LoginRequest,
            LoginResponse,
            ResetPasswordRequest,
            UserProfile,
            UserSummary,
            UserPatch,
            CheckInRequest,
            CheckOutRequest,
            Attendance,
            AttendanceWithUser,
            LeaveType,
            LeaveDecision,
            LeaveRequest,
            LeaveRequestWithUser,
            ApplyLeaveRequest,
            LeaveStatusRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication APIs"),
        (name = "User", description = "Profile and user management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Leave", description = "Leave management APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
