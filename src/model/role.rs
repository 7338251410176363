use serde::{Deserialize, Serialize};

/// Caller role. Stored as TEXT in the users table; every authorization
/// check matches on this enum, never on the raw string.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Employee,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Admin => "Admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Employee" => Some(Role::Employee),
            "Admin" => Some(Role::Admin),
            _ => None,
        }
    }
}
