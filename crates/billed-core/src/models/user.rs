use serde::{Deserialize, Serialize};

/// Role of the connected user. Only the Employee flow submits bills;
/// Admin reviews them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// Authenticated user identity, created at login and read-only afterwards.
/// The submission handler only needs the email to attach to new bills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub email: String,
}

impl User {
    pub fn new(user_type: UserType, email: impl Into<String>) -> Self {
        Self {
            user_type,
            email: email.into(),
        }
    }

    pub fn is_employee(&self) -> bool {
        self.user_type == UserType::Employee
    }
}
