//! User session
//!
//! The original application read the connected user from ambient key-value
//! storage. Here the identity is injected explicitly at construction and is
//! read-only for the submission flow.

use billed_core::models::{User, UserType};

#[derive(Debug, Clone)]
pub struct Session {
    user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// Convenience constructor for the employee flow.
    pub fn employee(email: impl Into<String>) -> Self {
        Self::new(User::new(UserType::Employee, email))
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_session() {
        let session = Session::employee("employee@test.tld");
        assert!(session.user().is_employee());
        assert_eq!(session.email(), "employee@test.tld");
    }
}
