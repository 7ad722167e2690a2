//! Session-scoped authentication.
//!
//! The login backend is a stub: any non-empty credentials are accepted.
//! What matters architecturally is the shape — an [`Authenticator`]
//! value owned and threaded by the host, never process-wide state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub member_since: NaiveDate,
}

impl User {
    pub fn member_since_label(&self) -> String {
        self.member_since.format("%B %Y").to_string()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("email and password must not be empty")]
    MissingCredentials,
    #[error("name, email, and password must not be empty")]
    MissingSignUpFields,
}

/// The injected login surface. Hosts hold one implementation per
/// session and pass it to whatever needs the current user.
pub trait Authenticator: Send {
    fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError>;
    fn sign_up(&mut self, name: &str, email: &str, password: &str) -> Result<User, AuthError>;
    fn logout(&mut self);
    fn current_user(&self) -> Option<&User>;

    fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }
}

/// Accepts any non-empty credentials and fabricates a member profile.
/// Stands in for a real identity backend during demos and tests.
#[derive(Debug, Default)]
pub struct StubAuthenticator {
    session: Option<User>,
}

impl StubAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    fn member(name: &str, email: &str) -> User {
        User {
            id: "1".to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: "👨‍💼".to_string(),
            member_since: NaiveDate::from_ymd_opt(2024, 3, 1)
                .expect("static member-since date is valid"),
        }
    }
}

impl Authenticator for StubAuthenticator {
    fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let user = Self::member("John Doe", email);
        self.session = Some(user.clone());
        Ok(user)
    }

    fn sign_up(&mut self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingSignUpFields);
        }
        let user = Self::member(name, email);
        self.session = Some(user.clone());
        Ok(user)
    }

    fn logout(&mut self) {
        self.session = None;
    }

    fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_rejects_empty_credentials() {
        let mut auth = StubAuthenticator::new();
        assert_eq!(auth.login("", "hunter2"), Err(AuthError::MissingCredentials));
        assert_eq!(
            auth.login("me@example.com", ""),
            Err(AuthError::MissingCredentials)
        );
        assert!(!auth.is_logged_in());
    }

    #[test]
    fn login_accepts_any_non_empty_credentials() {
        let mut auth = StubAuthenticator::new();
        let user = auth.login("me@example.com", "hunter2").expect("stub accepts");
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "me@example.com");
        assert_eq!(user.member_since_label(), "March 2024");
        assert!(auth.is_logged_in());
    }

    #[test]
    fn sign_up_uses_the_provided_name() {
        let mut auth = StubAuthenticator::new();
        let user = auth
            .sign_up("Ada Lovelace", "ada@example.com", "pw")
            .expect("stub accepts");
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(
            auth.current_user().map(|u| u.name.as_str()),
            Some("Ada Lovelace")
        );
    }

    #[test]
    fn logout_clears_the_session() {
        let mut auth = StubAuthenticator::new();
        auth.login("me@example.com", "pw").expect("stub accepts");
        auth.logout();
        assert!(auth.current_user().is_none());
        assert!(!auth.is_logged_in());
    }
}
