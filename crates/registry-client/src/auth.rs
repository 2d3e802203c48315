//! Client-local login stub.
//!
//! # Purpose
//! Mirrors the original admin UI's gate: a hard-coded credential table, a
//! client-side session flag, and a "remembered username" convenience value.
//! Nothing here is server-verified; the API accepts requests regardless.
//! Real authentication is explicitly out of scope.
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Coordinator,
    Staff,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("enter both a username and a password")]
    MissingCredentials,
    #[error("wrong username or password")]
    InvalidCredentials,
}

pub struct AuthSystem {
    users: HashMap<&'static str, &'static str>,
    session: Option<Session>,
    remembered_user: Option<String>,
}

impl Default for AuthSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSystem {
    pub fn new() -> Self {
        // Placeholder accounts carried over from the original deployment.
        let users = HashMap::from([
            ("admin", "1234"),
            ("coordinator", "coordinator2024"),
            ("clerk", "clerk123"),
        ]);
        Self {
            users,
            session: None,
            remembered_user: None,
        }
    }

    fn role_for(username: &str) -> Role {
        match username {
            "admin" => Role::Administrator,
            "coordinator" => Role::Coordinator,
            _ => Role::Staff,
        }
    }

    /// Check credentials and open a session.
    ///
    /// With `remember` set the username is kept for pre-filling the next
    /// login form; an unticked box clears any remembered value.
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        remember: bool,
    ) -> Result<&Session, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if self.users.get(username) != Some(&password) {
            return Err(AuthError::InvalidCredentials);
        }
        self.remembered_user = remember.then(|| username.to_string());
        self.session = Some(Session {
            username: username.to_string(),
            role: Self::role_for(username),
        });
        Ok(self.session.as_ref().expect("session just set"))
    }

    pub fn logout(&mut self) {
        self.session = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Username to pre-fill on the login form, if one was remembered.
    pub fn remembered_user(&self) -> Option<&str> {
        self.remembered_user.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_credentials_open_a_session_with_role() {
        let mut auth = AuthSystem::new();
        let session = auth.login("admin", "1234", false).unwrap();
        assert_eq!(session.role, Role::Administrator);
        assert!(auth.is_logged_in());

        auth.login("clerk", "clerk123", false).unwrap();
        assert_eq!(auth.session().unwrap().role, Role::Staff);
    }

    #[test]
    fn wrong_or_missing_credentials_are_rejected() {
        let mut auth = AuthSystem::new();
        assert_eq!(
            auth.login("admin", "wrong", false),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            auth.login("", "1234", false),
            Err(AuthError::MissingCredentials)
        );
        assert!(!auth.is_logged_in());
    }

    #[test]
    fn remember_flag_controls_the_stored_username() {
        let mut auth = AuthSystem::new();
        auth.login("admin", "1234", true).unwrap();
        assert_eq!(auth.remembered_user(), Some("admin"));

        // Logging in without the flag clears it.
        auth.login("admin", "1234", false).unwrap();
        assert_eq!(auth.remembered_user(), None);
    }

    #[test]
    fn logout_clears_the_session_but_not_the_remembered_user() {
        let mut auth = AuthSystem::new();
        auth.login("coordinator", "coordinator2024", true).unwrap();
        auth.logout();
        assert!(!auth.is_logged_in());
        assert_eq!(auth.remembered_user(), Some("coordinator"));
    }
}
