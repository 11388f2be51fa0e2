//! The configured operator account.
//!
//! There is a single credentials-based operator plus an allow-list of
//! e-mail addresses for identities established by an external OAuth
//! provider. Both are fixed at startup.

use crate::auth::password::{hash_password, verify_password};
use crate::config::AdminConfig;

/// E-mail recorded in `users` for the credentials-based operator.
pub const LOCAL_ADMIN_EMAIL: &str = "admin@local";

#[derive(Debug)]
pub struct AdminAccess {
    username: String,
    password_hash: String,
    allowed_emails: Vec<String>,
}

impl AdminAccess {
    /// Hash the configured password and capture the allow-list.
    pub fn from_config(config: &AdminConfig) -> Result<Self, argon2::password_hash::Error> {
        Ok(Self {
            username: config.username.clone(),
            password_hash: hash_password(&config.password)?,
            allowed_emails: config.emails.iter().map(|e| e.to_lowercase()).collect(),
        })
    }

    /// Check a username/password pair against the operator account.
    ///
    /// The password hash is always verified so a wrong username costs the
    /// same as a wrong password.
    pub fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, argon2::password_hash::Error> {
        let password_ok = verify_password(password, &self.password_hash)?;
        Ok(password_ok && username == self.username)
    }

    /// Whether an externally authenticated identity may act as an operator.
    ///
    /// This is the hook for an OAuth sign-in callback: the provider
    /// handshake happens outside this service, which only answers whether
    /// the resulting e-mail is on the allow-list. No route calls it.
    pub fn is_authorized_email(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        !email.is_empty() && self.allowed_emails.iter().any(|allowed| *allowed == email)
    }
}
