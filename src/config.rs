// SPDX-License-Identifier: Apache-2.0
use crate::error::RelayError;

/// Environment variable names for SMTP configuration
pub const SMTP_HOST_ENV: &str = "SMTP_HOST";
pub const SMTP_PORT_ENV: &str = "SMTP_PORT";
pub const SMTP_USER_ENV: &str = "SMTP_USER";
pub const SMTP_PASS_ENV: &str = "SMTP_PASS";
pub const FROM_EMAIL_ENV: &str = "FROM_EMAIL";
pub const FROM_NAME_ENV: &str = "FROM_NAME";
pub const SMTP_BCC_ENV: &str = "SMTP_BCC";

/// Default values for the optional settings
pub const DEFAULT_SMTP_HOST: &str = "mail.sabarisastha.org";
pub const DEFAULT_SMTP_PORT: u16 = 465;
pub const DEFAULT_FROM_NAME: &str = "Sabari Sastha Seva Samithi";

/// Process-wide mail configuration, built once at startup and handed to the
/// handlers as shared read-only state.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub from_email: String,
    pub from_name: String,
    /// Optional silent copy of every outgoing confirmation.
    pub bcc: Option<String>,
}

impl MailConfig {
    /// Load the mail configuration from process environment variables.
    ///
    /// Credentials are the one hard precondition: without `SMTP_USER` and
    /// `SMTP_PASS` this fails and the server refuses to start, so a send can
    /// never reach the network unauthenticated.
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, RelayError> {
        let smtp_host = get(SMTP_HOST_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());

        let smtp_port = match get(SMTP_PORT_ENV).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                RelayError::Config(format!("{SMTP_PORT_ENV} is not a valid port: {raw}"))
            })?,
            None => DEFAULT_SMTP_PORT,
        };

        let smtp_user = get(SMTP_USER_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| RelayError::Config(format!("{SMTP_USER_ENV} is not set")))?;
        let smtp_pass = get(SMTP_PASS_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| RelayError::Config(format!("{SMTP_PASS_ENV} is not set")))?;

        // The from-address falls back to the authenticated user, which is
        // what most cPanel-style mail hosts require anyway.
        let from_email = get(FROM_EMAIL_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| smtp_user.clone());

        let from_name = get(FROM_NAME_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FROM_NAME.to_string());

        let bcc = get(SMTP_BCC_ENV).filter(|v| !v.trim().is_empty());

        Ok(Self {
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_pass,
            from_email,
            from_name,
            bcc,
        })
    }
}
