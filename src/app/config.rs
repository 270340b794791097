use std::path::PathBuf;

use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

/// Centralized environment configuration.
/// All env vars and defaults are defined here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret material for signing the flash cookie.
    /// Default: dev-secret (change in production)
    pub session_secret: String,

    /// Mail adapter: "console" or "smtp".
    /// Default: smtp
    pub mail_adapter: String,

    /// SMTP host. Sending requires host, user, and pass all set.
    pub smtp_host: Option<String>,

    /// SMTP port. 465 means implicit TLS, anything else STARTTLS.
    /// Default: 587
    pub smtp_port: u16,

    /// SMTP username.
    pub smtp_user: Option<String>,

    /// SMTP password.
    pub smtp_pass: Option<String>,

    /// From address for outgoing notifications.
    /// Default: please-configure@example.com
    pub from_email: String,

    /// Recipient for lead notifications.
    /// Default: please-configure@example.com
    pub notify_email: String,

    /// Path of the append-only lead log.
    /// Default: messages.csv
    pub messages_path: PathBuf,

    /// HTTP listen port.
    /// Default: 5000
    pub port: u16,
}

const DEFAULT_EMAIL: &str = "please-configure@example.com";

impl Config {
    /// Build config from environment variables.
    /// Returns an error if a var that must parse fails to.
    pub fn from_env() -> Result<Self, String> {
        let session_secret = std::env::var("SESSION_SECRET")
            .unwrap_or_else(|_| "dev-secret".to_string());

        let mail_adapter = std::env::var("MAIL_ADAPTER")
            .unwrap_or_else(|_| "smtp".to_string());

        let smtp_host = std::env::var("SMTP_HOST").ok();
        let smtp_port = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse::<u16>()
            .map_err(|_| "SMTP_PORT must be a valid port number")?;
        let smtp_user = std::env::var("SMTP_USER").ok();
        let smtp_pass = std::env::var("SMTP_PASS").ok();

        let from_email = std::env::var("FROM_EMAIL")
            .unwrap_or_else(|_| DEFAULT_EMAIL.to_string());
        let notify_email = std::env::var("NOTIFY_EMAIL")
            .unwrap_or_else(|_| DEFAULT_EMAIL.to_string());

        let messages_path = std::env::var("MESSAGES_CSV")
            .unwrap_or_else(|_| "messages.csv".to_string())
            .into();

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .map_err(|_| "PORT must be a valid port number")?;

        Ok(Self {
            session_secret,
            mail_adapter,
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_pass,
            from_email,
            notify_email,
            messages_path,
            port,
        })
    }

    /// Derive the cookie signing key from the session secret.
    /// SHA-512 stretches arbitrary-length secrets to the 64 bytes `Key` requires.
    pub fn signing_key(&self) -> Key {
        let digest = Sha512::digest(self.session_secret.as_bytes());
        Key::from(digest.as_slice())
    }

    /// Config for tests. No SMTP, console-friendly defaults.
    pub fn for_tests() -> Self {
        Self {
            session_secret: "test-secret".to_string(),
            mail_adapter: "smtp".to_string(),
            smtp_host: None,
            smtp_port: 587,
            smtp_user: None,
            smtp_pass: None,
            from_email: "test@example.com".to_string(),
            notify_email: "leads@example.com".to_string(),
            messages_path: "messages.csv".into(),
            port: 5000,
        }
    }
}
