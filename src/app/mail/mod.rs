use std::sync::Arc;

/// Message to be sent via any email implementation.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub from: String,
}

impl EmailMessage {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            from: from.into(),
        }
    }
}

/// Abstract interface for sending email. Swappable per environment.
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError>;
}

/// Errors that can occur during email sending.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("SMTP error: {0}")]
    Smtp(String),
    #[error("Send error: {0}")]
    Send(String),
}

/// Outcome of a best-effort notification attempt. Failures are carried as a
/// value so callers choose a status message instead of handling an error.
#[derive(Debug)]
pub enum Delivery {
    Sent,
    Skipped,
    Failed(EmailError),
}

/// Attempt delivery through the configured sender, if any. Never returns an
/// error: an unconfigured sender yields `Skipped`, a send failure `Failed`.
pub async fn deliver(mail: Option<&Arc<dyn EmailSender>>, message: &EmailMessage) -> Delivery {
    match mail {
        None => Delivery::Skipped,
        Some(sender) => match sender.send(message).await {
            Ok(()) => Delivery::Sent,
            Err(e) => Delivery::Failed(e),
        },
    }
}

// Re-export implementations
pub use console::ConsoleMailer;
pub use smtp::SmtpMailer;

mod console;
mod smtp;

/// Build the email sender from config. Returns `None` when notifications are
/// disabled: the smtp adapter requires host, user, and pass all present, and
/// skips sending entirely otherwise.
pub fn from_config(
    config: &crate::app::config::Config,
) -> Result<Option<Arc<dyn EmailSender>>, EmailError> {
    match config.mail_adapter.as_str() {
        "console" => Ok(Some(Arc::new(ConsoleMailer))),
        "smtp" => match (&config.smtp_host, &config.smtp_user, &config.smtp_pass) {
            (Some(host), Some(user), Some(pass)) => Ok(Some(Arc::new(SmtpMailer::new(
                host.clone(),
                config.smtp_port,
                user.clone(),
                pass.clone(),
            )?))),
            _ => Ok(None),
        },
        _ => Err(EmailError::Config(format!(
            "Unknown MAIL_ADAPTER: {}",
            config.mail_adapter
        ))),
    }
}
