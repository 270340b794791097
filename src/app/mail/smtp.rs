use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, Message},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, Tokio1Executor,
};

use super::{EmailError, EmailMessage, EmailSender};

/// Session timeout covering connect, TLS, auth, and send.
const SMTP_TIMEOUT: Duration = Duration::from_secs(60);

/// SMTP email sender for production use.
///
/// TLS mode follows the port convention: 465 wraps the connection in TLS
/// from the start, any other port connects plaintext and upgrades with
/// STARTTLS (and refuses to continue if the server cannot).
#[derive(Debug)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(host: String, port: u16, user: String, pass: String) -> Result<Self, EmailError> {
        let tls_parameters = TlsParameters::new(host.clone())
            .map_err(|e| EmailError::Config(format!("TLS setup for '{}' failed: {}", host, e)))?;
        let tls = if port == 465 {
            Tls::Wrapper(tls_parameters)
        } else {
            Tls::Required(tls_parameters)
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&host)
            .port(port)
            .tls(tls)
            .credentials(Credentials::new(user, pass))
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        Ok(Self { transport })
    }
}

#[async_trait]
impl EmailSender for SmtpMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        let from: Mailbox = message.from.parse().map_err(|e| {
            EmailError::Config(format!("Invalid from address '{}': {}", message.from, e))
        })?;

        let to: Mailbox = message.to.parse().map_err(|e| {
            EmailError::Config(format!("Invalid to address '{}': {}", message.to, e))
        })?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(&message.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| EmailError::Send(format!("Failed to build email message: {}", e)))?;

        lettre::AsyncTransport::send(&self.transport, email)
            .await
            .map(|_| ())
            .map_err(|e| EmailError::Smtp(format!("SMTP send failed: {}", e)))?;

        Ok(())
    }
}
