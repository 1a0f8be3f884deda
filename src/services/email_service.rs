//! services/email_service.rs

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::{
    message::{
        header::{ContentDisposition, ContentType},
        Body, Mailbox, MultiPart, SinglePart,
    },
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{
    config::smtp_config::SmtpConfig, error::DeliveryError, models::email_model::OutgoingMail,
};

/// Tiempo máximo por mensaje
const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Transporte de correo: envía un mensaje ya compuesto o devuelve un error
/// con texto legible.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), DeliveryError>;
}

#[derive(Clone)]
pub struct SmtpMailTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl SmtpMailTransport {
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let tls_params = TlsParameters::new(config.host.clone())
            .with_context(|| format!("Invalid TLS parameters for {}", config.host))?;
        let tls = if config.starttls {
            Tls::Required(tls_params)
        } else {
            Tls::Wrapper(tls_params)
        };

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .context("Failed to create SMTP transport")?
            .port(config.port)
            .tls(tls);

        if let (Some(user), Some(pass)) = (&config.user, &config.pass) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        log::info!(
            "(SmtpMailTransport::new) SMTP host={}, port={}, starttls={}",
            config.host,
            config.port,
            config.starttls
        );

        Ok(Self {
            mailer: builder.build(),
            host: config.host.clone(),
        })
    }

    fn build_message(&self, mail: &OutgoingMail) -> Result<Message, DeliveryError> {
        let from_addr: Address = mail.sender.from_alias.parse().map_err(|e| {
            DeliveryError::new(format!(
                "Invalid from address '{}': {e}",
                mail.sender.from_alias
            ))
        })?;
        let from = Mailbox::new(Some(mail.sender.display_name.clone()), from_addr);

        let reply_to: Mailbox = mail.sender.reply_to.parse().map_err(|e| {
            DeliveryError::new(format!(
                "Invalid reply-to address '{}': {e}",
                mail.sender.reply_to
            ))
        })?;

        let to: Mailbox = mail
            .to
            .parse()
            .map_err(|e| DeliveryError::new(format!("Invalid recipient address '{}': {e}", mail.to)))?;

        // Cuerpo en texto plano
        let text_part = SinglePart::builder()
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body.clone());

        let mut multipart = MultiPart::mixed().singlepart(text_part);

        for attach in &mail.attachments {
            let content_type = ContentType::parse(&attach.content_type).map_err(|e| {
                DeliveryError::new(format!(
                    "Invalid content type '{}': {e}",
                    attach.content_type
                ))
            })?;
            let part = SinglePart::builder()
                .header(content_type)
                .header(ContentDisposition::attachment(&attach.filename))
                .body(Body::new(attach.data.clone()));
            multipart = multipart.singlepart(part);
        }

        Message::builder()
            .from(from)
            .reply_to(reply_to)
            .to(to)
            .subject(&mail.subject)
            .multipart(multipart)
            .map_err(|e| DeliveryError::new(format!("Failed to build email: {e}")))
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), DeliveryError> {
        let message = self.build_message(mail)?;

        match tokio::time::timeout(SEND_TIMEOUT, self.mailer.send(message)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(DeliveryError::new(e.to_string())),
            Err(_) => Err(DeliveryError::new(format!(
                "SMTP send to {} timed out after {}s",
                self.host,
                SEND_TIMEOUT.as_secs()
            ))),
        }
    }
}

// AsyncSmtpTransport no implementa Debug
impl std::fmt::Debug for SmtpMailTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailTransport")
            .field("host", &self.host)
            .finish()
    }
}
