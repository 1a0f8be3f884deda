//! config/smtp_config.rs
//! Parámetros del servidor SMTP, leídos del entorno (.env incluido).

use anyhow::{anyhow, Result};

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub starttls: bool, // false => TLS implícito (ej. puerto 465)
}

impl SmtpConfig {
    /// Variables: `SMTP_HOST` (obligatoria), `SMTP_PORT` (587), `SMTP_USER`,
    /// `SMTP_PASS`, `SMTP_STARTTLS` (true).
    pub fn from_env() -> Result<Self> {
        let host =
            std::env::var("SMTP_HOST").map_err(|_| anyhow!("No se definió SMTP_HOST"))?;
        let port = match std::env::var("SMTP_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow!("SMTP_PORT inválido: {}", raw))?,
            Err(_) => 587,
        };
        let starttls = std::env::var("SMTP_STARTTLS")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        Ok(Self {
            host,
            port,
            user: std::env::var("SMTP_USER").ok(),
            pass: std::env::var("SMTP_PASS").ok(),
            starttls,
        })
    }
}
