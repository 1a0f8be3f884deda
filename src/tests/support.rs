//! tests/support.rs
//! Dobles de prueba: hoja en memoria, resolvedor y transporte falsos.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::error::{AttachmentError, DeliveryError};
use crate::models::email_model::{Attachment, OutgoingMail};
use crate::models::profile_model::ConfigurationProfile;
use crate::services::attachment_service::AttachmentResolver;
use crate::services::email_service::MailTransport;
use crate::services::sheet_service::TabularDataSource;

pub const HEADER: [&str; 7] = [
    "NAME",
    "EMAIL",
    "BOOKING_URL",
    "RECRUITER",
    "STUDIO_NAME",
    "ATTACHMENT_ID",
    "STATUS",
];

pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

pub fn candidate(name: &str, email: &str, status: &str) -> Vec<String> {
    row(&[name, email, "http://b", "Bob", "Studio1", "file123", status])
}

pub fn profile() -> ConfigurationProfile {
    ConfigurationProfile::new("Acme", "hr@acme.test", "jobs@acme.test").unwrap()
}

#[derive(Debug, Default)]
pub struct MemorySheet {
    pub rows: Vec<Vec<String>>,
    pub writes: Vec<(usize, usize, String)>,
    pub fail_writes: bool,
}

impl MemorySheet {
    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        let mut all = vec![row(&HEADER)];
        all.extend(rows);
        Self {
            rows: all,
            ..Default::default()
        }
    }

    pub fn status(&self, row: usize) -> &str {
        self.rows[row].get(6).map(String::as_str).unwrap_or("")
    }
}

impl TabularDataSource for MemorySheet {
    fn read_grid(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.rows.clone())
    }

    fn write_cell(&mut self, row: usize, col: usize, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(anyhow!("sheet is read-only"));
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, String::new());
        }
        cells[col] = value.to_string();
        self.writes.push((row, col, value.to_string()));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeResolver {
    pub missing: Vec<String>,
    pub calls: Mutex<Vec<String>>,
}

#[async_trait]
impl AttachmentResolver for FakeResolver {
    async fn resolve(&self, id: &str) -> Result<Attachment, AttachmentError> {
        self.calls.lock().unwrap().push(id.to_string());
        if self.missing.iter().any(|m| m == id) {
            return Err(AttachmentError::NotFound(id.to_string()));
        }
        Ok(Attachment {
            filename: format!("{id}.pdf"),
            content_type: "application/pdf".to_string(),
            data: b"%PDF-1.4".to_vec(),
        })
    }
}

/// Transporte que guarda lo enviado; falla para los destinatarios en `failures`.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub failures: HashMap<String, String>,
    pub attempts: Mutex<Vec<String>>,
    pub sent: Mutex<Vec<OutgoingMail>>,
}

impl RecordingTransport {
    pub fn failing_for(email: &str, message: &str) -> Self {
        let mut failures = HashMap::new();
        failures.insert(email.to_string(), message.to_string());
        Self {
            failures,
            ..Default::default()
        }
    }

    pub fn sent_to(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|m| m.to.clone()).collect()
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), DeliveryError> {
        self.attempts.lock().unwrap().push(mail.to.clone());
        if let Some(message) = self.failures.get(&mail.to) {
            return Err(DeliveryError::new(message.clone()));
        }
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}
