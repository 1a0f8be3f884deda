//! config/sheet_config.rs
//! Disposición esperada de la hoja: etiquetas de cabecera, valor centinela
//! de "enviado" y prefijo de error.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::recipient_model::Field;

/// Texto exacto de cabecera para cada campo lógico.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderLabels {
    pub name: String,
    pub email: String,
    pub booking_url: String,
    pub recruiter: String,
    pub studio_name: String,
    pub attachment_id: String,
    pub status: String,
}

impl HeaderLabels {
    pub fn label(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::BookingUrl => &self.booking_url,
            Field::Recruiter => &self.recruiter,
            Field::StudioName => &self.studio_name,
            Field::AttachmentId => &self.attachment_id,
            Field::Status => &self.status,
        }
    }
}

impl Default for HeaderLabels {
    fn default() -> Self {
        HeaderLabels {
            name: "NAME".to_string(),
            email: "EMAIL".to_string(),
            booking_url: "BOOKING_URL".to_string(),
            recruiter: "RECRUITER".to_string(),
            studio_name: "STUDIO_NAME".to_string(),
            attachment_id: "ATTACHMENT_ID".to_string(),
            status: "STATUS".to_string(),
        }
    }
}

/// Configuración de la hoja, con valores por defecto
/// (se puede sobreescribir con un .json, ver `--sheet-config`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub headers: HeaderLabels,
    pub sent_marker: String, // comparación exacta, sin trim
    pub error_prefix: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            headers: HeaderLabels::default(),
            sent_marker: "SENT".to_string(),
            error_prefix: "ERROR: ".to_string(),
        }
    }
}

impl SheetConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sheet config {:?}", path))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid sheet config {:?}", path))
    }
}
