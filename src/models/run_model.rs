use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Valor de la columna de estado de una fila.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMarker {
    Empty,
    Sent,
    Error(String),
}

impl StatusMarker {
    /// Interpreta el contenido actual de la celda de estado. Solo el centinela
    /// exacto cuenta como enviado.
    pub fn from_cell(cell: &str, sent_marker: &str, error_prefix: &str) -> Self {
        if cell.is_empty() {
            StatusMarker::Empty
        } else if cell == sent_marker {
            StatusMarker::Sent
        } else {
            let message = cell.strip_prefix(error_prefix).unwrap_or(cell);
            StatusMarker::Error(message.to_string())
        }
    }

    /// Texto que se persiste en la celda.
    pub fn to_cell(&self, sent_marker: &str, error_prefix: &str) -> String {
        match self {
            StatusMarker::Empty => String::new(),
            StatusMarker::Sent => sent_marker.to_string(),
            StatusMarker::Error(message) => format!("{error_prefix}{message}"),
        }
    }
}

/// Totales de una corrida. Las filas ignoradas (sin nombre o email) no se cuentan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub succeeded: u32,
    pub skipped: u32,
    pub failed: u32,
}

/// Resumen serializable de una corrida (`send --report`).
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub sheet: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub result: RunResult,
}
