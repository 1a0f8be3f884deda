//! error.rs
//! Taxonomía de errores del envío: fatales (abortan la corrida) y por fila.

use thiserror::Error;

/// Errores que detienen la corrida completa antes (o en lugar) de seguir con
/// la siguiente fila.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("missing required setting '{0}'; run `setup` first")]
    MissingSetting(&'static str),

    #[error("column '{0}' not found in the sheet header")]
    MissingColumn(String),

    #[error("the sheet has no header row")]
    EmptySheet,

    #[error("failed to read the sheet")]
    SheetRead(#[source] anyhow::Error),

    /// Si el estado no se puede persistir, seguir enviando arriesga duplicados
    /// en la siguiente corrida.
    #[error("failed to write status for row {row}")]
    StatusWrite {
        row: usize,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("attachment not found: {0}")]
    NotFound(String),

    #[error("failed to read attachment {id}: {source}")]
    Read {
        id: String,
        #[source]
        source: std::io::Error,
    },
}

/// Fallo reportado por el transporte de correo. El mensaje es lo único que
/// se guarda en la hoja.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DeliveryError {
    message: String,
}

impl DeliveryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[cfg(test)]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Fallo acotado a una fila: se registra en la columna de estado y la corrida
/// continúa.
#[derive(Debug, Error)]
pub enum RowFailure {
    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
