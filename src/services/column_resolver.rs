//! services/column_resolver.rs
//! Enlaza los campos lógicos con los índices de columna por texto de cabecera.

use crate::config::sheet_config::HeaderLabels;
use crate::error::DispatchError;
use crate::models::recipient_model::{ColumnBinding, Field};

/// Busca, para cada campo, la primera columna cuya cabecera coincide exactamente
/// con la etiqueta configurada. Falla con la primera etiqueta ausente.
pub fn resolve_columns(
    header: &[String],
    labels: &HeaderLabels,
) -> Result<ColumnBinding, DispatchError> {
    let find = |field: Field| -> Result<usize, DispatchError> {
        let label = labels.label(field);
        header
            .iter()
            .position(|cell| cell == label)
            .ok_or_else(|| DispatchError::MissingColumn(label.to_string()))
    };

    Ok(ColumnBinding {
        name: find(Field::Name)?,
        email: find(Field::Email)?,
        booking_url: find(Field::BookingUrl)?,
        recruiter: find(Field::Recruiter)?,
        studio_name: find(Field::StudioName)?,
        attachment_id: find(Field::AttachmentId)?,
        status: find(Field::Status)?,
    })
}
