//! services/dispatch_service.rs
//! Recorrido secuencial de la hoja: salta, valida, renderiza, envía y
//! registra un estado por fila.

use uuid::Uuid;

use crate::{
    config::sheet_config::SheetConfig,
    error::{DispatchError, RowFailure},
    models::{
        email_model::OutgoingMail,
        profile_model::ConfigurationProfile,
        recipient_model::{ColumnBinding, Field, RecipientRecord},
        run_model::{RunResult, StatusMarker},
    },
    services::{
        attachment_service::AttachmentResolver, column_resolver::resolve_columns,
        email_service::MailTransport, message_renderer::MessageRenderer,
        sheet_service::TabularDataSource,
    },
};

/// Resultado de una fila ya procesada.
#[derive(Debug)]
enum RowOutcome {
    Skipped,
    Ignored,
    Sent,
    Failed(RowFailure),
}

pub struct DispatchService<'a> {
    run_id: Uuid,
    profile: &'a ConfigurationProfile,
    sheet_config: &'a SheetConfig,
    renderer: MessageRenderer,
    resolver: &'a dyn AttachmentResolver,
    transport: &'a dyn MailTransport,
}

impl<'a> DispatchService<'a> {
    pub fn new(
        profile: &'a ConfigurationProfile,
        sheet_config: &'a SheetConfig,
        resolver: &'a dyn AttachmentResolver,
        transport: &'a dyn MailTransport,
    ) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            profile,
            sheet_config,
            renderer: MessageRenderer::new(),
            resolver,
            transport,
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Ejecuta una pasada completa sobre la hoja.
    ///
    /// Solo la falta de columnas o un fallo de lectura/escritura de la hoja
    /// detienen la corrida; los fallos de envío quedan registrados en la fila.
    pub async fn run(&self, sheet: &mut dyn TabularDataSource) -> Result<RunResult, DispatchError> {
        let run_id = self.run_id;
        let grid = sheet.read_grid().map_err(DispatchError::SheetRead)?;
        let header = grid.first().ok_or(DispatchError::EmptySheet)?;
        let columns = resolve_columns(header, &self.sheet_config.headers)?;

        log::info!(
            "(dispatch) Iniciando corrida run_id={} con {} filas de datos",
            run_id,
            grid.len().saturating_sub(1)
        );

        let mut result = RunResult::default();

        for (row_index, row) in grid.iter().enumerate().skip(1) {
            match self.process_row(sheet, row_index, row, &columns).await? {
                RowOutcome::Skipped => {
                    log::info!("(dispatch) Fila {}: ya enviada, se omite", row_index);
                    result.skipped += 1;
                }
                RowOutcome::Ignored => {}
                RowOutcome::Sent => {
                    log::info!("(dispatch) Fila {}: enviada", row_index);
                    result.succeeded += 1;
                }
                RowOutcome::Failed(e) => {
                    log::error!("(dispatch) Fila {}: error al enviar: {}", row_index, e);
                    result.failed += 1;
                }
            }
        }

        log::info!(
            "(dispatch) Corrida run_id={} finalizada. Éxitos={}, errores={}, omitidas={}",
            run_id,
            result.succeeded,
            result.failed,
            result.skipped
        );
        Ok(result)
    }

    async fn process_row(
        &self,
        sheet: &mut dyn TabularDataSource,
        row_index: usize,
        row: &[String],
        columns: &ColumnBinding,
    ) -> Result<RowOutcome, DispatchError> {
        let status = StatusMarker::from_cell(
            columns.cell(row, Field::Status),
            &self.sheet_config.sent_marker,
            &self.sheet_config.error_prefix,
        );
        if status == StatusMarker::Sent {
            return Ok(RowOutcome::Skipped);
        }

        let record = RecipientRecord::from_row(row, columns);
        if !record.has_required_fields() {
            // Se deja intacta: puede ser una fila en blanco o un registro a medio cargar
            if row.iter().any(|cell| !cell.is_empty()) {
                log::warn!(
                    "(dispatch) Fila {}: falta nombre o email, se ignora sin marcar",
                    row_index
                );
            } else {
                log::debug!("(dispatch) Fila {}: vacía, se ignora", row_index);
            }
            return Ok(RowOutcome::Ignored);
        }

        let (marker, outcome) = match self.deliver(&record).await {
            Ok(()) => (StatusMarker::Sent, RowOutcome::Sent),
            Err(e) => (StatusMarker::Error(e.to_string()), RowOutcome::Failed(e)),
        };

        let value = marker.to_cell(&self.sheet_config.sent_marker, &self.sheet_config.error_prefix);
        sheet
            .write_cell(row_index, columns.status, &value)
            .map_err(|source| DispatchError::StatusWrite {
                row: row_index,
                source,
            })?;

        Ok(outcome)
    }

    /// Resuelve el adjunto y entrega el mensaje; cualquier fallo queda acotado a la fila.
    async fn deliver(&self, record: &RecipientRecord) -> Result<(), RowFailure> {
        let rendered = self.renderer.render(record, self.profile);
        let attachment = self.resolver.resolve(&record.attachment_id).await?;

        let mail = OutgoingMail {
            to: record.email.clone(),
            subject: rendered.subject,
            body: rendered.body,
            sender: self.renderer.sender(self.profile),
            attachments: vec![attachment],
        };

        self.transport.send(&mail).await?;
        Ok(())
    }
}
