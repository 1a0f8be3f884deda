//! app.rs
//! Conecta los comandos de la CLI con los servicios.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::{
    cli::SendArgs,
    config::{settings_store::SettingsStore, sheet_config::SheetConfig, smtp_config::SmtpConfig},
    models::{
        profile_model::{ConfigurationProfile, KEY_COMPANY_NAME, KEY_MAIL_ALIAS, KEY_REPLY_TO},
        run_model::{RunReport, RunResult},
    },
    services::{
        attachment_service::DirectoryAttachmentResolver, dispatch_service::DispatchService,
        email_service::SmtpMailTransport, sheet_service::CsvSheet,
    },
};

/// Preguntas del asistente, en orden.
const SETUP_QUESTIONS: [(&str, &str); 3] = [
    (KEY_COMPANY_NAME, "Nombre de la empresa (ej: Acme S.A.)"),
    (KEY_MAIL_ALIAS, "Alias remitente (dirección configurada en el servidor SMTP)"),
    (KEY_REPLY_TO, "Dirección de respuesta y firma"),
];

/// `send`: una pasada completa sobre la hoja.
pub async fn run_send(settings_path: &Path, args: &SendArgs) -> Result<RunResult> {
    // Precondiciones: se validan antes de abrir la hoja
    let store = SettingsStore::load(settings_path)?;
    let profile = ConfigurationProfile::from_store(&store)?;

    let sheet_config = match &args.sheet_config {
        Some(path) => SheetConfig::load(path)?,
        None => SheetConfig::default(),
    };

    let smtp_config = SmtpConfig::from_env()?;
    let transport = SmtpMailTransport::new(&smtp_config)?;
    let resolver = DirectoryAttachmentResolver::new(&args.attachments);
    let mut sheet = CsvSheet::open(&args.sheet)?;

    let service = DispatchService::new(&profile, &sheet_config, &resolver, &transport);
    let started_at = Utc::now();
    let result = service.run(&mut sheet).await?;

    let report = RunReport {
        run_id: service.run_id(),
        sheet: sheet.path().display().to_string(),
        started_at,
        finished_at: Utc::now(),
        result,
    };
    Ok(finish_run(args.report.as_deref(), report))
}

/// Cierra la corrida: los estados ya están en la hoja, así que un resumen que
/// no se puede escribir solo se advierte y no cambia el resultado.
pub(crate) fn finish_run(report_path: Option<&Path>, report: RunReport) -> RunResult {
    if let Some(path) = report_path {
        match write_report(path, &report) {
            Ok(()) => log::info!("(finish_run) Resumen escrito en {:?}", path),
            Err(e) => log::warn!("(finish_run) No se pudo escribir el resumen: {:#}", e),
        }
    }
    report.result
}

fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let raw = serde_json::to_string_pretty(report)?;
    std::fs::write(path, raw).with_context(|| format!("Failed to write report {:?}", path))
}

/// `setup`: asistente interactivo. Devuelve `false` si el usuario lo interrumpe;
/// en ese caso no se guarda nada.
pub fn run_setup<R: BufRead, W: Write>(
    settings_path: &Path,
    mut input: R,
    mut output: W,
) -> Result<bool> {
    let mut store = SettingsStore::load(settings_path)?;

    for (key, label) in SETUP_QUESTIONS {
        write!(output, "{} : ", label)?;
        output.flush()?;

        let mut answer = String::new();
        let read = input.read_line(&mut answer)?;
        let answer = answer.trim();
        if read == 0 || answer.is_empty() {
            writeln!(output, "Configuración interrumpida.")?;
            return Ok(false);
        }
        store.set(key, answer);
    }

    store.save(settings_path)?;
    writeln!(output, "Configuración completa. Ya se pueden enviar correos.")?;
    log::info!("(run_setup) Configuración guardada en {:?}", settings_path);
    Ok(true)
}
