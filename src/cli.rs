//! cli.rs
//! Argumentos de línea de comandos.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "recruit-mailer",
    version,
    about = "Envío masivo de correos de seguimiento a candidatos desde una hoja CSV"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Archivo de configuración clave-valor que escribe `setup`.
    #[arg(long, global = true, default_value = "settings.json", value_name = "PATH")]
    pub settings: PathBuf,

    /// Log en nivel debug (RUST_LOG tiene prioridad).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Envía el correo a cada fila pendiente y marca su estado.
    Send(SendArgs),

    /// Pregunta los datos del remitente y los guarda en el archivo de configuración.
    Setup,
}

#[derive(Debug, Parser)]
pub struct SendArgs {
    /// Hoja CSV con cabecera y una fila por candidato.
    #[arg(long, value_name = "CSV")]
    pub sheet: PathBuf,

    /// Carpeta donde se buscan los adjuntos por su identificador.
    #[arg(long, value_name = "DIR")]
    pub attachments: PathBuf,

    /// JSON con etiquetas de cabecera, centinela y prefijo de error.
    #[arg(long = "sheet-config", value_name = "JSON")]
    pub sheet_config: Option<PathBuf>,

    /// Escribe un resumen JSON de la corrida.
    #[arg(long, value_name = "JSON")]
    pub report: Option<PathBuf>,
}
