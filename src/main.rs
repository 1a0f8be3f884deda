use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;

use crate::cli::{Cli, Command};
use crate::logger::init_logger;

mod app;
mod cli;
mod config;
mod error;
mod logger;
mod models;
mod services;
#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok(); // Cargar .env al inicio
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let outcome = match &cli.command {
        Command::Send(args) => app::run_send(&cli.settings, args).await.map(|result| {
            println!(
                "Proceso completado\nÉxitos: {}\nErrores: {}\nOmitidas: {}",
                result.succeeded, result.failed, result.skipped
            );
        }),
        Command::Setup => {
            let stdin = std::io::stdin();
            app::run_setup(&cli.settings, stdin.lock(), std::io::stdout()).map(|_| ())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("(main) {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
