//! logger.rs
//! Configuración del logger usando env_logger.

pub fn init_logger(verbose: bool) {
    // RUST_LOG tiene prioridad; si no está, "info" (o "debug" con --verbose).
    let default_level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .init();
}
