//! config/mod.rs
//! Configuración: almacén de ajustes, disposición de la hoja y SMTP.

pub mod settings_store;
pub mod sheet_config;
pub mod smtp_config;
