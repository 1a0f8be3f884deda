//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod email_model;
pub mod profile_model;
pub mod recipient_model;
pub mod run_model;
