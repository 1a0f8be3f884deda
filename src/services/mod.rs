//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod attachment_service;
pub mod column_resolver;
pub mod dispatch_service;
pub mod email_service;
pub mod message_renderer;
pub mod sheet_service;
