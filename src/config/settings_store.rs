//! config/settings_store.rs
//! Almacén clave-valor persistente (JSON) que escribe el asistente `setup`.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsStore {
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    /// Carga el archivo; si no existe se devuelve un almacén vacío.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("(load) No existe {:?}, se usa configuración vacía", path);
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {:?}", path))?;
        serde_json::from_str(&raw).with_context(|| format!("Invalid settings file {:?}", path))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw).with_context(|| format!("Failed to write settings {:?}", path))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}
