use crate::config::settings_store::SettingsStore;
use crate::error::DispatchError;

pub const KEY_COMPANY_NAME: &str = "COMPANY_NAME";
pub const KEY_MAIL_ALIAS: &str = "MAIL_ALIAS";
pub const KEY_REPLY_TO: &str = "RECRUIT_MAIL_ADDR";

/// Perfil de configuración inmutable durante una corrida.
///
/// Alias y dirección de respuesta nunca están vacíos: el constructor falla
/// antes de que se toque una sola fila.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationProfile {
    company_name: String,
    mail_alias: String,
    reply_to: String,
}

impl ConfigurationProfile {
    pub fn new(
        company_name: impl Into<String>,
        mail_alias: impl Into<String>,
        reply_to: impl Into<String>,
    ) -> Result<Self, DispatchError> {
        let mail_alias = mail_alias.into();
        let reply_to = reply_to.into();
        if mail_alias.trim().is_empty() {
            return Err(DispatchError::MissingSetting(KEY_MAIL_ALIAS));
        }
        if reply_to.trim().is_empty() {
            return Err(DispatchError::MissingSetting(KEY_REPLY_TO));
        }
        Ok(Self {
            company_name: company_name.into(),
            mail_alias,
            reply_to,
        })
    }

    /// Lee el perfil desde el almacén de configuración.
    pub fn from_store(store: &SettingsStore) -> Result<Self, DispatchError> {
        let company_name = store.get(KEY_COMPANY_NAME).unwrap_or_default();
        if company_name.is_empty() {
            log::warn!(
                "(from_store) '{}' no está configurado; se usará vacío",
                KEY_COMPANY_NAME
            );
        }
        Self::new(
            company_name,
            store.get(KEY_MAIL_ALIAS).unwrap_or_default(),
            store.get(KEY_REPLY_TO).unwrap_or_default(),
        )
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn mail_alias(&self) -> &str {
        &self.mail_alias
    }

    pub fn reply_to(&self) -> &str {
        &self.reply_to
    }
}
