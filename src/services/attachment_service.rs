//! services/attachment_service.rs
//! Resolución de identificadores de adjunto a contenido binario.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::error::AttachmentError;
use crate::models::email_model::Attachment;

#[async_trait]
pub trait AttachmentResolver: Send + Sync {
    async fn resolve(&self, id: &str) -> Result<Attachment, AttachmentError>;
}

/// Resuelve cada identificador como un nombre de archivo dentro de `base_dir`.
#[derive(Debug, Clone)]
pub struct DirectoryAttachmentResolver {
    base_dir: PathBuf,
}

impl DirectoryAttachmentResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Solo nombres planos: un único componente normal, sin separadores.
    fn is_valid_id(id: &str) -> bool {
        if id.contains(|c: char| c == '/' || c == '\\') {
            return false;
        }
        let mut components = Path::new(id).components();
        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        )
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl AttachmentResolver for DirectoryAttachmentResolver {
    async fn resolve(&self, id: &str) -> Result<Attachment, AttachmentError> {
        if !Self::is_valid_id(id) {
            return Err(AttachmentError::NotFound(id.to_string()));
        }

        let path = self.base_dir.join(id);
        let data = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AttachmentError::NotFound(id.to_string())
            } else {
                AttachmentError::Read {
                    id: id.to_string(),
                    source: e,
                }
            }
        })?;

        log::debug!("(resolve) Adjunto '{}' leído: {} bytes", id, data.len());
        Ok(Attachment {
            filename: id.to_string(),
            content_type: content_type_for(&path).to_string(),
            data,
        })
    }
}
