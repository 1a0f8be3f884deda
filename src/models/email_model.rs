/// Adjunto ya resuelto a contenido binario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Asunto y cuerpo ya interpolados para un destinatario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub subject: String,
    pub body: String,
}

/// Identidad del remitente: alias (dirección "From"), nombre visible y
/// dirección de respuesta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderIdentity {
    pub from_alias: String,
    pub display_name: String,
    pub reply_to: String,
}

/// Mensaje completo que recibe el transporte.
#[derive(Debug, Clone)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub sender: SenderIdentity,
    pub attachments: Vec<Attachment>,
}
