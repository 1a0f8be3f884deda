//! services/message_renderer.rs
//! Plantillas fijas de asunto y cuerpo; solo sustitución de variables.

use crate::models::email_model::{RenderedMessage, SenderIdentity};
use crate::models::profile_model::ConfigurationProfile;
use crate::models::recipient_model::RecipientRecord;

#[derive(Debug, Clone, Copy, Default)]
pub struct MessageRenderer;

impl MessageRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        record: &RecipientRecord,
        profile: &ConfigurationProfile,
    ) -> RenderedMessage {
        RenderedMessage {
            subject: self.subject(record, profile),
            body: self.body(record, profile),
        }
    }

    /// Remitente: alias configurado con el nombre visible "<empresa> 採用担当".
    pub fn sender(&self, profile: &ConfigurationProfile) -> SenderIdentity {
        SenderIdentity {
            from_alias: profile.mail_alias().to_string(),
            display_name: format!("{} 採用担当", profile.company_name()),
            reply_to: profile.reply_to().to_string(),
        }
    }

    fn subject(&self, record: &RecipientRecord, profile: &ConfigurationProfile) -> String {
        format!(
            "【{}】カジュアル面談のお礼 & {}の体験予約について",
            profile.company_name(),
            record.studio_name
        )
    }

    fn body(&self, record: &RecipientRecord, profile: &ConfigurationProfile) -> String {
        format!(
            "{name} 様\n\
             \n\
             お世話になっております。\n\
             {company} 採用担当の{recruiter}です。\n\
             \n\
             先日はカジュアル面談にお時間をいただき、誠にありがとうございました。\n\
             {studio}の体験予約は以下のURLからお手続きください。\n\
             {booking_url}\n\
             \n\
             資料を添付いたしますので、あわせてご確認ください。\n\
             ご不明な点がございましたら、{reply_to} までお気軽にご連絡ください。\n\
             \n\
             {company} 採用担当 {recruiter}",
            name = record.name,
            company = profile.company_name(),
            recruiter = record.recruiter,
            studio = record.studio_name,
            booking_url = record.booking_url,
            reply_to = profile.reply_to(),
        )
    }
}
