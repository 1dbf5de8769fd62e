use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use vitrine_store::{Message, NewMessage};

/// Public contact-form payload.  Required presence checks only; anything
/// non-empty goes through as typed.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(rename = "message")]
    #[validate(length(min = 1, message = "message is required"))]
    pub body: String,
}

impl ContactForm {
    pub fn into_row(self) -> NewMessage {
        NewMessage {
            name: self.name,
            email: self.email,
            phone: self.phone,
            subject: self.subject,
            body: self.body,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    #[serde(rename = "message")]
    pub body: String,
    pub read: bool,
    pub created_at: Option<String>,
}

impl From<Message> for MessageResponse {
    fn from(row: Message) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            subject: row.subject,
            body: row.body,
            read: row.read,
            created_at: row.created_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Admin message list plus the unread tally derived from it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageListResponse {
    pub messages: Vec<MessageResponse>,
    pub unread: usize,
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use validator::Validate;

    #[test]
    fn contact_form_requires_name_email_and_body() {
        let form = ContactForm {
            name: String::new(),
            email: "ada@example.com".into(),
            phone: None,
            subject: None,
            body: "hello".into(),
        };
        assert!(form.validate().is_err());

        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: None,
            subject: None,
            body: "hello".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn optional_fields_pass_through_untouched() {
        let row = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: Some("+000".into()),
            subject: None,
            body: "hello".into(),
        }
        .into_row();
        assert_eq!(row.phone.as_deref(), Some("+000"));
        assert!(row.subject.is_none());
    }
}
