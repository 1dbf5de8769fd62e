//! Row types for the three store collections.
//!
//! `id` and `created_at` are assigned by the store; the `New*` payloads used
//! for inserts therefore carry neither.  No row references another.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Collection holding the services shown on the site.
pub const SERVICES: &str = "services";
/// Collection holding portfolio projects.
pub const PORTFOLIO: &str = "portfolio";
/// Collection holding visitor contact messages.
pub const MESSAGES: &str = "messages";

/// One service offered by the studio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Lifecycle state of a portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Completed
    }
}

/// One portfolio project.
///
/// `category` is free text used for public filtering; `kind` is a secondary
/// label stored under the wire name `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One visitor message from the contact form.
///
/// The read flag transitions false to true exactly once, the first time an
/// administrator opens the message, and never reverts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(rename = "message")]
    pub body: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// ── Insert payloads ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image: String,
    pub link: String,
    pub technologies: Vec<String>,
    pub status: ProjectStatus,
}

/// Contact-form insert payload.  The read flag is left to the store default
/// so a fresh message always arrives unread.
#[derive(Debug, Clone, Serialize)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "message")]
    pub body: String,
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn project_status_uses_kebab_case_on_the_wire() {
        let completed = serde_json::to_string(&ProjectStatus::Completed).unwrap();
        let in_progress = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(completed, "\"completed\"");
        assert_eq!(in_progress, "\"in-progress\"");
    }

    #[test]
    fn message_body_maps_to_wire_name() {
        let row: Message = serde_json::from_value(serde_json::json!({
            "id": "m1",
            "name": "Ada",
            "email": "ada@example.com",
            "message": "hello",
        }))
        .unwrap();
        assert_eq!(row.body, "hello");
        assert!(!row.read);
        assert!(row.phone.is_none());
    }

    #[test]
    fn new_message_omits_absent_optionals_and_read_flag() {
        let payload = serde_json::to_value(NewMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: None,
            subject: None,
            body: "hello".into(),
        })
        .unwrap();
        let object = payload.as_object().unwrap();
        assert!(!object.contains_key("phone"));
        assert!(!object.contains_key("subject"));
        assert!(!object.contains_key("read"));
        assert_eq!(object["message"], "hello");
    }
}
