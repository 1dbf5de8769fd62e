use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use vitrine_store::{NewProject, Project, ProjectStatus};

use super::fields;

/// Admin create/edit form for a portfolio project.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ProjectForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    /// Secondary label, stored under the wire name `type`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    /// Comma-separated technology tags, exactly as typed in the form.
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    #[schema(value_type = String, example = "completed")]
    pub status: ProjectStatus,
}

impl ProjectForm {
    pub fn into_row(self) -> NewProject {
        NewProject {
            title: self.title,
            description: self.description,
            category: self.category,
            kind: self.kind,
            image: self.image,
            link: self.link,
            technologies: fields::split_technologies(&self.technologies),
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image: String,
    pub link: String,
    pub technologies: Vec<String>,
    pub status: String,
    pub created_at: Option<String>,
}

impl From<Project> for ProjectResponse {
    fn from(row: Project) -> Self {
        let status = match row.status {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
        };
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            kind: row.kind,
            image: row.image,
            link: row.link,
            technologies: row.technologies,
            status: status.to_owned(),
            created_at: row.created_at.map(|t| t.to_rfc3339()),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn form_splits_and_trims_technologies() {
        let form = ProjectForm {
            title: "Shop".into(),
            description: "Storefront".into(),
            category: "web".into(),
            kind: "site".into(),
            image: String::new(),
            link: String::new(),
            technologies: "Next.js, React, ".into(),
            status: ProjectStatus::Completed,
        };
        assert_eq!(form.into_row().technologies, vec!["Next.js", "React"]);
    }

    #[test]
    fn status_defaults_to_completed_when_absent() {
        let form: ProjectForm = serde_json::from_value(serde_json::json!({
            "title": "Shop",
            "description": "Storefront",
            "category": "web",
        }))
        .unwrap();
        assert_eq!(form.status, ProjectStatus::Completed);
    }

    #[test]
    fn status_parses_kebab_case() {
        let form: ProjectForm = serde_json::from_value(serde_json::json!({
            "title": "Shop",
            "description": "Storefront",
            "category": "web",
            "status": "in-progress",
        }))
        .unwrap();
        assert_eq!(form.status, ProjectStatus::InProgress);
    }
}
