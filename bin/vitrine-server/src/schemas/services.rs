use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use vitrine_store::{NewService, Service};

use super::fields;

/// Admin create/edit form for a service.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ServiceForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "icon is required"))]
    pub icon: String,
    /// Newline-delimited feature list, exactly as typed in the form.
    #[serde(default)]
    pub features: String,
}

impl ServiceForm {
    pub fn into_row(self) -> NewService {
        NewService {
            title: self.title,
            description: self.description,
            icon: self.icon,
            features: fields::split_features(&self.features),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub created_at: Option<String>,
}

impl From<Service> for ServiceResponse {
    fn from(row: Service) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            icon: row.icon,
            features: row.features,
            created_at: row.created_at.map(|t| t.to_rfc3339()),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use validator::Validate;

    #[test]
    fn form_splits_features_on_save() {
        let form = ServiceForm {
            title: "Web".into(),
            description: "Sites".into(),
            icon: "fa-globe".into(),
            features: "A\nB\nC\n\n".into(),
        };
        assert_eq!(form.into_row().features, vec!["A", "B", "C"]);
    }

    #[test]
    fn blank_required_fields_fail_validation() {
        let form = ServiceForm {
            title: "".into(),
            description: "Sites".into(),
            icon: "fa-globe".into(),
            features: String::new(),
        };
        assert!(form.validate().is_err());
    }
}
