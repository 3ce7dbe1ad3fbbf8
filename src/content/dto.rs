//! Insert and patch schemas for the admin-managed content kinds.
//!
//! Insert schemas mirror the persisted shape minus the server-assigned id;
//! patch schemas make every field optional (shallow merge on update).

use serde::Deserialize;

use crate::validate::{check_filled, finish, require_non_empty, FieldErrors, Validate};

#[derive(Debug, Deserialize)]
pub struct ServiceInput {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

impl Validate for ServiceInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_non_empty(&mut errors, "title", &self.title);
        require_non_empty(&mut errors, "description", &self.description);
        require_non_empty(&mut errors, "icon", &self.icon);
        require_non_empty(&mut errors, "color", &self.color);
        finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl Validate for ServicePatch {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_filled(&mut errors, "title", &self.title);
        check_filled(&mut errors, "description", &self.description);
        check_filled(&mut errors, "icon", &self.icon);
        check_filled(&mut errors, "color", &self.color);
        finish(errors)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub link: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub key_results: Vec<String>,
}

impl Validate for ProjectInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_non_empty(&mut errors, "title", &self.title);
        require_non_empty(&mut errors, "description", &self.description);
        require_non_empty(&mut errors, "image", &self.image);
        require_non_empty(&mut errors, "category", &self.category);
        require_non_empty(&mut errors, "link", &self.link);
        finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub link: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub key_results: Option<Vec<String>>,
}

impl Validate for ProjectPatch {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_filled(&mut errors, "title", &self.title);
        check_filled(&mut errors, "description", &self.description);
        check_filled(&mut errors, "image", &self.image);
        check_filled(&mut errors, "category", &self.category);
        check_filled(&mut errors, "link", &self.link);
        finish(errors)
    }
}

#[derive(Debug, Deserialize)]
pub struct TestimonialInput {
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub image: String,
}

impl Validate for TestimonialInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_non_empty(&mut errors, "name", &self.name);
        require_non_empty(&mut errors, "position", &self.position);
        require_non_empty(&mut errors, "company", &self.company);
        require_non_empty(&mut errors, "content", &self.content);
        require_non_empty(&mut errors, "image", &self.image);
        finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

impl Validate for TestimonialPatch {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_filled(&mut errors, "name", &self.name);
        check_filled(&mut errors, "position", &self.position);
        check_filled(&mut errors, "company", &self.company);
        check_filled(&mut errors, "content", &self.content);
        check_filled(&mut errors, "image", &self.image);
        finish(errors)
    }
}

#[derive(Debug, Deserialize)]
pub struct PartnerInput {
    pub name: String,
    pub logo: String,
    pub link: String,
}

impl Validate for PartnerInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_non_empty(&mut errors, "name", &self.name);
        require_non_empty(&mut errors, "logo", &self.logo);
        require_non_empty(&mut errors, "link", &self.link);
        finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PartnerPatch {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub link: Option<String>,
}

impl Validate for PartnerPatch {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_filled(&mut errors, "name", &self.name);
        check_filled(&mut errors, "logo", &self.logo);
        check_filled(&mut errors, "link", &self.link);
        finish(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_input_requires_all_fields() {
        let input = ServiceInput {
            title: "Développement Web".into(),
            description: String::new(),
            icon: "fa-code".into(),
            color: "blue".into(),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["description"]);
    }

    #[test]
    fn empty_patch_is_valid() {
        assert!(ProjectPatch::default().validate().is_ok());
        assert!(ServicePatch::default().validate().is_ok());
    }

    #[test]
    fn project_input_defaults_lists_when_absent() {
        let input: ProjectInput = serde_json::from_value(serde_json::json!({
            "title": "Site vitrine",
            "description": "Refonte complète",
            "image": "/img/p1.png",
            "category": "Web",
            "link": "https://example.com"
        }))
        .unwrap();
        assert!(input.technologies.is_empty());
        assert!(input.key_results.is_empty());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn project_patch_uses_camel_case_key_results() {
        let patch: ProjectPatch =
            serde_json::from_value(serde_json::json!({ "keyResults": ["+40% trafic"] })).unwrap();
        assert_eq!(patch.key_results.as_deref(), Some(&["+40% trafic".to_string()][..]));
    }
}
