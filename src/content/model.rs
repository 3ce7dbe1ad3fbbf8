use serde::{Deserialize, Serialize};

use crate::store::Record;

use super::dto::{
    PartnerInput, PartnerPatch, ProjectInput, ProjectPatch, ServiceInput, ServicePatch,
    TestimonialInput, TestimonialPatch,
};

/// Sentinel category meaning "all categories" (the public site's filter bar
/// uses French labels; "Tous" is its all-projects tab).
pub const ALL_CATEGORIES: &str = "Tous";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Symbolic icon identifier, e.g. `fa-code`.
    pub icon: String,
    /// Symbolic color identifier, e.g. `blue`.
    pub color: String,
}

impl Record for Service {
    type Create = ServiceInput;
    type Update = ServicePatch;

    const KIND: &'static str = "service";

    fn id(&self) -> i64 {
        self.id
    }

    fn build(id: i64, input: ServiceInput) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            icon: input.icon,
            color: input.color,
        }
    }

    fn apply(&mut self, patch: ServicePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Free-text filter key; no enforced enum at the storage layer.
    pub category: String,
    pub link: String,
    pub technologies: Vec<String>,
    pub key_results: Vec<String>,
}

impl Record for Project {
    type Create = ProjectInput;
    type Update = ProjectPatch;

    const KIND: &'static str = "project";

    fn id(&self) -> i64 {
        self.id
    }

    fn build(id: i64, input: ProjectInput) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            image: input.image,
            category: input.category,
            link: input.link,
            technologies: input.technologies,
            key_results: input.key_results,
        }
    }

    fn apply(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(link) = patch.link {
            self.link = link;
        }
        // List fields are replaced wholesale, never merged element-wise.
        if let Some(technologies) = patch.technologies {
            self.technologies = technologies;
        }
        if let Some(key_results) = patch.key_results {
            self.key_results = key_results;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub image: String,
}

impl Record for Testimonial {
    type Create = TestimonialInput;
    type Update = TestimonialPatch;

    const KIND: &'static str = "testimonial";

    fn id(&self) -> i64 {
        self.id
    }

    fn build(id: i64, input: TestimonialInput) -> Self {
        Self {
            id,
            name: input.name,
            position: input.position,
            company: input.company,
            content: input.content,
            image: input.image,
        }
    }

    fn apply(&mut self, patch: TestimonialPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    pub logo: String,
    pub link: String,
}

impl Record for Partner {
    type Create = PartnerInput;
    type Update = PartnerPatch;

    const KIND: &'static str = "partner";

    fn id(&self) -> i64 {
        self.id
    }

    fn build(id: i64, input: PartnerInput) -> Self {
        Self {
            id,
            name: input.name,
            logo: input.logo,
            link: input.link,
        }
    }

    fn apply(&mut self, patch: PartnerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(logo) = patch.logo {
            self.logo = logo;
        }
        if let Some(link) = patch.link {
            self.link = link;
        }
    }
}
