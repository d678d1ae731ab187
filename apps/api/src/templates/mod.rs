// Template Registry: pure lookups over the static catalog, plus the premium gate.

pub mod access;
pub mod catalog;
pub mod handlers;

pub use access::{is_template_locked, SubscriptionStatus};
pub use catalog::{ResumeTemplate, TemplateCategory, TEMPLATES};

pub fn get_template_by_id(id: &str) -> Option<&'static ResumeTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub fn get_free_templates() -> Vec<&'static ResumeTemplate> {
    TEMPLATES.iter().filter(|t| !t.is_premium).collect()
}

pub fn get_premium_templates() -> Vec<&'static ResumeTemplate> {
    TEMPLATES.iter().filter(|t| t.is_premium).collect()
}

pub fn get_templates_by_category(category: TemplateCategory) -> Vec<&'static ResumeTemplate> {
    TEMPLATES.iter().filter(|t| t.category == category).collect()
}
