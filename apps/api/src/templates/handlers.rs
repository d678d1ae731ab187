//! Axum route handlers for the Template catalog.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::{AppPath, AppQuery};
use crate::templates::{
    get_free_templates, get_premium_templates, get_template_by_id, get_templates_by_category,
    is_template_locked, ResumeTemplate, SubscriptionStatus, TemplateCategory, TEMPLATES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Premium,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateQuery {
    pub category: Option<TemplateCategory>,
    pub tier: Option<Tier>,
    /// Caller's subscription, used only to compute `locked`.
    #[serde(default)]
    pub is_premium: bool,
}

#[derive(Debug, Serialize)]
pub struct TemplateListing {
    #[serde(flatten)]
    pub template: &'static ResumeTemplate,
    pub locked: bool,
}

fn listing(template: &'static ResumeTemplate, is_premium: bool) -> TemplateListing {
    let status = SubscriptionStatus {
        is_premium,
        is_loading: false,
    };
    TemplateListing {
        template,
        locked: is_template_locked(template, &status),
    }
}

/// The catalog filtered by tier and category, in catalog order.
pub fn filter_templates(query: &TemplateQuery) -> Vec<TemplateListing> {
    let by_tier = match query.tier {
        Some(Tier::Free) => get_free_templates(),
        Some(Tier::Premium) => get_premium_templates(),
        None => TEMPLATES.iter().collect(),
    };
    let allowed_by_category = query.category.map(get_templates_by_category);

    by_tier
        .into_iter()
        .filter(|t| {
            allowed_by_category
                .as_ref()
                .map_or(true, |allowed| allowed.iter().any(|a| a.id == t.id))
        })
        .map(|t| listing(t, query.is_premium))
        .collect()
}

/// GET /api/v1/templates
pub async fn handle_list_templates(AppQuery(query): AppQuery<TemplateQuery>) -> Json<Vec<TemplateListing>> {
    Json(filter_templates(&query))
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    AppPath(id): AppPath<String>,
    AppQuery(query): AppQuery<TemplateQuery>,
) -> Result<Json<TemplateListing>, AppError> {
    get_template_by_id(&id)
        .map(|t| Json(listing(t, query.is_premium)))
        .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found")))
}
