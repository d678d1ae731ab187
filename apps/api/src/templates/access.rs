use serde::{Deserialize, Serialize};

use crate::templates::ResumeTemplate;

/// Subscription state as reported by the billing collaborator.
/// Read-only here; the only question asked of it is whether premium is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionStatus {
    pub is_premium: bool,
    pub is_loading: bool,
}

/// A premium template is locked unless the subscription is premium.
/// A status that is still loading reports `is_premium == false` and stays locked.
pub fn is_template_locked(template: &ResumeTemplate, status: &SubscriptionStatus) -> bool {
    template.is_premium && !status.is_premium
}
