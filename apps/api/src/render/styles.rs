//! Style Resolver: maps a template id to one of the four CSS themes.
//!
//! Registered templates carry their category in the catalog. Ids that are not
//! registered fall back to ordered substring rules, first match wins, and
//! anything left over is `Modern`. The function is total.

use serde::{Deserialize, Serialize};

use crate::templates::get_template_by_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleCategory {
    #[default]
    Modern,
    Minimal,
    Professional,
    Creative,
}

impl StyleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleCategory::Modern => "modern",
            StyleCategory::Minimal => "minimal",
            StyleCategory::Professional => "professional",
            StyleCategory::Creative => "creative",
        }
    }

    /// Accent colour shared by the generic layouts of this theme.
    pub fn accent_color(&self) -> &'static str {
        match self {
            StyleCategory::Modern => "#2563eb",
            StyleCategory::Minimal => "#111827",
            StyleCategory::Professional => "#1e3a5f",
            StyleCategory::Creative => "#db2777",
        }
    }
}

/// Order matters: "black-white-minimalist-accountant" is professional, not minimal.
const STYLE_RULES: &[(&[&str], StyleCategory)] = &[
    (
        &[
            "corporate",
            "accountant",
            "executive",
            "finance",
            "lawyer",
            "banking",
            "professional",
        ],
        StyleCategory::Professional,
    ),
    (
        &[
            "graphic-designer",
            "creative",
            "artist",
            "designer",
            "portfolio",
        ],
        StyleCategory::Creative,
    ),
    (
        &["minimalist", "minimal", "simple", "clean"],
        StyleCategory::Minimal,
    ),
    (&["modern"], StyleCategory::Modern),
];

/// Resolves the CSS theme for a template id.
pub fn resolve_style(template_id: &str) -> StyleCategory {
    match get_template_by_id(template_id) {
        Some(template) => template.style,
        None => match_style_rules(template_id),
    }
}

/// Substring dispatch used for ids outside the catalog.
pub fn match_style_rules(template_id: &str) -> StyleCategory {
    let id = template_id.to_ascii_lowercase();
    STYLE_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| id.contains(needle)))
        .map(|(_, category)| *category)
        .unwrap_or_default()
}

/// Reset, typography and print rules shared by every theme.
pub const BASE_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-size: 11pt; line-height: 1.5; color: #1f2937; background: #ffffff; }
.resume { max-width: 8.5in; margin: 0 auto; padding: 0.6in 0.7in; }
.placeholder { color: #9ca3af; font-style: italic; }
.contact { display: flex; flex-wrap: wrap; gap: 0.4rem 1rem; font-size: 10pt; }
.section { margin-top: 1.2rem; }
.entry { margin-bottom: 0.8rem; }
.entry-header { display: flex; justify-content: space-between; align-items: baseline; }
.dates { font-size: 9.5pt; white-space: nowrap; }
ul.bullets { margin: 0.3rem 0 0 1.1rem; }
ul.bullets li { margin-bottom: 0.15rem; }
.tags { display: flex; flex-wrap: wrap; gap: 0.35rem; }
@page { size: letter; margin: 0; }
@media print {
  body { -webkit-print-color-adjust: exact; print-color-adjust: exact; }
  .no-print { display: none !important; }
}
"#;

const MODERN_CSS: &str = r#"
body { font-family: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif; }
.header { border-bottom: 3px solid #2563eb; padding-bottom: 0.8rem; }
.name { font-size: 26pt; font-weight: 700; color: #111827; letter-spacing: -0.5px; }
.title { font-size: 13pt; color: #2563eb; font-weight: 500; margin-bottom: 0.4rem; }
.contact { color: #4b5563; }
.section-title { font-size: 12pt; font-weight: 700; text-transform: uppercase; letter-spacing: 1px; color: #2563eb; margin-bottom: 0.5rem; }
.position { font-weight: 600; color: #111827; }
.company { color: #2563eb; font-weight: 500; }
.dates { color: #6b7280; }
.tag { background: #eff6ff; color: #1d4ed8; padding: 0.15rem 0.6rem; border-radius: 999px; font-size: 9.5pt; }
"#;

const MINIMAL_CSS: &str = r#"
body { font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif; color: #111827; }
.header { text-align: center; margin-bottom: 0.6rem; }
.name { font-size: 24pt; font-weight: 300; letter-spacing: 4px; text-transform: uppercase; }
.title { font-size: 11pt; color: #6b7280; letter-spacing: 2px; text-transform: uppercase; margin-bottom: 0.4rem; }
.contact { justify-content: center; color: #6b7280; }
.section-title { font-size: 10pt; font-weight: 600; letter-spacing: 3px; text-transform: uppercase; border-bottom: 1px solid #e5e7eb; padding-bottom: 0.25rem; margin-bottom: 0.6rem; }
.position { font-weight: 600; }
.company { color: #4b5563; }
.dates { color: #9ca3af; }
.tag { border: 1px solid #d1d5db; padding: 0.1rem 0.5rem; font-size: 9.5pt; }
"#;

const PROFESSIONAL_CSS: &str = r#"
body { font-family: Georgia, 'Times New Roman', serif; color: #1f2937; }
.header { background: #1e3a5f; color: #ffffff; padding: 1rem 1.2rem; margin: -0.6in -0.7in 0.4rem; padding-left: 0.7in; }
.name { font-size: 24pt; font-weight: 700; }
.title { font-size: 12pt; color: #cbd5e1; margin-bottom: 0.4rem; }
.contact { color: #e2e8f0; }
.section-title { font-size: 12pt; font-weight: 700; color: #1e3a5f; border-bottom: 2px solid #1e3a5f; padding-bottom: 0.2rem; margin-bottom: 0.6rem; }
.position { font-weight: 700; }
.company { font-style: italic; color: #334155; }
.dates { color: #475569; }
.tag { background: #f1f5f9; color: #1e3a5f; padding: 0.15rem 0.5rem; border-radius: 3px; font-size: 9.5pt; }
"#;

const CREATIVE_CSS: &str = r#"
body { font-family: 'Poppins', 'Trebuchet MS', sans-serif; color: #1f2937; }
.header { border-left: 8px solid #db2777; padding-left: 1rem; }
.name { font-size: 28pt; font-weight: 800; background: linear-gradient(90deg, #db2777, #7c3aed); -webkit-background-clip: text; color: transparent; }
.title { font-size: 13pt; color: #7c3aed; font-weight: 600; margin-bottom: 0.4rem; }
.contact { color: #6b7280; }
.section-title { font-size: 13pt; font-weight: 800; color: #db2777; margin-bottom: 0.5rem; }
.section-title::after { content: ''; display: block; width: 40px; height: 3px; background: #7c3aed; margin-top: 0.2rem; }
.position { font-weight: 700; }
.company { color: #7c3aed; }
.dates { color: #9ca3af; }
.tag { background: linear-gradient(90deg, #fce7f3, #ede9fe); color: #831843; padding: 0.2rem 0.7rem; border-radius: 999px; font-size: 9.5pt; }
"#;

/// Theme-specific CSS, appended after [`BASE_CSS`].
pub fn style_sheet(category: StyleCategory) -> &'static str {
    match category {
        StyleCategory::Modern => MODERN_CSS,
        StyleCategory::Minimal => MINIMAL_CSS,
        StyleCategory::Professional => PROFESSIONAL_CSS,
        StyleCategory::Creative => CREATIVE_CSS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TEMPLATES;

    const ALL: [StyleCategory; 4] = [
        StyleCategory::Modern,
        StyleCategory::Minimal,
        StyleCategory::Professional,
        StyleCategory::Creative,
    ];

    #[test]
    fn test_every_catalog_template_resolves() {
        for template in TEMPLATES {
            let category = resolve_style(template.id);
            assert!(ALL.contains(&category), "{}", template.id);
        }
    }

    #[test]
    fn test_catalog_style_agrees_with_rules() {
        for template in TEMPLATES {
            assert_eq!(
                template.style,
                match_style_rules(template.id),
                "catalog entry {} disagrees with the substring rules",
                template.id
            );
        }
    }

    #[test]
    fn test_accountant_is_professional() {
        assert_eq!(
            resolve_style("black-white-minimalist-accountant"),
            StyleCategory::Professional
        );
        assert_eq!(
            match_style_rules("black-white-minimalist-accountant"),
            StyleCategory::Professional
        );
    }

    #[test]
    fn test_unregistered_ids_use_rules() {
        assert_eq!(resolve_style("my-minimalist-cv"), StyleCategory::Minimal);
        assert_eq!(
            resolve_style("bold-graphic-designer-2024"),
            StyleCategory::Creative
        );
        assert_eq!(resolve_style("Corporate-Blue"), StyleCategory::Professional);
    }

    #[test]
    fn test_unknown_and_empty_ids_default_to_modern() {
        assert_eq!(resolve_style(""), StyleCategory::Modern);
        assert_eq!(resolve_style("does-not-exist"), StyleCategory::Modern);
    }

    #[test]
    fn test_each_category_has_css() {
        for category in ALL {
            assert!(style_sheet(category).contains(".section-title"));
        }
    }
}
