//! The static template catalog. Entries are registered once, here, with their
//! theme and layout so rendering never has to guess from the id.

use serde::{Deserialize, Serialize};

use crate::render::layouts::{LayoutVariant, PhotoLayout};
use crate::render::styles::StyleCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Modern,
    Classic,
    Creative,
    Minimal,
    Professional,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TemplateCategory,
    pub is_premium: bool,
    /// Path of the thumbnail served by the frontend.
    pub preview: &'static str,
    pub features: &'static [&'static str],
    pub has_photo: bool,
    pub style: StyleCategory,
    pub layout: LayoutVariant,
}

const SINGLE: LayoutVariant = LayoutVariant::SingleColumn;

pub static TEMPLATES: &[ResumeTemplate] = &[
    ResumeTemplate {
        id: "modern",
        name: "Modern",
        category: TemplateCategory::Modern,
        is_premium: false,
        preview: "/templates/modern.png",
        features: &["ATS-friendly", "Clean layout", "Blue accents"],
        has_photo: false,
        style: StyleCategory::Modern,
        layout: SINGLE,
    },
    ResumeTemplate {
        id: "minimal",
        name: "Minimal",
        category: TemplateCategory::Minimal,
        is_premium: false,
        preview: "/templates/minimal.png",
        features: &["ATS-friendly", "Generous whitespace", "Centered header"],
        has_photo: false,
        style: StyleCategory::Minimal,
        layout: SINGLE,
    },
    ResumeTemplate {
        id: "professional",
        name: "Professional",
        category: TemplateCategory::Professional,
        is_premium: false,
        preview: "/templates/professional.png",
        features: &["ATS-friendly", "Serif typography", "Banner header"],
        has_photo: false,
        style: StyleCategory::Professional,
        layout: SINGLE,
    },
    ResumeTemplate {
        id: "creative",
        name: "Creative",
        category: TemplateCategory::Creative,
        is_premium: false,
        preview: "/templates/creative.png",
        features: &["Gradient headings", "Colourful tags"],
        has_photo: false,
        style: StyleCategory::Creative,
        layout: SINGLE,
    },
    ResumeTemplate {
        id: "timeless-classic",
        name: "Timeless Classic",
        category: TemplateCategory::Classic,
        is_premium: false,
        preview: "/templates/timeless-classic.png",
        features: &["ATS-friendly", "Chronological"],
        has_photo: false,
        style: StyleCategory::Modern,
        layout: SINGLE,
    },
    ResumeTemplate {
        id: "black-white-minimalist-accountant",
        name: "Black & White Accountant",
        category: TemplateCategory::Professional,
        is_premium: false,
        preview: "/templates/black-white-minimalist-accountant.png",
        features: &["ATS-friendly", "Monochrome", "Finance roles"],
        has_photo: false,
        style: StyleCategory::Professional,
        layout: SINGLE,
    },
    ResumeTemplate {
        id: "simple-clean-minimalist",
        name: "Simple Clean",
        category: TemplateCategory::Minimal,
        is_premium: false,
        preview: "/templates/simple-clean-minimalist.png",
        features: &["ATS-friendly", "One page"],
        has_photo: false,
        style: StyleCategory::Minimal,
        layout: SINGLE,
    },
    ResumeTemplate {
        id: "modern-tech-developer",
        name: "Tech Developer",
        category: TemplateCategory::Modern,
        is_premium: false,
        preview: "/templates/modern-tech-developer.png",
        features: &["ATS-friendly", "Skills first"],
        has_photo: false,
        style: StyleCategory::Modern,
        layout: SINGLE,
    },
    ResumeTemplate {
        id: "corporate-executive",
        name: "Corporate Executive",
        category: TemplateCategory::Professional,
        is_premium: true,
        preview: "/templates/corporate-executive.png",
        features: &["Leadership focus", "Navy banner"],
        has_photo: false,
        style: StyleCategory::Professional,
        layout: SINGLE,
    },
    ResumeTemplate {
        id: "finance-analyst-professional",
        name: "Finance Analyst",
        category: TemplateCategory::Professional,
        is_premium: true,
        preview: "/templates/finance-analyst-professional.png",
        features: &["ATS-friendly", "Dense layout"],
        has_photo: false,
        style: StyleCategory::Professional,
        layout: SINGLE,
    },
    ResumeTemplate {
        id: "graphic-designer-portfolio",
        name: "Graphic Designer",
        category: TemplateCategory::Creative,
        is_premium: true,
        preview: "/templates/graphic-designer-portfolio.png",
        features: &["Portfolio-ready", "Bold colour"],
        has_photo: false,
        style: StyleCategory::Creative,
        layout: SINGLE,
    },
    ResumeTemplate {
        id: "creative-artist-showcase",
        name: "Artist Showcase",
        category: TemplateCategory::Creative,
        is_premium: true,
        preview: "/templates/creative-artist-showcase.png",
        features: &["Gradient headings", "Large name"],
        has_photo: false,
        style: StyleCategory::Creative,
        layout: SINGLE,
    },
    ResumeTemplate {
        id: "slate-photo-sidebar",
        name: "Slate Sidebar",
        category: TemplateCategory::Modern,
        is_premium: true,
        preview: "/templates/slate-photo-sidebar.png",
        features: &["Profile photo", "Dark sidebar", "Two columns"],
        has_photo: true,
        style: StyleCategory::Modern,
        layout: LayoutVariant::Photo(PhotoLayout::Slate),
    },
    ResumeTemplate {
        id: "elegant-photo-minimal",
        name: "Elegant Portrait",
        category: TemplateCategory::Minimal,
        is_premium: true,
        preview: "/templates/elegant-photo-minimal.png",
        features: &["Profile photo", "Serif headings", "Two columns"],
        has_photo: true,
        style: StyleCategory::Minimal,
        layout: LayoutVariant::Photo(PhotoLayout::Elegant),
    },
    ResumeTemplate {
        id: "azure-corporate-photo",
        name: "Azure Corporate",
        category: TemplateCategory::Professional,
        is_premium: true,
        preview: "/templates/azure-corporate-photo.png",
        features: &["Profile photo", "Blue sidebar", "Two columns"],
        has_photo: true,
        style: StyleCategory::Professional,
        layout: LayoutVariant::Photo(PhotoLayout::Azure),
    },
    ResumeTemplate {
        id: "terracotta-creative-photo",
        name: "Terracotta",
        category: TemplateCategory::Creative,
        is_premium: true,
        preview: "/templates/terracotta-creative-photo.png",
        features: &["Profile photo", "Warm palette", "Round portrait"],
        has_photo: true,
        style: StyleCategory::Creative,
        layout: LayoutVariant::Photo(PhotoLayout::Terracotta),
    },
    ResumeTemplate {
        id: "modern-photo-two-column",
        name: "Modern Photo",
        category: TemplateCategory::Modern,
        is_premium: false,
        preview: "/templates/modern-photo-two-column.png",
        features: &["Profile photo", "Two columns"],
        has_photo: true,
        style: StyleCategory::Modern,
        layout: LayoutVariant::Photo(PhotoLayout::TwoColumn),
    },
];
