//! Hand-authored two-column layouts for the photo templates.
//!
//! Each bespoke layout owns its CSS. Photo templates without a bespoke layout
//! use `TwoColumn`, which takes its accent colour from the style category.

use serde::Serialize;

use crate::models::resume::ResumeData;
use crate::render::assembler::{
    contact_items, education_items, experience_items, section, tag_list, wrap_document,
    NAME_FALLBACK, TITLE_FALLBACK,
};
use crate::render::normalize::{
    escape_html, get_first_name, get_initials, get_placeholder_or_empty, non_blank,
};
use crate::render::styles::StyleCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutVariant {
    #[default]
    SingleColumn,
    Photo(PhotoLayout),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoLayout {
    Slate,
    Elegant,
    Azure,
    Terracotta,
    /// Generic fallback for photo templates without a bespoke design.
    TwoColumn,
}

pub fn render_photo_layout(data: &ResumeData, layout: PhotoLayout, style: StyleCategory) -> String {
    let parts = Parts::new(data);
    match layout {
        PhotoLayout::Slate => wrap_document(data, SLATE_CSS, &sidebar_body("slate", &parts)),
        PhotoLayout::Azure => wrap_document(data, AZURE_CSS, &sidebar_body("azure", &parts)),
        PhotoLayout::Elegant => wrap_document(data, ELEGANT_CSS, &elegant_body(&parts)),
        PhotoLayout::Terracotta => {
            wrap_document(data, TERRACOTTA_CSS, &terracotta_body(&parts))
        }
        PhotoLayout::TwoColumn => {
            let css = two_column_css(style.accent_color());
            wrap_document(data, &css, &sidebar_body("two-column", &parts))
        }
    }
}

/// Pre-rendered fragments shared by every photo layout.
struct Parts {
    name: String,
    first_name: String,
    title: String,
    photo: String,
    contact: String,
    summary: Option<String>,
    experience: Option<String>,
    education: Option<String>,
    skills: Option<String>,
    languages: Option<String>,
}

impl Parts {
    fn new(data: &ResumeData) -> Self {
        let info = &data.personal_info;
        let contact = contact_items(info)
            .into_iter()
            .map(|item| format!("<li>{item}</li>"))
            .collect::<Vec<_>>()
            .join("");

        Parts {
            name: get_placeholder_or_empty(Some(info.name.as_str()), NAME_FALLBACK),
            first_name: escape_html(&get_first_name(&info.name)),
            title: get_placeholder_or_empty(Some(info.title.as_str()), TITLE_FALLBACK),
            photo: photo_block(data),
            contact: format!(r#"<ul class="contact-list">{contact}</ul>"#),
            summary: non_blank(Some(data.summary.as_str()))
                .map(|s| format!(r#"<p class="summary">{}</p>"#, escape_html(s))),
            experience: (!data.experience.is_empty())
                .then(|| experience_items(&data.experience)),
            education: (!data.education.is_empty()).then(|| education_items(&data.education)),
            skills: tag_list(&data.skills),
            languages: tag_list(&data.languages),
        }
    }

    fn main_sections(&self) -> String {
        let mut out = String::new();
        if let Some(summary) = &self.summary {
            out.push_str(&section("Profile", summary));
        }
        if let Some(experience) = &self.experience {
            out.push_str(&section("Experience", experience));
        }
        if let Some(education) = &self.education {
            out.push_str(&section("Education", education));
        }
        out
    }

    fn side_sections(&self) -> String {
        let mut out = section("Contact", &self.contact);
        if let Some(skills) = &self.skills {
            out.push_str(&section("Skills", skills));
        }
        if let Some(languages) = &self.languages {
            out.push_str(&section("Languages", languages));
        }
        out
    }
}

/// The uploaded photo with its adjustment, or an initials badge.
/// Only `data:image/` URIs are embedded; documents never reference remote assets.
fn photo_block(data: &ResumeData) -> String {
    let info = &data.personal_info;
    match non_blank(info.photo.as_deref()).filter(|p| p.starts_with("data:image/")) {
        Some(photo) => {
            let transform = info.photo_adjustment.unwrap_or_default().css_transform();
            format!(
                r#"<div class="photo"><img src="{}" alt="{}" style="{}"></div>"#,
                escape_html(photo),
                escape_html(info.name.trim()),
                transform
            )
        }
        None => format!(
            r#"<div class="photo initials">{}</div>"#,
            escape_html(&get_initials(&info.name))
        ),
    }
}

fn sidebar_body(variant: &str, parts: &Parts) -> String {
    format!(
        r#"<div class="page {variant}">
<aside class="sidebar">
{photo}
{side}
</aside>
<main class="main">
<header class="header"><h1 class="name">{name}</h1><div class="title">{title}</div></header>
{main}
</main>
</div>"#,
        photo = parts.photo,
        side = parts.side_sections(),
        name = parts.name,
        title = parts.title,
        main = parts.main_sections(),
    )
}

fn elegant_body(parts: &Parts) -> String {
    format!(
        r#"<div class="page elegant">
<header class="header">
{photo}
<div class="heading"><h1 class="name">{name}</h1><div class="rule"></div><div class="title">{title}</div></div>
</header>
<div class="columns">
<aside class="sidebar">{side}</aside>
<main class="main">{main}</main>
</div>
</div>"#,
        photo = parts.photo,
        name = parts.name,
        title = parts.title,
        side = parts.side_sections(),
        main = parts.main_sections(),
    )
}

fn terracotta_body(parts: &Parts) -> String {
    format!(
        r#"<div class="page terracotta">
<header class="banner">
{photo}
<div><div class="greeting">Hello, I&#39;m {first_name}</div><h1 class="name">{name}</h1><div class="title">{title}</div></div>
</header>
<div class="columns">
<main class="main">{main}</main>
<aside class="sidebar">{side}</aside>
</div>
</div>"#,
        photo = parts.photo,
        first_name = parts.first_name,
        name = parts.name,
        title = parts.title,
        main = parts.main_sections(),
        side = parts.side_sections(),
    )
}

const SLATE_CSS: &str = r#"
body { font-family: 'Inter', 'Segoe UI', Arial, sans-serif; }
.page { display: flex; min-height: 11in; }
.sidebar { width: 34%; background: #1f2937; color: #e5e7eb; padding: 0.6in 0.35in; }
.sidebar .section-title { color: #93c5fd; font-size: 10.5pt; text-transform: uppercase; letter-spacing: 1.5px; margin-bottom: 0.4rem; }
.main { width: 66%; padding: 0.6in 0.45in; }
.photo { width: 1.6in; height: 1.6in; border-radius: 50%; overflow: hidden; margin: 0 auto 1rem; border: 4px solid #374151; }
.photo img { width: 100%; height: 100%; object-fit: cover; }
.photo.initials { display: flex; align-items: center; justify-content: center; background: #3b82f6; color: #ffffff; font-size: 30pt; font-weight: 700; }
.contact-list { list-style: none; font-size: 9.5pt; word-break: break-word; }
.contact-list li { margin-bottom: 0.3rem; }
.tag { display: inline-block; background: #374151; color: #f9fafb; padding: 0.1rem 0.5rem; border-radius: 4px; font-size: 9pt; }
.name { font-size: 26pt; font-weight: 800; color: #111827; }
.title { font-size: 13pt; color: #3b82f6; margin-bottom: 0.6rem; }
.main .section-title { font-size: 12pt; color: #1f2937; border-bottom: 2px solid #3b82f6; padding-bottom: 0.2rem; margin-bottom: 0.5rem; text-transform: uppercase; }
.position { font-weight: 700; }
.company { color: #3b82f6; }
.dates { color: #6b7280; }
"#;

const AZURE_CSS: &str = r#"
body { font-family: 'Lato', 'Helvetica Neue', Arial, sans-serif; }
.page { display: flex; flex-direction: row-reverse; min-height: 11in; }
.sidebar { width: 32%; background: linear-gradient(180deg, #0c4a6e, #0369a1); color: #f0f9ff; padding: 0.6in 0.35in; }
.sidebar .section-title { color: #ffffff; font-size: 10.5pt; border-bottom: 1px solid #7dd3fc; padding-bottom: 0.2rem; margin-bottom: 0.4rem; }
.main { width: 68%; padding: 0.6in 0.45in; }
.photo { width: 1.5in; height: 1.8in; overflow: hidden; margin: 0 auto 1rem; border: 3px solid #e0f2fe; }
.photo img { width: 100%; height: 100%; object-fit: cover; }
.photo.initials { display: flex; align-items: center; justify-content: center; background: #e0f2fe; color: #0c4a6e; font-size: 28pt; font-weight: 700; }
.contact-list { list-style: none; font-size: 9.5pt; word-break: break-word; }
.contact-list li { margin-bottom: 0.3rem; }
.tag { display: inline-block; border: 1px solid #7dd3fc; padding: 0.1rem 0.5rem; font-size: 9pt; }
.name { font-size: 25pt; font-weight: 700; color: #0c4a6e; }
.title { font-size: 12.5pt; color: #0369a1; margin-bottom: 0.6rem; }
.main .section-title { font-size: 12pt; color: #0c4a6e; text-transform: uppercase; letter-spacing: 1px; margin-bottom: 0.5rem; }
.position { font-weight: 700; color: #0f172a; }
.company { color: #0369a1; font-style: italic; }
.dates { color: #475569; }
"#;

const ELEGANT_CSS: &str = r#"
body { font-family: 'Lora', Georgia, serif; color: #292524; }
.page { padding: 0.6in 0.7in; }
.header { display: flex; align-items: center; gap: 1.2rem; margin-bottom: 1rem; }
.photo { width: 1.3in; height: 1.3in; border-radius: 50%; overflow: hidden; flex-shrink: 0; }
.photo img { width: 100%; height: 100%; object-fit: cover; }
.photo.initials { display: flex; align-items: center; justify-content: center; background: #f5f5f4; color: #57534e; font-size: 24pt; }
.name { font-size: 28pt; font-weight: 400; letter-spacing: 2px; }
.rule { width: 60px; height: 2px; background: #a8a29e; margin: 0.3rem 0; }
.title { font-size: 11pt; color: #78716c; text-transform: uppercase; letter-spacing: 3px; }
.columns { display: flex; gap: 0.5in; }
.sidebar { width: 30%; }
.main { width: 70%; }
.section-title { font-size: 11pt; font-weight: 400; text-transform: uppercase; letter-spacing: 3px; color: #57534e; margin-bottom: 0.5rem; }
.contact-list { list-style: none; font-size: 9.5pt; word-break: break-word; }
.contact-list li { margin-bottom: 0.3rem; }
.tag { display: inline-block; font-size: 9.5pt; color: #44403c; }
.tag::after { content: ' ·'; }
.position { font-weight: 600; }
.company { color: #78716c; font-style: italic; }
.dates { color: #a8a29e; }
"#;

const TERRACOTTA_CSS: &str = r#"
body { font-family: 'Nunito', 'Trebuchet MS', sans-serif; color: #3f2a1e; }
.banner { display: flex; align-items: center; gap: 1rem; background: #c2410c; color: #fff7ed; padding: 0.45in 0.6in; }
.photo { width: 1.3in; height: 1.3in; border-radius: 50%; overflow: hidden; border: 4px solid #fed7aa; flex-shrink: 0; }
.photo img { width: 100%; height: 100%; object-fit: cover; }
.photo.initials { display: flex; align-items: center; justify-content: center; background: #fed7aa; color: #9a3412; font-size: 26pt; font-weight: 800; }
.greeting { font-size: 11pt; color: #fed7aa; letter-spacing: 1px; }
.name { font-size: 27pt; font-weight: 800; }
.title { font-size: 12.5pt; color: #ffedd5; }
.columns { display: flex; gap: 0.4in; padding: 0.4in 0.6in; }
.main { width: 64%; }
.sidebar { width: 36%; background: #fff7ed; padding: 0.25in; border-radius: 8px; }
.section-title { font-size: 12pt; font-weight: 800; color: #c2410c; margin-bottom: 0.4rem; }
.contact-list { list-style: none; font-size: 9.5pt; word-break: break-word; }
.contact-list li { margin-bottom: 0.3rem; }
.tag { display: inline-block; background: #fed7aa; color: #7c2d12; padding: 0.1rem 0.55rem; border-radius: 999px; font-size: 9pt; }
.position { font-weight: 700; }
.company { color: #c2410c; }
.dates { color: #9a3412; }
"#;

fn two_column_css(accent: &str) -> String {
    format!(
        r#"
body {{ font-family: 'Inter', Arial, sans-serif; }}
.page {{ display: flex; min-height: 11in; }}
.sidebar {{ width: 33%; background: #f3f4f6; padding: 0.6in 0.35in; border-right: 3px solid {accent}; }}
.main {{ width: 67%; padding: 0.6in 0.45in; }}
.photo {{ width: 1.4in; height: 1.4in; border-radius: 50%; overflow: hidden; margin: 0 auto 1rem; }}
.photo img {{ width: 100%; height: 100%; object-fit: cover; }}
.photo.initials {{ display: flex; align-items: center; justify-content: center; background: {accent}; color: #ffffff; font-size: 26pt; font-weight: 700; }}
.contact-list {{ list-style: none; font-size: 9.5pt; word-break: break-word; }}
.contact-list li {{ margin-bottom: 0.3rem; }}
.tag {{ display: inline-block; background: #ffffff; border: 1px solid {accent}; padding: 0.1rem 0.5rem; border-radius: 4px; font-size: 9pt; }}
.name {{ font-size: 25pt; font-weight: 700; }}
.title {{ font-size: 12.5pt; color: {accent}; margin-bottom: 0.6rem; }}
.section-title {{ font-size: 11.5pt; font-weight: 700; color: {accent}; text-transform: uppercase; margin-bottom: 0.4rem; }}
.position {{ font-weight: 700; }}
.company {{ color: {accent}; }}
.dates {{ color: #6b7280; }}
"#
    )
}
