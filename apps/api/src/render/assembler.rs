//! Document Assembler: resume data plus template id gives one self-contained HTML document.
//!
//! This is the only renderer: the live preview and both export paths call
//! [`render_document`]. Output is a pure function of its inputs: no clock, no
//! randomness, no hash-map iteration order.

use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;

use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeData};
use crate::render::layouts::{render_photo_layout, LayoutVariant};
use crate::render::normalize::{
    escape_html, get_placeholder, get_placeholder_or_empty, non_blank,
};
use crate::render::styles::{resolve_style, style_sheet, StyleCategory, BASE_CSS};
use crate::templates::get_template_by_id;

pub const NAME_FALLBACK: &str = "Your Name";
pub const TITLE_FALLBACK: &str = "Professional Title";
pub const EMAIL_FALLBACK: &str = "your.email@example.com";
pub const PHONE_FALLBACK: &str = "(555) 123-4567";
const COMPANY_FALLBACK: &str = "Company Name";
const POSITION_FALLBACK: &str = "Job Title";
const START_FALLBACK: &str = "Start Date";
const SCHOOL_FALLBACK: &str = "School Name";
const DEGREE_FALLBACK: &str = "Degree";
const YEAR_FALLBACK: &str = "Year";

/// Renders `data` through the template registered under `template_id`.
/// Unknown ids take the generic single-column branch; this never fails.
pub fn render_document(data: &ResumeData, template_id: &str) -> String {
    let layout = get_template_by_id(template_id)
        .map(|t| t.layout)
        .unwrap_or_default();

    match layout {
        LayoutVariant::Photo(photo_layout) => {
            render_photo_layout(data, photo_layout, resolve_style(template_id))
        }
        LayoutVariant::SingleColumn => render_single_column(data, resolve_style(template_id)),
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("document generation panicked")]
    Panicked,

    #[error("document generation produced no output")]
    Empty,
}

/// [`render_document`] behind a guard: a panic or an empty document becomes a
/// `RenderError` instead of taking the caller down.
pub fn try_render_document(data: &ResumeData, template_id: &str) -> Result<String, RenderError> {
    let html = catch_unwind(AssertUnwindSafe(|| render_document(data, template_id)))
        .map_err(|_| RenderError::Panicked)?;
    if html.trim().is_empty() {
        return Err(RenderError::Empty);
    }
    Ok(html)
}

/// `<name> - Resume`, with the name placeholder when blank.
pub fn document_title(data: &ResumeData) -> String {
    format!(
        "{} - Resume",
        get_placeholder(Some(data.personal_info.name.as_str()), NAME_FALLBACK)
    )
}

/// Wraps a rendered body into the full document shell.
pub(crate) fn wrap_document(data: &ResumeData, css: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{base}{css}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = document_title(data),
        base = BASE_CSS,
        css = css,
        body = body,
    )
}

fn render_single_column(data: &ResumeData, style: StyleCategory) -> String {
    let info = &data.personal_info;
    let contact = contact_items(info)
        .into_iter()
        .map(|item| format!("<span>{item}</span>"))
        .collect::<Vec<_>>()
        .join("");

    let mut body = format!(
        r#"<div class="resume {style}">
<header class="header">
<h1 class="name">{name}</h1>
<div class="title">{title}</div>
<div class="contact">{contact}</div>
</header>
"#,
        style = style.as_str(),
        name = get_placeholder_or_empty(Some(info.name.as_str()), NAME_FALLBACK),
        title = get_placeholder_or_empty(Some(info.title.as_str()), TITLE_FALLBACK),
        contact = contact,
    );

    if let Some(summary) = non_blank(Some(data.summary.as_str())) {
        body.push_str(&section(
            "Professional Summary",
            &format!(r#"<p class="summary">{}</p>"#, escape_html(summary)),
        ));
    }
    if !data.experience.is_empty() {
        body.push_str(&section("Experience", &experience_items(&data.experience)));
    }
    if !data.education.is_empty() {
        body.push_str(&section("Education", &education_items(&data.education)));
    }
    if let Some(tags) = tag_list(&data.skills) {
        body.push_str(&section("Skills", &tags));
    }
    if let Some(tags) = tag_list(&data.languages) {
        body.push_str(&section("Languages", &tags));
    }
    body.push_str("</div>");

    wrap_document(data, style_sheet(style), &body)
}

pub(crate) fn section(title: &str, content: &str) -> String {
    format!(
        r#"<section class="section">
<h2 class="section-title">{title}</h2>
{content}
</section>
"#
    )
}

/// Email and phone always (placeholder if blank); the rest only when filled in.
pub(crate) fn contact_items(info: &PersonalInfo) -> Vec<String> {
    let mut items = vec![
        get_placeholder_or_empty(Some(info.email.as_str()), EMAIL_FALLBACK),
        get_placeholder_or_empty(Some(info.phone.as_str()), PHONE_FALLBACK),
    ];
    let optional = [
        Some(info.location.as_str()),
        info.linkedin.as_deref(),
        info.github.as_deref(),
        info.website.as_deref(),
    ];
    items.extend(optional.into_iter().filter_map(non_blank).map(escape_html));
    items
}

pub(crate) fn date_range(entry: &ExperienceEntry) -> String {
    let start = get_placeholder_or_empty(Some(entry.start_date.as_str()), START_FALLBACK);
    let end = if entry.is_current() {
        "Present".to_string()
    } else {
        escape_html(entry.end_date.as_deref().unwrap_or_default().trim())
    };
    format!("{start} - {end}")
}

pub(crate) fn bullet_list(entry: &ExperienceEntry) -> String {
    let items: Vec<String> = entry
        .bullets()
        .map(|b| format!("<li>{}</li>", escape_html(b)))
        .collect();
    if items.is_empty() {
        String::new()
    } else {
        format!(r#"<ul class="bullets">{}</ul>"#, items.join(""))
    }
}

pub(crate) fn experience_items(entries: &[ExperienceEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                r#"<div class="entry">
<div class="entry-header"><div><span class="position">{position}</span> <span class="company">{company}</span></div><span class="dates">{dates}</span></div>
{bullets}
</div>
"#,
                position = get_placeholder_or_empty(Some(entry.position.as_str()), POSITION_FALLBACK),
                company = get_placeholder_or_empty(Some(entry.company.as_str()), COMPANY_FALLBACK),
                dates = date_range(entry),
                bullets = bullet_list(entry),
            )
        })
        .collect()
}

pub(crate) fn education_items(entries: &[EducationEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let field = non_blank(Some(entry.field.as_str()))
                .map(|f| format!(" in {}", escape_html(f)))
                .unwrap_or_default();
            let gpa = non_blank(entry.gpa.as_deref())
                .map(|g| format!(r#"<div class="gpa">GPA: {}</div>"#, escape_html(g)))
                .unwrap_or_default();
            format!(
                r#"<div class="entry">
<div class="entry-header"><div><span class="position">{degree}{field}</span> <span class="company">{school}</span></div><span class="dates">{year}</span></div>
{gpa}
</div>
"#,
                degree = get_placeholder_or_empty(Some(entry.degree.as_str()), DEGREE_FALLBACK),
                field = field,
                school = get_placeholder_or_empty(Some(entry.school.as_str()), SCHOOL_FALLBACK),
                year = get_placeholder_or_empty(Some(entry.graduation_year.as_str()), YEAR_FALLBACK),
                gpa = gpa,
            )
        })
        .collect()
}

/// Tag chips for skills or languages, `None` when nothing is filled in.
pub(crate) fn tag_list(items: &[String]) -> Option<String> {
    let tags: Vec<String> = items
        .iter()
        .filter_map(|s| non_blank(Some(s.as_str())))
        .map(|s| format!(r#"<span class="tag">{}</span>"#, escape_html(s)))
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(format!(r#"<div class="tags">{}</div>"#, tags.join("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TEMPLATES;

    fn filled() -> ResumeData {
        ResumeData::sample()
    }

    #[test]
    fn test_empty_data_renders_placeholders_for_every_template() {
        let empty = ResumeData::default();
        for template in TEMPLATES {
            let html = render_document(&empty, template.id);
            assert!(!html.is_empty(), "{}", template.id);
            assert!(html.contains(NAME_FALLBACK), "{}", template.id);
            assert!(html.contains("</html>"), "{}", template.id);
        }
    }

    #[test]
    fn test_unknown_template_uses_generic_layout() {
        let html = render_document(&filled(), "no-such-template");
        assert!(html.contains(r#"class="resume modern""#));
        assert!(html.contains("John Doe"));
    }

    #[test]
    fn test_accountant_template_uses_professional_css() {
        let html = render_document(&filled(), "black-white-minimalist-accountant");
        assert!(html.contains(r#"class="resume professional""#));
        assert!(html.contains("Georgia"));
    }

    #[test]
    fn test_current_position_reads_present() {
        let mut data = filled();
        data.experience[0].end_date = Some(String::new());
        for template in TEMPLATES {
            let html = render_document(&data, template.id);
            assert!(html.contains("2021 - Present"), "{}", template.id);
        }
    }

    #[test]
    fn test_ended_position_shows_end_date() {
        let mut data = filled();
        data.experience[0].end_date = Some("2023".to_string());
        let html = render_document(&data, "modern");
        assert!(html.contains("2021 - 2023"));
        assert!(!html.contains("Present"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let data = filled();
        for template in TEMPLATES {
            assert_eq!(
                render_document(&data, template.id),
                render_document(&data, template.id),
                "{}",
                template.id
            );
        }
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut data = filled();
        data.personal_info.name = "<script>alert(1)</script>".to_string();
        data.summary = "I <3 Rust & Go".to_string();
        data.experience[0].description = vec!["<img src=x onerror=alert(1)>".to_string()];
        for template in TEMPLATES {
            let html = render_document(&data, template.id);
            assert!(!html.contains("<script>"), "{}", template.id);
            assert!(!html.contains("<img src=x"), "{}", template.id);
            assert!(html.contains("&lt;script&gt;"), "{}", template.id);
        }
        let html = render_document(&data, "modern");
        assert!(html.contains("I &lt;3 Rust &amp; Go"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut data = filled();
        data.summary = "   ".to_string();
        data.experience.clear();
        data.education.clear();
        data.skills = vec!["  ".to_string()];
        data.languages.clear();
        let html = render_document(&data, "modern");
        assert!(!html.contains("Professional Summary"));
        assert!(!html.contains(">Experience<"));
        assert!(!html.contains(">Education<"));
        assert!(!html.contains(">Skills<"));
        assert!(!html.contains(">Languages<"));
    }

    #[test]
    fn test_items_keep_user_order() {
        let mut data = filled();
        data.skills = vec!["Zig".into(), "Ada".into(), "Mojo".into()];
        let html = render_document(&data, "minimal");
        let zig = html.find(">Zig<").unwrap();
        let ada = html.find(">Ada<").unwrap();
        let mojo = html.find(">Mojo<").unwrap();
        assert!(zig < ada && ada < mojo);
    }

    #[test]
    fn test_optional_contact_only_when_present() {
        let mut data = filled();
        data.personal_info.location = String::new();
        data.personal_info.linkedin = Some("  ".to_string());
        let html = render_document(&data, "modern");
        assert!(!html.contains("San Francisco"));
        assert!(!html.contains("linkedin.com"));
        assert!(html.contains("john.doe@example.com"));

        data.personal_info.github = Some("github.com/jd".to_string());
        let html = render_document(&data, "modern");
        assert!(html.contains("github.com/jd"));
    }

    #[test]
    fn test_blank_contact_shows_placeholders() {
        let html = render_document(&ResumeData::default(), "modern");
        assert!(html.contains(EMAIL_FALLBACK));
        assert!(html.contains(PHONE_FALLBACK));
        assert!(html.contains(r#"<span class="placeholder">Your Name</span>"#));
    }

    #[test]
    fn test_education_field_and_gpa() {
        let mut data = filled();
        data.education[0].gpa = Some("3.9".to_string());
        let html = render_document(&data, "professional");
        assert!(html.contains("Bachelor of Science in Computer Science"));
        assert!(html.contains("GPA: 3.9"));
    }

    #[test]
    fn test_try_render_returns_document() {
        let html = try_render_document(&ResumeData::default(), "minimal").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_document_title() {
        assert_eq!(document_title(&filled()), "John Doe - Resume");
        assert_eq!(document_title(&ResumeData::default()), "Your Name - Resume");
    }
}
