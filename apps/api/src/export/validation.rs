use serde::Serialize;

use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeData};
use crate::render::normalize::is_blank;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

pub const NAME_REQUIRED: &str = "Full name is required";
pub const EMAIL_REQUIRED: &str = "Email address is required";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const TITLE_REQUIRED: &str = "Professional title is required";
pub const SUMMARY_REQUIRED: &str = "Professional summary is required";
pub const EXPERIENCE_REQUIRED: &str = "At least one complete work experience entry is required \
     (company, position, start date and description)";
pub const EDUCATION_REQUIRED: &str =
    "At least one complete education entry is required (school, degree and graduation year)";
pub const SKILLS_REQUIRED: &str = "At least one skill is required";

/// Checks a resume before export. Every violated rule is reported, in a fixed
/// order, so the user can fix them all in one go.
pub fn validate_resume_data(data: &ResumeData) -> ValidationResult {
    let info = &data.personal_info;
    let checks: [(bool, &str); 8] = [
        (is_blank(Some(info.name.as_str())), NAME_REQUIRED),
        (is_blank(Some(info.email.as_str())), EMAIL_REQUIRED),
        (is_blank(Some(info.phone.as_str())), PHONE_REQUIRED),
        (is_blank(Some(info.title.as_str())), TITLE_REQUIRED),
        (is_blank(Some(data.summary.as_str())), SUMMARY_REQUIRED),
        (
            !data.experience.iter().any(is_complete_experience),
            EXPERIENCE_REQUIRED,
        ),
        (
            !data.education.iter().any(is_complete_education),
            EDUCATION_REQUIRED,
        ),
        (
            data.skills.iter().all(|s| is_blank(Some(s.as_str()))),
            SKILLS_REQUIRED,
        ),
    ];

    let errors: Vec<String> = checks
        .into_iter()
        .filter(|(failed, _)| *failed)
        .map(|(_, message)| message.to_string())
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn is_complete_experience(entry: &ExperienceEntry) -> bool {
    !is_blank(Some(entry.company.as_str()))
        && !is_blank(Some(entry.position.as_str()))
        && !is_blank(Some(entry.start_date.as_str()))
        && entry.bullets().next().is_some()
}

fn is_complete_education(entry: &EducationEntry) -> bool {
    !is_blank(Some(entry.school.as_str()))
        && !is_blank(Some(entry.degree.as_str()))
        && !is_blank(Some(entry.graduation_year.as_str()))
}
