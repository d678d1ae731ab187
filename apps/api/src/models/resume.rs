use serde::{Deserialize, Deserializer, Serialize};

/// The whole resume as edited in the builder. Every field defaults so a half
/// filled form still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Data URI (`data:image/png;base64,...`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_adjustment: Option<PhotoAdjustment>,
}

/// User crop/zoom of the profile photo, applied as a CSS transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotoAdjustment {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotation: f64,
}

impl Default for PhotoAdjustment {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            rotation: 0.0,
        }
    }
}

impl PhotoAdjustment {
    pub fn css_transform(&self) -> String {
        format!(
            "transform: scale({}) translate({}px, {}px) rotate({}deg);",
            self.scale, self.translate_x, self.translate_y, self.rotation
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub start_date: String,
    /// `None` or blank means the position is current.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Bullet lines. Accepts a plain string on input.
    #[serde(deserialize_with = "deserialize_description")]
    pub description: Vec<String>,
}

impl ExperienceEntry {
    pub fn is_current(&self) -> bool {
        self.end_date
            .as_deref()
            .map_or(true, |end| end.trim().is_empty())
    }

    /// Bullets that carry actual text, in entry order.
    pub fn bullets(&self) -> impl Iterator<Item = &str> {
        self.description
            .iter()
            .map(|b| b.trim())
            .filter(|b| !b.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub graduation_year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptionInput {
    Text(String),
    Bullets(Vec<String>),
}

/// Normalizes the polymorphic `description` field into bullet lines.
/// A string becomes a single bullet, a blank string becomes no bullets.
fn deserialize_description<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let input = Option::<DescriptionInput>::deserialize(deserializer)?;
    Ok(match input {
        None => Vec::new(),
        Some(DescriptionInput::Text(text)) if text.trim().is_empty() => Vec::new(),
        Some(DescriptionInput::Text(text)) => vec![text],
        Some(DescriptionInput::Bullets(bullets)) => bullets,
    })
}

impl ResumeData {
    pub fn display_name(&self) -> &str {
        self.personal_info.name.trim()
    }

    /// Values a fresh builder session starts from.
    pub fn sample() -> Self {
        ResumeData {
            personal_info: PersonalInfo {
                name: "John Doe".to_string(),
                title: "Software Engineer".to_string(),
                email: "john.doe@example.com".to_string(),
                phone: "(555) 123-4567".to_string(),
                location: "San Francisco, CA".to_string(),
                linkedin: Some("linkedin.com/in/johndoe".to_string()),
                github: None,
                website: None,
                photo: None,
                photo_adjustment: None,
            },
            summary: "Experienced software engineer with a passion for building scalable \
                      web applications and leading cross-functional teams."
                .to_string(),
            experience: vec![ExperienceEntry {
                company: "Tech Corp".to_string(),
                position: "Senior Software Engineer".to_string(),
                start_date: "2021".to_string(),
                end_date: None,
                description: vec![
                    "Led development of a customer-facing dashboard used by 50k users".to_string(),
                    "Reduced page load times by 40% through caching".to_string(),
                ],
            }],
            education: vec![EducationEntry {
                school: "State University".to_string(),
                degree: "Bachelor of Science".to_string(),
                field: "Computer Science".to_string(),
                graduation_year: "2018".to_string(),
                gpa: None,
            }],
            skills: vec![
                "JavaScript".to_string(),
                "Rust".to_string(),
                "SQL".to_string(),
            ],
            languages: vec!["English".to_string()],
        }
    }
}
