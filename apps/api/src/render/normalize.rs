//! Field normalization: placeholder text for empty fields and HTML escaping of
//! everything the user typed.

const FALLBACK_INITIALS: &str = "JD";
const FALLBACK_FIRST_NAME: &str = "John";

/// Empty, whitespace-only and absent values are all blank.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// The trimmed value, if it has any content.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Escaped `value` if it has content, otherwise the escaped `fallback` as plain text.
pub fn get_placeholder(value: Option<&str>, fallback: &str) -> String {
    match non_blank(value) {
        Some(v) => escape_html(v),
        None => escape_html(fallback),
    }
}

/// Like [`get_placeholder`], but a fallback is wrapped in muted italic markup so
/// unfilled fields stand out in the preview.
pub fn get_placeholder_or_empty(value: Option<&str>, fallback: &str) -> String {
    match non_blank(value) {
        Some(v) => escape_html(v),
        None => format!(
            r#"<span class="placeholder">{}</span>"#,
            escape_html(fallback)
        ),
    }
}

/// Uppercase first letter of every word, `JD` for a blank name.
pub fn get_initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        FALLBACK_INITIALS.to_string()
    } else {
        initials
    }
}

pub fn get_first_name(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or(FALLBACK_FIRST_NAME)
        .to_string()
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
