//! Browser-side print wrappers and the download filename.

const DOWNLOAD_EXTRAS: &str = r#"<div class="no-print" id="print-instructions" style="position: fixed; bottom: 24px; left: 24px; max-width: 320px; background: #111827; color: #f9fafb; padding: 14px 16px; border-radius: 8px; font: 13px/1.4 Arial, sans-serif; box-shadow: 0 8px 24px rgba(0,0,0,0.25); z-index: 1000;">
<strong>Save as PDF</strong><br>
In the print dialog choose &quot;Save as PDF&quot; as the destination, set margins to &quot;None&quot; and enable background graphics.
</div>
<button class="no-print" id="print-button" onclick="window.print()" style="position: fixed; top: 24px; right: 24px; background: #2563eb; color: #ffffff; border: none; padding: 12px 22px; border-radius: 6px; font: 600 14px Arial, sans-serif; cursor: pointer; box-shadow: 0 4px 12px rgba(37,99,235,0.4); z-index: 1000;">Print Resume</button>
<script>
window.addEventListener('load', function () {
  setTimeout(function () { window.print(); }, 500);
});
</script>
"#;

const PRINT_SCRIPT: &str = r#"<script>
window.addEventListener('load', function () {
  window.focus();
  window.print();
});
</script>
"#;

/// Download path: auto-print script, a floating "Print Resume" button and
/// on-screen instructions, all hidden from the printed page.
pub fn wrap_for_download(html: &str) -> String {
    inject_before_body_end(html, DOWNLOAD_EXTRAS)
}

/// Print path: open the dialog as soon as the document finishes loading.
pub fn wrap_for_print(html: &str) -> String {
    inject_before_body_end(html, PRINT_SCRIPT)
}

fn inject_before_body_end(html: &str, extra: &str) -> String {
    match html.rfind("</body>") {
        Some(idx) => {
            let mut out = String::with_capacity(html.len() + extra.len());
            out.push_str(&html[..idx]);
            out.push_str(extra);
            out.push_str(&html[idx..]);
            out
        }
        None => format!("{html}{extra}"),
    }
}

/// `resume-<slug>.pdf`, where the slug is the lowercase ASCII alphanumerics of
/// the name with every other run collapsed to a single dash.
pub fn export_filename(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "resume-untitled.pdf".to_string()
    } else {
        format!("resume-{slug}.pdf")
    }
}
