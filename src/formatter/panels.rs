/// Idle copy for the crisis actor panels; also shown for blank input.
pub const CRISIS_PROMPT: &str = "Enter a crisis scenario above to begin analysis.";
pub const SUMMARY_PROMPT: &str = "Submit a crisis scenario to generate executive intelligence summary.";
/// Shown when a blank document is submitted.
pub const DOCUMENT_EMPTY_PROMPT: &str = "Paste document text above to begin analysis.";
/// Idle copy for the document panels after load or clear.
pub const DOCUMENT_PROMPT: &str = "Paste a document above to begin analysis.";

/// Muted, centered notice used for idle and empty states.
pub fn placeholder_panel(message: &str) -> String {
    format!(r#"<div class="panel placeholder">{}</div>"#, escape_html(message))
}

/// Bordered notice for a failed workflow. `warning` picks the softer brown border (timeouts).
pub fn error_panel(message: &str, warning: bool) -> String {
    let class = if warning { "panel error warning" } else { "panel error" };
    format!(r#"<div class="{}">{}</div>"#, class, escape_html(message))
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }

    #[test]
    fn error_panel_variants() {
        assert!(error_panel("API Error: 500", false).contains(r#"class="panel error""#));
        assert!(error_panel("Request timed out.", true).contains("warning"));
    }
}
