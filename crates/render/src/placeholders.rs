use crate::escape::escape_html;

/// Shown while a tab's first page loads.
pub const LOADING_PLACEHOLDER: &str = r#"<div class="loading">Loading...</div>"#;

/// Shown when a tab's first page fails to load.
pub const LOAD_FAILED_PLACEHOLDER: &str = r#"<div class="error">Failed to load content</div>"#;

#[must_use]
pub fn render_empty_state(heading: &str, hint: &str) -> String {
    format!(
        r#"<div class="empty-state"><i class="fas fa-search"></i><h3>{}</h3><p>{}</p></div>"#,
        escape_html(heading),
        escape_html(hint)
    )
}
