//! Whole-page generation: a converted document poured into an HTML template.

use crate::{
    html::{RenderError, RenderOptions},
    parsing::{ParseError, markdown_to_html_node},
};

/// Placeholder replaced with the document title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Placeholder replaced with the rendered document.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

const TITLE_PREFIX: &str = "# ";

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("No H1 header found in markdown")]
    MissingTitle,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Returns the text of the first `# ` line, trimmed.
pub fn extract_title(markdown: &str) -> Result<&str, PageError> {
    markdown
        .split('\n')
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(str::trim)
        .ok_or(PageError::MissingTitle)
}

/// Converts `markdown` and fills every placeholder in `template`.
///
/// # Errors
/// [`PageError::MissingTitle`] when the document has no H1 line; otherwise
/// whatever conversion or rendering raised.
pub fn generate_page(
    markdown: &str,
    template: &str,
    options: &RenderOptions,
) -> Result<String, PageError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html_node(markdown)?.to_html_with(options)?;
    log::debug!("generated page {title:?} ({} bytes of content)", content.len());

    Ok(template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, &content))
}
