/// Inline link, `[text](url)`.
pub struct Link;

impl Link {
    /// Captures the anchor text and the URL. Both captures are lazy.
    pub const PATTERN: &'static str = r"\[(.*?)\]\((.*?)\)";
    /// A link directly preceded by this character is image syntax instead.
    pub const IMAGE_MARKER: char = '!';
}

/// Inline image, `![alt](url)`.
pub struct Image;

impl Image {
    /// Captures the alt text and the URL. Both captures are lazy.
    pub const PATTERN: &'static str = r"!\[(.*?)\]\((.*?)\)";
}
