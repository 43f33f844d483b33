use super::inline::RunKind;

/// Failures raised while turning Markdown text into runs or nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A delimiter-based split found an odd number of delimiters.
    #[error("Invalid Markdown syntax: Unclosed delimiter '{delimiter}' found in '{text}'")]
    MalformedMarkdown { delimiter: String, text: String },
    /// A block type name outside the closed [`BlockType`](super::blocks::BlockType) set.
    #[error("Unknown block type encountered: {0}")]
    UnknownBlockType(String),
    /// Document-format runs have no inline HTML form.
    #[error("invalid text type: {0}")]
    UnsupportedRunKind(RunKind),
}

impl ParseError {
    pub(crate) fn malformed(delimiter: &str, text: &str) -> Self {
        Self::MalformedMarkdown {
            delimiter: delimiter.to_string(),
            text: text.to_string(),
        }
    }
}
