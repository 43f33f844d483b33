use std::fmt;

/// The style (or document format) a run of text carries.
///
/// The inline pipeline only produces the first six kinds. The document kinds
/// tag whole-file content and map to a canonical file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
    MarkdownDoc,
    WordDoc,
    PowerPointX,
    PowerPoint,
    PdfDoc,
}

impl RunKind {
    /// Canonical file extension for this kind of content.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            RunKind::Plain => Some("txt"),
            RunKind::Code => Some("code"),
            RunKind::MarkdownDoc => Some("md"),
            RunKind::WordDoc => Some("docx"),
            RunKind::PowerPointX => Some("pptx"),
            RunKind::PowerPoint => Some("ppt"),
            RunKind::PdfDoc => Some("pdf"),
            RunKind::Bold | RunKind::Italic | RunKind::Link | RunKind::Image => None,
        }
    }

    /// Whether this kind describes a whole document rather than an inline style.
    pub fn is_document(self) -> bool {
        matches!(
            self,
            RunKind::MarkdownDoc
                | RunKind::WordDoc
                | RunKind::PowerPointX
                | RunKind::PowerPoint
                | RunKind::PdfDoc
        )
    }
}

impl fmt::Display for RunKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunKind::Plain => "plain",
            RunKind::Bold => "bold",
            RunKind::Italic => "italic",
            RunKind::Code => "code",
            RunKind::Link => "link",
            RunKind::Image => "image",
            RunKind::MarkdownDoc => "markdown",
            RunKind::WordDoc => "word_document",
            RunKind::PowerPointX => "powerpoint_presentation_x",
            RunKind::PowerPoint => "powerpoint_presentation",
            RunKind::PdfDoc => "pdf_document",
        };
        f.write_str(name)
    }
}

/// A contiguous span of text tagged with a single [`RunKind`].
///
/// `target` holds the URL for links and images and is `None` otherwise.
/// Runs are immutable once built: splitters always produce new runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledTextRun {
    pub content: String,
    pub kind: RunKind,
    pub target: Option<String>,
}

impl StyledTextRun {
    pub fn new(content: impl Into<String>, kind: RunKind) -> Self {
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, RunKind::Plain)
    }

    /// A run pointing at `target`, used for links and images.
    pub fn with_target(
        content: impl Into<String>,
        kind: RunKind,
        target: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            kind,
            target: Some(target.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == RunKind::Plain
    }
}
