//! # HTML Node Tree
//!
//! A closed node type with a single renderer. Nodes are built bottom-up by the
//! block builder and never mutated once placed in a tree.
//!
//! ## Modules
//!
//! - **`attributes`**: insertion-ordered `Attributes` and their serialization
//! - **`convert`**: `text_run_to_html_node()` maps a styled run to a leaf

use std::borrow::Cow;

pub mod attributes;
pub mod convert;

pub use attributes::Attributes;
pub use convert::text_run_to_html_node;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Parent node must have a tag")]
    MissingTag,
}

/// Controls how text and attribute values are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape leaf text and attribute values. Off by default: values are
    /// written verbatim.
    pub escape_html: bool,
}

/// A node in the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A node without children. With no tag it renders as bare text.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },
    /// A container whose content is defined entirely by its children.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::default(),
        }
    }

    /// An untagged leaf: renders as its value alone.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::default(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attributes: Attributes::default(),
        }
    }

    /// Adds an attribute while the node is still being built.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.insert(key, value);
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Children of a parent; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    /// Renders the tree with default options (no escaping).
    pub fn to_html(&self) -> Result<String, RenderError> {
        self.to_html_with(&RenderOptions::default())
    }

    /// Renders the tree to a string.
    ///
    /// # Errors
    /// [`RenderError::MissingTag`] if any parent in the tree has an empty tag.
    pub fn to_html_with(&self, options: &RenderOptions) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out, options)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String, options: &RenderOptions) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => {
                let value = if options.escape_html {
                    html_escape::encode_text(value)
                } else {
                    Cow::Borrowed(value.as_str())
                };
                match tag.as_deref().filter(|t| !t.is_empty()) {
                    Some(tag) => {
                        out.push('<');
                        out.push_str(tag);
                        attributes.write_html(out, options);
                        out.push('>');
                        out.push_str(&value);
                        out.push_str("</");
                        out.push_str(tag);
                        out.push('>');
                    }
                    None => out.push_str(&value),
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(RenderError::MissingTag);
                }
                out.push('<');
                out.push_str(tag);
                attributes.write_html(out, options);
                out.push('>');
                for child in children {
                    child.write_html(out, options)?;
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
        Ok(())
    }
}
