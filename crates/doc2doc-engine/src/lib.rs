pub mod html;
pub mod page;
pub mod parsing;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlNode, RenderError, RenderOptions, text_run_to_html_node};
pub use page::{PageError, extract_title, generate_page};
pub use parsing::{
    ParseError,
    blocks::{BlockType, block_to_block_type, block_to_html_node, markdown_to_blocks},
    inline::{
        RunKind, StyledTextRun, extract_markdown_images, extract_markdown_links, text_to_runs,
    },
    markdown_to_html_node,
};
