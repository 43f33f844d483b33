/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no
/// other predicate matches. Line breaks inside a paragraph fold into spaces.
pub struct Paragraph;

impl Paragraph {
    pub fn join_lines(block: &str) -> String {
        block.replace('\n', " ")
    }
}
