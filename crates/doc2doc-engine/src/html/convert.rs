use crate::parsing::{
    ParseError,
    inline::{RunKind, StyledTextRun},
};

use super::HtmlNode;

/// Maps one styled run to the leaf node that renders it.
///
/// | kind   | node                                   |
/// |--------|----------------------------------------|
/// | Plain  | untagged leaf                          |
/// | Bold   | `<b>`                                  |
/// | Italic | `<i>`                                  |
/// | Code   | `<code>`                               |
/// | Link   | `<a href=target>`                      |
/// | Image  | `<img src=target alt=content>`, empty  |
///
/// # Errors
/// [`ParseError::UnsupportedRunKind`] for document-format kinds, which have
/// no inline rendering.
pub fn text_run_to_html_node(run: &StyledTextRun) -> Result<HtmlNode, ParseError> {
    let target = run.target.as_deref().unwrap_or_default();
    let node = match run.kind {
        RunKind::Plain => HtmlNode::text(run.content.as_str()),
        RunKind::Bold => HtmlNode::leaf("b", run.content.as_str()),
        RunKind::Italic => HtmlNode::leaf("i", run.content.as_str()),
        RunKind::Code => HtmlNode::leaf("code", run.content.as_str()),
        RunKind::Link => HtmlNode::leaf("a", run.content.as_str()).with_attribute("href", target),
        RunKind::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", target)
            .with_attribute("alt", run.content.as_str()),
        RunKind::MarkdownDoc
        | RunKind::WordDoc
        | RunKind::PowerPointX
        | RunKind::PowerPoint
        | RunKind::PdfDoc => return Err(ParseError::UnsupportedRunKind(run.kind)),
    };
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn render(run: StyledTextRun) -> String {
        text_run_to_html_node(&run).unwrap().to_html().unwrap()
    }

    #[rstest]
    #[case(StyledTextRun::plain("This is a text node"), "This is a text node")]
    #[case(StyledTextRun::new("bold", RunKind::Bold), "<b>bold</b>")]
    #[case(StyledTextRun::new("italic", RunKind::Italic), "<i>italic</i>")]
    #[case(StyledTextRun::new("x = 1", RunKind::Code), "<code>x = 1</code>")]
    #[case(
        StyledTextRun::with_target("link", RunKind::Link, "https://boot.dev"),
        r#"<a href="https://boot.dev">link</a>"#
    )]
    #[case(
        StyledTextRun::with_target("obi wan", RunKind::Image, "https://i.imgur.com/fJRm4Vk.jpeg"),
        r#"<img src="https://i.imgur.com/fJRm4Vk.jpeg" alt="obi wan"></img>"#
    )]
    fn renders_each_inline_kind(#[case] run: StyledTextRun, #[case] expected: &str) {
        assert_eq!(render(run), expected);
    }

    #[test]
    fn image_node_has_empty_value() {
        let node =
            text_run_to_html_node(&StyledTextRun::with_target("alt", RunKind::Image, "u")).unwrap();
        assert!(matches!(node, HtmlNode::Leaf { ref value, .. } if value.is_empty()));
    }

    #[test]
    fn document_kinds_are_rejected() {
        let run = StyledTextRun::with_target("report", RunKind::WordDoc, "report.docx");
        assert_eq!(
            text_run_to_html_node(&run),
            Err(ParseError::UnsupportedRunKind(RunKind::WordDoc))
        );
    }
}
