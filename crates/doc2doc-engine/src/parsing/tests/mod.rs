//! End-to-end tests for the parsing module: document in, rendered HTML out.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    ParseError,
    blocks::{BlockType, block_to_block_type, markdown_to_blocks},
    inline::{RunKind, StyledTextRun, text_to_runs},
    markdown_to_html_node, parse_document, snapshot,
};

fn render(md: &str) -> String {
    let root = markdown_to_html_node(md).unwrap();
    snapshot::invariants(&parse_document(md), &root);
    root.to_html().unwrap()
}

#[test]
fn empty_document_renders_empty_div() {
    assert_eq!(render(""), "<div></div>");
    assert_eq!(render("\n\n  \n\n"), "<div></div>");
}

#[test]
fn paragraphs() {
    let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
    assert_eq!(
        render(md),
        "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn headings() {
    assert_eq!(
        render("# Heading 1\n\n## Heading 2\n\n### Heading 3"),
        "<div><h1>Heading 1</h1><h2>Heading 2</h2><h3>Heading 3</h3></div>"
    );
}

#[test]
fn code_block_keeps_trailing_newline() {
    assert_eq!(
        render("```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```"),
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
    );
}

#[test]
fn quote() {
    assert_eq!(
        render("> This is a quote\n> line two"),
        "<div><blockquote>This is a quote\nline two</blockquote></div>"
    );
}

#[test]
fn unordered_list_with_mixed_markers() {
    let md = "- Item 1\n* Item 2\n- Item 3";
    assert_eq!(block_to_block_type(md), BlockType::UnorderedList);
    assert_eq!(
        render(md),
        "<div><ul><li>Item 1</li><li>Item 2</li><li>Item 3</li></ul></div>"
    );
}

#[test]
fn ordered_list() {
    assert_eq!(
        render("1. First item\n2. Second item\n3. Third item"),
        "<div><ol><li>First item</li><li>Second item</li><li>Third item</li></ol></div>"
    );
}

#[test]
fn ordered_list_must_start_at_one() {
    let md = "2. Second item\n3. Third item";
    assert_eq!(block_to_block_type(md), BlockType::Paragraph);
    assert_eq!(render(md), "<div><p>2. Second item 3. Third item</p></div>");
}

#[test]
fn mixed_blocks() {
    let md = r#"# Main Title

This is a **paragraph** with _inline_ content.

```
print("hello")
```

> A quote here
> another line

- List item one
- List item two

1. Ordered item one
2. Ordered item two"#;
    let expected = concat!(
        "<div>",
        "<h1>Main Title</h1>",
        "<p>This is a <b>paragraph</b> with <i>inline</i> content.</p>",
        "<pre><code>print(\"hello\")\n</code></pre>",
        "<blockquote>A quote here\nanother line</blockquote>",
        "<ul><li>List item one</li><li>List item two</li></ul>",
        "<ol><li>Ordered item one</li><li>Ordered item two</li></ol>",
        "</div>",
    );
    assert_eq!(render(md), expected);
}

#[test]
fn images_and_links_in_a_paragraph() {
    assert_eq!(
        render("See ![logo](/logo.png) and [home](/)"),
        r#"<div><p>See <img src="/logo.png" alt="logo"></img> and <a href="/">home</a></p></div>"#
    );
}

#[test]
fn code_span_scenario() {
    assert_eq!(
        text_to_runs("This is text with a `code block` word").unwrap(),
        vec![
            StyledTextRun::plain("This is text with a "),
            StyledTextRun::new("code block", RunKind::Code),
            StyledTextRun::plain(" word"),
        ]
    );
}

#[test]
fn unclosed_code_delimiter_fails_the_document() {
    let err = markdown_to_html_node("# Fine\n\nText with `unclosed delimiter").unwrap_err();
    assert_eq!(
        err,
        ParseError::MalformedMarkdown {
            delimiter: "`".into(),
            text: "Text with `unclosed delimiter".into(),
        }
    );
}

#[rstest]
#[case("`a` and `b`")]
#[case("**a** **b** and **c**")]
#[case("_a_ _b_")]
#[case("``")]
#[case("`x` **y** _z_ ``")]
fn paired_delimiters_never_fail(#[case] text: &str) {
    assert!(text_to_runs(text).is_ok());
}

#[rstest]
#[case("one ` stray", "`")]
#[case("one ** stray", "**")]
#[case("one _ stray", "_")]
#[case("`a` then `", "`")]
fn single_stray_delimiter_fails(#[case] text: &str, #[case] delimiter: &str) {
    match text_to_runs(text) {
        Err(ParseError::MalformedMarkdown { delimiter: d, .. }) => assert_eq!(d, delimiter),
        other => panic!("expected MalformedMarkdown, got {other:?}"),
    }
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("#")]
#[case("```")]
#[case(">")]
#[case("- ")]
#[case("1. ")]
#[case("plain words")]
fn classification_is_total(#[case] block: &str) {
    let t = block_to_block_type(block);
    assert!(BlockType::ALL.contains(&t));
}

#[test]
fn parse_document_pairs_blocks_with_types() {
    let doc = parse_document("# T\n\n> q\n\n```\nx\n```");
    let types: Vec<_> = doc.blocks.iter().map(|b| b.block_type).collect();
    assert_eq!(
        types,
        vec![BlockType::Heading, BlockType::Quote, BlockType::Code]
    );
    assert_eq!(
        doc.blocks.iter().map(|b| b.text).collect::<Vec<_>>(),
        markdown_to_blocks("# T\n\n> q\n\n```\nx\n```")
    );
}
