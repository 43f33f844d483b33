// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** _content_ and a [link](https://example.com).\n\n- Bullet point\n* Another item\n\n1. First\n2. Second\n\n> Quoted line\n> continued\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize, paragraphs: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        for p in 0..paragraphs {
            content.push_str(&format!(
                "Paragraph {p} with `inline code`, an ![image](/img/{p}.png) and **bold** text.\nIt wraps onto a _second_ line.\n\n"
            ));
        }
        for i in 0..3 {
            content.push_str(&format!("- Item {i} in section {section}\n"));
        }
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
pub fn generate_inline_line(repeats: usize) -> String {
    "plain **bold** _italic_ `code` [link](https://a.dev) ![img](/i.png) "
        .repeat(repeats)
}
