/// Fenced code block type with owned delimiter constant.
///
/// A block is a code block only when the fence both opens and closes it.
/// The content is a raw zone: no inline parsing happens inside.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn encloses(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS) && block.ends_with(Self::BACKTICKS)
    }

    /// Returns the verbatim code between the fences.
    ///
    /// A single line break right after the opening fence is dropped; trailing
    /// line breaks are part of the code. Blocks too short to hold two
    /// separate fences have empty content.
    pub fn content(block: &str) -> &str {
        let inner = block
            .strip_prefix(Self::BACKTICKS)
            .and_then(|rest| rest.strip_suffix(Self::BACKTICKS))
            .unwrap_or("");
        inner.strip_prefix('\n').unwrap_or(inner)
    }
}
