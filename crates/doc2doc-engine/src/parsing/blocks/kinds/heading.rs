/// ATX heading block type, `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Splits a heading block into its level and text.
    ///
    /// Returns `None` unless the block opens with 1-6 markers followed by a
    /// space. Exactly one space is consumed; the rest is the heading text.
    pub fn split(block: &str) -> Option<(usize, &str)> {
        let level = block.chars().take_while(|&c| c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&level) {
            return None;
        }
        // `#` is one byte, so `level` is also a byte offset.
        let text = block[level..].strip_prefix(' ')?;
        Some((level, text))
    }
}
