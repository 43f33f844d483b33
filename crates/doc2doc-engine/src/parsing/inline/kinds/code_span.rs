/// Code span inline type with owned delimiter constant.
///
/// Code spans are split first, so their content is never seen by the
/// image, link or emphasis passes.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
