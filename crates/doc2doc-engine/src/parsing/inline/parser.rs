use crate::parsing::ParseError;

use super::{
    delimiter::split_runs_delimiter,
    kinds::{CodeSpan, Emphasis, Strong},
    links::{split_runs_image, split_runs_link},
    types::{RunKind, StyledTextRun},
};

/// Tokenizes one inline string into styled runs.
///
/// # Pass Order
/// 1. Code spans (`` ` ``), so nothing inside backticks is parsed further
/// 2. Images, before links, so `![..](..)` is never read as a link
/// 3. Links
/// 4. Bold (`**`)
/// 5. Italic (`_`)
///
/// # Returns
/// The runs covering the whole input in order. Plain text with no markup
/// yields a single plain run; an empty string yields no runs.
///
/// # Errors
/// [`ParseError::MalformedMarkdown`] when any delimiter pair is unmatched.
pub fn text_to_runs(text: &str) -> Result<Vec<StyledTextRun>, ParseError> {
    let runs = vec![StyledTextRun::plain(text)];
    let runs = split_runs_delimiter(runs, CodeSpan::TICK, RunKind::Code)?;
    let runs = split_runs_image(runs);
    let runs = split_runs_link(runs);
    let runs = split_runs_delimiter(runs, Strong::DELIMITER, RunKind::Bold)?;
    split_runs_delimiter(runs, Emphasis::DELIMITER, RunKind::Italic)
}
