use crate::parsing::ParseError;

use super::types::{RunKind, StyledTextRun};

/// Splits every plain run on `delimiter`, turning delimited text into `kind` runs.
///
/// Parts alternate plain/delimited starting with plain, so a valid split
/// always has an odd number of parts. Non-plain runs pass through untouched,
/// and empty runs or parts are dropped rather than emitted.
///
/// # Errors
/// [`ParseError::MalformedMarkdown`] when a plain run contains an unmatched
/// delimiter.
pub fn split_runs_delimiter(
    runs: Vec<StyledTextRun>,
    delimiter: &str,
    kind: RunKind,
) -> Result<Vec<StyledTextRun>, ParseError> {
    let mut out = Vec::with_capacity(runs.len());

    for run in runs {
        if !run.is_plain() {
            out.push(run);
            continue;
        }
        if run.content.is_empty() {
            continue;
        }

        let parts: Vec<&str> = run.content.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ParseError::malformed(delimiter, &run.content));
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { RunKind::Plain } else { kind };
            out.push(StyledTextRun::new(part, part_kind));
        }
    }

    Ok(out)
}
