use std::sync::OnceLock;

use regex::Regex;

use super::{
    kinds::{Image, Link},
    types::{RunKind, StyledTextRun},
};

/// One `[text](url)`-shaped match with its byte range in the source.
struct RefMatch<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    url: &'a str,
}

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(Image::PATTERN).expect("Invalid image regex"))
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(Link::PATTERN).expect("Invalid link regex"))
}

/// Non-overlapping image matches, left to right.
fn find_images(text: &str) -> Vec<RefMatch<'_>> {
    image_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let (_, [alt, url]) = caps.extract();
            Some(RefMatch {
                start: whole.start(),
                end: whole.end(),
                text: alt,
                url,
            })
        })
        .collect()
}

/// Non-overlapping link matches, left to right.
///
/// A candidate directly preceded by [`Link::IMAGE_MARKER`] is rejected and
/// the search resumes one byte later, so image syntax never reads as a link.
fn find_links(text: &str) -> Vec<RefMatch<'_>> {
    let re = link_regex();
    let mut out = vec![];
    let mut pos = 0;

    while pos < text.len() {
        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        if text[..whole.start()].ends_with(Link::IMAGE_MARKER) {
            // The match opens with a one-byte `[`.
            pos = whole.start() + 1;
            continue;
        }
        let (_, [anchor, url]) = caps.extract();
        out.push(RefMatch {
            start: whole.start(),
            end: whole.end(),
            text: anchor,
            url,
        });
        pos = whole.end();
    }

    out
}

/// Extracts `(alt, url)` pairs for every `![alt](url)` in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|m| (m.text.to_string(), m.url.to_string()))
        .collect()
}

/// Extracts `(text, url)` pairs for every `[text](url)` in `text` that is not an image.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|m| (m.text.to_string(), m.url.to_string()))
        .collect()
}

/// Splits image syntax out of every plain run.
pub fn split_runs_image(runs: Vec<StyledTextRun>) -> Vec<StyledTextRun> {
    split_runs_refs(runs, RunKind::Image, find_images)
}

/// Splits link syntax out of every plain run. Image syntax is left as text.
pub fn split_runs_link(runs: Vec<StyledTextRun>) -> Vec<StyledTextRun> {
    split_runs_refs(runs, RunKind::Link, find_links)
}

fn split_runs_refs(
    runs: Vec<StyledTextRun>,
    kind: RunKind,
    find: fn(&str) -> Vec<RefMatch<'_>>,
) -> Vec<StyledTextRun> {
    let mut out = Vec::with_capacity(runs.len());

    for run in runs {
        if !run.is_plain() {
            out.push(run);
            continue;
        }
        if run.content.is_empty() {
            continue;
        }

        let matches = find(&run.content);
        if matches.is_empty() {
            out.push(run);
            continue;
        }

        let mut last = 0;
        for m in &matches {
            let before = &run.content[last..m.start];
            if !before.is_empty() {
                out.push(StyledTextRun::plain(before));
            }
            out.push(StyledTextRun::with_target(m.text, kind, m.url));
            last = m.end;
        }
        let rest = &run.content[last..];
        if !rest.is_empty() {
            out.push(StyledTextRun::plain(rest));
        }
    }

    out
}
