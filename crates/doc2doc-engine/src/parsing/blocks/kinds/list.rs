/// Unordered list: every line opens with `- ` or `* `.
///
/// Both markers may appear within the same list.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    pub fn is_item(line: &str) -> bool {
        Self::MARKERS.iter().any(|m| line.starts_with(m))
    }

    pub fn strip_marker(line: &str) -> &str {
        Self::MARKERS
            .iter()
            .find_map(|m| line.strip_prefix(m))
            .unwrap_or(line)
    }
}

/// Ordered list: line `i` opens with `"{i + 1}. "`.
///
/// Numbering starts at 1 and increases by exactly one per line.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// Whether `line` carries the marker expected at zero-based position `index`.
    pub fn is_item_at(line: &str, index: usize) -> bool {
        line.strip_prefix(&(index + 1).to_string())
            .is_some_and(|rest| rest.starts_with(Self::SEPARATOR))
    }

    /// Drops everything up to and including the first `". "`.
    pub fn strip_marker(line: &str) -> &str {
        line.split_once(Self::SEPARATOR)
            .map_or(line, |(_, item)| item)
    }
}
