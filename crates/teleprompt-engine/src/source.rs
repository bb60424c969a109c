//! Input sources for line display.
//!
//! Lines can be supplied either as a single multi-line block of text or
//! as an already-ordered sequence. Both forms normalize to one canonical
//! `Vec<String>` before storage.

/// Where the lines to display come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSource {
    /// A single block of text, split on newline boundaries after
    /// trimming surrounding whitespace.
    RawText(String),
    /// An ordered sequence of lines, used as-is.
    Lines(Vec<String>),
}

impl LineSource {
    /// Normalize into the canonical ordered line sequence.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Self::RawText(text) => text.trim().split('\n').map(str::to_string).collect(),
            Self::Lines(lines) => lines,
        }
    }
}

impl From<String> for LineSource {
    fn from(text: String) -> Self {
        Self::RawText(text)
    }
}

impl From<&str> for LineSource {
    fn from(text: &str) -> Self {
        Self::RawText(text.to_string())
    }
}

impl From<Vec<String>> for LineSource {
    fn from(lines: Vec<String>) -> Self {
        Self::Lines(lines)
    }
}

impl From<Vec<&str>> for LineSource {
    fn from(lines: Vec<&str>) -> Self {
        Self::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_text_trims_and_splits() {
        let source = LineSource::from("  \nA\nB\nC\n  ");
        assert_eq!(source.into_lines(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_raw_text_preserves_interior_blank_lines() {
        let source = LineSource::from("first verse\n\nsecond verse");
        assert_eq!(source.into_lines(), vec!["first verse", "", "second verse"]);
    }

    #[test]
    fn test_line_sequence_used_as_is() {
        let source = LineSource::from(vec!["  A  ".to_string(), "B".to_string()]);
        assert_eq!(source.into_lines(), vec!["  A  ", "B"]);
    }

    #[test]
    fn test_single_line_block() {
        let source = LineSource::from("just one line");
        assert_eq!(source.into_lines(), vec!["just one line"]);
    }
}
