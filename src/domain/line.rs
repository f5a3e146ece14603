//! Line classification for spec bodies
//!
//! Every body line is classified exactly once. Title extraction, checklist
//! detection and task extraction all read the same annotated stream.

/// Marker for a finished checklist item
pub const CHECKED_MARKER: &str = "- [x] ";

/// Marker for an unfinished checklist item
pub const UNCHECKED_MARKER: &str = "- [ ] ";

/// What a single line is, as far as the spec model is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// ATX heading with its level (1-6) and trimmed text
    Heading { level: u8, text: &'a str },

    /// `- [x] text` at column zero
    Checked(&'a str),

    /// `- [ ] text` at column zero
    Unchecked(&'a str),

    /// Anything else
    Other,
}

/// A body line annotated with its kind and indentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// True when the line starts with whitespace
    pub indented: bool,

    pub kind: LineKind<'a>,
}

impl<'a> Line<'a> {
    /// Classifies a raw line
    pub fn classify(raw: &'a str) -> Self {
        let indented = raw.starts_with(char::is_whitespace);

        let kind = if let Some((level, text)) = heading_run(raw).and_then(parse_heading) {
            LineKind::Heading { level, text }
        } else if indented {
            LineKind::Other
        } else if let Some(text) = raw.strip_prefix(CHECKED_MARKER) {
            LineKind::Checked(text.trim())
        } else if let Some(text) = raw.strip_prefix(UNCHECKED_MARKER) {
            LineKind::Unchecked(text.trim())
        } else {
            LineKind::Other
        };

        Self { indented, kind }
    }

    /// Returns the heading text if this line is a heading of the given level
    pub fn heading(&self, wanted: u8) -> Option<&'a str> {
        match self.kind {
            LineKind::Heading { level, text } if level == wanted => Some(text),
            _ => None,
        }
    }
}

/// Strips up to three leading spaces. More than that, or a tab, makes the
/// line an indented code block rather than a heading.
fn heading_run(raw: &str) -> Option<&str> {
    let rest = raw.trim_start_matches(' ');
    if raw.len() - rest.len() > 3 || rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_end())
}

/// Parses `#`..`######` headings. The marker run must be followed by
/// whitespace or the end of the line.
fn parse_heading(trimmed: &str) -> Option<(u8, &str)> {
    let level = trimmed.bytes().take_while(|b| *b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let rest = &trimmed[level..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    Some((level as u8, rest.trim()))
}

/// Classifies every line of a body
pub fn annotate(body: &str) -> Vec<Line<'_>> {
    body.lines().map(Line::classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(raw: &str) -> LineKind<'_> {
        Line::classify(raw).kind
    }

    #[test]
    fn headings_by_level() {
        assert_eq!(kind("# Title"), LineKind::Heading { level: 1, text: "Title" });
        assert_eq!(kind("## Task List"), LineKind::Heading { level: 2, text: "Task List" });
        assert_eq!(kind("### Phase 1  "), LineKind::Heading { level: 3, text: "Phase 1" });
        assert_eq!(kind("#"), LineKind::Heading { level: 1, text: "" });
    }

    #[test]
    fn hash_without_space_is_not_a_heading() {
        assert_eq!(kind("#hashtag"), LineKind::Other);
        assert_eq!(kind("####### seven"), LineKind::Other);
    }

    #[test]
    fn checklist_markers() {
        assert_eq!(kind("- [x] Done"), LineKind::Checked("Done"));
        assert_eq!(kind("- [ ] Todo"), LineKind::Unchecked("Todo"));
        assert_eq!(kind("- plain bullet"), LineKind::Other);
        assert_eq!(kind("* [x] other marker"), LineKind::Other);
    }

    #[test]
    fn indented_bullets_are_not_tasks() {
        let line = Line::classify("  - [x] nested");
        assert!(line.indented);
        assert_eq!(line.kind, LineKind::Other);

        let tabbed = Line::classify("\t- [ ] nested");
        assert!(tabbed.indented);
        assert_eq!(tabbed.kind, LineKind::Other);
    }

    #[test]
    fn indented_headings_still_count() {
        let line = Line::classify("  ## Task List");
        assert!(line.indented);
        assert_eq!(line.heading(2), Some("Task List"));

        assert_eq!(Line::classify("   ### Phase").heading(3), Some("Phase"));
    }

    #[test]
    fn code_indented_hashes_are_not_headings() {
        assert_eq!(kind("    # not a title"), LineKind::Other);
        assert_eq!(kind("\t## Task List"), LineKind::Other);
        assert_eq!(kind("  \t# mixed"), LineKind::Other);
    }

    #[test]
    fn annotate_handles_crlf() {
        let lines = annotate("# Title\r\n- [ ] One\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].heading(1), Some("Title"));
        assert_eq!(lines[1].kind, LineKind::Unchecked("One"));
    }
}
