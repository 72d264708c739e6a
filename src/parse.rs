//! Input normalization.
//!
//! Turns the raw free-form input text into a deduplicated, ordered list of
//! lookup targets. Pure string processing; no network access.

use std::collections::HashSet;

use crate::error_handling::ValidationError;

/// Parses raw input text into a deduplicated, ordered target list.
///
/// Entries are separated by any run of whitespace, commas, or semicolons.
/// Each piece is trimmed; empty pieces are dropped. Duplicates are removed
/// preserving first-occurrence order. Identity is the exact string as typed
/// (case-sensitive).
///
/// # Errors
///
/// Returns `ValidationError::Empty` if no entries remain after
/// normalization, or `ValidationError::TooMany` if the unique entry count
/// exceeds `max`.
pub fn parse_targets(raw: &str, max: usize) -> Result<Vec<String>, ValidationError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut targets: Vec<String> = Vec::new();
    for piece in raw.split(|c: char| c.is_whitespace() || c == ',' || c == ';') {
        let trimmed = piece.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed) {
            targets.push(trimmed.to_string());
        }
    }

    if targets.is_empty() {
        return Err(ValidationError::Empty);
    }
    if targets.len() > max {
        return Err(ValidationError::TooMany {
            count: targets.len(),
            max,
        });
    }

    Ok(targets)
}

/// Strips comment lines (starting with `#`) from file input before
/// normalization. Blank lines fall out of normalization anyway.
pub fn strip_comment_lines(raw: &str) -> String {
    raw.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 10_000;

    #[test]
    fn test_splits_on_mixed_separators() {
        let targets =
            parse_targets("google.com, github.com;example.org\n8.8.8.8\t1.1.1.1", MAX).unwrap();
        assert_eq!(
            targets,
            vec![
                "google.com",
                "github.com",
                "example.org",
                "8.8.8.8",
                "1.1.1.1"
            ]
        );
    }

    #[test]
    fn test_dedupes_preserving_first_occurrence_order() {
        let targets = parse_targets("b.com a.com b.com c.com a.com", MAX).unwrap();
        assert_eq!(targets, vec!["b.com", "a.com", "c.com"]);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let targets = parse_targets("Example.com example.com", MAX).unwrap();
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(parse_targets("", MAX), Err(ValidationError::Empty));
        assert_eq!(parse_targets(" ,;\n\t ", MAX), Err(ValidationError::Empty));
    }

    #[test]
    fn test_over_limit_rejected() {
        let raw: Vec<String> = (0..11).map(|i| format!("host{i}.example")).collect();
        let err = parse_targets(&raw.join(" "), 10).unwrap_err();
        assert_eq!(err, ValidationError::TooMany { count: 11, max: 10 });
    }

    #[test]
    fn test_exactly_at_limit_accepted() {
        let raw: Vec<String> = (0..10).map(|i| format!("host{i}.example")).collect();
        assert_eq!(parse_targets(&raw.join(" "), 10).unwrap().len(), 10);
    }

    #[test]
    fn test_strip_comment_lines() {
        let raw = "# header\ngoogle.com\n  # indented comment\ngithub.com";
        let cleaned = strip_comment_lines(raw);
        let targets = parse_targets(&cleaned, MAX).unwrap();
        assert_eq!(targets, vec!["google.com", "github.com"]);
    }
}
