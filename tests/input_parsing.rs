//! Tests for input normalization: separators, deduplication, comment
//! handling, and the size limits that gate a run before any network call.

use spf_status::config::MAX_INPUT_COUNT;
use spf_status::{parse_targets, strip_comment_lines, ValidationError};

#[test]
fn test_comma_separated_pair() {
    let targets = parse_targets("google.com, github.com", MAX_INPUT_COUNT).unwrap();
    assert_eq!(targets, vec!["google.com", "github.com"]);
}

#[test]
fn test_newline_and_semicolon_separators() {
    let targets = parse_targets("a.com\nb.com;c.com", MAX_INPUT_COUNT).unwrap();
    assert_eq!(targets, vec!["a.com", "b.com", "c.com"]);
}

#[test]
fn test_duplicates_collapse_to_first_occurrence() {
    let targets = parse_targets("a.com b.com a.com", MAX_INPUT_COUNT).unwrap();
    assert_eq!(targets, vec!["a.com", "b.com"]);
}

#[test]
fn test_ips_and_domains_mix() {
    let targets = parse_targets("8.8.8.8, example.org; 1.1.1.1", MAX_INPUT_COUNT).unwrap();
    assert_eq!(targets, vec!["8.8.8.8", "example.org", "1.1.1.1"]);
}

#[test]
fn test_blank_input_is_a_validation_error() {
    let err = parse_targets("   \n\t ,;; ", MAX_INPUT_COUNT).unwrap_err();
    assert_eq!(err, ValidationError::Empty);
    assert_eq!(err.code(), "empty");
}

#[test]
fn test_ten_thousand_and_one_entries_rejected() {
    // Scenario E: one entry past the limit fails before any lookup starts
    let raw: String = (0..=MAX_INPUT_COUNT)
        .map(|i| format!("host{i}.example"))
        .collect::<Vec<_>>()
        .join("\n");
    let err = parse_targets(&raw, MAX_INPUT_COUNT).unwrap_err();
    assert_eq!(
        err,
        ValidationError::TooMany {
            count: MAX_INPUT_COUNT + 1,
            max: MAX_INPUT_COUNT
        }
    );
    assert_eq!(err.code(), "too_many");
}

#[test]
fn test_ten_thousand_entries_accepted() {
    let raw: String = (0..MAX_INPUT_COUNT)
        .map(|i| format!("host{i}.example"))
        .collect::<Vec<_>>()
        .join("\n");
    let targets = parse_targets(&raw, MAX_INPUT_COUNT).unwrap();
    assert_eq!(targets.len(), MAX_INPUT_COUNT);
}

#[test]
fn test_duplicates_do_not_count_against_the_limit() {
    let raw = vec!["same.example"; 20].join(" ");
    let targets = parse_targets(&raw, 10).unwrap();
    assert_eq!(targets, vec!["same.example"]);
}

#[test]
fn test_comment_and_blank_lines_in_file_input() {
    let raw = "# company domains\n\ngoogle.com\n# legacy\ngithub.com\n\n";
    let targets = parse_targets(&strip_comment_lines(raw), MAX_INPUT_COUNT).unwrap();
    assert_eq!(targets, vec!["google.com", "github.com"]);
}
