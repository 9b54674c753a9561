// Tests for interactive row parsing

use super::*;

#[test]
fn test_parse_row_accepts_spaced_integers() {
    assert_eq!(parse_row("3 3 2", 3), Ok(vec![3, 3, 2]));
    assert_eq!(parse_row("  0   1 ", 2), Ok(vec![0, 1]));
    assert_eq!(parse_row("-1 5", 2), Ok(vec![-1, 5]));
}

#[test]
fn test_parse_row_rejects_wrong_width() {
    assert!(parse_row("1 2", 3).is_err());
    assert!(parse_row("1 2 3 4", 3).is_err());
    assert!(parse_row("", 1).is_err());
}

#[test]
fn test_parse_row_rejects_non_integers() {
    let err = parse_row("1 two 3", 3).unwrap_err();
    assert!(err.contains("two"));
}
