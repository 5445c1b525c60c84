use crate::result::{Error, Result};

/// Returns the text strictly between the first `(` and the last `)`.
///
/// Input without such a pair is returned unchanged, so callers may pass a body
/// whose brackets were already removed.
/// # Examples
/// ```
/// use wkt_json::brackets::unwrap_outer;
/// assert_eq!(unwrap_outer("POINT(1 2)"), "1 2");
/// assert_eq!(unwrap_outer("no-brackets"), "no-brackets");
/// ```
pub fn unwrap_outer(s: &str) -> &str {
    match (s.find('('), s.rfind(')')) {
        (Some(open), Some(close)) if open < close => &s[open + 1..close],
        _ => s,
    }
}

/// Splits `s` into its parts on commas that sit outside any bracket.
///
/// For `(1 2,3 4),(5 6,7 8)` this gives `(1 2,3 4)` and `(5 6,7 8)`, whatever
/// whitespace surrounds the separating comma. Text with no `(` is one part.
pub fn split_rings(s: &str) -> Vec<&str> {
    if !s.contains('(') {
        return vec![s];
    }
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(s[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

/// Removes every `(` and `)` from `s`.
pub fn strip_all_brackets(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '(' | ')')).collect()
}

/// Drops a trailing comma, and the whitespace around it.
pub fn trim_trailing_separator(s: &str) -> &str {
    let trimmed = s.trim_end();
    match trimmed.strip_suffix(',') {
        Some(rest) => rest.trim_end(),
        None => s,
    }
}

/// Checks that every `)` closes an earlier `(` and that all of them are closed.
pub fn check_balanced(s: &str) -> Result<()> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    Error::MalformedStructure(format!("unmatched ')' at byte {}", i))
                })?
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(Error::MalformedStructure(format!(
            "{} unclosed '('",
            depth
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_outer_pair() {
        assert_eq!(unwrap_outer("POINT(1 2)"), "1 2");
        assert_eq!(
            unwrap_outer("GEOMETRYCOLLECTION(POINT(4 6),LINESTRING(4 6,7 10))"),
            "POINT(4 6),LINESTRING(4 6,7 10)"
        );
        assert_eq!(
            unwrap_outer("TRIANGLE((0 0 0,0 1 0,1 1 0,0 0 0))"),
            "(0 0 0,0 1 0,1 1 0,0 0 0)"
        );
    }

    #[test]
    fn unwrap_outer_without_brackets() {
        assert_eq!(unwrap_outer("no-brackets"), "no-brackets");
        assert_eq!(unwrap_outer("1 2"), "1 2");
        assert_eq!(unwrap_outer(")("), ")(");
    }

    #[test]
    fn split_rings_on_separator() {
        assert_eq!(
            split_rings("(35 10,45 45,35 10),(20 30,35 35,20 30)"),
            vec!["(35 10,45 45,35 10)", "(20 30,35 35,20 30)"]
        );
        assert_eq!(
            split_rings("(0 0,1 1) , (2 2,3 3)"),
            vec!["(0 0,1 1)", "(2 2,3 3)"]
        );
    }

    #[test]
    fn split_rings_single_part() {
        assert_eq!(split_rings("(0 0,1 0,1 1,0 0)"), vec!["(0 0,1 0,1 1,0 0)"]);
        assert_eq!(split_rings("0 0,1 0,1 1"), vec!["0 0,1 0,1 1"]);
    }

    #[test]
    fn split_rings_keeps_nested_parts_whole() {
        assert_eq!(
            split_rings("((0 0,1 1),(2 2,3 3)),((4 4,5 5))"),
            vec!["((0 0,1 1),(2 2,3 3))", "((4 4,5 5))"]
        );
    }

    #[test]
    fn strip_brackets() {
        assert_eq!(
            strip_all_brackets("GEOMETRYCOLLECTION(POINT(4 6),LINESTRING(4 6,7 10))"),
            "GEOMETRYCOLLECTIONPOINT4 6,LINESTRING4 6,7 10"
        );
        assert_eq!(
            strip_all_brackets("TRIANGLE((0 0 0,0 1 0,1 1 0,0 0 0))"),
            "TRIANGLE0 0 0,0 1 0,1 1 0,0 0 0"
        );
    }

    #[test]
    fn trailing_separator() {
        assert_eq!(trim_trailing_separator("POINT(4 6),"), "POINT(4 6)");
        assert_eq!(trim_trailing_separator("POINT(4 6) , \n"), "POINT(4 6)");
        assert_eq!(trim_trailing_separator("POINT(4 6)"), "POINT(4 6)");
    }

    #[test]
    fn balance() {
        assert!(check_balanced("POLYGON((0 0,1 1),(2 2))").is_ok());
        assert!(check_balanced("POINT 1 2").is_ok());
        assert!(matches!(
            check_balanced("POINT(1 2"),
            Err(Error::MalformedStructure(_))
        ));
        assert!(matches!(
            check_balanced("POINT)1 2("),
            Err(Error::MalformedStructure(_))
        ));
    }
}
