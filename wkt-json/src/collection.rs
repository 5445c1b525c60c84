use crate::brackets::{trim_trailing_separator, unwrap_outer};
use crate::keyword::{is_modifier, Keyword};
use crate::result::{Error, Result};

/// One member geometry of a collection, with its own leading keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub keyword: Keyword,
    /// The member's WKT, starting at its keyword, e.g. `LINESTRING(4 6,7 10)`.
    pub text: &'a str,
}

pub fn is_geometry_collection(wkt: &str) -> bool {
    wkt.contains("GEOMETRYCOLLECTION")
}

/// Splits the members out of a collection.
///
/// The interior is scanned once. Outside brackets, a keyword word starts a new
/// member, `Z`/`M`/`ZM`/`EMPTY` belong to the current one, and commas and
/// whitespace separate members. Anything else there is malformed.
/// # Examples
/// ```
/// use wkt_json::collection::split_collection;
/// let parts = split_collection("GEOMETRYCOLLECTION(POINT(4 6),LINESTRING(4 6,7 10))").unwrap();
/// assert_eq!(parts[0].text, "POINT(4 6)");
/// assert_eq!(parts[1].text, "LINESTRING(4 6,7 10)");
/// ```
pub fn split_collection(wkt: &str) -> Result<Vec<Fragment<'_>>> {
    if !wkt.contains('(') {
        return Err(Error::MalformedStructure(
            "collection has no '(' to open its members".to_owned(),
        ));
    }
    let interior = unwrap_outer(wkt);

    // (keyword, start offset) per member
    let mut starts: Vec<(Keyword, usize)> = Vec::new();
    let mut depth = 0usize;
    let mut chars = interior.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth > 0 => {}
            ',' => {}
            c if c.is_whitespace() => {}
            c if c.is_ascii_alphabetic() => {
                let mut end = i + c.len_utf8();
                while let Some(&(j, n)) = chars.peek() {
                    if !n.is_ascii_alphabetic() {
                        break;
                    }
                    end = j + n.len_utf8();
                    chars.next();
                }
                let word = &interior[i..end];
                if let Some(kw) = Keyword::from_word(word) {
                    starts.push((kw, i));
                } else if is_modifier(word) && !starts.is_empty() {
                    continue;
                } else {
                    return Err(Error::MalformedStructure(format!(
                        "unexpected '{}' between collection members",
                        word
                    )));
                }
            }
            c => {
                return Err(Error::MalformedStructure(format!(
                    "unexpected '{}' outside a collection member",
                    c
                )))
            }
        }
    }

    let mut fragments = Vec::with_capacity(starts.len());
    for (n, &(keyword, start)) in starts.iter().enumerate() {
        let end = starts.get(n + 1).map_or(interior.len(), |&(_, next)| next);
        let text = trim_trailing_separator(interior[start..end].trim());
        let body = &text[keyword.as_str().len()..];
        if !body.contains('(') && !body.contains("EMPTY") {
            return Err(Error::MalformedStructure(format!(
                "collection member {} has no body",
                keyword.as_str()
            )));
        }
        fragments.push(Fragment { keyword, text });
    }
    tracing::debug!(members = fragments.len(), "split geometry collection");
    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_collections() {
        assert!(is_geometry_collection("GEOMETRYCOLLECTION(POINT(1 2))"));
        assert!(!is_geometry_collection("POINT(1 2)"));
    }

    #[test]
    fn splits_members_with_keywords() {
        let parts =
            split_collection("GEOMETRYCOLLECTION(POINT(4 6),LINESTRING(4 6,7 10))").unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].keyword, Keyword::Point);
        assert_eq!(parts[0].text, "POINT(4 6)");
        assert_eq!(parts[1].keyword, Keyword::LineString);
        assert_eq!(parts[1].text, "LINESTRING(4 6,7 10)");
    }

    #[test]
    fn multi_keywords_are_not_split_on_their_base() {
        let parts = split_collection(
            "GEOMETRYCOLLECTION(MULTIPOINT((1 2),(3 4)), MULTIPOLYGON(((0 0,1 0,1 1,0 0))))",
        )
        .unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].keyword, Keyword::MultiPoint);
        assert_eq!(parts[1].keyword, Keyword::MultiPolygon);
        assert_eq!(parts[1].text, "MULTIPOLYGON(((0 0,1 0,1 1,0 0)))");
    }

    #[test]
    fn dimension_and_empty_words_stay_with_member() {
        let parts = split_collection(
            "GEOMETRYCOLLECTION Z (POINT Z (1 2 3), LINESTRING EMPTY, POLYGON ZM ((0 0 0 0,1 0 0 0,1 1 0 0,0 0 0 0)))",
        )
        .unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].text, "POINT Z (1 2 3)");
        assert_eq!(parts[1].text, "LINESTRING EMPTY");
        assert!(parts[2].text.starts_with("POLYGON ZM (("));
    }

    #[test]
    fn nested_collection_is_one_member() {
        let parts = split_collection(
            "GEOMETRYCOLLECTION(GEOMETRYCOLLECTION(POINT(1 2),POINT(3 4)),POINT(5 6))",
        )
        .unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].keyword, Keyword::GeometryCollection);
        assert_eq!(
            parts[0].text,
            "GEOMETRYCOLLECTION(POINT(1 2),POINT(3 4))"
        );
    }

    #[test]
    fn stray_text_is_malformed() {
        assert!(matches!(
            split_collection("GEOMETRYCOLLECTION(12 POINT(1 2))"),
            Err(Error::MalformedStructure(_))
        ));
        assert!(matches!(
            split_collection("GEOMETRYCOLLECTION(FOO(1 2))"),
            Err(Error::MalformedStructure(_))
        ));
        assert!(matches!(
            split_collection("GEOMETRYCOLLECTION(POINT, LINESTRING(1 2,3 4))"),
            Err(Error::MalformedStructure(_))
        ));
        assert!(matches!(
            split_collection("GEOMETRYCOLLECTION"),
            Err(Error::MalformedStructure(_))
        ));
    }
}
