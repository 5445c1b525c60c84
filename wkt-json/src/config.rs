use serde::{Deserialize, Serialize};

use crate::result::Result;

/// What to do with an ordinate that is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericPolicy {
    /// Read it as 0.0 and record a warning.
    #[default]
    Lenient,
    /// Fail the conversion.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub numeric: NumericPolicy,
    /// Tokens removed from the raw text before parsing. Some databases write a
    /// missing ordinate as `1.#QNAN`.
    pub null_tokens: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            numeric: NumericPolicy::Lenient,
            null_tokens: vec!["1.#QNAN".to_owned()],
        }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            numeric: NumericPolicy::Strict,
            ..Default::default()
        }
    }

    /// Reads options from JSON, missing fields take their defaults.
    /// # Examples
    /// ```
    /// use wkt_json::config::{NumericPolicy, ParseOptions};
    /// let opts = ParseOptions::from_json(r#"{"numeric": "strict"}"#).unwrap();
    /// assert_eq!(opts.numeric, NumericPolicy::Strict);
    /// ```
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Removes every null token from `wkt`.
    pub(crate) fn sanitize(&self, wkt: &str) -> String {
        let mut out = wkt.to_owned();
        for token in self.null_tokens.iter().filter(|t| !t.is_empty()) {
            out = out.replace(token.as_str(), "");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_lenient() {
        let opts = ParseOptions::default();
        assert_eq!(opts.numeric, NumericPolicy::Lenient);
        assert_eq!(opts.null_tokens, vec!["1.#QNAN".to_owned()]);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let opts = ParseOptions::from_json(r#"{"numeric": "strict"}"#).unwrap();
        assert_eq!(opts.numeric, NumericPolicy::Strict);
        assert_eq!(opts.null_tokens, vec!["1.#QNAN".to_owned()]);

        let opts = ParseOptions::from_json(r#"{"null_tokens": []}"#).unwrap();
        assert_eq!(opts.numeric, NumericPolicy::Lenient);
        assert!(opts.null_tokens.is_empty());
    }

    #[test]
    fn bad_json_is_a_config_error() {
        assert!(matches!(
            ParseOptions::from_json(r#"{"numeric": "loose"}"#),
            Err(crate::result::Error::Config(_))
        ));
    }

    #[test]
    fn sanitize_strips_null_tokens() {
        let opts = ParseOptions::default();
        assert_eq!(opts.sanitize("POINT Z(1 2 1.#QNAN)"), "POINT Z(1 2 )");
    }
}
