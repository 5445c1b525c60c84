use crate::config::{NumericPolicy, ParseOptions};
use crate::result::{Error, Result, Warning};
use crate::types::{Coordinate, Dimension};

/// Parses one tuple such as `30 10 5`.
///
/// Ordinates are taken by position: X, Y, then Z and/or M as `dimension` says.
/// A tuple that is too short is skipped with a warning rather than read past
/// its end, so `Ok(None)` means "nothing to append". Extra ordinates are ignored.
pub fn parse_coordinate(
    tuple: &str,
    dimension: Dimension,
    options: &ParseOptions,
    warnings: &mut Vec<Warning>,
) -> Result<Option<Coordinate>> {
    let tokens: Vec<&str> = tuple.split_whitespace().collect();
    if tokens.is_empty() {
        tracing::warn!("skipping empty tuple");
        warnings.push(Warning::EmptyTuple);
        return Ok(None);
    }
    if tokens.len() < dimension.size() {
        tracing::warn!(
            tuple = tuple.trim(),
            expected = dimension.size(),
            found = tokens.len(),
            "skipping tuple with too few ordinates"
        );
        warnings.push(Warning::CoordinateUnderflow {
            tuple: tuple.trim().to_owned(),
            expected: dimension.size(),
            found: tokens.len(),
        });
        return Ok(None);
    }

    let mut values = [0.0f64; 4];
    for (value, token) in values.iter_mut().zip(&tokens[..dimension.size()]) {
        *value = parse_ordinate(token, options, warnings)?;
    }

    let [x, y, third, fourth] = values;
    let coord = match dimension {
        Dimension::XY => Coordinate::xy(x, y),
        Dimension::XYZ => Coordinate {
            x,
            y,
            z: third,
            m: 0.0,
        },
        Dimension::XYM => Coordinate {
            x,
            y,
            z: 0.0,
            m: third,
        },
        Dimension::XYZM => Coordinate {
            x,
            y,
            z: third,
            m: fourth,
        },
    };
    tracing::trace!(?coord, "parsed tuple");
    Ok(Some(coord))
}

/// Parses a flat comma separated tuple list, keeping the tuples that parsed, in order.
pub fn parse_tuple_list(
    list: &str,
    dimension: Dimension,
    options: &ParseOptions,
    warnings: &mut Vec<Warning>,
) -> Result<Vec<Coordinate>> {
    let mut coords = Vec::new();
    for tuple in list.split(',') {
        if let Some(coord) = parse_coordinate(tuple, dimension, options, warnings)? {
            coords.push(coord);
        }
    }
    Ok(coords)
}

fn parse_ordinate(
    token: &str,
    options: &ParseOptions,
    warnings: &mut Vec<Warning>,
) -> Result<f64> {
    // `nan` and `inf` parse as f64 but have no JSON number form
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => match options.numeric {
            NumericPolicy::Strict => Err(Error::InvalidNumber(token.to_owned())),
            NumericPolicy::Lenient => {
                tracing::warn!(token, "ordinate is not a number, using 0.0");
                warnings.push(Warning::NumericParseFailure {
                    token: token.to_owned(),
                });
                Ok(0.0)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tuple: &str, dim: Dimension) -> (Option<Coordinate>, Vec<Warning>) {
        let mut warnings = Vec::new();
        let c = parse_coordinate(tuple, dim, &ParseOptions::default(), &mut warnings).unwrap();
        (c, warnings)
    }

    #[test]
    fn positional_assignment() {
        let (c, w) = parse("30 10", Dimension::XY);
        assert_eq!(c, Some(Coordinate::xy(30.0, 10.0)));
        assert!(w.is_empty());

        let (c, _) = parse("30 10 5", Dimension::XYZ);
        assert_eq!(
            c,
            Some(Coordinate {
                x: 30.0,
                y: 10.0,
                z: 5.0,
                m: 0.0
            })
        );

        let (c, _) = parse("30 10 5", Dimension::XYM);
        assert_eq!(
            c,
            Some(Coordinate {
                x: 30.0,
                y: 10.0,
                z: 0.0,
                m: 5.0
            })
        );

        let (c, _) = parse(" 30  10 5 7 ", Dimension::XYZM);
        assert_eq!(
            c,
            Some(Coordinate {
                x: 30.0,
                y: 10.0,
                z: 5.0,
                m: 7.0
            })
        );
    }

    #[test]
    fn extra_ordinates_are_ignored() {
        let (c, w) = parse("1 2 3", Dimension::XY);
        assert_eq!(c, Some(Coordinate::xy(1.0, 2.0)));
        assert!(w.is_empty());
    }

    #[test]
    fn short_tuple_is_skipped() {
        let (c, w) = parse("30 10", Dimension::XYZ);
        assert_eq!(c, None);
        assert_eq!(
            w,
            vec![Warning::CoordinateUnderflow {
                tuple: "30 10".to_owned(),
                expected: 3,
                found: 2
            }]
        );
    }

    #[test]
    fn empty_tuple_is_skipped() {
        let (c, w) = parse("   ", Dimension::XY);
        assert_eq!(c, None);
        assert_eq!(w, vec![Warning::EmptyTuple]);
    }

    #[test]
    fn bad_token_reads_as_zero() {
        let (c, w) = parse("abc 10", Dimension::XY);
        assert_eq!(c, Some(Coordinate::xy(0.0, 10.0)));
        assert_eq!(
            w,
            vec![Warning::NumericParseFailure {
                token: "abc".to_owned()
            }]
        );
    }

    #[test]
    fn bad_token_fails_when_strict() {
        let mut warnings = Vec::new();
        let res = parse_coordinate("abc 10", Dimension::XY, &ParseOptions::strict(), &mut warnings);
        assert!(matches!(res, Err(Error::InvalidNumber(t)) if t == "abc"));
    }

    #[test]
    fn non_finite_token_reads_as_zero() {
        let (c, w) = parse("nan -inf", Dimension::XY);
        assert_eq!(c, Some(Coordinate::xy(0.0, 0.0)));
        assert_eq!(w.len(), 2);
        assert!(matches!(&w[1], Warning::NumericParseFailure { token } if token == "-inf"));

        let mut warnings = Vec::new();
        let res = parse_coordinate("1 NaN", Dimension::XY, &ParseOptions::strict(), &mut warnings);
        assert!(matches!(res, Err(Error::InvalidNumber(t)) if t == "NaN"));
    }

    #[test]
    fn list_keeps_order_and_drops_bad_tuples() {
        let mut warnings = Vec::new();
        let coords = parse_tuple_list(
            "30 10 5, 30 10, 40 40 5",
            Dimension::XYZ,
            &ParseOptions::default(),
            &mut warnings,
        )
        .unwrap();
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0].x, 30.0);
        assert_eq!(coords[1].x, 40.0);
        assert_eq!(warnings.len(), 1);
    }
}
