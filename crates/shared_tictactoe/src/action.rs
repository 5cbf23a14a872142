//! Raw move requests and coordinate parsing.

use crate::error::{Axis, GameError, MalformedKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How non-numeric coordinate text is treated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CoordinateParsing {
    /// Anything that is not an integer is rejected as malformed.
    #[default]
    Strict,
    /// Scanf-style: skip leading whitespace, read an optional sign and the
    /// longest digit prefix, and fall back to `0` when there are no digits.
    Lenient,
}

impl CoordinateParsing {
    /// Parses one coordinate. Empty input is rejected under both policies.
    #[instrument]
    pub fn parse(self, axis: Axis, raw: Option<&str>) -> Result<i64, GameError> {
        let raw = match raw {
            Some(text) if !text.is_empty() => text,
            _ => return Err(GameError::MalformedRequest(MalformedKind::Missing(axis))),
        };

        match self {
            CoordinateParsing::Strict => raw.trim().parse::<i64>().map_err(|e| {
                debug!(%axis, raw, error = %e, "Rejecting non-numeric coordinate");
                GameError::MalformedRequest(MalformedKind::NotNumeric(axis))
            }),
            CoordinateParsing::Lenient => Ok(scan_leading_int(raw)),
        }
    }
}

/// Reads a leading integer the way `%d` does, defaulting to zero.
///
/// Leading whitespace is skipped up to a newline, which ends the scan. A token
/// with no digits or one that does not fit in an `i64` yields zero.
fn scan_leading_int(raw: &str) -> i64 {
    let text = raw.trim_start_matches(|c: char| c.is_whitespace() && c != '\n');
    let sign_len = usize::from(text.starts_with(['-', '+']));
    let digit_len = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digit_len == 0 {
        return 0;
    }
    text[..sign_len + digit_len].parse().unwrap_or(0)
}

/// A move as it arrives from a client: two optional, unparsed coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Row text, `0` is the top row.
    pub row: Option<String>,
    /// Column text, `0` is the left column.
    pub col: Option<String>,
}

impl MoveRequest {
    /// Creates a request from raw coordinate text.
    pub fn new(row: impl Into<String>, col: impl Into<String>) -> Self {
        Self {
            row: Some(row.into()),
            col: Some(col.into()),
        }
    }

    /// Resolves both coordinates under the given policy.
    ///
    /// Both must be present before either is parsed, so a missing `col`
    /// is reported even when `row` is unreadable.
    #[instrument(skip(self), fields(row = ?self.row, col = ?self.col))]
    pub fn coordinates(&self, parsing: CoordinateParsing) -> Result<(i64, i64), GameError> {
        let row = self.row.as_deref().filter(|s| !s.is_empty());
        let col = self.col.as_deref().filter(|s| !s.is_empty());
        if row.is_none() {
            return Err(GameError::MalformedRequest(MalformedKind::Missing(Axis::Row)));
        }
        if col.is_none() {
            return Err(GameError::MalformedRequest(MalformedKind::Missing(Axis::Col)));
        }
        Ok((parsing.parse(Axis::Row, row)?, parsing.parse(Axis::Col, col)?))
    }
}

/// Collects `key=value` query pairs. The first `row` and first `col` win;
/// repeats and unknown keys are ignored.
impl FromIterator<(String, String)> for MoveRequest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut request = MoveRequest::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "row" => &mut request.row,
                "col" => &mut request.col,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_accepts_integers() {
        let req = MoveRequest::new("1", "2");
        assert_eq!(req.coordinates(CoordinateParsing::Strict), Ok((1, 2)));
        let req = MoveRequest::new("-1", "5");
        assert_eq!(req.coordinates(CoordinateParsing::Strict), Ok((-1, 5)));
    }

    #[test]
    fn test_strict_rejects_text() {
        let req = MoveRequest::new("abc", "0");
        assert_eq!(
            req.coordinates(CoordinateParsing::Strict),
            Err(GameError::MalformedRequest(MalformedKind::NotNumeric(Axis::Row)))
        );
        let req = MoveRequest::new("1", "2x");
        assert_eq!(
            req.coordinates(CoordinateParsing::Strict),
            Err(GameError::MalformedRequest(MalformedKind::NotNumeric(Axis::Col)))
        );
    }

    #[test]
    fn test_lenient_defaults_to_zero() {
        let req = MoveRequest::new("abc", "zz");
        assert_eq!(req.coordinates(CoordinateParsing::Lenient), Ok((0, 0)));
    }

    #[test]
    fn test_lenient_reads_digit_prefix() {
        let req = MoveRequest::new("2x", "  1");
        assert_eq!(req.coordinates(CoordinateParsing::Lenient), Ok((2, 1)));
        let req = MoveRequest::new("-3", "+1");
        assert_eq!(req.coordinates(CoordinateParsing::Lenient), Ok((-3, 1)));
    }

    #[test]
    fn test_lenient_overflow_defaults_to_zero() {
        let req = MoveRequest::new("99999999999999999999", "1");
        assert_eq!(req.coordinates(CoordinateParsing::Lenient), Ok((0, 1)));
        let req = MoveRequest::new("2", "-99999999999999999999");
        assert_eq!(req.coordinates(CoordinateParsing::Lenient), Ok((2, 0)));
    }

    #[test]
    fn test_lenient_stops_at_newline() {
        let req = MoveRequest::new("\n1", "\r\n2");
        assert_eq!(req.coordinates(CoordinateParsing::Lenient), Ok((0, 0)));
        let req = MoveRequest::new("\t2", "-");
        assert_eq!(req.coordinates(CoordinateParsing::Lenient), Ok((2, 0)));
    }

    #[test]
    fn test_missing_or_empty_rejected_in_both_modes() {
        for parsing in [CoordinateParsing::Strict, CoordinateParsing::Lenient] {
            let req = MoveRequest {
                row: None,
                col: Some("1".into()),
            };
            assert_eq!(
                req.coordinates(parsing),
                Err(GameError::MalformedRequest(MalformedKind::Missing(Axis::Row)))
            );
            let req = MoveRequest::new("1", "");
            assert_eq!(
                req.coordinates(parsing),
                Err(GameError::MalformedRequest(MalformedKind::Missing(Axis::Col)))
            );
        }
    }

    #[test]
    fn test_first_query_value_wins() {
        let pairs = [("row", "1"), ("row", "2"), ("other", "x"), ("col", "0"), ("col", "")];
        let req: MoveRequest = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(req, MoveRequest::new("1", "0"));

        let req: MoveRequest = std::iter::once(("col".to_string(), "2".to_string())).collect();
        assert_eq!(req.row, None);
        assert_eq!(req.col.as_deref(), Some("2"));
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(CoordinateParsing::Lenient.to_string(), "lenient");
        assert_eq!("strict".parse::<CoordinateParsing>().ok(), Some(CoordinateParsing::Strict));
    }
}
