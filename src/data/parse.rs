//! Parsing of user-entered numeric input
//!
//! Calibration values arrive as free text: either a comma-separated list
//! ("0.1, 0.2, 0.3") or a single scalar for the inverse lookup. Tokens are
//! trimmed before conversion; anything that does not parse as a float is an
//! error, including the empty tokens produced by consecutive or trailing
//! commas. Nothing is ever skipped silently.

use thiserror::Error;

/// Errors produced while parsing user-entered numeric text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token could not be converted to a floating-point number
    #[error("invalid numeric value: {token:?}")]
    InvalidToken {
        /// The offending token, already trimmed
        token: String,
    },

    /// The input contained no tokens at all
    #[error("input is empty")]
    Empty,
}

/// Parse a comma-separated list of floats.
///
/// A single value with no comma yields a one-element vector. Whitespace
/// around each token is ignored.
///
/// # Examples
///
/// ```rust
/// use calcurve::data::parse_series;
///
/// let values = parse_series("0.1, 0.2, 0.3").unwrap();
/// assert_eq!(values, vec![0.1, 0.2, 0.3]);
///
/// assert!(parse_series("0.1, , 0.3").is_err());
/// ```
pub fn parse_series(text: &str) -> Result<Vec<f64>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    text.split(',').map(parse_token).collect()
}

/// Parse a single float, trimming surrounding whitespace.
///
/// Used for the standalone absorbance field of the inverse lookup.
pub fn parse_scalar(text: &str) -> Result<f64, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    parse_token(text)
}

fn parse_token(token: &str) -> Result<f64, ParseError> {
    let token = token.trim();
    token.parse::<f64>().map_err(|_| ParseError::InvalidToken {
        token: token.to_string(),
    })
}
