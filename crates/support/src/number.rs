//! Numeric field coercion with explicit blank-handling rules
//!
//! Every fixed-width field is either *mandatory*, where a blank is an error,
//! or *optional*, where a blank is an absent value. There is deliberately no
//! silent blank-to-zero conversion here; callers that want a default must ask
//! for it with [optional()] and `unwrap_or`.

// nom parser combinators
use nom::character::complete;
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::IResult;

use crate::error::{Error, Result};

/// Any fortran style real number, e.g. `19.382000`, `3.86E+00`, `2.10E12`
pub fn float(i: &str) -> IResult<&str, f64> {
    double(i)
}

/// Signed integer value, e.g. `-1`, `+1`, `12`
pub fn int(i: &str) -> IResult<&str, i32> {
    complete::i32(i)
}

/// Unsigned integer value
pub fn uint(i: &str) -> IResult<&str, u32> {
    complete::u32(i)
}

/// Parse a field that must contain a value
///
/// Surrounding whitespace is ignored, but the remaining text must be consumed
/// entirely by the parser.
///
/// ```rust
/// # use ripl_support::number::{mandatory, float, uint};
/// # use ripl_support::Error;
/// assert_eq!(mandatory("   19.382000", float), Ok(19.382));
/// assert_eq!(mandatory("   22", uint), Ok(22));
/// assert_eq!(mandatory("     ", uint), Err(Error::BlankField));
/// assert!(mandatory("  2.5x", float).is_err());
/// ```
pub fn mandatory<T>(field: &str, parser: fn(&str) -> IResult<&str, T>) -> Result<T> {
    let value = field.trim();
    if value.is_empty() {
        return Err(Error::BlankField);
    }

    all_consuming(parser)(value)
        .map(|(_, v)| v)
        .map_err(|_| Error::InvalidNumber {
            value: value.to_string(),
        })
}

/// Parse a field where a blank means the value is absent
///
/// ```rust
/// # use ripl_support::number::{optional, float};
/// assert_eq!(optional("  3.86E+00", float), Ok(Some(3.86)));
/// assert_eq!(optional("          ", float), Ok(None));
/// assert!(optional("  ?", float).is_err());
/// ```
pub fn optional<T>(field: &str, parser: fn(&str) -> IResult<&str, T>) -> Result<Option<T>> {
    if field.trim().is_empty() {
        Ok(None)
    } else {
        mandatory(field, parser).map(Some)
    }
}
