//! Fixed-width column slicing
//!
//! Every data file in the RIPL-3 library is written with fortran formats, so
//! meaning is given by column position rather than delimiters.

use nom::error::{Error as NomError, ErrorKind};
use nom::IResult;

use crate::error::{Error, Result};

/// Split a fixed-width line into columns of the given widths
///
/// Columns are consumed left-to-right from the first character. Anything
/// beyond the total width is discarded, but a line that ends before the last
/// column is complete is an error rather than being padded.
///
/// ```rust
/// # use ripl_support::slice_columns;
/// let columns = slice_columns(" 22Mg   22   12", &[5, 5, 5]).unwrap();
/// assert_eq!(columns, vec![" 22Mg", "   22", "   12"]);
///
/// // too short for the last column
/// assert!(slice_columns(" 22Mg   22", &[5, 5, 5]).is_err());
/// ```
pub fn slice_columns<'a>(line: &'a str, widths: &[usize]) -> Result<Vec<&'a str>> {
    let mut columns = Vec::with_capacity(widths.len());
    let mut rest = line;
    let mut consumed = 0;

    for &width in widths {
        let (tail, column) = split_index(rest, width).map_err(|_| Error::ShortLine {
            column: consumed + 1,
            expected: width,
            found: rest.len(),
        })?;
        columns.push(column);
        consumed += width;
        rest = tail;
    }

    Ok(columns)
}

/// Split a string slice at a specific index
///
/// Fails if the slice is not long enough, or if `n` is not on a character
/// boundary.
fn split_index(i: &str, n: usize) -> IResult<&str, &str> {
    match (i.get(..n), i.get(n..)) {
        (Some(head), Some(tail)) => Ok((tail, head)),
        _ => Err(nom::Err::Error(NomError::new(i, ErrorKind::Eof))),
    }
}
