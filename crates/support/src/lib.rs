//! Common utility for extended `std` types and fixed-width text
//!
//! These are left public for convenience.
//!
//! For example, capitalising a string, slicing fortran-style columns, or
//! using consistent formatting for scientific numbers are useful everywhere.

// standard library
use std::fmt::{Display, LowerExp};

// Alias for the format! macro
pub use std::format as f;

// Modules
mod columns;
mod error;

pub mod element;
pub mod number;

// Flatten
pub use columns::slice_columns;
pub use error::{Error, Result};

/// Extends primitives with more specific formatting options
pub trait FloatExt {
    /// Better scientific number formatting
    ///
    /// The default is not very consistent for scientific in particular, so this
    /// allows easy definition.
    ///
    /// ```rust
    /// # use ripl_support::FloatExt;
    /// let number = -1.0;
    /// assert_eq!(number.sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!((1.0).sci(5, 2), "1.00000e+00".to_string());
    /// assert_eq!(f64::INFINITY.sci(4, 2), "inf".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: LowerExp> FloatExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut num = f!("{:.precision$e}", &self, precision = precision);

        // inf and NaN have no exponent to fix up, and C writes them lowercase
        let Some(split) = num.find('e') else {
            return num.to_lowercase();
        };

        let exp = num.split_off(split);
        // Make sure the exponent is signed
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        // Pad the exponent with zeros if needed and put it back on the number
        num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
        num
    }
}

/// Fixed ten character scientific notation with four decimal places
///
/// This is the representation used for every energy and probability written
/// to the JSON level files, equivalent to a C-style `%10.4e`.
///
/// ```rust
/// # use ripl_support::fixed_sci;
/// assert_eq!(fixed_sci(19.382), "1.9382e+01");
/// assert_eq!(fixed_sci(-0.5), "-5.0000e-01");
/// assert_eq!(fixed_sci(2.1e12), "2.1000e+12");
/// assert_eq!(fixed_sci(f64::INFINITY), "       inf");
/// assert_eq!(fixed_sci(f64::NAN), "       nan");
/// ```
pub fn fixed_sci(value: f64) -> String {
    f!("{:>10}", value.sci(4, 2))
}

/// Display implementation for optional values
pub trait OptionExt {
    /// Display the inner value, or "none" if missing
    ///
    /// ```rust
    /// # use ripl_support::OptionExt;
    /// assert_eq!(Some(2.5).display(), "2.5");
    /// assert_eq!(None::<f64>.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }
}

/// Extends string types with simple conveniences
pub trait StringExt {
    /// Capitalise the first character
    ///
    /// ```rust
    /// # use ripl_support::StringExt;
    /// assert_eq!("mg".capitalise(), "Mg");
    /// assert_eq!("".capitalise(), "");
    /// ```
    fn capitalise(&self) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn capitalise(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            Some(f) => f.to_uppercase().collect::<String>() + &c.as_str().to_lowercase(),
            None => String::new(),
        }
    }
}
