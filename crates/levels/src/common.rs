//! Common data structures

// standard library
use std::fmt;

// external crates
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ripl modules
use ripl_support::fixed_sci;

/// Type of record line in a RIPL-3 level file
///
/// Every nuclide block is an identification record followed by level records,
/// each of which may be followed by gamma records.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RecordKind {
    /// Nuclide header with counts and separation energies
    Identification,
    /// Discrete level
    Level,
    /// Gamma transition de-exciting the preceding level
    Gamma,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            RecordKind::Identification => "identification",
            RecordKind::Level => "level",
            RecordKind::Gamma => "gamma",
        };
        write!(f, "{name}")
    }
}

/// Real number held at the precision it is persisted with
///
/// Energies and probabilities are written to the level documents as fixed
/// `%10.4e` strings, e.g. `"1.2463e+00"`. The value is rounded to that
/// representation on construction so that anything built from a level file
/// compares equal to the same thing read back from JSON.
///
/// ```rust
/// # use ripl_levels::SciFloat;
/// let energy = SciFloat::new(1.246349);
/// assert_eq!(energy.value(), 1.2463);
/// assert_eq!(energy.to_string(), "1.2463e+00");
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct SciFloat(f64);

impl SciFloat {
    /// Round a value to the persisted precision
    pub fn new(value: f64) -> Self {
        let rounded = fixed_sci(value).trim().parse().unwrap_or(value);
        Self(rounded)
    }

    /// The rounded value
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for SciFloat {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for SciFloat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", fixed_sci(self.0))
    }
}

impl Serialize for SciFloat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SciFloat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SciFloatVisitor)
    }
}

/// Accepts the usual string form, but also plain JSON numbers
struct SciFloatVisitor;

impl<'de> Visitor<'de> for SciFloatVisitor {
    type Value = SciFloat;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a string in scientific notation")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<SciFloat, E> {
        v.trim()
            .parse::<f64>()
            .map(SciFloat::new)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<SciFloat, E> {
        Ok(SciFloat::new(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<SciFloat, E> {
        Ok(SciFloat::new(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<SciFloat, E> {
        Ok(SciFloat::new(v as f64))
    }
}
