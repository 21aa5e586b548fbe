//! Runtime configuration of the command line tool
//!
//! There are no configuration files. Every path has a default relative to the
//! working directory and can be overridden on the command line.

// standard library
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;

// ripl crates
use ripl::levels::{GammaPolicy, ReaderOptions};
use ripl::support::element::{charge, SYMBOLS};
use ripl::support::{f, StringExt};

/// Directory holding the `zNNN.dat` level files
pub const DEFAULT_LEVELS_DIR: &str = "data/levels";

/// Root of the JSON level tree
pub const DEFAULT_OUTPUT_DIR: &str = "levels_json";

/// Mass table read by the `mass` command
pub const DEFAULT_MASS_TABLE: &str = "data/mass-frdm95.dat";

/// Every atomic number with a level file
pub const DEFAULT_CHARGES: &str = "1..=118";

/// Everything the commands need, resolved from arguments and defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory of per-charge level files
    pub levels_dir: PathBuf,
    /// Root of the JSON level tree
    pub output_dir: PathBuf,
    /// Mass table file
    pub mass_table: PathBuf,
    /// Atomic numbers to convert
    pub charges: ChargeRange,
    /// Options passed through to the level reader
    pub reader_options: ReaderOptions,
    /// Disable progress bars
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            levels_dir: PathBuf::from(DEFAULT_LEVELS_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            mass_table: PathBuf::from(DEFAULT_MASS_TABLE),
            charges: ChargeRange::all(),
            reader_options: ReaderOptions::default(),
            quiet: false,
        }
    }
}

impl Config {
    /// Keep only the last gamma line of each level
    pub fn retain_last_gamma(mut self, retain: bool) -> Self {
        if retain {
            self.reader_options = ReaderOptions::with_gamma_policy(GammaPolicy::RetainLast);
        }
        self
    }
}

/// Atomic number given either as a number or an element symbol
///
/// Symbols are case-insensitive, so `12`, `Mg` and `MG` are all magnesium.
pub fn parse_charge(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let z = match s.parse::<u32>() {
        Ok(z) => z,
        Err(_) => charge(s).ok_or_else(|| f!("{:?} is not an element", s.capitalise()))?,
    };

    let max = SYMBOLS.len() as u32;
    if z == 0 || z > max {
        return Err(f!("atomic numbers must be within 1..={max}"));
    }
    Ok(z)
}

/// Inclusive range of atomic numbers, e.g. `1..=118`, `H..=Mg` or just `12`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRange {
    first: u32,
    last: u32,
}

impl ChargeRange {
    /// Every element with a known symbol
    pub fn all() -> Self {
        Self {
            first: 1,
            last: SYMBOLS.len() as u32,
        }
    }

    /// Atomic numbers in ascending order
    pub fn iter(&self) -> RangeInclusive<u32> {
        self.first..=self.last
    }

    /// Number of atomic numbers covered
    pub fn len(&self) -> usize {
        (self.last - self.first + 1) as usize
    }
}

impl FromStr for ChargeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, last) = match s.split_once("..=") {
            Some((first, last)) => (parse_charge(first)?, parse_charge(last)?),
            None => {
                let charge = parse_charge(s)?;
                (charge, charge)
            }
        };

        if first > last {
            return Err(f!("{first} is greater than {last}"));
        }

        Ok(Self { first, last })
    }
}

impl fmt::Display for ChargeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.first, self.last)
    }
}
