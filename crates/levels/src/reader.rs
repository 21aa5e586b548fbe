//! Reconstruct nuclide level schemes from a RIPL-3 level file
//!
//! There are no delimiters between blocks. Where one nuclide ends and the
//! next begins is computed entirely from the counts declared in each
//! identification record, so the file is held as an indexable list of lines
//! and walked with two cursors:
//!
//! - the outer cursor `i` sits on an identification record and always moves
//!   on by `1 + Nol + Nog`, whatever the inner walk consumed
//! - the inner cursor starts on the first level line of the block and moves
//!   on by `1 + Ng` for every level, where `Ng` is the gamma count of that
//!   level, until it passes the end of the declared block
//!
//! A malformed record stops the whole file. Positions are computed rather
//! than delimited, so nothing after a corrupt block can be trusted.

// standard library
use std::fs;
use std::path::{Path, PathBuf};

// external crates
use indexmap::IndexMap;
use log::{debug, info, trace, warn};

// internal modules
use crate::common::RecordKind;
use crate::error::{Error, Malformed, Result};
use crate::parsers::{decode_gamma, decode_identification, decode_level};
use crate::scheme::{GammaTransition, Level, NuclideLevelScheme};
use ripl_support::f;

/// Level schemes keyed by nuclide symbol, in file order
pub type LevelMap = IndexMap<String, NuclideLevelScheme>;

/// Which gamma lines of a level are kept
///
/// Every gamma line is always decoded, so a malformed line is an error under
/// either policy.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum GammaPolicy {
    /// Keep every transition of a level
    #[default]
    RetainAll,
    /// Keep only the transition on the last gamma line of a level
    ///
    /// This reproduces the JSON tree generated by the original converter,
    /// where only one transition survived per level.
    RetainLast,
}

/// Options for reading level files
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Which gamma transitions are kept
    pub gamma_policy: GammaPolicy,
}

impl ReaderOptions {
    /// Options with the given gamma policy
    pub fn with_gamma_policy(gamma_policy: GammaPolicy) -> Self {
        Self { gamma_policy }
    }
}

/// File name of the level file for an atomic number, e.g. `z012.dat`
///
/// ```rust
/// # use ripl_levels::charge_file_name;
/// assert_eq!(charge_file_name(12), "z012.dat");
/// assert_eq!(charge_file_name(118), "z118.dat");
/// ```
pub fn charge_file_name(charge: u32) -> String {
    f!("z{charge:03}.dat")
}

/// Read the level file for an atomic number from a data directory
///
/// ```rust, no_run
/// # use ripl_levels::{read_charge, ReaderOptions};
/// // Read every nuclide in data/levels/z012.dat
/// let schemes = read_charge("data/levels", 12, ReaderOptions::default()).unwrap();
///
/// for (symbol, scheme) in &schemes {
///     println!("{symbol}: {} levels", scheme.levels.len());
/// }
/// ```
pub fn read_charge<P: AsRef<Path>>(dir: P, charge: u32, options: ReaderOptions) -> Result<LevelMap> {
    let path = dir.as_ref().join(charge_file_name(charge));
    read_levels_file(path, options)
}

/// Read every nuclide from a level file
pub fn read_levels_file<P: AsRef<Path>>(path: P, options: ReaderOptions) -> Result<LevelMap> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::MissingInputFile {
            path: PathBuf::from(path),
        });
    }

    info!("Reading levels from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_levels(&text, options)
}

/// Parse the full text of a level file
///
/// ```rust
/// # use ripl_levels::{parse_levels, ReaderOptions};
/// let text = [
///     "   1H    1    1    1    0    1    1    0.000000    0.000000",
///     "  1   0.000000   0.5  1             0        1/2+                0",
/// ]
/// .join("\n");
///
/// let schemes = parse_levels(&text, ReaderOptions::default()).unwrap();
/// assert_eq!(schemes["1H"].levels.len(), 1);
/// ```
pub fn parse_levels(text: &str, options: ReaderOptions) -> Result<LevelMap> {
    Reader::new(text, options).read()
}

/// Internal reader over the lines of one file
struct Reader<'a> {
    lines: Vec<&'a str>,
    options: ReaderOptions,
}

impl<'a> Reader<'a> {
    fn new(text: &'a str, options: ReaderOptions) -> Self {
        let mut lines: Vec<&str> = text.lines().collect();

        // trailing blank lines are not a nuclide block
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }

        Self { lines, options }
    }

    /// Walk every nuclide block until the cursor reaches the end of the file
    fn read(&self) -> Result<LevelMap> {
        let mut schemes = LevelMap::new();
        let mut i = 0;

        while i < self.lines.len() {
            let (scheme, next) = self.read_block(i)?;
            debug!(
                "{:<7} lines {}-{}, {} levels, {} transitions",
                scheme.symbol,
                i + 1,
                next,
                scheme.levels.len(),
                scheme.n_transitions()
            );

            if let Some(previous) = schemes.insert(scheme.symbol.clone(), scheme) {
                warn!("Duplicate block for {} replaced", previous.symbol);
            }
            i = next;
        }

        Ok(schemes)
    }

    /// Read one nuclide block starting at line index `i`
    ///
    /// Returns the scheme and the index of the next identification record.
    fn read_block(&self, i: usize) -> Result<(NuclideLevelScheme, usize)> {
        let header = self.decode(i, RecordKind::Identification, decode_identification)?;
        let end = i + header.n_levels as usize + header.n_gammas as usize;
        trace!("{} identification on line {}", header.symbol, i + 1);

        let mut scheme = NuclideLevelScheme::new(header);

        // nothing to walk when Nol + Nog is zero, as end == i
        let mut lev = i + 1;
        while lev <= end {
            let record = self.decode(lev, RecordKind::Level, decode_level)?;
            let n_gammas = record.n_gammas as usize;
            trace!("  level {} on line {}", record.number, lev + 1);

            let gammas = self.read_gammas(lev, n_gammas)?;
            scheme.levels.push(Level::new(record, gammas));

            lev += 1 + n_gammas;
        }

        if lev > end + 1 {
            warn!(
                "{} gamma lines run past the declared block end (line {})",
                scheme.symbol,
                end + 1
            );
        }

        Ok((scheme, end + 1))
    }

    /// Decode the `n` gamma lines following the level on line index `lev`
    fn read_gammas(&self, lev: usize, n: usize) -> Result<Vec<GammaTransition>> {
        let mut gammas = Vec::with_capacity(n);

        for gl in lev + 1..=lev + n {
            let record = self.decode(gl, RecordKind::Gamma, decode_gamma)?;
            trace!("    gamma to {} on line {}", record.final_state, gl + 1);
            gammas.push(GammaTransition::from(record));
        }

        if self.options.gamma_policy == GammaPolicy::RetainLast {
            gammas = gammas.pop().into_iter().collect();
        }

        Ok(gammas)
    }

    /// Decode the line at `index`, attaching the line number to any failure
    fn decode<T>(
        &self,
        index: usize,
        record: RecordKind,
        decoder: fn(&str) -> core::result::Result<T, Malformed>,
    ) -> Result<T> {
        let line = self
            .lines
            .get(index)
            .ok_or(Error::UnexpectedEndOfFile {
                record,
                line: index + 1,
            })?;

        decoder(line).map_err(|reason| Error::MalformedRecord {
            record,
            line: index + 1,
            reason,
        })
    }
}
