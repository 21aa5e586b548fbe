//! Readers for the fixed-width mass tables
//!
//! Both layouts are read line by line after a fixed number of header lines.
//! Trailing columns are often left off when they would be blank, so short
//! lines are padded out to the full record width before slicing.

// standard library
use std::fs;
use std::path::{Path, PathBuf};

// external crates
use log::{debug, info, trace, warn};

// internal modules
use crate::error::{Error, Result};
use crate::table::{MassFormat, MassTable};
use ripl_support::f;
use ripl_support::number::{float, mandatory, optional, uint};
use ripl_support::slice_columns;

/// Z, A, symbol, flag, Mexp, dMexp, Mth
const FRDM_COLUMNS: [usize; 7] = [4, 4, 3, 2, 10, 10, 10];

/// cc, N-Z, N, Z, A, element, origin, mass excess
const AME_COLUMNS: [usize; 8] = [1, 3, 5, 5, 5, 4, 5, 14];

/// Read a mass table, choosing the layout from the file name
///
/// ```rust, no_run
/// # use ripl_mass::read_mass_table;
/// let table = read_mass_table("data/mass-frdm95.dat").unwrap();
/// println!("{table}");
/// ```
pub fn read_mass_table<P: AsRef<Path>>(path: P) -> Result<MassTable> {
    let path = path.as_ref();
    let format = MassFormat::from_path(path).ok_or_else(|| Error::UnknownFormat {
        path: PathBuf::from(path),
    })?;
    read_with_format(path, format)
}

/// Read an FRDM-95 or HFB-14 table
///
/// The experimental mass excess is used where there is one, then the
/// calculated value, then `0.0`.
pub fn read_frdm<P: AsRef<Path>>(path: P) -> Result<MassTable> {
    read_with_format(path.as_ref(), MassFormat::Frdm95)
}

/// Read an AME2020 table, converting mass excess from keV to MeV
pub fn read_ame2020<P: AsRef<Path>>(path: P) -> Result<MassTable> {
    read_with_format(path.as_ref(), MassFormat::Ame2020)
}

/// Read a table with an explicit layout
pub fn read_with_format(path: &Path, format: MassFormat) -> Result<MassTable> {
    if !path.is_file() {
        return Err(Error::MissingInputFile {
            path: PathBuf::from(path),
        });
    }

    info!("Reading {format} masses from {}", path.display());
    let text = fs::read_to_string(path)?;
    let table = parse_mass_table(&text, format)?;

    if table.is_empty() {
        return Err(Error::EmptyTable {
            path: PathBuf::from(path),
        });
    }

    Ok(table)
}

/// Parse the full text of a mass table
///
/// Blank lines after the header are skipped. A table with no entries is
/// returned as-is, the emptiness check is left to the file readers.
pub fn parse_mass_table(text: &str, format: MassFormat) -> Result<MassTable> {
    let mut table = MassTable::default();

    for (index, line) in text.lines().enumerate().skip(format.header_lines()) {
        if line.trim().is_empty() {
            continue;
        }

        let number = index + 1;
        let (z, a, mass) = match format {
            MassFormat::Frdm95 | MassFormat::Hfb14 => decode_frdm(line, number)?,
            MassFormat::Ame2020 => decode_ame(line, number)?,
        };
        trace!("Z={z:<3} A={a:<3} {mass} MeV");

        if table.insert(z, a, mass).is_some() {
            warn!("Duplicate mass entry for Z={z} A={a} on line {number} replaced");
        }
    }

    debug!("{} mass entries", table.len());
    Ok(table)
}

fn decode_frdm(line: &str, number: usize) -> Result<(u32, u32, f64)> {
    let padded = pad(line, &FRDM_COLUMNS);
    let columns = slice_columns(&padded, &FRDM_COLUMNS).map_err(malformed(number, "line"))?;

    let z = mandatory(columns[0], uint).map_err(malformed(number, "Z"))?;
    let a = mandatory(columns[1], uint).map_err(malformed(number, "A"))?;
    let mexp = optional(columns[4], float).map_err(malformed(number, "Mexp"))?;
    let mth = optional(columns[6], float).map_err(malformed(number, "Mth"))?;

    Ok((z, a, mexp.or(mth).unwrap_or(0.0)))
}

fn decode_ame(line: &str, number: usize) -> Result<(u32, u32, f64)> {
    let padded = pad(line, &AME_COLUMNS);
    let columns = slice_columns(&padded, &AME_COLUMNS).map_err(malformed(number, "line"))?;

    let z = mandatory(columns[3], uint).map_err(malformed(number, "Z"))?;
    let a = mandatory(columns[4], uint).map_err(malformed(number, "A"))?;

    // '#' marks an estimated value, sometimes in place of the decimal point
    let excess = columns[7].replace('#', "");
    let excess = optional(&excess, float).map_err(malformed(number, "mass excess"))?;

    Ok((z, a, excess.map_or(0.0, |kev| kev / 1000.0)))
}

/// Right-pad a line with spaces to the total width of the columns
fn pad(line: &str, widths: &[usize]) -> String {
    let width: usize = widths.iter().sum();
    f!("{line:<width$}")
}

fn malformed(line: usize, field: &'static str) -> impl FnOnce(ripl_support::Error) -> Error {
    move |reason| Error::MalformedRecord {
        line,
        field,
        reason,
    }
}
