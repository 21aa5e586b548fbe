//! Decoders for the three record types of a RIPL-3 level file
//!
//! Each decoder takes a single raw line and returns a typed record, or the
//! reason it could not be decoded. Line numbers are added by the reader.
//!
//! The column layouts follow the fortran formats documented with the library.
//!
//! | Record         | Format                                                 |
//! | -------------- | ------------------------------------------------------ |
//! | identification | `(a5,6i5,2f12.6)`                                      |
//! | level          | `(i3,1x,f10.6,1x,f5.1,i3,1x,e10.3,i3,1x,a1,1x,a4,1x,a18,i3,...)` |
//! | gamma          | `(39x,i4,1x,f10.4,3(1x,e10.3))`                        |

// ripl modules
use ripl_support::number::{self, float, int, uint};
use ripl_support::slice_columns;

// nom result type used by the field parsers
use nom::IResult;

use crate::error::Malformed;

/// Symbol, A, Z, Nol, Nog, Nmax, Nc, Sn, Sp
const IDENTIFICATION_COLUMNS: [usize; 9] = [5, 5, 5, 5, 5, 5, 5, 12, 12];

/// Nl, Elv, s, p, T1/2, Ng, J + unc flags, spins, nd
const LEVEL_COLUMNS: [usize; 9] = [3, 11, 6, 3, 11, 3, 8, 18, 3];

/// Skipped, Nf, Eg, Pg, Pe, ICC
const GAMMA_COLUMNS: [usize; 6] = [39, 4, 11, 11, 11, 11];

/// Header line of a nuclide block
#[derive(Debug, Clone, PartialEq)]
pub struct IdentificationRecord {
    /// Nuclide symbol, e.g. "22Mg"
    pub symbol: String,
    /// Mass number
    pub mass: u32,
    /// Atomic number
    pub charge: u32,
    /// Number of levels in the decay scheme
    pub n_levels: u32,
    /// Number of gamma rays in the decay scheme
    pub n_gammas: u32,
    /// Level up to which the scheme is complete
    pub max_complete_level: u32,
    /// Level up to which spins and parities are unique
    pub unique_spin_level: u32,
    /// Neutron separation energy (MeV)
    pub sn: f64,
    /// Proton separation energy (MeV)
    pub sp: f64,
}

/// A discrete level line
#[derive(Debug, Clone, PartialEq)]
pub struct LevelRecord {
    /// Sequential number of the level
    pub number: u32,
    /// Level energy (MeV)
    pub energy: f64,
    /// Level spin
    pub spin: f64,
    /// Level parity
    pub parity: i32,
    /// Half-life (s), if known
    pub half_life: Option<f64>,
    /// Number of gamma rays de-exciting the level
    pub n_gammas: u32,
    /// Spin estimation and uncertain energy flags, as written
    pub flags: String,
    /// Original ENSDF spin text
    pub spin_notation: String,
    /// Number of decay modes, if given
    pub n_decay_modes: Option<u32>,
}

/// A gamma transition line
#[derive(Debug, Clone, PartialEq)]
pub struct GammaRecord {
    /// Sequential number of the final state
    pub final_state: u32,
    /// Gamma-ray energy (MeV)
    pub energy: f64,
    /// Probability of photon emission
    pub probability_gamma: f64,
    /// Probability of any electromagnetic transition
    pub probability_electromagnetic: f64,
    /// Internal conversion coefficient
    pub internal_conversion: f64,
}

/// Decode an identification record
///
/// Every numeric field is mandatory.
///
/// ```rust
/// # use ripl_levels::decode_identification;
/// let line = " 22Mg   22   12   17   18    9    4   19.382000    5.497000";
/// let record = decode_identification(line).unwrap();
/// assert_eq!(record.symbol, "22Mg");
/// assert_eq!(record.n_levels, 17);
/// ```
pub fn decode_identification(line: &str) -> Result<IdentificationRecord, Malformed> {
    let c = slice_columns(line, &IDENTIFICATION_COLUMNS)?;

    Ok(IdentificationRecord {
        symbol: c[0].trim().to_string(),
        mass: mandatory("A", c[1], uint)?,
        charge: mandatory("Z", c[2], uint)?,
        n_levels: mandatory("Nol", c[3], uint)?,
        n_gammas: mandatory("Nog", c[4], uint)?,
        max_complete_level: mandatory("Nmax", c[5], uint)?,
        unique_spin_level: mandatory("Nc", c[6], uint)?,
        sn: mandatory("Sn", c[7], float)?,
        sp: mandatory("Sp", c[8], float)?,
    })
}

/// Decode a level record
///
/// The half-life and decay mode count are optional, everything else numeric
/// is mandatory. Anything beyond the decay mode count (percentages, modes,
/// band information) is ignored.
///
/// ```rust
/// # use ripl_levels::decode_level;
/// let line = "  2   1.246300   2.0  1             1        2+                  0";
/// let record = decode_level(line).unwrap();
/// assert_eq!(record.half_life, None);
/// assert_eq!(record.spin_notation, "2+");
/// ```
pub fn decode_level(line: &str) -> Result<LevelRecord, Malformed> {
    let c = slice_columns(line, &LEVEL_COLUMNS)?;

    Ok(LevelRecord {
        number: mandatory("Nl", c[0], uint)?,
        energy: mandatory("Elv", c[1], float)?,
        spin: mandatory("s", c[2], float)?,
        parity: mandatory("p", c[3], int)?,
        half_life: optional("T1/2", c[4], float)?,
        n_gammas: mandatory("Ng", c[5], uint)?,
        flags: c[6].trim().to_string(),
        spin_notation: c[7].trim().to_string(),
        n_decay_modes: optional("nd", c[8], uint)?,
    })
}

/// Decode a gamma record
///
/// The first 39 characters are not read. All four numeric fields are
/// mandatory.
pub fn decode_gamma(line: &str) -> Result<GammaRecord, Malformed> {
    let c = slice_columns(line, &GAMMA_COLUMNS)?;

    Ok(GammaRecord {
        final_state: mandatory("Nf", c[1], uint)?,
        energy: mandatory("Eg", c[2], float)?,
        probability_gamma: mandatory("Pg", c[3], float)?,
        probability_electromagnetic: mandatory("Pe", c[4], float)?,
        internal_conversion: mandatory("ICC", c[5], float)?,
    })
}

/// Field where a blank is an error
fn mandatory<T>(
    field: &'static str,
    column: &str,
    parser: fn(&str) -> IResult<&str, T>,
) -> Result<T, Malformed> {
    number::mandatory(column, parser).map_err(|source| Malformed::Field { field, source })
}

/// Field where a blank is an absent value
fn optional<T>(
    field: &'static str,
    column: &str,
    parser: fn(&str) -> IResult<&str, T>,
) -> Result<Option<T>, Malformed> {
    number::optional(column, parser).map_err(|source| Malformed::Field { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripl_support::Error as ColumnError;

    const IDENT: &str = " 22Mg   22   12   17   18    9    4   19.382000    5.497000";
    const LEVEL: &str = "  1   0.000000   0.0  1  3.860E+00  0        0+                  2  =  8.2000E+01 %IT";
    const GAMMA: &str = "                                          3     0.0550  2.790E-01  2.870E-01  5.130E-03";

    #[test]
    fn identification() {
        let record = decode_identification(IDENT).unwrap();
        assert_eq!(
            record,
            IdentificationRecord {
                symbol: "22Mg".to_string(),
                mass: 22,
                charge: 12,
                n_levels: 17,
                n_gammas: 18,
                max_complete_level: 9,
                unique_spin_level: 4,
                sn: 19.382,
                sp: 5.497,
            }
        );
    }

    #[test]
    fn identification_blank_count() {
        let line = " 22Mg   22   12        18    9    4   19.382000    5.497000";
        let error = decode_identification(line).unwrap_err();
        assert_eq!(
            error,
            Malformed::Field {
                field: "Nol",
                source: ColumnError::BlankField
            }
        );
    }

    #[test]
    fn identification_short_line() {
        let error = decode_identification(" 22Mg   22   12   17   18").unwrap_err();
        assert!(matches!(
            error,
            Malformed::Columns(ColumnError::ShortLine { column: 26, .. })
        ));
    }

    #[test]
    fn level_with_half_life() {
        let record = decode_level(LEVEL).unwrap();
        assert_eq!(record.number, 1);
        assert_eq!(record.energy, 0.0);
        assert_eq!(record.spin, 0.0);
        assert_eq!(record.parity, 1);
        assert_eq!(record.half_life, Some(3.86));
        assert_eq!(record.n_gammas, 0);
        assert_eq!(record.spin_notation, "0+");
        assert_eq!(record.n_decay_modes, Some(2));
    }

    #[test]
    fn level_blank_half_life() {
        let line = "  2   1.246300   2.0  1             1        2+                  0";
        let record = decode_level(line).unwrap();
        assert_eq!(record.half_life, None);
        assert_eq!(record.n_gammas, 1);
    }

    #[test]
    fn level_blank_spin() {
        let line = "  2   1.246300        1             1        2+                  0";
        let error = decode_level(line).unwrap_err();
        assert_eq!(
            error,
            Malformed::Field {
                field: "s",
                source: ColumnError::BlankField
            }
        );
    }

    #[test]
    fn level_blank_parity() {
        let line = "  2   1.246300   2.0                1        2+                  0";
        let error = decode_level(line).unwrap_err();
        assert!(matches!(error, Malformed::Field { field: "p", .. }));
    }

    #[test]
    fn level_garbled_energy() {
        let line = "  2   1.24x300   2.0  1             1        2+                  0";
        let error = decode_level(line).unwrap_err();
        assert!(matches!(
            error,
            Malformed::Field {
                field: "Elv",
                source: ColumnError::InvalidNumber { .. }
            }
        ));
    }

    #[test]
    fn gamma() {
        let record = decode_gamma(GAMMA).unwrap();
        assert_eq!(
            record,
            GammaRecord {
                final_state: 3,
                energy: 0.055,
                probability_gamma: 0.279,
                probability_electromagnetic: 0.287,
                internal_conversion: 0.00513,
            }
        );
    }

    #[test]
    fn gamma_ignores_leading_columns() {
        // the skipped region may hold anything
        let line = GAMMA.replacen("      ", "xxxxxx", 1);
        assert!(decode_gamma(&line).is_ok());
    }
}
