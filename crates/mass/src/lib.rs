//! Nuclear mass tables distributed with RIPL-3
//!
//! Reads the FRDM-95, HFB-14 and AME2020 mass tables into a [MassTable] of
//! mass values in MeV keyed by atomic and mass number.
//!
//! ```rust, no_run
//! # use ripl_mass::read_mass_table;
//! // Layout is chosen from the file name
//! let table = read_mass_table("data/mass-frdm95.dat").unwrap();
//!
//! // Mass value for 56Fe
//! let mass = table.get(26, 56);
//! ```
//!
//! Value selection follows the distributed tables:
//!
//! | Table            | Header lines | Value                                   |
//! | ---------------- | ------------ | --------------------------------------- |
//! | FRDM-95, HFB-14  | 5            | Mexp, else Mth, else `0.0` (MeV)        |
//! | AME2020          | 36           | mass excess / 1000, blank `0.0` (MeV)   |

// Modules
mod error;
mod reader;
mod table;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use reader::{
    parse_mass_table, read_ame2020, read_frdm, read_mass_table, read_with_format,
};

#[doc(inline)]
pub use table::{MassFormat, MassTable};
