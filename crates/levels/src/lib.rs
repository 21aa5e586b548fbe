//! Read, store and query the RIPL-3 discrete level library
//!
//! The RIPL-3 levels library is distributed as fixed-width text files, one
//! per atomic number (`z001.dat` to `z118.dat`). This crate rebuilds a typed
//! level scheme for every nuclide in those files, writes each one to a JSON
//! document, and looks up the level closest to an excitation energy.
//!
//! See <https://www-nds.iaea.org/RIPL-3/> for the library itself.
//!
//! ## Implementation
//!
//! Every nuclide block of a level file becomes a [NuclideLevelScheme], which
//! owns its [Level]s, which in turn own their [GammaTransition]s.
//!
//! ```text
//! NuclideLevelScheme  <- identification record
//! ├── Level           <- level record
//! │   ├── GammaTransition  <- gamma record
//! │   └── GammaTransition
//! └── Level
//! ```
//!
//! For example:
//!
//! ```rust, no_run
//! # use ripl_levels::{read_charge, LevelStore, ReaderOptions};
//! // Read every magnesium nuclide
//! let schemes = read_charge("data/levels", 12, ReaderOptions::default()).unwrap();
//! println!("{}", schemes["22Mg"]);
//!
//! // Write them all out as JSON documents
//! let store = LevelStore::new("levels_json");
//! store.persist_all(schemes.values()).unwrap();
//!
//! // Find the level index closest to 1.25 MeV
//! let index = store.find_level_index(12, 22, 1.25).unwrap();
//! ```
//!
//! This will print a summary of the scheme.
//!
//! ```text
//! Nuclide 22Mg
//!   Z, A             12, 22
//!   Declared         17 levels, 18 gammas
//!   Complete to      level 9
//!   Unique spin to   level 4
//!   Sn               1.9382e+01 MeV
//!   Sp               5.4970e+00 MeV
//!   Levels read      17
//! ```
//!
//! ## Energies and probabilities
//!
//! All energies and probabilities are held as [SciFloat], which rounds to the
//! `%10.4e` precision used by the JSON documents. A scheme built from a level
//! file and the same scheme read back from JSON therefore compare equal.

// Modules
mod common;
mod error;
mod lookup;
mod parsers;
mod reader;
mod scheme;
mod store;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use common::{RecordKind, SciFloat};

#[doc(inline)]
pub use error::{Error, Malformed, Result};

#[doc(inline)]
pub use parsers::{
    decode_gamma, decode_identification, decode_level, GammaRecord, IdentificationRecord,
    LevelRecord,
};

#[doc(inline)]
pub use reader::{
    charge_file_name, parse_levels, read_charge, read_levels_file, GammaPolicy, LevelMap,
    ReaderOptions,
};

#[doc(inline)]
pub use scheme::{GammaTransition, Level, NuclideLevelScheme};

#[doc(inline)]
pub use store::{LevelDocument, LevelInfo, LevelStore};

#[doc(inline)]
pub use lookup::{nearest_level_index, LEVEL_TOLERANCE};
