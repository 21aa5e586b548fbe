//! JSON persistence of level schemes, one file per nuclide
//!
//! Files are laid out by element under a root directory:
//!
//! ```text
//! levels_json/
//! ├── H/
//! │   ├── 1H.json
//! │   └── 2H.json
//! └── Mg/
//!     └── 22Mg.json
//! ```

// standard library
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

// external crates
use log::{debug, trace};
use serde::{Deserialize, Serialize};

// internal modules
use crate::common::SciFloat;
use crate::error::Result;
use crate::scheme::{Level, NuclideLevelScheme};
use ripl_support::element::{element_of, symbol};
use ripl_support::f;

/// Persisted form of a [NuclideLevelScheme]
///
/// The document shape is fixed by the existing JSON tree:
///
/// ```json
/// {
///   "nuclide": "22Mg",
///   "level_info": {
///     "A": 22,
///     "Z": 12,
///     "nlevels": 17,
///     "Sn": "1.9382e+01",
///     "Sp": "5.4970e+00",
///     "levels": ["0.0000e+00", "1.2463e+00"],
///     "level_record": [...]
///   }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelDocument {
    /// Nuclide symbol, e.g. "22Mg"
    pub nuclide: String,
    /// Everything known about the nuclide levels
    pub level_info: LevelInfo,
}

/// Level data of a [LevelDocument]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelInfo {
    /// Mass number
    #[serde(rename = "A")]
    pub a: u32,
    /// Atomic number
    #[serde(rename = "Z")]
    pub z: u32,
    /// Number of levels declared in the identification record
    pub nlevels: u32,
    /// Neutron separation energy (MeV)
    #[serde(rename = "Sn")]
    pub sn: SciFloat,
    /// Proton separation energy (MeV)
    #[serde(rename = "Sp")]
    pub sp: SciFloat,
    /// Level energies in order, used for quick lookups
    pub levels: Vec<SciFloat>,
    /// Full level records
    pub level_record: Vec<Level>,
}

impl LevelDocument {
    /// Level energies in stored order
    pub fn energies(&self) -> &[SciFloat] {
        &self.level_info.levels
    }
}

impl From<&NuclideLevelScheme> for LevelDocument {
    fn from(scheme: &NuclideLevelScheme) -> Self {
        Self {
            nuclide: scheme.symbol.clone(),
            level_info: LevelInfo {
                a: scheme.a,
                z: scheme.z,
                nlevels: scheme.declared_level_count,
                sn: scheme.sn,
                sp: scheme.sp,
                levels: scheme.energies(),
                level_record: scheme.levels.clone(),
            },
        }
    }
}

/// Directory tree of JSON level documents
///
/// ```rust, no_run
/// # use ripl_levels::{read_charge, LevelStore, ReaderOptions};
/// let store = LevelStore::new("levels_json");
///
/// // Convert one per-charge file into the JSON tree
/// let schemes = read_charge("data/levels", 12, ReaderOptions::default()).unwrap();
/// store.persist_all(schemes.values()).unwrap();
///
/// // Read back the document for 22Mg
/// let document = store.load(12, 22).unwrap().expect("22Mg was just written");
/// println!("{} levels", document.energies().len());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStore {
    root: PathBuf,
}

impl LevelStore {
    /// Store rooted at `root`, which does not need to exist yet
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Document path for a nuclide symbol, i.e. `<root>/<element>/<symbol>.json`
    ///
    /// ```rust
    /// # use ripl_levels::LevelStore;
    /// # use std::path::Path;
    /// let store = LevelStore::new("levels_json");
    /// assert_eq!(
    ///     store.path_for_symbol("22Mg"),
    ///     Path::new("levels_json/Mg/22Mg.json")
    /// );
    /// ```
    pub fn path_for_symbol(&self, nuclide: &str) -> PathBuf {
        let nuclide = nuclide.trim();
        self.root
            .join(element_of(nuclide))
            .join(f!("{nuclide}.json"))
    }

    /// Document path for a nuclide by atomic and mass number
    ///
    /// Returns `None` for an atomic number without a known element.
    pub fn path_for(&self, charge: u32, mass: u32) -> Option<PathBuf> {
        let element = symbol(charge)?;
        Some(self.path_for_symbol(&f!("{mass}{element}")))
    }

    /// Write the document for one nuclide, returning the path written
    ///
    /// The element directory is created if needed. Any existing document for
    /// the nuclide is overwritten.
    pub fn persist(&self, scheme: &NuclideLevelScheme) -> Result<PathBuf> {
        let path = self.path_for_symbol(&scheme.symbol);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(writer, &LevelDocument::from(scheme))?;
        trace!("Wrote {}", path.display());

        Ok(path)
    }

    /// Write documents for every scheme, returning the number written
    pub fn persist_all<'a, I>(&self, schemes: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a NuclideLevelScheme>,
    {
        let mut count = 0;
        for scheme in schemes {
            self.persist(scheme)?;
            count += 1;
        }
        debug!("Wrote {count} level documents to {}", self.root.display());
        Ok(count)
    }

    /// Load the document for a nuclide by atomic and mass number
    ///
    /// A missing document is not an error, just `None`.
    pub fn load(&self, charge: u32, mass: u32) -> Result<Option<LevelDocument>> {
        match self.path_for(charge, mass) {
            Some(path) => read_document(&path),
            None => Ok(None),
        }
    }

    /// Load the document for a nuclide symbol, e.g. "22Mg"
    pub fn load_symbol(&self, nuclide: &str) -> Result<Option<LevelDocument>> {
        read_document(&self.path_for_symbol(nuclide))
    }
}

/// Deserialise a document, or `None` if there is no file
fn read_document(path: &Path) -> Result<Option<LevelDocument>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            trace!("No level document at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let document = serde_json::from_reader(BufReader::new(file))?;
    Ok(Some(document))
}
