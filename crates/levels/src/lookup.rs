//! Find the level closest to an excitation energy

use log::debug;

use crate::common::SciFloat;
use crate::error::Result;
use crate::store::LevelStore;

/// Relative tolerance either side of a target energy
pub const LEVEL_TOLERANCE: f64 = 0.05;

/// Index of the first level energy within tolerance of `target`
///
/// A level matches if it lies strictly inside
/// `((1 - LEVEL_TOLERANCE) * target, (1 + LEVEL_TOLERANCE) * target)`.
/// Levels are checked in the order given and the first match wins.
///
/// A target of exactly `0.0` is always the ground state, index 0.
///
/// ```rust
/// # use ripl_levels::{nearest_level_index, SciFloat};
/// let energies: Vec<SciFloat> = [0.0, 1.0, 2.5].map(SciFloat::new).to_vec();
///
/// assert_eq!(nearest_level_index(&energies, 0.0), Some(0));
/// assert_eq!(nearest_level_index(&energies, 1.02), Some(1));
/// assert_eq!(nearest_level_index(&energies, 3.0), None);
/// ```
pub fn nearest_level_index(energies: &[SciFloat], target: f64) -> Option<usize> {
    if target == 0.0 {
        return Some(0);
    }

    let lower = target * (1.0 - LEVEL_TOLERANCE);
    let upper = target * (1.0 + LEVEL_TOLERANCE);

    energies
        .iter()
        .position(|e| lower < e.value() && e.value() < upper)
}

impl LevelStore {
    /// Index of the stored level closest to an excitation energy (MeV)
    ///
    /// See [nearest_level_index()] for the matching rules. Returns `None`
    /// when there is no document for the nuclide or when nothing is within
    /// tolerance. The ground state shortcut never touches the filesystem.
    ///
    /// ```rust, no_run
    /// # use ripl_levels::LevelStore;
    /// let store = LevelStore::new("levels_json");
    ///
    /// // Which level of 22Mg sits near 1.25 MeV?
    /// match store.find_level_index(12, 22, 1.25).unwrap() {
    ///     Some(index) => println!("level index {index}"),
    ///     None => println!("no level within tolerance"),
    /// }
    /// ```
    pub fn find_level_index(&self, charge: u32, mass: u32, target: f64) -> Result<Option<usize>> {
        if target == 0.0 {
            return Ok(Some(0));
        }

        let Some(document) = self.load(charge, mass)? else {
            debug!("No level data for Z={charge} A={mass}");
            return Ok(None);
        };

        let index = nearest_level_index(document.energies(), target);
        debug!("{} at {target} MeV -> {index:?}", document.nuclide);
        Ok(index)
    }
}
