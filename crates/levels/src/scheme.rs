use serde::{Deserialize, Serialize};

use crate::common::SciFloat;
use crate::parsers::{GammaRecord, IdentificationRecord, LevelRecord};
use ripl_support::{f, OptionExt};

/// Full level scheme for a single nuclide
///
/// One of these is built for every nuclide block in a RIPL-3 level file and
/// is the unit of persistence for the [LevelStore](crate::LevelStore).
///
/// ## Declared counts
///
/// The identification record declares how many level and gamma lines follow
/// it. These drive the position of the next nuclide block and are kept as
/// written, so they are not necessarily equal to the number of [Level]s or
/// [GammaTransition]s actually captured.
///
/// ## Summary
///
/// The `Display` implementation gives a short summary, for example:
///
/// ```text
/// Nuclide 22Mg
///   Z, A             12, 22
///   Declared         17 levels, 18 gammas
///   Complete to      level 9
///   Unique spin to   level 4
///   Sn               1.9382e+01 MeV
///   Sp               5.4970e+00 MeV
///   Levels read      17
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NuclideLevelScheme {
    /// Nuclide symbol, e.g. "22Mg"
    pub symbol: String,
    /// Atomic number
    pub z: u32,
    /// Mass number
    pub a: u32,
    /// Number of level lines declared by the identification record
    pub declared_level_count: u32,
    /// Number of gamma lines declared by the identification record
    pub declared_gamma_count: u32,
    /// Level up to which the scheme is complete
    pub max_complete_level: u32,
    /// Level up to which spins and parities are unique
    pub unique_spin_level: u32,
    /// Neutron separation energy (MeV)
    pub sn: SciFloat,
    /// Proton separation energy (MeV)
    pub sp: SciFloat,
    /// Levels in order of appearance
    pub levels: Vec<Level>,
}

impl NuclideLevelScheme {
    /// Start an empty scheme from the block header
    pub(crate) fn new(header: IdentificationRecord) -> Self {
        Self {
            symbol: header.symbol,
            z: header.charge,
            a: header.mass,
            declared_level_count: header.n_levels,
            declared_gamma_count: header.n_gammas,
            max_complete_level: header.max_complete_level,
            unique_spin_level: header.unique_spin_level,
            sn: header.sn.into(),
            sp: header.sp.into(),
            levels: Vec::new(),
        }
    }

    /// Level energies in order of appearance
    pub fn energies(&self) -> Vec<SciFloat> {
        self.levels.iter().map(|l| l.level_energy).collect()
    }

    /// Total number of gamma transitions kept across all levels
    pub fn n_transitions(&self) -> usize {
        self.levels.iter().map(|l| l.gamma_record.len()).sum()
    }
}

impl std::fmt::Display for NuclideLevelScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!("Nuclide {}\n", self.symbol);
        s += &f!("  Z, A             {}, {}\n", self.z, self.a);
        s += &f!(
            "  Declared         {} levels, {} gammas\n",
            self.declared_level_count,
            self.declared_gamma_count
        );
        s += &f!("  Complete to      level {}\n", self.max_complete_level);
        s += &f!("  Unique spin to   level {}\n", self.unique_spin_level);
        s += &f!("  Sn               {} MeV\n", self.sn);
        s += &f!("  Sp               {} MeV\n", self.sp);
        s += &f!("  Levels read      {}", self.levels.len());
        write!(f, "{s}")
    }
}

/// A discrete level and the gamma transitions de-exciting it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Level {
    /// Sequential number of the level
    pub level_number: u32,
    /// Level energy (MeV)
    pub level_energy: SciFloat,
    /// Level spin
    pub spin: f64,
    /// Level parity
    pub parity: i32,
    /// Half-life (s), if known
    #[serde(default)]
    pub half_life: Option<SciFloat>,
    /// Original ENSDF spin text
    pub spin_notation: String,
    /// Gamma transitions from this level
    #[serde(default)]
    pub gamma_record: Vec<GammaTransition>,
}

impl Level {
    pub(crate) fn new(record: LevelRecord, gamma_record: Vec<GammaTransition>) -> Self {
        Self {
            level_number: record.number,
            level_energy: record.energy.into(),
            spin: record.spin,
            parity: record.parity,
            half_life: record.half_life.map(SciFloat::new),
            spin_notation: record.spin_notation,
            gamma_record,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Level {:>3} {} MeV  {:<6} T1/2 {}  ({} gammas)",
            self.level_number,
            self.level_energy,
            self.spin_notation,
            self.half_life.display(),
            self.gamma_record.len()
        )
    }
}

/// A single gamma transition
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GammaTransition {
    /// Sequential number of the final state
    pub final_state: u32,
    /// Gamma-ray energy (MeV)
    pub gamma_energy: SciFloat,
    /// Probability of photon emission
    pub probability_gamma: SciFloat,
    /// Probability of any electromagnetic transition
    #[serde(rename = "probability_electmag")]
    #[serde(alias = "probability_electromagnetic")]
    pub probability_electromagnetic: SciFloat,
    /// Internal conversion coefficient
    pub internal_conversion: SciFloat,
}

impl From<GammaRecord> for GammaTransition {
    fn from(record: GammaRecord) -> Self {
        Self {
            final_state: record.final_state,
            gamma_energy: record.energy.into(),
            probability_gamma: record.probability_gamma.into(),
            probability_electromagnetic: record.probability_electromagnetic.into(),
            internal_conversion: record.internal_conversion.into(),
        }
    }
}
