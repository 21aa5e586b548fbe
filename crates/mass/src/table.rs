//! Mass values keyed by atomic and mass number

// standard library
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

// internal modules
use ripl_support::element::symbol;
use ripl_support::{f, OptionExt};

/// Supported mass table layouts
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MassFormat {
    /// Finite-range droplet model, `mass-frdm95.dat`
    Frdm95,
    /// Hartree-Fock-Bogoliubov, `mass-hfb14.dat`, same layout as FRDM-95
    Hfb14,
    /// Atomic Mass Evaluation 2020, `mass_1.mass20.txt`
    Ame2020,
}

impl MassFormat {
    /// Recognise a mass table from its file name
    ///
    /// ```rust
    /// # use ripl_mass::MassFormat;
    /// assert_eq!(
    ///     MassFormat::from_path("data/mass-frdm95.dat"),
    ///     Some(MassFormat::Frdm95)
    /// );
    /// assert_eq!(
    ///     MassFormat::from_path("mass_1.mass20.txt"),
    ///     Some(MassFormat::Ame2020)
    /// );
    /// assert_eq!(MassFormat::from_path("masses.csv"), None);
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let name = path.as_ref().file_name()?.to_str()?;
        [Self::Frdm95, Self::Hfb14, Self::Ame2020]
            .into_iter()
            .find(|format| name.contains(format.file_name()))
    }

    /// Conventional file name of the distributed table
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Frdm95 => "mass-frdm95.dat",
            Self::Hfb14 => "mass-hfb14.dat",
            Self::Ame2020 => "mass_1.mass20.txt",
        }
    }

    /// Number of header lines before the first entry
    pub fn header_lines(&self) -> usize {
        match self {
            Self::Frdm95 | Self::Hfb14 => 5,
            Self::Ame2020 => 36,
        }
    }
}

impl fmt::Display for MassFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Frdm95 => "FRDM-95",
            Self::Hfb14 => "HFB-14",
            Self::Ame2020 => "AME2020",
        };
        write!(f, "{name}")
    }
}

/// Mass values (MeV) for every `(Z, A)` in a table
///
/// Entries iterate in ascending `(Z, A)` order.
///
/// ```rust, no_run
/// # use ripl_mass::read_mass_table;
/// let table = read_mass_table("data/mass-frdm95.dat").unwrap();
///
/// if let Some(mass) = table.get(26, 56) {
///     println!("56Fe: {mass} MeV");
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MassTable {
    entries: BTreeMap<(u32, u32), f64>,
}

impl MassTable {
    /// Mass value for an atomic and mass number
    pub fn get(&self, z: u32, a: u32) -> Option<f64> {
        self.entries.get(&(z, a)).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `((z, a), mass)` in ascending order
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), f64)> + '_ {
        self.entries.iter().map(|(key, mass)| (*key, *mass))
    }

    /// Add an entry, returning any value it replaced
    pub(crate) fn insert(&mut self, z: u32, a: u32, mass: f64) -> Option<f64> {
        self.entries.insert((z, a), mass)
    }
}

impl FromIterator<((u32, u32), f64)> for MassTable {
    fn from_iter<I: IntoIterator<Item = ((u32, u32), f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for MassTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nuclide = |(z, a): (u32, u32)| symbol(z).map(|s| f!("{a}{s}"));

        let mut s = "Mass table\n".to_string();
        s += &f!("  Entries          {}\n", self.len());
        s += &f!(
            "  First            {}\n",
            self.entries.keys().next().and_then(|k| nuclide(*k)).display()
        );
        s += &f!(
            "  Last             {}",
            self.entries.keys().next_back().and_then(|k| nuclide(*k)).display()
        );
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hfb_shares_frdm_layout() {
        assert_eq!(
            MassFormat::from_path("/tables/mass-hfb14.dat"),
            Some(MassFormat::Hfb14)
        );
        assert_eq!(
            MassFormat::Hfb14.header_lines(),
            MassFormat::Frdm95.header_lines()
        );
    }

    #[test]
    fn ordered_iteration() {
        let table: MassTable = [((26, 56), -60.6), ((1, 1), 7.289), ((8, 16), -4.737)]
            .into_iter()
            .collect();

        let keys: Vec<(u32, u32)> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![(1, 1), (8, 16), (26, 56)]);
        assert_eq!(table.get(8, 16), Some(-4.737));
        assert_eq!(table.get(8, 17), None);
    }

    #[test]
    fn summary() {
        let table: MassTable = [((1, 1), 7.289), ((26, 56), -60.6)].into_iter().collect();
        let text = table.to_string();
        assert!(text.contains("Entries          2"));
        assert!(text.contains("First            1H"));
        assert!(text.contains("Last             56Fe"));
    }
}
