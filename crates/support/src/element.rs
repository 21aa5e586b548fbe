//! Chemical element symbols
//!
//! The RIPL-3 files are organised by atomic number, while nuclides and the
//! JSON output tree are named by element symbol, so conversion is needed in
//! both directions.

use crate::StringExt;

/// Element symbols ordered by atomic number, starting from hydrogen
pub const SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Element symbol for an atomic number
///
/// ```rust
/// # use ripl_support::element::symbol;
/// assert_eq!(symbol(12), Some("Mg"));
/// assert_eq!(symbol(0), None);
/// assert_eq!(symbol(119), None);
/// ```
pub fn symbol(charge: u32) -> Option<&'static str> {
    let index = (charge as usize).checked_sub(1)?;
    SYMBOLS.get(index).copied()
}

/// Atomic number for an element symbol, ignoring case
///
/// ```rust
/// # use ripl_support::element::charge;
/// assert_eq!(charge("Mg"), Some(12));
/// assert_eq!(charge("u"), Some(92));
/// assert_eq!(charge("Xx"), None);
/// ```
pub fn charge(symbol: &str) -> Option<u32> {
    let symbol = symbol.trim().capitalise();
    SYMBOLS
        .iter()
        .position(|s| *s == symbol)
        .map(|index| index as u32 + 1)
}

/// Element part of a nuclide symbol, i.e. everything that is not a letter
/// is removed
///
/// ```rust
/// # use ripl_support::element::element_of;
/// assert_eq!(element_of("22Mg"), "Mg");
/// assert_eq!(element_of(" 238U "), "U");
/// ```
pub fn element_of(nuclide: &str) -> String {
    nuclide.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}
