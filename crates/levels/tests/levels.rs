//! Integration tests for reading, storing and querying level schemes

use ripl_levels::{
    parse_levels, read_charge, read_levels_file, Error, GammaPolicy, LevelDocument, LevelMap,
    LevelStore, ReaderOptions, RecordKind, SciFloat,
};
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn magnesium() -> LevelMap {
    read_charge("./data", 12, ReaderOptions::default()).unwrap()
}

#[fixture]
fn magnesium_legacy() -> LevelMap {
    let options = ReaderOptions::with_gamma_policy(GammaPolicy::RetainLast);
    read_levels_file("./data/z012.dat", options).unwrap()
}

#[fixture]
fn store() -> (TempDir, LevelStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LevelStore::new(dir.path().join("levels_json"));
    (dir, store)
}

fn sci(values: &[f64]) -> Vec<SciFloat> {
    values.iter().copied().map(SciFloat::new).collect()
}

#[rstest]
fn nuclides_in_file_order(magnesium: LevelMap) {
    let symbols: Vec<&str> = magnesium.keys().map(|k| k.as_str()).collect();
    assert_eq!(symbols, vec!["22Mg", "23Mg", "24Mg", "25Mg"]);
}

#[rstest]
fn identification_fields(magnesium: LevelMap) {
    let mg22 = &magnesium["22Mg"];
    assert_eq!(mg22.z, 12);
    assert_eq!(mg22.a, 22);
    assert_eq!(mg22.declared_level_count, 3);
    assert_eq!(mg22.declared_gamma_count, 3);
    assert_eq!(mg22.max_complete_level, 3);
    assert_eq!(mg22.unique_spin_level, 2);
    assert_eq!(mg22.sn.to_string(), "1.9382e+01");
    assert_eq!(mg22.sp.to_string(), "5.4970e+00");
}

#[rstest]
fn level_fields(magnesium: LevelMap) {
    let levels = &magnesium["23Mg"].levels;
    assert_eq!(levels.len(), 2);

    assert_eq!(levels[0].level_number, 1);
    assert_eq!(levels[0].spin, 1.5);
    assert_eq!(levels[0].parity, 1);
    assert_eq!(levels[0].spin_notation, "3/2+");
    assert_eq!(levels[0].half_life.unwrap().to_string(), "1.1320e+01");

    assert_eq!(levels[1].level_energy.to_string(), "4.5050e-01");
    assert_eq!(levels[1].gamma_record.len(), 1);
    assert_eq!(levels[1].gamma_record[0].final_state, 1);
}

#[rstest]
fn blank_half_life_is_absent(magnesium: LevelMap) {
    let levels = &magnesium["22Mg"].levels;
    assert!(levels[0].half_life.is_some());
    assert!(levels[1].half_life.is_none());
    assert!(levels[2].half_life.is_none());
}

#[rstest]
fn empty_block(magnesium: LevelMap) {
    assert!(magnesium["24Mg"].levels.is_empty());
    assert_eq!(magnesium["24Mg"].sp.to_string(), "1.1693e+01");
}

#[rstest]
#[case("22Mg", GammaPolicy::RetainAll, &[0, 1, 2])]
#[case("22Mg", GammaPolicy::RetainLast, &[0, 1, 1])]
#[case("23Mg", GammaPolicy::RetainAll, &[0, 1])]
#[case("23Mg", GammaPolicy::RetainLast, &[0, 1])]
fn gamma_policy(#[case] nuclide: &str, #[case] policy: GammaPolicy, #[case] expected: &[usize]) {
    let schemes = read_charge("./data", 12, ReaderOptions::with_gamma_policy(policy)).unwrap();
    let counts: Vec<usize> = schemes[nuclide]
        .levels
        .iter()
        .map(|l| l.gamma_record.len())
        .collect();
    assert_eq!(counts, expected);
}

#[rstest]
fn retain_last_keeps_final_line(magnesium: LevelMap, magnesium_legacy: LevelMap) {
    let all = &magnesium["22Mg"].levels[2].gamma_record;
    let last = &magnesium_legacy["22Mg"].levels[2].gamma_record;
    assert_eq!(all.len(), 2);
    assert_eq!(last.len(), 1);
    assert_eq!(last[0], all[1]);
    assert_eq!(last[0].gamma_energy.to_string(), "3.3084e+00");

    // block positions do not depend on the policy
    assert_eq!(magnesium.len(), magnesium_legacy.len());
    assert_eq!(magnesium["25Mg"], magnesium_legacy["25Mg"]);
}

#[rstest]
fn persist_and_reload(magnesium: LevelMap, store: (TempDir, LevelStore)) {
    let (_dir, store) = store;
    assert_eq!(store.persist_all(magnesium.values()).unwrap(), 4);

    for scheme in magnesium.values() {
        let document = store.load(scheme.z, scheme.a).unwrap().unwrap();
        assert_eq!(document, LevelDocument::from(scheme));
        assert_eq!(document.energies(), scheme.energies().as_slice());
    }

    let mg22 = store.load_symbol("22Mg").unwrap().unwrap();
    let strings: Vec<String> = mg22.energies().iter().map(|e| e.to_string()).collect();
    assert_eq!(strings, vec!["0.0000e+00", "1.2463e+00", "3.3084e+00"]);
}

#[rstest]
fn persisted_layout(magnesium: LevelMap, store: (TempDir, LevelStore)) {
    let (_dir, store) = store;
    let path = store.persist(&magnesium["25Mg"]).unwrap();
    assert_eq!(path, store.root().join("Mg").join("25Mg.json"));

    let written = std::fs::read_to_string(path).unwrap();
    let expected = std::fs::read_to_string("./data/25Mg.json").unwrap();
    assert_eq!(written, expected);
}

#[rstest]
fn persist_is_repeatable(magnesium: LevelMap, store: (TempDir, LevelStore)) {
    let (_dir, store) = store;
    let first = store.persist(&magnesium["22Mg"]).unwrap();
    let second = store.persist(&magnesium["22Mg"]).unwrap();
    assert_eq!(first, second);
    assert!(store.load(12, 22).unwrap().is_some());
}

#[rstest]
fn load_missing_nuclide(store: (TempDir, LevelStore)) {
    let (_dir, store) = store;
    assert!(store.load(12, 22).unwrap().is_none());
    assert!(store.load_symbol("238U").unwrap().is_none());
}

#[rstest]
#[case(0.0, Some(0))]
#[case(1.25, Some(1))]
#[case(1.2463, Some(1))]
#[case(3.3, Some(2))]
#[case(2.0, None)]
#[case(10.0, None)]
fn find_level_index(
    magnesium: LevelMap,
    store: (TempDir, LevelStore),
    #[case] energy: f64,
    #[case] expected: Option<usize>,
) {
    let (_dir, store) = store;
    store.persist_all(magnesium.values()).unwrap();
    assert_eq!(store.find_level_index(12, 22, energy).unwrap(), expected);
}

#[rstest]
fn find_level_index_without_data(store: (TempDir, LevelStore)) {
    let (_dir, store) = store;
    assert_eq!(store.find_level_index(92, 238, 0.0).unwrap(), Some(0));
    assert_eq!(store.find_level_index(92, 238, 1.0).unwrap(), None);
}

#[rstest]
fn tolerance_window(store: (TempDir, LevelStore)) {
    let (_dir, store) = store;
    let text = [
        "  10C   10    6    3    0    3    3    4.000000    4.000000",
        "  1   0.000000   0.0  1             0        0+                  0",
        "  2   1.000000   2.0  1             0        2+                  0",
        "  3   2.500000   0.0  1             0        0+                  0",
    ]
    .join("\n");
    let schemes = parse_levels(&text, ReaderOptions::default()).unwrap();
    assert_eq!(schemes["10C"].energies(), sci(&[0.0, 1.0, 2.5]));

    store.persist_all(schemes.values()).unwrap();
    assert_eq!(store.find_level_index(6, 10, 1.02).unwrap(), Some(1));
    assert_eq!(store.find_level_index(6, 10, 3.0).unwrap(), None);
}

// Synthetic blocks for checking every line is visited exactly once

fn identification_line(symbol: &str, mass: u32, nol: usize, nog: usize) -> String {
    format!(
        "{:>5}{:5}{:5}{:5}{:5}{:5}{:5}{:12.6}{:12.6}",
        symbol, mass, 26, nol, nog, nol, nol, 10.0, 5.0
    )
}

fn level_line(number: usize, energy: f64, n_gammas: usize) -> String {
    format!(
        "{:3}{:11.6}{:6.1}{:3}{:11}{:3}{:8}{:18}{:3}",
        number, energy, 0.5, -1, "", n_gammas, "", "1/2-", 0
    )
}

fn gamma_line(final_state: usize, energy: f64) -> String {
    format!(
        "{:39}{:4}{:11.4}{:11.3e}{:11.3e}{:11.3e}",
        "", final_state, energy, 0.5, 0.5, 0.0
    )
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(8)]
fn cursor_coverage(#[case] k: usize) {
    let mut lines = Vec::new();
    let mut expected = Vec::new();

    for block in 0..k {
        let n_levels = block % 4;
        let gammas: Vec<usize> = (0..n_levels).map(|l| (l + block) % 3).collect();
        let mass = 50 + block as u32;
        let symbol = format!("{mass}Fe");

        lines.push(identification_line(&symbol, mass, n_levels, gammas.iter().sum()));
        for (l, &ng) in gammas.iter().enumerate() {
            lines.push(level_line(l + 1, l as f64 * 0.5, ng));
            for g in 0..ng {
                lines.push(gamma_line(g + 1, 0.1 * (g + 1) as f64));
            }
        }
        expected.push((symbol, gammas));
    }

    let schemes = parse_levels(&lines.join("\n"), ReaderOptions::default()).unwrap();
    assert_eq!(schemes.len(), k);

    let mut visited = 0;
    for ((symbol, scheme), (expected_symbol, gammas)) in schemes.iter().zip(&expected) {
        assert_eq!(symbol, expected_symbol);
        let counts: Vec<usize> = scheme.levels.iter().map(|l| l.gamma_record.len()).collect();
        assert_eq!(&counts, gammas);
        visited += 1 + scheme.levels.len() + scheme.n_transitions();
    }
    assert_eq!(visited, lines.len());
}

#[test]
fn corrupt_count_reports_line() {
    // declares two levels but the second line is not a level record
    let text = [
        "  10C   10    6    2    0    2    2    4.000000    4.000000",
        "  1   0.000000   0.0  1             0        0+                  0",
        "  11C   11    6    0    0    0    0    4.000000    4.000000",
    ]
    .join("\n");

    let error = parse_levels(&text, ReaderOptions::default()).unwrap_err();
    assert!(matches!(
        error,
        Error::MalformedRecord {
            record: RecordKind::Level,
            line: 3,
            ..
        }
    ));
}

#[test]
fn missing_charge_file() {
    let error = read_charge("./data", 92, ReaderOptions::default()).unwrap_err();
    assert!(matches!(error, Error::MissingInputFile { .. }));
}
