//! Command line front end for the RIPL-3 discrete level library
//!
//! ```text
//! ripl3-json convert --levels data/levels --output levels_json
//! ripl3-json level 12 22 1.25
//! ripl3-json mass 26 56 --table data/mass_1.mass20.txt
//! ```

// Modules
mod cli;
mod config;
mod error;

// standard library
use std::error::Error as _;

// external crates
use clap::Parser;
use kdam::{BarBuilder, BarExt};
use log::{debug, error, info};

// internal modules
use cli::{Cli, Command, LevelArgs, MassArgs};
use config::Config;
use error::{Error, Result};
use ripl::levels::{charge_file_name, read_charge, LevelStore};
use ripl::mass::read_mass_table;
use ripl::support::element::symbol;
use ripl::support::f;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&cli) {
        error!("{e}");
        let mut source = e.source();
        while let Some(cause) = source {
            error!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    debug!("{config:?}");

    match &cli.command {
        Command::Convert(_) => convert(&config).map(|_| ()),
        Command::Level(args) => level(&config, args),
        Command::Mass(args) => mass(&config, args),
    }
}

/// Convert every per-charge file in range into the JSON tree
///
/// Every file in range must exist before anything is written. A missing or
/// malformed file stops the run. Returns the number of nuclides written.
fn convert(config: &Config) -> Result<usize> {
    let store = LevelStore::new(&config.output_dir);
    info!(
        "Converting Z={} from {} into {}",
        config.charges,
        config.levels_dir.display(),
        store.root().display()
    );

    for charge in config.charges.iter() {
        let path = config.levels_dir.join(charge_file_name(charge));
        if !path.is_file() {
            return Err(ripl::levels::Error::MissingInputFile { path }.into());
        }
    }

    let mut progress = BarBuilder::default()
        .total(config.charges.len())
        .desc("Converting")
        .unit(" files")
        .disable(config.quiet)
        .build()
        .map_err(Error::Progress)?;

    let mut nuclides = 0;
    for charge in config.charges.iter() {
        let schemes = read_charge(&config.levels_dir, charge, config.reader_options)?;
        nuclides += store.persist_all(schemes.values())?;
        progress.update(1)?;
    }

    // keep the summary off the progress bar line
    if !config.quiet {
        eprintln!();
    }

    info!("Wrote {nuclides} nuclides from {} files", config.charges.len());
    Ok(nuclides)
}

/// Report the nearest level index for an excitation energy
fn level(config: &Config, args: &LevelArgs) -> Result<()> {
    let store = LevelStore::new(&config.output_dir);
    let nuclide = nuclide_name(args.z, args.a);

    match store.find_level_index(args.z, args.a, args.energy)? {
        Some(index) => println!("{nuclide} {} MeV: level index {index}", args.energy),
        None => println!("{nuclide} {} MeV: no level within tolerance", args.energy),
    }
    Ok(())
}

/// Report the mass value of a nuclide
fn mass(config: &Config, args: &MassArgs) -> Result<()> {
    let table = read_mass_table(&config.mass_table)?;
    debug!("{table}");
    let nuclide = nuclide_name(args.z, args.a);

    match table.get(args.z, args.a) {
        Some(mass) => println!("{nuclide}: {mass} MeV"),
        None => println!("{nuclide}: not in {}", config.mass_table.display()),
    }
    Ok(())
}

fn nuclide_name(z: u32, a: u32) -> String {
    match symbol(z) {
        Some(element) => f!("{a}{element}"),
        None => f!("Z={z} A={a}"),
    }
}

/// Logging to stderr, `-q` silences everything including warnings
fn init_logging(cli: &Cli) -> Result<()> {
    stderrlog::new()
        .modules([module_path!(), "ripl_levels", "ripl_mass", "ripl_support"])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 2)
        .show_level(cli.verbose > 0)
        .init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::ChargeRange;
    use tempfile::TempDir;

    const HYDROGEN: &str = concat!(
        "   1H    1    1    1    0    1    1    0.000000    0.000000\n",
        "  1   0.000000   0.5  1             0        1/2+                0\n",
    );

    /// Level directory holding only z001.dat, and a config converting `charges`
    fn setup(charges: &str) -> (TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let levels = dir.path().join("levels");
        std::fs::create_dir(&levels).unwrap();
        std::fs::write(levels.join("z001.dat"), HYDROGEN).unwrap();

        let config = Config {
            levels_dir: levels,
            output_dir: dir.path().join("levels_json"),
            charges: charges.parse::<ChargeRange>().unwrap(),
            quiet: true,
            ..Default::default()
        };
        (dir, config)
    }

    #[test]
    fn convert_single_charge() {
        let (_dir, config) = setup("1");
        assert_eq!(convert(&config).unwrap(), 1);
        assert!(config.output_dir.join("H").join("1H.json").is_file());
    }

    #[test]
    fn missing_charge_file_is_fatal() {
        let (_dir, config) = setup("1..=2");
        let error = convert(&config).unwrap_err();

        match error {
            Error::Levels(ripl::levels::Error::MissingInputFile { path }) => {
                assert_eq!(path, config.levels_dir.join("z002.dat"));
            }
            other => panic!("unexpected error {other:?}"),
        }

        // nothing is written for the charges that were present
        assert!(!config.output_dir.exists());
    }
}
