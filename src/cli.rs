//! Command line arguments

// standard library
use std::path::PathBuf;

// external crates
use clap::{ArgAction, Args, Parser, Subcommand};

// internal modules
use crate::config::{
    parse_charge, ChargeRange, Config, DEFAULT_CHARGES, DEFAULT_LEVELS_DIR,
    DEFAULT_MASS_TABLE, DEFAULT_OUTPUT_DIR,
};

/// Convert and query the RIPL-3 discrete level library
#[derive(Parser, Debug)]
#[command(name = "ripl3-json", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert per-charge level files into the JSON level tree
    Convert(ConvertArgs),

    /// Find the level index closest to an excitation energy
    Level(LevelArgs),

    /// Look up the mass value of a nuclide
    Mass(MassArgs),
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Directory of zNNN.dat level files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_LEVELS_DIR)]
    pub levels: PathBuf,

    /// Root directory of the JSON level tree
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Atomic numbers to convert, e.g. 12 or 1..=20
    #[arg(short, long, value_name = "RANGE", default_value = DEFAULT_CHARGES)]
    pub charges: ChargeRange,

    /// Keep only the last gamma line of each level
    #[arg(long)]
    pub retain_last_gamma: bool,
}

#[derive(Args, Debug)]
pub struct LevelArgs {
    /// Atomic number or element symbol
    #[arg(value_parser = parse_charge)]
    pub z: u32,

    /// Mass number
    pub a: u32,

    /// Excitation energy (MeV)
    #[arg(allow_negative_numbers = true)]
    pub energy: f64,

    /// Root directory of the JSON level tree
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct MassArgs {
    /// Atomic number or element symbol
    #[arg(value_parser = parse_charge)]
    pub z: u32,

    /// Mass number
    pub a: u32,

    /// Mass table, layout is chosen from the file name
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_MASS_TABLE)]
    pub table: PathBuf,
}

impl Cli {
    /// Resolve the arguments of the chosen command into a [Config]
    pub fn config(&self) -> Config {
        let config = Config {
            quiet: self.quiet,
            ..Default::default()
        };

        match &self.command {
            Command::Convert(args) => Config {
                levels_dir: args.levels.clone(),
                output_dir: args.output.clone(),
                charges: args.charges.clone(),
                ..config
            }
            .retain_last_gamma(args.retain_last_gamma),
            Command::Level(args) => Config {
                output_dir: args.output.clone(),
                ..config
            },
            Command::Mass(args) => Config {
                mass_table: args.table.clone(),
                ..config
            },
        }
    }
}
