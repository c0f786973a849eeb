//! c45
//!
//! Build a decision tree from a tab separated table of features and write
//! one decision rule per leaf.
//!
//! Usage:
//!   c45 weather.tsv Play decision.txt --max 5
//!
//! Logging is controlled by `RUST_LOG`, or raised with `-v`/`-vv`.

use c45::constants::{DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT};
use c45::errors::C45Error;
use c45::loader::induce_rules;
use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "c45")]
#[command(about = "Build a decision tree from a table of features")]
#[command(version)]
struct Args {
    /// The file to process
    #[arg(value_name = "inputFileName")]
    input: PathBuf,

    /// The column that holds the expected result
    #[arg(value_name = "targetColumn")]
    target: String,

    /// The name of the file that will hold the results
    #[arg(value_name = "outputFileName", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// The maximum depth the features will split
    #[arg(
        long = "max",
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    max_depth: usize,

    /// Also save the fitted tree as json
    #[arg(long)]
    json: Option<PathBuf>,

    /// Increase logging verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: &Args) -> Result<(), C45Error> {
    let tree = induce_rules(&args.input, &args.output, &args.target, args.max_depth)?;

    if let Some(path) = &args.json {
        tree.save_tree(path)?;
        info!("Saved the tree to {}.", path.display());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        match e {
            C45Error::InvalidTargetColumn(col) => eprintln!("{} is not a valid column. Exiting.", col),
            e => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
