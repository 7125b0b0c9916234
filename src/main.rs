use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use horde_spawn::cli::{self, RollOptions};
use horde_spawn::types::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "horde-spawn")]
#[command(about = "Convert 40K Horde Mode spawn tables from Excel to JSON.")]
#[command(long_about = "Horde Spawn - spawn table converter and roller

Run with no arguments to convert the master spawn table workbook
(40KHordeModeSpawnTablesMasterv1.0.xlsx) into server/data/spawn_tables.json.

WORKBOOK LAYOUT:
  One sheet per faction ('MASTER BLANK' is the template and is skipped)
  Rows 1-2 are headers
  Columns B, D, F, H hold the 3-4, 5-6, 7-9 and 10+ bracket units

COMMANDS:
  convert   - Workbook to spawn table JSON (default)
  roll      - Roll horde spawns for a faction
  factions  - List factions in a spawn table JSON

EXAMPLES:
  horde-spawn
  horde-spawn convert -i tables.xlsx -o spawn_tables.json
  horde-spawn roll --faction Orks --round 3 --points 2000
  RUST_LOG=horde_spawn=debug horde-spawn     # Show skipped cells")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,
}

#[derive(Args)]
struct ConvertArgs {
    /// Spawn table workbook (.xlsx, .xls, .ods)
    #[arg(short, long, env = "HORDE_SPAWN_INPUT", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// JSON file to write (its directory must exist)
    #[arg(short, long, env = "HORDE_SPAWN_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// List every unit and log skipped cells
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a spawn table workbook to JSON
    Convert(ConvertArgs),

    #[command(long_about = "Roll horde spawns for a faction.

Each spawning zone rolls 2D6 plus the battle round modifier (+0 in rounds
1-2, +1 in rounds 3-4, +2 from round 5) and any extra modifier. The
modified roll picks a bracket and a unit is drawn from it at random.
An unmodified 2 never spawns.

ZONES:
  --zones N       Roll N zones
  --points 1000   2 zones (any other points limit: 4 zones)
  (neither)       1 zone")]
    /// Roll horde spawns for a faction
    Roll {
        /// Faction name, as in the spawn tables
        #[arg(short, long)]
        faction: String,

        /// Battle round (1 or later)
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        round: u32,

        /// Extra modifier added to every roll
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        modifier: i32,

        /// Number of spawning zones to roll for
        #[arg(short, long, conflicts_with = "points")]
        zones: Option<usize>,

        /// Game points limit (1000 points = 2 zones, otherwise 4)
        #[arg(short, long)]
        points: Option<u32>,

        /// Spawn table JSON
        #[arg(short, long, env = "HORDE_SPAWN_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
        tables: PathBuf,

        /// Seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List factions in a spawn table JSON
    Factions {
        /// Spawn table JSON
        #[arg(short, long, env = "HORDE_SPAWN_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
        tables: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "horde_spawn=debug"
    } else {
        "horde_spawn=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let verbose = match &cli.command {
        Some(Commands::Convert(args)) => args.verbose,
        Some(_) => false,
        None => cli.convert.verbose,
    };
    init_tracing(verbose);

    match cli.command.unwrap_or(Commands::Convert(cli.convert)) {
        Commands::Convert(ConvertArgs {
            input,
            output,
            verbose,
        }) => cli::convert(input.clone(), output, verbose)
            .with_context(|| format!("Failed to convert {}", input.display())),

        Commands::Roll {
            faction,
            round,
            modifier,
            zones,
            points,
            tables,
            seed,
            json,
        } => cli::roll(RollOptions {
            tables,
            faction,
            round,
            modifier,
            zones,
            points,
            seed,
            json,
        })
        .context("Spawn roll failed"),

        Commands::Factions { tables } => {
            cli::factions(tables.clone()).with_context(|| format!("Failed to read {}", tables.display()))
        }
    }
}
