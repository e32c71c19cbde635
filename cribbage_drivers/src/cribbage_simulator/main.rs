use clap::Parser;
use cribbage_drivers::{parse_config_from_file, resolve_settings, Config};

mod simulation;

const DEFAULT_CONFIG_PATH: &str = "~/.cribbage.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// Total number of hands to simulate
    #[arg(long)]
    hand_count: Option<u64>,

    /// Number of worker threads; 0 means the machine's available parallelism
    #[arg(long)]
    worker_count: Option<usize>,

    /// Do not print Pone's dealt, kept and discarded cards
    #[arg(long)]
    hide_pone_hand: bool,

    /// Do not print Dealer's dealt, kept and discarded cards
    #[arg(long)]
    hide_dealer_hand: bool,

    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,
}

fn main() -> anyhow::Result<()> {
    let args = CommandLineArgs::parse();

    let config = if args.config == DEFAULT_CONFIG_PATH {
        // the default config file is optional; an explicitly given one is not
        let default_config_file = home::home_dir().map(|home_dir| home_dir.join(".cribbage.yml"));
        match default_config_file {
            Some(path) if path.is_file() => parse_config_from_file(&path.to_string_lossy())?,
            _ => Config::default(),
        }
    } else {
        parse_config_from_file(&args.config)?
    };

    let settings = resolve_settings(
        &config.cribbage_simulator,
        args.hand_count,
        args.worker_count,
        args.hide_pone_hand,
        args.hide_dealer_hand,
    )?;
    simulation::simulate_hands(&settings)
}
