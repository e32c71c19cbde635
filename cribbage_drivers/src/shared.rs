use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

/// Top level of the YAML config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub cribbage_simulator: ConfigCribbageSimulator,
}

/// Config of the cribbage_simulator binary. Every field is optional in the
/// file; command-line values override whatever the file says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigCribbageSimulator {
    #[serde(default = "default_hand_count")]
    pub hand_count: u64,
    /// 0 means the machine's available parallelism.
    #[serde(default)]
    pub worker_count: usize,
    #[serde(default)]
    pub hide_pone_hand: bool,
    #[serde(default)]
    pub hide_dealer_hand: bool,
}

fn default_hand_count() -> u64 {
    390000
}

impl Default for ConfigCribbageSimulator {
    fn default() -> ConfigCribbageSimulator {
        ConfigCribbageSimulator {
            hand_count: default_hand_count(),
            worker_count: 0,
            hide_pone_hand: false,
            hide_dealer_hand: false,
        }
    }
}

/// The harness settings after merging the command line over the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub hand_count: u64,
    pub worker_count: usize,
    pub hide_pone_hand: bool,
    pub hide_dealer_hand: bool,
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file(file_name: &str) -> anyhow::Result<Config> {
    let file_content = fs::read_to_string(file_name)
        .with_context(|| format!("cannot read config file {}", file_name))?;
    serde_yaml::from_str(&file_content)
        .with_context(|| format!("cannot parse config file {}", file_name))
}

/// Merges explicit command-line values over `config` and fills in whatever
/// neither side pinned down.
pub fn resolve_settings(
    config: &ConfigCribbageSimulator,
    hand_count: Option<u64>,
    worker_count: Option<usize>,
    hide_pone_hand: bool,
    hide_dealer_hand: bool,
) -> anyhow::Result<Settings> {
    let hand_count = hand_count.unwrap_or(config.hand_count);
    if hand_count == 0 {
        anyhow::bail!("hand count must be at least 1");
    }
    let worker_count = match worker_count.unwrap_or(config.worker_count) {
        0 => available_parallelism(),
        explicit => explicit,
    };
    Ok(Settings {
        hand_count,
        worker_count,
        hide_pone_hand: hide_pone_hand || config.hide_pone_hand,
        hide_dealer_hand: hide_dealer_hand || config.hide_dealer_hand,
    })
}

fn available_parallelism() -> usize {
    match std::thread::available_parallelism() {
        Ok(parallelism) => parallelism.get(),
        Err(_) => 1,
    }
}
