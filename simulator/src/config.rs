use clap::Parser;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Functions Helpers
fn default_logs_datetime_format() -> String {
    String::from("%Y-%m-%d %H:%M:%S%.3f")
}

/// Log verbosity accepted on the command line and in config files
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, clap::Args, Serialize, Deserialize)]
pub struct LogConfig {
    /// Set log level
    #[clap(long, value_enum, default_value_t)]
    #[serde(default)]
    pub log_level: LogLevel,
    /// Also write logs to this file
    #[clap(long)]
    pub log_file: Option<String>,
    /// Disable the usage of colors in log
    #[clap(long)]
    #[serde(default)]
    pub disable_log_color: bool,
    /// Change the datetime format used by the logger
    #[clap(long, default_value_t = default_logs_datetime_format())]
    #[serde(default = "default_logs_datetime_format")]
    pub datetime_format: String,
}

#[derive(Parser, Serialize, Deserialize, Clone, Debug)]
#[clap(
    version = VERSION,
    about = "Pet Arena Simulator - replay a competition scenario against the in-memory ledger",
    long_about = r#"Pet Arena Simulator

Runs a JSON scenario (accounts, then a list of steps) against a fresh
in-memory ledger and prints the final ledger snapshot as JSON.

Example scenario:
{
  "accounts": { "alice": 1000 },
  "steps": [
    { "action": "mint", "caller": "alice", "name": "Fluffy" },
    { "action": "create_competition", "caller": "alice", "name": "Pet Olympics", "duration": 100, "stake": 10 },
    { "action": "join", "caller": "alice", "competition": 1, "pet": 1 },
    { "action": "advance_blocks", "blocks": 100 },
    { "action": "join", "caller": "alice", "competition": 1, "pet": 1, "expect_error": "Expired" }
  ]
}
"#
)]
pub struct Config {
    /// Scenario file to replay
    #[clap(long)]
    pub scenario: Option<String>,
    /// Seed for genetic tags; overrides the scenario seed
    #[clap(long)]
    pub seed: Option<u64>,
    /// Write the final snapshot to this file instead of stdout
    #[clap(long)]
    pub output: Option<String>,
    /// Log configuration
    #[clap(flatten)]
    #[serde(flatten)]
    pub log: LogConfig,
    /// JSON config file to load instead of command line arguments
    #[clap(long)]
    #[serde(skip)]
    pub config_file: Option<String>,
    /// Write the current arguments as a config template to --config-file
    #[clap(long)]
    #[serde(skip)]
    pub generate_config_template: bool,
}
