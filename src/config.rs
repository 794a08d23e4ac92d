//! Run configuration: valid symbols, per-minute limit, output directory.
//!
//! Built-in defaults cover the standard deployment. `VALID_SYMBOLS`,
//! `ORDERS_PER_MINUTE`, and `OUTPUT_DIR` env vars override them, and
//! `CONFIG_FILE` may point at a JSON file applied before the env overrides.

use std::collections::HashSet;

/// Default valid instrument symbols.
pub const DEFAULT_VALID_SYMBOLS: [&str; 10] = [
    "BARK", "CARD", "HOOF", "LOUD", "GLOO", "YLLW", "BRIC", "KRIL", "LGHT", "VELL",
];

/// Default maximum accepted orders per broker per calendar minute.
pub const DEFAULT_ORDERS_PER_MINUTE: u32 = 3;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Pipeline configuration. Fixed for the lifetime of one run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Symbols accepted by the evaluator (exact, case-sensitive match).
    pub valid_symbols: HashSet<String>,
    /// Maximum accepted orders from one broker within a single calendar minute.
    pub orders_per_minute: u32,
    /// Directory for the four output streams; deleted and recreated per run.
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            valid_symbols: DEFAULT_VALID_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            orders_per_minute: DEFAULT_ORDERS_PER_MINUTE,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

impl Config {
    /// Builds the run configuration: `CONFIG_FILE` JSON if set and present,
    /// defaults otherwise, then env overrides on top. An unparsable
    /// `ORDERS_PER_MINUTE` value is ignored.
    pub fn from_env() -> Result<Self, String> {
        let mut config = match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::from_file(&path)?.unwrap_or_default(),
            Err(_) => Self::default(),
        };
        if let Ok(symbols) = std::env::var("VALID_SYMBOLS") {
            let parsed: HashSet<String> = symbols
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !parsed.is_empty() {
                config.valid_symbols = parsed;
            }
        }
        if let Ok(limit) = std::env::var("ORDERS_PER_MINUTE") {
            if let Ok(limit) = limit.parse() {
                config.orders_per_minute = limit;
            }
        }
        if let Ok(dir) = std::env::var("OUTPUT_DIR") {
            if !dir.is_empty() {
                config.output_dir = dir;
            }
        }
        Ok(config)
    }

    /// Loads configuration JSON. Returns `None` if the file does not exist.
    pub fn from_file(path: &str) -> Result<Option<Self>, String> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(format!("cannot read config file {}: {}", path, e)),
        };
        let config =
            serde_json::from_str(&data).map_err(|e| format!("invalid config file {}: {}", path, e))?;
        Ok(Some(config))
    }
}
