//! Configuration schema for simulation runs and event logging.
//!
//! Every field has a default, so an empty YAML document is a valid config.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unknown chance kind {name:?} (expected event_keyed or rng)")]
    UnknownChance { name: String },
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Bot game simulation settings.
    #[serde(default)]
    pub sim: SimConfig,
    /// NDJSON event log settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where dice come from during simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanceKind {
    /// Dice keyed by (seed, player, turn, roll); reproducible independent of holds.
    #[default]
    EventKeyed,
    /// Seeded ChaCha8 stream.
    Rng,
}

impl ChanceKind {
    pub fn name(self) -> &'static str {
        match self {
            ChanceKind::EventKeyed => "event_keyed",
            ChanceKind::Rng => "rng",
        }
    }
}

impl std::fmt::Display for ChanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ChanceKind {
    type Err = ConfigError;

    /// Accepts the YAML names, with `-` allowed in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('-', "_").as_str() {
            "event_keyed" => Ok(ChanceKind::EventKeyed),
            "rng" => Ok(ChanceKind::Rng),
            _ => Err(ConfigError::UnknownChance {
                name: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimConfig {
    /// Number of games per run.
    #[serde(default = "default_sim_games")]
    pub games: u32,
    /// Base seed; game `i` uses `seed + i`.
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub chance: ChanceKind,
    /// Worker threads for parallel simulation. `None` uses the global pool.
    #[serde(default)]
    pub threads: Option<usize>,
}

fn default_sim_games() -> u32 {
    1000
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: default_sim_games(),
            seed: 0,
            chance: ChanceKind::default(),
            threads: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Append NDJSON events to this file when set.
    #[serde(default)]
    pub events_path: Option<String>,
    /// Flush after this many lines; 0 flushes only on close.
    #[serde(default)]
    pub flush_every_lines: u64,
    /// Emit one `bot_turn` event per turn (otherwise only game/run events).
    #[serde(default = "default_log_turns")]
    pub log_turns: bool,
}

fn default_log_turns() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            events_path: None,
            flush_every_lines: 0,
            log_turns: default_log_turns(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_yaml_string() {
        let yaml = r#"
sim:
  games: 250
  seed: 42
  chance: rng
  threads: 4

logging:
  events_path: "runs/events.ndjson"
  flush_every_lines: 100
"#;

        let config = Config::from_yaml(yaml).expect("Failed to parse YAML");
        assert_eq!(config.sim.games, 250);
        assert_eq!(config.sim.seed, 42);
        assert_eq!(config.sim.chance, ChanceKind::Rng);
        assert_eq!(config.sim.threads, Some(4));
        assert_eq!(
            config.logging.events_path.as_deref(),
            Some("runs/events.ndjson")
        );
        assert_eq!(config.logging.flush_every_lines, 100);
        // Check defaults are applied
        assert!(config.logging.log_turns);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.sim.games, 1000);
        assert_eq!(config.sim.chance, ChanceKind::EventKeyed);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = Config::from_yaml("sim:\n  seed: 7\n").unwrap();
        assert_eq!(config.sim.seed, 7);
        assert_eq!(config.sim.games, 1000);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "sim:\n  games: 3\n  chance: event_keyed").unwrap();
        let config = Config::load(f.path()).unwrap();
        assert_eq!(config.sim.games, 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_yaml_fails() {
        let invalid_yaml = "this is not: valid: yaml: {{{}}}";
        let result = Config::from_yaml(invalid_yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_chance_kind_fails() {
        assert!(Config::from_yaml("sim:\n  chance: loaded_dice\n").is_err());
    }

    #[test]
    fn chance_kind_parses_from_cli_spelling() {
        assert_eq!("event-keyed".parse::<ChanceKind>().unwrap(), ChanceKind::EventKeyed);
        assert_eq!("event_keyed".parse::<ChanceKind>().unwrap(), ChanceKind::EventKeyed);
        assert_eq!("rng".parse::<ChanceKind>().unwrap(), ChanceKind::Rng);
        assert!(matches!(
            "dice".parse::<ChanceKind>(),
            Err(ConfigError::UnknownChance { .. })
        ));
        for kind in [ChanceKind::EventKeyed, ChanceKind::Rng] {
            assert_eq!(kind.to_string().parse::<ChanceKind>().unwrap(), kind);
        }
    }
}
