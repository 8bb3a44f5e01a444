//! Settings resolution: defaults, then the TOML file named by `FELT_CONFIG`,
//! then `FELT_*` environment variables. Every field remembers where its value
//! came from so `felt cfg` can report it.

use felt_engine::config::{BotSeat, DEFAULT_RAISE, Difficulty, TableConfig, default_bots};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default bot think time before each bot action.
pub const DEFAULT_THINK_MS: u64 = 1_500;

/// Default location of the human's chip balance.
pub const DEFAULT_CHIPS_FILE: &str = "felt-chips.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub difficulty: Difficulty,
    pub default_raise: u32,
    pub bots: Vec<BotSeat>,
    pub think_ms: u64,
    pub chips_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub difficulty: ValueSource,
    pub default_raise: ValueSource,
    pub bots: ValueSource,
    pub think_ms: ValueSource,
    pub chips_file: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            difficulty: ValueSource::Default,
            default_raise: ValueSource::Default,
            bots: ValueSource::Default,
            think_ms: ValueSource::Default,
            chips_file: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            difficulty: Difficulty::Medium,
            default_raise: DEFAULT_RAISE,
            bots: default_bots(),
            think_ms: DEFAULT_THINK_MS,
            chips_file: PathBuf::from(DEFAULT_CHIPS_FILE),
        }
    }
}

impl Config {
    /// The table the engine is constructed with.
    pub fn table_config(&self) -> TableConfig {
        TableConfig {
            difficulty: self.difficulty,
            default_raise: self.default_raise,
            bots: self.bots.clone(),
            ..TableConfig::default()
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FELT_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.difficulty {
            cfg.difficulty = v;
            sources.difficulty = ValueSource::File;
        }
        if let Some(v) = f.default_raise {
            cfg.default_raise = v;
            sources.default_raise = ValueSource::File;
        }
        if let Some(v) = f.bots {
            cfg.bots = v;
            sources.bots = ValueSource::File;
        }
        if let Some(v) = f.think_ms {
            cfg.think_ms = v;
            sources.think_ms = ValueSource::File;
        }
        if let Some(v) = f.chips_file {
            cfg.chips_file = v;
            sources.chips_file = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("FELT_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(diff) = std::env::var("FELT_DIFFICULTY")
        && !diff.is_empty()
    {
        cfg.difficulty = diff
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("{}", e)))?;
        sources.difficulty = ValueSource::Env;
    }
    if let Ok(raise) = std::env::var("FELT_RAISE")
        && !raise.is_empty()
    {
        cfg.default_raise = raise
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid raise '{}'", raise)))?;
        sources.default_raise = ValueSource::Env;
    }
    if let Ok(ms) = std::env::var("FELT_THINK_MS")
        && !ms.is_empty()
    {
        cfg.think_ms = ms
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid think time '{}'", ms)))?;
        sources.think_ms = ValueSource::Env;
    }
    if let Ok(path) = std::env::var("FELT_CHIPS_FILE")
        && !path.is_empty()
    {
        cfg.chips_file = PathBuf::from(path);
        sources.chips_file = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    default_raise: Option<u32>,
    #[serde(default)]
    bots: Option<Vec<BotSeat>>,
    #[serde(default)]
    think_ms: Option<u64>,
    #[serde(default)]
    chips_file: Option<PathBuf>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.table_config()
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write as _;

    const VARS: [&str; 6] = [
        "FELT_CONFIG",
        "FELT_SEED",
        "FELT_DIFFICULTY",
        "FELT_RAISE",
        "FELT_THINK_MS",
        "FELT_CHIPS_FILE",
    ];

    fn clear_env() {
        for v in VARS {
            unsafe {
                std::env::remove_var(v);
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_without_file_or_env() {
        clear_env();
        let r = load_with_sources().unwrap();
        assert_eq!(r.config, Config::default());
        assert_eq!(r.sources.difficulty, ValueSource::Default);
        assert_eq!(r.config.bots.len(), 3);
        assert_eq!(r.config.think_ms, 1_500);
    }

    #[test]
    #[serial]
    fn file_then_env_precedence() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 9\ndifficulty = \"hard\"\ndefault_raise = 100\n").unwrap();
        writeln!(file, "[[bots]]\nname = \"Ana\"\ndifficulty = \"easy\"").unwrap();
        unsafe {
            std::env::set_var("FELT_CONFIG", file.path());
            std::env::set_var("FELT_DIFFICULTY", "easy");
        }

        let r = load_with_sources().unwrap();
        clear_env();

        assert_eq!(r.config.seed, Some(9));
        assert_eq!(r.sources.seed, ValueSource::File);
        assert_eq!(r.config.default_raise, 100);
        assert_eq!(r.config.difficulty, Difficulty::Easy);
        assert_eq!(r.sources.difficulty, ValueSource::Env);
        assert_eq!(r.config.bots, vec![BotSeat::new("Ana", Some(Difficulty::Easy))]);
        assert_eq!(r.sources.bots, ValueSource::File);
        assert_eq!(r.sources.think_ms, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn normal_is_accepted_for_medium() {
        clear_env();
        unsafe {
            std::env::set_var("FELT_DIFFICULTY", "normal");
        }
        let r = load();
        clear_env();
        assert_eq!(r.unwrap().difficulty, Difficulty::Medium);
    }

    #[test]
    #[serial]
    fn bad_env_values_are_rejected() {
        clear_env();
        unsafe {
            std::env::set_var("FELT_SEED", "abc");
        }
        let r = load();
        clear_env();
        assert!(matches!(r, Err(ConfigError::Invalid(_))));

        unsafe {
            std::env::set_var("FELT_RAISE", "0");
        }
        let r = load();
        clear_env();
        assert!(matches!(r, Err(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn too_many_bots_in_file_is_invalid() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for name in ["A", "B", "C", "D"] {
            writeln!(file, "[[bots]]\nname = \"{}\"", name).unwrap();
        }
        unsafe {
            std::env::set_var("FELT_CONFIG", file.path());
        }
        let r = load();
        clear_env();
        assert!(matches!(r, Err(ConfigError::Invalid(_))));
    }
}
