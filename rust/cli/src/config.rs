//! Layered configuration: defaults, then a TOML file named by
//! `FAIRDEAL_CONFIG`, then `FAIRDEAL_*` environment variables.

use serde::{Deserialize, Serialize};
use std::fs;

/// Most seats a hold'em table is dealt to here (29 cards with the board).
pub const MAX_SEATS: u8 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seats: u8,
    pub seed: Option<String>,
    pub ascii: bool,
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
    pub seats: ValueSource,
    pub seed: ValueSource,
    pub ascii: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seats: ValueSource::Default,
            seed: ValueSource::Default,
            ascii: ValueSource::Default,
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
            seats: 6,
            seed: None,
            ascii: false,
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

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FAIRDEAL_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seats {
            cfg.seats = v;
            sources.seats = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ascii {
            cfg.ascii = v;
            sources.ascii = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("FAIRDEAL_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Env;
    }
    if let Ok(seats) = std::env::var("FAIRDEAL_SEATS")
        && !seats.is_empty()
    {
        cfg.seats = seats
            .parse()
            .map_err(|_| ConfigError::Invalid("FAIRDEAL_SEATS is not a number".into()))?;
        sources.seats = ValueSource::Env;
    }
    if let Ok(ascii) = std::env::var("FAIRDEAL_ASCII")
        && !ascii.is_empty()
    {
        cfg.ascii = parse_bool(&ascii)
            .ok_or_else(|| ConfigError::Invalid("FAIRDEAL_ASCII is not a boolean".into()))?;
        sources.ascii = ValueSource::Env;
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
    seats: Option<u8>,
    #[serde(default)]
    seed: Option<String>,
    #[serde(default)]
    ascii: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.seats == 0 || cfg.seats > MAX_SEATS {
        return Err(ConfigError::Invalid(format!(
            "seats must be between 1 and {}",
            MAX_SEATS
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvVars(Vec<&'static str>);

    impl EnvVars {
        fn set(pairs: &[(&'static str, &str)]) -> Self {
            for (k, v) in pairs {
                // SAFETY: tests touching the environment are #[serial]
                unsafe { std::env::set_var(k, v) };
            }
            EnvVars(pairs.iter().map(|(k, _)| *k).collect())
        }
    }

    impl Drop for EnvVars {
        fn drop(&mut self) {
            for k in &self.0 {
                unsafe { std::env::remove_var(k) };
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_without_environment() {
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.seats, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fairdeal.toml");
        std::fs::write(&path, "seats = 9\nseed = \"from-file\"\nascii = true\n").unwrap();
        let path = path.to_string_lossy().into_owned();
        let _env = EnvVars::set(&[("FAIRDEAL_CONFIG", &path), ("FAIRDEAL_SEED", "from-env")]);

        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config.seats, 9);
        assert_eq!(resolved.sources.seats, ValueSource::File);
        assert_eq!(resolved.config.seed.as_deref(), Some("from-env"));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert!(resolved.config.ascii);
    }

    #[test]
    #[serial]
    fn rejects_out_of_range_seats() {
        let _env = EnvVars::set(&[("FAIRDEAL_SEATS", "11")]);
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn rejects_bad_bool() {
        let _env = EnvVars::set(&[("FAIRDEAL_ASCII", "maybe")]);
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn parse_bool_variants() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("2"), None);
    }
}
