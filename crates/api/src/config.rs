use std::path::PathBuf;
use std::str::FromStr;

/// A configuration variable that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running from the repository root
/// with the dataset in `./data` and the charts in `./img`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8501`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the four dataset CSV files.
    pub data_dir: PathBuf,
    /// Directory holding the precomputed chart images.
    pub img_dir: PathBuf,
    /// Rows shown in each dataset preview (default: `5`).
    pub sample_rows: usize,
    /// Seed of the character sample, so every render shows the same rows.
    pub sample_seed: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `8501`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:8501` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `DATA_DIR`             | `./data`                |
    /// | `IMG_DIR`              | `./img`                 |
    /// | `SAMPLE_ROWS`          | `5`                     |
    /// | `SAMPLE_SEED`          | `42`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.into());

        let cors_origins = var("CORS_ORIGINS", "http://localhost:8501")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: parse("PORT", var("PORT", "8501"), "a valid u16")?,
            cors_origins,
            request_timeout_secs: parse(
                "REQUEST_TIMEOUT_SECS",
                var("REQUEST_TIMEOUT_SECS", "30"),
                "a valid u64",
            )?,
            data_dir: PathBuf::from(var("DATA_DIR", "./data")),
            img_dir: PathBuf::from(var("IMG_DIR", "./img")),
            sample_rows: parse("SAMPLE_ROWS", var("SAMPLE_ROWS", "5"), "a valid usize")?,
            sample_seed: parse("SAMPLE_SEED", var("SAMPLE_SEED", "42"), "a valid u64")?,
        })
    }
}

fn parse<T: FromStr>(var: &'static str, value: String, expected: &'static str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        var,
        value,
        expected,
    })
}
