//! Startup configuration.
//!
//! Values come from the process environment, after `connection.env` in the
//! working directory has been loaded if it exists. Real environment
//! variables take precedence over the file.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `DB_URL` | Persistence target. Unset or empty runs validate-only. | unset |
//! | `PLATFORM` | Deployment environment. `dev` enables `POST /admin/reset`. | unset |
//! | `CHIRPY_ADDR` | Bind address. | `0.0.0.0:8080` |
//! | `CHIRPY_ASSETS` | Root directory for `/app/`. | `.` |

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::debug;

/// File loaded into the environment before reading variables.
pub const ENV_FILE: &str = "connection.env";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Configuration errors. Any of these aborts startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CHIRPY_ADDR `{value}` is not a socket address: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("DB_URL `{0}` names an unsupported store; only `memory:` is available")]
    UnsupportedStore(String),

    #[error("failed to load connection.env: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// Deployment environment, from `PLATFORM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Dev,
    Other(String),
}

impl Platform {
    pub fn parse(raw: &str) -> Self {
        if raw == "dev" { Self::Dev } else { Self::Other(raw.to_owned()) }
    }

    /// Whether administrative resets are allowed.
    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dev => f.write_str("dev"),
            Self::Other(name) if name.is_empty() => f.write_str("<unset>"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Where rows are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    /// No persistence: only validation and moderation are served.
    Disabled,
    /// Rows live in process memory.
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub platform: Platform,
    pub store: StoreTarget,
    pub assets: PathBuf,
}

impl Config {
    /// Loads `connection.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::from_filename(ENV_FILE) {
            Ok(path) => debug!(path = %path.display(), "loaded env file"),
            Err(e) if e.not_found() => debug!("no {ENV_FILE}, using process environment"),
            Err(e) => return Err(e.into()),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_raw = lookup("CHIRPY_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = addr_raw
            .parse()
            .map_err(|source| ConfigError::InvalidAddr { value: addr_raw.clone(), source })?;

        let platform = Platform::parse(&lookup("PLATFORM").unwrap_or_default());
        let store = parse_store(lookup("DB_URL").as_deref().unwrap_or_default())?;
        let assets = lookup("CHIRPY_ASSETS")
            .filter(|p| !p.is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);

        Ok(Self { addr, platform, store, assets })
    }
}

fn parse_store(url: &str) -> Result<StoreTarget, ConfigError> {
    let url = url.trim();
    if url.is_empty() {
        return Ok(StoreTarget::Disabled);
    }
    if url == "memory:" || url.starts_with("memory://") {
        return Ok(StoreTarget::Memory);
    }
    Err(ConfigError::UnsupportedStore(url.to_owned()))
}
