use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Local development endpoint of the planning service
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

pub const API_URL_ENV: &str = "TRIPPLAN_API_URL";
pub const DATA_PATH_ENV: &str = "TRIPPLAN_PATH";

const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TRIPPLAN_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.tripplan
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(DATA_PATH_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("tripplan"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".tripplan"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Where the planning-service base URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiUrlSource {
    Flag,
    Environment,
    ConfigFile,
    Default,
}

impl fmt::Display for ApiUrlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ApiUrlSource::Flag => "--api-url flag",
            ApiUrlSource::Environment => API_URL_ENV,
            ApiUrlSource::ConfigFile => CONFIG_FILE,
            ApiUrlSource::Default => "default",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedApiUrl {
    pub url: String,
    pub source: ApiUrlSource,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    /// Pick the planning-service base URL: flag, then environment, then config file, then default.
    ///
    /// Blank values count as unset at every level.
    pub fn resolve_api_url(&self, flag: Option<&str>, env_value: Option<&str>) -> ResolvedApiUrl {
        let candidates = [
            (flag, ApiUrlSource::Flag),
            (env_value, ApiUrlSource::Environment),
            (self.api_base_url.as_deref(), ApiUrlSource::ConfigFile),
        ];

        candidates
            .into_iter()
            .find_map(|(value, source)| {
                value
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|url| ResolvedApiUrl {
                        url: url.to_string(),
                        source,
                    })
            })
            .unwrap_or_else(|| ResolvedApiUrl {
                url: DEFAULT_API_BASE_URL.to_string(),
                source: ApiUrlSource::Default,
            })
    }

    /// Same as [`Config::resolve_api_url`], reading TRIPPLAN_API_URL from the process environment
    pub fn resolve_api_url_from_env(&self, flag: Option<&str>) -> ResolvedApiUrl {
        let env_value = std::env::var(API_URL_ENV).ok();
        self.resolve_api_url(flag, env_value.as_deref())
    }
}
