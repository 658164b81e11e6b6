use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;
use tripplan_runtime::config::resolve_data_dir;
use tripplan_runtime::{
    Clock, Config, DeferredPlanningClient, ResolvedApiUrl, SystemClock, TripRequestForm,
};
use tripplan_types::parse_iso_date;

use crate::types::OutputFormat;

pub const TODAY_ENV: &str = "TRIPPLAN_TODAY";

/// Today as seen by the CLI: the machine's date unless pinned by `--today` or TRIPPLAN_TODAY
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliClock {
    System,
    Pinned(NaiveDate),
}

impl CliClock {
    pub fn resolve(flag: Option<&str>) -> Result<Self> {
        let env_value = std::env::var(TODAY_ENV).ok();
        let Some(raw) = flag.or(env_value.as_deref()).filter(|v| !v.trim().is_empty()) else {
            return Ok(CliClock::System);
        };

        let date = parse_iso_date(raw.trim())
            .with_context(|| format!("Invalid date for today: '{}' (expected YYYY-MM-DD)", raw))?;
        Ok(CliClock::Pinned(date))
    }
}

impl Clock for CliClock {
    fn today(&self) -> NaiveDate {
        match self {
            CliClock::System => SystemClock.today(),
            CliClock::Pinned(date) => *date,
        }
    }
}

/// Everything a handler needs, resolved once per invocation
pub struct AppContext {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
    pub api_url: ResolvedApiUrl,
    pub clock: CliClock,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn load(
        data_dir: Option<&str>,
        api_url_flag: Option<&str>,
        today_flag: Option<&str>,
        format: OutputFormat,
    ) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir)?;
        let config_path = Config::path_in(&data_dir);
        let config = Config::load_from(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;
        let api_url = config.resolve_api_url_from_env(api_url_flag);
        let clock = CliClock::resolve(today_flag)?;

        Ok(Self {
            data_dir,
            config_path,
            config,
            api_url,
            clock,
            format,
        })
    }

    pub fn new_form(&self) -> TripRequestForm<CliClock> {
        TripRequestForm::with_clock(self.clock)
    }

    /// A bad base URL is reported by the submission, not here
    pub fn planning_client(&self) -> DeferredPlanningClient {
        DeferredPlanningClient::new(self.api_url.url.clone())
    }

    /// Single-threaded runtime for the one network call a submission makes
    pub fn async_runtime(&self) -> Result<tokio::runtime::Runtime> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")
    }
}
