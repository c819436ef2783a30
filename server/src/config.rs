//! Application configuration.
//!
//! Values start from [`AppConfig::default`], are replaced by a YAML file when
//! `MEETING_ROOM_CONFIG` points at one, and finally `SERVER_HOST` /
//! `SERVER_PORT` override the listen address.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::backend::domain::models::floor::Floor;
use crate::backend::domain::models::schedule::{DatedBlock, ScheduleBlock};
use crate::backend::domain::{LoginConfig, TimeAxisConfig};

pub const CONFIG_PATH_ENV: &str = "MEETING_ROOM_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    /// Directory served under `/assets` when set
    pub assets_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origin: "http://localhost:8080".to_string(),
            assets_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub selected_date: NaiveDate,
    /// Pins "today" instead of reading the system clock
    pub today: Option<NaiveDate>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            selected_date: NaiveDate::from_ymd_opt(2025, 8, 8).unwrap_or_default(),
            today: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    #[serde(flatten)]
    pub axis: TimeAxisConfig,
    pub blocks: Vec<DatedBlock>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let time = |hour, minute| NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();
        Self {
            axis: TimeAxisConfig::default(),
            blocks: vec![DatedBlock {
                date: CalendarConfig::default().selected_date,
                block: ScheduleBlock {
                    title: "LMS Program Kickoff".to_string(),
                    room: Some("Ruby".to_string()),
                    start: time(10, 0),
                    end: time(11, 30),
                },
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub calendar: CalendarConfig,
    pub schedule: ScheduleConfig,
    pub floors: Vec<Floor>,
    pub login: LoginConfig,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            calendar: CalendarConfig::default(),
            schedule: ScheduleConfig::default(),
            floors: vec![
                Floor::new("floor-1", "Floor 1", &["Ruby", "Sapphire"]),
                Floor::new("floor-2", "Floor 2", &["Emerald", "Topaz"]),
                Floor::new("floor-3", "Floor 3", &["Diamond"]),
            ],
            login: LoginConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from {}", path.display());
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Apply `SERVER_HOST` / `SERVER_PORT` overrides using `lookup`
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid SERVER_PORT: {}", port))?;
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
