use crate::core::calculator::balance::{Baseline, BaselinePolicy};
use crate::errors::{AppError, AppResult};
use crate::models::day_type::DayType;
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_duration_to_minutes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Expected length of a workday, e.g. `8h` or `7h30m`.
    #[serde(default = "default_work_day")]
    pub work_day: String,
    /// Expected minutes per day type: `target` or a duration.
    #[serde(default = "default_baselines")]
    pub baselines: BTreeMap<String, String>,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
}

fn default_work_day() -> String {
    "8h".to_string()
}

fn default_baselines() -> BTreeMap<String, String> {
    DayType::ALL
        .iter()
        .map(|t| {
            let v = if t.is_work() { "target" } else { "0h" };
            (t.to_db_str().to_string(), v.to_string())
        })
        .collect()
}

fn default_show_weekday() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            work_day: default_work_day(),
            baselines: default_baselines(),
            show_weekday: default_show_weekday(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hhreg")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".hhreg")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hhreg.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("hhreg.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn work_day_minutes(&self) -> AppResult<i64> {
        parse_duration_to_minutes(&self.work_day)
    }

    /// Build the baseline mapping the report uses.
    pub fn baseline_policy(&self) -> AppResult<BaselinePolicy> {
        let mut policy = BaselinePolicy::new(self.work_day_minutes()?);

        for (key, value) in &self.baselines {
            let day_type = DayType::from_code(key).ok_or_else(|| {
                AppError::Config(format!("Unknown day type '{}' in baselines", key))
            })?;
            policy = policy.with_baseline(day_type, Baseline::parse(value)?);
        }

        Ok(policy)
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was set up.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::database_file()
        };

        let config = Self::with_database(db_path.clone());

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
