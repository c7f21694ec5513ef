use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub targets: TargetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

/// Current-user descriptor handed to the frontend. Supplied by the
/// deployment; the dashboard never manages credentials itself.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

/// Sales targets keyed by stable entity code, with per-tier defaults for
/// entities without an explicit entry.
#[derive(Debug, Deserialize, Clone)]
pub struct TargetsConfig {
    #[serde(default = "default_company_target")]
    pub company_default: f64,
    #[serde(default = "default_branch_target")]
    pub branch_default: f64,
    #[serde(default = "default_product_target")]
    pub product_default: f64,
    #[serde(default)]
    pub company: HashMap<String, f64>,
    #[serde(default)]
    pub branch: HashMap<String, f64>,
    #[serde(default)]
    pub product: HashMap<String, f64>,
}

fn default_company_target() -> f64 {
    50_000.0
}

fn default_branch_target() -> f64 {
    20_000.0
}

fn default_product_target() -> f64 {
    5_000.0
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            company_default: default_company_target(),
            branch_default: default_branch_target(),
            product_default: default_product_target(),
            company: HashMap::new(),
            branch: HashMap::new(),
            product: HashMap::new(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/app.db"

[session]
user_name = "Demo User"
user_email = "demo@example.com"

[targets]
company_default = 50000.0
branch_default = 20000.0
product_default = 5000.0

[targets.company]
"CMP-TECHCORP" = 100000.0
"CMP-RETAILMAX" = 80000.0
"CMP-FASHION" = 60000.0

[targets.branch]
"BR-CENTRAL" = 50000.0
"BR-CORDOBA" = 30000.0
"BR-ROSARIO" = 20000.0
"BR-PRINCIPAL" = 60000.0
"BR-NORTE" = 25000.0
"BR-CCOMERCIAL" = 15000.0
"BR-BOUTIQUE" = 30000.0
"BR-PALERMO" = 20000.0
"BR-TCORDOBA" = 10000.0
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Install the loaded config as the process-wide config.
pub fn init(config: Config) -> anyhow::Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Config already initialized"))
}

pub fn get() -> &'static Config {
    CONFIG.get().expect("Config has not been initialized")
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(db_path);
            return Ok(resolved_path);
        }
    }

    // Fallback: use relative to current directory
    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
        assert_eq!(config.targets.company_default, 50_000.0);
        assert_eq!(
            config.targets.company.get("CMP-TECHCORP").copied(),
            Some(100_000.0)
        );
    }

    #[test]
    fn test_targets_defaults_when_section_missing() {
        let config: Config = toml::from_str("[database]\npath = \"x.db\"").unwrap();
        assert_eq!(config.targets.company_default, 50_000.0);
        assert_eq!(config.targets.branch_default, 20_000.0);
        assert_eq!(config.targets.product_default, 5_000.0);
        assert!(config.targets.branch.is_empty());
    }
}
