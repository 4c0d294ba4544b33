use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub ledger: LedgerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LedgerConfig {
    /// Заполнить склад демонстрационными материалами при старте
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
    /// Разрешить списание сверх остатка (отрицательный остаток)
    #[serde(default = "default_true")]
    pub allow_negative_stock: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Фильтр tracing, если не задан RUST_LOG
    pub filter: String,
    /// Каталог для файла лога
    pub log_dir: String,
}

fn default_true() -> bool {
    true
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[ledger]
seed_demo_data = true
allow_negative_stock = true

[logging]
filter = "info"
log_dir = "target/logs"
"#;

impl Config {
    /// Адрес для запуска HTTP сервера
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address '{}': {}", addr, e))
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Logging is not initialized yet at this point, so the returned note
/// describes where the config came from and is logged by the caller.
pub fn load_config() -> anyhow::Result<(Config, String)> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                let config = parse_config(&contents)?;
                return Ok((config, format!("Loaded config from: {}", config_path.display())));
            }
        }
    }

    let config = parse_config(DEFAULT_CONFIG)?;
    Ok((config, "Using default embedded configuration".to_string()))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Get the log directory from configuration
/// Resolves relative paths relative to the current directory
pub fn get_log_dir(config: &Config) -> anyhow::Result<PathBuf> {
    let log_dir = Path::new(&config.logging.log_dir);
    if log_dir.is_absolute() {
        return Ok(log_dir.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(log_dir))
}
