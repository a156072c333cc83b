pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{AstroError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, validate_port, Validate,
};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_INDEX_FILE: &str = "index.html";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_LOG_FORMAT: &str = "compact";
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];
pub const PORT_ENV_VAR: &str = "PORT";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "astro-match")]
#[command(about = "Zodiac, numerology and compatibility profiles over HTTP")]
pub struct CliConfig {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (falls back to the PORT environment variable)
    #[arg(long)]
    pub port: Option<u16>,

    /// Landing page served at `/`
    #[arg(long)]
    pub index_file: Option<String>,

    /// Folder served under `/static`
    #[arg(long)]
    pub static_dir: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            host: self.host.clone(),
            port: self.port,
            index_file: self.index_file.clone(),
            static_dir: self.static_dir.clone(),
        }
    }
}

/// 命令列明確指定的值，優先於配置檔
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub index_file: Option<String>,
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub index_file: String,
    pub static_dir: String,
    pub log_format: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            index_file: DEFAULT_INDEX_FILE.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl ServerSettings {
    /// 優先順序：命令列 > 配置檔 > PORT 環境變數 (僅連接埠) > 預設值
    pub fn resolve(
        overrides: &SettingsOverrides,
        file: Option<&TomlConfig>,
        env_port: Option<&str>,
    ) -> Result<Self> {
        let defaults = Self::default();
        let file = file.cloned().unwrap_or_default();

        let port = match overrides.port.or(file.port()) {
            Some(port) => port,
            None => match env_port {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|e| AstroError::InvalidConfigValueError {
                        field: PORT_ENV_VAR.to_string(),
                        value: raw.to_string(),
                        reason: format!("Not a valid port number: {}", e),
                    })?,
                None => defaults.port,
            },
        };

        Ok(Self {
            host: overrides
                .host
                .clone()
                .or_else(|| file.host().map(str::to_string))
                .unwrap_or(defaults.host),
            port,
            index_file: overrides
                .index_file
                .clone()
                .or_else(|| file.index_file().map(str::to_string))
                .unwrap_or(defaults.index_file),
            static_dir: overrides
                .static_dir
                .clone()
                .or_else(|| file.static_dir().map(str::to_string))
                .unwrap_or(defaults.static_dir),
            log_format: file
                .log_format()
                .map(str::to_string)
                .unwrap_or(defaults.log_format),
        })
    }

    /// 讀取 `PORT` 環境變數後解析
    pub fn from_env(overrides: &SettingsOverrides, file: Option<&TomlConfig>) -> Result<Self> {
        let env_port = std::env::var(PORT_ENV_VAR).ok();
        Self::resolve(overrides, file, env_port.as_deref())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

impl ConfigProvider for ServerSettings {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn index_file(&self) -> &str {
        &self.index_file
    }

    fn static_dir(&self) -> &str {
        &self.static_dir
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        validate_port("server.port", self.port)?;
        validate_path("assets.index_file", &self.index_file)?;
        validate_path("assets.static_dir", &self.static_dir)?;
        validate_one_of("logging.format", &self.log_format, &LOG_FORMATS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ServerSettings::resolve(&SettingsOverrides::default(), None, None).unwrap();
        assert_eq!(settings, ServerSettings::default());
        assert_eq!(settings.bind_address(), "0.0.0.0:5000");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_env_port_fallback() {
        let settings =
            ServerSettings::resolve(&SettingsOverrides::default(), None, Some("8081")).unwrap();
        assert_eq!(settings.port, 8081);
    }

    #[test]
    fn test_invalid_env_port() {
        let result = ServerSettings::resolve(&SettingsOverrides::default(), None, Some("http"));
        assert!(matches!(
            result,
            Err(AstroError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_cli_overrides_file_and_env() {
        let file = TomlConfig::from_toml_str(
            r#"
[server]
host = "127.0.0.1"
port = 7000

[assets]
static_dir = "public"
"#,
        )
        .unwrap();

        let overrides = SettingsOverrides {
            port: Some(9000),
            ..Default::default()
        };
        let settings = ServerSettings::resolve(&overrides, Some(&file), Some("8081")).unwrap();

        assert_eq!(settings.port, 9000);
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.static_dir, "public");
        assert_eq!(settings.index_file, DEFAULT_INDEX_FILE);
    }

    #[test]
    fn test_file_port_beats_env() {
        let file = TomlConfig::from_toml_str("[server]\nport = 7000\n").unwrap();
        let settings =
            ServerSettings::resolve(&SettingsOverrides::default(), Some(&file), Some("8081"))
                .unwrap();
        assert_eq!(settings.port, 7000);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let settings = ServerSettings {
            port: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = ServerSettings {
            host: " ".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = ServerSettings {
            log_format: "pretty".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
