//! 配置服务
//!
//! 配置文件为 TOML，只读不写。文件不存在时使用默认配置。

use std::path::{Path, PathBuf};

use interactive_page_core::PageMarkup;
use serde::Deserialize;
use thiserror::Error;

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "INTERACTIVE_PAGE_CONFIG";

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    /// 自定义页面结构；为空时使用内置页面
    pub markup: Option<PageMarkup>,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    /// 按环境变量、系统配置目录的顺序确定配置文件位置
    pub fn new() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("interactive-page").join("config.toml")));

        match path {
            Some(path) => Self::with_path(path),
            None => Self { path: None },
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let Some(path) = &self.path else {
            return Ok(AppConfig::default());
        };

        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("absent.toml"));

        let config = service.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(config.markup.is_none());
    }

    #[test]
    fn test_load_logging_and_markup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[logging]
level = "debug"
file = "/tmp/page.log"

[markup.tabs]
controls = [{ id = "a", label = "A", target = "pa", active = true }]
panels = [{ id = "pa", content = "Panel A", active = true }]
"#,
        )
        .unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/page.log")));

        let markup = config.markup.unwrap();
        assert_eq!(markup.tabs.controls.len(), 1);
        assert_eq!(markup.tabs.panels[0].content, "Panel A");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging\nlevel = ").unwrap();

        let err = LocalConfigService::with_path(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_directory_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalConfigService::with_path(dir.path()).load().unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
