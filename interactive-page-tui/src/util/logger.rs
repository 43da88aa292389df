//! 日志初始化
//!
//! 终端被界面占用，日志只写入文件

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::Result;
use log::LevelFilter;

use crate::backend::LoggingConfig;

/// 解析日志级别，无法识别时使用 Info
pub fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// 默认日志文件：<系统缓存目录>/interactive-page/interactive-page.log
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("interactive-page").join("interactive-page.log"))
}

/// 初始化文件日志
///
/// 返回实际写入的文件路径；无法打开日志文件时不记录日志，返回 `Ok(None)`
pub fn init_logger(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    let level = parse_level(&config.level);
    if level == LevelFilter::Off {
        return Ok(None);
    }

    let Some(path) = config.file.clone().or_else(default_log_path) else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return Ok(None);
        }
    }

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return Ok(None);
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(level)
        .chain(file)
        .apply()?;

    log::info!("Logger initialized with level: {level}");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("verbose"), LevelFilter::Info);
        assert_eq!(parse_level(""), LevelFilter::Info);
    }

    #[test]
    fn test_off_level_skips_logger() {
        let config = LoggingConfig {
            level: "off".to_string(),
            file: None,
        };
        assert!(matches!(init_logger(&config), Ok(None)));
    }

    #[test]
    fn test_unopenable_file_disables_logging() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: Some(dir.path().to_path_buf()),
        };
        assert!(matches!(init_logger(&config), Ok(None)));
    }
}
