//! Configuration for a sync run
//!
//! Both file paths are required and must be resolved before any file I/O
//! begins. They come from the command line, with environment fallbacks so the
//! tool can be wired into scripts:
//!
//! - `LAYERSYNC_SOURCE`: source HTML file path
//! - `LAYERSYNC_TARGET`: target component file path
//! - `LAYERSYNC_LOG_LEVEL`: logging level - default: "info"

use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors, all raised before any file is opened
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("source path not specified. Pass SOURCE on the command line or set LAYERSYNC_SOURCE")]
    MissingSource,

    #[error("target path not specified. Pass TARGET on the command line or set LAYERSYNC_TARGET")]
    MissingTarget,

    #[error("configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Resolved configuration for one sync run
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Source file the blocks are extracted from
    pub source: PathBuf,

    /// Target file whose blocks are rewritten in place
    pub target: PathBuf,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Run the full pipeline but skip the final write
    pub dry_run: bool,
}

impl SyncConfig {
    /// Resolves configuration from explicit values with environment fallbacks.
    ///
    /// CLI arguments win over environment variables; a path available from
    /// neither is a hard error.
    pub fn resolve(source: Option<PathBuf>, target: Option<PathBuf>) -> Result<Self, ConfigError> {
        let source = source
            .or_else(|| env::var("LAYERSYNC_SOURCE").ok().map(PathBuf::from))
            .ok_or(ConfigError::MissingSource)?;

        let target = target
            .or_else(|| env::var("LAYERSYNC_TARGET").ok().map(PathBuf::from))
            .ok_or(ConfigError::MissingTarget)?;

        let log_level = env::var("LAYERSYNC_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Ok(Self {
            source,
            target,
            log_level,
            dry_run: false,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source == self.target {
            return Err(ConfigError::ValidationFailed(
                "source and target must be different files".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    other
                )))
            }
        }

        Ok(())
    }
}

impl fmt::Display for SyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Layersync Configuration:")?;
        writeln!(f, "  Source: {}", self.source.display())?;
        writeln!(f, "  Target: {}", self.target.display())?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Dry Run: {}", self.dry_run)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_explicit_paths_win() {
        let _guards = vec![
            EnvGuard::set("LAYERSYNC_SOURCE", "/env/source.html"),
            EnvGuard::set("LAYERSYNC_TARGET", "/env/target.tsx"),
        ];

        let config = SyncConfig::resolve(
            Some(PathBuf::from("/cli/source.html")),
            Some(PathBuf::from("/cli/target.tsx")),
        )
        .unwrap();

        assert_eq!(config.source, PathBuf::from("/cli/source.html"));
        assert_eq!(config.target, PathBuf::from("/cli/target.tsx"));
    }

    #[test]
    #[serial]
    fn test_env_fallback() {
        let _guards = vec![
            EnvGuard::set("LAYERSYNC_SOURCE", "/env/source.html"),
            EnvGuard::set("LAYERSYNC_TARGET", "/env/target.tsx"),
            EnvGuard::set("LAYERSYNC_LOG_LEVEL", "DEBUG"),
        ];

        let config = SyncConfig::resolve(None, None).unwrap();

        assert_eq!(config.source, PathBuf::from("/env/source.html"));
        assert_eq!(config.target, PathBuf::from("/env/target.tsx"));
        assert_eq!(config.log_level, "debug");
        assert!(!config.dry_run);
    }

    #[test]
    #[serial]
    fn test_missing_source_is_error() {
        let _guards = vec![
            EnvGuard::unset("LAYERSYNC_SOURCE"),
            EnvGuard::set("LAYERSYNC_TARGET", "/env/target.tsx"),
        ];

        let result = SyncConfig::resolve(None, None);
        assert!(matches!(result, Err(ConfigError::MissingSource)));
    }

    #[test]
    #[serial]
    fn test_missing_target_is_error() {
        let _guards = vec![
            EnvGuard::set("LAYERSYNC_SOURCE", "/env/source.html"),
            EnvGuard::unset("LAYERSYNC_TARGET"),
        ];

        let result = SyncConfig::resolve(Some(PathBuf::from("/cli/source.html")), None);
        assert!(matches!(result, Err(ConfigError::MissingTarget)));
    }

    #[test]
    fn test_validate_rejects_same_paths() {
        let config = SyncConfig {
            source: PathBuf::from("/tmp/file.html"),
            target: PathBuf::from("/tmp/file.html"),
            log_level: "info".to_string(),
            dry_run: false,
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let config = SyncConfig {
            source: PathBuf::from("/tmp/a.html"),
            target: PathBuf::from("/tmp/b.tsx"),
            log_level: "loud".to_string(),
            dry_run: false,
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_ok() {
        let config = SyncConfig {
            source: PathBuf::from("/tmp/a.html"),
            target: PathBuf::from("/tmp/b.tsx"),
            log_level: "warn".to_string(),
            dry_run: true,
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_display() {
        let config = SyncConfig {
            source: PathBuf::from("/tmp/a.html"),
            target: PathBuf::from("/tmp/b.tsx"),
            log_level: "info".to_string(),
            dry_run: false,
        };

        let display = format!("{}", config);
        assert!(display.contains("Layersync Configuration:"));
        assert!(display.contains("/tmp/a.html"));
    }
}
