//! Configuration Loader
//!
//! 来源优先级: `SUBWAY_*` 环境变量 > config.toml / config.local.toml > 内置默认值

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

const ENV_PREFIX: &str = "SUBWAY";
const DEFAULT_FILES: [&str; 2] = ["config", "config.local"];

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置源读取或反序列化失败
    #[error("Failed to load configuration: {0}")]
    Source(#[from] config::ConfigError),

    /// 字段取值不合法
    #[error("Invalid configuration `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// 按默认搜索路径加载配置
///
/// 环境变量层级用 `__` 分隔，例如 `SUBWAY_SERVER__PORT=9090`、
/// `SUBWAY_DATABASE__PATH=:memory:`、`SUBWAY_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 加载配置，`config_path` 给定时该文件必须存在
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = with_defaults(Config::builder())?;

    builder = match config_path {
        Some(path) => builder.add_source(File::from(path).required(true)),
        None => DEFAULT_FILES.iter().fold(builder, |b, name| {
            b.add_source(File::with_name(name).required(false))
        }),
    };

    let app_config: AppConfig = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    app_config.validate()?;
    Ok(app_config)
}

/// 以 `AppConfig::default()` 作为最低优先级来源
fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = AppConfig::default();

    Ok(builder
        .set_default("server.host", defaults.server.host)?
        .set_default("server.port", i64::from(defaults.server.port))?
        .set_default("database.path", defaults.database.path)?
        .set_default(
            "database.max_connections",
            i64::from(defaults.database.max_connections),
        )?
        .set_default("log.level", defaults.log.level)?)
}

impl AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });

        if self.server.port == 0 {
            return invalid("server.port", "must not be 0");
        }
        if self.database.path.trim().is_empty() {
            return invalid("database.path", "must not be empty");
        }
        if self.database.max_connections == 0 {
            return invalid("database.max_connections", "must be at least 1");
        }

        Ok(())
    }
}

/// 启动时输出生效配置
pub fn print_config(config: &AppConfig) {
    tracing::info!(
        addr = %config.server.addr(),
        database = %config.database.path,
        max_connections = config.database.effective_max_connections(),
        log_level = %config.log.level,
        "Configuration loaded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "server.port", .. })
        ));

        let mut config = AppConfig::default();
        config.database.path = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "database.path", .. })
        ));

        let mut config = AppConfig::default();
        config.database.max_connections = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "database.max_connections", .. })
        ));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = write_config(
            r#"
            [server]
            port = 9090

            [database]
            path = ":memory:"

            [log]
            level = "debug"
            "#,
        );

        let config = load_config_from_path(Some(file.path())).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.database.is_in_memory());
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_invalid_file_values_fail_validation() {
        let file = write_config(
            r#"
            [server]
            port = 0
            "#,
        );

        let result = load_config_from_path(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = load_config_from_path(Some(Path::new("/nonexistent/subway.toml")));
        assert!(matches!(result, Err(ConfigError::Source(_))));
    }
}
