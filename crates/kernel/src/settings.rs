use std::path::PathBuf;

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "BOOKSHELF_ENV";
const CONFIG_DIR_ENV: &str = "BOOKSHELF_CONFIG_DIR";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

/// Top-level configuration structure loaded from layered sources.
///
/// The `database` section has no defaults: the connection string and
/// database name must be supplied at startup, and their absence aborts
/// the process.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                // Default to repo root `config` directory.
                std::env::current_dir()
                    .map(|cwd| cwd.join("config"))
                    .expect("unable to resolve current directory")
            });

        let base_path = config_dir.join("base.toml");
        let environment_filename = format!("{}.toml", environment);
        let environment_path = config_dir.join(environment_filename);

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                // Double underscore separates nesting levels so that keys
                // containing underscores (request_timeout_ms) stay addressable,
                // e.g. BOOKSHELF_SERVER__REQUEST_TIMEOUT_MS.
                config::Environment::with_prefix("BOOKSHELF")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg.try_deserialize().with_context(|| {
            "failed to deserialize configuration; database.url and database.name \
             (BOOKSHELF_DATABASE__URL, BOOKSHELF_DATABASE__NAME) are required"
        })?;

        // Override environment field with parsed enum variant.
        settings.environment = match environment.as_str() {
            "local" => Environment::Local,
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            other => {
                return Err(anyhow!(
                    "unsupported environment '{}'; expected local/staging/production",
                    other
                ));
            }
        };

        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "ServerSettings::default_host")]
    pub host: String,
    #[serde(default = "ServerSettings::default_port")]
    pub port: u16,
    #[serde(default = "ServerSettings::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ServerSettings {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_request_timeout_ms() -> u64 {
        15000
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            request_timeout_ms: Self::default_request_timeout_ms(),
        }
    }
}

/// Record store connection parameters. Both fields are required; the
/// endpoint scheme selects the storage engine (`mem://` ships in-process).
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default = "TelemetrySettings::default_filter")]
    pub filter: String,
}

impl TelemetrySettings {
    fn default_filter() -> String {
        "info".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            filter: Self::default_filter(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_db() -> Settings {
        Settings {
            environment: Environment::default(),
            server: ServerSettings::default(),
            database: DatabaseSettings {
                url: "mem://localhost".to_string(),
                name: "books".to_string(),
            },
            telemetry: TelemetrySettings::default(),
        }
    }

    #[test]
    fn default_environment_is_local() {
        let settings = settings_with_db();
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn default_server_binds_all_interfaces() {
        let settings = settings_with_db();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn missing_database_section_is_rejected() {
        let cfg = config::Config::builder()
            .set_override("server.port", 9090)
            .unwrap()
            .build()
            .unwrap();
        let parsed: Result<Settings, _> = cfg.try_deserialize();
        assert!(parsed.is_err());
    }

    #[test]
    fn env_vars_reach_keys_that_contain_underscores() {
        let mut vars = std::collections::HashMap::new();
        vars.insert(
            "BOOKSHELF_DATABASE__URL".to_string(),
            "mem://env".to_string(),
        );
        vars.insert("BOOKSHELF_DATABASE__NAME".to_string(), "books".to_string());
        vars.insert(
            "BOOKSHELF_SERVER__REQUEST_TIMEOUT_MS".to_string(),
            "2500".to_string(),
        );

        let cfg = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("BOOKSHELF")
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(vars)),
            )
            .build()
            .unwrap();

        let parsed: Settings = cfg.try_deserialize().unwrap();
        assert_eq!(parsed.database.url, "mem://env");
        assert_eq!(parsed.database.name, "books");
        assert_eq!(parsed.server.request_timeout_ms, 2500);
    }

    #[test]
    fn database_section_parses_from_config_values() {
        let cfg = config::Config::builder()
            .set_override("database.url", "mem://localhost")
            .unwrap()
            .set_override("database.name", "books")
            .unwrap()
            .build()
            .unwrap();
        let parsed: Settings = cfg.try_deserialize().unwrap();
        assert_eq!(parsed.database.url, "mem://localhost");
        assert_eq!(parsed.database.name, "books");
    }
}
