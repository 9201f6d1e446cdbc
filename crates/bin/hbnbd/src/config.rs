//! Daemon settings.
//!
//! Three layers, each overriding the one before: built-in defaults, the
//! optional `hbnb.toml` in the working directory, then `HBNB_*` environment
//! variables (plus `RUST_LOG`).

use std::path::Path;

use serde::Deserialize;

/// File read by [`Config::load`].
const CONFIG_FILE: &str = "hbnb.toml";

const ENV_HOST: &str = "HBNB_HOST";
const ENV_PORT: &str = "HBNB_PORT";
const ENV_BIND: &str = "HBNB_BIND";
const ENV_DATABASE_URL: &str = "HBNB_DATABASE_URL";
/// Filter variables, lowest priority first.
const ENV_LOG: [&str; 2] = ["HBNB_LOG", "RUST_LOG"];

/// Everything `hbnbd` needs to start.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `[server]` table.
    pub server: ServerConfig,
    /// `[database]` table.
    pub database: DatabaseConfig,
    /// `[logging]` table.
    pub logging: LoggingConfig,
}

/// Where the API listens.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where records are stored.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx `SQLite` URL, e.g. `sqlite:hbnb.db?mode=rwc` or `sqlite::memory:`.
    pub url: String,
}

/// What gets logged.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives.
    pub filter: String,
}

impl Config {
    /// Read `hbnb.toml` and the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
    }

    /// Read settings from `path`, then apply overrides looked up through `var`.
    ///
    /// A missing file is not an error; the defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file exists but cannot be read,
    /// [`ConfigError::Parse`] if it is not valid TOML for these settings, or
    /// [`ConfigError::Validation`] if the merged result is unusable.
    pub fn load_from(
        path: &Path,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config: Self = match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(err) => return Err(err.into()),
        };
        config.apply_overrides(var);
        config.validate()?;
        Ok(config)
    }

    /// `HBNB_BIND` beats `HBNB_HOST`/`HBNB_PORT` and `RUST_LOG` beats
    /// `HBNB_LOG` when both are set. Values that do not parse are skipped.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = var(ENV_PORT).and_then(|raw| raw.parse().ok()) {
            self.server.port = port;
        }
        if let Some((host, port)) = var(ENV_BIND).as_deref().and_then(split_bind) {
            self.server.host = host;
            if let Some(port) = port {
                self.server.port = port;
            }
        }
        if let Some(url) = var(ENV_DATABASE_URL) {
            self.database.url = url;
        }
        if let Some(filter) = ENV_LOG.iter().rev().find_map(|key| var(key)) {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port cannot be 0".to_string()));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Validation("database.url is empty".to_string()));
        }
        Ok(())
    }

    /// `host:port` for [`tokio::net::TcpListener::bind`].
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

/// Split a `host:port` pair on its last colon.
///
/// Returns `None` without a colon or with an empty host. A port that is not
/// a `u16` comes back as `None` so only the host is applied.
fn split_bind(value: &str) -> Option<(String, Option<u16>)> {
    let (host, port) = value.rsplit_once(':')?;
    if host.is_empty() {
        return None;
    }
    Some((host.to_string(), port.parse().ok()))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:hbnb.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hbnbd=info,hbnb_app=info,hbnb_adapter_http_axum=info,tower_http=debug"
                .to_string(),
        }
    }
}

/// Why settings could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid hbnb.toml")]
    Parse(#[from] toml::de::Error),
    #[error("cannot read hbnb.toml")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    fn vars(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let pairs = pairs.to_vec();
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    /// A config file under the temp dir, removed when dropped.
    struct TempFile(PathBuf);

    impl TempFile {
        fn new(name: &str, content: &str) -> Self {
            let path =
                std::env::temp_dir().join(format!("hbnbd-{}-{name}.toml", std::process::id()));
            std::fs::write(&path, content).unwrap();
            Self(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn should_use_defaults_when_file_and_variables_absent() {
        let config = Config::load_from(Path::new("does-not-exist.toml"), vars(&[])).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.database_url(), "sqlite:hbnb.db?mode=rwc");
        assert!(config.logging.filter.contains("tower_http"));
    }

    #[test]
    fn should_fill_missing_tables_with_defaults() {
        let config: Config = toml::from_str("[server]\nport = 8080").unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.database_url(), "sqlite:hbnb.db?mode=rwc");
    }

    #[test]
    fn should_read_every_table_from_file() {
        let file = TempFile::new(
            "full",
            "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'

            [logging]
            filter = 'debug'
            ",
        );

        let config = Config::load_from(&file.0, vars(&[])).unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.database_url(), "sqlite:test.db");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_let_variables_win_over_file() {
        let file = TempFile::new(
            "env-wins",
            "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:file.db'
            ",
        );

        let config = Config::load_from(
            &file.0,
            vars(&[("HBNB_PORT", "7070"), ("HBNB_DATABASE_URL", "sqlite::memory:")]),
        )
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:7070");
        assert_eq!(config.database_url(), "sqlite::memory:");
    }

    #[test]
    fn should_validate_after_overrides() {
        let file = TempFile::new("zero-port", "[server]\nport = 0");

        let rejected = Config::load_from(&file.0, vars(&[]));
        assert!(matches!(rejected, Err(ConfigError::Validation(_))));

        let rescued = Config::load_from(&file.0, vars(&[("HBNB_BIND", "localhost:8000")]));
        assert_eq!(rescued.unwrap().bind_addr(), "localhost:8000");
    }

    #[test]
    fn should_reject_empty_database_url() {
        let result = Config::load_from(
            Path::new("does-not-exist.toml"),
            vars(&[("HBNB_DATABASE_URL", " ")]),
        );
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_report_malformed_file() {
        let file = TempFile::new("malformed", "[server]\nport = 'http'");

        let result = Config::load_from(&file.0, vars(&[]));

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn should_prefer_bind_over_host_and_port() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[
            ("HBNB_HOST", "10.0.0.1"),
            ("HBNB_PORT", "1"),
            ("HBNB_BIND", "localhost:7000"),
        ]));
        assert_eq!(config.bind_addr(), "localhost:7000");
    }

    #[test]
    fn should_keep_port_override_when_bind_has_no_valid_port() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[("HBNB_PORT", "6000"), ("HBNB_BIND", "api.local:web")]));
        assert_eq!(config.bind_addr(), "api.local:6000");
    }

    #[test]
    fn should_prefer_rust_log_over_hbnb_log() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[("HBNB_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");

        let mut config = Config::default();
        config.apply_overrides(vars(&[("HBNB_LOG", "warn")]));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_skip_unparsable_port_override() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[("HBNB_PORT", "http")]));
        assert_eq!(config.server.port, 5000);

        config.apply_overrides(vars(&[("HBNB_PORT", "70000")]));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn should_split_bind_on_last_colon() {
        assert_eq!(
            split_bind("0.0.0.0:80"),
            Some(("0.0.0.0".to_string(), Some(80)))
        );
        assert_eq!(
            split_bind("[::1]:8080"),
            Some(("[::1]".to_string(), Some(8080)))
        );
        assert_eq!(split_bind("host:"), Some(("host".to_string(), None)));
        assert_eq!(split_bind("host:x"), Some(("host".to_string(), None)));
    }

    #[test]
    fn should_not_split_bind_without_host() {
        assert_eq!(split_bind("nohost"), None);
        assert_eq!(split_bind(":9000"), None);
    }

    #[test]
    fn should_ignore_bind_without_host() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[("HBNB_BIND", ":9000")]));
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }
}
