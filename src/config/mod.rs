//! Configuration management for the diary-insights application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. `main` loads a `.env` file first, so the same
//! variables can live there.
//!
//! # Environment Variables
//!
//! - `DIARY_INSIGHTS_DIR`: Directory holding the entry store (defaults to ~/.local/share/diary-insights)
//! - `DIARY_INSIGHTS_PROVIDER`: `anthropic` (default) or `ollama`
//! - `ANTHROPIC_API_KEY`: API key for the Anthropic provider
//! - `DIARY_INSIGHTS_MODEL`: Model identifier (provider-specific default)
//! - `DIARY_INSIGHTS_API_URL`: Provider base URL (provider-specific default)
//! - `DIARY_INSIGHTS_ADDR`: Listen address for `serve` (defaults to 127.0.0.1:3000)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_ANTHROPIC_MODEL, DEFAULT_ANTHROPIC_URL, DEFAULT_DATA_SUBDIR, DEFAULT_LISTEN_ADDR,
    DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL, ENV_VAR_ADDR, ENV_VAR_ANTHROPIC_API_KEY,
    ENV_VAR_API_URL, ENV_VAR_DATA_DIR, ENV_VAR_HOME, ENV_VAR_MODEL, ENV_VAR_PROVIDER,
    REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which completion provider analyses are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Anthropic,
    Ollama,
}

impl ProviderKind {
    fn default_model(self) -> &'static str {
        match self {
            ProviderKind::Anthropic => DEFAULT_ANTHROPIC_MODEL,
            ProviderKind::Ollama => DEFAULT_OLLAMA_MODEL,
        }
    }

    fn default_url(self) -> &'static str {
        match self {
            ProviderKind::Anthropic => DEFAULT_ANTHROPIC_URL,
            ProviderKind::Ollama => DEFAULT_OLLAMA_URL,
        }
    }
}

impl FromStr for ProviderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anthropic" => Ok(ProviderKind::Anthropic),
            "ollama" => Ok(ProviderKind::Ollama),
            other => Err(AppError::Config(format!(
                "Unknown provider '{}'. Expected 'anthropic' or 'ollama'",
                other
            ))),
        }
    }
}

/// Configuration for the diary-insights application.
///
/// # Examples
///
/// ```
/// use diary_insights::config::{Config, ProviderKind};
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/var/lib/diary-insights"),
///     provider: ProviderKind::Ollama,
///     api_key: String::new(),
///     model: "llama3.2:3b".to_string(),
///     api_url: "http://127.0.0.1:11434".to_string(),
///     listen_addr: "127.0.0.1:3000".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct Config {
    /// Directory where the entry store lives.
    pub data_dir: PathBuf,

    /// Provider analyses are sent to.
    pub provider: ProviderKind,

    /// API key for providers that need one. Empty when unset; the provider
    /// then fails at request time.
    pub api_key: String,

    /// Model identifier sent with each completion request.
    pub model: String,

    /// Provider base URL.
    pub api_url: String,

    /// Listen address for the HTTP service.
    pub listen_addr: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &REDACTED_PLACEHOLDER)
            .field("provider", &self.provider)
            .field("api_key", &REDACTED_PLACEHOLDER)
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("listen_addr", &self.listen_addr)
            .finish()
    }
}

impl Default for Config {
    /// Creates a new Config with default values and an empty data directory.
    fn default() -> Self {
        let provider = ProviderKind::default();
        Config {
            data_dir: PathBuf::from(""),
            provider,
            api_key: String::new(),
            model: provider.default_model().to_string(),
            api_url: provider.default_url().to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

/// Accepts `host:port` and bracketed IPv6 forms like `[::1]:3000`.
fn is_host_port(addr: &str) -> bool {
    match addr.rsplit_once(':') {
        Some((host, port)) => !host.trim().is_empty() && port.parse::<u16>().is_ok(),
        None => false,
    }
}

/// Reads a variable, treating unset and blank the same.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory path is expanded with `shellexpand` to handle `~`
    /// and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails or yields an empty path
    /// - `DIARY_INSIGHTS_PROVIDER` names an unknown provider
    pub fn load() -> AppResult<Self> {
        let provider = match non_empty_var(ENV_VAR_PROVIDER) {
            Some(raw) => raw.parse()?,
            None => ProviderKind::default(),
        };

        let data_dir_str = non_empty_var(ENV_VAR_DATA_DIR).unwrap_or_else(|| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        Ok(Config {
            data_dir,
            provider,
            api_key: env::var(ENV_VAR_ANTHROPIC_API_KEY).unwrap_or_default(),
            model: non_empty_var(ENV_VAR_MODEL)
                .unwrap_or_else(|| provider.default_model().to_string()),
            api_url: non_empty_var(ENV_VAR_API_URL)
                .unwrap_or_else(|| provider.default_url().to_string()),
            listen_addr: non_empty_var(ENV_VAR_ADDR)
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when:
    /// - the data directory is empty or relative
    /// - the model is empty
    /// - the API URL is not http(s)
    /// - the listen address is not `host:port` (hostnames such as
    ///   `localhost:3000` are resolved later, when `serve` binds)
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model identifier is empty".to_string()));
        }

        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "API URL must start with http:// or https://: {}",
                self.api_url
            )));
        }

        if !is_host_port(&self.listen_addr) {
            return Err(AppError::Config(format!(
                "Invalid listen address '{}': expected host:port",
                self.listen_addr
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tempfile::tempdir;

    const VARS: [&str; 6] = [
        ENV_VAR_DATA_DIR,
        ENV_VAR_PROVIDER,
        ENV_VAR_ANTHROPIC_API_KEY,
        ENV_VAR_MODEL,
        ENV_VAR_API_URL,
        ENV_VAR_ADDR,
    ];

    fn setup() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn valid_config() -> Config {
        Config {
            data_dir: PathBuf::from("/absolute/path"),
            ..Config::default()
        }
    }

    #[test]
    fn test_debug_impl_redacts_sensitive_info() {
        let config = Config {
            api_key: "sk-ant-very-secret".to_string(),
            data_dir: PathBuf::from("/home/username/private/diary"),
            ..Config::default()
        };

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
        assert!(!debug_output.contains("sk-ant-very-secret"));
        assert!(!debug_output.contains("/home/username/private/diary"));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.provider, ProviderKind::Anthropic);
        assert_eq!(config.model, DEFAULT_ANTHROPIC_MODEL);
        assert_eq!(config.api_url, DEFAULT_ANTHROPIC_URL);
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
    }

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!("anthropic".parse::<ProviderKind>().unwrap(), ProviderKind::Anthropic);
        assert_eq!(" Ollama ".parse::<ProviderKind>().unwrap(), ProviderKind::Ollama);
        assert!("openai".parse::<ProviderKind>().is_err());
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        setup();
        let orig_home = env::var(ENV_VAR_HOME).ok();
        env::set_var(ENV_VAR_HOME, "/home/tester");

        let config = Config::load().unwrap();

        if let Some(val) = orig_home {
            env::set_var(ENV_VAR_HOME, val);
        }

        assert_eq!(
            config.data_dir,
            PathBuf::from("/home/tester/.local/share/diary-insights")
        );
        assert_eq!(config.provider, ProviderKind::Anthropic);
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, DEFAULT_ANTHROPIC_MODEL);
    }

    #[test]
    #[serial]
    fn test_load_ollama_defaults() {
        setup();
        env::set_var(ENV_VAR_PROVIDER, "ollama");

        let config = Config::load().unwrap();
        setup();

        assert_eq!(config.provider, ProviderKind::Ollama);
        assert_eq!(config.model, DEFAULT_OLLAMA_MODEL);
        assert_eq!(config.api_url, DEFAULT_OLLAMA_URL);
    }

    #[test]
    #[serial]
    fn test_load_with_overrides() {
        setup();
        let temp_dir = tempdir().unwrap();
        let dir_path = temp_dir.path().to_string_lossy().to_string();

        env::set_var(ENV_VAR_DATA_DIR, &dir_path);
        env::set_var(ENV_VAR_ANTHROPIC_API_KEY, "sk-ant-test");
        env::set_var(ENV_VAR_MODEL, "claude-custom");
        env::set_var(ENV_VAR_API_URL, "http://127.0.0.1:8080");
        env::set_var(ENV_VAR_ADDR, "0.0.0.0:8000");

        let config = Config::load().unwrap();
        setup();

        assert_eq!(config.data_dir, PathBuf::from(dir_path));
        assert_eq!(config.api_key, "sk-ant-test");
        assert_eq!(config.model, "claude-custom");
        assert_eq!(config.api_url, "http://127.0.0.1:8080");
        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_rejects_unknown_provider() {
        setup();
        env::set_var(ENV_VAR_PROVIDER, "mystery");

        let result = Config::load();
        setup();

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_relative_dir() {
        let config = Config {
            data_dir: PathBuf::from("relative/path"),
            ..valid_config()
        };
        match config.validate() {
            Err(AppError::Config(msg)) => assert!(msg.contains("absolute")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_model() {
        let config = Config {
            model: "  ".to_string(),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_url_and_addr() {
        let config = Config {
            api_url: "ftp://example.com".to_string(),
            ..valid_config()
        };
        assert!(config.validate().is_err());

        let config = Config {
            listen_addr: "not-an-address".to_string(),
            ..valid_config()
        };
        assert!(config.validate().is_err());

        let config = Config {
            listen_addr: "127.0.0.1:http".to_string(),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_hostname_listen_addr() {
        for addr in ["localhost:3000", "0.0.0.0:8000", "[::1]:3000"] {
            let config = Config {
                listen_addr: addr.to_string(),
                ..valid_config()
            };
            assert!(config.validate().is_ok(), "{} should be accepted", addr);
        }
    }
}
