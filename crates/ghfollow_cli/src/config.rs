//! Configuration file support for ghfollow.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `GHFOLLOW_`, e.g., `GHFOLLOW_GITHUB__TOKEN`)
//! 3. Config file (./ghfollow.toml, then ~/.config/ghfollow/config.toml)
//! 4. Legacy `GITHUB_USERNAME` / `GITHUB_TOKEN` variables, for credentials only
//! 5. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [github]
//! username = "octocat"
//! token = "ghp_..."  # or use GHFOLLOW_GITHUB__TOKEN / GITHUB_TOKEN
//! api_url = "https://api.github.com"  # GitHub Enterprise: https://ghe.example.com/api/v3
//!
//! [http]
//! timeout_secs = 30
//!
//! [batch]
//! follow_delay_secs = 30
//! unfollow_delay_secs = 5
//! trailing_delay = true
//! ```

use std::path::PathBuf;
use std::time::Duration;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use ghfollow::Relation;
use ghfollow::github::{Credentials, DEFAULT_API_URL};
use ghfollow::sync::{DEFAULT_FOLLOW_DELAY_SECS, DEFAULT_UNFOLLOW_DELAY_SECS};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while turning configuration into runtime values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Account name or token is not configured.
    #[error(
        "Missing GitHub {missing}. Set GITHUB_USERNAME and GITHUB_TOKEN \
         (or GHFOLLOW_GITHUB__USERNAME / GHFOLLOW_GITHUB__TOKEN, or [github] in ghfollow.toml)."
    )]
    MissingCredentials { missing: &'static str },

    /// A configured delay is negative or not a number.
    #[error("Invalid {key}: {value} (expected a non-negative number of seconds)")]
    InvalidDelay { key: &'static str, value: f64 },
}

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub account and API endpoint.
    pub github: GitHubConfig,
    /// HTTP transport settings.
    pub http: HttpConfig,
    /// Default batch pacing.
    pub batch: BatchConfig,
}

/// GitHub configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Account name used for Basic auth.
    pub username: Option<String>,
    /// Personal access token.
    pub token: Option<String>,
    /// REST API base URL.
    pub api_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            username: None,
            token: None,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// HTTP configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// Default pacing for follow and unfollow batches.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub follow_delay_secs: f64,
    pub unfollow_delay_secs: f64,
    /// Pause after the final item too.
    pub trailing_delay: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            follow_delay_secs: DEFAULT_FOLLOW_DELAY_SECS,
            unfollow_delay_secs: DEFAULT_UNFOLLOW_DELAY_SECS,
            trailing_delay: true,
        }
    }
}

impl Config {
    /// Load configuration using the config crate's layered approach.
    ///
    /// Sources are loaded in order (later sources override earlier):
    /// 1. Built-in defaults
    /// 2. XDG config file (~/.config/ghfollow/config.toml)
    /// 3. Local config file (./ghfollow.toml)
    /// 4. Environment variables with GHFOLLOW_ prefix
    ///
    /// Legacy environment variables then fill in any credential still unset.
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        if let Some(xdg_config) = Self::default_config_path()
            && xdg_config.exists()
        {
            tracing::debug!("Loading config from {:?}", xdg_config);
            builder = builder.add_source(
                File::from(xdg_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // Local config file (higher priority than XDG)
        let local_config = PathBuf::from("ghfollow.toml");
        if local_config.exists() {
            tracing::debug!("Loading config from ./ghfollow.toml");
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // e.g., GHFOLLOW_BATCH__FOLLOW_DELAY_SECS -> batch.follow_delay_secs
        builder = builder.add_source(
            Environment::with_prefix("GHFOLLOW")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut config = match builder.build() {
            Ok(settings) => match settings.try_deserialize::<Config>() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to deserialize config: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to build config: {}", e);
                Config::default()
            }
        };

        config.apply_legacy_env(|key| std::env::var(key).ok());
        config
    }

    /// Fill unset credentials from `GITHUB_USERNAME` / `GITHUB_TOKEN`.
    fn apply_legacy_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.github.username.is_none() {
            self.github.username = lookup("GITHUB_USERNAME");
        }
        if self.github.token.is_none() {
            self.github.token = lookup("GITHUB_TOKEN");
        }
    }

    /// Build API credentials, failing if either half is missing or blank.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());

        match (
            present(&self.github.username),
            present(&self.github.token),
        ) {
            (true, true) => {}
            (false, true) => return Err(ConfigError::MissingCredentials { missing: "username" }),
            (true, false) => return Err(ConfigError::MissingCredentials { missing: "token" }),
            (false, false) => {
                return Err(ConfigError::MissingCredentials {
                    missing: "username and token",
                });
            }
        }

        let username = self.github.username.as_deref().unwrap_or_default().trim();
        let token = self.github.token.as_deref().unwrap_or_default().trim();
        Ok(Credentials::new(username, token))
    }

    /// Per-request HTTP timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }

    /// The configured default delay for a relation.
    pub fn delay_for(&self, relation: Relation) -> Result<Duration, ConfigError> {
        let (key, value) = match relation {
            Relation::Follow => ("batch.follow_delay_secs", self.batch.follow_delay_secs),
            Relation::Unfollow => ("batch.unfollow_delay_secs", self.batch.unfollow_delay_secs),
        };
        if value < 0.0 {
            return Err(ConfigError::InvalidDelay { key, value });
        }
        Duration::try_from_secs_f64(value).map_err(|_| ConfigError::InvalidDelay { key, value })
    }

    /// Get the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ghfollow").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml_content: &str) -> Config {
        let settings = ConfigBuilder::builder()
            .add_source(config::File::from_str(toml_content, FileFormat::Toml))
            .build()
            .unwrap();
        settings.try_deserialize().unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.github.username.is_none());
        assert!(config.github.token.is_none());
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.batch.follow_delay_secs, 30.0);
        assert_eq!(config.batch.unfollow_delay_secs, 5.0);
        assert!(config.batch.trailing_delay);
    }

    #[test]
    fn test_config_builder_with_toml_string() {
        let config = from_toml(
            r#"
            [github]
            username = "octocat"
            token = "ghp_test123"
            api_url = "https://ghe.example.com/api/v3"

            [http]
            timeout_secs = 10

            [batch]
            follow_delay_secs = 2.5
            unfollow_delay_secs = 0
            trailing_delay = false
        "#,
        );

        assert_eq!(config.github.username.as_deref(), Some("octocat"));
        assert_eq!(config.github.token.as_deref(), Some("ghp_test123"));
        assert_eq!(config.github.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(
            config.delay_for(Relation::Follow).unwrap(),
            Duration::from_millis(2500)
        );
        assert_eq!(
            config.delay_for(Relation::Unfollow).unwrap(),
            Duration::ZERO
        );
        assert!(!config.batch.trailing_delay);
    }

    #[test]
    fn test_config_builder_partial_override() {
        let config = from_toml(
            r#"
            [batch]
            follow_delay_secs = 60
        "#,
        );

        assert_eq!(config.batch.follow_delay_secs, 60.0);
        // Other values should be defaults
        assert_eq!(config.batch.unfollow_delay_secs, 5.0);
        assert_eq!(config.github.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_config_merging_order() {
        let settings = ConfigBuilder::builder()
            .add_source(config::File::from_str(
                "[github]\nusername = \"base\"\ntoken = \"t1\"",
                FileFormat::Toml,
            ))
            .add_source(config::File::from_str(
                "[github]\ntoken = \"t2\"",
                FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: Config = settings.try_deserialize().unwrap();

        assert_eq!(config.github.username.as_deref(), Some("base"));
        assert_eq!(config.github.token.as_deref(), Some("t2"));
    }

    #[test]
    fn test_config_unknown_fields_ignored() {
        let config = from_toml(
            r#"
            [batch]
            follow_delay_secs = 1
            unknown_field = "should be ignored"
        "#,
        );
        assert_eq!(config.batch.follow_delay_secs, 1.0);
    }

    #[test]
    fn test_config_invalid_toml() {
        let result = ConfigBuilder::builder()
            .add_source(config::File::from_str("[batch\nfollow = 1", FileFormat::Toml))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_legacy_env_fills_missing_credentials() {
        let mut config = Config::default();
        config.apply_legacy_env(|key| match key {
            "GITHUB_USERNAME" => Some("legacy-user".to_string()),
            "GITHUB_TOKEN" => Some("legacy-token".to_string()),
            _ => None,
        });

        assert_eq!(config.github.username.as_deref(), Some("legacy-user"));
        assert_eq!(config.github.token.as_deref(), Some("legacy-token"));
    }

    #[test]
    fn test_legacy_env_does_not_override_configured_values() {
        let mut config = from_toml("[github]\ntoken = \"from-file\"");
        config.apply_legacy_env(|_| Some("legacy".to_string()));

        assert_eq!(config.github.token.as_deref(), Some("from-file"));
        assert_eq!(config.github.username.as_deref(), Some("legacy"));
    }

    #[test]
    fn test_credentials_present() {
        let config = from_toml("[github]\nusername = \"me\"\ntoken = \"tok\"");
        let credentials = config.credentials().expect("credentials");
        assert_eq!(credentials.username(), "me");
        assert_eq!(credentials.basic_auth_header(), "Basic bWU6dG9r");
    }

    #[test]
    fn test_credentials_missing() {
        let config = Config::default();
        let err = config.credentials().expect_err("no credentials");
        assert!(matches!(
            err,
            ConfigError::MissingCredentials { missing: "username and token" }
        ));
        assert!(err.to_string().contains("GITHUB_TOKEN"));

        let config = from_toml("[github]\nusername = \"me\"\ntoken = \"   \"");
        assert!(matches!(
            config.credentials(),
            Err(ConfigError::MissingCredentials { missing: "token" })
        ));

        let config = from_toml("[github]\ntoken = \"tok\"");
        assert!(matches!(
            config.credentials(),
            Err(ConfigError::MissingCredentials { missing: "username" })
        ));
    }

    #[test]
    fn test_negative_delay_rejected() {
        let config = from_toml("[batch]\nunfollow_delay_secs = -1");
        let err = config.delay_for(Relation::Unfollow).expect_err("negative");
        assert!(matches!(
            err,
            ConfigError::InvalidDelay { key: "batch.unfollow_delay_secs", .. }
        ));
        assert!(config.delay_for(Relation::Follow).is_ok());
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("ghfollow"));
        assert!(path.ends_with("config.toml"));
    }
}
