pub mod supplyline;

use crate::error::{ConfigError, InitializationError};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub const ENV_VAR_PREFIX: &str = "SUPPLYLINE__";
pub const SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub views: ViewConfig,
    pub forms: FormConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub request_timeout: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/".to_string(),
            token: None,
            request_timeout: "30s".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Result<Duration, ConfigError> {
        parse_duration("api.request_timeout", &self.request_timeout)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewConfig {
    pub page_size: usize,
    pub default_chemical_statuses: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: 30,
            default_chemical_statuses: "available,low_stock".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormConfig {
    /// How long a successful modal stays open before closing itself.
    pub success_close_delay: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            success_close_delay: "0s".to_string(),
        }
    }
}

impl FormConfig {
    pub fn success_close_delay(&self) -> Result<Duration, ConfigError> {
        parse_duration("forms.success_close_delay", &self.success_close_delay)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Used when `RUST_LOG` is unset.
    pub default_directive: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Compact,
            default_directive: "warn".to_string(),
        }
    }
}

impl Config {
    fn validate(self) -> Result<Self, ConfigError> {
        self.api.request_timeout()?;
        self.forms.success_close_delay()?;
        if self.views.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(self)
    }
}

fn parse_duration(field: &'static str, value: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(value).map_err(|source| ConfigError::InvalidDuration {
        field,
        value: value.to_string(),
        source,
    })
}

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(SETTINGS_FILE)
}

pub fn load_config_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path.as_ref()))
        .merge(Env::prefixed(ENV_VAR_PREFIX).split("__"))
        .extract::<Config>()?
        .validate()
}

pub mod error {
    use thiserror::Error;
    use tracing::dispatcher::SetGlobalDefaultError;

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("failed to load configuration: {0}")]
        Figment(#[from] figment::Error),
        #[error("invalid duration {value:?} for {field}: {source}")]
        InvalidDuration {
            field: &'static str,
            value: String,
            source: humantime::DurationError,
        },
        #[error("views.page_size must be greater than 0")]
        InvalidPageSize,
    }

    #[derive(Debug, Error)]
    pub enum InitializationError {
        #[error(transparent)]
        Tracing(#[from] SetGlobalDefaultError),
        #[error(transparent)]
        Config(#[from] ConfigError),
    }

    /// Text that can be shown to an operator as-is, e.g. in an inline alert.
    pub trait UserFacingError: std::error::Error {
        fn user_message(&self) -> String;
    }
}

pub fn init_tracing(config: &LoggingConfig) -> Result<(), InitializationError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_directive));

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(env_filter);

    match config.format {
        LogFormat::Compact => {
            tracing::subscriber::set_global_default(builder.compact().finish())?;
        }
        LogFormat::Json => {
            tracing::subscriber::set_global_default(builder.json().finish())?;
        }
    }
    Ok(())
}

pub async fn shutdown_listener(token: Option<CancellationToken>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = ?e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = ?e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!(name: "signal.ctrlc.received", "received Ctrl+C signal, cancelling in-flight requests"),
        () = terminate => info!(name: "signal.sigterm.received", "received SIGTERM signal, cancelling in-flight requests"),
    }

    if let Some(token) = token {
        token.cancel();
    }
}
