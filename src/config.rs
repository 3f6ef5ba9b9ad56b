//! Runtime configuration.
//!
//! `Settings` is assembled once at startup from built-in defaults and the
//! process environment (a `.env` file is loaded by `main` before this runs).
//! Command-line flags are applied on top with [`Settings::with_overrides`].

use actix_web::http::Uri;
use actix_web::http::header::HeaderValue;
use std::num::ParseIntError;

/// Name reported by the version endpoint.
pub const API_NAME: &str = "software-factory-api";

/// Crate version reported by the version endpoint and the OpenAPI document.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Local frontend dev servers.
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Default tracing filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "software_factory_api=info,actix_web=info";

pub const ENV_HOST: &str = "APP_HOST";
pub const ENV_PORT: &str = "APP_PORT";
pub const ENV_ENVIRONMENT: &str = "APP_ENV";
pub const ENV_CORS_ORIGINS: &str = "CORS_ORIGINS";
pub const ENV_WORKERS: &str = "APP_WORKERS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid port {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid worker count {value:?}: must be a positive integer")]
    InvalidWorkers { value: String },

    #[error("invalid CORS origin {0:?}: expected an http:// or https:// origin")]
    InvalidOrigin(String),

    #[error("no CORS origins configured in {0}")]
    NoOrigins(&'static str),

    #[error("environment name must not be empty")]
    EmptyEnvironment,
}

/// Immutable application configuration shared with handlers via `web::Data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Deployment environment label, e.g. "development" or "production".
    pub environment: String,
    /// Origins allowed to make credentialed cross-origin requests.
    pub cors_origins: Vec<String>,
    /// Number of HTTP workers; `None` keeps the actix default.
    pub workers: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            workers: None,
        }
    }
}

/// Values supplied on the command line. Each `Some` replaces the value
/// loaded from the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub environment: Option<String>,
    pub workers: Option<usize>,
}

impl Settings {
    /// Loads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings using `lookup` to resolve environment variables.
    ///
    /// Unset or blank variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut settings = Settings::default();

        if let Some(host) = get(ENV_HOST) {
            settings.host = host;
        }

        if let Some(port) = get(ENV_PORT) {
            settings.port = port
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: port, source })?;
        }

        if let Some(environment) = get(ENV_ENVIRONMENT) {
            settings.environment = environment;
        }

        if let Some(origins) = get(ENV_CORS_ORIGINS) {
            settings.cors_origins = parse_origins(&origins)?;
        }

        if let Some(workers) = get(ENV_WORKERS) {
            settings.workers = Some(parse_workers(&workers)?);
        }

        Ok(settings)
    }

    /// Applies command-line overrides on top of the loaded settings.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(environment) = overrides.environment {
            if environment.trim().is_empty() {
                return Err(ConfigError::EmptyEnvironment);
            }
            self.environment = environment;
        }
        if let Some(workers) = overrides.workers {
            if workers == 0 {
                return Err(ConfigError::InvalidWorkers {
                    value: workers.to_string(),
                });
            }
            self.workers = Some(workers);
        }
        Ok(self)
    }

    /// Address the HTTP server binds to.
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(parse_origin)
        .collect::<Result<Vec<_>, _>>()?;

    if origins.is_empty() {
        return Err(ConfigError::NoOrigins(ENV_CORS_ORIGINS));
    }
    Ok(origins)
}

/// Accepts `scheme://host[:port]` with an http(s) scheme and nothing after
/// the authority. actix-cors rejects anything that is not a valid header
/// value and URI at app construction time.
fn parse_origin(origin: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidOrigin(origin.to_string());

    HeaderValue::from_str(origin).map_err(|_| invalid())?;
    let uri: Uri = origin.parse().map_err(|_| invalid())?;

    let http_scheme = matches!(uri.scheme_str(), Some("http") | Some("https"));
    let has_host = uri.host().is_some_and(|host| !host.is_empty());
    if !http_scheme || !has_host || uri.path_and_query().is_some() {
        return Err(invalid());
    }

    Ok(origin.to_string())
}

fn parse_workers(raw: &str) -> Result<usize, ConfigError> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidWorkers {
            value: raw.to_string(),
        }),
    }
}
