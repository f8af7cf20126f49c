// Copyright Alexandre D. Díaz
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use ancestrydb::{DatabaseUrl, DbError};
use config::Config;
use thiserror::Error;
use url::Url;

pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const ENV_PREFIX: &str = "ANCESTRY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL not set in environment variables")]
    MissingDatabaseUrl,

    #[error("bad DATABASE_URL: {0}")]
    Database(#[from] DbError),

    #[error("invalid allowed origin '{0}': {1}")]
    InvalidOrigin(String, url::ParseError),

    #[error("invalid value '{1}' for setting '{0}'")]
    InvalidSetting(String, String),

    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

#[derive(Debug)]
pub struct AncestryServerConfig {
    bind_address: String,
    port: u16,
    workers: usize,
    allowed_origins: Vec<Url>,
    db_pool_max_size: u32,
    database_url: DatabaseUrl,
}

impl AncestryServerConfig {
    /// Reads `./server.*`, `ANCESTRY_*` variables and the required
    /// `DATABASE_URL` (a `.env` file is loaded first when present).
    pub fn new() -> Result<AncestryServerConfig, ConfigError> {
        report_env_file(dotenvy::dotenv());
        // Only the process environment may provide the database url
        let database_url = std::env::var(DATABASE_URL_ENV).unwrap_or_default();
        let settings = Config::builder()
            .add_source(config::File::with_name("./server").required(false))
            .add_source(environment_source(None))
            .set_override("database_url", database_url)?
            .build()?;
        AncestryServerConfig::from_settings(&settings)
    }

    pub fn from_settings(settings: &Config) -> Result<AncestryServerConfig, ConfigError> {
        let raw_database_url = settings.get_string("database_url").unwrap_or_default();
        if raw_database_url.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        let database_url = DatabaseUrl::parse(&raw_database_url)?;

        let bind_address = settings
            .get_string("bind_address")
            .unwrap_or("0.0.0.0".to_string());
        let port: u16 = get_number(settings, "port", 8080)?;
        let workers: usize = get_number(settings, "workers", 2)?;
        if workers == 0 {
            return Err(ConfigError::InvalidSetting("workers".to_string(), "0".to_string()));
        }
        let mut allowed_origins: Vec<Url> = Vec::new();
        for value in get_optional(settings.get_array("allowed_origins"))?.unwrap_or_default() {
            let origin = value.into_string()?;
            let url = Url::parse(&origin).map_err(|err| ConfigError::InvalidOrigin(origin, err))?;
            allowed_origins.push(url);
        }
        let db_pool_max_size: u32 = get_number(settings, "db_pool_max_size", 15)?;
        if db_pool_max_size == 0 {
            return Err(ConfigError::InvalidSetting(
                "db_pool_max_size".to_string(),
                "0".to_string(),
            ));
        }
        Ok(AncestryServerConfig {
            bind_address,
            port,
            workers,
            allowed_origins,
            db_pool_max_size,
            database_url,
        })
    }

    pub fn get_bind_address(&self) -> &String {
        &self.bind_address
    }

    pub fn get_port(&self) -> &u16 {
        &self.port
    }

    pub fn get_workers(&self) -> &usize {
        &self.workers
    }

    pub fn get_allowed_origins(&self) -> &Vec<Url> {
        &self.allowed_origins
    }

    pub fn is_allowed_origin(&self, origin: &str) -> bool {
        if self.get_allowed_origins().is_empty() {
            return true;
        }
        let Ok(url) = Url::parse(origin) else {
            return false;
        };
        self.get_allowed_origins().iter().any(|origin_url| {
            origin_url.scheme() == url.scheme()
                && origin_url.domain() == url.domain()
                && origin_url.port() == url.port()
        })
    }

    pub fn get_db_pool_max_size(&self) -> &u32 {
        &self.db_pool_max_size
    }

    pub fn get_database_url(&self) -> &DatabaseUrl {
        &self.database_url
    }
}

/// `ANCESTRY_*` variables. `ANCESTRY_ALLOWED_ORIGINS` is a comma separated list.
/// `vars` replaces the process environment when given.
fn environment_source(vars: Option<HashMap<String, String>>) -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("allowed_origins")
        .source(vars)
}

/// Missing keys are `None`; any other lookup error is reported.
fn get_optional<T>(value: Result<T, config::ConfigError>) -> Result<Option<T>, ConfigError> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(config::ConfigError::NotFound(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn get_number<T>(settings: &Config, key: &str, default: T) -> Result<T, ConfigError>
where
    T: TryFrom<i64>,
{
    match get_optional(settings.get_int(key))? {
        Some(value) => T::try_from(value)
            .map_err(|_| ConfigError::InvalidSetting(key.to_string(), value.to_string())),
        None => Ok(default),
    }
}

/// A missing `.env` is fine, an unreadable or malformed one is worth a warning.
/// Returns whether a warning was logged.
fn report_env_file(result: Result<PathBuf, dotenvy::Error>) -> bool {
    match result {
        Ok(path) => {
            log::info!("environment loaded from {}", path.display());
            false
        }
        Err(dotenvy::Error::Io(err)) if err.kind() == ErrorKind::NotFound => false,
        Err(err) => {
            log::warn!("can't load the .env file: {}", err);
            true
        }
    }
}
