use std::env;
use std::str::FromStr;

use crate::modules::auth::adapter::outgoing::security::Argon2Settings;

pub const MIN_SECRET_KEY_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("SECRET_KEY must be at least {} bytes long", MIN_SECRET_KEY_LEN)]
    SecretTooShort,

    #[error("ADMIN_USERNAME and ADMIN_PASSWORD must be set together")]
    IncompleteAdmin,
}

/// Account ensured at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSeed {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database: DatabaseSettings,
    /// Key material for the session cookie.
    pub secret_key: String,
    pub cookie_secure: bool,
    pub admin: Option<AdminSeed>,
    pub argon2: Argon2Settings,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{environment}");
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = get("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let secret_key = get("SECRET_KEY").ok_or(ConfigError::Missing("SECRET_KEY"))?;
        if secret_key.len() < MIN_SECRET_KEY_LEN {
            return Err(ConfigError::SecretTooShort);
        }

        let database = DatabaseSettings {
            url: get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", 20)?,
            min_connections: parse_or(&get, "DB_MIN_CONNECTIONS", 2)?,
            run_migrations: flag_or(&get, "RUN_MIGRATIONS", false)?,
        };

        let admin = match (get("ADMIN_USERNAME"), get("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminSeed { username, password }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteAdmin),
        };

        let defaults = Argon2Settings::default();
        let argon2 = Argon2Settings {
            memory_kib: parse_or(&get, "ARGON2_MEMORY_KIB", defaults.memory_kib)?,
            iterations: parse_or(&get, "ARGON2_ITERATIONS", defaults.iterations)?,
            parallelism: parse_or(&get, "ARGON2_PARALLELISM", defaults.parallelism)?,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&get, "PORT", 8080)?,
            cookie_secure: flag_or(&get, "COOKIE_SECURE", environment == "production")?,
            environment,
            database,
            secret_key,
            admin,
            argon2,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn flag_or<G>(get: &G, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value }),
        },
    }
}
