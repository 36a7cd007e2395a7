use std::env;
use std::fmt::Display;
use std::str::FromStr;

use actix_web::cookie::Key;

/// Runtime settings, read once at start-up from the environment (and `.env` if present).
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    pub session_key: Key,
    pub app_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {e}");
        }

        let database_url =
            env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        Ok(Self {
            database_url,
            bind_addr: try_load("BIND_ADDR", "127.0.0.1:8080")?,
            db_max_connections: try_load("DB_MAX_CONNECTIONS", "8")?,
            session_key: session_key(),
            app_name: try_load("APP_NAME", "Syndic")?,
        })
    }

    pub fn site(&self) -> SiteInfo {
        SiteInfo { app_name: self.app_name.clone() }
    }
}

/// The part of the configuration pages need, shared through `web::Data`.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub app_name: String,
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, String>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        log::info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse().map_err(|e| format!("Invalid {key} value: {e}"))
}

// Load from SESSION_KEY for CSRF tokens that survive restarts.
fn session_key() -> Key {
    match env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set, generating random key (open forms break on restart)");
            Key::generate()
        }
    }
}
