//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "theme-toggle";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Overrides `get_data_dir()` when set
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub cookie: CookieConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Visitor cookie used to key server-side preferences
#[derive(Debug, Clone, Deserialize)]
pub struct CookieConfig {
    #[serde(default = "default_cookie_name")]
    pub name: String,
    #[serde(default = "default_cookie_max_age_days")]
    pub max_age_days: u32,
    /// Add the `Secure` attribute (enable behind HTTPS)
    #[serde(default)]
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: default_cookie_name(),
            max_age_days: default_cookie_max_age_days(),
            secure: false,
        }
    }
}

fn default_cookie_name() -> String {
    "theme_visitor".to_string()
}

fn default_cookie_max_age_days() -> u32 {
    365
}

impl Config {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(get_data_dir)
    }
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("THEME_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support").join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR_NAME);
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR_NAME);
        }
    }

    PathBuf::from(".")
}

/// Get data directory (XDG_DATA_HOME or platform default)
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("THEME_DATA_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support").join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join(APP_DIR_NAME);
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local/share").join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("LOCALAPPDATA") {
            return PathBuf::from(appdata).join(APP_DIR_NAME);
        }
    }

    PathBuf::from("./data")
}

/// First of THEME_PORT, PORT that holds a valid port number
fn port_from_env() -> Option<u16> {
    for var in ["THEME_PORT", "PORT"] {
        let Ok(value) = std::env::var(var) else {
            continue;
        };
        match value.parse::<u16>() {
            Ok(port) => return Some(port),
            Err(_) => tracing::warn!("Ignoring invalid {}={:?}", var, value),
        }
    }
    None
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    // THEME_PORT is resolved by port_from_env; left in, an invalid value
    // would fail deserialization instead of falling through
    let env_vars: HashMap<String, String> = std::env::vars()
        .filter(|(key, _)| key != "THEME_PORT")
        .collect();

    let mut builder = ::config::Config::builder()
        .set_default("host", default_host())?
        .set_default("port", default_port() as i64)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (THEME_HOST, THEME_COOKIE__NAME, etc.)
        .add_source(
            ::config::Environment::with_prefix("THEME")
                .separator("__")
                .try_parsing(true)
                .source(Some(env_vars)),
        );

    // Port precedence: THEME_PORT > PORT > config > default
    if let Some(port) = port_from_env() {
        builder = builder.set_override("port", port as i64)?;
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}
