use ini::{Ini, Properties};
use reqwest::Url;
use std::fmt;
use std::path::Path;
use thiserror::Error;

const SECTION: &str = "zabbix";
const SERVER_KEY: &str = "SERVER";
const TOKEN_KEY: &str = "TOKEN_AUTH";
const API_ENDPOINT: &str = "api_jsonrpc.php";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {0} does not exist")]
    Missing(String),

    #[error("failed to read config file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("config file has no [{0}] section")]
    MissingSection(&'static str),

    #[error("config key {0} is missing or empty")]
    MissingKey(&'static str),

    #[error("config key SERVER is not a valid URL: {0}")]
    InvalidServer(String),
}

/// Connection settings read from the `[zabbix]` section of an ini file.
#[derive(Clone)]
pub struct Config {
    pub server: Url,
    pub token: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("server", &self.server.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

// Section and key names are case-insensitive through rust-ini's `case-insensitive` feature.
fn lookup(section: &Properties, key: &'static str) -> Result<String, ConfigError> {
    section
        .get(key)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
        .ok_or(ConfigError::MissingKey(key))
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let ini = Ini::load_from_file(path).map_err(|error| match error {
            ini::Error::Io(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
                ConfigError::Missing(display.clone())
            }
            other => ConfigError::Unreadable {
                path: display.clone(),
                reason: other.to_string(),
            },
        })?;
        Self::from_ini(&ini)
    }

    pub fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let section = ini
            .section(Some(SECTION))
            .ok_or(ConfigError::MissingSection(SECTION))?;

        let server = lookup(section, SERVER_KEY)?;
        let token = lookup(section, TOKEN_KEY)?;
        let server = Url::parse(&server)
            .map_err(|error| ConfigError::InvalidServer(format!("{} ({})", server, error)))?;
        if server.cannot_be_a_base() {
            return Err(ConfigError::InvalidServer(server.to_string()));
        }

        Ok(Config { server, token })
    }

    /// JSON-RPC endpoint, `SERVER` with `api_jsonrpc.php` appended unless already present.
    pub fn api_url(&self) -> Url {
        let mut url = self.server.clone();
        let has_endpoint = url
            .path_segments()
            .and_then(|segments| segments.filter(|segment| !segment.is_empty()).last())
            .map_or(false, |last| last == API_ENDPOINT);
        if !has_endpoint {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.pop_if_empty().push(API_ENDPOINT);
            }
        }
        url
    }
}
