use crate::config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

fn detail(data: &str) -> String {
    if data.is_empty() {
        String::new()
    } else {
        format!(" ({})", data)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("a period of {0} seconds ends past the last timestamp Zabbix can store")]
    PeriodOutOfRange(u64),

    #[error("host {0:?} not found")]
    HostNotFound(String),

    #[error("host name {name:?} is ambiguous, it matches {count} hosts")]
    AmbiguousHost { name: String, count: usize },

    #[error("host {0:?} does not belong to any host group")]
    NoHostGroup(String),

    #[error("API error {code}: {message}{}", detail(.data))]
    Api {
        code: i64,
        message: String,
        data: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed API response: {0}")]
    MalformedResponse(String),
}
