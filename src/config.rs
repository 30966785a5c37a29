use std::fmt;

use reqwest::Url;

/* Config is read once at startup and never mutated afterwards.
 * It is handed to the dispatcher as a dependency, so every handler sees the same values.
 */

pub const TOKEN_VAR: &str = "BOT_TOKEN";
pub const BASE_URL_VAR: &str = "INSIGHT_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://pathly-labs-insight.onrender.com";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingToken(&'static str),
    #[error("{0} is not a valid http(s) address: {1}")]
    InvalidBaseUrl(String, String),
}

#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub base_url: Url,
}

// Keeps the token out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /* Builds the config from any variable source.
     * The token must be present and non-blank. The base URL falls back to the default site.
     */
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = match lookup(TOKEN_VAR) {
            Some(token) if !token.trim().is_empty() => token.trim().to_string(),
            _ => return Err(ConfigError::MissingToken(TOKEN_VAR)),
        };

        let base_url = match lookup(BASE_URL_VAR) {
            Some(url) if !url.trim().is_empty() => parse_base_url(url.trim())?,
            _ => parse_base_url(DEFAULT_BASE_URL)?,
        };

        Ok(Config { token, base_url })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl(raw.to_string(), reason);

    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("cannot be used as a base".to_string()));
    }

    Ok(url)
}
