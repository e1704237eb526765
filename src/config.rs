use crate::listing::FilterPagePolicy;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/real-estate-data";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key}={value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Collection endpoint: paged GETs and create POSTs.
    pub api_base_url: Url,
    /// Single-item endpoint, queried with `?id=`.
    pub detail_base_url: Url,
    pub http_timeout: Option<Duration>,
    pub max_workers: usize,
    pub filter_page_policy: FilterPagePolicy,
    pub log_filter: String,
}

impl Config {
    /// Reads `PROPERTYHUB_*` variables, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = parse_with(
            "PROPERTYHUB_BIND_ADDR",
            get("PROPERTYHUB_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            |v| v.parse::<SocketAddr>().map_err(|e| e.to_string()),
        )?;

        let api_base_url = parse_with(
            "PROPERTYHUB_API_BASE_URL",
            get("PROPERTYHUB_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.into()),
            parse_http_url,
        )?;

        let detail_base_url = match get("PROPERTYHUB_DETAIL_BASE_URL") {
            Some(v) => parse_with("PROPERTYHUB_DETAIL_BASE_URL", v, parse_http_url)?,
            None => api_base_url.clone(),
        };

        let http_timeout = get("PROPERTYHUB_HTTP_TIMEOUT_SECS")
            .map(|v| {
                parse_with("PROPERTYHUB_HTTP_TIMEOUT_SECS", v, |s| {
                    s.trim().parse::<u64>().map_err(|e| e.to_string())
                })
            })
            .transpose()?
            .map(Duration::from_secs);

        let max_workers = match get("PROPERTYHUB_MAX_WORKERS") {
            Some(v) => parse_with("PROPERTYHUB_MAX_WORKERS", v, |s| match s.trim().parse::<usize>() {
                Ok(0) => Err("must be at least 1".to_string()),
                Ok(n) => Ok(n),
                Err(e) => Err(e.to_string()),
            })?,
            None => 8,
        };

        let reset = match get("PROPERTYHUB_RESET_PAGE_ON_FILTER") {
            Some(v) => parse_with("PROPERTYHUB_RESET_PAGE_ON_FILTER", v, parse_bool)?,
            None => false,
        };
        let filter_page_policy = if reset {
            FilterPagePolicy::ResetToFirst
        } else {
            FilterPagePolicy::KeepPage
        };

        Ok(Config {
            bind_addr,
            api_base_url,
            detail_base_url,
            http_timeout,
            max_workers,
            filter_page_policy,
            log_filter: get("PROPERTYHUB_LOG").unwrap_or_else(|| "info".into()),
        })
    }
}

fn parse_with<T>(
    key: &'static str,
    value: String,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    parse(&value).map_err(|reason| ConfigError::Invalid { key, value, reason })
}

fn parse_http_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value.trim()).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme {other}")),
    }
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("expected a boolean, got {other}")),
    }
}
