//! Server configuration sourced from the environment

use anyhow::{Context, Result};
use newsdesk_core::DEFAULT_BASE_URL;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// newsdata.io API key (`NEWS_API_KEY`)
    pub api_key: Option<String>,

    /// Upstream endpoint (`NEWS_API_BASE_URL`)
    pub upstream_base_url: String,

    /// Listen address (`NEWSDESK_HOST`)
    pub host: IpAddr,

    /// Listen port (`PORT`)
    pub port: u16,

    /// Allowed CORS origins (`NEWSDESK_CORS_ORIGINS`)
    /// Either "*" or a comma-separated list; `None` means localhost dev origins
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            upstream_base_url: DEFAULT_BASE_URL.to_string(),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", port))?,
            None => defaults.port,
        };

        let host = match get("NEWSDESK_HOST") {
            Some(host) => host
                .trim()
                .parse()
                .with_context(|| format!("Invalid NEWSDESK_HOST value: {}", host))?,
            None => defaults.host,
        };

        Ok(Self {
            api_key: get("NEWS_API_KEY"),
            upstream_base_url: get("NEWS_API_BASE_URL").unwrap_or(defaults.upstream_base_url),
            host,
            port,
            cors_origins: get("NEWSDESK_CORS_ORIGINS"),
        })
    }

    /// Socket address to bind
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
