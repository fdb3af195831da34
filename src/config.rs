use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_DESK_ADDR: &str = "0.0.0.0:7860";

/// Per-call deadlines. No retries happen, so these are the whole budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub analysis: Duration,
    pub synthesis: Duration,
    pub health: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            analysis: Duration::from_secs(120),
            synthesis: Duration::from_secs(60),
            health: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Engine base address, no trailing slash.
    pub api_url: String,
    pub bind_addr: SocketAddr,
    pub timeouts: Timeouts,
}

impl DeskConfig {
    /// Reads `API_URL` and `DESK_ADDR`, falling back to the local development defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("API_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let bind_raw = lookup("DESK_ADDR").unwrap_or_else(|| DEFAULT_DESK_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("DESK_ADDR is not a socket address: '{}'", bind_raw))?;

        Ok(Self {
            api_url: normalize_base_url(&api_url),
            bind_addr,
            timeouts: Timeouts::default(),
        })
    }
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            bind_addr: DEFAULT_DESK_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 7860))),
            timeouts: Timeouts::default(),
        }
    }
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
