//! Listen address resolved from Leptos options and environment overrides.
//!
//! `site-addr` from `[workspace.metadata.leptos]` (or `LEPTOS_SITE_ADDR`) is
//! the base. `HOST` and `PORT` override its parts, so hosting platforms that
//! only inject `PORT` work without touching Leptos settings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {value:?}")]
    InvalidPort { value: String },
    #[error("invalid HOST value: {value:?}")]
    InvalidHost { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build from `HOST`/`PORT` on top of `site_addr`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when either variable is set but unparseable.
    pub fn from_env(site_addr: SocketAddr) -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").ok();
        let port = std::env::var("PORT").ok();
        Self::resolve(site_addr, host.as_deref(), port.as_deref())
    }

    /// Apply optional overrides. Blank values count as unset.
    pub fn resolve(site_addr: SocketAddr, host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let mut addr = site_addr;
        if let Some(raw) = non_blank(host) {
            let ip: IpAddr = raw.parse().map_err(|_| ConfigError::InvalidHost { value: raw.to_string() })?;
            addr.set_ip(ip);
        }
        if let Some(raw) = non_blank(port) {
            let port: u16 = raw.parse().map_err(|_| ConfigError::InvalidPort { value: raw.to_string() })?;
            addr.set_port(port);
        }
        Ok(Self { addr })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}
