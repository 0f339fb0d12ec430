//! Server configuration parsed from environment variables.
//!
//! Every setting has a default so `cargo leptos watch` works with no `.env`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} ({reason})")]
    Invalid { key: &'static str, value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Env: `BIND_ADDR`, default `0.0.0.0`.
    pub bind_addr: IpAddr,
    /// Env: `PORT`, default `3000`.
    pub port: u16,
    /// Static files served for any path the app does not route.
    /// Env: `PUBLIC_DIR`, default `<server crate>/../public`.
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT, public_dir: default_public_dir() }
    }
}

impl ServerConfig {
    /// Build config from `PORT`, `BIND_ADDR` and `PUBLIC_DIR`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` or `BIND_ADDR` is set
    /// but does not parse. Unset or blank variables use the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match value("PORT") {
            Some(raw) => parse("PORT", raw)?,
            None => defaults.port,
        };
        let bind_addr = match value("BIND_ADDR") {
            Some(raw) => parse("BIND_ADDR", raw)?,
            None => defaults.bind_addr,
        };
        let public_dir = value("PUBLIC_DIR").map_or(defaults.public_dir, PathBuf::from);

        Ok(Self { bind_addr, port, public_dir })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse<T>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| ConfigError::Invalid { key, reason: e.to_string(), value: raw })
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}
