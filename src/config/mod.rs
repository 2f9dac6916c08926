//! Configuration module for the telemetry server.
//!
//! This module provides structured configuration loading from
//! environment variables. The catalog itself needs none; everything
//! here concerns the HTTP listener.

use anyhow::{Context, Result};
use std::env;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Loads configuration from `SERVER_BIND_ADDRESS` and `SERVER_PORT`,
    /// falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let bind_address =
            env::var("SERVER_BIND_ADDRESS").unwrap_or_else(|_| defaults.bind_address);

        let port = match env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid SERVER_PORT: {raw}. Must be a port number"))?,
            Err(_) => defaults.port,
        };

        Ok(Self { bind_address, port })
    }

    /// The socket address string to bind the listener to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
