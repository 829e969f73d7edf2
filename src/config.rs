//! Deployment configuration.
//!
//! Both settings come from the environment (a `.env` file is loaded by the
//! binary before this runs):
//!
//! - `API_BASE_URL`: backend prefix every REST call is built on
//! - `BIND_ADDR`: listen address of the UI shell

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};

use crate::api::ApiClient;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_values(env::var("API_BASE_URL").ok(), env::var("BIND_ADDR").ok())
    }

    /// Build a config from optional raw values, falling back to the defaults
    /// for anything unset or blank.
    pub fn from_values(api_base_url: Option<String>, bind_addr: Option<String>) -> Result<Self> {
        let api_base_url = api_base_url
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let bind_addr = bind_addr
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .trim()
            .parse()
            .with_context(|| format!("invalid BIND_ADDR {bind_addr:?}"))?;

        let config = Self {
            api_base_url: api_base_url.trim().to_string(),
            bind_addr,
        };
        config.api_client()?;
        Ok(config)
    }

    pub fn api_client(&self) -> Result<ApiClient> {
        ApiClient::new(&self.api_base_url).context("invalid API_BASE_URL")
    }
}
