use std::net::{SocketAddr, ToSocketAddrs};

use metricsgen_core::error::{MetricsGenError, Result};
use metricsgen_core::Limits;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub limits: LimitsSection,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            limits: LimitsSection::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsGenError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.limits.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_shutdown_timeout_ms")]
    pub shutdown_timeout_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            shutdown_timeout_ms: default_shutdown_timeout_ms(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if self.shutdown_timeout_ms > 60_000 {
            return Err(MetricsGenError::BadRequest(
                "server.shutdown_timeout_ms must be at most 60000".into(),
            ));
        }
        Ok(())
    }

    /// Resolve `listen` to the address to bind.
    ///
    /// An empty host (`":8080"`) means every interface. Host names are
    /// resolved and the first address wins.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let listen = self.listen.trim();
        let listen = match listen.strip_prefix(':') {
            Some(port) => format!("0.0.0.0:{port}"),
            None => listen.to_owned(),
        };
        if let Ok(addr) = listen.parse() {
            return Ok(addr);
        }

        let bad = |reason: String| {
            MetricsGenError::BadRequest(format!(
                "server.listen must be a valid socket address ({}): {reason}",
                self.listen
            ))
        };
        listen
            .to_socket_addrs()
            .map_err(|e| bad(e.to_string()))?
            .next()
            .ok_or_else(|| bad("host resolved to no addresses".into()))
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_shutdown_timeout_ms() -> u64 {
    1000
}

/// Initial generation limits.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsSection {
    #[serde(default = "default_duration_min")]
    pub duration_min: i64,

    #[serde(default = "default_duration_max")]
    pub duration_max: i64,

    #[serde(default = "default_requests_hour")]
    pub requests_hour: i64,

    #[serde(default = "default_errors_percentage")]
    pub errors_percentage: f64,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            duration_min: default_duration_min(),
            duration_max: default_duration_max(),
            requests_hour: default_requests_hour(),
            errors_percentage: default_errors_percentage(),
        }
    }
}

impl LimitsSection {
    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }

    /// Build the shared limits store; runs the same validation as the setters.
    pub fn build(&self) -> Result<Limits> {
        Limits::new(
            self.duration_min,
            self.duration_max,
            self.errors_percentage,
            self.requests_hour,
        )
    }
}

fn default_duration_min() -> i64 {
    1
}
fn default_duration_max() -> i64 {
    10
}
fn default_requests_hour() -> i64 {
    1000
}
fn default_errors_percentage() -> f64 {
    10.0
}
