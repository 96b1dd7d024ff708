//! Command line flags.
//!
//! Flags override the config file, which overrides built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use metricsgen_core::Result;

use crate::config::{self, GeneratorConfig};

#[derive(Debug, Parser)]
#[command(name = "metrics-generator", version, about = "Synthetic request metrics generator")]
pub struct Cli {
    /// YAML config file.
    #[arg(long, env = "METRICS_GENERATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// The address to listen to.
    #[arg(long)]
    pub addr: Option<String>,

    /// Minimum request duration, in seconds.
    #[arg(long, allow_negative_numbers = true)]
    pub duration_min: Option<i64>,

    /// Maximum request duration, in seconds.
    #[arg(long, allow_negative_numbers = true)]
    pub duration_max: Option<i64>,

    /// Metric generation rate.
    #[arg(long, allow_negative_numbers = true)]
    pub requests_hour: Option<i64>,

    /// Which percentage of the requests will fail.
    #[arg(long, allow_negative_numbers = true)]
    pub errors_percentage: Option<f64>,
}

impl Cli {
    /// Resolve the effective config and validate it.
    pub fn into_config(self) -> Result<GeneratorConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_file(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(addr) = self.addr {
            cfg.server.listen = addr;
        }
        if let Some(v) = self.duration_min {
            cfg.limits.duration_min = v;
        }
        if let Some(v) = self.duration_max {
            cfg.limits.duration_max = v;
        }
        if let Some(v) = self.requests_hour {
            cfg.limits.requests_hour = v;
        }
        if let Some(v) = self.errors_percentage {
            cfg.limits.errors_percentage = v;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let cfg = Cli::try_parse_from(["metrics-generator"])
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(cfg.server.listen, "0.0.0.0:8080");
        assert_eq!(cfg.limits.duration_min, 1);
        assert_eq!(cfg.limits.duration_max, 10);
        assert_eq!(cfg.limits.requests_hour, 1000);
        assert_eq!(cfg.limits.errors_percentage, 10.0);
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = Cli::try_parse_from([
            "metrics-generator",
            "--addr",
            "127.0.0.1:9000",
            "--duration-min",
            "2",
            "--duration-max",
            "4",
            "--requests-hour",
            "3600",
            "--errors-percentage",
            "0.5",
        ])
        .unwrap()
        .into_config()
        .unwrap();

        assert_eq!(cfg.server.listen, "127.0.0.1:9000");
        assert_eq!((cfg.limits.duration_min, cfg.limits.duration_max), (2, 4));
        assert_eq!(cfg.limits.requests_hour, 3600);
        assert_eq!(cfg.limits.errors_percentage, 0.5);
    }

    #[test]
    fn port_only_addr_is_accepted() {
        let cfg = Cli::try_parse_from(["metrics-generator", "--addr", ":9090"])
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(cfg.server.listen_addr().unwrap().to_string(), "0.0.0.0:9090");
    }

    #[test]
    fn invalid_startup_limits_are_rejected() {
        let err = Cli::try_parse_from(["metrics-generator", "--duration-min", "-1"])
            .unwrap()
            .into_config()
            .unwrap_err();
        assert_eq!(err.client_code().as_str(), "INVALID_ARGUMENT");

        let err = Cli::try_parse_from(["metrics-generator", "--errors-percentage", "101"])
            .unwrap()
            .into_config()
            .unwrap_err();
        assert_eq!(err.client_code().as_str(), "INVALID_ARGUMENT");
    }

    #[test]
    fn missing_config_file_is_internal() {
        let err = Cli::try_parse_from([
            "metrics-generator",
            "--config",
            "/nonexistent/metrics-generator.yaml",
        ])
        .unwrap()
        .into_config()
        .unwrap_err();
        assert_eq!(err.client_code().as_str(), "INTERNAL");
    }
}
