//! Generator config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use metricsgen_core::error::{MetricsGenError, Result};

pub use schema::{GeneratorConfig, LimitsSection, ServerSection};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<GeneratorConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        MetricsGenError::Internal(format!("read config failed ({}): {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GeneratorConfig> {
    let cfg: GeneratorConfig = serde_yaml::from_str(s)
        .map_err(|e| MetricsGenError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
