//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use vitals_core::error::{Result, VitalsError};

pub use schema::{ServerSection, ServiceConfig};

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| VitalsError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Load config, falling back to the built-in defaults when the file does
/// not exist. The service is fully functional without a config file.
pub fn load_or_default(path: &str) -> Result<ServiceConfig> {
    if Path::new(path).exists() {
        load_from_file(path)
    } else {
        let cfg = ServiceConfig::default();
        cfg.validate()?;
        Ok(cfg)
    }
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| VitalsError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
