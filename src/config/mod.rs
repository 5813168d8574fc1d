#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::probe::{DEFAULT_ENDPOINT, DEFAULT_FIELD_PATH};
use crate::core::ProbeSettings;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 合併預設值、設定檔與命令列參數後的最終設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    pub endpoint: String,
    pub field_path: String,
    pub timeout_seconds: Option<u64>,
    pub pkr: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            field_path: DEFAULT_FIELD_PATH.to_string(),
            timeout_seconds: None,
            pkr: false,
        }
    }
}

impl ProbeSettings for ProbeConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn field_path(&self) -> &str {
        &self.field_path
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn render_pkr(&self) -> bool {
        self.pkr
    }
}

impl Validate for ProbeConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_field_path("field", &self.field_path)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
