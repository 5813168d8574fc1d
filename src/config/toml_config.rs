use crate::config::ProbeConfig;
use crate::utils::error::{Result, ToolError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔內容，所有欄位皆可省略
///
/// ```toml
/// [probe]
/// endpoint = "http://localhost:5000/api/dashboard/sales-report"
/// field = "report.paymentSummary"
/// timeout_seconds = 10
/// pkr = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeFileConfig {
    pub probe: Option<ProbeSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeSection {
    pub endpoint: Option<String>,
    pub field: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub pkr: Option<bool>,
}

impl ProbeFileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ToolError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${API_HOST})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// 把設定檔中有給的值蓋到 `config` 上
    pub fn apply_to(&self, config: &mut ProbeConfig) {
        let Some(probe) = &self.probe else {
            return;
        };

        if let Some(endpoint) = &probe.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(field) = &probe.field {
            config.field_path = field.clone();
        }
        if probe.timeout_seconds.is_some() {
            config.timeout_seconds = probe.timeout_seconds;
        }
        if let Some(pkr) = probe.pkr {
            config.pkr = pkr;
        }
    }
}
