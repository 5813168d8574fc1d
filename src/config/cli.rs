use crate::config::toml_config::ProbeFileConfig;
use crate::config::ProbeConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pkr-tools")]
#[command(about = "Fetch the dashboard sales report and print its payment summary")]
pub struct CliConfig {
    #[arg(long, help = "Sales report URL [default: http://localhost:5000/api/dashboard/sales-report]")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Dot separated path of the field to print [default: report.paymentSummary]")]
    pub field: Option<String>,

    #[arg(long, help = "Request timeout in seconds (no timeout when omitted)")]
    pub timeout_secs: Option<u64>,

    #[arg(long, help = "TOML file with a [probe] section")]
    pub config: Option<String>,

    #[arg(long, help = "Render numeric values as Rs. amounts")]
    pub pkr: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 預設值 < 設定檔 < 命令列參數
    pub fn resolve(&self) -> Result<ProbeConfig> {
        let mut config = ProbeConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading config file: {}", path);
            ProbeFileConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(field) = &self.field {
            config.field_path = field.clone();
        }
        if self.timeout_secs.is_some() {
            config.timeout_seconds = self.timeout_secs;
        }
        if self.pkr {
            config.pkr = true;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_flags_resolves_to_defaults() {
        let cli = CliConfig::parse_from(["pkr-tools"]);
        assert_eq!(cli.resolve().unwrap(), ProbeConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[probe]\nendpoint = \"http://file.example.com/report\"\nfield = \"report.fromFile\"\ntimeout_seconds = 30\n",
            )
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "pkr-tools",
            "--config",
            path.as_str(),
            "--field",
            "report.fromCli",
            "--pkr",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.endpoint, "http://file.example.com/report");
        assert_eq!(config.field_path, "report.fromCli");
        assert_eq!(config.timeout_seconds, Some(30));
        assert!(config.pkr);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = CliConfig::parse_from(["pkr-tools", "--config", "/no/such/probe.toml"]);
        assert!(cli.resolve().is_err());
    }
}
