use anyhow::Result;
use httpmock::prelude::*;
use pkr_tools::config::toml_config::ProbeFileConfig;
use pkr_tools::utils::validation::Validate;
use pkr_tools::{ProbeConfig, ProbeOutcome, SalesReportProbe};
use serde_json::json;
use tempfile::TempDir;

/// 透過設定檔指向 mock server，完整跑一次探測
#[tokio::test]
async fn test_probe_from_config_file() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/dashboard/sales-report");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "report": {
                    "paymentSummary": {"cash": 250000, "bankTransfer": 1750000.25},
                    "orders": 42
                }
            }));
    });

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("probe.toml");
    let config_content = format!(
        r#"
[probe]
endpoint = "{}"
timeout_seconds = 5
pkr = true
"#,
        server.url("/api/dashboard/sales-report")
    );
    tokio::fs::write(&config_path, config_content).await?;

    let mut config = ProbeConfig::default();
    ProbeFileConfig::from_file(&config_path)?.apply_to(&mut config);
    config.validate()?;

    let probe = SalesReportProbe::new(config)?;
    let outcome = probe.run().await;

    api_mock.assert();
    assert!(outcome.is_success());

    let rendered: serde_json::Value = serde_json::from_str(&outcome.render(true))?;
    assert_eq!(
        rendered,
        json!({"cash": "Rs. 250,000", "bankTransfer": "Rs. 1,750,000.25"})
    );
    Ok(())
}

#[tokio::test]
async fn test_probe_prints_raw_body_for_plain_text() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/dashboard/sales-report");
        then.status(404).body("Cannot GET /api/dashboard/sales-report");
    });

    let config = ProbeConfig {
        endpoint: server.url("/api/dashboard/sales-report"),
        ..ProbeConfig::default()
    };
    let outcome = SalesReportProbe::new(config)?.run().await;

    api_mock.assert();
    assert_eq!(
        outcome,
        ProbeOutcome::RawBody("Cannot GET /api/dashboard/sales-report".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn test_probe_custom_field_path() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/report");
        then.status(200)
            .json_body(json!({"report": {"paymentSummary": {"cash": 10}, "orders": 42}}));
    });

    let config = ProbeConfig {
        endpoint: server.url("/report"),
        field_path: "report.orders".to_string(),
        ..ProbeConfig::default()
    };
    let outcome = SalesReportProbe::new(config)?.run().await;

    assert_eq!(outcome, ProbeOutcome::Field(json!(42)));
    assert_eq!(outcome.render(false), "42");
    assert_eq!(outcome.render(true), "\"Rs. 42\"");
    Ok(())
}
