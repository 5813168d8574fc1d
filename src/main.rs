use clap::Parser;
use pkr_tools::core::ProbeSettings;
use pkr_tools::utils::{logger, validation::Validate};
use pkr_tools::{CliConfig, SalesReportProbe};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if cli.verbose {
        tracing::debug!("CLI flags: {:?}", cli);
    }

    // 合併並驗證配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Probing {} for field '{}'",
        config.endpoint(),
        config.field_path()
    );

    let probe = match SalesReportProbe::new(config) {
        Ok(probe) => probe,
        Err(e) => {
            tracing::error!("❌ Failed to create HTTP client: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    let outcome = probe.run().await;

    // 探測失敗只印出訊息，不改變退出碼
    println!("{}", outcome.render(probe.settings().render_pkr()));

    Ok(())
}
