use url_risk_analyzer::config::AppConfig;
use url_risk_analyzer::server::run_server;
use url_risk_analyzer::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(&config.log_level);

    tracing::info!(service = "url-risk-analyzer", "starting");
    run_server(config).await
}
