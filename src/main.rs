use anyhow::Result;
use statusbridge::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    tracing::info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "Starting report run"
    );

    let app_config = config::AppConfig::load()?;
    let nagios = nagios_repo::NagiosRepo::new(&app_config.backend)?;
    let webhook = webhook_repo::WebhookRepo::new(&app_config.webhook)?;

    // A failed fetch still produces a report; the failure text takes the
    // place of the affected sections.
    let (hosts, services) = tokio::join!(nagios.fetch_hosts(), nagios.fetch_services());
    let hosts = hosts.map_err(|e| {
        tracing::warn!(error = %e, operation = "fetch_hosts", "Host status fetch failed");
        e.to_string()
    });
    let services = services.map_err(|e| {
        tracing::warn!(error = %e, operation = "fetch_services", "Service status fetch failed");
        e.to_string()
    });

    let report = report::compose_report(
        &hosts,
        &services,
        chrono::Utc::now(),
        app_config.report.max_list_entries,
    );
    webhook.post_text(&report).await?;
    tracing::info!(report_len = report.len(), "Report posted");

    Ok(())
}
