use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub webhook: WebhookConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the monitoring backend's CGI directory, e.g.
    /// "https://nagios.example.com/nagios/cgi-bin".
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Max entries a list section may show in full; larger snapshots fall
    /// back to abnormal-only listing.
    #[serde(default = "default_max_list_entries")]
    pub max_list_entries: usize,
}

fn default_max_list_entries() -> usize {
    50
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_list_entries: default_max_list_entries(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.backend.base_url.is_empty(),
            "backend.base_url must be non-empty"
        );
        anyhow::ensure!(
            self.backend.timeout_secs > 0,
            "backend.timeout_secs must be > 0, got {}",
            self.backend.timeout_secs
        );
        anyhow::ensure!(!self.webhook.url.is_empty(), "webhook.url must be non-empty");
        anyhow::ensure!(
            self.webhook.timeout_secs > 0,
            "webhook.timeout_secs must be > 0, got {}",
            self.webhook.timeout_secs
        );
        anyhow::ensure!(
            self.report.max_list_entries > 0,
            "report.max_list_entries must be > 0, got {}",
            self.report.max_list_entries
        );
        Ok(())
    }
}
