// Monitoring backend client (statusjson.cgi queries)

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use crate::config::BackendConfig;
use crate::models::{HostSnapshot, HostState, ServiceChecks, ServiceSnapshot};

/// The envelope's type_text for a query the backend answered successfully.
const RESULT_TYPE_SUCCESS: &str = "Success";

/// Why a status query produced no snapshot. The report embeds the display
/// text in its failure lines; both variants render the raw underlying
/// message without extra framing.
#[derive(Debug, Error)]
pub enum NagiosError {
    /// Transport failure, non-2xx response, or an undecodable body.
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered but flagged the query unsuccessful.
    #[error("{0}")]
    Api(String),
}

/// Every statusjson response wraps its payload in a result envelope; the
/// payload is only trustworthy when type_text says Success.
#[derive(Debug, Deserialize)]
struct StatusEnvelope<T> {
    result: QueryStatus,
    #[serde(default)]
    data: Option<T>,
}

#[derive(Debug, Deserialize, Default)]
struct QueryStatus {
    #[serde(default)]
    type_text: String,
    #[serde(default)]
    message: String,
}

impl QueryStatus {
    fn error_text(&self) -> String {
        if self.message.is_empty() {
            self.type_text.clone()
        } else {
            format!("{}: {}", self.type_text, self.message)
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct HostListData {
    #[serde(default)]
    hostlist: BTreeMap<String, HostState>,
}

/// servicelist groups check states under an entry name; an entry bundles
/// every check reported for it.
#[derive(Debug, Deserialize, Default)]
struct ServiceListData {
    #[serde(default)]
    servicelist: BTreeMap<String, ServiceChecks>,
}

pub struct NagiosRepo {
    client: reqwest::Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
}

impl NagiosRepo {
    pub fn new(config: &BackendConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    #[instrument(skip(self), fields(repo = "nagios", operation = "fetch_hosts"))]
    pub async fn fetch_hosts(&self) -> Result<HostSnapshot, NagiosError> {
        let data: HostListData = self.query("hostlist").await?;
        let snapshot = HostSnapshot {
            hosts: data.hostlist,
        };
        tracing::debug!(hosts = snapshot.hosts.len(), "Host status fetched");
        Ok(snapshot)
    }

    #[instrument(skip(self), fields(repo = "nagios", operation = "fetch_services"))]
    pub async fn fetch_services(&self) -> Result<ServiceSnapshot, NagiosError> {
        let data: ServiceListData = self.query("servicelist").await?;
        let snapshot = ServiceSnapshot {
            services: data.servicelist,
        };
        tracing::debug!(services = snapshot.services.len(), "Service status fetched");
        Ok(snapshot)
    }

    /// Run one statusjson query and unwrap its envelope. A successful
    /// envelope without data (backend with nothing configured) yields the
    /// payload type's default, i.e. an empty snapshot.
    async fn query<T>(&self, query: &str) -> Result<T, NagiosError>
    where
        T: DeserializeOwned + Default,
    {
        let url = format!("{}/statusjson.cgi", self.base_url);
        let mut request = self.client.get(&url).query(&[("query", query)]);
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_deref());
        }

        let envelope: StatusEnvelope<T> = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if envelope.result.type_text != RESULT_TYPE_SUCCESS {
            return Err(NagiosError::Api(envelope.result.error_text()));
        }
        Ok(envelope.data.unwrap_or_default())
    }
}
