use std::sync::Arc;
use std::time::Duration;

pub const SERVICE_BASE_URL: &str = "http://localhost:8080";

// Origin the contact-form service must allow for browser submissions.
pub const FORM_ORIGIN: &str = "https://connexxo.com";

const TOTAL_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    Get,
    Options,
}

#[derive(Debug, Clone)]
pub struct Probe {
    pub name: &'static str,
    pub method: ProbeMethod,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub expected: &'static [u16],
}

impl Probe {
    pub fn health(base_url: &str) -> Self {
        Self {
            name: "health",
            method: ProbeMethod::Get,
            url: format!("{base_url}/health"),
            headers: Vec::new(),
            expected: &[200],
        }
    }

    pub fn token_script(base_url: &str) -> Self {
        Self {
            name: "token",
            method: ProbeMethod::Get,
            url: format!("{base_url}/form-token.js"),
            headers: Vec::new(),
            expected: &[200],
        }
    }

    pub fn cors_preflight(base_url: &str) -> Self {
        Self {
            name: "cors",
            method: ProbeMethod::Options,
            url: format!("{base_url}/f/contact"),
            headers: vec![("Origin", FORM_ORIGIN.to_string())],
            expected: &[200, 204],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub success: bool,
    pub status: Option<u16>,
    pub body: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusReport {
    pub base_url: String,
    pub checked_at: String,
    pub health: CheckResult,
    pub token: CheckResult,
    pub cors: CheckResult,
}

#[async_trait::async_trait]
pub trait ProbeTransport: Send + Sync {
    async fn send(&self, probe: &Probe) -> Result<ProbeResponse, String>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(TOTAL_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("failed to build probe http client");
        Self { client }
    }
}

#[async_trait::async_trait]
impl ProbeTransport for ReqwestTransport {
    async fn send(&self, probe: &Probe) -> Result<ProbeResponse, String> {
        let method = match probe.method {
            ProbeMethod::Get => reqwest::Method::GET,
            ProbeMethod::Options => reqwest::Method::OPTIONS,
        };

        let mut request = self.client.request(method, &probe.url);
        for (name, value) in probe.headers.iter() {
            request = request.header(*name, value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|err| format!("request failed: {err}"))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| format!("failed to read response: {err}"))?;

        Ok(ProbeResponse { status, body })
    }
}

#[derive(Clone)]
pub struct StatusChecker {
    transport: Arc<dyn ProbeTransport>,
    base_url: String,
}

impl StatusChecker {
    pub fn new(transport: Arc<dyn ProbeTransport>) -> Self {
        Self::with_base_url(transport, SERVICE_BASE_URL)
    }

    pub fn with_base_url(transport: Arc<dyn ProbeTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    // Each probe blocks until its own timeout or completion before the next
    // one starts.
    pub async fn run(&self) -> StatusReport {
        let health = self.check(&Probe::health(&self.base_url)).await;
        let token = self.check(&Probe::token_script(&self.base_url)).await;
        let cors = self.check(&Probe::cors_preflight(&self.base_url)).await;

        StatusReport {
            base_url: self.base_url.clone(),
            checked_at: crate::services::current_datetime(),
            health,
            token,
            cors,
        }
    }

    pub async fn check(&self, probe: &Probe) -> CheckResult {
        match self.transport.send(probe).await {
            Ok(response) => {
                let success = probe.expected.contains(&response.status);
                if success {
                    tracing::debug!("probe {} ok with status {}", probe.name, response.status);
                } else {
                    tracing::warn!("probe {} failed with status {}", probe.name, response.status);
                }
                CheckResult {
                    success,
                    status: Some(response.status),
                    body: Some(response.body),
                    error: None,
                }
            }
            Err(err) => {
                tracing::warn!("probe {} failed: {}", probe.name, err);
                CheckResult {
                    success: false,
                    status: None,
                    body: None,
                    error: Some(err),
                }
            }
        }
    }
}
