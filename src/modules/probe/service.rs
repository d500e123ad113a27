use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::config::api::ApiConfig;
use crate::modules::probe::model::{ProbeOutcome, ProbeResult, ProbeSpec};
use crate::utils::errors::OpsError;
use crate::utils::report::Report;

/// Issues probe sequences against the backend, one request at a time.
///
/// The client and any bearer token live for a single script invocation.
/// There is no retry logic: a request gets one attempt, bounded by the
/// configured timeout, and its result is whatever that attempt observed.
pub struct Prober {
    client: Client,
    config: ApiConfig,
    token: Option<String>,
}

impl Prober {
    pub fn new(config: ApiConfig) -> Result<Self, OpsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpsError::Connection(e.to_string()))?;
        Ok(Self {
            client,
            config,
            token: None,
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.config.base_url, path)
        }
    }

    /// POSTs credentials and stores the bearer token found at `token_field`,
    /// a dotted path into the JSON response (e.g. `data.token`).
    ///
    /// A failed login is recoverable: the token stays unset, probes that
    /// require auth are recorded as skipped, and independent probes still run.
    #[instrument(skip(self, credentials))]
    pub async fn login(
        &mut self,
        path: &str,
        credentials: Value,
        token_field: &str,
    ) -> Result<(), OpsError> {
        let url = self.url_for(path);
        let response = self
            .client
            .post(&url)
            .json(&credentials)
            .send()
            .await
            .map_err(OpsError::from)?;

        let status = response.status();
        let text = response.text().await.map_err(OpsError::from)?;
        if !status.is_success() {
            return Err(OpsError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let body: Value = serde_json::from_str(&text)
            .map_err(|e| OpsError::Parse(format!("login response is not valid JSON: {}", e)))?;
        let token = lookup_field(&body, token_field)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                OpsError::Parse(format!("no '{}' field in login response", token_field))
            })?;

        self.token = Some(token.to_string());
        info!(%url, "authenticated");
        Ok(())
    }

    /// Runs the sequence strictly in the given order. Every request completes
    /// (or times out) before the next begins; no outcome aborts the rest.
    pub async fn run(&self, sequence: &[ProbeSpec]) -> Vec<ProbeResult> {
        let mut results = Vec::with_capacity(sequence.len());
        for spec in sequence {
            results.push(self.execute(spec).await);
        }
        results
    }

    async fn execute(&self, spec: &ProbeSpec) -> ProbeResult {
        let timestamp = Utc::now();
        let outcome = if spec.requires_auth && self.token.is_none() {
            ProbeOutcome::Skipped {
                reason: "requires authentication, but login did not produce a token".to_string(),
            }
        } else {
            self.send(spec).await
        };

        if let ProbeOutcome::ConnectionError { detail } = &outcome {
            warn!(probe = %spec.name, %detail, "probe could not reach the backend");
        }

        ProbeResult {
            name: spec.name.clone(),
            method: spec.method.clone(),
            path: spec.path.clone(),
            timestamp,
            outcome,
        }
    }

    async fn send(&self, spec: &ProbeSpec) -> ProbeOutcome {
        let url = self.url_for(&spec.path);
        let mut request = self.client.request(spec.method.clone(), &url);
        if let Some(body) = &spec.body {
            request = request.json(body);
        }
        if spec.requires_auth {
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                return ProbeOutcome::ConnectionError {
                    detail: e.to_string(),
                };
            }
        };

        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                return ProbeOutcome::ConnectionError {
                    detail: e.to_string(),
                };
            }
        };

        if status >= 400 {
            return ProbeOutcome::HttpError { status, body: text };
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(body) => ProbeOutcome::Success { status, body },
            Err(e) => ProbeOutcome::ParseError {
                status,
                detail: e.to_string(),
            },
        }
    }
}

/// Renders probe results into report sections, one per request, in the order
/// they were issued.
pub fn render_results(results: &[ProbeResult]) -> String {
    let mut report = Report::new();
    for result in results {
        report.section(&result.name.to_uppercase());
        report.kv("Request", format!("{} {}", result.method, result.path));
        report.kv(
            "At",
            result.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        );
        match &result.outcome {
            ProbeOutcome::Success { status, body } => {
                report.ok(&format!("Status {}", status));
                let pretty = serde_json::to_string_pretty(body)
                    .unwrap_or_else(|_| body.to_string());
                report.line(&pretty);
            }
            ProbeOutcome::HttpError { status, body } => {
                report.fail(&format!("Status {}", status));
                if !body.is_empty() {
                    report.kv("Body", body);
                }
            }
            ProbeOutcome::ParseError { status, detail } => {
                report.fail(&format!("Status {} but body is not valid JSON", status));
                report.kv("Detail", detail);
            }
            ProbeOutcome::ConnectionError { detail } => {
                report.fail("Cannot connect to backend");
                report.kv("Detail", detail);
            }
            ProbeOutcome::Skipped { reason } => {
                report.warn(&format!("Skipped: {}", reason));
            }
        }
    }
    report.render()
}

/// Walks a dotted field path through nested JSON objects.
fn lookup_field<'a>(body: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(body, |value, key| value.get(key))
}
