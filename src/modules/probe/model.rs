use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::Value;

/// One outbound request in a probe sequence.
#[derive(Debug, Clone)]
pub struct ProbeSpec {
    /// Human-readable label shown in the report.
    pub name: String,
    pub method: Method,
    /// Path under the API base, or an absolute URL for endpoints that live
    /// outside it (the actuator health check).
    pub path: String,
    pub body: Option<Value>,
    /// When set, the probe is only issued if the login step produced a
    /// bearer token; otherwise it is recorded as skipped.
    pub requires_auth: bool,
}

impl ProbeSpec {
    pub fn get(name: &str, path: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            method: Method::GET,
            path: path.into(),
            body: None,
            requires_auth: false,
        }
    }

    pub fn post(name: &str, path: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            method: Method::POST,
            path: path.into(),
            body: None,
            requires_auth: false,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }
}

/// What one probe observed.
#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    /// 2xx/3xx with a JSON body.
    Success { status: u16, body: Value },
    /// Status >= 400; the raw body is kept for diagnostics.
    HttpError { status: u16, body: String },
    /// Successful status but the body was not the expected JSON.
    ParseError { status: u16, detail: String },
    /// Host unreachable or the per-request timeout elapsed.
    ConnectionError { detail: String },
    /// Not issued: required auth, but no token was available.
    Skipped { reason: String },
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success { .. })
    }

    /// Marker used when the outcome is rendered.
    pub fn marker(&self) -> &'static str {
        match self {
            ProbeOutcome::Success { .. } => "✅",
            ProbeOutcome::Skipped { .. } => "⚠️",
            _ => "❌",
        }
    }
}

/// Captured result of one issued probe. Ephemeral: lives only for the
/// duration of a report.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub name: String,
    pub method: Method,
    pub path: String,
    pub timestamp: DateTime<Utc>,
    pub outcome: ProbeOutcome,
}
