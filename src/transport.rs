// Transport module: a small blocking HTTP client that posts the submission
// payload to the grader and sorts the response into a `SubmissionResult`.

use crate::payload::SubmissionPayload;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use reqwest::header::{HeaderValue, CACHE_CONTROL};
use reqwest::StatusCode;
use tracing::{debug, info};

/// Where programming-assignment scripts submit to.
pub const SUBMIT_URL: &str = "https://www.coursera.org/api/onDemandProgrammingScriptSubmissions.v1";

/// What became of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The grader accepted the submission.
    Success,
    /// The grader refused the credentials; the user needs a fresh token.
    AuthFailure { status: u16 },
    /// Anything else: unreachable host, unexpected status, unreadable reply.
    TransportError { message: String },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success)
    }

    /// Map a response status. Client errors are how the grader reports a bad
    /// or spent token; everything else that is not 2xx is a transport error.
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_success() {
            SubmissionResult::Success
        } else if status.is_client_error() {
            SubmissionResult::AuthFailure { status: status.as_u16() }
        } else {
            SubmissionResult::TransportError {
                message: format!("unexpected response from grader: {}", status),
            }
        }
    }
}

/// Something that can deliver a payload.
pub trait Transport {
    fn submit(&self, payload: &SubmissionPayload) -> SubmissionResult;
}

/// Holds a reqwest blocking client and the endpoint it posts to.
#[derive(Clone)]
pub struct SubmissionClient {
    client: Client,
    endpoint: String,
}

impl SubmissionClient {
    pub fn new(endpoint: impl Into<String>) -> reqwest::Result<Self> {
        // a followed redirect would re-send as a bodyless GET; surface the 3xx instead
        let client = Client::builder().redirect(Policy::none()).build()?;
        Ok(SubmissionClient {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Client for the grader's production endpoint.
    pub fn coursera() -> reqwest::Result<Self> {
        Self::new(SUBMIT_URL)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for SubmissionClient {
    /// POST the payload as JSON exactly once.
    fn submit(&self, payload: &SubmissionPayload) -> SubmissionResult {
        info!(endpoint = %self.endpoint, parts = payload.parts.len(), "sending submission");
        // `json` sets Content-Type: application/json
        let res = self
            .client
            .post(&self.endpoint)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .json(payload)
            .send();

        let res = match res {
            Ok(res) => res,
            Err(e) => {
                debug!(error = %e, "submission request failed");
                return SubmissionResult::TransportError {
                    message: e.to_string(),
                };
            }
        };

        let status = res.status();
        let result = SubmissionResult::from_status(status);
        if !result.is_success() {
            // the body may echo request details, keep it out of user output
            let txt = res.text().unwrap_or_else(|_| "".into());
            debug!(%status, body = %txt, "grader rejected submission");
        } else {
            info!(%status, "submission accepted");
        }
        result
    }
}

/// One-shot submission to `endpoint` with a freshly built client.
pub fn submit(payload: &SubmissionPayload, endpoint: &str) -> SubmissionResult {
    match SubmissionClient::new(endpoint) {
        Ok(client) => client.submit(payload),
        Err(e) => SubmissionResult::TransportError {
            message: format!("failed to build HTTP client: {}", e),
        },
    }
}
