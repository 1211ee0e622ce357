use std::time::Duration;

use reqwest::blocking::{Client, multipart::Form};

use crate::{
    foundation::error::{MaskformError, MaskformResult},
    submit::request::{GenerationResult, SubmissionRequest},
};

/// Delivers a [`SubmissionRequest`] to a generation endpoint.
pub trait Transport {
    /// Post the request as a multipart form and return the decoded results, in order.
    fn post_form(
        &mut self,
        endpoint: &str,
        request: &SubmissionRequest,
    ) -> MaskformResult<Vec<GenerationResult>>;
}

/// Blocking HTTP transport posting `multipart/form-data`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> MaskformResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MaskformError::transport(format!("build http client: {e}")))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_form(
        &mut self,
        endpoint: &str,
        request: &SubmissionRequest,
    ) -> MaskformResult<Vec<GenerationResult>> {
        let form = request
            .fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name, value.to_string())
            });

        tracing::debug!(
            endpoint,
            style = request.style.as_str(),
            image_len = request.image_file.len(),
            "posting generation request"
        );
        let resp = self
            .client
            .post(endpoint)
            .multipart(form)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| MaskformError::transport(format!("post '{endpoint}': {e}")))?;

        resp.json::<Vec<GenerationResult>>()
            .map_err(|e| MaskformError::transport(format!("decode response from '{endpoint}': {e}")))
    }
}

/// Transport that never touches the network, for tests and dry runs.
///
/// Every request is recorded; each call answers with the configured outcome.
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    outcome: Option<Result<Vec<GenerationResult>, String>>,
    requests: Vec<(String, SubmissionRequest)>,
}

impl InMemoryTransport {
    /// Transport that answers every request with `results`.
    pub fn succeeding(results: Vec<GenerationResult>) -> Self {
        Self {
            outcome: Some(Ok(results)),
            requests: Vec::new(),
        }
    }

    /// Transport that fails every request with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Some(Err(reason.into())),
            requests: Vec::new(),
        }
    }

    /// Replace the answer given to subsequent requests.
    pub fn set_outcome(&mut self, outcome: Result<Vec<GenerationResult>, String>) {
        self.outcome = Some(outcome);
    }

    /// Requests received so far, with their endpoints.
    pub fn requests(&self) -> &[(String, SubmissionRequest)] {
        &self.requests
    }
}

impl Transport for InMemoryTransport {
    fn post_form(
        &mut self,
        endpoint: &str,
        request: &SubmissionRequest,
    ) -> MaskformResult<Vec<GenerationResult>> {
        self.requests.push((endpoint.to_string(), request.clone()));
        match &self.outcome {
            Some(Ok(results)) => Ok(results.clone()),
            Some(Err(reason)) => Err(MaskformError::transport(reason.clone())),
            None => Err(MaskformError::transport("no response configured")),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/submit/transport.rs"]
mod tests;
