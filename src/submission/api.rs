//! POST client for the hosted form-collection endpoint.

use tracing::{debug, info, warn};

use super::{DemoSubmission, MultipartBody};
use crate::http_client;

/// Endpoint used when no configuration overrides it.
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/meelekpb";
/// Message shown when a failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The endpoint answered with a status outside 2xx.
    #[error("Submission failed ({0})")]
    Status(u16),
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    #[error("Something went wrong. Please try again.")]
    Unknown,
}

impl SubmitError {
    /// Wrap a transport failure, falling back to [`SubmitError::Unknown`] when it has no text.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Unknown
        } else {
            Self::Transport(message)
        }
    }
}

/// Post `submission` to `endpoint` as multipart form data.
///
/// Only a 2xx status counts as success. Blocks until the request settles.
pub fn submit_demo(endpoint: &str, submission: &DemoSubmission) -> Result<(), SubmitError> {
    let body = MultipartBody::from_fields(submission.fields());
    let request = http_client::agent()
        .post(endpoint)
        .set("Accept", "application/json")
        .set("Content-Type", &body.content_type());

    info!(endpoint, bytes = body.bytes().len(), "Posting demo submission");
    match request.send_bytes(body.bytes()) {
        Ok(response) => {
            let status = response.status();
            if (200..300).contains(&status) {
                info!(status, "Demo submission accepted");
                Ok(())
            } else {
                warn!(status, "Demo submission returned a non-success status");
                Err(SubmitError::Status(status))
            }
        }
        Err(ureq::Error::Status(code, response)) => {
            log_error_body(code, response);
            Err(SubmitError::Status(code))
        }
        Err(ureq::Error::Transport(err)) => {
            warn!("Demo submission transport error: {err}");
            Err(SubmitError::transport(err.to_string()))
        }
    }
}

fn log_error_body(code: u16, response: ureq::Response) {
    let body = http_client::read_response_bytes(response, MAX_ERROR_BODY_BYTES)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_else(|err| format!("<unreadable: {err}>"));
    warn!(status = code, "Demo submission rejected");
    debug!(status = code, "Rejection body: {body}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_the_banner() {
        assert_eq!(SubmitError::Status(422).to_string(), "Submission failed (422)");
        assert_eq!(SubmitError::Status(503).to_string(), "Submission failed (503)");
    }

    #[test]
    fn blank_transport_message_falls_back_to_generic_text() {
        assert_eq!(SubmitError::transport("  "), SubmitError::Unknown);
        assert_eq!(SubmitError::Unknown.to_string(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn transport_message_is_shown_verbatim() {
        let err = SubmitError::transport("Connection refused");
        assert_eq!(err.to_string(), "Connection refused");
    }

    #[test]
    fn malformed_endpoint_surfaces_as_transport_error() {
        let err = submit_demo("not a url", &DemoSubmission::default()).unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
    }
}
