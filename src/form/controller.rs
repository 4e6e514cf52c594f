use tracing::{info, warn};

use super::jobs::{SubmitJob, SubmitJobs};
use super::state::{DemoFormState, FormField, SubmissionStatus};
use super::validation::{self, FieldError};
use crate::submission::{DESCRIPTION_MAX_LEN, DemoSubmission, SubmitError, truncate_utf16};

/// Shown instead of posting when no endpoint is configured.
pub const UNSET_ENDPOINT_MESSAGE: &str =
    "Form action URL is not configured. Set `endpoint` in config.toml or DEMOFORM_ENDPOINT.";

/// What a call to [`FormController::submit`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request is on its way.
    Started,
    /// Validation failed; nothing was sent and the state is unchanged.
    Blocked(FieldError),
    /// A request is already in flight or the form was already accepted.
    Ignored,
    /// The form moved straight to the error state without a request.
    Failed,
}

/// Owns the form values and drives idle → submitting → success/error.
pub struct FormController {
    endpoint: String,
    pub state: DemoFormState,
    jobs: SubmitJobs,
}

impl FormController {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            state: DemoFormState::default(),
            jobs: SubmitJobs::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.state.status
    }

    pub fn is_submitting(&self) -> bool {
        self.state.status.is_submitting()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.status.error_message()
    }

    pub fn submission(&self) -> &DemoSubmission {
        &self.state.submission
    }

    /// Live length of the description, counted the way the browser limit counts it.
    pub fn char_count(&self) -> usize {
        self.state.submission.description_len()
    }

    /// Text shown under the description, e.g. `42/500`.
    pub fn char_counter_label(&self) -> String {
        format!("{}/{DESCRIPTION_MAX_LEN}", self.char_count())
    }

    pub fn field(&self, field: FormField) -> &str {
        field.value(&self.state.submission)
    }

    /// Mutable access for text widgets. Call [`Self::clamp_description`] after
    /// editing the description.
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        field.value_mut(&mut self.state.submission)
    }

    /// Replace a field value. Descriptions are cut to the length limit.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
        if field == FormField::Description {
            self.clamp_description();
        }
    }

    pub fn clamp_description(&mut self) {
        truncate_utf16(&mut self.state.submission.description, DESCRIPTION_MAX_LEN);
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.set_field(FormField::Description, value);
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        validation::validate(&self.state.submission)
    }

    /// Validate and post the current values.
    pub fn submit(&mut self) -> SubmitOutcome {
        if matches!(
            self.state.status,
            SubmissionStatus::Submitting | SubmissionStatus::Success
        ) || self.jobs.in_progress()
        {
            return SubmitOutcome::Ignored;
        }
        if let Err(err) = self.validate() {
            self.state.focus_requested = Some(err.field);
            self.state.field_hint = Some(err);
            return SubmitOutcome::Blocked(err);
        }
        self.state.field_hint = None;
        self.state.status = SubmissionStatus::Submitting;

        let endpoint = self.endpoint.trim().to_string();
        if endpoint.is_empty() {
            warn!("Demo submission attempted without a configured endpoint");
            self.state.status = SubmissionStatus::Error(UNSET_ENDPOINT_MESSAGE.to_string());
            return SubmitOutcome::Failed;
        }

        info!(project = %self.state.submission.project_name, "Submitting demo");
        self.jobs.begin_submit(SubmitJob {
            endpoint,
            submission: self.state.submission.clone(),
        });
        SubmitOutcome::Started
    }

    /// Apply a finished request, if any. Returns true when the state changed.
    ///
    /// A worker that exits without reporting settles as [`SubmitError::Unknown`].
    pub fn poll(&mut self) -> bool {
        match self.jobs.try_recv_result() {
            Some(result) => self.apply_result(result),
            None => false,
        }
    }

    /// Settle an in-flight submission. Results arriving in any other state are dropped.
    pub fn apply_result(&mut self, result: Result<(), SubmitError>) -> bool {
        if !self.is_submitting() {
            return false;
        }
        self.state.status = match result {
            Ok(()) => {
                info!("Demo submitted");
                SubmissionStatus::Success
            }
            Err(err) => {
                warn!("Demo submission failed: {err}");
                SubmissionStatus::Error(err.to_string())
            }
        };
        true
    }
}
