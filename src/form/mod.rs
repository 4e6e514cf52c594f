//! Demo submission form: field state, validation, and the submit state machine.

mod controller;
mod jobs;
mod state;
mod validation;

pub use controller::{FormController, SubmitOutcome, UNSET_ENDPOINT_MESSAGE};
pub use state::{DemoFormState, FormField, SubmissionStatus};
pub use validation::{FieldError, FieldErrorKind, validate};
