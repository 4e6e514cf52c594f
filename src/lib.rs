//! Desktop form for submitting a demo to a hosted form-collection endpoint.
/// TOML settings carrying the submission endpoint, and the app directories.
pub mod config;
/// Form state machine and validation.
pub mod form;
mod http_client;
/// Tracing subscriber setup.
pub mod logging;
/// Submission payload and HTTP delivery.
pub mod submission;
/// egui rendering.
pub mod ui;
