use crate::submission::DemoSubmission;

use super::validation::FieldError;

/// Where the form is in its submit cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing submitted yet, or validation blocked the last attempt.
    #[default]
    Idle,
    /// A request is in flight.
    Submitting,
    /// The endpoint accepted the submission; the confirmation replaces the form.
    Success,
    /// The last attempt failed with the given message. Submitting again retries.
    Error(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Message for the error banner, if the last attempt failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Inputs on the demo form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    FullName,
    Email,
    Company,
    ProjectName,
    Description,
    Link,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        Self::FullName,
        Self::Email,
        Self::Company,
        Self::ProjectName,
        Self::Description,
        Self::Link,
        Self::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Email => "Email",
            Self::Company => "Company / team",
            Self::ProjectName => "Project name",
            Self::Description => "What does your agent do?",
            Self::Link => "Link",
            Self::Notes => "Anything else we should know?",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FullName => "Jane Smith",
            Self::Email => "jane@company.com",
            Self::Company => "Acme Inc.",
            Self::ProjectName => "AgentKit",
            Self::Description => {
                "Describe your agent, what problem it solves, and how it works..."
            }
            Self::Link => "https://github.com/...",
            Self::Notes => "Special requirements, AV needs, etc.",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            Self::FullName | Self::Email | Self::ProjectName | Self::Description
        )
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Description | Self::Notes)
    }

    pub(crate) fn value(self, submission: &DemoSubmission) -> &str {
        match self {
            Self::FullName => &submission.full_name,
            Self::Email => &submission.email,
            Self::Company => &submission.company,
            Self::ProjectName => &submission.project_name,
            Self::Description => &submission.description,
            Self::Link => &submission.link,
            Self::Notes => &submission.notes,
        }
    }

    pub(crate) fn value_mut(self, submission: &mut DemoSubmission) -> &mut String {
        match self {
            Self::FullName => &mut submission.full_name,
            Self::Email => &mut submission.email,
            Self::Company => &mut submission.company,
            Self::ProjectName => &mut submission.project_name,
            Self::Description => &mut submission.description,
            Self::Link => &mut submission.link,
            Self::Notes => &mut submission.notes,
        }
    }
}

/// UI state for the demo submission form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoFormState {
    /// Current field values.
    pub submission: DemoSubmission,
    pub status: SubmissionStatus,
    /// Field that should take keyboard focus on the next frame.
    pub focus_requested: Option<FormField>,
    /// Validation hint for the field that blocked the last submit.
    pub field_hint: Option<FieldError>,
}
