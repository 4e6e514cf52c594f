//! Pre-submit checks matching the form's `required`, `type=email`,
//! `type=url` and `maxLength` constraints.

use std::sync::LazyLock;

use regex::Regex;

use super::state::FormField;
use crate::submission::{DESCRIPTION_MAX_LEN, DemoSubmission, utf16_len};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email regex must compile")
});

/// Constraint a field value violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldErrorKind {
    #[error("Please fill out this field.")]
    Missing,
    #[error("Please enter an email address.")]
    InvalidEmail,
    #[error("Please enter a URL.")]
    InvalidUrl,
    #[error("Please shorten this text to 500 characters or less.")]
    TooLong,
}

/// The first field that blocks submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct FieldError {
    pub field: FormField,
    pub kind: FieldErrorKind,
}

/// Check every field in display order and report the first violation.
pub fn validate(submission: &DemoSubmission) -> Result<(), FieldError> {
    for field in FormField::ALL {
        if let Some(kind) = check_field(field, field.value(submission)) {
            return Err(FieldError { field, kind });
        }
    }
    Ok(())
}

fn check_field(field: FormField, value: &str) -> Option<FieldErrorKind> {
    // `type=email` and `type=url` inputs strip surrounding whitespace; plain
    // text inputs and textareas keep it, so spaces alone satisfy `required`.
    let value = match field {
        FormField::Email | FormField::Link => value.trim(),
        _ => value,
    };
    if value.is_empty() {
        return field.is_required().then_some(FieldErrorKind::Missing);
    }
    match field {
        FormField::Email if !EMAIL_PATTERN.is_match(value) => Some(FieldErrorKind::InvalidEmail),
        FormField::Link if url::Url::parse(value).is_err() => Some(FieldErrorKind::InvalidUrl),
        FormField::Description if utf16_len(value) > DESCRIPTION_MAX_LEN => {
            Some(FieldErrorKind::TooLong)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> DemoSubmission {
        DemoSubmission {
            full_name: "Jane Smith".into(),
            email: "jane@company.com".into(),
            project_name: "AgentKit".into(),
            description: "Books meetings from email threads.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn required_fields_only_is_valid() {
        assert_eq!(validate(&complete()), Ok(()));
    }

    #[test]
    fn missing_description_blocks_submission() {
        let mut submission = complete();
        submission.description.clear();
        let err = validate(&submission).unwrap_err();
        assert_eq!(err.field, FormField::Description);
        assert_eq!(err.kind, FieldErrorKind::Missing);
        assert_eq!(err.to_string(), "Please fill out this field.");
    }

    #[test]
    fn whitespace_satisfies_required_text_fields() {
        let mut submission = complete();
        submission.full_name = "   ".into();
        submission.project_name = " ".into();
        submission.description = "   ".into();
        assert_eq!(validate(&submission), Ok(()));
    }

    #[test]
    fn whitespace_only_email_is_missing() {
        let mut submission = complete();
        submission.email = "  \t".into();
        let err = validate(&submission).unwrap_err();
        assert_eq!(err.field, FormField::Email);
        assert_eq!(err.kind, FieldErrorKind::Missing);

        submission.email = "jane@company.com".into();
        submission.link = "   ".into();
        assert_eq!(validate(&submission), Ok(()));
    }

    #[test]
    fn first_invalid_field_in_display_order_wins() {
        let submission = DemoSubmission::default();
        assert_eq!(validate(&submission).unwrap_err().field, FormField::FullName);
    }

    #[test]
    fn email_must_look_like_an_address() {
        let mut submission = complete();
        for bad in ["jane", "jane@", "@company.com", "jane smith@company.com"] {
            submission.email = bad.into();
            let err = validate(&submission).unwrap_err();
            assert_eq!(err.kind, FieldErrorKind::InvalidEmail, "{bad}");
        }
        submission.email = " jane@localhost ".into();
        assert_eq!(validate(&submission), Ok(()));
    }

    #[test]
    fn optional_link_must_be_absolute_url_when_present() {
        let mut submission = complete();
        submission.link = "github.com/acme".into();
        assert_eq!(
            validate(&submission).unwrap_err().kind,
            FieldErrorKind::InvalidUrl
        );
        submission.link = "https://github.com/acme/agentkit".into();
        assert_eq!(validate(&submission), Ok(()));
    }

    #[test]
    fn description_over_limit_is_rejected() {
        let mut submission = complete();
        submission.description = "a".repeat(DESCRIPTION_MAX_LEN);
        assert_eq!(validate(&submission), Ok(()));
        submission.description.push('a');
        assert_eq!(
            validate(&submission).unwrap_err().kind,
            FieldErrorKind::TooLong
        );
    }

    #[test]
    fn emoji_count_twice_toward_the_limit() {
        let mut submission = complete();
        submission.description = format!("{}🚀", "a".repeat(DESCRIPTION_MAX_LEN - 2));
        assert_eq!(validate(&submission), Ok(()));
        submission.description = format!("{}🚀", "a".repeat(DESCRIPTION_MAX_LEN - 1));
        assert_eq!(
            validate(&submission).unwrap_err().kind,
            FieldErrorKind::TooLong
        );
    }
}
