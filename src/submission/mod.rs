//! Demo submission payload and delivery to the form-collection endpoint.

mod multipart;

pub mod api;

pub use api::{GENERIC_FAILURE_MESSAGE, SubmitError, submit_demo};
pub use multipart::MultipartBody;

/// Longest description accepted, in UTF-16 code units like an HTML `maxlength`.
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Values entered into the demo submission form.
///
/// Every field is posted, including empty optional ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoSubmission {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub project_name: String,
    pub description: String,
    pub link: String,
    pub notes: String,
}

impl DemoSubmission {
    /// Field names and values in the order they appear on the form.
    ///
    /// Email and link are sent trimmed, as browsers do for `type=email` and
    /// `type=url` inputs.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("full_name", self.full_name.as_str()),
            ("email", self.email.trim()),
            ("company", self.company.as_str()),
            ("project_name", self.project_name.as_str()),
            ("description", self.description.as_str()),
            ("link", self.link.trim()),
            ("notes", self.notes.as_str()),
        ]
    }

    pub fn description_len(&self) -> usize {
        utf16_len(&self.description)
    }
}

/// Length as a browser counts it: emoji and other astral characters count twice.
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Cut `value` to at most `max` UTF-16 code units without splitting a character.
pub fn truncate_utf16(value: &mut String, max: usize) {
    let mut used = 0;
    for (index, ch) in value.char_indices() {
        used += ch.len_utf16();
        if used > max {
            value.truncate(index);
            return;
        }
    }
}
