use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::ValidationError;

/// A contact submission. Once constructed, guaranteed to have a non-empty
/// name and at least one way to follow up (contact method or message text),
/// with all fields trimmed and a UTC timestamp stamped at construction.
///
/// Field order matches the lead log's CSV header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub name: String,
    pub business: String,
    pub contact: String,
    pub message: String,
}

impl Lead {
    /// Build a lead from raw form fields. Trims whitespace from every field.
    /// Returns an error if `name` is empty, or if both `contact` and
    /// `message` are empty after trimming.
    pub fn new(name: &str, business: &str, contact: &str, message: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let business = business.trim();
        let contact = contact.trim();
        let message = message.trim();

        if name.is_empty() || (contact.is_empty() && message.is_empty()) {
            let mut error = ValidationError::new("missing_required");
            error.message =
                Some("Please provide at least your name and a contact method or message.".into());
            return Err(error);
        }

        Ok(Self {
            timestamp: OffsetDateTime::now_utc(),
            name: name.to_string(),
            business: business.to_string(),
            contact: contact.to_string(),
            message: message.to_string(),
        })
    }
}
