//! QR payload derivation
//!
//! The payload is the string a QR renderer would encode. It identifies the pass
//! by id, event, holder email and role, separated by `|`.

use std::borrow::Cow;

use crate::types::{PassId, Role};

/// Leading tag of every payload
pub const QR_PREFIX: &str = "PASS";

/// Field separator inside a payload
pub const QR_DELIMITER: &str = "|";

/// Replacement for a delimiter found inside a field
const ESCAPED_DELIMITER: &str = "/";

/// Stand-in for an absent or empty field
const ABSENT: &str = "-";

/// Build the payload for the given pass fields
pub fn qr_payload(id: &PassId, event_name: &str, email: &str, role: Option<Role>) -> String {
    let id = id.to_string();
    let role = role.map(|r| r.as_str()).unwrap_or("");

    [Cow::Borrowed(QR_PREFIX), escape(&id), escape(event_name), escape(email), escape(role)]
        .join(QR_DELIMITER)
}

/// Escape one payload field
fn escape(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        Cow::Borrowed(ABSENT)
    } else if value.contains(QR_DELIMITER) {
        Cow::Owned(value.replace(QR_DELIMITER, ESCAPED_DELIMITER))
    } else {
        Cow::Borrowed(value)
    }
}
