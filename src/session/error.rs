//! Error types and handling
//!
//! This module contains the validation errors reported by session operations.

use thiserror::Error;

/// Errors that can occur while building templates or issuing passes
///
/// Every variant is detected before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No template has been built yet
    #[error("You need to build a template first.")]
    MissingTemplate,

    /// Event name, date or venue is blank
    #[error("Event, date and venue cannot be empty.")]
    BlankEventInfo {
        /// Names of the blank fields
        missing: Vec<&'static str>,
    },

    /// Holder name or email is blank
    #[error("Please fill name and email.")]
    BlankHolder {
        /// Names of the blank fields
        missing: Vec<&'static str>,
    },

    /// Role is not one of the supported roles
    #[error("Unknown role: {0} (expected PROFESSOR, MONITOR or STUDENT)")]
    UnknownRole(String),
}

impl ValidationError {
    /// Create a blank event info error
    pub fn blank_event_info(missing: Vec<&'static str>) -> Self {
        Self::BlankEventInfo { missing }
    }

    /// Create a blank holder error
    pub fn blank_holder(missing: Vec<&'static str>) -> Self {
        Self::BlankHolder { missing }
    }

    /// Create an unknown role error
    pub fn unknown_role(role: impl Into<String>) -> Self {
        Self::UnknownRole(role.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            ValidationError::MissingTemplate => "Template",
            ValidationError::BlankEventInfo { .. } => "Event Info",
            ValidationError::BlankHolder { .. } => "Holder",
            ValidationError::UnknownRole(_) => "Role",
        }
    }

    /// Names of the blank fields, if the error is about blank input
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            ValidationError::BlankEventInfo { missing } | ValidationError::BlankHolder { missing } => {
                missing.as_slice()
            }
            _ => &[],
        }
    }
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, ValidationError>;

/// Collect the names of blank (after trimming) fields
pub(crate) fn blank_fields(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}
