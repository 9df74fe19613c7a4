//! Enumeration types for the pass generator
//!
//! This module contains the attendee roles, the access tiers derived from them,
//! and the output formats supported by the command line front end.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attendee roles a pass template can be built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Event organiser with full control
    Professor,
    /// Staff scanning passes at the door
    Monitor,
    /// Regular attendee
    Student,
}

impl Role {
    /// Every role, in the order they are offered to users
    pub const ALL: [Role; 3] = [Role::Professor, Role::Monitor, Role::Student];

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Professor => "PROFESSOR",
            Role::Monitor => "MONITOR",
            Role::Student => "STUDENT",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professor" => Ok(Role::Professor),
            "monitor" => Ok(Role::Monitor),
            "student" => Ok(Role::Student),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Coarse authorization tier derived from a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessLevel {
    /// Professors
    High,
    /// Monitors
    Medium,
    /// Students
    Basic,
}

impl AccessLevel {
    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::High => "HIGH",
            AccessLevel::Medium => "MEDIUM",
            AccessLevel::Basic => "BASIC",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format for batch runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable progress log and pass listings
    Text,
    /// JSON snapshot of the template and issued passes
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        assert_eq!(format!("{}", Role::Professor), "PROFESSOR");
        assert_eq!(format!("{}", Role::Monitor), "MONITOR");
        assert_eq!(format!("{}", Role::Student), "STUDENT");
    }

    #[test]
    fn test_role_from_str_is_case_insensitive() {
        assert_eq!("PROFESSOR".parse::<Role>().unwrap(), Role::Professor);
        assert_eq!("monitor".parse::<Role>().unwrap(), Role::Monitor);
        assert_eq!("Student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!("  monitor ".parse::<Role>().unwrap(), Role::Monitor);

        // Test error case
        assert!("janitor".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Monitor).unwrap(), "\"MONITOR\"");
        let role: Role = serde_json::from_str("\"STUDENT\"").unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn test_access_level_display() {
        assert_eq!(format!("{}", AccessLevel::High), "HIGH");
        assert_eq!(format!("{}", AccessLevel::Medium), "MEDIUM");
        assert_eq!(format!("{}", AccessLevel::Basic), "BASIC");
        assert_eq!(serde_json::to_string(&AccessLevel::Basic).unwrap(), "\"BASIC\"");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);

        // Test error case
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
