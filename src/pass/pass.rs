//! Core pass struct and methods
//!
//! This module contains the Pass entity shared by templates and issued passes.

use serde::Serialize;
use std::fmt;

use crate::pass::qr::qr_payload;
use crate::permissions::PermissionSet;
use crate::types::{AccessLevel, PassId, Role};

/// Separator line closing every rendered pass
pub const TEXT_SEPARATOR: &str = "------------------------------";

/// One event-access credential, either a template or an issued pass
///
/// `Pass` deliberately does not implement [`Clone`]: copies must go through
/// [`clone_pass`](crate::pass::clone_pass) so that every instance gets its own id.
#[derive(Debug, Serialize)]
pub struct Pass {
    /// Unique identifier, fixed at construction
    pub(super) id: PassId,
    /// Event name
    pub(super) event_name: String,
    /// Event date as entered
    pub(super) event_date: String,
    /// Event venue
    pub(super) venue: String,
    /// Holder display name (placeholder on templates)
    pub(super) holder_name: String,
    /// Holder email (placeholder on templates)
    pub(super) email: String,
    /// Role, set during the build
    pub(super) role: Option<Role>,
    /// Access tier derived from the role
    pub(super) access_level: Option<AccessLevel>,
    /// Granted permissions in insertion order
    pub(super) permissions: PermissionSet,
    /// Derived QR payload
    pub(super) qr_payload: String,
}

impl Pass {
    /// Create an empty pass with the given id
    pub fn new(id: PassId) -> Self {
        let mut pass = Self {
            id,
            event_name: String::new(),
            event_date: String::new(),
            venue: String::new(),
            holder_name: String::new(),
            email: String::new(),
            role: None,
            access_level: None,
            permissions: PermissionSet::new(),
            qr_payload: String::new(),
        };
        pass.regenerate_qr_payload();
        pass
    }

    /// Unique identifier
    pub fn id(&self) -> PassId {
        self.id
    }

    /// Event name
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Event date
    pub fn event_date(&self) -> &str {
        &self.event_date
    }

    /// Event venue
    pub fn venue(&self) -> &str {
        &self.venue
    }

    /// Holder display name
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Holder email
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Role, if the build has reached that step
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Access tier, if the build has reached that step
    pub fn access_level(&self) -> Option<AccessLevel> {
        self.access_level
    }

    /// Granted permissions
    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Current QR payload
    pub fn qr_payload(&self) -> &str {
        &self.qr_payload
    }

    /// Set event name, date and venue
    pub fn set_event_info(
        &mut self,
        event_name: impl Into<String>,
        event_date: impl Into<String>,
        venue: impl Into<String>,
    ) {
        self.event_name = event_name.into();
        self.event_date = event_date.into();
        self.venue = venue.into();
        self.regenerate_qr_payload();
    }

    /// Set role and access tier
    pub fn set_role_and_access(&mut self, role: Role, access_level: AccessLevel) {
        self.role = Some(role);
        self.access_level = Some(access_level);
        self.regenerate_qr_payload();
    }

    /// Set holder name and email
    pub fn set_holder(&mut self, holder_name: impl Into<String>, email: impl Into<String>) {
        self.holder_name = holder_name.into();
        self.email = email.into();
        self.regenerate_qr_payload();
    }

    /// Add a permission; blank names and names already granted are ignored
    ///
    /// Returns `true` when the permission was appended.
    pub fn add_permission(&mut self, permission: &str) -> bool {
        self.permissions.add_permission(permission)
    }

    /// Recompute the QR payload from id, event name, email and role
    pub fn regenerate_qr_payload(&mut self) {
        self.qr_payload = qr_payload(&self.id, &self.event_name, &self.email, self.role);
    }

    /// Render every field as multi-line text
    pub fn to_text(&self) -> String {
        format!(
            "ID={}\n\
             Event={} | Date={} | Venue={}\n\
             Holder={} ({})\n\
             Role={} | Access={}\n\
             Permissions={}\n\
             QR={}\n\
             {}",
            self.id,
            or_dash(&self.event_name),
            or_dash(&self.event_date),
            or_dash(&self.venue),
            or_dash(&self.holder_name),
            or_dash(&self.email),
            self.role.map(|r| r.as_str()).unwrap_or("-"),
            self.access_level.map(|a| a.as_str()).unwrap_or("-"),
            self.permissions,
            self.qr_payload,
            TEXT_SEPARATOR,
        )
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
