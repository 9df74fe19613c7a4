//! Per-role template settings

use crate::permissions::names;
use crate::types::{AccessLevel, Role};

/// Everything that differs between role templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    /// Role the profile belongs to
    pub role: Role,
    /// Access tier granted to the role
    pub access_level: AccessLevel,
    /// Permissions every template for the role starts with, in order
    pub default_permissions: &'static [&'static str],
    /// Holder name written on the template
    pub placeholder_name: &'static str,
    /// Holder email written on the template
    pub placeholder_email: &'static str,
}

const PROFESSOR: RoleProfile = RoleProfile {
    role: Role::Professor,
    access_level: AccessLevel::High,
    default_permissions: &[names::CREATE_EVENT, names::EXPORT_ATTENDANCE],
    placeholder_name: "TEMPLATE_PROF",
    placeholder_email: "template.prof@uni.edu",
};

const MONITOR: RoleProfile = RoleProfile {
    role: Role::Monitor,
    access_level: AccessLevel::Medium,
    default_permissions: &[names::SCAN_QR, names::REGISTER_ENTRY_EXIT],
    placeholder_name: "TEMPLATE_MONITOR",
    placeholder_email: "template.monitor@uni.edu",
};

const STUDENT: RoleProfile = RoleProfile {
    role: Role::Student,
    access_level: AccessLevel::Basic,
    default_permissions: &[names::ENTER_EVENT],
    placeholder_name: "TEMPLATE_STUDENT",
    placeholder_email: "template.student@uni.edu",
};

impl Role {
    /// Template settings for this role
    pub fn profile(&self) -> &'static RoleProfile {
        match self {
            Role::Professor => &PROFESSOR,
            Role::Monitor => &MONITOR,
            Role::Student => &STUDENT,
        }
    }

    /// Access tier derived from this role
    pub fn access_level(&self) -> AccessLevel {
        self.profile().access_level
    }
}
