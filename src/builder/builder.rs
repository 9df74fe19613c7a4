//! Stepwise construction of role templates
//!
//! [`BuildSteps`] is the capability set the director drives; [`PassBuilder`]
//! implements it for every role by reading the role's [`RoleProfile`].

use tracing::debug;

use crate::builder::RoleProfile;
use crate::pass::Pass;
use crate::types::{IdSource, Role};

/// The four build steps plus access to the pass under construction
pub trait BuildSteps {
    /// Step 1: event name, date and venue
    fn build_event_info(&mut self, event_name: &str, event_date: &str, venue: &str);
    /// Step 2: role and access tier
    fn build_role_and_access(&mut self);
    /// Step 3: role default permissions
    fn build_default_permissions(&mut self);
    /// Step 4: placeholder holder; must leave the QR payload current
    fn build_template_holder(&mut self);
    /// The pass being built
    fn get_pass(&self) -> &Pass;
}

/// Builds a template pass for one role
///
/// The builder owns a single pass for its whole life; every step writes into it.
#[derive(Debug)]
pub struct PassBuilder {
    profile: &'static RoleProfile,
    pass: Pass,
}

impl PassBuilder {
    /// Create a builder for `role`, drawing the pass id from `ids`
    pub fn new(role: Role, ids: &mut dyn IdSource) -> Self {
        Self { profile: role.profile(), pass: Pass::new(ids.next_id()) }
    }

    /// Role this builder produces templates for
    pub fn role(&self) -> Role {
        self.profile.role
    }

    /// Consume the builder and hand over the pass
    pub fn into_pass(self) -> Pass {
        self.pass
    }
}

impl BuildSteps for PassBuilder {
    fn build_event_info(&mut self, event_name: &str, event_date: &str, venue: &str) {
        self.pass.set_event_info(event_name, event_date, venue);
    }

    fn build_role_and_access(&mut self) {
        self.pass.set_role_and_access(self.profile.role, self.profile.access_level);
    }

    fn build_default_permissions(&mut self) {
        for permission in self.profile.default_permissions {
            self.pass.add_permission(permission);
        }
        debug!(
            role = %self.profile.role,
            count = self.pass.permissions().len(),
            "Applied default permissions"
        );
    }

    fn build_template_holder(&mut self) {
        self.pass.set_holder(self.profile.placeholder_name, self.profile.placeholder_email);
        self.pass.regenerate_qr_payload();
    }

    fn get_pass(&self) -> &Pass {
        &self.pass
    }
}
