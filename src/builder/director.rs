//! Pass director and progress reporting
//!
//! The director runs the four build steps in a fixed order and reports each
//! step to an optional [`ProgressSink`] before running it.

use tracing::debug;

use crate::builder::BuildSteps;

/// Progress line emitted before the event info step
pub const STEP_EVENT_INFO: &str = "  - set event info";
/// Progress line emitted before the role and access step
pub const STEP_ROLE_AND_ACCESS: &str = "  - set role + access";
/// Progress line emitted before the default permissions step
pub const STEP_DEFAULT_PERMISSIONS: &str = "  - add default permissions";
/// Progress line emitted before the template holder step
pub const STEP_TEMPLATE_HOLDER: &str = "  - set template holder";

/// Receiver for human-readable progress lines
pub trait ProgressSink {
    /// Record one progress line
    fn progress(&mut self, message: &str);
}

impl ProgressSink for Vec<String> {
    fn progress(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Forward an optional progress line
pub(crate) fn emit(sink: &mut Option<&mut dyn ProgressSink>, message: &str) {
    if let Some(sink) = sink.as_deref_mut() {
        sink.progress(message);
    }
}

/// Drives a builder through the fixed build sequence
#[derive(Debug)]
pub struct PassDirector<'a, B: BuildSteps + ?Sized> {
    builder: &'a mut B,
}

impl<'a, B: BuildSteps + ?Sized> PassDirector<'a, B> {
    /// Create a director for `builder`
    pub fn new(builder: &'a mut B) -> Self {
        Self { builder }
    }

    /// Run event info, role and access, default permissions, template holder
    pub fn build_base_pass(
        &mut self,
        event_name: &str,
        event_date: &str,
        venue: &str,
        mut progress: Option<&mut dyn ProgressSink>,
    ) {
        emit(&mut progress, STEP_EVENT_INFO);
        self.builder.build_event_info(event_name, event_date, venue);

        emit(&mut progress, STEP_ROLE_AND_ACCESS);
        self.builder.build_role_and_access();

        emit(&mut progress, STEP_DEFAULT_PERMISSIONS);
        self.builder.build_default_permissions();

        emit(&mut progress, STEP_TEMPLATE_HOLDER);
        self.builder.build_template_holder();

        debug!(pass_id = %self.builder.get_pass().id(), "Base pass built");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::PassBuilder;
    use crate::pass::Pass;
    use crate::types::{PassId, RandomIdSource, Role};

    /// Records the order the steps were called in
    #[derive(Debug)]
    struct RecordingBuilder {
        calls: Vec<&'static str>,
        pass: Pass,
    }

    impl BuildSteps for RecordingBuilder {
        fn build_event_info(&mut self, _: &str, _: &str, _: &str) {
            self.calls.push("event");
        }
        fn build_role_and_access(&mut self) {
            self.calls.push("role");
        }
        fn build_default_permissions(&mut self) {
            self.calls.push("permissions");
        }
        fn build_template_holder(&mut self) {
            self.calls.push("holder");
        }
        fn get_pass(&self) -> &Pass {
            &self.pass
        }
    }

    #[test]
    fn test_steps_run_in_order() {
        let mut builder = RecordingBuilder { calls: Vec::new(), pass: Pass::new(PassId::new()) };
        PassDirector::new(&mut builder).build_base_pass("Expo", "2026-02-20", "Hall", None);
        assert_eq!(builder.calls, vec!["event", "role", "permissions", "holder"]);
    }

    #[test]
    fn test_progress_lines() {
        let mut builder = PassBuilder::new(Role::Student, &mut RandomIdSource);
        let mut lines: Vec<String> = Vec::new();

        PassDirector::new(&mut builder).build_base_pass(
            "Expo",
            "2026-02-20",
            "Hall",
            Some(&mut lines),
        );

        assert_eq!(
            lines,
            vec![
                "  - set event info",
                "  - set role + access",
                "  - add default permissions",
                "  - set template holder",
            ]
        );
    }

    #[test]
    fn test_without_sink_still_builds() {
        let mut builder = PassBuilder::new(Role::Professor, &mut RandomIdSource);
        PassDirector::new(&mut builder).build_base_pass("Expo", "2026-02-20", "Hall", None);

        let pass = builder.into_pass();
        assert_eq!(pass.role(), Some(Role::Professor));
        assert_eq!(pass.holder_name(), "TEMPLATE_PROF");
        assert_eq!(pass.venue(), "Hall");
    }

    #[test]
    fn test_director_over_trait_object() {
        let mut builder = PassBuilder::new(Role::Monitor, &mut RandomIdSource);
        let steps: &mut dyn BuildSteps = &mut builder;
        PassDirector::new(steps).build_base_pass("Expo", "2026-02-20", "Hall", None);
        assert_eq!(builder.get_pass().permissions().len(), 2);
    }
}
