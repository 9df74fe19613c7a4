//! Pass session: the active template and the issued passes
//!
//! This module contains the PassSession that owns the single template slot and
//! the ordered list of issued passes, and exposes the build and issue operations.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::builder::director::emit;
use crate::builder::{PassBuilder, PassDirector, ProgressSink};
use crate::pass::{clone_pass, Pass};
use crate::permissions::names;
use crate::session::error::{blank_fields, SessionResult, ValidationError};
use crate::types::{id_source_for, IdSource, PassConfig, RandomIdSource, Role};

/// Date layout the generator expects for event dates
const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Process-local generator state
#[derive(Debug)]
pub struct PassSession {
    /// Source of ids for templates and clones
    ids: Box<dyn IdSource>,
    /// Most recently built template
    template: Option<Pass>,
    /// Issued passes in issue order
    issued: Vec<Pass>,
}

/// Serializable view of a session
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    /// Current template, if any
    pub template: Option<&'a Pass>,
    /// Issued passes in issue order
    pub issued: &'a [Pass],
}

impl Default for PassSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PassSession {
    /// Create an empty session with random ids
    pub fn new() -> Self {
        Self::with_id_source(Box::new(RandomIdSource))
    }

    /// Create an empty session with reproducible ids
    pub fn with_seed(seed: u64) -> Self {
        Self::with_id_source(id_source_for(Some(seed)))
    }

    /// Create an empty session drawing ids from `ids`
    pub fn with_id_source(ids: Box<dyn IdSource>) -> Self {
        Self { ids, template: None, issued: Vec::new() }
    }

    /// Create an empty session honouring the configured seed
    pub fn from_config(config: &PassConfig) -> Self {
        Self::with_id_source(id_source_for(config.seed))
    }

    /// Build a template for `role` (case-insensitive) and make it the active one
    ///
    /// Event fields are trimmed and must not be blank. On failure the current
    /// template is left untouched.
    pub fn build_template(
        &mut self,
        role: &str,
        event_name: &str,
        event_date: &str,
        venue: &str,
        progress: Option<&mut dyn ProgressSink>,
    ) -> SessionResult<&Pass> {
        check_event_info(event_name, event_date, venue)?;

        let role: Role = role.parse().map_err(|_| {
            warn!(role, "Rejected template build with unknown role");
            ValidationError::unknown_role(role.trim())
        })?;

        self.build_template_for(role, event_name, event_date, venue, progress)
    }

    /// Build a template for an already-parsed role
    #[instrument(skip(self, progress))]
    pub fn build_template_for(
        &mut self,
        role: Role,
        event_name: &str,
        event_date: &str,
        venue: &str,
        mut progress: Option<&mut dyn ProgressSink>,
    ) -> SessionResult<&Pass> {
        let (event_name, event_date, venue) = (event_name.trim(), event_date.trim(), venue.trim());
        check_event_info(event_name, event_date, venue)?;

        if NaiveDate::parse_from_str(event_date, EVENT_DATE_FORMAT).is_err() {
            warn!(event_date, "Event date is not in YYYY-MM-DD form; keeping it as entered");
        }

        emit(&mut progress, &format!("[BUILDER] Building template for role: {}", role));

        let mut builder = PassBuilder::new(role, self.ids.as_mut());
        let steps: Option<&mut dyn ProgressSink> = match progress {
            Some(ref mut sink) => Some(&mut **sink),
            None => None,
        };
        PassDirector::new(&mut builder).build_base_pass(event_name, event_date, venue, steps);
        let template = builder.into_pass();

        emit(
            &mut progress,
            &format!("[BUILDER] Done. Template created with ID: {}", template.id()),
        );
        if let Some(previous) = &self.template {
            debug!(previous = %previous.id(), "Replacing active template");
        }
        info!(pass_id = %template.id(), event = event_name, "Template built");

        Ok(&*self.template.insert(template))
    }

    /// Issue a pass for a holder by cloning the active template
    ///
    /// Holder name and email are trimmed and must not be blank. Passes issued
    /// from a monitor template also get `CHECK_ATTENDANCE_LIST`.
    #[instrument(skip(self, progress))]
    pub fn issue_pass(
        &mut self,
        holder_name: &str,
        email: &str,
        mut progress: Option<&mut dyn ProgressSink>,
    ) -> SessionResult<&Pass> {
        let template = self.template.as_ref().ok_or_else(|| {
            warn!("Rejected issue without a template");
            ValidationError::MissingTemplate
        })?;

        let (holder_name, email) = (holder_name.trim(), email.trim());
        let missing = blank_fields(&[("holder name", holder_name), ("email", email)]);
        if !missing.is_empty() {
            warn!(?missing, "Rejected issue with blank holder fields");
            return Err(ValidationError::blank_holder(missing));
        }

        emit(&mut progress, "[PROTOTYPE] Cloning current template...");
        let mut pass = clone_pass(template, self.ids.as_mut());

        pass.set_holder(holder_name, email);
        if pass.role() == Some(Role::Monitor) {
            pass.add_permission(names::CHECK_ATTENDANCE_LIST);
        }
        pass.regenerate_qr_payload();

        emit(&mut progress, &format!("[PROTOTYPE] New pass created. New ID: {}", pass.id()));
        info!(pass_id = %pass.id(), template_id = %template.id(), "Pass issued");

        let index = self.issued.len();
        self.issued.push(pass);
        Ok(&self.issued[index])
    }

    /// The active template, if one has been built
    pub fn template(&self) -> Option<&Pass> {
        self.template.as_ref()
    }

    /// Issued passes in issue order
    pub fn issued(&self) -> &[Pass] {
        &self.issued
    }

    /// View of the template and issued passes for serialization
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot { template: self.template(), issued: self.issued() }
    }
}

/// Reject blank event name, date or venue
fn check_event_info(event_name: &str, event_date: &str, venue: &str) -> SessionResult<()> {
    let missing = blank_fields(&[
        ("event name", event_name),
        ("event date", event_date),
        ("venue", venue),
    ]);
    if missing.is_empty() {
        return Ok(());
    }
    warn!(?missing, "Rejected template build with blank event info");
    Err(ValidationError::blank_event_info(missing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccessLevel;

    fn monitor_session() -> PassSession {
        let mut session = PassSession::with_seed(1);
        session.build_template("MONITOR", "Expo", "2026-02-20", "Main Auditorium", None).unwrap();
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = PassSession::new();
        assert!(session.template().is_none());
        assert!(session.issued().is_empty());
    }

    #[test]
    fn test_build_template_sets_slot() {
        let mut session = PassSession::new();
        let id = session
            .build_template("professor", "Expo", "2026-02-20", "Hall", None)
            .unwrap()
            .id();

        let template = session.template().unwrap();
        assert_eq!(template.id(), id);
        assert_eq!(template.role(), Some(Role::Professor));
        assert_eq!(template.access_level(), Some(AccessLevel::High));
    }

    #[test]
    fn test_build_template_trims_input() {
        let mut session = PassSession::new();
        let template = session
            .build_template(" Student ", "  Expo ", " 2026-02-20", "Hall  ", None)
            .unwrap();
        assert_eq!(template.event_name(), "Expo");
        assert_eq!(template.event_date(), "2026-02-20");
        assert_eq!(template.venue(), "Hall");
    }

    #[test]
    fn test_build_template_rejects_blank_fields() {
        let mut session = PassSession::new();
        let err = session.build_template("STUDENT", " ", "2026-02-20", "", None).unwrap_err();
        assert_eq!(err.missing_fields(), &["event name", "venue"]);
        assert!(session.template().is_none());
    }

    #[test]
    fn test_build_template_rejects_unknown_role() {
        let mut session = monitor_session();
        let before = session.template().unwrap().id();

        let err = session.build_template("janitor", "Expo", "2026-02-20", "Hall", None).unwrap_err();
        assert_eq!(err, ValidationError::UnknownRole("janitor".to_string()));
        assert_eq!(session.template().unwrap().id(), before);
    }

    #[test]
    fn test_blank_venue_keeps_previous_template() {
        let mut session = monitor_session();
        let before = session.template().unwrap().id();

        assert!(session.build_template("PROFESSOR", "Expo", "2026-02-20", "  ", None).is_err());
        assert_eq!(session.template().unwrap().id(), before);
        assert_eq!(session.template().unwrap().role(), Some(Role::Monitor));
    }

    #[test]
    fn test_non_iso_date_is_accepted() {
        let mut session = PassSession::new();
        let template = session.build_template("STUDENT", "Expo", "Feb 20th", "Hall", None).unwrap();
        assert_eq!(template.event_date(), "Feb 20th");
    }

    #[test]
    fn test_issue_requires_template() {
        let mut session = PassSession::new();
        let err = session.issue_pass("Ana Lee", "ana@x.edu", None).unwrap_err();
        assert_eq!(err, ValidationError::MissingTemplate);
        assert!(session.issued().is_empty());
    }

    #[test]
    fn test_issue_rejects_blank_holder() {
        let mut session = monitor_session();
        let err = session.issue_pass("Ana Lee", "   ", None).unwrap_err();
        assert_eq!(err.missing_fields(), &["email"]);
        assert!(session.issued().is_empty());
    }

    #[test]
    fn test_issue_personalizes_clone() {
        let mut session = monitor_session();
        let template_id = session.template().unwrap().id();

        let pass = session.issue_pass(" Ana Lee ", "ana@x.edu", None).unwrap();
        assert_ne!(pass.id(), template_id);
        assert_eq!(pass.holder_name(), "Ana Lee");
        assert_eq!(pass.email(), "ana@x.edu");
        assert_eq!(
            pass.permissions().as_slice(),
            &["SCAN_QR", "REGISTER_ENTRY_EXIT", "CHECK_ATTENDANCE_LIST"]
        );
        assert_eq!(
            pass.qr_payload(),
            format!("PASS|{}|Expo|ana@x.edu|MONITOR", pass.id())
        );

        // The template keeps its placeholder holder and defaults
        let template = session.template().unwrap();
        assert_eq!(template.holder_name(), "TEMPLATE_MONITOR");
        assert!(!template.permissions().contains("CHECK_ATTENDANCE_LIST"));
    }

    #[test]
    fn test_progress_lines() {
        let mut session = PassSession::new();
        let mut lines: Vec<String> = Vec::new();
        let id = session
            .build_template("STUDENT", "Expo", "2026-02-20", "Hall", Some(&mut lines))
            .unwrap()
            .id();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "[BUILDER] Building template for role: STUDENT");
        assert_eq!(lines[1], "  - set event info");
        assert_eq!(lines[4], "  - set template holder");
        assert_eq!(lines[5], format!("[BUILDER] Done. Template created with ID: {}", id));

        lines.clear();
        let id = session.issue_pass("Cy", "cy@x.edu", Some(&mut lines)).unwrap().id();
        assert_eq!(
            lines,
            vec![
                "[PROTOTYPE] Cloning current template...".to_string(),
                format!("[PROTOTYPE] New pass created. New ID: {}", id),
            ]
        );
    }

    #[test]
    fn test_rejected_calls_emit_no_progress() {
        let mut session = PassSession::new();
        let mut lines: Vec<String> = Vec::new();
        assert!(session.issue_pass("Ana", "ana@x.edu", Some(&mut lines)).is_err());
        assert!(session.build_template("STUDENT", "", "", "", Some(&mut lines)).is_err());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let run = |seed| {
            let mut session = PassSession::with_seed(seed);
            session.build_template("STUDENT", "Expo", "2026-02-20", "Hall", None).unwrap();
            session.issue_pass("Cy", "cy@x.edu", None).unwrap();
            session.issued()[0].qr_payload().to_string()
        };
        assert_eq!(run(99), run(99));
        assert_ne!(run(99), run(100));
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut session = monitor_session();
        session.issue_pass("Ana Lee", "ana@x.edu", None).unwrap();

        let value = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(value["template"]["holder_name"], "TEMPLATE_MONITOR");
        assert_eq!(value["issued"].as_array().unwrap().len(), 1);
        assert_eq!(value["issued"][0]["email"], "ana@x.edu");
    }
}
