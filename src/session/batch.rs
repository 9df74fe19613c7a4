//! One-shot batch run
//!
//! Builds the configured template, issues a pass per configured holder, and
//! renders the result as the console would print it or as a JSON snapshot.

use thiserror::Error;
use tracing::info;

use crate::session::console::push_created_passes;
use crate::session::error::ValidationError;
use crate::session::session::PassSession;
use crate::types::{ConfigValidationError, HolderSpec, OutputFormat, PassConfig};

/// Errors that can stop a batch run
#[derive(Debug, Error)]
pub enum BatchError {
    /// The configuration does not name a usable role or format
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigValidationError),

    /// The template could not be built
    #[error("Failed to build template: {0}")]
    Build(#[source] ValidationError),

    /// A pass could not be issued
    #[error("Failed to issue pass for {holder}: {source}")]
    Issue {
        /// Holder the pass was for
        holder: HolderSpec,
        /// Underlying validation failure
        #[source]
        source: ValidationError,
    },

    /// JSON rendering failed
    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of a batch run
#[derive(Debug)]
pub struct BatchRun {
    session: PassSession,
    log: Vec<String>,
}

impl BatchRun {
    /// The session holding the template and the issued passes
    pub fn session(&self) -> &PassSession {
        &self.session
    }

    /// Progress lines and pass texts, in the order they were produced
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Render the run in `format`
    ///
    /// Text output is the log followed by the created passes listing.
    pub fn render(&self, format: OutputFormat) -> Result<String, BatchError> {
        match format {
            OutputFormat::Text => {
                let mut lines = self.log.clone();
                push_created_passes(self.session.issued(), &mut lines);
                Ok(lines.join("\n"))
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.session.snapshot())?),
        }
    }
}

/// Build the configured template and issue a pass for every configured holder
///
/// Stops at the first failure.
pub fn run_batch(config: &PassConfig) -> Result<BatchRun, BatchError> {
    let role = config.get_role()?;
    let mut session = PassSession::from_config(config);
    let mut log: Vec<String> = Vec::new();

    let template = session
        .build_template_for(role, &config.event_name, &config.event_date, &config.venue, Some(&mut log))
        .map_err(BatchError::Build)?;
    log.push(template.to_text());

    for holder in &config.holders {
        let pass = session
            .issue_pass(&holder.name, &holder.email, Some(&mut log))
            .map_err(|source| BatchError::Issue { holder: holder.clone(), source })?;
        log.push(pass.to_text());
    }

    info!(issued = session.issued().len(), "Batch run finished");
    Ok(BatchRun { session, log })
}
