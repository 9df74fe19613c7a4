//! Session state, validation and the interactive console
//!
//! This module owns everything that lives for the duration of a run.
//!
//! # Overview
//!
//! - **PassSession**: the single template slot and the ordered issued passes
//! - **ValidationError**: input errors reported before any state changes
//! - **Console**: line-oriented command interpreter over a session
//! - **run_batch**: one-shot build and issue from a [`PassConfig`](crate::types::PassConfig)
//! - **LoggingConfig**: tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use event_pass_generator::session::*;
//!
//! let mut session = PassSession::with_seed(7);
//! assert_eq!(
//!     session.issue_pass("Ana", "ana@uni.edu", None).unwrap_err(),
//!     ValidationError::MissingTemplate
//! );
//!
//! session.build_template("monitor", "Expo", "2026-02-20", "Main Auditorium", None)?;
//! let pass = session.issue_pass("Ana", "ana@uni.edu", None)?;
//! assert!(pass.permissions().contains("CHECK_ATTENDANCE_LIST"));
//! # Ok::<(), ValidationError>(())
//! ```

pub mod batch;
pub mod console;
pub mod error;
pub mod logging;
pub mod session;

// Re-export all public types for convenience
pub use batch::*;
pub use console::*;
pub use error::*;
pub use logging::*;
pub use session::*;
