//! Event Pass Generator
//!
//! Builds role-specific event pass templates in fixed steps and issues
//! personalised passes by cloning the active template.
//!
//! # Overview
//!
//! A session holds at most one template at a time. Building a template runs
//! the same four steps for every role (event info, role and access level,
//! default permissions, placeholder holder) and replaces whatever template was
//! there. Issuing a pass deep-copies the template under a fresh id, fills in
//! the holder, and appends it to the session's issued list.
//!
//! ## Key Features
//!
//! - **Role Templates**: Professor, Monitor and Student profiles with their own access tier
//! - **Independent Copies**: Issued passes never share permissions with the template
//! - **QR Payloads**: Kept in sync with the pass fields on every change
//! - **Reproducible Ids**: Optional seed for deterministic pass identifiers
//! - **Console and Batch Runs**: Interactive command loop or one-shot CLI invocation
//!
//! ## Quick Start
//!
//! ```rust
//! use event_pass_generator::*;
//!
//! let mut session = PassSession::with_seed(42);
//! let mut progress: Vec<String> = Vec::new();
//!
//! session.build_template("MONITOR", "Expo", "2026-02-20", "Main Auditorium", Some(&mut progress))?;
//! let pass = session.issue_pass("Ana", "ana@uni.edu", Some(&mut progress))?;
//!
//! assert_eq!(pass.access_level(), Some(AccessLevel::Medium));
//! assert_eq!(pass.permissions().len(), 3);
//! println!("{}", pass.to_text());
//! # Ok::<(), ValidationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Core types, identifiers, and configuration
//! - [`permissions`]: Ordered permission sets and permission names
//! - [`pass`]: The pass record, its QR payload, and cloning
//! - [`builder`]: Role profiles, the pass builder, and the director
//! - [`session`]: Session state, validation errors, console, and logging
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Session   │───►│   Builder   │───►│    Pass     │
//! │             │    │             │    │             │
//! │ Template    │    │ Profiles    │    │ Fields      │
//! │ Issued list │    │ Director    │    │ QR payload  │
//! │ Console     │    │             │    │ Cloning     │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        │                                     │
//!        ▼                                     ▼
//! ┌─────────────┐                      ┌─────────────┐
//! │    Types    │◄─────────────────────┤ Permissions │
//! │ Ids, Roles  │                      │             │
//! │ Config      │                      │             │
//! └─────────────┘                      └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod builder;
pub mod pass;
pub mod permissions;
pub mod session;

pub mod types;

// Core types and identifiers
pub use types::{
    AccessLevel,
    // Configuration
    CliArgs,
    ConfigError,
    ConfigValidationError,
    HolderSpec,
    // Identifiers
    IdSource,
    OutputFormat,
    PassConfig,
    PassId,
    RandomIdSource,
    // Enums
    Role,
    SeededIdSource,
};

// Permissions
pub use permissions::{names, PermissionSet};

// Passes
pub use pass::{clone_pass, qr_payload, Pass};

// Template construction
pub use builder::{BuildSteps, PassBuilder, PassDirector, ProgressSink, RoleProfile};

// Session state and console
pub use session::{
    run_batch, BatchError, BatchRun, Console, Flow, LoggingConfig, PassSession, SessionResult,
    SessionSnapshot, ValidationError,
};
