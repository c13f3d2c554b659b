//! Error types for msgwin.
//!
//! This module defines the error taxonomy using `thiserror`. The windowing core
//! only produces [`WindowError`]; the snapshot constructor produces
//! [`InconsistentState`]; [`AppError`] wraps everything the binary can hit.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level binary error
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - [`ScenarioError`] - Scenario file read/parse failures
//!   - [`InconsistentState`] - Snapshot violates the page-store invariants
//!   - `std::io::Error` - Writing the report
//!
//! # Recovery Strategy
//!
//! Measurement failures are advisory. Top eviction aborts on the first page it
//! cannot measure and reports [`WindowError::MeasurementUnavailable`] so the
//! caller can retry on the next frame. Bottom eviction skips such pages.
//! Visibility scanning and proximity estimation never fail: a missing viewport
//! yields "nothing visible" and "near" respectively.

use super::identifiers::PageKey;
use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::scenario::ScenarioError;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Failure of a geometry-driven window computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// A page's rendered element could not be located for measurement.
    ///
    /// Distinct from "nothing evictable": the caller must retry rather than
    /// treat this as an empty result.
    #[error("Rendered element for page {page} is not available for measurement")]
    MeasurementUnavailable {
        /// Page whose height could not be sampled.
        page: PageKey,
    },

    /// The scroll surface or its wrapper could not be measured.
    #[error("Viewport geometry is not available for measurement")]
    ViewportUnavailable,
}

/// Reports carry the message, not the variant structure.
impl Serialize for WindowError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Snapshot of the page store that violates its structural invariants.
///
/// The windowing operations assume a non-empty, duplicate-free ordering whose
/// keys all resolve in the page map. [`crate::model::MessageListState::new`]
/// rejects anything else with one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InconsistentState {
    /// No pages are loaded.
    #[error("Page ordering is empty")]
    EmptyOrdering,

    /// The same page key appears twice in the ordering.
    #[error("Page {0} appears more than once in the page ordering")]
    DuplicatePage(PageKey),

    /// The ordering references a page missing from the page map.
    #[error("Page {0} is in the page ordering but not in the page map")]
    MissingPage(PageKey),

    /// A page claims to end past the last known message.
    #[error("Page {page} ends at message index {last_message_index} but only {message_count} messages exist")]
    NewestBeyondCount {
        /// Offending page.
        page: PageKey,
        /// Index of its last message.
        last_message_index: usize,
        /// Total message-id count.
        message_count: usize,
    },
}

/// Top-level error returned by the `msgwin` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Scenario file could not be read or parsed.
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    /// Scenario describes an invalid page store.
    #[error("Inconsistent page store: {0}")]
    Inconsistent(#[from] InconsistentState),

    /// Failed to write output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
