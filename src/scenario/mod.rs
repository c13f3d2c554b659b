//! Scenario files: a page store snapshot plus measured geometry, as JSON.
//!
//! ```json
//! {
//!   "message_count": 60,
//!   "pages": [
//!     { "key": "page-0", "last_message_index": 19, "height": 800 },
//!     { "key": "page-1", "last_message_index": 39, "height": 900 },
//!     { "key": "page-2", "last_message_index": 59 }
//!   ],
//!   "ordering": ["page-2", "page-1", "page-0"],
//!   "viewport": { "scroll_top": 1200, "client_height": 300 },
//!   "wrapper_height": 300,
//!   "items": [{ "id": "m0", "page": "page-0", "height": 40 }]
//! }
//! ```
//!
//! A page without `height` has no rendered element. Omitting `viewport`,
//! `wrapper_height` or `items` makes that reference unavailable.

use crate::geometry::{MeasuredSurface, ScrollExtents};
use crate::model::{InconsistentState, ItemRef, MessageListState, Page, PageKey, PageOrdering};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a scenario.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// Failed to read the scenario file.
    #[error("Failed to read scenario at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Scenario is not valid JSON or does not match the expected shape.
    #[error("Invalid scenario JSON: {reason}")]
    ParseError {
        /// Parse error details.
        reason: String,
    },
}

/// Top-level scenario document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Total message-id count in the store.
    pub message_count: usize,
    /// Page map entries.
    pub pages: Vec<ScenarioPage>,
    /// Load order of pages.
    pub ordering: PageOrdering,
    /// Scroll surface, if measurable.
    #[serde(default)]
    pub viewport: Option<ScenarioViewport>,
    /// Wrapper client height, if measurable.
    #[serde(default)]
    pub wrapper_height: Option<f64>,
    /// Rendered items in document order, if the list container exists.
    #[serde(default)]
    pub items: Option<Vec<ScenarioItem>>,
}

/// A page map entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioPage {
    /// Page map key.
    pub key: PageKey,
    /// Index of the page's last message in the global sequence.
    pub last_message_index: usize,
    /// Rendered element height; absent when the element is not mounted.
    #[serde(default)]
    pub height: Option<f64>,
}

/// Scroll surface extents.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioViewport {
    /// Distance scrolled from the top.
    pub scroll_top: f64,
    /// Visible height of the scroll surface.
    pub client_height: f64,
    /// Defaults to the stacked item height, or the sum of page heights
    /// when no items are given.
    #[serde(default)]
    pub scroll_height: Option<f64>,
}

/// A rendered message item; items stack in the order listed.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioItem {
    /// Item reference.
    pub id: ItemRef,
    /// Owning page.
    pub page: PageKey,
    /// Rendered height in whole pixels.
    pub height: usize,
}

/// Parse a scenario from JSON text.
pub fn parse_scenario(json: &str) -> Result<Scenario, ScenarioError> {
    serde_json::from_str(json).map_err(|e| ScenarioError::ParseError {
        reason: e.to_string(),
    })
}

/// Read and parse a scenario file.
pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ScenarioError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_scenario(&contents)
}

impl Scenario {
    /// Validated page store snapshot.
    ///
    /// A key listed twice in `pages` is rejected rather than letting one
    /// entry shadow the other.
    pub fn state(&self) -> Result<MessageListState, InconsistentState> {
        let mut pages = HashMap::with_capacity(self.pages.len());
        for entry in &self.pages {
            if pages
                .insert(entry.key.clone(), Page::new(entry.last_message_index))
                .is_some()
            {
                return Err(InconsistentState::DuplicatePage(entry.key.clone()));
            }
        }
        MessageListState::new(self.message_count, pages, self.ordering.clone())
    }

    /// Measured geometry described by the scenario.
    pub fn surface(&self) -> MeasuredSurface {
        let mut surface = self
            .pages
            .iter()
            .filter_map(|p| p.height.map(|h| (p.key.clone(), h)))
            .fold(MeasuredSurface::new(), |s, (key, h)| s.with_page(key, h));

        if let Some(items) = &self.items {
            surface = surface.with_stacked_items(
                items
                    .iter()
                    .map(|i| (i.id.clone(), i.page.clone(), i.height)),
            );
        }

        if let Some(viewport) = self.viewport {
            let scroll_height = viewport.scroll_height.unwrap_or_else(|| {
                if self.items.is_some() {
                    surface.stacked_height() as f64
                } else {
                    surface.total_page_height()
                }
            });
            surface = surface.with_scroll(ScrollExtents::new(
                viewport.scroll_top,
                viewport.client_height,
                scroll_height,
            ));
        }

        if let Some(height) = self.wrapper_height {
            surface = surface.with_wrapper_height(height);
        }

        surface
    }
}
