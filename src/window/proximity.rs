//! Distance from the newest message.

use crate::geometry::{GeometryProvider, ScrollExtents};
use crate::model::MessageListState;
use serde::Serialize;
use tracing::debug;

/// Whether the viewport is within reach of the newest message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Proximity {
    /// Newest page loaded and the viewport bottom is within half a viewport of the end.
    Near,
    /// Newest page not loaded, or the viewport is scrolled away from the end.
    Far,
    /// Newest page loaded but the scroll surface could not be measured.
    Unknown,
}

impl Proximity {
    /// Boolean verdict. `Unknown` counts as near, so an unmeasurable viewport
    /// never triggers catch-up behavior.
    pub fn is_far(self) -> bool {
        matches!(self, Self::Far)
    }
}

/// Classify how far the viewport is from the newest message.
///
/// Data completeness is checked first: if the last-loaded page does not end
/// at the newest message, the result is `Far` whatever the scroll position.
pub fn estimate_proximity<G>(state: &MessageListState, geometry: &G) -> Proximity
where
    G: GeometryProvider + ?Sized,
{
    let newest = state.newest_message_index();
    let last_loaded = state.last_loaded_page().last_message_index;
    debug!(
        newest,
        last_loaded,
        page = %state.last_loaded_key(),
        "estimating proximity to newest message"
    );

    if last_loaded != newest {
        return Proximity::Far;
    }

    match geometry.scroll_extents() {
        Some(extents) => proximity_from_extents(&extents),
        None => Proximity::Unknown,
    }
}

/// `Near` when the viewport bottom is at least `scroll_height - client_height / 2`.
pub fn proximity_from_extents(extents: &ScrollExtents) -> Proximity {
    let border = extents.scroll_height - extents.client_height / 2.0;
    if extents.scroll_bottom() >= border {
        Proximity::Near
    } else {
        Proximity::Far
    }
}

/// Whether the viewport is one viewport height or more away from the newest message.
pub fn is_far_from_newest<G>(state: &MessageListState, geometry: &G) -> bool
where
    G: GeometryProvider + ?Sized,
{
    estimate_proximity(state, geometry).is_far()
}

/// Whether the viewport is pinned to the very bottom of the content.
///
/// ```
/// # use msgwin::window::proximity::is_scrolled_to_bottom;
/// assert!(is_scrolled_to_bottom(900.0, 1000.0, 100.0));
/// assert!(!is_scrolled_to_bottom(899.0, 1000.0, 100.0));
/// ```
pub fn is_scrolled_to_bottom(scroll_top: f64, scroll_height: f64, client_height: f64) -> bool {
    scroll_top >= scroll_height - client_height
}
