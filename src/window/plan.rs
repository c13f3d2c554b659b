//! One-shot window decisions for a snapshot.

use super::evictor::{evict_from_bottom, evict_from_top, EvictionPolicy};
use super::proximity::{estimate_proximity, Proximity};
use super::rotation::rotate_away_from_index;
use super::visibility::{messages_in_view, VisibleItem};
use crate::geometry::GeometryProvider;
use crate::model::{MessageListState, PageKey, WindowError};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Result of one eviction pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionOutcome {
    /// Pages that can be unloaded, in scan order.
    Pages(Vec<PageKey>),
    /// Geometry could not be sampled; retry later rather than treat as empty.
    Unavailable(WindowError),
}

impl From<Result<Vec<PageKey>, WindowError>> for EvictionOutcome {
    fn from(result: Result<Vec<PageKey>, WindowError>) -> Self {
        match result {
            Ok(pages) => Self::Pages(pages),
            Err(err) => Self::Unavailable(err),
        }
    }
}

impl EvictionOutcome {
    /// Evictable pages, or `None` when the pass could not measure.
    pub fn pages(&self) -> Option<&[PageKey]> {
        match self {
            Self::Pages(pages) => Some(pages),
            Self::Unavailable(_) => None,
        }
    }
}

/// Every windowing decision for one snapshot and one geometry sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowPlan {
    /// Top pass result.
    pub evict_top: EvictionOutcome,
    /// Bottom pass result.
    pub evict_bottom: EvictionOutcome,
    /// Items intersecting the viewport, in document order.
    pub visible: Vec<VisibleItem>,
    /// Distance from the newest message.
    pub proximity: Proximity,
    /// `proximity` collapsed to a verdict, `Unknown` counting as near.
    pub far_from_newest: bool,
    /// Page the visit order radiates from.
    pub pivot: PageKey,
    /// Other loaded pages, nearest (in load order) to the pivot first.
    pub visit_order: Vec<PageKey>,
}

impl WindowPlan {
    /// Run every window computation against `geometry`.
    ///
    /// The pivot is the page owning the first visible item, falling back to
    /// the last-loaded page when nothing visible maps to a loaded page.
    pub fn compute<G>(state: &MessageListState, geometry: &G, policy: EvictionPolicy) -> Self
    where
        G: GeometryProvider + ?Sized,
    {
        let ordering = state.ordering();
        let evict_top: EvictionOutcome = evict_from_top(ordering, geometry, policy).into();
        let evict_bottom: EvictionOutcome = evict_from_bottom(ordering, geometry, policy).into();
        let visible: Vec<VisibleItem> = messages_in_view(geometry).collect();
        let proximity = estimate_proximity(state, geometry);

        let pivot_index = visible
            .first()
            .and_then(|v| ordering.position(&v.page))
            .unwrap_or(ordering.len() - 1);
        let pivot = ordering
            .get(pivot_index)
            .unwrap_or_else(|| state.last_loaded_key())
            .clone();
        let visit_order = rotate_away_from_index(pivot_index, ordering.len())
            .filter_map(|i| ordering.get(i).cloned())
            .collect();

        debug!(
            visible = visible.len(),
            ?proximity,
            pivot = %pivot,
            "window plan computed"
        );

        Self {
            evict_top,
            evict_bottom,
            visible,
            proximity,
            far_from_newest: proximity.is_far(),
            pivot,
            visit_order,
        }
    }
}

fn write_keys(f: &mut fmt::Formatter<'_>, keys: &[PageKey]) -> fmt::Result {
    if keys.is_empty() {
        return f.write_str("-");
    }
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}")?;
    }
    Ok(())
}

fn write_outcome(f: &mut fmt::Formatter<'_>, outcome: &EvictionOutcome) -> fmt::Result {
    match outcome {
        EvictionOutcome::Pages(pages) => write_keys(f, pages),
        EvictionOutcome::Unavailable(reason) => write!(f, "unavailable ({reason})"),
    }
}

impl fmt::Display for WindowPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("evict top: ")?;
        write_outcome(f, &self.evict_top)?;
        f.write_str("\nevict bottom: ")?;
        write_outcome(f, &self.evict_bottom)?;

        f.write_str("\nvisible: ")?;
        if self.visible.is_empty() {
            f.write_str("-")?;
        }
        for (i, v) in self.visible.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} [{}, {}]", v.item, v.offset_top, v.offset_bottom)?;
        }

        let proximity = match self.proximity {
            Proximity::Near => "near",
            Proximity::Far => "far",
            Proximity::Unknown => "unknown",
        };
        write!(f, "\nproximity: {proximity}")?;
        write!(f, "\nfar from newest: {}", self.far_from_newest)?;
        write!(f, "\npivot: {}", self.pivot)?;
        f.write_str("\nvisit order: ")?;
        write_keys(f, &self.visit_order)
    }
}
