//! Threshold eviction of loaded pages.
//!
//! Pages may be unloaded from either end of the load order as long as the
//! rendered window keeps more than `buffer_multiplier` viewport heights of
//! content. Eviction is contiguous from the boundary inward: the first page
//! that would drop the window to the floor stops the scan.
//!
//! The two directions differ in how they treat a page that cannot be
//! measured. The top pass aborts with [`WindowError::MeasurementUnavailable`];
//! the bottom pass skips the page and keeps scanning.

use crate::geometry::GeometryProvider;
use crate::model::{PageKey, PageOrdering, WindowError};
use tracing::debug;

/// Viewport heights of content that must remain after eviction.
pub const DEFAULT_BUFFER_MULTIPLIER: f64 = 4.0;

/// Tuning for threshold eviction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvictionPolicy {
    /// Remaining height must stay strictly above `viewport_height * buffer_multiplier`.
    pub buffer_multiplier: f64,
}

impl Default for EvictionPolicy {
    fn default() -> Self {
        Self {
            buffer_multiplier: DEFAULT_BUFFER_MULTIPLIER,
        }
    }
}

impl EvictionPolicy {
    /// Policy keeping `buffer_multiplier` viewport heights.
    pub fn new(buffer_multiplier: f64) -> Self {
        Self { buffer_multiplier }
    }

    /// Height the window must stay strictly above.
    pub fn floor(&self, viewport_height: f64) -> f64 {
        viewport_height * self.buffer_multiplier
    }
}

/// Pages (oldest-loaded first) that can be unloaded from the top.
///
/// Walks the ordering from index 0, never considering the last-loaded page.
/// `height_of` returning `None` aborts the whole computation.
pub fn plan_top_eviction<F>(
    ordering: &PageOrdering,
    total_height: f64,
    viewport_height: f64,
    policy: EvictionPolicy,
    mut height_of: F,
) -> Result<Vec<PageKey>, WindowError>
where
    F: FnMut(&PageKey) -> Option<f64>,
{
    let floor = policy.floor(viewport_height);
    let candidates = ordering.len().saturating_sub(1);
    let mut remaining = total_height;
    let mut evicted = Vec::new();

    for key in ordering.iter().take(candidates) {
        let height = height_of(key).ok_or_else(|| WindowError::MeasurementUnavailable {
            page: key.clone(),
        })?;
        let without = remaining - height;

        if without > floor {
            evicted.push(key.clone());
            remaining = without;
        } else {
            debug!(page = %key, without, floor, "top eviction reached buffer floor");
            break;
        }
    }

    Ok(evicted)
}

/// Pages (last-loaded first) that can be unloaded from the bottom.
///
/// Walks the ordering backward, never considering index 0. Pages that
/// `height_of` cannot measure are skipped.
pub fn plan_bottom_eviction<F>(
    ordering: &PageOrdering,
    total_height: f64,
    viewport_height: f64,
    policy: EvictionPolicy,
    mut height_of: F,
) -> Vec<PageKey>
where
    F: FnMut(&PageKey) -> Option<f64>,
{
    let floor = policy.floor(viewport_height);
    let mut remaining = total_height;
    let mut evicted = Vec::new();

    debug!(viewport_height, total_height, "bottom eviction start");

    for key in ordering.iter().skip(1).rev() {
        let Some(height) = height_of(key) else {
            debug!(page = %key, "no rendered element for page, skipping");
            continue;
        };
        let without = remaining - height;
        debug!(page = %key, without, floor, "bottom eviction candidate");

        if without > floor {
            evicted.push(key.clone());
            remaining = without;
        } else {
            debug!("found all removable bottom pages");
            break;
        }
    }

    evicted
}

/// Top eviction using heights sampled from `geometry`.
///
/// Total height is the scroll surface's `scroll_height`; the viewport is the
/// wrapper's client height.
pub fn evict_from_top<G>(
    ordering: &PageOrdering,
    geometry: &G,
    policy: EvictionPolicy,
) -> Result<Vec<PageKey>, WindowError>
where
    G: GeometryProvider + ?Sized,
{
    let (total_height, viewport_height) = sample_window(geometry)?;
    plan_top_eviction(ordering, total_height, viewport_height, policy, |key| {
        geometry.page_height(key)
    })
}

/// Bottom eviction using heights sampled from `geometry`.
///
/// Fails only when the scroll surface or wrapper is unmeasurable.
pub fn evict_from_bottom<G>(
    ordering: &PageOrdering,
    geometry: &G,
    policy: EvictionPolicy,
) -> Result<Vec<PageKey>, WindowError>
where
    G: GeometryProvider + ?Sized,
{
    let (total_height, viewport_height) = sample_window(geometry)?;
    Ok(plan_bottom_eviction(
        ordering,
        total_height,
        viewport_height,
        policy,
        |key| geometry.page_height(key),
    ))
}

fn sample_window<G>(geometry: &G) -> Result<(f64, f64), WindowError>
where
    G: GeometryProvider + ?Sized,
{
    let extents = geometry
        .scroll_extents()
        .ok_or(WindowError::ViewportUnavailable)?;
    let wrapper = geometry
        .wrapper_height()
        .ok_or(WindowError::ViewportUnavailable)?;
    Ok((extents.scroll_height, wrapper))
}

#[cfg(test)]
#[path = "evictor_tests.rs"]
mod tests;
