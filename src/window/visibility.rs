//! Visible item scanning.

use crate::geometry::{GeometryProvider, RenderedItem, ScrollExtents};
use crate::model::{ItemRef, PageKey};
use serde::Serialize;

/// Inclusive range check.
///
/// ```
/// # use msgwin::window::visibility::in_between;
/// assert!(in_between(100.0, 500.0, 100.0));
/// assert!(in_between(100.0, 500.0, 500.0));
/// assert!(!in_between(100.0, 500.0, 99.0));
/// ```
pub fn in_between(low: f64, high: f64, value: f64) -> bool {
    value >= low && value <= high
}

/// The currently visible vertical extent, `[scroll_top, scroll_top + client_height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportBand {
    /// Top edge (`scroll_top`).
    pub top: f64,
    /// Bottom edge (`scroll_top + client_height`).
    pub bottom: f64,
    /// Height of the band.
    pub client_height: f64,
}

impl ViewportBand {
    /// Band covered by the given scroll extents.
    pub fn from_extents(extents: &ScrollExtents) -> Self {
        Self {
            top: extents.scroll_top,
            bottom: extents.scroll_bottom(),
            client_height: extents.client_height,
        }
    }

    /// Whether `[top, bottom]` intersects the band. Both ends inclusive.
    pub fn overlaps(&self, top: f64, bottom: f64) -> bool {
        in_between(self.top, self.bottom, top)
            || in_between(self.top, self.bottom, bottom)
            || (top < self.top && bottom > self.bottom)
    }
}

/// An item intersecting the viewport band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibleItem {
    /// Reference to the rendered item.
    pub item: ItemRef,
    /// Page the item belongs to.
    pub page: PageKey,
    /// Top edge relative to the list.
    pub offset_top: f64,
    /// Bottom edge relative to the list.
    pub offset_bottom: f64,
    /// Band the item was tested against.
    pub band: ViewportBand,
}

/// Lazy scan over rendered items, yielding those inside the viewport band.
///
/// Created by [`messages_in_view`]. Holds only a borrow of the item list, so
/// it can be dropped part-way through.
#[derive(Debug, Clone)]
pub struct MessagesInView<'a> {
    items: std::slice::Iter<'a, RenderedItem>,
    band: Option<ViewportBand>,
}

impl<'a> Iterator for MessagesInView<'a> {
    type Item = VisibleItem;

    fn next(&mut self) -> Option<Self::Item> {
        let band = self.band?;
        self.items
            .by_ref()
            .find(|item| band.overlaps(item.offset_top, item.offset_bottom()))
            .map(|item| VisibleItem {
                item: item.item.clone(),
                page: item.page.clone(),
                offset_top: item.offset_top,
                offset_bottom: item.offset_bottom(),
                band,
            })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.band {
            Some(_) => (0, Some(self.items.len())),
            None => (0, Some(0)),
        }
    }
}

/// Items overlapping the viewport, in document order.
///
/// Each call samples geometry afresh. Yields nothing if the list container
/// or the scroll surface is unavailable.
pub fn messages_in_view<G>(geometry: &G) -> MessagesInView<'_>
where
    G: GeometryProvider + ?Sized,
{
    match (geometry.rendered_items(), geometry.scroll_extents()) {
        (Some(items), Some(extents)) => MessagesInView {
            items: items.iter(),
            band: Some(ViewportBand::from_extents(&extents)),
        },
        _ => MessagesInView {
            items: Default::default(),
            band: None,
        },
    }
}
