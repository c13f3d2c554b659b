//! Geometry sampling - the measured extents the windowing core reads.
//!
//! The core never touches a rendering surface directly. Everything it needs
//! comes through a [`GeometryProvider`]: page element heights, the scroll
//! surface extents, the wrapper height and the rendered items in document
//! order. Every accessor returns `Option`; `None` means the element or
//! reference is not currently available for measurement.
//!
//! # Module Structure
//!
//! - `height_index`: HeightIndex - O(log n) prefix sums via Fenwick tree
//! - `surface`: MeasuredSurface - in-memory provider built from stacked heights

pub mod height_index;
pub mod surface;

pub use height_index::HeightIndex;
pub use surface::MeasuredSurface;

use crate::model::{ItemRef, PageKey};
use serde::{Deserialize, Serialize};

/// Extents of the scrollable surface, sampled once per computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollExtents {
    /// Distance scrolled from the top of the content.
    pub scroll_top: f64,
    /// Visible height of the scroll surface.
    pub client_height: f64,
    /// Full height of the scrollable content.
    pub scroll_height: f64,
}

impl ScrollExtents {
    /// Extents from the three scroll-surface measurements.
    pub fn new(scroll_top: f64, client_height: f64, scroll_height: f64) -> Self {
        Self {
            scroll_top,
            client_height,
            scroll_height,
        }
    }

    /// Offset of the viewport's bottom edge.
    pub fn scroll_bottom(&self) -> f64 {
        self.scroll_top + self.client_height
    }
}

/// A rendered message item, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedItem {
    /// Reference the caller uses to find the render node.
    pub item: ItemRef,
    /// Page the item belongs to.
    pub page: PageKey,
    /// Top edge relative to the list.
    pub offset_top: f64,
    /// Rendered height.
    pub height: f64,
}

impl RenderedItem {
    /// Item at `offset_top` with the given height.
    pub fn new(item: ItemRef, page: PageKey, offset_top: f64, height: f64) -> Self {
        Self {
            item,
            page,
            offset_top,
            height,
        }
    }

    /// Bottom edge relative to the list.
    pub fn offset_bottom(&self) -> f64 {
        self.offset_top + self.height
    }
}

/// Capability to sample geometry from the hosting surface.
pub trait GeometryProvider {
    /// Rendered height of a page's element.
    fn page_height(&self, key: &PageKey) -> Option<f64>;

    /// Extents of the scroll surface.
    fn scroll_extents(&self) -> Option<ScrollExtents>;

    /// Client height of the wrapper around the scroll surface.
    fn wrapper_height(&self) -> Option<f64>;

    /// Rendered items in document order, or `None` if the list container is gone.
    fn rendered_items(&self) -> Option<&[RenderedItem]>;
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for &G {
    fn page_height(&self, key: &PageKey) -> Option<f64> {
        (**self).page_height(key)
    }

    fn scroll_extents(&self) -> Option<ScrollExtents> {
        (**self).scroll_extents()
    }

    fn wrapper_height(&self) -> Option<f64> {
        (**self).wrapper_height()
    }

    fn rendered_items(&self) -> Option<&[RenderedItem]> {
        (**self).rendered_items()
    }
}
