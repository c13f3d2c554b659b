//! In-memory geometry provider.

use super::height_index::HeightIndex;
use super::{GeometryProvider, RenderedItem, ScrollExtents};
use crate::model::{ItemRef, PageKey};
use std::collections::HashMap;

/// A value snapshot of measured geometry.
///
/// Items are stacked contiguously from offset 0 in document order; their
/// offsets come from a [`HeightIndex`]. Any part of the surface can be left
/// unmeasured to model a missing element or reference.
#[derive(Debug, Clone, Default)]
pub struct MeasuredSurface {
    page_heights: HashMap<PageKey, f64>,
    scroll: Option<ScrollExtents>,
    wrapper_height: Option<f64>,
    items: Option<Vec<RenderedItem>>,
    layout: HeightIndex,
}

impl MeasuredSurface {
    /// Empty surface: nothing is measurable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rendered height of a page element.
    pub fn with_page(mut self, key: PageKey, height: f64) -> Self {
        self.page_heights.insert(key, height);
        self
    }

    /// Record scroll surface extents.
    pub fn with_scroll(mut self, extents: ScrollExtents) -> Self {
        self.scroll = Some(extents);
        self
    }

    /// Record the wrapper client height.
    pub fn with_wrapper_height(mut self, height: f64) -> Self {
        self.wrapper_height = Some(height);
        self
    }

    /// Stack items top to bottom, in document order.
    ///
    /// Makes the list container available even when `items` is empty.
    pub fn with_stacked_items(
        mut self,
        items: impl IntoIterator<Item = (ItemRef, PageKey, usize)>,
    ) -> Self {
        let items: Vec<_> = items.into_iter().collect();
        self.layout = HeightIndex::from_heights(items.iter().map(|(_, _, h)| *h));
        let rendered = items
            .into_iter()
            .enumerate()
            .map(|(i, (item, page, height))| {
                RenderedItem::new(
                    item,
                    page,
                    self.layout.offset_top(i) as f64,
                    height as f64,
                )
            })
            .collect();
        self.items = Some(rendered);
        self
    }

    /// Use explicitly positioned items instead of stacking them.
    pub fn with_items(mut self, items: Vec<RenderedItem>) -> Self {
        self.layout = HeightIndex::default();
        self.items = Some(items);
        self
    }

    /// Move the viewport. No-op when no scroll surface is recorded.
    pub fn scroll_to(&mut self, scroll_top: f64) {
        if let Some(extents) = self.scroll.as_mut() {
            extents.scroll_top = scroll_top;
        }
    }

    /// Forget a page element, as if it had been unmounted.
    pub fn unmount_page(&mut self, key: &PageKey) -> Option<f64> {
        self.page_heights.remove(key)
    }

    /// Total height of the stacked items (0 when items were positioned explicitly).
    pub fn stacked_height(&self) -> usize {
        self.layout.total()
    }

    /// Sum of all recorded page heights.
    pub fn total_page_height(&self) -> f64 {
        self.page_heights.values().sum()
    }
}

impl GeometryProvider for MeasuredSurface {
    fn page_height(&self, key: &PageKey) -> Option<f64> {
        self.page_heights.get(key).copied()
    }

    fn scroll_extents(&self) -> Option<ScrollExtents> {
        self.scroll
    }

    fn wrapper_height(&self) -> Option<f64> {
        self.wrapper_height
    }

    fn rendered_items(&self) -> Option<&[RenderedItem]> {
        self.items.as_deref()
    }
}
