//! Windowing decisions - which pages to keep, what is visible, how far from newest.
//!
//! Every operation here reads a snapshot ([`crate::model::MessageListState`]
//! or [`crate::model::PageOrdering`]) plus a [`crate::geometry::GeometryProvider`]
//! and returns a decision. Nothing is cached between calls.
//!
//! # Module Structure
//!
//! - `evictor`: threshold eviction from the top or bottom of the load order
//! - `visibility`: lazy scan of items intersecting the viewport band
//! - `proximity`: near/far verdict relative to the newest message
//! - `rotation`: outward index traversal around a pivot
//! - `plan`: WindowPlan - all of the above for one snapshot

pub mod evictor;
pub mod plan;
pub mod proximity;
pub mod rotation;
pub mod visibility;

pub use evictor::{
    evict_from_bottom, evict_from_top, plan_bottom_eviction, plan_top_eviction, EvictionPolicy,
    DEFAULT_BUFFER_MULTIPLIER,
};
pub use plan::{EvictionOutcome, WindowPlan};
pub use proximity::{estimate_proximity, is_far_from_newest, is_scrolled_to_bottom, Proximity};
pub use rotation::{rotate_away_from_index, RotateAwayFromIndex};
pub use visibility::{in_between, messages_in_view, MessagesInView, ViewportBand, VisibleItem};
