//! msgwin - windowed page management for chat message lists
//!
//! Only a contiguous subset of an unbounded, append-heavy message list is
//! ever materialized. This crate decides which loaded pages can be evicted,
//! which items are visible, how far the viewport is from the newest message,
//! and in which order neighboring pages should be visited.
//!
//! It is a pure core: page data comes in as a [`model::MessageListState`]
//! snapshot, geometry through a [`geometry::GeometryProvider`], and decisions
//! go out as plain values.

pub mod config;
pub mod geometry;
pub mod logging;
pub mod model;
pub mod scenario;
pub mod window;
