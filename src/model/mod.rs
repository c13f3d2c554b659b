//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod page;

// Re-export for convenience
pub use error::{AppError, InconsistentState, WindowError};
pub use identifiers::{InvalidItemRef, InvalidPageKey, ItemRef, PageKey};
pub use page::{MessageListState, Page, PageOrdering};
