//! Identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique key of a loaded page (also the id of its rendered element).
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PageKey(String);

impl PageKey {
    /// Smart constructor: validates non-empty page key
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidPageKey> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidPageKey::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PageKey {
    type Error = InvalidPageKey;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<PageKey> for String {
    fn from(key: PageKey) -> Self {
        key.0
    }
}

/// Reference to a rendered message item, handed back to the caller so it can
/// find the underlying render node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemRef(String);

impl ItemRef {
    /// Smart constructor: validates non-empty item reference
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidItemRef> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidItemRef::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ItemRef {
    type Error = InvalidItemRef;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ItemRef> for String {
    fn from(item: ItemRef) -> Self {
        item.0
    }
}

// ===== Error Types =====

/// Rejected page key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPageKey {
    /// Key was the empty string.
    #[error("Page key cannot be empty")]
    Empty,
}

/// Rejected item reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItemRef {
    /// Reference was the empty string.
    #[error("Item reference cannot be empty")]
    Empty,
}

// ===== Tests =====
