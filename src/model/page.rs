//! Page store snapshot types.
//!
//! The page store itself lives outside this crate. The windowing core only
//! reads an immutable snapshot of it: which pages are loaded, in what order
//! they were loaded, and where each page ends in the global message sequence.

use super::error::InconsistentState;
use super::identifiers::PageKey;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A contiguous chunk of messages that is loaded and unloaded as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Index (within the global message-id sequence) of this page's last message.
    pub last_message_index: usize,
}

impl Page {
    /// Page ending at `last_message_index`.
    pub fn new(last_message_index: usize) -> Self {
        Self { last_message_index }
    }
}

/// Load-order sequence of page keys.
///
/// Order reflects *when* pages were loaded, not message chronology: a page
/// fetched while scrolling up is appended after newer pages.
///
/// # Invariants
/// - No duplicate keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageOrdering(Vec<PageKey>);

impl PageOrdering {
    /// Create an ordering, rejecting duplicate keys.
    pub fn new(keys: Vec<PageKey>) -> Result<Self, InconsistentState> {
        let mut seen = HashSet::with_capacity(keys.len());
        for key in &keys {
            if !seen.insert(key) {
                return Err(InconsistentState::DuplicatePage(key.clone()));
            }
        }
        Ok(Self(keys))
    }

    /// Append a newly loaded page.
    pub fn push(&mut self, key: PageKey) -> Result<(), InconsistentState> {
        if self.contains(&key) {
            return Err(InconsistentState::DuplicatePage(key));
        }
        self.0.push(key);
        Ok(())
    }

    /// Number of loaded pages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no pages are loaded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key at a load-order position.
    pub fn get(&self, index: usize) -> Option<&PageKey> {
        self.0.get(index)
    }

    /// Most recently loaded page.
    pub fn last(&self) -> Option<&PageKey> {
        self.0.last()
    }

    /// Load-order position of a page.
    pub fn position(&self, key: &PageKey) -> Option<usize> {
        self.0.iter().position(|k| k == key)
    }

    /// Whether `key` is loaded.
    pub fn contains(&self, key: &PageKey) -> bool {
        self.0.contains(key)
    }

    /// Keys in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, PageKey> {
        self.0.iter()
    }

    /// Keys in load order, as a slice.
    pub fn as_slice(&self) -> &[PageKey] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a PageOrdering {
    type Item = &'a PageKey;
    type IntoIter = std::slice::Iter<'a, PageKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for PageOrdering {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let keys = Vec::<PageKey>::deserialize(deserializer)?;
        Self::new(keys).map_err(serde::de::Error::custom)
    }
}

/// Read-only snapshot of the message list store.
///
/// # Invariants
/// - `ordering` is non-empty and duplicate-free
/// - Every key in `ordering` has an entry in `pages`
/// - Every page's `last_message_index < message_count`
///
/// These are checked once by [`MessageListState::new`]; the windowing
/// operations rely on them without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageListState {
    message_count: usize,
    pages: HashMap<PageKey, Page>,
    ordering: PageOrdering,
    last_loaded_key: PageKey,
    last_loaded_page: Page,
}

impl MessageListState {
    /// Smart constructor validating the snapshot invariants.
    pub fn new(
        message_count: usize,
        pages: HashMap<PageKey, Page>,
        ordering: PageOrdering,
    ) -> Result<Self, InconsistentState> {
        let mut last_loaded = None;
        for key in &ordering {
            let page = pages
                .get(key)
                .ok_or_else(|| InconsistentState::MissingPage(key.clone()))?;
            if page.last_message_index >= message_count {
                return Err(InconsistentState::NewestBeyondCount {
                    page: key.clone(),
                    last_message_index: page.last_message_index,
                    message_count,
                });
            }
            last_loaded = Some((key, *page));
        }
        let (last_key, last_loaded_page) = last_loaded.ok_or(InconsistentState::EmptyOrdering)?;
        let last_loaded_key = last_key.clone();

        Ok(Self {
            message_count,
            pages,
            ordering,
            last_loaded_key,
            last_loaded_page,
        })
    }

    /// Total number of message ids known to the store.
    pub fn message_count(&self) -> usize {
        self.message_count
    }

    /// Index of the newest message in the global sequence.
    pub fn newest_message_index(&self) -> usize {
        // message_count >= 1: some page ends below it
        self.message_count - 1
    }

    /// Load order of the pages.
    pub fn ordering(&self) -> &PageOrdering {
        &self.ordering
    }

    /// Page map entry for `key`.
    pub fn page(&self, key: &PageKey) -> Option<&Page> {
        self.pages.get(key)
    }

    /// The whole page map.
    pub fn pages(&self) -> &HashMap<PageKey, Page> {
        &self.pages
    }

    /// Key of the most recently loaded page.
    pub fn last_loaded_key(&self) -> &PageKey {
        &self.last_loaded_key
    }

    /// The most recently loaded page.
    pub fn last_loaded_page(&self) -> &Page {
        &self.last_loaded_page
    }

    /// Whether the newest message's page is loaded at the end of the ordering.
    pub fn newest_is_loaded(&self) -> bool {
        self.last_loaded_page.last_message_index == self.newest_message_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> PageKey {
        PageKey::new(raw).unwrap()
    }

    fn ordering(keys: &[&str]) -> PageOrdering {
        PageOrdering::new(keys.iter().map(|k| key(k)).collect()).unwrap()
    }

    mod page_ordering {
        use super::*;

        #[test]
        fn preserves_load_order() {
            let ord = ordering(&["p2", "p0", "p1"]);
            let keys: Vec<_> = ord.iter().map(PageKey::as_str).collect();
            assert_eq!(keys, vec!["p2", "p0", "p1"]);
        }

        #[test]
        fn rejects_duplicate_keys() {
            let result = PageOrdering::new(vec![key("a"), key("b"), key("a")]);
            assert_eq!(result, Err(InconsistentState::DuplicatePage(key("a"))));
        }

        #[test]
        fn push_rejects_duplicate() {
            let mut ord = ordering(&["a"]);
            assert!(ord.push(key("b")).is_ok());
            assert_eq!(
                ord.push(key("a")),
                Err(InconsistentState::DuplicatePage(key("a")))
            );
            assert_eq!(ord.len(), 2);
        }

        #[test]
        fn position_and_last() {
            let ord = ordering(&["a", "b", "c"]);
            assert_eq!(ord.position(&key("b")), Some(1));
            assert_eq!(ord.position(&key("z")), None);
            assert_eq!(ord.last(), Some(&key("c")));
        }

        #[test]
        fn empty_ordering_has_no_last() {
            let ord = PageOrdering::default();
            assert!(ord.is_empty());
            assert_eq!(ord.last(), None);
        }

        #[test]
        fn deserialize_rejects_duplicates() {
            let result: Result<PageOrdering, _> = serde_json::from_str(r#"["a", "a"]"#);
            assert!(result.is_err());
        }
    }

    mod message_list_state {
        use super::*;

        fn pages(entries: &[(&str, usize)]) -> HashMap<PageKey, Page> {
            entries
                .iter()
                .map(|(k, last)| (key(k), Page::new(*last)))
                .collect()
        }

        #[test]
        fn valid_snapshot_exposes_last_loaded_page() {
            let state = MessageListState::new(
                50,
                pages(&[("a", 19), ("b", 39), ("c", 49)]),
                ordering(&["b", "c", "a"]),
            )
            .unwrap();

            assert_eq!(state.last_loaded_key(), &key("a"));
            assert_eq!(state.last_loaded_page().last_message_index, 19);
            assert_eq!(state.newest_message_index(), 49);
            assert!(!state.newest_is_loaded());
        }

        #[test]
        fn single_page_snapshot_last_loaded_key_matches_ordering() {
            let state = MessageListState::new(1, pages(&[("only", 0)]), ordering(&["only"])).unwrap();

            assert_eq!(state.last_loaded_key(), &key("only"));
            assert_eq!(Some(state.last_loaded_key()), state.ordering().last());
        }

        #[test]
        fn newest_is_loaded_when_last_page_ends_at_newest() {
            let state =
                MessageListState::new(50, pages(&[("a", 29), ("b", 49)]), ordering(&["a", "b"]))
                    .unwrap();
            assert!(state.newest_is_loaded());
        }

        #[test]
        fn rejects_empty_ordering() {
            let result = MessageListState::new(10, pages(&[("a", 9)]), PageOrdering::default());
            assert_eq!(result, Err(InconsistentState::EmptyOrdering));
        }

        #[test]
        fn rejects_ordering_key_missing_from_map() {
            let result = MessageListState::new(10, pages(&[("a", 9)]), ordering(&["a", "ghost"]));
            assert_eq!(result, Err(InconsistentState::MissingPage(key("ghost"))));
        }

        #[test]
        fn rejects_page_past_message_count() {
            let result = MessageListState::new(10, pages(&[("a", 10)]), ordering(&["a"]));
            assert!(matches!(
                result,
                Err(InconsistentState::NewestBeyondCount { .. })
            ));
        }

        #[test]
        fn allows_pages_not_in_ordering() {
            let state =
                MessageListState::new(10, pages(&[("a", 4), ("b", 9)]), ordering(&["b"])).unwrap();
            assert!(state.page(&key("a")).is_some());
            assert_eq!(state.ordering().len(), 1);
        }
    }
}
