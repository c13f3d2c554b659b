//! HeightIndex - O(log n) prefix sums via Fenwick tree
//!
//! Stacks rendered items top to bottom in document order and answers
//! "where does item i start" and "how tall is the stack".

/// Prefix sums over item heights, built once from a document-order list.
///
/// Heights are whole pixels, matching what a layout engine reports for
/// element client heights.
#[derive(Debug, Clone, Default)]
pub struct HeightIndex {
    /// Fenwick tree backing storage (1-indexed internally, 0-indexed API)
    tree: Vec<isize>,
    heights: Vec<usize>,
}

impl HeightIndex {
    /// Builds an index from heights in document order.
    ///
    /// ```
    /// # use msgwin::geometry::height_index::HeightIndex;
    /// let index = HeightIndex::from_heights([10, 20, 15]);
    /// assert_eq!(index.offset_top(2), 30);
    /// assert_eq!(index.total(), 45);
    /// ```
    pub fn from_heights(heights: impl IntoIterator<Item = usize>) -> Self {
        let heights: Vec<usize> = heights.into_iter().collect();
        let mut tree = vec![0; heights.len()];
        for (i, &h) in heights.iter().enumerate() {
            fenwick::array::update(&mut tree, i, h as isize);
        }
        Self { tree, heights }
    }

    /// Returns the cumulative height up to and including the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// ```
    /// # use msgwin::geometry::height_index::HeightIndex;
    /// let index = HeightIndex::from_heights([3, 4, 5]);
    /// assert_eq!(index.prefix_sum(0), 3);
    /// assert_eq!(index.prefix_sum(2), 12);
    /// ```
    pub fn prefix_sum(&self, index: usize) -> usize {
        assert!(
            index < self.len(),
            "index {} out of bounds (len: {})",
            index,
            self.len()
        );

        let sum = fenwick::array::prefix_sum(&self.tree, index);
        sum.max(0) as usize
    }

    /// Offset of the top edge of the given entry.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn offset_top(&self, index: usize) -> usize {
        self.prefix_sum(index) - self.heights[index]
    }

    /// Total stacked height of all entries.
    pub fn total(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.prefix_sum(self.len() - 1)
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}
