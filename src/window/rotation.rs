//! Outward traversal of index positions around a pivot.

/// Iterator over `[0, length)` minus `pivot`, nearest first.
///
/// At each distance `d` it yields `pivot + d` then `pivot - d`, skipping
/// whichever falls outside the range. Created by [`rotate_away_from_index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotateAwayFromIndex {
    pivot: usize,
    length: usize,
    distance: usize,
    /// `pivot - distance` is still owed for the current distance
    backward_pending: bool,
    remaining: usize,
}

/// Visit every index except `pivot` in order of increasing distance from it.
///
/// Yields nothing when `length == 0` or `pivot >= length`.
///
/// ```
/// # use msgwin::window::rotation::rotate_away_from_index;
/// let order: Vec<_> = rotate_away_from_index(3, 7).collect();
/// assert_eq!(order, vec![4, 2, 5, 1, 6, 0]);
/// ```
pub fn rotate_away_from_index(pivot: usize, length: usize) -> RotateAwayFromIndex {
    let remaining = if pivot < length { length - 1 } else { 0 };
    RotateAwayFromIndex {
        pivot,
        length,
        distance: 1,
        backward_pending: false,
        remaining,
    }
}

impl Iterator for RotateAwayFromIndex {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.remaining > 0 {
            if self.backward_pending {
                self.backward_pending = false;
                let distance = self.distance;
                self.distance += 1;
                if let Some(index) = self.pivot.checked_sub(distance) {
                    self.remaining -= 1;
                    return Some(index);
                }
            } else {
                self.backward_pending = true;
                let forward = self.pivot.checked_add(self.distance);
                if let Some(index) = forward.filter(|&i| i < self.length) {
                    self.remaining -= 1;
                    return Some(index);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RotateAwayFromIndex {}

impl std::iter::FusedIterator for RotateAwayFromIndex {}
