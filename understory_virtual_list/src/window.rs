// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render window: turn a [`VisibleRange`] into per-row render descriptors.
//!
//! Descriptors borrow from the caller's collection for the duration of one
//! recomputation and are yielded in ascending index order. Each descriptor's
//! `translate` is relative to the first realized row, so hosts place rows
//! inside a sub-container that is itself offset by [`VisibleRange::offset`].
//!
//! ```rust
//! use understory_virtual_list::{compute_range, render_window_with_keys};
//!
//! let names = ["ada", "grace", "linus", "barbara"];
//! let range = compute_range(20.0_f32, 20.0, 10.0, 0, names.len());
//!
//! let rows: Vec<_> = render_window_with_keys(&names, range, 10.0, |name, _| *name)
//!     .map(|row| (row.key, row.index, row.translate))
//!     .collect();
//! assert_eq!(rows, vec![("linus", 2, 0.0), ("barbara", 3, 10.0)]);
//! ```

use core::iter::FusedIterator;
use core::ops::Range;

use crate::geometry::VisibleRange;
use crate::Scalar;

/// One realized row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderDescriptor<'a, T, S: Scalar, K = usize> {
    /// Stable identity used by the host to recycle row views.
    pub key: K,
    /// Index of the row in the collection.
    pub index: usize,
    /// The row's item.
    pub item: &'a T,
    /// Offset of the row from the first realized row.
    pub translate: S,
}

/// Default key extractor: the row index.
#[must_use]
pub fn index_key<T>(_item: &T, index: usize) -> usize {
    index
}

/// Iterator over the rows of a [`VisibleRange`].
///
/// Created by [`render_window`] and [`render_window_with_keys`].
pub struct RenderWindow<'a, T, S: Scalar, F> {
    items: &'a [T],
    indices: Range<usize>,
    start: usize,
    item_extent: S,
    key_of: F,
}

impl<T, S: Scalar, F> core::fmt::Debug for RenderWindow<'_, T, S, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderWindow")
            .field("indices", &self.indices)
            .field("start", &self.start)
            .field("item_extent", &self.item_extent)
            .finish_non_exhaustive()
    }
}

/// Descriptors for `range`, keyed by row index.
#[must_use]
pub fn render_window<'a, T, S: Scalar>(
    items: &'a [T],
    range: VisibleRange<S>,
    item_extent: S,
) -> RenderWindow<'a, T, S, fn(&T, usize) -> usize> {
    render_window_with_keys(items, range, item_extent, index_key::<T>)
}

/// Descriptors for `range`, keyed by `key_of(item, index)`.
///
/// The range may have been computed against a longer collection than `items`
/// (for example after rows were removed); rows past the end of `items` are
/// skipped rather than treated as an error. Key collisions are not detected.
#[must_use]
pub fn render_window_with_keys<'a, T, S, K, F>(
    items: &'a [T],
    range: VisibleRange<S>,
    item_extent: S,
    key_of: F,
) -> RenderWindow<'a, T, S, F>
where
    S: Scalar,
    F: FnMut(&T, usize) -> K,
{
    let end = range.end.min(items.len());
    let start = range.start.min(end);
    RenderWindow {
        items,
        indices: start..end,
        start: range.start,
        item_extent,
        key_of,
    }
}

impl<'a, T, S, K, F> Iterator for RenderWindow<'a, T, S, F>
where
    S: Scalar,
    F: FnMut(&T, usize) -> K,
{
    type Item = RenderDescriptor<'a, T, S, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        let item = &self.items[index];
        Some(RenderDescriptor {
            key: (self.key_of)(item, index),
            index,
            item,
            translate: S::from_usize(index - self.start) * self.item_extent,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<T, S, K, F> ExactSizeIterator for RenderWindow<'_, T, S, F>
where
    S: Scalar,
    F: FnMut(&T, usize) -> K,
{
}

impl<T, S, K, F> FusedIterator for RenderWindow<'_, T, S, F>
where
    S: Scalar,
    F: FnMut(&T, usize) -> K,
{
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::compute_range;

    #[test]
    fn descriptors_are_ascending_and_relative_to_window_start() {
        let items: Vec<u32> = (0..10_000).collect();
        let range = compute_range(4_000.0_f64, 300.0, 40.0, 3, items.len());
        let rows: Vec<_> = render_window(&items, range, 40.0).collect();

        assert_eq!(rows.len(), 14);
        assert_eq!(rows[0].index, 97);
        assert_eq!(rows[0].translate, 0.0);
        assert_eq!(rows[13].index, 110);
        assert_eq!(rows[13].translate, 13.0 * 40.0);
        assert!(rows.windows(2).all(|w| w[0].index + 1 == w[1].index));
        assert!(rows.iter().all(|row| row.key == row.index && *row.item as usize == row.index));
    }

    #[test]
    fn empty_range_yields_nothing() {
        let items: [u8; 0] = [];
        let range = compute_range(0.0_f32, 100.0, 10.0, 3, 0);
        assert_eq!(render_window(&items, range, 10.0).count(), 0);
    }

    #[test]
    fn stale_range_over_shrunk_collection_is_truncated() {
        let long: Vec<u32> = (0..100).collect();
        let range = compute_range(800.0_f64, 200.0, 10.0, 2, long.len());
        assert_eq!(range.indices(), 78..100);

        let short = &long[..90];
        let window = render_window(short, range, 10.0);
        assert_eq!(window.len(), 12);
        let last = window.last().unwrap();
        assert_eq!(last.index, 89);
        assert_eq!(last.translate, 11.0 * 10.0);

        let gone = &long[..50];
        assert_eq!(render_window(gone, range, 10.0).count(), 0);
    }

    #[test]
    fn custom_keys_see_item_and_index() {
        let items = ["a", "b", "c", "d"];
        let range = compute_range(0.0_f64, 20.0, 10.0, 0, items.len());
        let keys: Vec<(usize, &str)> =
            render_window_with_keys(&items, range, 10.0, |item, i| (i * 10, *item))
                .map(|row| row.key)
                .collect();
        assert_eq!(keys, [(0, "a"), (10, "b")]);
    }
}
