// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform-row geometry: map a scroll position onto the rows to realize.

use core::ops::Range;

use crate::Scalar;

/// Per-list row geometry.
///
/// Every row shares the same `item_extent`. A non-positive or non-finite
/// extent is not rejected; it makes every query behave as if the list were
/// empty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemGeometry<S: Scalar> {
    /// Extent of a single row along the scroll axis.
    pub item_extent: S,
    /// Extra rows realized beyond each visible edge.
    pub overscan: usize,
}

impl<S: Scalar> ItemGeometry<S> {
    /// Creates geometry for rows of `item_extent` with `overscan` extra rows.
    #[must_use]
    pub fn new(item_extent: S, overscan: usize) -> Self {
        Self {
            item_extent,
            overscan,
        }
    }

    /// Returns `true` if the row extent can be used for layout.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.item_extent.is_positive_finite()
    }

    /// Total content extent for `len` rows.
    #[must_use]
    pub fn total_extent(&self, len: usize) -> S {
        total_extent(len, self.item_extent)
    }

    /// Offset of the leading edge of row `index`.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> S {
        if self.is_valid() {
            S::from_usize(index) * self.item_extent
        } else {
            S::zero()
        }
    }
}

/// Contiguous run of row indices that should be realized.
///
/// The range is half-open: indices `start..end` are realized and `end` is one
/// past the last realized row. An empty range has `start == end` and means
/// "render nothing".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleRange<S: Scalar> {
    /// First realized index.
    pub start: usize,
    /// One past the last realized index.
    pub end: usize,
    /// Offset of row `start` from the beginning of the content.
    pub offset: S,
}

impl<S: Scalar> VisibleRange<S> {
    /// The range that realizes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            start: 0,
            end: 0,
            offset: S::zero(),
        }
    }

    /// Returns `true` if no rows are realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of realized rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Last realized index (inclusive), or `None` for an empty range.
    #[must_use]
    pub fn end_index(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    /// Returns `true` if `index` is realized.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// The realized indices as a `Range`.
    #[must_use]
    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Total content extent for `len` rows of `item_extent`.
///
/// Hosts size their scroll spacer with this so scrollbar proportions match the
/// full list even though only a window of rows is realized. Returns zero for
/// an empty list or an invalid extent.
#[must_use]
pub fn total_extent<S: Scalar>(len: usize, item_extent: S) -> S {
    if item_extent.is_positive_finite() {
        S::from_usize(len) * item_extent
    } else {
        S::zero()
    }
}

/// Computes which rows to realize for a viewport.
///
/// - `scroll_offset` is the distance from the start of the content to the top
///   of the viewport. It is clamped into `[0, total - container_extent]`, so
///   negative or overshooting offsets still produce an in-bounds range.
/// - `container_extent` is the viewport extent along the scroll axis.
/// - `overscan` rows are added on each side of the rows that intersect the
///   viewport, clamped to the list bounds.
///
/// Returns [`VisibleRange::empty`] when `len == 0` or `item_extent` is not a
/// positive finite number.
///
/// ```rust
/// use understory_virtual_list::compute_range;
///
/// // 10k rows of 40px, 300px viewport, 3 rows of overscan, row 100 at the top.
/// let range = compute_range(4_000.0_f64, 300.0, 40.0, 3, 10_000);
/// assert_eq!(range.start, 97);
/// assert_eq!(range.end_index(), Some(110));
/// assert_eq!(range.offset, 97.0 * 40.0);
/// ```
#[must_use]
pub fn compute_range<S: Scalar>(
    scroll_offset: S,
    container_extent: S,
    item_extent: S,
    overscan: usize,
    len: usize,
) -> VisibleRange<S> {
    if len == 0 || !item_extent.is_positive_finite() {
        return VisibleRange::empty();
    }

    let container = container_extent.sanitize();
    let total = S::from_usize(len) * item_extent;
    let max_scroll = (total - container).clamp_non_negative();
    let scroll = scroll_offset.sanitize().min(max_scroll);

    // Rows intersecting `[scroll, scroll + container)`.
    let first = index_from((scroll / item_extent).floor_to_isize(), len);
    let past_last =
        index_from(((scroll + container) / item_extent).ceil_to_isize(), len).max(first);

    let start = first.saturating_sub(overscan);
    let end = past_last.saturating_add(overscan).min(len);

    VisibleRange {
        start,
        end,
        offset: S::from_usize(start) * item_extent,
    }
}

/// Computes the rows that intersect the viewport, without overscan.
///
/// Useful for visibility queries where overscan rows must not count.
#[must_use]
pub fn intersecting_range<S: Scalar>(
    scroll_offset: S,
    container_extent: S,
    item_extent: S,
    len: usize,
) -> VisibleRange<S> {
    compute_range(scroll_offset, container_extent, item_extent, 0, len)
}

/// Clamps a raw row position to `0..=len`.
fn index_from(raw: isize, len: usize) -> usize {
    if raw <= 0 {
        0
    } else {
        raw.unsigned_abs().min(len)
    }
}
