// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live viewport measurements and scroll helpers built on them.

use crate::geometry::{ItemGeometry, VisibleRange, compute_range, intersecting_range};
use crate::Scalar;

/// How an index should be aligned when scrolling it into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    /// Align the row's leading edge with the top of the viewport.
    Start,
    /// Align the row's trailing edge with the bottom of the viewport.
    End,
    /// Center the row in the viewport.
    Center,
    /// Scroll as little as possible; leave the offset alone if the row is
    /// already fully visible.
    #[default]
    Nearest,
}

/// The visible scroll window: where it starts and how tall it is.
///
/// Only the tracker that owns a viewport writes to it. Everything else reads
/// a fresh copy at computation time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport<S: Scalar> {
    /// Distance from the start of the content to the top of the viewport.
    pub scroll_offset: S,
    /// Extent of the viewport along the scroll axis.
    pub container_extent: S,
}

impl<S: Scalar> Viewport<S> {
    /// Creates a viewport at `scroll_offset` with the given extent.
    #[must_use]
    pub fn new(scroll_offset: S, container_extent: S) -> Self {
        Self {
            scroll_offset,
            container_extent,
        }
    }

    /// Rows to realize for `len` items laid out with `geometry`.
    #[must_use]
    pub fn visible_range(&self, geometry: &ItemGeometry<S>, len: usize) -> VisibleRange<S> {
        compute_range(
            self.scroll_offset,
            self.container_extent,
            geometry.item_extent,
            geometry.overscan,
            len,
        )
    }

    /// Rows that actually intersect the viewport, ignoring overscan.
    #[must_use]
    pub fn intersecting_range(&self, geometry: &ItemGeometry<S>, len: usize) -> VisibleRange<S> {
        intersecting_range(
            self.scroll_offset,
            self.container_extent,
            geometry.item_extent,
            len,
        )
    }

    /// Largest scroll offset that still fills the viewport with content.
    ///
    /// Zero when the content fits entirely inside the viewport.
    #[must_use]
    pub fn max_scroll_offset(&self, content_extent: S) -> S {
        (content_extent.sanitize() - self.container_extent.sanitize()).clamp_non_negative()
    }

    /// Clamps `scroll_offset` into `[0, max_scroll_offset]`.
    #[must_use]
    pub fn clamp_scroll_offset(&self, content_extent: S) -> S {
        self.scroll_offset
            .sanitize()
            .min(self.max_scroll_offset(content_extent))
    }

    /// Distance from the bottom of the viewport to the end of the content.
    #[must_use]
    pub fn distance_to_end(&self, content_extent: S) -> S {
        let bottom = self.clamp_scroll_offset(content_extent) + self.container_extent.sanitize();
        (content_extent.sanitize() - bottom).clamp_non_negative()
    }

    /// Returns `true` if any part of row `index` is inside the viewport.
    #[must_use]
    pub fn is_index_visible(&self, index: usize, geometry: &ItemGeometry<S>, len: usize) -> bool {
        self.intersecting_range(geometry, len).contains(index)
    }

    /// Returns `true` if all of row `index` is inside the viewport.
    #[must_use]
    pub fn is_index_fully_visible(
        &self,
        index: usize,
        geometry: &ItemGeometry<S>,
        len: usize,
    ) -> bool {
        if index >= len || !geometry.is_valid() {
            return false;
        }
        let content = geometry.total_extent(len);
        let top = self.clamp_scroll_offset(content);
        let bottom = top + self.container_extent.sanitize();
        let row_start = geometry.offset_of(index);
        let row_end = row_start + geometry.item_extent;
        row_start >= top && row_end <= bottom
    }

    /// Scroll offset that brings row `index` into view with `align`.
    ///
    /// Indices past the end are clamped to the last row. The result is always
    /// a valid offset for the content; this never mutates the viewport.
    ///
    /// ```rust
    /// use understory_virtual_list::{ItemGeometry, ScrollAlign, Viewport};
    ///
    /// let geometry = ItemGeometry::new(40.0_f64, 3);
    /// let viewport = Viewport::new(0.0, 300.0);
    /// assert_eq!(viewport.scroll_offset_for_index(100, ScrollAlign::Start, &geometry, 10_000), 4_000.0);
    /// assert_eq!(viewport.scroll_offset_for_index(100, ScrollAlign::End, &geometry, 10_000), 3_740.0);
    /// ```
    #[must_use]
    pub fn scroll_offset_for_index(
        &self,
        index: usize,
        align: ScrollAlign,
        geometry: &ItemGeometry<S>,
        len: usize,
    ) -> S {
        if len == 0 || !geometry.is_valid() {
            return S::zero();
        }
        let content = geometry.total_extent(len);
        let container = self.container_extent.sanitize();
        let row_start = geometry.offset_of(index.min(len - 1));
        let row_end = row_start + geometry.item_extent;

        let target = match align {
            ScrollAlign::Start => row_start,
            ScrollAlign::End => row_end - container,
            ScrollAlign::Center => {
                let two = S::from_usize(2);
                row_start + geometry.item_extent / two - container / two
            }
            ScrollAlign::Nearest => {
                let top = self.clamp_scroll_offset(content);
                if row_start < top {
                    row_start
                } else if row_end > top + container {
                    row_end - container
                } else {
                    top
                }
            }
        };
        Self::new(target, container).clamp_scroll_offset(content)
    }
}
