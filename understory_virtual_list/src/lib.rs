// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_virtual_list --heading-base-level=0

//! Understory Virtual List: windowing primitives for uniform-row lists.
//!
//! This crate provides a small, renderer-agnostic core for rendering a long list
//! of equally tall rows in time proportional to the viewport rather than to the
//! list. Only the rows that intersect the viewport (plus a few overscan rows on
//! either side) are realized; a full-height spacer keeps native scrollbar
//! proportions correct.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` used for extents, offsets,
//!   and scroll positions.
//! - [`ItemGeometry`]: the uniform row extent and overscan of one list.
//! - [`compute_range`]: a pure function that, given a scroll offset, viewport
//!   extent, row extent, overscan, and row count, returns the [`VisibleRange`]
//!   to realize plus its pixel offset. [`total_extent`] sizes the spacer.
//! - [`Viewport`]: the live scroll offset and container extent, with helpers for
//!   clamping, index-based scrolling via [`ScrollAlign`], and visibility queries.
//! - [`render_window`] / [`render_window_with_keys`]: slice the caller's
//!   collection into [`RenderDescriptor`]s for the realized rows.
//!
//! This crate deliberately does **not** know about widgets, display trees, or any
//! particular UI framework, and it never holds on to the caller's collection.
//! Host frameworks are responsible for:
//!
//! - Owning the actual data and view/widget instances.
//! - Tracking scroll and resize events (see `understory_viewport_tracker`).
//! - Recomputing the range whenever the viewport or collection length changes.
//! - Diffing the returned rows by key to create/destroy children.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_virtual_list::{ItemGeometry, Viewport, render_window, total_extent};
//!
//! let items: Vec<String> = (0..10_000).map(|i| format!("row {i}")).collect();
//! let geometry = ItemGeometry::new(40.0_f64, 3);
//!
//! // Row 100 at the top of a 300px viewport.
//! let viewport = Viewport::new(4_000.0, 300.0);
//! let range = viewport.visible_range(&geometry, items.len());
//! assert_eq!((range.start, range.end_index()), (97, Some(110)));
//!
//! // The host sizes its spacer to the whole list...
//! assert_eq!(total_extent(items.len(), geometry.item_extent), 400_000.0);
//!
//! // ...offsets a sub-container by `range.offset`, and places each row inside it.
//! for row in render_window(&items, range, geometry.item_extent) {
//!     assert_eq!(row.translate, (row.index - range.start) as f64 * 40.0);
//! }
//! ```
//!
//! All extents and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels). Row extents are uniform: variable-height rows
//! are out of scope. An invalid row extent (zero, negative, or non-finite) is
//! treated as an empty list rather than an error.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod geometry;
mod scalar;
mod viewport;
mod window;

pub use geometry::{ItemGeometry, VisibleRange, compute_range, intersecting_range, total_extent};
pub use scalar::Scalar;
pub use viewport::{ScrollAlign, Viewport};
pub use window::{
    RenderDescriptor, RenderWindow, index_key, render_window, render_window_with_keys,
};
