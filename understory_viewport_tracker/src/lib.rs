// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_viewport_tracker --heading-base-level=0

//! Understory Viewport Tracker: scroll/resize tracking and mount lifecycle for virtual lists.
//!
//! `understory_virtual_list` answers "which rows should exist for this
//! viewport?". This crate keeps that viewport current and ties it to the life
//! of one scrollable host element:
//!
//! - [`ScrollHost`]: the seam to the platform. A host hands out subscriptions
//!   for [`Signal::Scroll`] and [`Signal::Resize`] and reports its current
//!   scroll offset and content box.
//! - [`ContainerHeight`]: either a fixed pixel height, or a [`RelativeSize`]
//!   resolved by the host's layout (which the tracker then observes).
//! - [`ViewportTracker`]: owns the host while [`Lifecycle::Attached`], applies
//!   every scroll and resize signal to its [`Viewport`], and releases every
//!   subscription on detach or drop.
//! - [`WindowedList`]: a tracker plus a [`ListConfig`] and key extractor. Each
//!   [`WindowedList::render`] produces a [`SurfaceLayout`]: a full-height
//!   spacer plus a translated window of [`MountedRow`]s.
//! - [`TrackerTrace`]: optional hooks for logging and inspection, with
//!   [`NoTrace`] as the default and [`TraceRecorder`] for tests.
//!
//! Rendering before a host is attached is a caller error and is reported as
//! [`NotAttached`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_viewport_tracker::{
//!     ListConfig, RelativeSize, ScrollHost, Signal, WindowedList,
//! };
//!
//! struct Element {
//!     height: f64,
//! }
//!
//! impl ScrollHost for Element {
//!     type Subscription = Signal;
//!     fn subscribe(&mut self, signal: Signal) -> Signal { signal }
//!     fn unsubscribe(&mut self, _: Signal) {}
//!     fn scroll_offset(&self) -> f64 { 0.0 }
//!     fn content_box(&self) -> Size { Size::new(320.0, self.height) }
//! }
//!
//! let items: Vec<String> = (0..500).map(|i| format!("message {i}")).collect();
//! let mut list = WindowedList::new(ListConfig::new(24.0, RelativeSize::Fill));
//!
//! // Nothing can be rendered until the host element exists.
//! assert!(list.render(&items, |item, _| item.len()).is_err());
//!
//! list.attach(Element { height: 240.0 });
//! list.handle_scroll(480.0);
//! let layout = list.render(&items, |item, _| item.clone()).unwrap();
//! assert_eq!(layout.content_height, 12_000.0);
//! assert_eq!(layout.rows[0].index, 17);
//! assert_eq!(layout.rows[0].node, "message 17");
//!
//! // The host grew; the next render mounts more rows.
//! list.handle_resize(Size::new(320.0, 480.0));
//! assert_eq!(list.visible_range().unwrap().end_index(), Some(42));
//!
//! // Unmounting releases the subscriptions and hands the element back.
//! let element = list.detach().unwrap();
//! assert_eq!(element.height, 240.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod height;
mod host;
mod list;
pub mod trace;
mod tracker;

pub use error::NotAttached;
pub use height::{ContainerHeight, RelativeSize};
pub use host::{ScrollHost, Signal};
pub use list::{DEFAULT_OVERSCAN, IndexKey, ListConfig, MountedRow, SurfaceLayout, WindowedList};
pub use trace::{NoTrace, TraceEvent, TraceRecorder, TrackerTrace};
pub use tracker::{Lifecycle, ViewportTracker};

pub use understory_virtual_list::{ScrollAlign, Viewport, VisibleRange};
