// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the tracker and a platform's scrollable element.

use kurbo::Size;

/// A host notification the tracker can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    /// The element's scroll offset changed.
    Scroll,
    /// The element's content box was resized.
    Resize,
}

/// A scrollable host element.
///
/// Implementations wrap whatever the platform offers: native event callbacks,
/// a polling loop, or a watcher thread that forwards events to the UI thread.
/// The tracker only asks the host to start and stop delivering signals; the
/// host delivers them by calling
/// [`ViewportTracker::on_scroll`](crate::ViewportTracker::on_scroll) and
/// [`ViewportTracker::on_resize`](crate::ViewportTracker::on_resize) (or the
/// matching [`WindowedList`](crate::WindowedList) methods) in the order the
/// platform emits them.
///
/// Every subscription handed out by [`ScrollHost::subscribe`] is returned to
/// [`ScrollHost::unsubscribe`] exactly once.
pub trait ScrollHost {
    /// Handle identifying one live subscription.
    type Subscription;

    /// Starts delivering `signal`.
    fn subscribe(&mut self, signal: Signal) -> Self::Subscription;

    /// Stops delivering the signal behind `subscription`.
    fn unsubscribe(&mut self, subscription: Self::Subscription);

    /// Current scroll offset of the element.
    fn scroll_offset(&self) -> f64;

    /// Current content-box size of the element.
    fn content_box(&self) -> Size;
}
