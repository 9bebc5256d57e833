// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport tracker: bridge host scroll/resize signals to a [`Viewport`].
//!
//! ## Lifecycle
//!
//! A tracker is either [`Lifecycle::Detached`] (no host, no subscriptions, no
//! viewport) or [`Lifecycle::Attached`] (owns its host, holds live
//! subscriptions, and has a current viewport).
//!
//! - [`ViewportTracker::attach`] takes the first measurement from the host and
//!   subscribes to [`Signal::Scroll`], plus [`Signal::Resize`] when the height
//!   is [`ContainerHeight::Relative`].
//! - [`ViewportTracker::detach`] returns every subscription to the host and
//!   hands the host back. Detaching a detached tracker is a no-op.
//! - Attaching while attached (host replacement) detaches from the old host
//!   first. Re-attaching after a detach starts from scratch.
//! - Dropping an attached tracker detaches it, so subscriptions never outlive
//!   the tracker.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_viewport_tracker::{ContainerHeight, ScrollHost, Signal, ViewportTracker};
//!
//! #[derive(Default)]
//! struct Element {
//!     live: u32,
//!     offset: f64,
//! }
//!
//! impl ScrollHost for Element {
//!     type Subscription = Signal;
//!     fn subscribe(&mut self, signal: Signal) -> Signal {
//!         self.live += 1;
//!         signal
//!     }
//!     fn unsubscribe(&mut self, _: Signal) {
//!         self.live -= 1;
//!     }
//!     fn scroll_offset(&self) -> f64 {
//!         self.offset
//!     }
//!     fn content_box(&self) -> Size {
//!         Size::new(320.0, 480.0)
//!     }
//! }
//!
//! let mut tracker = ViewportTracker::new(ContainerHeight::Fixed(300.0));
//! tracker.attach(Element::default());
//! assert_eq!(tracker.host().unwrap().live, 1);
//!
//! tracker.on_scroll(120.0);
//! assert_eq!(tracker.viewport().unwrap().scroll_offset, 120.0);
//!
//! let element = tracker.detach().unwrap();
//! assert_eq!(element.live, 0);
//! assert!(tracker.viewport().is_none());
//! ```

use core::fmt;

use kurbo::Size;
use smallvec::SmallVec;
use understory_virtual_list::Viewport;

use crate::height::ContainerHeight;
use crate::host::{ScrollHost, Signal};
use crate::trace::{NoTrace, TrackerTrace};

/// The two lifecycle states of a [`ViewportTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// No host, no subscriptions, no viewport.
    Detached,
    /// Subscriptions are live and the viewport is populated.
    Attached,
}

/// Tracks the viewport of one scrollable host element.
pub struct ViewportTracker<H: ScrollHost, Tr: TrackerTrace = NoTrace> {
    height: ContainerHeight,
    state: State<H>,
    trace: Tr,
}

enum State<H: ScrollHost> {
    Detached,
    Attached(Attachment<H>),
}

struct Attachment<H: ScrollHost> {
    host: H,
    subscriptions: SmallVec<[(Signal, H::Subscription); 2]>,
    viewport: Viewport<f64>,
}

impl<H: ScrollHost> ViewportTracker<H> {
    /// Creates a detached tracker for a host of the given height.
    #[must_use]
    pub fn new(height: ContainerHeight) -> Self {
        Self::with_trace(height, NoTrace)
    }
}

impl<H: ScrollHost, Tr: TrackerTrace> ViewportTracker<H, Tr> {
    /// Creates a detached tracker that reports to `trace`.
    #[must_use]
    pub fn with_trace(height: ContainerHeight, trace: Tr) -> Self {
        Self {
            height,
            state: State::Detached,
            trace,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        match self.state {
            State::Detached => Lifecycle::Detached,
            State::Attached(_) => Lifecycle::Attached,
        }
    }

    /// Returns `true` while attached to a host.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        matches!(self.state, State::Attached(_))
    }

    /// The configured container height.
    #[must_use]
    pub fn height(&self) -> ContainerHeight {
        self.height
    }

    /// The current viewport, or `None` while detached.
    ///
    /// This is a copy of the live value; read it again after each event
    /// rather than holding on to it.
    #[must_use]
    pub fn viewport(&self) -> Option<Viewport<f64>> {
        match &self.state {
            State::Attached(a) => Some(a.viewport),
            State::Detached => None,
        }
    }

    /// The attached host, if any.
    #[must_use]
    pub fn host(&self) -> Option<&H> {
        match &self.state {
            State::Attached(a) => Some(&a.host),
            State::Detached => None,
        }
    }

    /// Mutable access to the attached host, if any.
    pub fn host_mut(&mut self) -> Option<&mut H> {
        match &mut self.state {
            State::Attached(a) => Some(&mut a.host),
            State::Detached => None,
        }
    }

    /// Number of subscriptions currently held.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        match &self.state {
            State::Attached(a) => a.subscriptions.len(),
            State::Detached => 0,
        }
    }

    /// The trace sink.
    #[must_use]
    pub fn trace(&self) -> &Tr {
        &self.trace
    }

    /// Mutable access to the trace sink.
    pub fn trace_mut(&mut self) -> &mut Tr {
        &mut self.trace
    }

    /// Attaches to `host`, measuring it and installing subscriptions.
    ///
    /// If already attached, the previous host is detached first and returned.
    pub fn attach(&mut self, mut host: H) -> Option<H> {
        let previous = self.detach();

        let container_extent = match self.height.fixed() {
            Some(px) => px,
            None => host.content_box().height,
        };
        let viewport = Viewport::new(host.scroll_offset(), container_extent);

        let mut subscriptions = SmallVec::new();
        subscriptions.push((Signal::Scroll, host.subscribe(Signal::Scroll)));
        self.trace.subscribed(Signal::Scroll);
        if self.height.is_observed() {
            subscriptions.push((Signal::Resize, host.subscribe(Signal::Resize)));
            self.trace.subscribed(Signal::Resize);
        }

        self.trace.attached(viewport, self.height.is_observed());
        self.state = State::Attached(Attachment {
            host,
            subscriptions,
            viewport,
        });
        previous
    }

    /// Releases every subscription and returns the host.
    ///
    /// Returns `None` (and does nothing) if the tracker was not attached.
    pub fn detach(&mut self) -> Option<H> {
        let State::Attached(attachment) = core::mem::replace(&mut self.state, State::Detached)
        else {
            return None;
        };
        let Attachment {
            mut host,
            subscriptions,
            ..
        } = attachment;

        let released = subscriptions.len();
        for (signal, subscription) in subscriptions {
            host.unsubscribe(subscription);
            self.trace.unsubscribed(signal);
        }
        self.trace.detached(released);
        Some(host)
    }

    /// Applies a scroll signal from the host.
    ///
    /// Every signal is applied as delivered; nothing is throttled or
    /// coalesced. Returns `false` if the tracker is detached.
    pub fn on_scroll(&mut self, scroll_offset: f64) -> bool {
        let State::Attached(a) = &mut self.state else {
            return false;
        };
        a.viewport.scroll_offset = scroll_offset;
        self.trace.scrolled(scroll_offset);
        true
    }

    /// Applies a resize signal carrying the host's new content box.
    ///
    /// Ignored (returning `false`) when detached or when the height is fixed,
    /// since no resize subscription exists in that case.
    pub fn on_resize(&mut self, content_box: Size) -> bool {
        if !self.height.is_observed() {
            return false;
        }
        let State::Attached(a) = &mut self.state else {
            return false;
        };
        a.viewport.container_extent = content_box.height;
        self.trace.resized(content_box.height);
        true
    }

    /// Re-reads the scroll offset (and observed height) directly from the host.
    ///
    /// For hosts that poll rather than push. Returns `false` if detached.
    pub fn sync(&mut self) -> bool {
        let State::Attached(a) = &mut self.state else {
            return false;
        };
        let offset = a.host.scroll_offset();
        a.viewport.scroll_offset = offset;
        self.trace.scrolled(offset);
        if self.height.is_observed() {
            let height = a.host.content_box().height;
            a.viewport.container_extent = height;
            self.trace.resized(height);
        }
        true
    }

    /// Changes the container height.
    ///
    /// While attached, switching between fixed and relative heights installs
    /// or releases the resize subscription, and the viewport extent is
    /// updated immediately.
    pub fn set_height(&mut self, height: ContainerHeight) {
        let was_observed = self.height.is_observed();
        self.height = height;
        let State::Attached(a) = &mut self.state else {
            return;
        };

        match (was_observed, height.is_observed()) {
            (false, true) => {
                let subscription = a.host.subscribe(Signal::Resize);
                a.subscriptions.push((Signal::Resize, subscription));
                self.trace.subscribed(Signal::Resize);
            }
            (true, false) => {
                if let Some(pos) = a.subscriptions.iter().position(|(s, _)| *s == Signal::Resize) {
                    let (signal, subscription) = a.subscriptions.remove(pos);
                    a.host.unsubscribe(subscription);
                    self.trace.unsubscribed(signal);
                }
            }
            _ => {}
        }

        a.viewport.container_extent = match height.fixed() {
            Some(px) => px,
            None => a.host.content_box().height,
        };
    }
}

impl<H: ScrollHost, Tr: TrackerTrace> Drop for ViewportTracker<H, Tr> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<H: ScrollHost, Tr: TrackerTrace> fmt::Debug for ViewportTracker<H, Tr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportTracker")
            .field("height", &self.height)
            .field("lifecycle", &self.lifecycle())
            .field("viewport", &self.viewport())
            .field("subscriptions", &self.subscription_count())
            .finish_non_exhaustive()
    }
}
