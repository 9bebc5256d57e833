// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observability hooks for the tracker and the lists built on it.
//!
//! Nothing here is required for correct behavior. A [`TrackerTrace`] sink is
//! told about lifecycle transitions, every measurement the tracker applies,
//! and every range a list renders. [`NoTrace`] discards everything and is the
//! default; [`TraceRecorder`] keeps a log that is handy in tests and
//! inspectors.

use alloc::vec::Vec;

use understory_virtual_list::{Viewport, VisibleRange};

use crate::host::Signal;

/// A callback sink for tracker events.
///
/// All methods default to doing nothing, so sinks only implement what they
/// care about.
pub trait TrackerTrace {
    /// The tracker attached to a host and took its first measurement.
    fn attached(&mut self, _viewport: Viewport<f64>, _observes_resize: bool) {}

    /// The tracker subscribed to `signal` on its host.
    fn subscribed(&mut self, _signal: Signal) {}

    /// The tracker released its subscription for `signal`.
    fn unsubscribed(&mut self, _signal: Signal) {}

    /// The tracker detached after releasing `released` subscriptions.
    fn detached(&mut self, _released: usize) {}

    /// A scroll offset was applied.
    fn scrolled(&mut self, _offset: f64) {}

    /// An observed container height was applied.
    fn resized(&mut self, _height: f64) {}

    /// A list rendered `range` out of `len` rows.
    fn rendered(&mut self, _range: VisibleRange<f64>, _len: usize) {}
}

/// A sink that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl TrackerTrace for NoTrace {}

/// One recorded tracker event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TraceEvent {
    /// See [`TrackerTrace::attached`].
    Attached {
        /// First measurement taken from the host.
        viewport: Viewport<f64>,
        /// Whether a resize subscription was installed.
        observes_resize: bool,
    },
    /// See [`TrackerTrace::subscribed`].
    Subscribed(Signal),
    /// See [`TrackerTrace::unsubscribed`].
    Unsubscribed(Signal),
    /// See [`TrackerTrace::detached`].
    Detached {
        /// Number of subscriptions released.
        released: usize,
    },
    /// See [`TrackerTrace::scrolled`].
    Scrolled(f64),
    /// See [`TrackerTrace::resized`].
    Resized(f64),
    /// See [`TrackerTrace::rendered`].
    Rendered {
        /// Range that was rendered.
        range: VisibleRange<f64>,
        /// Collection length at render time.
        len: usize,
    },
}

/// Records every event in order.
#[derive(Clone, Debug, Default)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Removes and returns all recorded events.
    pub fn take(&mut self) -> Vec<TraceEvent> {
        core::mem::take(&mut self.events)
    }

    /// Clears all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TrackerTrace for TraceRecorder {
    fn attached(&mut self, viewport: Viewport<f64>, observes_resize: bool) {
        self.events.push(TraceEvent::Attached {
            viewport,
            observes_resize,
        });
    }

    fn subscribed(&mut self, signal: Signal) {
        self.events.push(TraceEvent::Subscribed(signal));
    }

    fn unsubscribed(&mut self, signal: Signal) {
        self.events.push(TraceEvent::Unsubscribed(signal));
    }

    fn detached(&mut self, released: usize) {
        self.events.push(TraceEvent::Detached { released });
    }

    fn scrolled(&mut self, offset: f64) {
        self.events.push(TraceEvent::Scrolled(offset));
    }

    fn resized(&mut self, height: f64) {
        self.events.push(TraceEvent::Resized(height));
    }

    fn rendered(&mut self, range: VisibleRange<f64>, len: usize) {
        self.events.push(TraceEvent::Rendered { range, len });
    }
}

impl<T: TrackerTrace + ?Sized> TrackerTrace for &mut T {
    fn attached(&mut self, viewport: Viewport<f64>, observes_resize: bool) {
        (**self).attached(viewport, observes_resize);
    }

    fn subscribed(&mut self, signal: Signal) {
        (**self).subscribed(signal);
    }

    fn unsubscribed(&mut self, signal: Signal) {
        (**self).unsubscribed(signal);
    }

    fn detached(&mut self, released: usize) {
        (**self).detached(released);
    }

    fn scrolled(&mut self, offset: f64) {
        (**self).scrolled(offset);
    }

    fn resized(&mut self, height: f64) {
        (**self).resized(height);
    }

    fn rendered(&mut self, range: VisibleRange<f64>, len: usize) {
        (**self).rendered(range, len);
    }
}
