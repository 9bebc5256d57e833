// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A windowed list bound to one scrollable host.
//!
//! [`WindowedList`] ties together the construction parameters of a list
//! ([`ListConfig`]), a [`ViewportTracker`], and the windowing math from
//! `understory_virtual_list`. Each render produces a [`SurfaceLayout`]
//! describing the two-layer host surface:
//!
//! - a spacer as tall as the whole list, so the host's native scrollbar keeps
//!   correct proportions, and
//! - a sub-container translated by [`SurfaceLayout::window_offset`] that holds
//!   only the mounted rows, each positioned at its own `translate_y`.
//!
//! The list never stores the caller's collection. It is passed to
//! [`WindowedList::render`] each time and only its length is remembered, so
//! growing or shrinking it between renders is fine.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use kurbo::{Affine, Size, Vec2};
use understory_virtual_list::{
    ItemGeometry, RenderWindow, ScrollAlign, Viewport, VisibleRange, index_key,
    render_window_with_keys,
};

use crate::error::NotAttached;
use crate::height::ContainerHeight;
use crate::host::ScrollHost;
use crate::trace::{NoTrace, TrackerTrace};
use crate::tracker::{Lifecycle, ViewportTracker};

/// Rows rendered beyond each visible edge when no overscan is configured.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Construction parameters of a [`WindowedList`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListConfig {
    /// Uniform row height in logical pixels.
    pub item_height: f64,
    /// Height of the scrollable host.
    pub height: ContainerHeight,
    /// Rows rendered beyond each visible edge.
    pub overscan: usize,
}

impl ListConfig {
    /// Creates a configuration with [`DEFAULT_OVERSCAN`].
    #[must_use]
    pub fn new(item_height: f64, height: impl Into<ContainerHeight>) -> Self {
        Self {
            item_height,
            height: height.into(),
            overscan: DEFAULT_OVERSCAN,
        }
    }

    /// Sets the overscan.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Row geometry derived from this configuration.
    #[must_use]
    pub fn geometry(&self) -> ItemGeometry<f64> {
        ItemGeometry::new(self.item_height, self.overscan)
    }
}

/// One mounted row of a [`SurfaceLayout`].
#[derive(Clone, Debug, PartialEq)]
pub struct MountedRow<N, K> {
    /// Key the host uses to recycle the row's view.
    pub key: K,
    /// Index of the row in the collection.
    pub index: usize,
    /// Whatever the caller's row renderer produced.
    pub node: N,
    /// Offset of the row inside the translated sub-container.
    pub translate_y: f64,
}

impl<N, K> MountedRow<N, K> {
    /// Transform placing the row inside the sub-container.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(Vec2::new(0.0, self.translate_y))
    }
}

/// What the host should paint for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceLayout<N, K> {
    /// Height of the full-list spacer.
    pub content_height: f64,
    /// Offset of the sub-container holding the mounted rows.
    pub window_offset: f64,
    /// Realized range the rows were produced from.
    pub range: VisibleRange<f64>,
    /// Mounted rows in ascending index order.
    pub rows: Vec<MountedRow<N, K>>,
}

impl<N, K> SurfaceLayout<N, K> {
    /// Size of the spacer for a host of the given width.
    #[must_use]
    pub fn spacer_size(&self, width: f64) -> Size {
        Size::new(width, self.content_height)
    }

    /// Transform of the sub-container holding the mounted rows.
    #[must_use]
    pub fn window_transform(&self) -> Affine {
        Affine::translate(Vec2::new(0.0, self.window_offset))
    }
}

/// A uniform-row list that mounts only the rows intersecting its host's viewport.
///
/// ```rust
/// use kurbo::Size;
/// use understory_viewport_tracker::{ListConfig, ScrollHost, Signal, WindowedList};
///
/// struct Element;
///
/// impl ScrollHost for Element {
///     type Subscription = Signal;
///     fn subscribe(&mut self, signal: Signal) -> Signal { signal }
///     fn unsubscribe(&mut self, _: Signal) {}
///     fn scroll_offset(&self) -> f64 { 0.0 }
///     fn content_box(&self) -> Size { Size::new(320.0, 300.0) }
/// }
///
/// let items: Vec<u32> = (0..10_000).collect();
/// let mut list = WindowedList::new(ListConfig::new(40.0, 300.0));
/// list.attach(Element);
///
/// list.handle_scroll(4_000.0);
/// let layout = list.render(&items, |item, _| *item * 2).unwrap();
/// assert_eq!(layout.content_height, 400_000.0);
/// assert_eq!(layout.rows.first().map(|r| r.index), Some(97));
/// assert_eq!(layout.rows.last().map(|r| r.index), Some(110));
/// ```
pub struct WindowedList<H, T, F = IndexKey<T>, Tr = NoTrace>
where
    H: ScrollHost,
    Tr: TrackerTrace,
{
    config: ListConfig,
    tracker: ViewportTracker<H, Tr>,
    len: usize,
    key_of: F,
    _items: PhantomData<fn(&T)>,
}

/// Key extractor type of a list keyed by row index.
pub type IndexKey<T> = fn(&T, usize) -> usize;

impl<H: ScrollHost, T> WindowedList<H, T> {
    /// Creates a detached list keyed by row index.
    #[must_use]
    pub fn new(config: ListConfig) -> Self {
        Self::with_trace(config, NoTrace)
    }
}

impl<H: ScrollHost, T, Tr: TrackerTrace> WindowedList<H, T, IndexKey<T>, Tr> {
    /// Creates a detached list keyed by row index that reports to `trace`.
    #[must_use]
    pub fn with_trace(config: ListConfig, trace: Tr) -> Self {
        Self {
            config,
            tracker: ViewportTracker::with_trace(config.height, trace),
            len: 0,
            key_of: index_key::<T>,
            _items: PhantomData,
        }
    }
}

impl<H, T, K, F, Tr> WindowedList<H, T, F, Tr>
where
    H: ScrollHost,
    F: Fn(&T, usize) -> K,
    Tr: TrackerTrace,
{
    /// Replaces the key extractor.
    ///
    /// Supply one when item identity is not tied to position (for example
    /// when rows can be reordered or removed), so the host can keep row views
    /// attached to the right items. Colliding keys are not detected.
    #[must_use]
    pub fn with_key_extractor<K2, F2>(self, key_of: F2) -> WindowedList<H, T, F2, Tr>
    where
        F2: Fn(&T, usize) -> K2,
    {
        WindowedList {
            config: self.config,
            tracker: self.tracker,
            len: self.len,
            key_of,
            _items: PhantomData,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> ListConfig {
        self.config
    }

    /// Row geometry used for layout.
    #[must_use]
    pub fn geometry(&self) -> ItemGeometry<f64> {
        self.config.geometry()
    }

    /// The underlying tracker.
    #[must_use]
    pub fn tracker(&self) -> &ViewportTracker<H, Tr> {
        &self.tracker
    }

    /// Mutable access to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut ViewportTracker<H, Tr> {
        &mut self.tracker
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.tracker.lifecycle()
    }

    /// Attaches to `host`. See [`ViewportTracker::attach`].
    pub fn attach(&mut self, host: H) -> Option<H> {
        self.tracker.attach(host)
    }

    /// Detaches from the host. See [`ViewportTracker::detach`].
    pub fn detach(&mut self) -> Option<H> {
        self.tracker.detach()
    }

    /// Forwards a scroll signal. Returns `false` while detached.
    pub fn handle_scroll(&mut self, scroll_offset: f64) -> bool {
        self.tracker.on_scroll(scroll_offset)
    }

    /// Forwards a resize signal. Returns `false` if it was not applied.
    pub fn handle_resize(&mut self, content_box: Size) -> bool {
        self.tracker.on_resize(content_box)
    }

    /// Collection length as of the last render or [`WindowedList::set_len`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the collection was empty at the last render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Records a new collection length without rendering.
    ///
    /// Useful to answer range and scroll queries right after items were
    /// appended or removed.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Changes the row height. Everything is remeasured on the next query.
    pub fn set_item_height(&mut self, item_height: f64) {
        self.config.item_height = item_height;
    }

    /// Changes the overscan.
    pub fn set_overscan(&mut self, overscan: usize) {
        self.config.overscan = overscan;
    }

    /// Changes the host height, adjusting subscriptions while attached.
    pub fn set_height(&mut self, height: ContainerHeight) {
        self.config.height = height;
        self.tracker.set_height(height);
    }

    /// Height of the full-list spacer.
    ///
    /// Zero for an empty list or an invalid row height. Available while
    /// detached.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.geometry().total_extent(self.len)
    }

    /// Current viewport.
    pub fn viewport(&self) -> Result<Viewport<f64>, NotAttached> {
        self.tracker.viewport().ok_or(NotAttached)
    }

    /// Rows to realize for the current viewport and collection length.
    pub fn visible_range(&self) -> Result<VisibleRange<f64>, NotAttached> {
        Ok(self.viewport()?.visible_range(&self.geometry(), self.len))
    }

    /// Render descriptors for `items` at the current viewport.
    ///
    /// The range is computed against `items.len()`, not the remembered
    /// length.
    pub fn descriptors<'a>(
        &'a self,
        items: &'a [T],
    ) -> Result<RenderWindow<'a, T, f64, &'a F>, NotAttached> {
        let geometry = self.geometry();
        let range = self.viewport()?.visible_range(&geometry, items.len());
        Ok(render_window_with_keys(items, range, geometry.item_extent, &self.key_of))
    }

    /// Renders the rows of `items` that intersect the viewport.
    ///
    /// `render_item` is called once per mounted row, in ascending index order.
    /// The collection's length is remembered for later queries.
    pub fn render<N>(
        &mut self,
        items: &[T],
        mut render_item: impl FnMut(&T, usize) -> N,
    ) -> Result<SurfaceLayout<N, K>, NotAttached> {
        let viewport = self.viewport()?;
        self.len = items.len();
        let geometry = self.geometry();
        let range = viewport.visible_range(&geometry, items.len());

        let rows = render_window_with_keys(items, range, geometry.item_extent, &self.key_of)
            .map(|row| MountedRow {
                key: row.key,
                index: row.index,
                node: render_item(row.item, row.index),
                translate_y: row.translate,
            })
            .collect();

        self.tracker.trace_mut().rendered(range, items.len());
        Ok(SurfaceLayout {
            content_height: geometry.total_extent(items.len()),
            window_offset: range.offset,
            range,
            rows,
        })
    }

    /// Scroll offset that brings row `index` into view.
    ///
    /// The list never scrolls the host itself; apply the returned offset to
    /// the host element and its scroll signal will update the viewport.
    pub fn scroll_to_index(&self, index: usize, align: ScrollAlign) -> Result<f64, NotAttached> {
        Ok(self
            .viewport()?
            .scroll_offset_for_index(index, align, &self.geometry(), self.len))
    }

    /// Returns `true` if any part of row `index` is on screen.
    ///
    /// Always `false` while detached.
    #[must_use]
    pub fn is_index_visible(&self, index: usize) -> bool {
        self.viewport()
            .is_ok_and(|v| v.is_index_visible(index, &self.geometry(), self.len))
    }

    /// Returns `true` once the bottom of the viewport is within `threshold`
    /// pixels of the end of the content.
    ///
    /// Hosts use this to fetch and append the next page of items. Always
    /// `false` while detached.
    #[must_use]
    pub fn is_near_end(&self, threshold: f64) -> bool {
        self.viewport()
            .is_ok_and(|v| v.distance_to_end(self.content_height()) <= threshold)
    }
}

impl<H: ScrollHost, T, F, Tr: TrackerTrace> fmt::Debug for WindowedList<H, T, F, Tr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowedList")
            .field("config", &self.config)
            .field("tracker", &self.tracker)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use alloc::{format, vec};

    use super::*;
    use crate::host::Signal;
    use crate::trace::{TraceEvent, TraceRecorder};

    #[derive(Debug)]
    struct Element {
        offset: f64,
        size: Size,
    }

    impl Element {
        fn at(offset: f64, height: f64) -> Self {
            Self {
                offset,
                size: Size::new(320.0, height),
            }
        }
    }

    impl ScrollHost for Element {
        type Subscription = Signal;

        fn subscribe(&mut self, signal: Signal) -> Signal {
            signal
        }

        fn unsubscribe(&mut self, _: Signal) {}

        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn content_box(&self) -> Size {
            self.size
        }
    }

    fn attached(len: usize) -> WindowedList<Element, u32> {
        let mut list = WindowedList::new(ListConfig::new(40.0, ContainerHeight::Fixed(300.0)));
        list.attach(Element::at(0.0, 999.0));
        list.set_len(len);
        list
    }

    #[test]
    fn detached_list_reports_not_attached() {
        let mut list: WindowedList<Element, u32> =
            WindowedList::new(ListConfig::new(40.0, ContainerHeight::Fixed(300.0)));
        let items = vec![1_u32, 2, 3];

        assert_eq!(list.visible_range(), Err(NotAttached));
        assert!(list.descriptors(&items).is_err());
        assert_eq!(list.render(&items, |i, _| *i), Err(NotAttached));
        assert_eq!(list.scroll_to_index(2, ScrollAlign::Start), Err(NotAttached));
        assert!(!list.is_index_visible(0));
        assert!(!list.is_near_end(1_000.0));
        assert!(!list.handle_scroll(10.0));
    }

    #[test]
    fn content_height_is_available_while_detached() {
        let mut list: WindowedList<Element, u32> =
            WindowedList::new(ListConfig::new(40.0, ContainerHeight::default()));
        assert_eq!(list.content_height(), 0.0);
        list.set_len(10_000);
        assert_eq!(list.content_height(), 400_000.0);
    }

    #[test]
    fn render_lays_out_two_layer_surface() {
        let items: Vec<u32> = (0..10_000).collect();
        let mut list = attached(0);

        let top = list.render(&items, |item, _| *item).unwrap();
        assert_eq!(top.content_height, 400_000.0);
        assert_eq!(top.window_offset, 0.0);
        assert_eq!(top.rows.len(), 11);
        assert_eq!(top.rows.last().map(|r| r.index), Some(10));
        assert_eq!(list.len(), 10_000);

        list.handle_scroll(4_000.0);
        let mid = list.render(&items, |item, _| *item).unwrap();
        assert_eq!(mid.range.start, 97);
        assert_eq!(mid.range.end_index(), Some(110));
        assert_eq!(mid.window_offset, 3_880.0);
        assert_eq!(mid.window_transform(), Affine::translate((0.0, 3_880.0)));
        assert_eq!(mid.spacer_size(320.0), Size::new(320.0, 400_000.0));
        for (i, row) in mid.rows.iter().enumerate() {
            assert_eq!(row.key, row.index);
            assert_eq!(row.node, row.index as u32);
            assert_eq!(row.translate_y, i as f64 * 40.0);
            assert_eq!(row.transform(), Affine::translate((0.0, i as f64 * 40.0)));
        }
    }

    #[test]
    fn short_and_empty_lists() {
        let mut list = attached(0);

        let short: Vec<u32> = (0..5).collect();
        let layout = list.render(&short, |item, _| *item).unwrap();
        assert_eq!(layout.content_height, 200.0);
        assert_eq!(
            layout.rows.iter().map(|r| r.index).collect::<Vec<_>>(),
            [0, 1, 2, 3, 4]
        );

        let layout = list.render(&[], |item: &u32, _| *item).unwrap();
        assert_eq!(layout.content_height, 0.0);
        assert!(layout.rows.is_empty());
        assert!(layout.range.is_empty());
        assert!(list.is_empty());
    }

    #[test]
    fn appending_items_keeps_range_and_grows_spacer() {
        let mut items: Vec<u32> = (0..100).collect();
        let mut list = attached(0);
        let before = list.render(&items, |item, _| *item).unwrap();

        items.extend(100..150);
        let after = list.render(&items, |item, _| *item).unwrap();
        assert_eq!(after.range, before.range);
        assert_eq!(after.content_height, 6_000.0);
    }

    #[test]
    fn render_item_called_once_per_row_in_order() {
        let items: Vec<u32> = (0..1_000).collect();
        let mut list = attached(0);
        list.handle_scroll(400.0);

        let mut calls = Vec::new();
        let layout = list
            .render(&items, |_, index| {
                calls.push(index);
                index
            })
            .unwrap();
        assert_eq!(calls, (7..=20).collect::<Vec<_>>());
        assert_eq!(layout.rows.len(), calls.len());
    }

    #[test]
    fn custom_keys_follow_items() {
        let items: Vec<String> = (0..50).map(|i| format!("id-{i}")).collect();
        let mut list = WindowedList::new(ListConfig::new(40.0, ContainerHeight::Fixed(300.0)))
            .with_key_extractor(|item: &String, _| item.clone());
        list.attach(Element::at(0.0, 300.0));

        let layout = list.render(&items, |item, _| item.len()).unwrap();
        assert_eq!(layout.rows[0].key, "id-0");
        assert_eq!(layout.rows[3].key, "id-3");

        let keys: Vec<_> = list.descriptors(&items).unwrap().map(|d| d.key).collect();
        assert_eq!(keys.len(), layout.rows.len());
    }

    #[test]
    fn invalid_item_height_renders_nothing() {
        let items: Vec<u32> = (0..100).collect();
        let mut list = attached(0);
        list.set_item_height(0.0);

        let layout = list.render(&items, |item, _| *item).unwrap();
        assert!(layout.rows.is_empty());
        assert_eq!(layout.content_height, 0.0);

        list.set_item_height(f64::NAN);
        assert!(list.visible_range().unwrap().is_empty());
    }

    #[test]
    fn overscan_and_height_are_live() {
        let mut list = attached(10_000);
        list.set_overscan(0);
        assert_eq!(list.visible_range().unwrap().indices(), 0..8);

        list.set_height(ContainerHeight::Fixed(80.0));
        assert_eq!(list.visible_range().unwrap().indices(), 0..2);
        assert_eq!(list.config().height, ContainerHeight::Fixed(80.0));
    }

    #[test]
    fn scroll_to_index_and_visibility() {
        let mut list = attached(10_000);

        let offset = list.scroll_to_index(100, ScrollAlign::Start).unwrap();
        assert_eq!(offset, 4_000.0);
        assert!(!list.is_index_visible(100));

        list.handle_scroll(offset);
        assert!(list.is_index_visible(100));
        assert!(!list.is_index_visible(90));
        assert!(
            list.scroll_to_index(9_999, ScrollAlign::End).unwrap() <= 400_000.0 - 300.0,
            "scroll target stays within content"
        );
    }

    #[test]
    fn near_end_triggers_pagination() {
        let mut list = attached(100);
        assert!(!list.is_near_end(200.0));

        list.handle_scroll(3_600.0);
        assert!(list.is_near_end(200.0));

        // Appending a page moves the end away again.
        list.set_len(200);
        assert!(!list.is_near_end(200.0));
    }

    #[test]
    fn render_is_traced() {
        let items: Vec<u32> = (0..20).collect();
        let mut list = WindowedList::with_trace(
            ListConfig::new(40.0, ContainerHeight::Fixed(300.0)).with_overscan(0),
            TraceRecorder::new(),
        );
        list.attach(Element::at(0.0, 300.0));
        list.tracker_mut().trace_mut().clear();

        let layout = list.render(&items, |item, _| *item).unwrap();
        assert_eq!(
            list.tracker().trace().events(),
            [TraceEvent::Rendered {
                range: layout.range,
                len: 20,
            }]
        );
    }
}
