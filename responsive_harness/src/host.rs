// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic in-memory host.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use responsive_core::error::HostError;
use responsive_core::host::{Host, MediaNotify, ResizeNotify};

use crate::media::MediaQuery;

/// An element known to a [`MockHost`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MockElement {
    /// The selector the element answers to.
    pub selector: String,
}

/// Keeps a [`MockHost`] media-query listener alive.
#[derive(Debug)]
pub struct MediaToken(usize);

/// Keeps a [`MockHost`] resize listener alive.
#[derive(Debug)]
pub struct ResizeToken(usize);

struct MediaSlot {
    query: String,
    parsed: MediaQuery,
    matches: Cell<bool>,
    notify: RefCell<MediaNotify>,
}

type ResizeSlot = RefCell<ResizeNotify>;

/// A host whose viewport is resized by the test.
///
/// Elements are plain selector strings: [`query_selector`](Host::query_selector)
/// succeeds exactly for selectors added with [`add_element`](Self::add_element).
/// Media queries are evaluated with [`MediaQuery`]; unsupported queries are
/// rejected with [`HostError::UnsupportedQuery`].
///
/// [`resize_to`](Self::resize_to) mirrors browser delivery order: media-query
/// `change` notifications for every query whose state flipped, then one
/// `resize` notification per resize listener. A listener unsubscribed by an
/// earlier callback in the same dispatch is skipped. Listener slots are never
/// reused, so a stale token cannot cancel someone else's listener.
pub struct MockHost {
    width: Cell<f64>,
    elements: RefCell<Vec<String>>,
    media: RefCell<Vec<Option<Rc<MediaSlot>>>>,
    resize: RefCell<Vec<Option<Rc<ResizeSlot>>>>,
    resize_events: Cell<u64>,
    refuse_resize: Cell<bool>,
}

impl fmt::Debug for MockHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockHost")
            .field("width", &self.width.get())
            .field("elements", &self.elements.borrow())
            .field("media_listeners", &self.media_listener_count())
            .field("resize_listeners", &self.resize_listener_count())
            .field("resize_events", &self.resize_events.get())
            .finish_non_exhaustive()
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new(1024.0)
    }
}

impl MockHost {
    /// Creates a host with a viewport `width` pixels wide and no elements.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width: Cell::new(width),
            elements: RefCell::new(Vec::new()),
            media: RefCell::new(Vec::new()),
            resize: RefCell::new(Vec::new()),
            resize_events: Cell::new(0),
            refuse_resize: Cell::new(false),
        }
    }

    /// Adds elements answering to each of `selectors`.
    #[must_use]
    pub fn with_elements<'a>(self, selectors: impl IntoIterator<Item = &'a str>) -> Self {
        for selector in selectors {
            self.add_element(selector);
        }
        self
    }

    /// Adds an element answering to `selector`.
    pub fn add_element(&self, selector: &str) {
        let mut elements = self.elements.borrow_mut();
        if !elements.iter().any(|s| s == selector) {
            elements.push(String::from(selector));
        }
    }

    /// Removes the element answering to `selector`, if any.
    pub fn remove_element(&self, selector: &str) {
        self.elements.borrow_mut().retain(|s| s != selector);
    }

    /// Returns the current viewport width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width.get()
    }

    /// Resizes the viewport and delivers the resulting notifications.
    pub fn resize_to(&self, width: f64) {
        self.width.set(width);
        self.dispatch_media();
        self.dispatch_resize();
    }

    /// Delivers a `resize` notification without changing the width, as a
    /// browser does when only the height changes.
    pub fn fire_resize(&self) {
        self.dispatch_resize();
    }

    /// Makes later [`watch_resize`](Host::watch_resize) calls fail with
    /// [`HostError::Unavailable`], as a host without resize events would.
    pub fn refuse_resize_watches(&self, refuse: bool) {
        self.refuse_resize.set(refuse);
    }

    /// Returns the number of live media-query listeners.
    #[must_use]
    pub fn media_listener_count(&self) -> usize {
        self.media.borrow().iter().flatten().count()
    }

    /// Returns the number of live resize listeners.
    #[must_use]
    pub fn resize_listener_count(&self) -> usize {
        self.resize.borrow().iter().flatten().count()
    }

    /// Returns the queries of every live media-query listener.
    #[must_use]
    pub fn watched_queries(&self) -> Vec<String> {
        self.media
            .borrow()
            .iter()
            .flatten()
            .map(|slot| slot.query.clone())
            .collect()
    }

    /// Returns how many `resize` dispatches have happened.
    #[must_use]
    pub fn resize_events(&self) -> u64 {
        self.resize_events.get()
    }

    fn dispatch_media(&self) {
        let width = self.width.get();
        let flipped: Vec<(usize, Rc<MediaSlot>, bool)> = self
            .media
            .borrow()
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| {
                let slot = slot.as_ref()?;
                let now = slot.parsed.matches(width);
                (now != slot.matches.get()).then(|| (idx, Rc::clone(slot), now))
            })
            .collect();

        for (idx, slot, now) in flipped {
            if !self.media_live(idx) {
                continue;
            }
            slot.matches.set(now);
            // A listener that is already running (re-entrant resize) is skipped.
            if let Ok(mut notify) = slot.notify.try_borrow_mut() {
                (&mut *notify)(now);
            }
        }
    }

    fn dispatch_resize(&self) {
        self.resize_events.set(self.resize_events.get() + 1);
        let live: Vec<(usize, Rc<ResizeSlot>)> = self
            .resize
            .borrow()
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| Some((idx, Rc::clone(slot.as_ref()?))))
            .collect();

        for (idx, slot) in live {
            if !self.resize_live(idx) {
                continue;
            }
            if let Ok(mut notify) = slot.try_borrow_mut() {
                (&mut *notify)();
            }
        }
    }

    fn media_live(&self, idx: usize) -> bool {
        self.media.borrow().get(idx).is_some_and(Option::is_some)
    }

    fn resize_live(&self, idx: usize) -> bool {
        self.resize.borrow().get(idx).is_some_and(Option::is_some)
    }
}

impl Host for MockHost {
    type Element = MockElement;
    type MediaSubscription = MediaToken;
    type ResizeSubscription = ResizeToken;

    fn viewport_width(&self) -> f64 {
        self.width.get()
    }

    fn query_selector(&self, selector: &str) -> Option<MockElement> {
        self.elements
            .borrow()
            .iter()
            .find(|s| *s == selector)
            .map(|s| MockElement {
                selector: s.clone(),
            })
    }

    fn watch_media(&self, query: &str, notify: MediaNotify) -> Result<MediaToken, HostError> {
        let parsed =
            MediaQuery::parse(query).ok_or_else(|| HostError::UnsupportedQuery(String::from(query)))?;
        let matches = parsed.matches(self.width.get());
        let mut media = self.media.borrow_mut();
        media.push(Some(Rc::new(MediaSlot {
            query: String::from(query),
            parsed,
            matches: Cell::new(matches),
            notify: RefCell::new(notify),
        })));
        Ok(MediaToken(media.len() - 1))
    }

    fn unwatch_media(&self, subscription: MediaToken) {
        if let Some(slot) = self.media.borrow_mut().get_mut(subscription.0) {
            *slot = None;
        }
    }

    fn watch_resize(&self, notify: ResizeNotify) -> Result<ResizeToken, HostError> {
        if self.refuse_resize.get() {
            return Err(HostError::Unavailable("resize events"));
        }
        let mut resize = self.resize.borrow_mut();
        resize.push(Some(Rc::new(RefCell::new(notify))));
        Ok(ResizeToken(resize.len() - 1))
    }

    fn unwatch_resize(&self, subscription: ResizeToken) {
        if let Some(slot) = self.resize.borrow_mut().get_mut(subscription.0) {
            *slot = None;
        }
    }
}
