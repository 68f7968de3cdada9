// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser [`Host`] implementation.
//!
//! [`WebHost`] maps the host contract onto the DOM:
//!
//! | Capability      | Browser API                                   |
//! |-----------------|-----------------------------------------------|
//! | viewport width  | `window.innerWidth`, else root `clientWidth`  |
//! | element lookup  | `document.querySelector()`                    |
//! | media matching  | `window.matchMedia()` + `change` listener     |
//! | resize          | `resize` listener on `window`                 |
//!
//! Each subscription owns its JS closure. Passing it back to
//! `unwatch_*` removes the listener and drops the closure; dropping a
//! subscription without unwatching leaves a listener whose closure has been
//! freed, so always unwatch.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;

use responsive_core::error::HostError;
use responsive_core::host::{Host, MediaNotify, ResizeNotify};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, MediaQueryList, MediaQueryListEvent, Window};

const CHANGE: &str = "change";
const RESIZE: &str = "resize";

type MediaClosure = Closure<dyn FnMut(MediaQueryListEvent)>;
type ResizeClosure = Closure<dyn FnMut(Event)>;

/// A browser window and its document.
#[derive(Clone)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl core::fmt::Debug for WebHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WebHost")
            .field("window", &"Window")
            .field("document", &"Document")
            .finish()
    }
}

impl WebHost {
    /// Binds to the global `window` and its `document`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Unavailable`] outside a browsing context (e.g. in
    /// a worker).
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::Unavailable("window"))?;
        let document = window
            .document()
            .ok_or(HostError::Unavailable("document"))?;
        Ok(Self { window, document })
    }

    /// Returns the window.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Returns the document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// A live `matchMedia` subscription.
pub struct MediaWatch {
    list: MediaQueryList,
    closure: MediaClosure,
}

impl MediaWatch {
    /// Returns the underlying `MediaQueryList`.
    #[must_use]
    pub fn list(&self) -> &MediaQueryList {
        &self.list
    }
}

impl core::fmt::Debug for MediaWatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MediaWatch")
            .field("media", &self.list.media())
            .finish_non_exhaustive()
    }
}

/// A live `resize` subscription on the window.
pub struct ResizeWatch {
    closure: ResizeClosure,
}

impl core::fmt::Debug for ResizeWatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResizeWatch").finish_non_exhaustive()
    }
}

impl Host for WebHost {
    type Element = Element;
    type MediaSubscription = MediaWatch;
    type ResizeSubscription = ResizeWatch;

    fn viewport_width(&self) -> f64 {
        if let Some(width) = self.window.inner_width().ok().and_then(|w| w.as_f64()) {
            return width;
        }
        // `innerWidth` is unavailable in some embedded contexts; the root
        // element's client width is the closest layout width.
        let fallback = self
            .document
            .document_element()
            .map_or(0, |root| root.client_width());
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "[responsive] window.innerWidth unavailable; using documentElement.clientWidth={fallback}"
        )));
        f64::from(fallback)
    }

    fn query_selector(&self, selector: &str) -> Option<Element> {
        // An unparseable selector throws a SyntaxError; treat it as a miss.
        self.document.query_selector(selector).ok().flatten()
    }

    fn watch_media(&self, query: &str, notify: MediaNotify) -> Result<MediaWatch, HostError> {
        let list = self
            .window
            .match_media(query)
            .map_err(|err| HostError::Platform(describe(&err)))?
            .ok_or_else(|| HostError::UnsupportedQuery(String::from(query)))?;

        let mut notify = notify;
        let closure = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            notify(event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);
        list.add_event_listener_with_callback(CHANGE, closure.as_ref().unchecked_ref())
            .map_err(|err| HostError::Platform(describe(&err)))?;

        Ok(MediaWatch { list, closure })
    }

    fn unwatch_media(&self, subscription: MediaWatch) {
        let _ = subscription.list.remove_event_listener_with_callback(
            CHANGE,
            subscription.closure.as_ref().unchecked_ref(),
        );
    }

    fn watch_resize(&self, notify: ResizeNotify) -> Result<ResizeWatch, HostError> {
        let mut notify = notify;
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            notify();
        }) as Box<dyn FnMut(Event)>);
        self.window
            .add_event_listener_with_callback(RESIZE, closure.as_ref().unchecked_ref())
            .map_err(|err| HostError::Platform(describe(&err)))?;
        Ok(ResizeWatch { closure })
    }

    fn unwatch_resize(&self, subscription: ResizeWatch) {
        let _ = self.window.remove_event_listener_with_callback(
            RESIZE,
            subscription.closure.as_ref().unchecked_ref(),
        );
    }
}

/// Renders a thrown JS value for a [`HostError`].
fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
