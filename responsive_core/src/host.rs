// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for platform integrations.
//!
//! Responsive keeps everything platform-specific behind the [`Host`] trait.
//! A host provides four capabilities:
//!
//! - **Viewport width**: the current layout width in CSS pixels
//!   (`window.innerWidth` in a browser).
//!
//! - **Element lookup**: resolves a selector to a single element, or nothing.
//!
//! - **Media matching**: evaluates a media-query string and notifies a
//!   callback with the new match state whenever it changes.
//!
//! - **Resize notification**: notifies a callback whenever the viewport is
//!   resized.
//!
//! # Crate boundaries
//!
//! `responsive_core` owns classification, the listener and component
//! registries, and this contract. Host crates depend on `responsive_core` and
//! provide the platform glue (`responsive_backend_web` for browsers,
//! `responsive_harness` for deterministic tests).
//!
//! # Delivery
//!
//! Notifications are delivered synchronously on the thread that owns the host.
//! Once a subscription has been passed back to [`Host::unwatch_media`] or
//! [`Host::unwatch_resize`] the host must not invoke its callback again.
//! Whether a notification already being dispatched still reaches its callback
//! is host-defined.

use alloc::boxed::Box;

use crate::error::HostError;

/// Callback receiving the new match state of a watched media query.
pub type MediaNotify = Box<dyn FnMut(bool)>;

/// Callback invoked on every viewport resize.
pub type ResizeNotify = Box<dyn FnMut()>;

/// The environment a [`Responsive`](crate::Responsive) coordinator runs in.
///
/// All methods take `&self`; hosts use interior mutability for their
/// subscription tables. Hosts must tolerate being called from inside one of
/// their own notifications (a callback may subscribe or unsubscribe).
pub trait Host {
    /// A resolved element.
    type Element: Clone;

    /// Keeps a media-query subscription alive until passed to
    /// [`unwatch_media`](Self::unwatch_media).
    type MediaSubscription;

    /// Keeps a resize subscription alive until passed to
    /// [`unwatch_resize`](Self::unwatch_resize).
    type ResizeSubscription;

    /// Returns the current viewport width in CSS pixels.
    fn viewport_width(&self) -> f64;

    /// Resolves `selector` to the first matching element.
    ///
    /// Selectors the host cannot parse resolve to `None`.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Subscribes `notify` to match-state changes of `query`.
    ///
    /// `notify` is not invoked for the initial state, only for changes.
    fn watch_media(
        &self,
        query: &str,
        notify: MediaNotify,
    ) -> Result<Self::MediaSubscription, HostError>;

    /// Cancels a subscription made by [`watch_media`](Self::watch_media).
    fn unwatch_media(&self, subscription: Self::MediaSubscription);

    /// Subscribes `notify` to viewport resizes.
    ///
    /// Fails if the host cannot deliver resize notifications at all.
    fn watch_resize(&self, notify: ResizeNotify) -> Result<Self::ResizeSubscription, HostError>;

    /// Cancels a subscription made by [`watch_resize`](Self::watch_resize).
    fn unwatch_resize(&self, subscription: Self::ResizeSubscription);
}
