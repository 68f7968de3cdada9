// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for watchers and components.
//!
//! This module provides a [`TraceSink`] trait with one method per event that
//! the coordinator and its components emit. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional shared sink. Events are emitted from host
//! notifications long after registration returns, so the sink is held as an
//! `Rc<RefCell<dyn TraceSink>>` rather than borrowed. When the `trace` feature
//! is **off**, `Tracer` is zero-sized and every method compiles to nothing.
//! When **on**, each method performs a single `Option` branch before
//! dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies.
//! - `tracing` (implies `trace`): adds [`TracingSink`], which forwards every
//!   event to the [`tracing`](https://docs.rs/tracing) crate.

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::breakpoint::Breakpoint;
use crate::component::ComponentId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which lifecycle transition a component went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecyclePhase {
    /// `Idle` to `Active`: the resize listener was subscribed.
    Init,
    /// `Active` to `Idle`: the resize listener was unsubscribed.
    Destroy,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted for each query subscribed by a registration batch.
#[derive(Clone, Copy, Debug)]
pub struct QueryRegisteredEvent<'a> {
    /// Position of the query in its batch.
    pub index: usize,
    /// The media-query string.
    pub query: &'a str,
}

/// Emitted when a watched query starts matching and its callback runs.
#[derive(Clone, Copy, Debug)]
pub struct QueryMatchedEvent<'a> {
    /// The media-query string.
    pub query: &'a str,
}

/// Emitted when every media-query listener is removed.
#[derive(Clone, Copy, Debug)]
pub struct ListenersRemovedEvent {
    /// How many listeners were unsubscribed.
    pub count: usize,
}

/// Emitted when a component is created.
#[derive(Clone, Copy, Debug)]
pub struct ComponentCreatedEvent<'a> {
    /// The new component.
    pub component: ComponentId,
    /// The selector its element was resolved from.
    pub selector: &'a str,
}

/// Emitted when a component selector resolves to nothing.
#[derive(Clone, Copy, Debug)]
pub struct ElementNotFoundEvent<'a> {
    /// The selector that matched nothing.
    pub selector: &'a str,
}

/// Emitted when a component is initialized or destroyed.
#[derive(Clone, Copy, Debug)]
pub struct LifecycleEvent {
    /// The component.
    pub component: ComponentId,
    /// Which transition happened.
    pub phase: LifecyclePhase,
}

/// Emitted when an active component receives a resize notification.
#[derive(Clone, Copy, Debug)]
pub struct ResizeEvent {
    /// The component.
    pub component: ComponentId,
    /// Viewport width at the time of the notification.
    pub width: f64,
}

/// Emitted when a component enters a new breakpoint.
#[derive(Clone, Copy, Debug)]
pub struct BreakpointChangeEvent {
    /// The component.
    pub component: ComponentId,
    /// The breakpoint being left, or `None` on the first classification.
    pub previous: Option<Breakpoint>,
    /// The breakpoint being entered.
    pub current: Breakpoint,
    /// Viewport width that produced the classification.
    pub width: f64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the coordinator and its components.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called for each query subscribed by a registration batch.
    fn on_query_registered(&mut self, e: &QueryRegisteredEvent<'_>) {
        _ = e;
    }

    /// Called when a watched query starts matching.
    fn on_query_matched(&mut self, e: &QueryMatchedEvent<'_>) {
        _ = e;
    }

    /// Called when all media-query listeners are removed.
    fn on_listeners_removed(&mut self, e: &ListenersRemovedEvent) {
        _ = e;
    }

    /// Called when a component is created.
    fn on_component_created(&mut self, e: &ComponentCreatedEvent<'_>) {
        _ = e;
    }

    /// Called when a component selector matches nothing.
    fn on_element_not_found(&mut self, e: &ElementNotFoundEvent<'_>) {
        _ = e;
    }

    /// Called when a component is initialized or destroyed.
    fn on_lifecycle(&mut self, e: &LifecycleEvent) {
        _ = e;
    }

    /// Called when an active component sees a resize.
    fn on_resize(&mut self, e: &ResizeEvent) {
        _ = e;
    }

    /// Called when a component enters a new breakpoint.
    fn on_breakpoint_change(&mut self, e: &BreakpointChangeEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// TracingSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that forwards events to the `tracing` crate.
///
/// Missing elements are reported at `WARN`; everything else at `DEBUG`.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl TraceSink for TracingSink {
    fn on_query_registered(&mut self, e: &QueryRegisteredEvent<'_>) {
        tracing::debug!(index = e.index, query = e.query, "media query registered");
    }

    fn on_query_matched(&mut self, e: &QueryMatchedEvent<'_>) {
        tracing::debug!(query = e.query, "media query matched");
    }

    fn on_listeners_removed(&mut self, e: &ListenersRemovedEvent) {
        tracing::debug!(count = e.count, "media query listeners removed");
    }

    fn on_component_created(&mut self, e: &ComponentCreatedEvent<'_>) {
        tracing::debug!(
            component = e.component.0,
            selector = e.selector,
            "component created"
        );
    }

    fn on_element_not_found(&mut self, e: &ElementNotFoundEvent<'_>) {
        tracing::warn!(selector = e.selector, "element not found");
    }

    fn on_lifecycle(&mut self, e: &LifecycleEvent) {
        match e.phase {
            LifecyclePhase::Init => tracing::debug!(component = e.component.0, "component init"),
            LifecyclePhase::Destroy => {
                tracing::debug!(component = e.component.0, "component destroy");
            }
        }
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        tracing::trace!(component = e.component.0, width = e.width, "resize");
    }

    fn on_breakpoint_change(&mut self, e: &BreakpointChangeEvent) {
        tracing::debug!(
            component = e.component.0,
            previous = e.previous.map(Breakpoint::as_str),
            current = e.current.as_str(),
            width = e.width,
            "breakpoint changed"
        );
    }
}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// A trace sink shared between the coordinator and its callbacks.
pub type SharedSink = Rc<RefCell<dyn TraceSink>>;

/// Thin, cloneable wrapper around an optional shared [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching. A sink that is already borrowed (because it is itself the
/// source of a nested event) silently drops the nested event.
#[derive(Clone, Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<SharedSink>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: SharedSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[cfg(feature = "trace")]
    #[inline]
    fn emit(&self, f: impl FnOnce(&mut dyn TraceSink)) {
        if let Some(sink) = &self.sink
            && let Ok(mut sink) = sink.try_borrow_mut()
        {
            f(&mut *sink);
        }
    }

    /// Emits a [`QueryRegisteredEvent`].
    #[inline]
    pub fn query_registered(&self, e: &QueryRegisteredEvent<'_>) {
        #[cfg(feature = "trace")]
        self.emit(|s| s.on_query_registered(e));
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`QueryMatchedEvent`].
    #[inline]
    pub fn query_matched(&self, e: &QueryMatchedEvent<'_>) {
        #[cfg(feature = "trace")]
        self.emit(|s| s.on_query_matched(e));
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ListenersRemovedEvent`].
    #[inline]
    pub fn listeners_removed(&self, e: &ListenersRemovedEvent) {
        #[cfg(feature = "trace")]
        self.emit(|s| s.on_listeners_removed(e));
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ComponentCreatedEvent`].
    #[inline]
    pub fn component_created(&self, e: &ComponentCreatedEvent<'_>) {
        #[cfg(feature = "trace")]
        self.emit(|s| s.on_component_created(e));
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ElementNotFoundEvent`].
    #[inline]
    pub fn element_not_found(&self, e: &ElementNotFoundEvent<'_>) {
        #[cfg(feature = "trace")]
        self.emit(|s| s.on_element_not_found(e));
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LifecycleEvent`].
    #[inline]
    pub fn lifecycle(&self, e: &LifecycleEvent) {
        #[cfg(feature = "trace")]
        self.emit(|s| s.on_lifecycle(e));
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ResizeEvent`].
    #[inline]
    pub fn resize(&self, e: &ResizeEvent) {
        #[cfg(feature = "trace")]
        self.emit(|s| s.on_resize(e));
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`BreakpointChangeEvent`].
    #[inline]
    pub fn breakpoint_change(&self, e: &BreakpointChangeEvent) {
        #[cfg(feature = "trace")]
        self.emit(|s| s.on_breakpoint_change(e));
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
