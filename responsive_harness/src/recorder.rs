// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace recording for assertions.
//!
//! [`RecordingSink`] implements [`TraceSink`] by converting every event into an
//! owned [`TraceRecord`], so tests can inspect what happened after the fact.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use responsive_core::Breakpoint;
use responsive_core::component::ComponentId;
use responsive_core::trace::{
    BreakpointChangeEvent, ComponentCreatedEvent, ElementNotFoundEvent, LifecycleEvent,
    LifecyclePhase, ListenersRemovedEvent, QueryMatchedEvent, QueryRegisteredEvent, ResizeEvent,
    TraceSink, Tracer,
};

/// An owned copy of one trace event.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceRecord {
    /// See [`QueryRegisteredEvent`].
    QueryRegistered {
        /// Position in the batch.
        index: usize,
        /// The media query.
        query: String,
    },
    /// See [`QueryMatchedEvent`].
    QueryMatched {
        /// The media query.
        query: String,
    },
    /// See [`ListenersRemovedEvent`].
    ListenersRemoved {
        /// How many listeners were removed.
        count: usize,
    },
    /// See [`ComponentCreatedEvent`].
    ComponentCreated {
        /// The new component.
        component: ComponentId,
        /// Its selector.
        selector: String,
    },
    /// See [`ElementNotFoundEvent`].
    ElementNotFound {
        /// The selector that matched nothing.
        selector: String,
    },
    /// See [`LifecycleEvent`].
    Lifecycle {
        /// The component.
        component: ComponentId,
        /// The transition.
        phase: LifecyclePhase,
    },
    /// See [`ResizeEvent`].
    Resize {
        /// The component.
        component: ComponentId,
        /// Viewport width.
        width: f64,
    },
    /// See [`BreakpointChangeEvent`].
    BreakpointChange {
        /// The component.
        component: ComponentId,
        /// Breakpoint left, if any.
        previous: Option<Breakpoint>,
        /// Breakpoint entered.
        current: Breakpoint,
        /// Viewport width.
        width: f64,
    },
}

/// A [`TraceSink`] that keeps every event.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    records: Vec<TraceRecord>,
}

impl RecordingSink {
    /// Creates a shared recorder and a [`Tracer`] feeding it.
    #[must_use]
    pub fn shared() -> (Rc<RefCell<Self>>, Tracer) {
        let sink = Rc::new(RefCell::new(Self::default()));
        let tracer = Tracer::new(sink.clone());
        (sink, tracer)
    }

    /// Returns every record, oldest first.
    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Returns the breakpoint transitions, oldest first.
    #[must_use]
    pub fn breakpoint_changes(&self) -> Vec<(ComponentId, Breakpoint)> {
        self.records
            .iter()
            .filter_map(|r| match r {
                TraceRecord::BreakpointChange {
                    component, current, ..
                } => Some((*component, *current)),
                _ => None,
            })
            .collect()
    }

    /// Drops everything recorded so far.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl TraceSink for RecordingSink {
    fn on_query_registered(&mut self, e: &QueryRegisteredEvent<'_>) {
        self.records.push(TraceRecord::QueryRegistered {
            index: e.index,
            query: String::from(e.query),
        });
    }

    fn on_query_matched(&mut self, e: &QueryMatchedEvent<'_>) {
        self.records.push(TraceRecord::QueryMatched {
            query: String::from(e.query),
        });
    }

    fn on_listeners_removed(&mut self, e: &ListenersRemovedEvent) {
        self.records
            .push(TraceRecord::ListenersRemoved { count: e.count });
    }

    fn on_component_created(&mut self, e: &ComponentCreatedEvent<'_>) {
        self.records.push(TraceRecord::ComponentCreated {
            component: e.component,
            selector: String::from(e.selector),
        });
    }

    fn on_element_not_found(&mut self, e: &ElementNotFoundEvent<'_>) {
        self.records.push(TraceRecord::ElementNotFound {
            selector: String::from(e.selector),
        });
    }

    fn on_lifecycle(&mut self, e: &LifecycleEvent) {
        self.records.push(TraceRecord::Lifecycle {
            component: e.component,
            phase: e.phase,
        });
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        self.records.push(TraceRecord::Resize {
            component: e.component,
            width: e.width,
        });
    }

    fn on_breakpoint_change(&mut self, e: &BreakpointChangeEvent) {
        self.records.push(TraceRecord::BreakpointChange {
            component: e.component,
            previous: e.previous,
            current: e.current,
            width: e.width,
        });
    }
}
