// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser-console trace output.
//!
//! [`ConsoleSink`] implements [`TraceSink`] and writes one line per event to
//! the browser console. Missing elements go to `console.warn` so they stand
//! out; everything else goes to `console.debug`, which browsers hide unless
//! verbose logging is enabled.

use alloc::format;
use alloc::string::String;

use responsive_core::trace::{
    BreakpointChangeEvent, ComponentCreatedEvent, ElementNotFoundEvent, LifecycleEvent,
    LifecyclePhase, ListenersRemovedEvent, QueryMatchedEvent, QueryRegisteredEvent, ResizeEvent,
    TraceSink,
};
use wasm_bindgen::JsValue;

/// Writes trace lines to the browser console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    /// Also report per-component resize events, which fire on every resize.
    pub verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink that skips per-resize events.
    #[must_use]
    pub const fn new() -> Self {
        Self { verbose: false }
    }

    /// Creates a sink that also reports every resize.
    #[must_use]
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }
}

fn debug(line: &str) {
    web_sys::console::debug_1(&JsValue::from_str(line));
}

fn warn(line: &str) {
    web_sys::console::warn_1(&JsValue::from_str(line));
}

impl TraceSink for ConsoleSink {
    fn on_query_registered(&mut self, e: &QueryRegisteredEvent<'_>) {
        debug(&query_registered_line(e));
    }

    fn on_query_matched(&mut self, e: &QueryMatchedEvent<'_>) {
        debug(&format!("[responsive] matched {}", e.query));
    }

    fn on_listeners_removed(&mut self, e: &ListenersRemovedEvent) {
        debug(&format!("[responsive] removed {} listeners", e.count));
    }

    fn on_component_created(&mut self, e: &ComponentCreatedEvent<'_>) {
        debug(&format!(
            "[responsive] component #{} created on '{}'",
            e.component.0, e.selector
        ));
    }

    fn on_element_not_found(&mut self, e: &ElementNotFoundEvent<'_>) {
        warn(&element_not_found_line(e));
    }

    fn on_lifecycle(&mut self, e: &LifecycleEvent) {
        let phase = match e.phase {
            LifecyclePhase::Init => "init",
            LifecyclePhase::Destroy => "destroy",
        };
        debug(&format!("[responsive] component #{} {phase}", e.component.0));
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        if self.verbose {
            debug(&format!(
                "[responsive] component #{} resize width={}",
                e.component.0, e.width
            ));
        }
    }

    fn on_breakpoint_change(&mut self, e: &BreakpointChangeEvent) {
        debug(&breakpoint_change_line(e));
    }
}

fn query_registered_line(e: &QueryRegisteredEvent<'_>) -> String {
    format!("[responsive] watching [{}] {}", e.index, e.query)
}

fn element_not_found_line(e: &ElementNotFoundEvent<'_>) -> String {
    format!("Element with selector '{}' not found.", e.selector)
}

fn breakpoint_change_line(e: &BreakpointChangeEvent) -> String {
    match e.previous {
        Some(previous) => format!(
            "[responsive] component #{} {previous} -> {} at width={}",
            e.component.0, e.current, e.width
        ),
        None => format!(
            "[responsive] component #{} enters {} at width={}",
            e.component.0, e.current, e.width
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use responsive_core::Breakpoint;
    use responsive_core::component::ComponentId;

    #[test]
    fn breakpoint_lines() {
        let first = BreakpointChangeEvent {
            component: ComponentId(2),
            previous: None,
            current: Breakpoint::Mobile,
            width: 500.0,
        };
        assert_eq!(
            breakpoint_change_line(&first),
            "[responsive] component #2 enters mobile at width=500"
        );

        let next = BreakpointChangeEvent {
            previous: Some(Breakpoint::Mobile),
            current: Breakpoint::Tablet,
            width: 900.0,
            ..first
        };
        assert_eq!(
            breakpoint_change_line(&next),
            "[responsive] component #2 mobile -> tablet at width=900"
        );
    }

    #[test]
    fn missing_element_line_names_selector() {
        let line = element_not_found_line(&ElementNotFoundEvent {
            selector: ".nonexistent",
        });
        assert_eq!(line, "Element with selector '.nonexistent' not found.");
    }

    #[test]
    fn registered_line_includes_index() {
        let line = query_registered_line(&QueryRegisteredEvent {
            index: 1,
            query: "(min-width: 769px)",
        });
        assert_eq!(line, "[responsive] watching [1] (min-width: 769px)");
    }
}
