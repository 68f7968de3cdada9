// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-browser checks for `WebHost`. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use responsive_backend_web::{Host, WebHost};
use responsive_core::query::MediaCallback;
use responsive_core::{ComponentOptions, Responsive, ResponsiveError};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn reports_a_positive_viewport_width() {
    let host = WebHost::new().expect("browser has a window");
    assert!(host.viewport_width() > 0.0, "innerWidth must be positive");
}

#[wasm_bindgen_test]
fn unparseable_selector_is_a_miss() {
    let host = WebHost::new().expect("browser has a window");
    assert!(host.query_selector("[[not a selector").is_none());
}

#[wasm_bindgen_test]
fn watches_and_unwatches_media_queries() {
    let mut responsive = Responsive::new(WebHost::new().expect("browser has a window"));
    responsive
        .on_media_query_change(&["(min-width: 1px)"], vec![Box::new(|| {}) as MediaCallback])
        .expect("matchMedia accepts the query");
    assert_eq!(responsive.media_query_listener_count(), 1);
    responsive.remove_media_query_listeners();
    assert_eq!(responsive.media_query_listener_count(), 0);
}

#[wasm_bindgen_test]
fn component_on_body_initializes_at_creation() {
    let mut responsive = Responsive::new(WebHost::new().expect("browser has a window"));
    let inits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&inits);
    let component = responsive
        .create_component(
            "body",
            ComponentOptions::default().with_init(move |_| counter.set(counter.get() + 1)),
        )
        .expect("body exists");
    assert_eq!(inits.get(), 1);
    assert!(component.is_active());
    assert!(component.current_breakpoint().is_some());
    component.destroy();
}

#[wasm_bindgen_test]
fn missing_element_is_an_error() {
    let mut responsive = Responsive::new(WebHost::new().expect("browser has a window"));
    let err = responsive
        .create_component(".nonexistent", ComponentOptions::default())
        .expect_err("nothing matches");
    assert!(matches!(err, ResponsiveError::ElementNotFound { .. }));
}
