// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web example: media-query callbacks and a breakpoint-driven banner.
//!
//! Logs to the console whenever the viewport crosses 768px, and restyles a
//! banner element as it moves between the mobile, tablet and desktop
//! breakpoints.
//!
//! Build with: `wasm-pack build --target web demos/web_breakpoints`
//! Then serve `demos/web_breakpoints/` and open `index.html`, which provides
//! the `#banner` element.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::string::ToString as _;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Display;

use responsive_backend_web::{ConsoleSink, WebHost, console_tracer};
use responsive_core::query::MediaCallback;
use responsive_core::{Breakpoint, Component, ComponentOptions, Responsive};
use wasm_bindgen::prelude::*;

fn js_err(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn log(line: &str) {
    web_sys::console::log_1(&JsValue::from_str(line));
}

fn paint(component: &Component<WebHost>, background: &str) {
    let _ = component.element().set_attribute(
        "style",
        &format!("padding: 24px; font: 600 20px sans-serif; color: #fff; background: {background};"),
    );
}

/// Banner options: one colour and label per breakpoint.
fn banner_options() -> ComponentOptions<WebHost> {
    let entry = |label: &'static str, background: &'static str| {
        move |c: &Component<WebHost>| {
            paint(c, background);
            c.element().set_text_content(Some(label));
        }
    };
    ComponentOptions::default()
        .with_breakpoint(Breakpoint::Mobile, entry("Mobile layout", "#b4462b"))
        .with_breakpoint(Breakpoint::Tablet, entry("Tablet layout", "#0f5d71"))
        .with_breakpoint(Breakpoint::Desktop, entry("Desktop layout", "#2d6a2e"))
        .with_init(|c| log(&format!("banner {} active", c.id().0)))
}

/// Wires up the console callbacks and the banner.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let host = WebHost::new().map_err(js_err)?;
    let mut responsive = Responsive::new(host).with_tracer(console_tracer(ConsoleSink::new()));

    let callbacks: Vec<MediaCallback> = vec![
        Box::new(|| log("Width is less than or equal to 768px")),
        Box::new(|| log("Width is greater than or equal to 769px")),
    ];
    responsive
        .on_media_query_change(&["(max-width: 768px)", "(min-width: 769px)"], callbacks)
        .map_err(js_err)?;

    // `index.html` provides the banner element.
    let banner = responsive
        .create_component("#banner", banner_options())
        .map_err(js_err)?;

    // Both stay subscribed for the lifetime of the page.
    core::mem::forget(banner);
    core::mem::forget(responsive);
    Ok(())
}
