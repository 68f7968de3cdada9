// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for responsive.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`WebHost`]: the [`Host`] implementation (`matchMedia`, `innerWidth`,
//!   `querySelector`, window `resize` events)
//! - [`ConsoleSink`]: trace output to the browser console

#![no_std]

extern crate alloc;

mod console;
mod host;

use alloc::rc::Rc;
use core::cell::RefCell;

pub use console::ConsoleSink;
pub use host::{MediaWatch, ResizeWatch, WebHost};
pub use responsive_core::host::Host;

use responsive_core::Responsive;
use responsive_core::error::HostError;
use responsive_core::trace::Tracer;

/// Returns a [`Tracer`] writing to the browser console.
#[must_use]
pub fn console_tracer(sink: ConsoleSink) -> Tracer {
    Tracer::new(Rc::new(RefCell::new(sink)))
}

/// Creates a coordinator on the global window that reports diagnostics to the
/// browser console.
///
/// # Errors
///
/// Returns [`HostError::Unavailable`] outside a browsing context.
pub fn responsive() -> Result<Responsive<WebHost>, HostError> {
    Ok(Responsive::new(WebHost::new()?).with_tracer(console_tracer(ConsoleSink::new())))
}
