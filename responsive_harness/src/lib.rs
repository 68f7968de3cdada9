// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic test host and trace recorder for responsive.
//!
//! - [`MockHost`]: a [`Host`](responsive_core::host::Host) with a viewport
//!   width the test controls, a fixed set of selectors, and a width-only
//!   media-query evaluator.
//! - [`RecordingSink`]: keeps every trace event as an owned [`TraceRecord`].

#![no_std]

extern crate alloc;

mod host;
pub mod media;
mod recorder;

pub use host::{MediaToken, MockElement, MockHost, ResizeToken};
pub use media::MediaQuery;
pub use recorder::{RecordingSink, TraceRecord};
