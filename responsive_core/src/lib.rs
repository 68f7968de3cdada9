// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint classification, media-query watching and responsive components.
//!
//! `responsive_core` lets an application react to viewport-size changes on
//! any [`Host`](host::Host) that can report its width, resolve selectors, and
//! notify about media-query and resize changes. It is `no_std` compatible
//! (with `alloc`) and single-threaded: everything runs synchronously inside
//! host notifications.
//!
//! # Architecture
//!
//! ```text
//!   Host (browser window, test double)
//!     │  media-query change            │  resize
//!     ▼                                ▼
//!   Responsive ── QueryWatcher     Component ── Breakpoint::classify()
//!     │             │                  │
//!     │             ▼                  ▼
//!     │        MediaCallback      on_resize, breakpoint handler
//!     ▼
//!   device::is_mobile() / is_tablet() / is_desktop() / is_tv()
//! ```
//!
//! **[`Responsive`]**: The coordinator. Owns the host, the media-query
//! listener registry and a non-owning list of created components.
//!
//! **[`query`]**: All-or-nothing registration of (media query, callback)
//! batches; a callback runs each time its query starts matching.
//!
//! **[`device`]**: Four independent, overlapping width predicates.
//!
//! **[`breakpoint`]**: The three-way mobile/tablet/desktop partition that
//! drives components.
//!
//! **[`component`]**: Elements bound to per-breakpoint handlers plus
//! init/destroy/resize hooks. Components start active and can be destroyed
//! and re-initialized.
//!
//! **[`host`]**: The [`Host`](host::Host) trait that platform backends
//! implement.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types, with
//! a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! **[`error`]**: [`ResponsiveError`] and its parts.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `tracing` (disabled by default, implies `trace`): Adds
//!   [`TracingSink`](trace::TracingSink), forwarding events to `tracing`.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod breakpoint;
pub mod component;
pub mod device;
pub mod error;
pub mod host;
pub mod query;
pub mod trace;

mod responsive;

pub use breakpoint::Breakpoint;
pub use component::{Component, ComponentOptions};
pub use device::DeviceClass;
pub use error::ResponsiveError;
pub use responsive::Responsive;
