// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::string::String;
use core::fmt;

/// Shape errors detected while validating a media-query batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The query and callback sequences have different lengths.
    LengthMismatch {
        /// Number of queries supplied.
        queries: usize,
        /// Number of callbacks supplied.
        callbacks: usize,
    },
    /// The query at `index` is empty or whitespace only.
    EmptyQuery {
        /// Position of the offending query in the batch.
        index: usize,
    },
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { queries, callbacks } => write!(
                f,
                "{queries} queries were given {callbacks} callbacks; each query needs exactly one"
            ),
            Self::EmptyQuery { index } => write!(f, "query at index {index} is empty"),
        }
    }
}

impl core::error::Error for InvalidArgument {}

/// A host capability that could not be provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostError {
    /// The host environment is missing (e.g. no `window` or `document`).
    Unavailable(&'static str),
    /// The host's media engine returned no matcher for the query.
    UnsupportedQuery(String),
    /// A platform call failed; the payload is the host's description.
    Platform(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(what) => write!(f, "host has no {what}"),
            Self::UnsupportedQuery(query) => write!(f, "media query '{query}' is not supported"),
            Self::Platform(msg) => write!(f, "host call failed: {msg}"),
        }
    }
}

impl core::error::Error for HostError {}

/// Errors returned by [`Responsive`](crate::Responsive) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponsiveError {
    /// A media-query batch was malformed. Nothing was registered.
    InvalidArgument(InvalidArgument),
    /// No element matched the selector passed to
    /// [`create_component`](crate::Responsive::create_component).
    ElementNotFound {
        /// The selector that matched nothing.
        selector: String,
    },
    /// The host refused a capability.
    Host(HostError),
}

impl fmt::Display for ResponsiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
            Self::ElementNotFound { selector } => {
                write!(f, "element with selector '{selector}' not found")
            }
            Self::Host(err) => err.fmt(f),
        }
    }
}

impl core::error::Error for ResponsiveError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::Host(err) => Some(err),
            Self::ElementNotFound { .. } => None,
        }
    }
}

impl From<InvalidArgument> for ResponsiveError {
    fn from(err: InvalidArgument) -> Self {
        Self::InvalidArgument(err)
    }
}

impl From<HostError> for ResponsiveError {
    fn from(err: HostError) -> Self {
        Self::Host(err)
    }
}
