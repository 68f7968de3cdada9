// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Media-query watching.
//!
//! A registration batch pairs media-query strings with callbacks. Each
//! callback runs, with no arguments, every time its query **starts**
//! matching. A query that stops matching runs nothing; register the opposite
//! query if you need that edge too.
//!
//! Batches are all-or-nothing: the whole batch is validated before anything
//! is subscribed, and if the host rejects a query part-way through, the
//! batch's earlier subscriptions are cancelled before the error is returned.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{InvalidArgument, ResponsiveError};
use crate::host::Host;
use crate::trace::{ListenersRemovedEvent, QueryMatchedEvent, QueryRegisteredEvent, Tracer};

/// Callback run when its media query starts matching.
pub type MediaCallback = Box<dyn FnMut()>;

/// A live (query, callback) subscription.
pub struct RegisteredQuery<H: Host> {
    query: Rc<str>,
    subscription: H::MediaSubscription,
}

impl<H: Host> RegisteredQuery<H> {
    /// Returns the watched media-query string.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl<H: Host> fmt::Debug for RegisteredQuery<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredQuery")
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

/// Checks a batch's shape without touching the host.
pub fn validate_batch<Q: AsRef<str>>(
    queries: &[Q],
    callbacks: usize,
) -> Result<(), InvalidArgument> {
    if queries.len() != callbacks {
        return Err(InvalidArgument::LengthMismatch {
            queries: queries.len(),
            callbacks,
        });
    }
    if let Some(index) = queries.iter().position(|q| q.as_ref().trim().is_empty()) {
        return Err(InvalidArgument::EmptyQuery { index });
    }
    Ok(())
}

/// The listener registry owned by a [`Responsive`](crate::Responsive).
pub(crate) struct QueryWatcher<H: Host> {
    listeners: Vec<RegisteredQuery<H>>,
}

impl<H: Host> QueryWatcher<H> {
    pub(crate) fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub(crate) fn listeners(&self) -> &[RegisteredQuery<H>] {
        &self.listeners
    }

    pub(crate) fn register<Q: AsRef<str>>(
        &mut self,
        host: &H,
        tracer: &Tracer,
        queries: &[Q],
        callbacks: Vec<MediaCallback>,
    ) -> Result<(), ResponsiveError> {
        validate_batch(queries, callbacks.len())?;

        let mut batch = Vec::with_capacity(queries.len());
        for (index, (query, mut callback)) in queries.iter().zip(callbacks).enumerate() {
            let query: Rc<str> = Rc::from(query.as_ref());
            let label = Rc::clone(&query);
            let matched = tracer.clone();
            let notify = Box::new(move |matches: bool| {
                if matches {
                    matched.query_matched(&QueryMatchedEvent { query: &label });
                    callback();
                }
            });

            match host.watch_media(&query, notify) {
                Ok(subscription) => {
                    tracer.query_registered(&QueryRegisteredEvent {
                        index,
                        query: &query,
                    });
                    batch.push(RegisteredQuery {
                        query,
                        subscription,
                    });
                }
                Err(err) => {
                    for entry in batch {
                        host.unwatch_media(entry.subscription);
                    }
                    return Err(err.into());
                }
            }
        }

        self.listeners.extend(batch);
        Ok(())
    }

    pub(crate) fn remove_all(&mut self, host: &H, tracer: &Tracer) {
        let listeners = core::mem::take(&mut self.listeners);
        if listeners.is_empty() {
            return;
        }
        let count = listeners.len();
        for entry in listeners {
            host.unwatch_media(entry.subscription);
        }
        tracer.listeners_removed(&ListenersRemovedEvent { count });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_lengths() {
        assert_eq!(validate_batch(&["(max-width: 768px)"], 1), Ok(()));
        assert_eq!(validate_batch::<&str>(&[], 0), Ok(()));
    }

    #[test]
    fn rejects_length_mismatch() {
        assert_eq!(
            validate_batch(&["(max-width: 768px)", "(min-width: 769px)"], 1),
            Err(InvalidArgument::LengthMismatch {
                queries: 2,
                callbacks: 1
            })
        );
        assert_eq!(
            validate_batch(&["(max-width: 768px)"], 2),
            Err(InvalidArgument::LengthMismatch {
                queries: 1,
                callbacks: 2
            })
        );
    }

    #[test]
    fn rejects_blank_queries() {
        assert_eq!(
            validate_batch(&["(min-width: 1px)", "   "], 2),
            Err(InvalidArgument::EmptyQuery { index: 1 })
        );
    }
}
