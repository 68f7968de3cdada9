// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coordinator owning a host and its registries.

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::breakpoint::Breakpoint;
use crate::component::{Component, ComponentId, ComponentInner, ComponentOptions};
use crate::device::{self, DeviceClass};
use crate::error::ResponsiveError;
use crate::host::Host;
use crate::query::{MediaCallback, QueryWatcher};
use crate::trace::{ComponentCreatedEvent, ElementNotFoundEvent, Tracer};

/// Entry point: watches media queries, classifies the viewport and creates
/// responsive components on one [`Host`].
///
/// A `Responsive` owns the media-query listener registry and a non-owning
/// list of the components it created. Independent coordinators never share
/// state, even on the same host. Dropping a coordinator removes its
/// media-query listeners; components own their own resize subscriptions and
/// outlive it.
///
/// # Example
///
/// ```rust,ignore
/// let mut responsive = Responsive::new(WebHost::new()?);
/// responsive.on_media_query_change(
///     &["(max-width: 768px)", "(min-width: 769px)"],
///     vec![Box::new(|| collapse()), Box::new(|| expand())],
/// )?;
///
/// // Runs the handler for the current breakpoint before returning.
/// let nav = responsive.create_component(
///     "#nav",
///     ComponentOptions::default().with_breakpoint(Breakpoint::Mobile, |c| hamburger(c.element())),
/// )?;
/// ```
pub struct Responsive<H: Host> {
    host: Rc<H>,
    queries: QueryWatcher<H>,
    components: Vec<Weak<ComponentInner<H>>>,
    next_component: u32,
    tracer: Tracer,
}

impl<H: Host> fmt::Debug for Responsive<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responsive")
            .field("media_query_listeners", &self.queries.listeners().len())
            .field("components", &self.component_count())
            .field("tracer", &self.tracer)
            .finish_non_exhaustive()
    }
}

impl<H: Host> Drop for Responsive<H> {
    fn drop(&mut self) {
        self.queries.remove_all(&self.host, &self.tracer);
    }
}

impl<H: Host> Responsive<H> {
    /// Creates a coordinator that owns `host`.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_shared_host(Rc::new(host))
    }

    /// Creates a coordinator on a host shared with other code.
    #[must_use]
    pub fn with_shared_host(host: Rc<H>) -> Self {
        Self {
            host,
            queries: QueryWatcher::new(),
            components: Vec::new(),
            next_component: 0,
            tracer: Tracer::none(),
        }
    }

    /// Routes diagnostics to `tracer`. Components created afterwards inherit
    /// it.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    // -- Query watcher ------------------------------------------------------

    /// Watches each of `queries`, running the callback at the same position
    /// whenever that query starts matching.
    ///
    /// The batch is all-or-nothing: on error nothing from this call stays
    /// registered. Listeners accumulate across calls until
    /// [`remove_media_query_listeners`](Self::remove_media_query_listeners).
    ///
    /// # Errors
    ///
    /// - [`ResponsiveError::InvalidArgument`] if the two sequences differ in
    ///   length or a query is blank.
    /// - [`ResponsiveError::Host`] if the host cannot watch one of the
    ///   queries.
    pub fn on_media_query_change<Q: AsRef<str>>(
        &mut self,
        queries: &[Q],
        callbacks: Vec<MediaCallback>,
    ) -> Result<(), ResponsiveError> {
        self.queries
            .register(&self.host, &self.tracer, queries, callbacks)
    }

    /// Unsubscribes every media-query listener registered on this
    /// coordinator. Calling it again is a no-op.
    pub fn remove_media_query_listeners(&mut self) {
        self.queries.remove_all(&self.host, &self.tracer);
    }

    /// Returns the number of live media-query listeners.
    #[must_use]
    pub fn media_query_listener_count(&self) -> usize {
        self.queries.listeners().len()
    }

    /// Returns the watched query strings, in registration order.
    pub fn registered_queries(&self) -> impl Iterator<Item = &str> {
        self.queries.listeners().iter().map(|entry| entry.query())
    }

    // -- Device classifier --------------------------------------------------

    /// Returns the host's current viewport width.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.host.viewport_width()
    }

    /// Returns `true` if the viewport is at most 767 wide.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        device::is_mobile(self.viewport_width())
    }

    /// Returns `true` if the viewport is 768 to 1023 wide.
    #[must_use]
    pub fn is_tablet(&self) -> bool {
        device::is_tablet(self.viewport_width())
    }

    /// Returns `true` if the viewport is at least 1024 wide.
    #[must_use]
    pub fn is_desktop(&self) -> bool {
        device::is_desktop(self.viewport_width())
    }

    /// Returns `true` if the viewport is at least 1366 wide.
    ///
    /// Every TV-sized viewport is also desktop-sized; see
    /// [`device`](crate::device).
    #[must_use]
    pub fn is_tv(&self) -> bool {
        device::is_tv(self.viewport_width())
    }

    /// Returns every device class matching the current viewport.
    pub fn device_classes(&self) -> impl Iterator<Item = DeviceClass> {
        DeviceClass::matching(self.viewport_width())
    }

    /// Classifies the current viewport into a [`Breakpoint`].
    #[must_use]
    pub fn determine_breakpoint(&self) -> Breakpoint {
        Breakpoint::classify(self.viewport_width())
    }

    // -- Components ---------------------------------------------------------

    /// Returns handles to every component created here that is still alive.
    #[must_use]
    pub fn components(&self) -> Vec<Component<H>> {
        self.components.iter().filter_map(Component::upgrade).collect()
    }

    /// Returns the number of components created here that are still alive.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

impl<H: Host + 'static> Responsive<H> {
    /// Creates a component on the first element matching `selector` and
    /// initializes it (see [`Component::init`]).
    ///
    /// `on_init` and the handler for the current breakpoint have run by the
    /// time this returns. Calling [`Component::init`] again is a no-op until
    /// the component is destroyed.
    ///
    /// # Errors
    ///
    /// - [`ResponsiveError::ElementNotFound`] if nothing matches. The miss is
    ///   also reported to the tracer, since it usually means the element has
    ///   not been mounted yet rather than a programming error.
    /// - [`ResponsiveError::Host`] if the host cannot deliver resize
    ///   notifications. The component is not registered.
    pub fn create_component(
        &mut self,
        selector: &str,
        options: ComponentOptions<H>,
    ) -> Result<Component<H>, ResponsiveError> {
        let Some(element) = self.host.query_selector(selector) else {
            self.tracer
                .element_not_found(&ElementNotFoundEvent { selector });
            return Err(ResponsiveError::ElementNotFound {
                selector: String::from(selector),
            });
        };

        let id = ComponentId(self.next_component);
        self.next_component = self.next_component.wrapping_add(1);

        let component = Component::new(
            id,
            String::from(selector),
            element,
            options,
            Rc::clone(&self.host),
            self.tracer.clone(),
        );
        self.tracer.component_created(&ComponentCreatedEvent {
            component: id,
            selector,
        });
        component.init()?;

        self.components.retain(|weak| weak.strong_count() > 0);
        self.components.push(component.downgrade());
        Ok(component)
    }
}
