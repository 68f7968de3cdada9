// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive components.
//!
//! A [`Component`] binds one host element to a table of per-[`Breakpoint`]
//! handlers plus three lifecycle hooks. Components are created, and
//! initialized, by
//! [`Responsive::create_component`](crate::Responsive::create_component):
//!
//! ```text
//!             init(): on_init, classify, subscribe
//!   Idle ─────────────────────────────────────► Active ◄───────────┐
//!    ▲                                             │  resize:       │
//!    │     destroy(): on_destroy, unsubscribe      │  on_resize,    │
//!    └─────────────────────────────────────────────┘  reclassify ───┘
//! ```
//!
//! A breakpoint handler runs once per contiguous stretch of time the viewport
//! spends in its breakpoint. Leaving a breakpoint runs nothing. The current
//! breakpoint survives `destroy()`, so re-initializing in the same breakpoint
//! does not rerun its handler.
//!
//! While `init()` or `destroy()` is running its hooks the component is in
//! transition: [`Component::is_active`] is `false`, and nested `init()` or
//! `destroy()` calls from those hooks are ignored. No internal borrow is held
//! while user code runs.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::breakpoint::Breakpoint;
use crate::error::ResponsiveError;
use crate::host::Host;
use crate::trace::{
    BreakpointChangeEvent, LifecycleEvent, LifecyclePhase, ResizeEvent, Tracer,
};

/// A component callback. Receives the component it is registered on.
pub type Handler<H> = Rc<dyn Fn(&Component<H>)>;

/// Coordinator-assigned component identity, used in trace events.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub u32);

impl fmt::Debug for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentId({})", self.0)
    }
}

/// Per-breakpoint handlers. A `None` entry means "do nothing on entering".
pub struct BreakpointHandlers<H: Host> {
    /// Runs on entering [`Breakpoint::Mobile`].
    pub mobile: Option<Handler<H>>,
    /// Runs on entering [`Breakpoint::Tablet`].
    pub tablet: Option<Handler<H>>,
    /// Runs on entering [`Breakpoint::Desktop`].
    pub desktop: Option<Handler<H>>,
}

impl<H: Host> BreakpointHandlers<H> {
    /// Returns the handler for `breakpoint`, if one is set.
    #[must_use]
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&Handler<H>> {
        match breakpoint {
            Breakpoint::Mobile => self.mobile.as_ref(),
            Breakpoint::Tablet => self.tablet.as_ref(),
            Breakpoint::Desktop => self.desktop.as_ref(),
        }
    }

    /// Replaces the handler for `breakpoint`.
    pub fn set(&mut self, breakpoint: Breakpoint, handler: Option<Handler<H>>) {
        let slot = match breakpoint {
            Breakpoint::Mobile => &mut self.mobile,
            Breakpoint::Tablet => &mut self.tablet,
            Breakpoint::Desktop => &mut self.desktop,
        };
        *slot = handler;
    }
}

impl<H: Host> Default for BreakpointHandlers<H> {
    fn default() -> Self {
        Self {
            mobile: None,
            tablet: None,
            desktop: None,
        }
    }
}

impl<H: Host> Clone for BreakpointHandlers<H> {
    fn clone(&self) -> Self {
        Self {
            mobile: self.mobile.clone(),
            tablet: self.tablet.clone(),
            desktop: self.desktop.clone(),
        }
    }
}

impl<H: Host> fmt::Debug for BreakpointHandlers<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakpointHandlers")
            .field("mobile", &self.mobile.is_some())
            .field("tablet", &self.tablet.is_some())
            .field("desktop", &self.desktop.is_some())
            .finish()
    }
}

/// Component configuration.
///
/// Every field defaults to `None`. Merge your own values over the defaults
/// with struct-update syntax or the `with_*` builder methods:
///
/// ```rust,ignore
/// let options = ComponentOptions::default()
///     .with_breakpoint(Breakpoint::Mobile, |c| collapse_menu(c.element()))
///     .with_resize(|c| relayout(c.element()));
/// ```
pub struct ComponentOptions<H: Host> {
    /// Handlers run on entering each breakpoint.
    pub breakpoints: BreakpointHandlers<H>,
    /// Runs on every resize notification while active, before
    /// reclassification.
    pub on_resize: Option<Handler<H>>,
    /// Runs first in each [`Component::init`] that activates the component,
    /// before classification and before the resize listener is subscribed.
    pub on_init: Option<Handler<H>>,
    /// Runs first in each [`Component::destroy`] that deactivates the
    /// component, while the resize listener is still subscribed.
    pub on_destroy: Option<Handler<H>>,
}

impl<H: Host> ComponentOptions<H> {
    /// Sets the handler run on entering `breakpoint`.
    #[must_use]
    pub fn with_breakpoint(
        mut self,
        breakpoint: Breakpoint,
        handler: impl Fn(&Component<H>) + 'static,
    ) -> Self {
        self.breakpoints.set(breakpoint, Some(Rc::new(handler)));
        self
    }

    /// Sets the resize hook.
    #[must_use]
    pub fn with_resize(mut self, handler: impl Fn(&Component<H>) + 'static) -> Self {
        self.on_resize = Some(Rc::new(handler));
        self
    }

    /// Sets the init hook.
    #[must_use]
    pub fn with_init(mut self, handler: impl Fn(&Component<H>) + 'static) -> Self {
        self.on_init = Some(Rc::new(handler));
        self
    }

    /// Sets the destroy hook.
    #[must_use]
    pub fn with_destroy(mut self, handler: impl Fn(&Component<H>) + 'static) -> Self {
        self.on_destroy = Some(Rc::new(handler));
        self
    }
}

impl<H: Host> Default for ComponentOptions<H> {
    fn default() -> Self {
        Self {
            breakpoints: BreakpointHandlers::default(),
            on_resize: None,
            on_init: None,
            on_destroy: None,
        }
    }
}

impl<H: Host> Clone for ComponentOptions<H> {
    fn clone(&self) -> Self {
        Self {
            breakpoints: self.breakpoints.clone(),
            on_resize: self.on_resize.clone(),
            on_init: self.on_init.clone(),
            on_destroy: self.on_destroy.clone(),
        }
    }
}

impl<H: Host> fmt::Debug for ComponentOptions<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentOptions")
            .field("breakpoints", &self.breakpoints)
            .field("on_resize", &self.on_resize.is_some())
            .field("on_init", &self.on_init.is_some())
            .field("on_destroy", &self.on_destroy.is_some())
            .finish()
    }
}

enum Lifecycle<S> {
    Idle,
    /// `init()` is running its hooks.
    Starting,
    Active(S),
    /// `destroy()` is running its hooks; the subscription is held by the
    /// caller until they return.
    Stopping,
}

pub(crate) struct ComponentInner<H: Host> {
    id: ComponentId,
    selector: String,
    element: H::Element,
    options: ComponentOptions<H>,
    host: Rc<H>,
    current: Cell<Option<Breakpoint>>,
    lifecycle: RefCell<Lifecycle<H::ResizeSubscription>>,
    tracer: Tracer,
}

impl<H: Host> Drop for ComponentInner<H> {
    fn drop(&mut self) {
        if let Lifecycle::Active(subscription) = self.lifecycle.replace(Lifecycle::Idle) {
            self.host.unwatch_resize(subscription);
        }
    }
}

/// A handle to a responsive component.
///
/// Handles are cheap to clone and all clones refer to the same component.
/// When the last handle is dropped an active component unsubscribes itself.
pub struct Component<H: Host> {
    inner: Rc<ComponentInner<H>>,
}

impl<H: Host> Clone for Component<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H: Host> fmt::Debug for Component<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("id", &self.inner.id)
            .field("selector", &self.inner.selector)
            .field("current_breakpoint", &self.inner.current.get())
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

impl<H: Host> Component<H> {
    pub(crate) fn new(
        id: ComponentId,
        selector: String,
        element: H::Element,
        options: ComponentOptions<H>,
        host: Rc<H>,
        tracer: Tracer,
    ) -> Self {
        Self {
            inner: Rc::new(ComponentInner {
                id,
                selector,
                element,
                options,
                host,
                current: Cell::new(None),
                lifecycle: RefCell::new(Lifecycle::Idle),
                tracer,
            }),
        }
    }

    pub(crate) fn downgrade(&self) -> Weak<ComponentInner<H>> {
        Rc::downgrade(&self.inner)
    }

    pub(crate) fn upgrade(weak: &Weak<ComponentInner<H>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    /// Returns the coordinator-assigned identity.
    #[must_use]
    pub fn id(&self) -> ComponentId {
        self.inner.id
    }

    /// Returns the selector the element was resolved from.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.inner.selector
    }

    /// Returns the element resolved at creation time.
    #[must_use]
    pub fn element(&self) -> &H::Element {
        &self.inner.element
    }

    /// Returns the component's configuration.
    #[must_use]
    pub fn options(&self) -> &ComponentOptions<H> {
        &self.inner.options
    }

    /// Returns the breakpoint computed most recently, or `None` before the
    /// first [`init`](Self::init).
    #[must_use]
    pub fn current_breakpoint(&self) -> Option<Breakpoint> {
        self.inner.current.get()
    }

    /// Returns `true` once [`init`](Self::init) has subscribed the resize
    /// listener, until [`destroy`](Self::destroy) starts.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(*self.inner.lifecycle.borrow(), Lifecycle::Active(_))
    }

    /// Returns `true` if both handles refer to the same component.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Destroys the component: runs `on_destroy`, then unsubscribes its
    /// resize listener.
    ///
    /// If the component is not active, this is a no-op. The current breakpoint
    /// is kept.
    pub fn destroy(&self) {
        let subscription = match self.inner.lifecycle.replace(Lifecycle::Stopping) {
            Lifecycle::Active(subscription) => subscription,
            other => {
                *self.inner.lifecycle.borrow_mut() = other;
                return;
            }
        };
        self.inner.tracer.lifecycle(&LifecycleEvent {
            component: self.inner.id,
            phase: LifecyclePhase::Destroy,
        });
        if let Some(hook) = self.inner.options.on_destroy.clone() {
            hook(self);
        }
        self.inner.host.unwatch_resize(subscription);
        *self.inner.lifecycle.borrow_mut() = Lifecycle::Idle;
    }

    /// Runs `on_resize`, then reclassifies.
    fn handle_resize(&self) {
        // Late deliveries after `destroy()` are dropped.
        if !self.is_active() {
            return;
        }
        self.inner.tracer.resize(&ResizeEvent {
            component: self.inner.id,
            width: self.inner.host.viewport_width(),
        });
        if let Some(hook) = self.inner.options.on_resize.clone() {
            hook(self);
        }
        if self.is_active() {
            self.refresh_breakpoint();
        }
    }

    /// Classifies the current width and runs the entering breakpoint's
    /// handler if the classification changed.
    fn refresh_breakpoint(&self) {
        let width = self.inner.host.viewport_width();
        let next = Breakpoint::classify(width);
        let previous = self.inner.current.get();
        if previous == Some(next) {
            return;
        }
        self.inner.current.set(Some(next));
        self.inner.tracer.breakpoint_change(&BreakpointChangeEvent {
            component: self.inner.id,
            previous,
            current: next,
            width,
        });
        if let Some(handler) = self.inner.options.breakpoints.get(next).cloned() {
            handler(self);
        }
    }
}

impl<H: Host + 'static> Component<H> {
    /// Initializes the component: runs `on_init`, classifies the viewport and
    /// runs the handler for the breakpoint it is in (unless that breakpoint is
    /// already current), then subscribes the resize listener.
    ///
    /// If the component is not idle, this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ResponsiveError::Host`] if the host cannot deliver resize
    /// notifications. The hooks have run by then; the component stays idle.
    pub fn init(&self) -> Result<(), ResponsiveError> {
        {
            let mut lifecycle = self.inner.lifecycle.borrow_mut();
            if !matches!(*lifecycle, Lifecycle::Idle) {
                return Ok(());
            }
            *lifecycle = Lifecycle::Starting;
        }
        self.inner.tracer.lifecycle(&LifecycleEvent {
            component: self.inner.id,
            phase: LifecyclePhase::Init,
        });

        if let Some(hook) = self.inner.options.on_init.clone() {
            hook(self);
        }
        self.refresh_breakpoint();

        let weak = self.downgrade();
        let subscribed = self.inner.host.watch_resize(Box::new(move || {
            if let Some(component) = Self::upgrade(&weak) {
                component.handle_resize();
            }
        }));
        match subscribed {
            Ok(subscription) => {
                *self.inner.lifecycle.borrow_mut() = Lifecycle::Active(subscription);
                Ok(())
            }
            Err(err) => {
                *self.inner.lifecycle.borrow_mut() = Lifecycle::Idle;
                Err(err.into())
            }
        }
    }
}
