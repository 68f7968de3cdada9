// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive component lifecycle and breakpoint transitions.

use std::cell::RefCell;
use std::rc::Rc;

use responsive_core::component::ComponentId;
use responsive_core::error::HostError;
use responsive_core::{Breakpoint, ComponentOptions, Responsive, ResponsiveError};
use responsive_harness::{MockElement, MockHost};

type Log = Rc<RefCell<Vec<&'static str>>>;

/// Options that log every hook and breakpoint handler by name.
fn logging_options(log: &Log) -> ComponentOptions<MockHost> {
    let entry = |name: &'static str| {
        let log = Rc::clone(log);
        move |_: &responsive_core::Component<MockHost>| log.borrow_mut().push(name)
    };
    ComponentOptions::default()
        .with_breakpoint(Breakpoint::Mobile, entry("mobile"))
        .with_breakpoint(Breakpoint::Tablet, entry("tablet"))
        .with_breakpoint(Breakpoint::Desktop, entry("desktop"))
        .with_resize(entry("resize"))
        .with_init(entry("init"))
        .with_destroy(entry("destroy"))
}

fn setup(width: f64) -> Responsive<MockHost> {
    Responsive::new(MockHost::new(width).with_elements(["#app"]))
}

#[test]
fn mobile_tablet_walkthrough() {
    let mut responsive = setup(500.0);
    let log = Log::default();
    let component = responsive
        .create_component("#app", logging_options(&log))
        .expect("element exists");
    assert_eq!(*log.borrow(), ["init", "mobile"], "creation initializes");
    assert_eq!(component.current_breakpoint(), Some(Breakpoint::Mobile));

    log.borrow_mut().clear();
    responsive.host().resize_to(900.0);
    assert_eq!(*log.borrow(), ["resize", "tablet"]);

    log.borrow_mut().clear();
    responsive.host().resize_to(950.0);
    assert_eq!(*log.borrow(), ["resize"]);
    assert_eq!(component.current_breakpoint(), Some(Breakpoint::Tablet));
}

#[test]
fn handler_fires_once_per_breakpoint_entered() {
    let mut responsive = setup(1024.0);
    let log = Log::default();
    let _component = responsive
        .create_component("#app", logging_options(&log))
        .expect("element exists");
    for width in [1100.0, 1200.0, 1366.0, 2000.0] {
        responsive.host().resize_to(width);
    }
    let desktops = log.borrow().iter().filter(|e| **e == "desktop").count();
    assert_eq!(desktops, 1);
    let resizes = log.borrow().iter().filter(|e| **e == "resize").count();
    assert_eq!(resizes, 4);
}

#[test]
fn leaving_a_breakpoint_runs_only_the_entering_handler() {
    let mut responsive = setup(1200.0);
    let log = Log::default();
    let _component = responsive
        .create_component("#app", logging_options(&log))
        .expect("element exists");
    log.borrow_mut().clear();

    responsive.host().resize_to(500.0);
    assert_eq!(*log.borrow(), ["resize", "mobile"]);
}

#[test]
fn resize_without_width_change_still_runs_on_resize() {
    let mut responsive = setup(800.0);
    let log = Log::default();
    let _component = responsive
        .create_component("#app", logging_options(&log))
        .expect("element exists");
    log.borrow_mut().clear();

    responsive.host().fire_resize();
    assert_eq!(*log.borrow(), ["resize"]);
}

#[test]
fn destroy_silences_and_init_rearms() {
    let mut responsive = setup(500.0);
    let log = Log::default();
    let component = responsive
        .create_component("#app", logging_options(&log))
        .expect("element exists");
    component.destroy();
    assert!(!component.is_active());
    assert_eq!(responsive.host().resize_listener_count(), 0);
    log.borrow_mut().clear();

    responsive.host().resize_to(900.0);
    responsive.host().resize_to(1200.0);
    assert!(log.borrow().is_empty(), "destroyed component must not react");
    // The breakpoint is frozen while idle.
    assert_eq!(component.current_breakpoint(), Some(Breakpoint::Mobile));

    component.init().expect("resize events available");
    assert_eq!(*log.borrow(), ["init", "desktop"]);
    log.borrow_mut().clear();
    responsive.host().resize_to(900.0);
    assert_eq!(*log.borrow(), ["resize", "tablet"]);
}

#[test]
fn reinit_in_same_breakpoint_does_not_rerun_handler() {
    let mut responsive = setup(500.0);
    let log = Log::default();
    let component = responsive
        .create_component("#app", logging_options(&log))
        .expect("element exists");
    component.destroy();
    component.init().expect("resize events available");
    assert_eq!(*log.borrow(), ["init", "mobile", "destroy", "init"]);
}

#[test]
fn init_after_creation_subscribes_once() {
    let mut responsive = setup(500.0);
    let log = Log::default();
    let component = responsive
        .create_component("#app", logging_options(&log))
        .expect("element exists");
    component.init().expect("already active");
    assert_eq!(responsive.host().resize_listener_count(), 1);
    assert_eq!(*log.borrow(), ["init", "mobile"]);

    log.borrow_mut().clear();
    responsive.host().resize_to(900.0);
    assert_eq!(*log.borrow(), ["resize", "tablet"]);
}

#[test]
fn double_destroy_runs_hook_once() {
    let mut responsive = setup(500.0);
    let log = Log::default();
    let component = responsive
        .create_component("#app", logging_options(&log))
        .expect("element exists");
    component.destroy();
    component.destroy();
    let destroys = log.borrow().iter().filter(|e| **e == "destroy").count();
    assert_eq!(destroys, 1);
}

#[test]
fn missing_breakpoint_handlers_are_skipped() {
    let mut responsive = setup(500.0);
    let component = responsive
        .create_component("#app", ComponentOptions::default())
        .expect("element exists");
    responsive.host().resize_to(900.0);
    assert_eq!(component.current_breakpoint(), Some(Breakpoint::Tablet));
}

#[test]
fn missing_element_is_an_error_not_a_panic() {
    let mut responsive = setup(500.0);
    let err = responsive
        .create_component(".nonexistent", ComponentOptions::default())
        .expect_err("nothing matches");
    assert_eq!(
        err,
        ResponsiveError::ElementNotFound {
            selector: ".nonexistent".into()
        }
    );
    assert_eq!(responsive.component_count(), 0);
}

#[test]
fn element_is_resolved_once() {
    let mut responsive = setup(500.0);
    let component = responsive
        .create_component("#app", ComponentOptions::default())
        .expect("element exists");
    responsive.host().remove_element("#app");
    assert_eq!(
        component.element(),
        &MockElement {
            selector: "#app".into()
        }
    );
    assert_eq!(component.selector(), "#app");
}

#[test]
fn handlers_receive_their_component() {
    let mut responsive = setup(500.0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _component = responsive
        .create_component(
            "#app",
            ComponentOptions::default().with_breakpoint(Breakpoint::Mobile, move |c: &responsive_core::Component<MockHost>| {
                sink.borrow_mut()
                    .push((c.id(), c.current_breakpoint(), c.element().selector.clone()));
            }),
        )
        .expect("element exists");
    assert_eq!(
        *seen.borrow(),
        [(ComponentId(0), Some(Breakpoint::Mobile), String::from("#app"))]
    );
}

#[test]
fn registry_tracks_live_components() {
    let mut responsive = Responsive::new(MockHost::new(500.0).with_elements(["#a", "#b"]));
    let a = responsive
        .create_component("#a", ComponentOptions::default())
        .expect("element exists");
    let b = responsive
        .create_component("#b", ComponentOptions::default())
        .expect("element exists");
    assert_ne!(a.id(), b.id());
    assert_eq!(responsive.component_count(), 2);

    let listed = responsive.components();
    assert!(listed[0].ptr_eq(&a));
    assert!(listed[1].ptr_eq(&b));
    drop(listed);

    // Destroying does not deregister.
    a.destroy();
    assert_eq!(responsive.component_count(), 2);

    drop(b);
    assert_eq!(responsive.component_count(), 1);
}

#[test]
fn dropping_an_active_component_unsubscribes() {
    let mut responsive = setup(500.0);
    let component = responsive
        .create_component("#app", ComponentOptions::default())
        .expect("element exists");
    assert_eq!(responsive.host().resize_listener_count(), 1);
    drop(component);
    assert_eq!(responsive.host().resize_listener_count(), 0);
}

#[test]
fn components_outlive_the_coordinator() {
    let host = Rc::new(MockHost::new(500.0).with_elements(["#app"]));
    let log = Log::default();
    let _component = {
        let mut responsive = Responsive::with_shared_host(Rc::clone(&host));
        responsive
            .create_component("#app", logging_options(&log))
            .expect("element exists")
    };
    host.resize_to(900.0);
    assert_eq!(*log.borrow(), ["init", "mobile", "resize", "tablet"]);
}

#[test]
fn two_components_transition_independently() {
    let mut responsive = Responsive::new(MockHost::new(500.0).with_elements(["#a", "#b"]));
    let log_a = Log::default();
    let log_b = Log::default();
    let _a = responsive
        .create_component("#a", logging_options(&log_a))
        .expect("element exists");
    responsive.host().resize_to(900.0);
    let _b = responsive
        .create_component("#b", logging_options(&log_b))
        .expect("element exists");
    responsive.host().resize_to(1100.0);

    assert_eq!(
        *log_a.borrow(),
        ["init", "mobile", "resize", "tablet", "resize", "desktop"]
    );
    assert_eq!(*log_b.borrow(), ["init", "tablet", "resize", "desktop"]);
}

#[test]
fn creation_runs_init_and_entering_handler_then_follows_resizes() {
    let mut responsive = setup(500.0);
    let log = Log::default();
    let component = responsive
        .create_component("#app", logging_options(&log))
        .expect("element exists");
    assert!(component.is_active());
    assert_eq!(component.current_breakpoint(), Some(Breakpoint::Mobile));
    assert_eq!(*log.borrow(), ["init", "mobile"]);
    assert_eq!(responsive.host().resize_listener_count(), 1);

    responsive.host().resize_to(900.0);
    assert_eq!(*log.borrow(), ["init", "mobile", "resize", "tablet"]);
}

#[test]
fn refused_resize_subscription_fails_creation() {
    let mut responsive = setup(500.0);
    responsive.host().refuse_resize_watches(true);
    let log = Log::default();
    let err = responsive
        .create_component("#app", logging_options(&log))
        .expect_err("resize events unavailable");
    assert_eq!(
        err,
        ResponsiveError::Host(HostError::Unavailable("resize events"))
    );
    assert_eq!(responsive.component_count(), 0);
    assert_eq!(responsive.host().resize_listener_count(), 0);
    // on_init and classification ran before the subscription was refused.
    assert_eq!(*log.borrow(), ["init", "mobile"]);

    responsive.host().refuse_resize_watches(false);
    let component = responsive
        .create_component("#app", ComponentOptions::default())
        .expect("resize events available again");
    assert!(component.is_active());
    assert_eq!(responsive.component_count(), 1);
}
