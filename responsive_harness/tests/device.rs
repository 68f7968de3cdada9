// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device classifier predicates against a live host width.

use responsive_core::{Breakpoint, DeviceClass, Responsive};
use responsive_harness::{MediaQuery, MockHost};

#[test]
fn predicates_follow_the_host_width() {
    let responsive = Responsive::new(MockHost::new(500.0));
    assert!(responsive.is_mobile());
    assert!(!responsive.is_tablet());

    // No caching: each call reads the current width.
    responsive.host().resize_to(800.0);
    assert!(!responsive.is_mobile());
    assert!(responsive.is_tablet());

    responsive.host().resize_to(1100.0);
    assert!(responsive.is_desktop());
    assert!(!responsive.is_tv());
}

#[test]
fn tv_widths_are_also_desktop() {
    let responsive = Responsive::new(MockHost::new(1400.0));
    assert!(responsive.is_desktop());
    assert!(responsive.is_tv());
    assert_eq!(
        responsive.device_classes().collect::<Vec<_>>(),
        [DeviceClass::Desktop, DeviceClass::Tv]
    );

    // The classic else-if chain can never report TV.
    let label = if responsive.is_mobile() {
        "mobile"
    } else if responsive.is_tablet() {
        "tablet"
    } else if responsive.is_desktop() {
        "desktop"
    } else if responsive.is_tv() {
        "tv"
    } else {
        "unknown"
    };
    assert_eq!(label, "desktop");
}

#[test]
fn boundaries() {
    let cases = [
        (767.0, [true, false, false, false]),
        (768.0, [false, true, false, false]),
        (1023.0, [false, true, false, false]),
        (1024.0, [false, false, true, false]),
        (1365.0, [false, false, true, false]),
        (1366.0, [false, false, true, true]),
    ];
    for (width, expected) in cases {
        let responsive = Responsive::new(MockHost::new(width));
        let got = [
            responsive.is_mobile(),
            responsive.is_tablet(),
            responsive.is_desktop(),
            responsive.is_tv(),
        ];
        assert_eq!(got, expected, "width {width}");
    }
}

#[test]
fn media_queries_agree_with_predicates() {
    for width in [0.0, 500.0, 767.0, 768.0, 1000.0, 1023.0, 1024.0, 1365.0, 1366.0, 4000.0] {
        for class in DeviceClass::ALL {
            let query = MediaQuery::parse(class.media_query()).expect("device queries parse");
            assert_eq!(
                query.matches(width),
                class.matches(width),
                "{class} at width {width}"
            );
        }
    }
}

#[test]
fn determine_breakpoint_uses_three_way_partition() {
    let responsive = Responsive::new(MockHost::new(1400.0));
    assert_eq!(responsive.determine_breakpoint(), Breakpoint::Desktop);
    responsive.host().resize_to(767.0);
    assert_eq!(responsive.determine_breakpoint(), Breakpoint::Mobile);
}
