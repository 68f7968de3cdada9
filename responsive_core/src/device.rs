// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Four-way device classification.
//!
//! Each [`DeviceClass`] is an independent width predicate. The predicates are
//! **not** a partition: [`Desktop`](DeviceClass::Desktop) and
//! [`Tv`](DeviceClass::Tv) overlap from 1366 upwards, so a viewport 1400 wide
//! is both. An `if is_desktop() {..} else if is_tv() {..}` chain therefore
//! never reaches the TV arm; test TV first if that matters.
//!
//! For a partition, use [`Breakpoint`](crate::breakpoint::Breakpoint).

use core::fmt;

/// Largest viewport width classified as [`DeviceClass::Mobile`].
pub const MOBILE_MAX_WIDTH: f64 = 767.0;

/// Smallest viewport width classified as [`DeviceClass::Tablet`].
pub const TABLET_MIN_WIDTH: f64 = 768.0;

/// Largest viewport width classified as [`DeviceClass::Tablet`].
pub const TABLET_MAX_WIDTH: f64 = 1023.0;

/// Smallest viewport width classified as [`DeviceClass::Desktop`].
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

/// Smallest viewport width classified as [`DeviceClass::Tv`].
pub const TV_MIN_WIDTH: f64 = 1366.0;

/// Returns `true` if `width <= 767`.
#[must_use]
pub fn is_mobile(width: f64) -> bool {
    width <= MOBILE_MAX_WIDTH
}

/// Returns `true` if `768 <= width <= 1023`.
#[must_use]
pub fn is_tablet(width: f64) -> bool {
    (TABLET_MIN_WIDTH..=TABLET_MAX_WIDTH).contains(&width)
}

/// Returns `true` if `width >= 1024`.
#[must_use]
pub fn is_desktop(width: f64) -> bool {
    width >= DESKTOP_MIN_WIDTH
}

/// Returns `true` if `width >= 1366`.
#[must_use]
pub fn is_tv(width: f64) -> bool {
    width >= TV_MIN_WIDTH
}

/// A device category defined by a viewport-width range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Width of 767 or less.
    Mobile,
    /// Width in `768..=1023`.
    Tablet,
    /// Width of 1024 or more.
    Desktop,
    /// Width of 1366 or more. Overlaps [`Desktop`](Self::Desktop).
    Tv,
}

impl DeviceClass {
    /// All device classes, in the order their predicates are usually checked.
    pub const ALL: [Self; 4] = [Self::Mobile, Self::Tablet, Self::Desktop, Self::Tv];

    /// Evaluates this class's predicate against `width`.
    #[must_use]
    pub fn matches(self, width: f64) -> bool {
        match self {
            Self::Mobile => is_mobile(width),
            Self::Tablet => is_tablet(width),
            Self::Desktop => is_desktop(width),
            Self::Tv => is_tv(width),
        }
    }

    /// Returns every class whose predicate holds for `width`.
    pub fn matching(width: f64) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |class| class.matches(width))
    }

    /// Returns the CSS media query equivalent to this class's predicate.
    ///
    /// Useful for watching a class with
    /// [`Responsive::on_media_query_change`](crate::Responsive::on_media_query_change).
    #[must_use]
    pub const fn media_query(self) -> &'static str {
        match self {
            Self::Mobile => "(max-width: 767px)",
            Self::Tablet => "(min-width: 768px) and (max-width: 1023px)",
            Self::Desktop => "(min-width: 1024px)",
            Self::Tv => "(min-width: 1366px)",
        }
    }

    /// Returns the lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
            Self::Tv => "tv",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
