// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Three-way breakpoint classification.
//!
//! Responsive components switch behavior between three named width ranges.
//! Unlike the [`device`](crate::device) predicates these ranges form a
//! partition: every viewport width falls in exactly one [`Breakpoint`].
//!
//! ```text
//!   0 ─────────── 768 ─────────── 1024 ─────────────►
//!        Mobile          Tablet           Desktop
//! ```

use core::fmt;

/// Smallest viewport width (in CSS pixels) classified as [`Breakpoint::Tablet`].
pub const TABLET_MIN_WIDTH: f64 = 768.0;

/// Smallest viewport width (in CSS pixels) classified as [`Breakpoint::Desktop`].
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

/// A named viewport-width range used to select component behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    /// Width below 768.
    Mobile,
    /// Width in `768..1024`.
    Tablet,
    /// Width of 1024 or more.
    Desktop,
}

impl Breakpoint {
    /// All breakpoints, narrowest first.
    pub const ALL: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    /// Classifies a viewport width.
    ///
    /// Widths that are not a number (which no host reports) classify as
    /// [`Mobile`](Self::Mobile), like any width below the tablet threshold.
    #[must_use]
    pub fn classify(width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            Self::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Mobile
        }
    }

    /// Returns `true` if `width` falls in this breakpoint's range.
    #[must_use]
    pub fn contains(self, width: f64) -> bool {
        Self::classify(width) == self
    }

    /// Returns the lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(Breakpoint::classify(0.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(767.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(767.5), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1023.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1024.0), Breakpoint::Desktop);
    }

    #[test]
    fn wide_viewports_stay_desktop() {
        // There is no fourth range: 1366 and beyond are still desktop.
        assert_eq!(Breakpoint::classify(1366.0), Breakpoint::Desktop);
        assert_eq!(Breakpoint::classify(3840.0), Breakpoint::Desktop);
    }

    #[test]
    fn contains_matches_exactly_one() {
        for width in [0.0, 500.0, 767.0, 768.0, 900.0, 1023.0, 1024.0, 2000.0] {
            let hits = Breakpoint::ALL
                .iter()
                .filter(|bp| bp.contains(width))
                .count();
            assert_eq!(hits, 1, "width {width} must hit exactly one breakpoint");
        }
    }

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(alloc::format!("{}", Breakpoint::Tablet), "tablet");
        assert_eq!(Breakpoint::Desktop.as_str(), "desktop");
    }
}
