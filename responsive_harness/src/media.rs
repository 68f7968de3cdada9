// Copyright 2026 the Responsive Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small width-only media-query evaluator.
//!
//! Supports what breakpoint code actually writes:
//!
//! - comma-separated alternatives (`a, b` matches if either does),
//! - an optional leading `only` or `not`,
//! - the media types `all`, `screen` and `print` (the mock is a screen),
//! - `(min-width: Npx)`, `(max-width: Npx)` and `(width: Npx)` joined by
//!   `and`.
//!
//! Anything else fails to parse, which [`MockHost`](crate::MockHost) reports
//! as an unsupported query.

use alloc::vec::Vec;

/// A parsed media query.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaQuery {
    alternatives: Vec<Conjunction>,
}

#[derive(Clone, Debug, PartialEq)]
struct Conjunction {
    negated: bool,
    /// `false` for media types a screen never has.
    screen: bool,
    features: Vec<WidthFeature>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum WidthFeature {
    Min(f64),
    Max(f64),
    Exact(f64),
}

impl WidthFeature {
    fn matches(self, width: f64) -> bool {
        match self {
            Self::Min(min) => width >= min,
            Self::Max(max) => width <= max,
            Self::Exact(exact) => width == exact,
        }
    }
}

impl Conjunction {
    fn matches(&self, width: f64) -> bool {
        let hit = self.screen && self.features.iter().all(|f| f.matches(width));
        hit != self.negated
    }
}

impl MediaQuery {
    /// Parses `query`, returning `None` if it uses anything unsupported.
    #[must_use]
    pub fn parse(query: &str) -> Option<Self> {
        let alternatives = query
            .split(',')
            .map(parse_conjunction)
            .collect::<Option<Vec<_>>>()?;
        Some(Self { alternatives })
    }

    /// Evaluates the query for a viewport `width` CSS pixels wide.
    #[must_use]
    pub fn matches(&self, width: f64) -> bool {
        self.alternatives.iter().any(|c| c.matches(width))
    }
}

fn parse_conjunction(part: &str) -> Option<Conjunction> {
    let mut conjunction = Conjunction {
        negated: false,
        screen: true,
        features: Vec::new(),
    };
    // `true` when the next item must be a type or feature rather than `and`.
    let mut want_operand = true;
    let mut first = true;
    let mut rest = part.trim();
    if rest.is_empty() {
        return None;
    }

    while !rest.is_empty() {
        if let Some(body) = rest.strip_prefix('(') {
            if !want_operand {
                return None;
            }
            let close = body.find(')')?;
            conjunction.features.push(parse_feature(&body[..close])?);
            rest = body[close + 1..].trim_start();
            want_operand = false;
        } else {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '(')
                .unwrap_or(rest.len());
            let word = &rest[..end];
            match word.to_ascii_lowercase().as_str() {
                "not" if first => conjunction.negated = true,
                "only" if first => {}
                "and" if !want_operand => want_operand = true,
                "all" | "screen" if want_operand => want_operand = false,
                "print" if want_operand => {
                    conjunction.screen = false;
                    want_operand = false;
                }
                _ => return None,
            }
            rest = rest[end..].trim_start();
        }
        first = false;
    }

    if want_operand {
        // Dangling `and`, or a bare `not`/`only`.
        return None;
    }
    Some(conjunction)
}

fn parse_feature(body: &str) -> Option<WidthFeature> {
    let (name, value) = body.split_once(':')?;
    let px = value.trim().strip_suffix("px")?.trim_end().parse::<f64>().ok()?;
    match name.trim().to_ascii_lowercase().as_str() {
        "min-width" => Some(WidthFeature::Min(px)),
        "max-width" => Some(WidthFeature::Max(px)),
        "width" => Some(WidthFeature::Exact(px)),
        _ => None,
    }
}
