//! Root margin parsing
//!
//! Mirrors the CSS margin shorthand accepted by `IntersectionObserver`:
//! one to four lengths in `px` or `%` (a bare `0` is allowed).

use std::fmt;
use std::str::FromStr;

use crate::error::EnhanceError;

/// A single margin length
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl MarginLength {
    fn parse(token: &str) -> Option<Self> {
        if token == "0" {
            return Some(MarginLength::Px(0.0));
        }
        let (number, unit): (&str, fn(f64) -> MarginLength) =
            if let Some(n) = token.strip_suffix("px") {
                (n, MarginLength::Px)
            } else if let Some(n) = token.strip_suffix('%') {
                (n, MarginLength::Percent)
            } else {
                return None;
            };
        let value: f64 = number.parse().ok()?;
        value.is_finite().then(|| unit(value))
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginLength::Px(v) => write!(f, "{}px", v),
            MarginLength::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Grows (positive) or shrinks (negative) the viewport used for visibility checks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl Default for RootMargin {
    fn default() -> Self {
        let zero = MarginLength::Px(0.0);
        Self {
            top: zero,
            right: zero,
            bottom: zero,
            left: zero,
        }
    }
}

impl RootMargin {
    /// Canonical four-value CSS form
    pub fn to_css(&self) -> String {
        format!("{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

impl FromStr for RootMargin {
    type Err = EnhanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EnhanceError::InvalidRootMargin(s.to_string());
        let values = s
            .split_whitespace()
            .map(|t| MarginLength::parse(t).ok_or_else(invalid))
            .collect::<Result<Vec<_>, _>>()?;

        // CSS shorthand expansion
        let (top, right, bottom, left) = match values.as_slice() {
            [a] => (*a, *a, *a, *a),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            _ => return Err(invalid()),
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
