//! Per-attribute value constraints.
//!
//! A constraint only ever looks at a single coerced scalar:
//! - `Range` applies to integers (inclusive bounds, either side optional)
//! - `Format` and `OneOf` apply to strings
//!
//! The fixed patterns are compiled once and shared process-wide.

use crate::schema::{AttrType, Literal, Scalar};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// One or more `<number>[.<number>]<unit>` groups, e.g. "5s", "1.5h10m".
/// ASCII digits only; `\d` would also take other scripts' digits.
static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(([0-9]+\.)?[0-9]+[smh])+$").expect("duration pattern compiles")
});

/// Unix permission bits, e.g. "644".
static FILE_MODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-7]{3}$").expect("file mode pattern compiles"));

#[derive(Debug, Clone)]
pub enum Format {
    Duration,
    FileMode,
    /// Caller-supplied pattern, matched as-is (anchor it yourself).
    Pattern(Regex),
}

impl Format {
    pub fn is_match(&self, s: &str) -> bool {
        match self {
            Format::Duration => DURATION.is_match(s),
            Format::FileMode => FILE_MODE.is_match(s),
            Format::Pattern(re) => re.is_match(s),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Constraint {
    Range { min: Option<i64>, max: Option<i64> },
    Format(Format),
    OneOf(&'static [&'static str]),
}

impl Constraint {
    /// Whether this constraint can ever see a value of type `ty`.
    pub fn applies_to(&self, ty: AttrType) -> bool {
        match self {
            Constraint::Range { .. } => {
                matches!(ty, AttrType::Scalar(Scalar::Int | Scalar::CoercibleInt))
            }
            Constraint::Format(_) | Constraint::OneOf(_) => {
                matches!(ty, AttrType::Scalar(Scalar::Str | Scalar::CoercibleStr))
            }
        }
    }

    /// Check a coerced value. Values the constraint does not apply to pass.
    pub fn allows(&self, value: &Literal) -> bool {
        match (self, value) {
            (Constraint::Range { min, max }, Literal::Integer(n)) => {
                min.is_none_or(|lo| *n >= lo) && max.is_none_or(|hi| *n <= hi)
            }
            (Constraint::Format(format), Literal::String(s)) => format.is_match(s),
            (Constraint::OneOf(allowed), Literal::String(s)) => allowed.contains(&s.as_str()),
            _ => true,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Range {
                min: Some(lo),
                max: Some(hi),
            } => write!(f, "range [{}, {}]", lo, hi),
            Constraint::Range {
                min: Some(lo),
                max: None,
            } => write!(f, ">= {}", lo),
            Constraint::Range {
                min: None,
                max: Some(hi),
            } => write!(f, "<= {}", hi),
            Constraint::Range {
                min: None,
                max: None,
            } => write!(f, "any integer"),
            Constraint::Format(Format::Duration) => write!(f, "duration format"),
            Constraint::Format(Format::FileMode) => write!(f, "file mode format"),
            Constraint::Format(Format::Pattern(re)) => write!(f, "format /{}/", re.as_str()),
            Constraint::OneOf(allowed) => write!(f, "one of [{}]", allowed.join(", ")),
        }
    }
}
