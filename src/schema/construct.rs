//! Construction = validation.
//!
//! `construct` walks the definition of a kind in declaration order and, for
//! each attribute:
//! 1) rejects a missing required attribute
//! 2) substitutes the default, or leaves the attribute unset
//! 3) coerces the raw JSON value to the declared type
//! 4) applies the attribute's constraint
//! 5) recurses into nested entities, wrapping their errors with the path
//!
//! Any failure aborts the whole enclosing instance.

use crate::schema::{
    AttrDef, AttrType, AttrValue, EntityKind, Instance, Literal, MapOf, Presence, Scalar,
    ValidationError,
};
use serde_json::{Map, Value};
use std::num::IntErrorKind;

type Built<T> = std::result::Result<T, ValidationError>;

/// Validate a raw attribute map and build an instance of `kind`.
pub fn construct(kind: EntityKind, raw: &Map<String, Value>) -> Built<Instance> {
    let def = kind.definition();

    for key in raw.keys() {
        if def.attr(key).is_none() {
            tracing::warn!("ignoring unknown attribute `{}` on {}", key, kind);
        }
    }

    let mut attrs = Vec::new();
    for attr in &def.attrs {
        let value = match raw.get(attr.name) {
            None => match &attr.presence {
                Presence::Required => {
                    return Err(ValidationError::MissingRequiredAttribute {
                        name: attr.name.to_string(),
                    });
                }
                Presence::Default(d) => AttrValue::Literal(d.clone()),
                Presence::Optional => continue,
            },
            Some(v) => build_value(attr, v)?,
        };
        attrs.push((attr.name, value));
    }

    tracing::debug!("constructed {} ({} attributes set)", kind, attrs.len());
    Ok(Instance::new(kind, attrs))
}

/// Same as `construct`, for a raw value that should be an object.
pub fn construct_value(kind: EntityKind, raw: &Value) -> Built<Instance> {
    match raw {
        Value::Object(map) => construct(kind, map),
        _ => Err(ValidationError::TypeMismatch {
            name: kind.name().to_string(),
            expected: format!("{} block", kind.name()),
        }),
    }
}

/// Why a raw value could not be coerced.
enum Reject {
    Mismatch,
    /// An integer that does not fit in 64 bits; carries the raw text.
    OutOfRange(String),
}

const INTEGER_RANGE: &str = "64-bit integer range";

fn build_value(attr: &AttrDef, raw: &Value) -> Built<AttrValue> {
    let mismatch = || ValidationError::TypeMismatch {
        name: attr.name.to_string(),
        expected: attr.ty.to_string(),
    };
    let rejected = |reject: Reject| match reject {
        Reject::Mismatch => mismatch(),
        Reject::OutOfRange(value) => ValidationError::ConstraintViolation {
            name: attr.name.to_string(),
            rule: INTEGER_RANGE.to_string(),
            value,
        },
    };

    let literal = match attr.ty {
        AttrType::Entity(kind) => {
            let map = raw.as_object().ok_or_else(mismatch)?;
            let inner = construct(kind, map)
                .map_err(|e| ValidationError::nested(attr.name, None, e))?;
            return Ok(AttrValue::Entity(Box::new(inner)));
        }
        AttrType::Entities(kind) => {
            let items = raw.as_array().ok_or_else(mismatch)?;
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let map = item.as_object().ok_or_else(mismatch)?;
                let inner = construct(kind, map)
                    .map_err(|e| ValidationError::nested(attr.name, Some(i), e))?;
                out.push(inner);
            }
            return Ok(AttrValue::Entities(out));
        }
        AttrType::Scalar(scalar) => coerce(scalar, raw).map_err(rejected)?,
        AttrType::List(scalar) => coerce_list(scalar, raw).map_err(rejected)?,
        AttrType::Map(of) => coerce_map(of, raw).map_err(rejected)?,
    };

    if let Some(constraint) = &attr.constraint {
        if !constraint.allows(&literal) {
            return Err(ValidationError::ConstraintViolation {
                name: attr.name.to_string(),
                rule: constraint.to_string(),
                value: literal.to_string(),
            });
        }
    }

    Ok(AttrValue::Literal(literal))
}

fn coerce(scalar: Scalar, raw: &Value) -> Result<Literal, Reject> {
    match (scalar, raw) {
        (Scalar::Str | Scalar::CoercibleStr, Value::String(s)) => Ok(Literal::String(s.clone())),
        (Scalar::CoercibleStr, Value::Number(n)) => Ok(Literal::String(n.to_string())),
        (Scalar::CoercibleStr, Value::Bool(b)) => Ok(Literal::String(b.to_string())),
        (Scalar::Int | Scalar::CoercibleInt, Value::Number(n)) => match n.as_i64() {
            Some(i) => Ok(Literal::Integer(i)),
            None if n.is_u64() => Err(Reject::OutOfRange(n.to_string())),
            None => Err(Reject::Mismatch),
        },
        (Scalar::CoercibleInt, Value::String(s)) => parse_integer(s).map(Literal::Integer),
        (Scalar::Bool, Value::Bool(b)) => Ok(Literal::Bool(*b)),
        _ => Err(Reject::Mismatch),
    }
}

/// Integer text: surrounding whitespace, an optional sign, `_` between
/// digits, and `0x` / `0b` / `0o` / leading-`0` radix prefixes.
fn parse_integer(s: &str) -> Result<i64, Reject> {
    let t = s.trim();
    let (negative, body) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let body = body.to_ascii_lowercase();

    let (radix, digits) = if let Some(d) = body.strip_prefix("0x") {
        (16, d)
    } else if let Some(d) = body.strip_prefix("0b") {
        (2, d)
    } else if let Some(d) = body.strip_prefix("0o") {
        (8, d)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body.as_str())
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.chars().all(|c| c == '_' || c.is_ascii_alphanumeric())
    {
        return Err(Reject::Mismatch);
    }

    let mut cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if negative {
        cleaned.insert(0, '-');
    }
    i64::from_str_radix(&cleaned, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Reject::OutOfRange(format!("{:?}", s))
        }
        _ => Reject::Mismatch,
    })
}

fn coerce_list(scalar: Scalar, raw: &Value) -> Result<Literal, Reject> {
    let items = raw.as_array().ok_or(Reject::Mismatch)?;
    items
        .iter()
        .map(|item| coerce(scalar, item))
        .collect::<Result<Vec<_>, _>>()
        .map(Literal::Array)
}

fn coerce_map(of: MapOf, raw: &Value) -> Result<Literal, Reject> {
    let entries = raw.as_object().ok_or(Reject::Mismatch)?;
    let mut out = Vec::with_capacity(entries.len());
    for (k, v) in entries {
        let value = match of {
            MapOf::Scalar(scalar) => coerce(scalar, v)?,
            MapOf::List(scalar) => coerce_list(scalar, v)?,
            MapOf::Any => any(v).ok_or(Reject::Mismatch)?,
        };
        out.push((k.clone(), value));
    }
    Ok(Literal::Map(out))
}

/// Free-form value; everything but `null` is accepted.
fn any(raw: &Value) -> Option<Literal> {
    match raw {
        Value::Null => None,
        Value::Bool(b) => Some(Literal::Bool(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(Literal::Integer(i)),
            None => n.as_f64().map(Literal::Float),
        },
        Value::String(s) => Some(Literal::String(s.clone())),
        Value::Array(items) => items
            .iter()
            .map(any)
            .collect::<Option<Vec<_>>>()
            .map(Literal::Array),
        Value::Object(entries) => entries
            .iter()
            .map(|(k, v)| any(v).map(|v| (k.clone(), v)))
            .collect::<Option<Vec<_>>>()
            .map(Literal::Map),
    }
}
