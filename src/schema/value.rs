//! Validated values.
//!
//! `Literal` is the leaf data that ends up in output attributes. `AttrValue`
//! adds nested entities on top of it. `Instance` holds only the attributes that
//! are set: an omitted attribute is simply not there, which is different from
//! one that is present with `false`, `""` or `[]`.

use crate::schema::EntityKind;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Integer(i64),
    /// Only produced for free-form (`Any`) map values.
    Float(f64),
    Bool(bool),
    Array(Vec<Literal>),
    /// Insertion-ordered.
    Map(Vec<(String, Literal)>),
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Literal::String(v.to_string())
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Literal::Integer(v)
    }
}

impl From<i32> for Literal {
    fn from(v: i32) -> Self {
        Literal::Integer(v.into())
    }
}

impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Literal::Bool(v)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{:?}", s),
            Literal::Integer(n) => write!(f, "{}", n),
            Literal::Float(x) => write!(f, "{}", x),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Literal::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Literal::String(s) => serializer.serialize_str(s),
            Literal::Integer(n) => serializer.serialize_i64(*n),
            Literal::Float(x) => serializer.serialize_f64(*x),
            Literal::Bool(b) => serializer.serialize_bool(*b),
            Literal::Array(items) => items.serialize(serializer),
            Literal::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Literal(Literal),
    Entity(Box<Instance>),
    Entities(Vec<Instance>),
}

/// A validated entity. Only `construct` builds these.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    kind: EntityKind,
    attrs: Vec<(&'static str, AttrValue)>,
}

impl Instance {
    pub(crate) fn new(kind: EntityKind, attrs: Vec<(&'static str, AttrValue)>) -> Self {
        Self { kind, attrs }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn literal(&self, name: &str) -> Option<&Literal> {
        match self.get(name)? {
            AttrValue::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// Identity value, for kinds that declare an `id` attribute.
    pub fn id(&self) -> Option<&str> {
        match self.literal("id")? {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    /// Set attributes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> {
        self.attrs.iter().map(|(n, v)| (*n, v))
    }
}
