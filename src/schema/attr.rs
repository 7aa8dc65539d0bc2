//! Attribute and entity definitions.
//!
//! Definitions are plain data. The catalogue in `crate::stanza` declares them
//! with the builder methods below, e.g.
//!
//! ```text
//! AttrDef::integer("weight").range(-100, 100).default(50)
//! AttrDef::entities("check", EntityKind::Check).optional()
//! ```

use crate::schema::{Constraint, EntityKind, Format, Literal};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Str,
    /// String, number or boolean; stored as a string.
    CoercibleStr,
    Int,
    /// Integer or a string holding an integer.
    CoercibleInt,
    Bool,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scalar::Str => "string",
            Scalar::CoercibleStr => "string-like scalar",
            Scalar::Int => "integer",
            Scalar::CoercibleInt => "integer-like scalar",
            Scalar::Bool => "boolean",
        };
        f.write_str(s)
    }
}

/// Value type of a map attribute. Keys are always strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapOf {
    Scalar(Scalar),
    List(Scalar),
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    Scalar(Scalar),
    List(Scalar),
    Map(MapOf),
    Entity(EntityKind),
    Entities(EntityKind),
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrType::Scalar(s) => write!(f, "{}", s),
            AttrType::List(s) => write!(f, "array of {}", s),
            AttrType::Map(MapOf::Scalar(s)) => write!(f, "map of {}", s),
            AttrType::Map(MapOf::List(s)) => write!(f, "map of array of {}", s),
            AttrType::Map(MapOf::Any) => write!(f, "map"),
            AttrType::Entity(k) => write!(f, "{} block", k.name()),
            AttrType::Entities(k) => write!(f, "array of {} blocks", k.name()),
        }
    }
}

/// Whether an attribute may be left out, and what it becomes if it is.
#[derive(Debug, Clone, PartialEq)]
pub enum Presence {
    Required,
    Optional,
    Default(Literal),
}

#[derive(Debug, Clone)]
pub struct AttrDef {
    pub name: &'static str,
    pub ty: AttrType,
    pub constraint: Option<Constraint>,
    pub presence: Presence,
}

impl AttrDef {
    /// Required, unconstrained attribute.
    pub fn new(name: &'static str, ty: AttrType) -> Self {
        Self {
            name,
            ty,
            constraint: None,
            presence: Presence::Required,
        }
    }

    pub fn string(name: &'static str) -> Self {
        Self::new(name, AttrType::Scalar(Scalar::Str))
    }

    pub fn coercible_string(name: &'static str) -> Self {
        Self::new(name, AttrType::Scalar(Scalar::CoercibleStr))
    }

    pub fn integer(name: &'static str) -> Self {
        Self::new(name, AttrType::Scalar(Scalar::Int))
    }

    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, AttrType::Scalar(Scalar::Bool))
    }

    pub fn list(name: &'static str, of: Scalar) -> Self {
        Self::new(name, AttrType::List(of))
    }

    pub fn map(name: &'static str, of: MapOf) -> Self {
        Self::new(name, AttrType::Map(of))
    }

    pub fn entity(name: &'static str, kind: EntityKind) -> Self {
        Self::new(name, AttrType::Entity(kind))
    }

    pub fn entities(name: &'static str, kind: EntityKind) -> Self {
        Self::new(name, AttrType::Entities(kind))
    }

    pub fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    pub fn default(mut self, value: impl Into<Literal>) -> Self {
        self.presence = Presence::Default(value.into());
        self
    }

    pub fn range(self, min: i64, max: i64) -> Self {
        self.constrain(Constraint::Range {
            min: Some(min),
            max: Some(max),
        })
    }

    pub fn min(self, min: i64) -> Self {
        self.constrain(Constraint::Range {
            min: Some(min),
            max: None,
        })
    }

    pub fn format(self, format: Format) -> Self {
        self.constrain(Constraint::Format(format))
    }

    pub fn duration(self) -> Self {
        self.format(Format::Duration)
    }

    pub fn one_of(self, allowed: &'static [&'static str]) -> Self {
        self.constrain(Constraint::OneOf(allowed))
    }

    fn constrain(mut self, constraint: Constraint) -> Self {
        debug_assert!(
            self.constraint.is_none(),
            "attribute {} declares more than one constraint",
            self.name
        );
        debug_assert!(
            constraint.applies_to(self.ty),
            "attribute {} of type {} cannot take constraint {}",
            self.name,
            self.ty,
            constraint
        );
        self.constraint = Some(constraint);
        self
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }
}

/// Ordered attribute list of one entity kind.
#[derive(Debug, Clone)]
pub struct EntityDef {
    pub kind: EntityKind,
    pub attrs: Vec<AttrDef>,
}

impl EntityDef {
    pub fn define(kind: EntityKind, attrs: Vec<AttrDef>) -> Self {
        debug_assert!(
            attrs
                .iter()
                .enumerate()
                .all(|(i, a)| attrs[..i].iter().all(|b| b.name != a.name)),
            "duplicate attribute name in {}",
            kind.name()
        );
        Self { kind, attrs }
    }

    pub fn attr(&self, name: &str) -> Option<&AttrDef> {
        self.attrs.iter().find(|a| a.name == name)
    }

    /// Only an attribute literally named `id` counts as identity.
    pub fn has_identity(&self) -> bool {
        self.attr("id").is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_records_constraint_and_presence() {
        let attr = AttrDef::integer("weight").range(-100, 100).default(50);
        assert!(matches!(
            attr.constraint,
            Some(Constraint::Range {
                min: Some(-100),
                max: Some(100)
            })
        ));
        assert_eq!(attr.presence, Presence::Default(Literal::Integer(50)));
        assert!(!attr.is_required());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "cannot take constraint")]
    fn range_on_a_boolean_is_rejected() {
        let _ = AttrDef::boolean("sticky").min(0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "cannot take constraint")]
    fn enumeration_on_an_integer_is_rejected() {
        let _ = AttrDef::integer("count").one_of(&["1", "2"]);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "cannot take constraint")]
    fn duration_on_a_list_is_rejected() {
        let _ = AttrDef::list("args", Scalar::Str).duration();
    }
}
