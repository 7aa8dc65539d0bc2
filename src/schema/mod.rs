//! Schema layer: entity definitions, validated instances, construction.
//!
//! This module knows nothing about output. It owns:
//! - EntityKind + the read-only definition registry
//! - AttrDef / EntityDef (types, constraints, presence)
//! - Instance and its values
//! - construct (raw JSON map -> Instance | ValidationError)

pub mod attr;
pub mod constraint;
pub mod construct;
pub mod error;
pub mod kind;
pub mod value;

pub use attr::{AttrDef, AttrType, EntityDef, MapOf, Presence, Scalar};
pub use constraint::{Constraint, Format};
pub use construct::{construct, construct_value};
pub use error::ValidationError;
pub use kind::EntityKind;
pub use value::{AttrValue, Instance, Literal};
