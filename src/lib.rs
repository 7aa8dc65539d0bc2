//! Typed, validated Nomad job descriptions rendered as job files.
//!
//! Flow: raw JSON -> `stanza::Job` (validated) -> `serialize::serialize`
//! (block tree) -> `render` (HCL text).

pub mod render;
pub mod schema;
pub mod serialize;
pub mod stanza;

pub type Result<T> = anyhow::Result<T>;

pub use schema::{EntityKind, Instance, ValidationError, construct};
pub use serialize::{Block, Node, serialize};
pub use stanza::Job;
