//! Text writers for the serialized block tree.

pub mod hcl;

pub use hcl::render_hcl;

use crate::serialize::{Block, Node};

/// Pretty-printed JSON dump of the tree (useful for feeding other writers).
pub fn render_json(root: &Block) -> crate::Result<String> {
    let mut json = serde_json::to_string_pretty(&Node::Block(root.clone()))?;
    json.push('\n');
    Ok(json)
}
