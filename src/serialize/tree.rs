use crate::schema::Literal;
use serde::Serialize;

/// One node of the output tree handed to a writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Block(Block),
    Attribute(Attribute),
}

/// A stanza: `name "label" { ... }`. At most two labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub name: String,
    pub labels: Vec<String>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: Literal,
}

impl Block {
    pub fn new(name: &str, label: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            labels: label.map(str::to_string).into_iter().collect(),
            children: Vec::new(),
        }
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.children.iter().filter_map(|n| match n {
            Node::Block(b) => Some(b),
            Node::Attribute(_) => None,
        })
    }

    pub fn attribute(&self, name: &str) -> Option<&Literal> {
        self.children.iter().find_map(|n| match n {
            Node::Attribute(a) if a.name == name => Some(&a.value),
            _ => None,
        })
    }
}
