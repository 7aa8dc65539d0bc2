//! Generic serializer: validated instance -> block/attribute tree.
//!
//! Nothing here is specific to a stanza. Structure comes from the schema:
//! - nested entity          => child block named after the attribute
//! - array of entities      => one sibling block per element, same name
//! - anything else          => attribute carrying the value as-is
//!
//! Blocks are labelled with the nested instance's `id` when its kind declares
//! one; `id` itself is never emitted as an attribute. Unset attributes are
//! skipped. Children follow schema declaration order, then element order.

pub mod tree;

pub use tree::{Attribute, Block, Node};

use crate::schema::{AttrValue, Instance};
use crate::stanza::Job;

/// Serialize a job into its root `job "<id>" { ... }` block.
pub fn serialize(job: &Job) -> Block {
    tracing::debug!("serializing job {}", job.id());
    serialize_entity("job", job.instance())
}

/// Serialize any instance as a block called `name`.
pub fn serialize_entity(name: &str, instance: &Instance) -> Block {
    let def = instance.kind().definition();
    let label = if def.has_identity() {
        instance.id()
    } else {
        None
    };
    let mut block = Block::new(name, label);

    for attr in &def.attrs {
        if attr.name == "id" {
            continue;
        }
        let Some(value) = instance.get(attr.name) else {
            continue;
        };

        match value {
            AttrValue::Entity(inner) => {
                block
                    .children
                    .push(Node::Block(serialize_entity(attr.name, inner)));
            }
            AttrValue::Entities(items) => {
                for item in items {
                    block
                        .children
                        .push(Node::Block(serialize_entity(attr.name, item)));
                }
            }
            AttrValue::Literal(literal) => {
                block.children.push(Node::Attribute(Attribute {
                    name: attr.name.to_string(),
                    value: literal.clone(),
                }));
            }
        }
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EntityKind, Literal, construct_value};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn attr(name: &str, value: impl Into<Literal>) -> Node {
        Node::Attribute(Attribute {
            name: name.to_string(),
            value: value.into(),
        })
    }

    fn block(name: &str, label: Option<&str>, children: Vec<Node>) -> Node {
        let mut b = Block::new(name, label);
        b.children = children;
        Node::Block(b)
    }

    #[test]
    fn end_to_end_job() {
        let job = Job::from_value(&json!({
            "id": "web",
            "datacenters": ["dc1"],
            "group": [{
                "id": "cache",
                "count": 3,
                "task": [{
                    "id": "redis",
                    "driver": "docker",
                    "resources": { "cpu": 100, "memory": 300 }
                }]
            }]
        }))
        .unwrap();

        let task = block(
            "task",
            Some("redis"),
            vec![
                attr("kill_timeout", "5s"),
                attr("shutdown_delay", "0s"),
                attr("driver", "docker"),
                block(
                    "resources",
                    None,
                    vec![attr("cpu", 100), attr("memory", 300)],
                ),
            ],
        );
        let group = block("group", Some("cache"), vec![attr("count", 3), task]);
        let expected = block(
            "job",
            Some("web"),
            vec![
                attr("type", "service"),
                attr("region", "global"),
                attr("datacenters", Literal::Array(vec!["dc1".into()])),
                attr("priority", 50),
                group,
            ],
        );

        assert_eq!(Node::Block(serialize(&job)), expected);
    }

    #[test]
    fn repeated_entities_become_sibling_blocks() {
        let task = construct_value(
            EntityKind::Task,
            &json!({
                "id": "web",
                "driver": "docker",
                "template": [{ "destination": "local/app.conf", "data": "x" }],
                "resources": {},
                "service": [
                    { "name": "web", "port": "http" },
                    { "name": "admin", "port": "admin" }
                ]
            }),
        )
        .unwrap();

        let out = serialize_entity("task", &task);
        let names: Vec<&str> = out.blocks().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["template", "resources", "service", "service"]);
        assert!(out.blocks().all(|b| b.labels.is_empty()));
        assert_eq!(out.labels, vec!["web".to_string()]);

        let services: Vec<_> = out.blocks().filter(|b| b.name == "service").collect();
        assert_eq!(services[0].attribute("name"), Some(&Literal::from("web")));
        assert_eq!(services[1].attribute("name"), Some(&Literal::from("admin")));
    }

    #[test]
    fn identity_kinds_label_their_blocks() {
        let resources = construct_value(
            EntityKind::Resources,
            &json!({
                "network": { "port": [{ "id": "http", "static": 8080 }, { "id": "db" }] },
                "device": [{ "id": "nvidia/gpu", "count": 2 }]
            }),
        )
        .unwrap();

        let out = serialize_entity("resources", &resources);
        let network = out.blocks().find(|b| b.name == "network").unwrap();
        assert!(network.labels.is_empty());

        let ports: Vec<_> = network.blocks().collect();
        assert_eq!(ports[0].labels, vec!["http".to_string()]);
        assert_eq!(ports[0].children, vec![attr("static", 8080)]);
        assert_eq!(ports[1].labels, vec!["db".to_string()]);
        assert!(ports[1].children.is_empty());

        let device = out.blocks().find(|b| b.name == "device").unwrap();
        assert_eq!(device.labels, vec!["nvidia/gpu".to_string()]);
        assert_eq!(device.attribute("id"), None);
    }

    #[test]
    fn unset_is_skipped_but_false_and_empty_are_kept() {
        let base = json!({ "id": "t", "driver": "exec", "resources": {} });
        let unset = construct_value(EntityKind::Task, &base).unwrap();
        assert_eq!(serialize_entity("task", &unset).attribute("leader"), None);

        let mut raw = base.clone();
        raw["leader"] = json!(false);
        raw["env"] = json!({});
        let set = construct_value(EntityKind::Task, &raw).unwrap();
        let out = serialize_entity("task", &set);
        assert_eq!(out.attribute("leader"), Some(&Literal::Bool(false)));
        assert_eq!(out.attribute("env"), Some(&Literal::Map(vec![])));
    }

    #[test]
    fn maps_keep_constructed_order() {
        let task = construct_value(
            EntityKind::Task,
            &json!({ "id": "t", "driver": "exec", "resources": {}, "env": { "Z": 1, "A": true } }),
        )
        .unwrap();
        assert_eq!(
            serialize_entity("task", &task).attribute("env"),
            Some(&Literal::Map(vec![
                ("Z".into(), Literal::from("1")),
                ("A".into(), Literal::from("true")),
            ]))
        );
    }

    #[test]
    fn tree_dumps_as_json() {
        let logs = construct_value(EntityKind::Logs, &json!({})).unwrap();
        let value = serde_json::to_value(Node::Block(serialize_entity("logs", &logs))).unwrap();
        assert_eq!(
            value,
            json!({
                "node": "block",
                "name": "logs",
                "labels": [],
                "children": [
                    { "node": "attribute", "name": "max_files", "value": 10 },
                    { "node": "attribute", "name": "max_file_size", "value": 10 }
                ]
            })
        );
    }
}
