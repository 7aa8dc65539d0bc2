use crate::schema::Literal;
use crate::serialize::{Block, Node};

/// Render a block tree as HCL, indenting each level by `indent` spaces.
///
/// Layout:
/// job "web" {
///   datacenters = ["dc1"]
///   meta = {
///     "owner" = "ops"
///   }
///   group "cache" {
///     ...
///   }
/// }
pub fn render_hcl(root: &Block, indent: usize) -> String {
    let mut out = String::new();
    write_block(&mut out, root, 0, indent);
    out
}

fn write_block(out: &mut String, block: &Block, depth: usize, indent: usize) {
    pad(out, depth * indent);
    out.push_str(&block.name);
    for label in &block.labels {
        out.push(' ');
        out.push_str(&quote(label));
    }
    out.push_str(" {\n");

    for child in &block.children {
        match child {
            Node::Block(b) => write_block(out, b, depth + 1, indent),
            Node::Attribute(a) => {
                pad(out, (depth + 1) * indent);
                out.push_str(&a.name);
                out.push_str(" = ");
                write_value(out, &a.value, depth + 1, indent);
                out.push('\n');
            }
        }
    }

    pad(out, depth * indent);
    out.push_str("}\n");
}

// Top-level maps go multi-line; anything nested inside an array stays inline.
fn write_value(out: &mut String, value: &Literal, depth: usize, indent: usize) {
    match value {
        Literal::Map(entries) if !entries.is_empty() => {
            out.push_str("{\n");
            for (k, v) in entries {
                pad(out, (depth + 1) * indent);
                out.push_str(&quote(k));
                out.push_str(" = ");
                write_value(out, v, depth + 1, indent);
                out.push('\n');
            }
            pad(out, depth * indent);
            out.push('}');
        }
        other => write_inline(out, other),
    }
}

fn write_inline(out: &mut String, value: &Literal) {
    match value {
        Literal::String(s) => out.push_str(&quote(s)),
        Literal::Integer(n) => out.push_str(&n.to_string()),
        Literal::Float(x) => out.push_str(&x.to_string()),
        Literal::Bool(b) => out.push_str(&b.to_string()),
        Literal::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_inline(out, item);
            }
            out.push(']');
        }
        Literal::Map(entries) => {
            out.push('{');
            for (i, (k, v)) in entries.iter().enumerate() {
                out.push_str(if i > 0 { ", " } else { " " });
                out.push_str(&quote(k));
                out.push_str(" = ");
                write_inline(out, v);
            }
            out.push_str(if entries.is_empty() { "}" } else { " }" });
        }
    }
}

fn quote(s: &str) -> String {
    let mut q = String::with_capacity(s.len() + 2);
    q.push('"');
    for c in s.chars() {
        match c {
            '"' => q.push_str("\\\""),
            '\\' => q.push_str("\\\\"),
            '\n' => q.push_str("\\n"),
            '\r' => q.push_str("\\r"),
            '\t' => q.push_str("\\t"),
            c => q.push(c),
        }
    }
    q.push('"');
    q
}

fn pad(out: &mut String, n: usize) {
    out.extend(std::iter::repeat_n(' ', n));
}
