// File: crates/dash-core/src/svg.rs
// Summary: SVG mount step: serializes a scene graph into markup.

use std::fmt::Write;

use crate::scene::Node;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serialize `root` as an indented SVG document fragment. An `<svg>` root gets the
/// SVG namespace when it does not carry one already.
pub fn to_svg_string(root: &Node) -> String {
    let mut out = String::new();
    if root.name == "svg" && root.get("xmlns").is_none() {
        let mut root = root.clone();
        root.set_attr("xmlns", SVG_NS);
        write_node(&mut out, &root, 0);
    } else {
        write_node(&mut out, root, 0);
    }
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{indent}<{}", node.name);
    for (k, v) in node.attrs() {
        let _ = write!(out, " {k}=\"{}\"", escape_attr(&v.to_string()));
    }

    match (&node.text, node.children.is_empty()) {
        (None, true) => out.push_str("/>\n"),
        (Some(text), true) => {
            let _ = writeln!(out, ">{}</{}>", escape_text(text), node.name);
        }
        (text, false) => {
            out.push_str(">\n");
            if let Some(text) = text {
                let _ = writeln!(out, "{indent}  {}", escape_text(text));
            }
            for c in &node.children {
                write_node(out, c, depth + 1);
            }
            let _ = writeln!(out, "{indent}</{}>", node.name);
        }
    }
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_nested_nodes() {
        let root = Node::new("svg")
            .attr("width", 100.0)
            .child(Node::new("line").attr("x1", 0.5))
            .child(Node::new("text").attr("x", 3).with_text("3 KB"));
        let svg = to_svg_string(&root);
        assert_eq!(
            svg,
            "<svg width=\"100\" xmlns=\"http://www.w3.org/2000/svg\">\n  <line x1=\"0.5\"/>\n  <text x=\"3\">3 KB</text>\n</svg>\n"
        );
    }

    #[test]
    fn escapes_markup_in_text_and_attributes() {
        let n = Node::new("text").attr("data-name", "a \"b\" & c").with_text("<go>");
        let svg = to_svg_string(&n);
        assert!(svg.contains("data-name=\"a &quot;b&quot; &amp; c\""));
        assert!(svg.contains(">&lt;go&gt;</text>"));
    }
}
