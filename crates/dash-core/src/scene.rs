// File: crates/dash-core/src/scene.rs
// Summary: Scene graph nodes (tag, ordered attributes, text, children) built before any mount step.

use std::fmt;

/// Primitive attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Text(String),
}

impl AttrValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Number(v) => Some(*v),
            AttrValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Number(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(v) => f.write_str(&fmt_number(*v)),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self { AttrValue::Number(v) }
}
impl From<f32> for AttrValue {
    fn from(v: f32) -> Self { AttrValue::Number(v as f64) }
}
impl From<i32> for AttrValue {
    fn from(v: i32) -> Self { AttrValue::Number(v as f64) }
}
impl From<u32> for AttrValue {
    fn from(v: u32) -> Self { AttrValue::Number(v as f64) }
}
impl From<usize> for AttrValue {
    fn from(v: usize) -> Self { AttrValue::Number(v as f64) }
}
impl From<&str> for AttrValue {
    fn from(v: &str) -> Self { AttrValue::Text(v.to_string()) }
}
impl From<String> for AttrValue {
    fn from(v: String) -> Self { AttrValue::Text(v) }
}

/// Shortest decimal form of `v`: integral values print without a fraction and
/// negative zero prints as `0`.
pub fn fmt_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// One element of the scene graph. Children are owned by their parent and kept in
/// paint order; attributes keep insertion order so output is deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub name: String,
    attrs: Vec<(String, AttrValue)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attrs: Vec::new(), text: None, children: Vec::new() }
    }

    /// Builder form of [`Node::set_attr`].
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Set `key`, replacing any previous value in place.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn num(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AttrValue::as_f64)
    }

    pub fn str_attr(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_str)
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.str_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Pre-order traversal.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }

    /// Pre-order traversal with mutable access.
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Node)) {
        f(self);
        for c in &mut self.children {
            c.walk_mut(f);
        }
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Node> {
        let mut out = Vec::new();
        self.walk(&mut |n| if n.has_class(class) { out.push(n) });
        out
    }

    pub fn find_by_name(&self, name: &str) -> Vec<&Node> {
        let mut out = Vec::new();
        self.walk(&mut |n| if n.name == name { out.push(n) });
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        let mut found = None;
        self.walk(&mut |n| {
            if found.is_none() && n.str_attr("id") == Some(id) {
                found = Some(n);
            }
        });
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attr_replaces_in_place() {
        let mut n = Node::new("rect").attr("x", 1.0).attr("y", 2.0);
        n.set_attr("x", 5.0);
        let keys: Vec<_> = n.attrs().map(|(k, _)| k).collect();
        assert_eq!(keys, ["x", "y"]);
        assert_eq!(n.num("x"), Some(5.0));
    }

    #[test]
    fn numbers_print_shortest() {
        assert_eq!(fmt_number(50.0), "50");
        assert_eq!(fmt_number(12.5), "12.5");
        assert_eq!(fmt_number(-0.0), "0");
        assert_eq!(AttrValue::from(0.25).to_string(), "0.25");
    }

    #[test]
    fn class_lookup_matches_tokens() {
        let root = Node::new("g")
            .child(Node::new("circle").attr("class", "data-point hot"))
            .child(Node::new("circle").attr("class", "point-highlight"));
        assert_eq!(root.find_by_class("data-point").len(), 1);
        assert_eq!(root.find_by_class("hot").len(), 1);
        assert_eq!(root.find_by_name("circle").len(), 2);
    }
}
