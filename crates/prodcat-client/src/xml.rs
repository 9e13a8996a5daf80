//! Element tree for XML responses and its flattening into a generic map.
//!
//! Flattening is what makes the field mapper format-agnostic: an XML record
//! becomes the same `serde_json::Map` shape a JSON record already has.

use serde_json::{Map, Value};

/// A parsed XML element. Attributes are not retained; no backend in scope
/// carries product data in them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: String,
    /// Character data (text and CDATA) directly inside this element.
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Case-insensitive tag name comparison.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// All character data in this element and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// First element in document order, starting with `self`, matching `pred`.
    pub fn find_first(&self, pred: &dyn Fn(&XmlElement) -> bool) -> Option<&XmlElement> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_first(pred))
    }

    /// Elements matching `pred` in document order, starting with `self`.
    ///
    /// The search does not descend into a matched element, so nested matches
    /// are not reported twice.
    pub fn find_outermost(&self, pred: &dyn Fn(&XmlElement) -> bool) -> Vec<&XmlElement> {
        let mut out = Vec::new();
        collect_outermost(self, pred, &mut out);
        out
    }

    /// Elements reached by following `path` as a chain of direct children,
    /// where the first step may start at any element of the tree (like the
    /// CSS selector `a > b > c`).
    #[must_use]
    pub fn find_child_path(&self, path: &[&str]) -> Vec<&XmlElement> {
        let Some((first, rest)) = path.split_first() else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for start in self.descendants_and_self() {
            if !start.is_named(first) {
                continue;
            }
            let mut frontier = vec![start];
            for step in rest {
                frontier = frontier
                    .into_iter()
                    .flat_map(|el| el.children.iter().filter(move |c| c.is_named(step)))
                    .collect();
            }
            out.extend(frontier);
        }
        out
    }

    fn descendants_and_self(&self) -> Vec<&XmlElement> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants_and_self());
        }
        out
    }
}

fn collect_outermost<'a>(
    el: &'a XmlElement,
    pred: &dyn Fn(&XmlElement) -> bool,
    out: &mut Vec<&'a XmlElement>,
) {
    if pred(el) {
        out.push(el);
        return;
    }
    for child in &el.children {
        collect_outermost(child, pred, out);
    }
}

/// Flattens an element's children into a map keyed by lower-cased tag name.
///
/// A child without child elements becomes its trimmed text; otherwise it is
/// flattened recursively. Siblings sharing a tag name collapse to the last
/// one.
#[must_use]
pub fn flatten(element: &XmlElement) -> Map<String, Value> {
    let mut map = Map::new();
    for child in &element.children {
        let value = if child.children.is_empty() {
            Value::String(child.text.trim().to_owned())
        } else {
            Value::Object(flatten(child))
        };
        map.insert(child.name.to_lowercase(), value);
    }
    map
}
