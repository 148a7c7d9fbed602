use crate::Value;

/// Returned by reference for every lookup that finds nothing.
static EMPTY: Element = Element::new();

/// A node of the attribute tree.
///
/// An element is either a leaf carrying a [`Value`], an object with named
/// children, or an array whose children are unnamed items. Attributes are
/// simply leaf children, so `set_attribute("name", ..)` and
/// `add_child("name").set_value(..)` produce the same tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    value: Option<Value>,
    children: Vec<(String, Element)>,
    is_array: bool,
}

impl Element {
    /// Creates an empty object element.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None,
            children: Vec::new(),
            is_array: false,
        }
    }

    /// Creates an empty array element.
    #[must_use]
    pub fn array() -> Self {
        Self {
            is_array: true,
            ..Self::new()
        }
    }

    /// Creates a leaf element.
    #[must_use]
    pub fn leaf(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new()
        }
    }

    /// True when the element has no value, no children and is not an array.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty() && !self.is_array
    }

    // ── Leaf value ───────────────────────────────────────────────

    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn string_value(&self) -> String {
        self.value.as_ref().map(Value::as_string).unwrap_or_default()
    }

    #[must_use]
    pub fn int_value(&self) -> i64 {
        self.value.as_ref().map_or(0, Value::as_int)
    }

    #[must_use]
    pub fn double_value(&self) -> f64 {
        self.value.as_ref().map_or(0.0, Value::as_double)
    }

    #[must_use]
    pub fn bool_value(&self) -> bool {
        self.value.as_ref().is_some_and(Value::as_bool)
    }

    // ── Children ─────────────────────────────────────────────────

    #[must_use]
    pub fn has_child(&self, name: &str) -> bool {
        self.children.iter().any(|(n, _)| n == name)
    }

    /// Returns the first child named `name`, or an empty element.
    #[must_use]
    pub fn child(&self, name: &str) -> &Element {
        self.find(name).unwrap_or(&EMPTY)
    }

    /// Returns the child named `name`, falling back to its legacy alias.
    #[must_use]
    pub fn child_or(&self, name: &str, legacy: &str) -> &Element {
        self.find(name)
            .or_else(|| self.find(legacy))
            .unwrap_or(&EMPTY)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, child)| child)
    }

    /// Appends a new empty child and returns it.
    ///
    /// Array items are unnamed; the name is ignored when `self` is an array.
    pub fn add_child(&mut self, name: &str) -> &mut Element {
        let name = if self.is_array { "" } else { name };
        self.children.push((name.to_string(), Element::new()));
        let last = self.children.len() - 1;
        &mut self.children[last].1
    }

    /// Appends `child` as an array item (or a named child for objects).
    pub fn push(&mut self, name: &str, child: Element) {
        let name = if self.is_array { "" } else { name };
        self.children.push((name.to_string(), child));
    }

    /// Replaces the first child named `name`, or appends it.
    pub fn set_child(&mut self, name: &str, child: Element) {
        match self.child_mut(name) {
            Some(existing) => *existing = child,
            None => self.children.push((name.to_string(), child)),
        }
    }

    /// Removes every child named `name`.
    pub fn remove_child(&mut self, name: &str) {
        self.children.retain(|(n, _)| n != name);
    }

    #[must_use]
    pub fn children_count(&self) -> usize {
        self.children.len()
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.children.iter().map(|(n, e)| (n.as_str(), e))
    }

    // ── Arrays ───────────────────────────────────────────────────

    #[must_use]
    pub fn is_array(&self) -> bool {
        self.is_array
    }

    pub fn set_array(&mut self, is_array: bool) -> &mut Self {
        self.is_array = is_array;
        self
    }

    /// Items of a list-like element.
    ///
    /// For arrays every child is an item. Older documents stored lists as
    /// objects with repeated children, so for non-arrays the children named
    /// `item` (or its legacy alias) are returned instead.
    #[must_use]
    pub fn array_items(&self, item: &str, legacy_item: &str) -> Vec<&Element> {
        if self.is_array {
            return self.children.iter().map(|(_, e)| e).collect();
        }
        self.children
            .iter()
            .filter(|(n, _)| n == item || (!legacy_item.is_empty() && n == legacy_item))
            .map(|(_, e)| e)
            .collect()
    }

    // ── Attributes ───────────────────────────────────────────────

    /// Sets a leaf child, replacing any existing child with that name.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.set_child(name, Element::leaf(value));
        self
    }

    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.find(name).is_some_and(|child| child.value.is_some())
    }

    fn attribute(&self, name: &str, legacy: &str) -> Option<&Value> {
        self.find(name)
            .and_then(|child| child.value.as_ref())
            .or_else(|| {
                if legacy.is_empty() {
                    None
                } else {
                    self.find(legacy).and_then(|child| child.value.as_ref())
                }
            })
    }

    #[must_use]
    pub fn string_attribute(&self, name: &str, default: &str) -> String {
        self.string_attribute_aliased(name, "", default)
    }

    #[must_use]
    pub fn string_attribute_aliased(&self, name: &str, legacy: &str, default: &str) -> String {
        self.attribute(name, legacy)
            .map_or_else(|| default.to_string(), Value::as_string)
    }

    #[must_use]
    pub fn int_attribute(&self, name: &str, default: i64) -> i64 {
        self.int_attribute_aliased(name, "", default)
    }

    #[must_use]
    pub fn int_attribute_aliased(&self, name: &str, legacy: &str, default: i64) -> i64 {
        self.attribute(name, legacy).map_or(default, Value::as_int)
    }

    #[must_use]
    pub fn double_attribute(&self, name: &str, default: f64) -> f64 {
        self.attribute(name, "").map_or(default, Value::as_double)
    }

    #[must_use]
    pub fn bool_attribute(&self, name: &str, default: bool) -> bool {
        self.attribute(name, "").map_or(default, Value::as_bool)
    }

    // ── Pass-through ─────────────────────────────────────────────

    /// Copy of `self` without the listed children.
    ///
    /// Entities keep the fields they don't model in such a copy so that
    /// saving writes them back untouched.
    #[must_use]
    pub fn without(&self, keys: &[&str]) -> Element {
        Element {
            value: self.value.clone(),
            children: self
                .children
                .iter()
                .filter(|(n, _)| !keys.contains(&n.as_str()))
                .cloned()
                .collect(),
            is_array: self.is_array,
        }
    }

    /// Appends the children of `other` whose names are not present yet.
    pub fn extend_missing(&mut self, other: &Element) {
        for (name, child) in &other.children {
            if !self.has_child(name) {
                self.children.push((name.clone(), child.clone()));
            }
        }
    }

    fn find(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, child)| child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_child_in_array_drops_name() {
        let mut list = Element::array();
        list.add_child("layout").set_attribute("name", "A");
        assert_eq!(list.children().next().map(|(n, _)| n), Some(""));
    }

    #[test]
    fn set_attribute_replaces() {
        let mut e = Element::new();
        e.set_attribute("x", 1);
        e.set_attribute("x", 2);
        assert_eq!(e.children_count(), 1);
        assert_eq!(e.int_attribute("x", 0), 2);
    }
}
