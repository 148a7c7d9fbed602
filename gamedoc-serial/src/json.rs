//! JSON text and `serde_json::Value` conversions.

use crate::{Element, SerialResult, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number};

impl Element {
    /// Builds a tree from a JSON value.
    ///
    /// Objects keep their keys as child names, arrays become array elements
    /// with unnamed items, scalars become leaves and `null` an empty element.
    #[must_use]
    pub fn from_json(json: &serde_json::Value) -> Element {
        match json {
            serde_json::Value::Null => Element::new(),
            serde_json::Value::Bool(b) => Element::leaf(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Element::leaf(i),
                None => Element::leaf(n.as_f64().unwrap_or(0.0)),
            },
            serde_json::Value::String(s) => Element::leaf(s.as_str()),
            serde_json::Value::Array(items) => {
                let mut element = Element::array();
                for item in items {
                    element.push("", Element::from_json(item));
                }
                element
            }
            serde_json::Value::Object(map) => {
                let mut element = Element::new();
                for (key, item) in map {
                    element.push(key, Element::from_json(item));
                }
                element
            }
        }
    }

    /// Converts the tree back to a JSON value.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        if let Some(value) = self.value() {
            return match value {
                Value::Bool(b) => serde_json::Value::Bool(*b),
                Value::Int(i) => serde_json::Value::Number((*i).into()),
                Value::Double(d) => Number::from_f64(*d)
                    .map_or(serde_json::Value::Null, serde_json::Value::Number),
                Value::String(s) => serde_json::Value::String(s.clone()),
            };
        }
        if self.is_array() {
            return serde_json::Value::Array(self.children().map(|(_, e)| e.to_json()).collect());
        }
        let mut map = Map::new();
        for (name, child) in self.children() {
            map.insert(name.to_string(), child.to_json());
        }
        serde_json::Value::Object(map)
    }

    /// Parses JSON text into a tree.
    pub fn from_json_str(text: &str) -> SerialResult<Element> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(Element::from_json(&json))
    }

    /// Prints the tree as compact JSON.
    pub fn to_json_string(&self) -> SerialResult<String> {
        Ok(serde_json::to_string(&self.to_json())?)
    }

    /// Prints the tree as indented JSON.
    pub fn to_json_string_pretty(&self) -> SerialResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Ok(Element::from_json(&json))
    }
}
