//! Canonical serialization
//!
//! Two logically identical metadata documents must hash identically, so the
//! wire form is minified JSON with keys in the schema's declared field order
//! rather than the caller's insertion order.

use serde_json::{Map, Value};

use crate::schema::SchemaDocument;

/// Serialize a metadata document to its canonical minified form.
///
/// Declared fields come first, in schema order; undeclared fields (possible
/// when called outside the engine, which always validates first) are passed
/// through after them in lexicographic order so the output stays
/// deterministic either way. Non-object values are rendered as-is.
pub fn canonicalize(document: &Value, schema: &SchemaDocument) -> String {
    let Some(object) = document.as_object() else {
        return document.to_string();
    };

    let mut ordered = Map::with_capacity(object.len());
    for name in schema.field_order() {
        if let Some(value) = object.get(name) {
            ordered.insert(name.to_string(), value.clone());
        }
    }

    let mut undeclared: Vec<&String> = object
        .keys()
        .filter(|key| !schema.declares(key))
        .collect();
    undeclared.sort();
    for key in undeclared {
        ordered.insert(key.clone(), object[key].clone());
    }

    Value::Object(ordered).to_string()
}
