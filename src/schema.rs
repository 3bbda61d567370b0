//! Schema documents and the validation interpreter
//!
//! Each registered schema revision is held as an explicit structural
//! description: an ordered list of field specs plus an additional-properties
//! flag, evaluated by a small interpreter. The declared field order doubles
//! as the canonical key order for serialization.

use serde_json::Value;

use crate::error::{MetadataError, ValidationError};

/// Type tag for a declared field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    /// Homogeneous array; the boxed type describes the items
    Array(Box<FieldType>),
    /// Nested object with its own ordered field specs
    Object {
        fields: Vec<FieldSpec>,
        additional_properties: bool,
    },
}

impl FieldType {
    /// Human-readable name used in validation messages
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Array(_) => "array",
            FieldType::Object { .. } => "object",
        }
    }
}

/// A single declared field: name, requiredness, and type
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub required: bool,
    pub ty: FieldType,
}

/// A schema revision as an explicit structural description.
///
/// Immutable once the registry holding it has been constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    /// Schema title (e.g. "Wonzimer20210101")
    pub title: Option<String>,
    /// Declared fields, in declaration order
    pub fields: Vec<FieldSpec>,
    /// Whether undeclared fields are permitted
    pub additional_properties: bool,
}

impl SchemaDocument {
    /// Parse a JSON-Schema-like document into a structural description.
    ///
    /// Recognizes `title`, `properties` (declaration order preserved),
    /// `required`, and `additionalProperties`. Unknown keywords are ignored.
    pub fn from_value(value: &Value) -> Result<Self, MetadataError> {
        let object = value
            .as_object()
            .ok_or_else(|| MetadataError::InvalidSchema("schema must be a JSON object".into()))?;

        if let Some(ty) = object.get("type").and_then(Value::as_str) {
            if ty != "object" {
                return Err(MetadataError::InvalidSchema(format!(
                    "top-level schema type must be \"object\", found \"{}\"",
                    ty
                )));
            }
        }

        let title = object
            .get("title")
            .and_then(Value::as_str)
            .map(String::from);

        let required: Vec<String> = object
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(|n| n.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        let fields = parse_fields(object, &required)?;

        // JSON Schema defaults additionalProperties to true
        let additional_properties = object
            .get("additionalProperties")
            .and_then(Value::as_bool)
            .unwrap_or(true);

        Ok(Self {
            title,
            fields,
            additional_properties,
        })
    }

    /// Declared field names, in declaration order
    pub fn field_order(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Whether a field name is declared by this schema
    pub fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Check a candidate document against this schema, reporting the first
    /// violated constraint.
    pub fn check(&self, candidate: &Value) -> Result<(), ValidationError> {
        check_object(&self.fields, self.additional_properties, candidate, None)
    }

    /// Whether a candidate document conforms exactly to this schema
    pub fn conforms(&self, candidate: &Value) -> bool {
        self.check(candidate).is_ok()
    }
}

/// Extract ordered field specs from a schema object's `properties`
fn parse_fields(
    object: &serde_json::Map<String, Value>,
    required: &[String],
) -> Result<Vec<FieldSpec>, MetadataError> {
    let Some(properties) = object.get("properties") else {
        return Ok(Vec::new());
    };
    let properties = properties
        .as_object()
        .ok_or_else(|| MetadataError::InvalidSchema("properties must be a JSON object".into()))?;

    let mut fields = Vec::with_capacity(properties.len());
    for (name, spec) in properties {
        fields.push(FieldSpec {
            name: name.clone(),
            required: required.iter().any(|r| r == name),
            ty: parse_field_type(name, spec)?,
        });
    }
    Ok(fields)
}

fn parse_field_type(name: &str, spec: &Value) -> Result<FieldType, MetadataError> {
    let ty = spec
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            MetadataError::InvalidSchema(format!("property `{}` is missing a type", name))
        })?;

    match ty {
        "string" => Ok(FieldType::String),
        "integer" => Ok(FieldType::Integer),
        "number" => Ok(FieldType::Number),
        "boolean" => Ok(FieldType::Boolean),
        "array" => {
            let items = spec.get("items").ok_or_else(|| {
                MetadataError::InvalidSchema(format!("array property `{}` is missing items", name))
            })?;
            Ok(FieldType::Array(Box::new(parse_field_type(name, items)?)))
        }
        "object" => {
            let object = spec.as_object().ok_or_else(|| {
                MetadataError::InvalidSchema(format!("property `{}` must be a JSON object", name))
            })?;
            let required: Vec<String> = object
                .get("required")
                .and_then(Value::as_array)
                .map(|names| {
                    names
                        .iter()
                        .filter_map(|n| n.as_str().map(String::from))
                        .collect()
                })
                .unwrap_or_default();
            let additional_properties = object
                .get("additionalProperties")
                .and_then(Value::as_bool)
                .unwrap_or(true);
            Ok(FieldType::Object {
                fields: parse_fields(object, &required)?,
                additional_properties,
            })
        }
        other => Err(MetadataError::InvalidSchema(format!(
            "property `{}` has unsupported type \"{}\"",
            name, other
        ))),
    }
}

/// Interpreter: walk the candidate object against the declared fields
fn check_object(
    fields: &[FieldSpec],
    additional_properties: bool,
    candidate: &Value,
    path: Option<&str>,
) -> Result<(), ValidationError> {
    let object = candidate.as_object().ok_or(ValidationError::NotAnObject)?;

    for field in fields {
        let qualified = qualify(path, &field.name);
        match object.get(&field.name) {
            Some(value) => check_type(&field.ty, value, &qualified)?,
            None if field.required => {
                return Err(ValidationError::MissingField { field: qualified })
            }
            None => {}
        }
    }

    if !additional_properties {
        for key in object.keys() {
            if !fields.iter().any(|f| &f.name == key) {
                return Err(ValidationError::UnexpectedField {
                    field: qualify(path, key),
                });
            }
        }
    }

    Ok(())
}

fn check_type(expected: &FieldType, value: &Value, field: &str) -> Result<(), ValidationError> {
    let mismatch = || ValidationError::WrongType {
        field: field.to_string(),
        expected: expected.name(),
        found: json_type_name(value),
    };

    match expected {
        FieldType::String if value.is_string() => Ok(()),
        FieldType::Integer if value.is_i64() || value.is_u64() => Ok(()),
        FieldType::Number if value.is_number() => Ok(()),
        FieldType::Boolean if value.is_boolean() => Ok(()),
        FieldType::Array(items) => {
            let elements = value.as_array().ok_or_else(mismatch)?;
            for (index, element) in elements.iter().enumerate() {
                check_type(items, element, &format!("{}[{}]", field, index))?;
            }
            Ok(())
        }
        FieldType::Object {
            fields,
            additional_properties,
        } => {
            if !value.is_object() {
                return Err(mismatch());
            }
            check_object(fields, *additional_properties, value, Some(field))
        }
        _ => Err(mismatch()),
    }
}

fn qualify(path: Option<&str>, name: &str) -> String {
    match path {
        Some(prefix) => format!("{}.{}", prefix, name),
        None => name.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
