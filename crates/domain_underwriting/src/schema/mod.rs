//! Form schemas
//!
//! Each ACORD form carries two schemas:
//! - a descriptive field template mirroring the paper form, used only for
//!   display and document purposes
//! - a flat tool parameter schema listing exactly the fields the risk
//!   evaluator consumes, used to solicit structured input from an LLM or UI
//!
//! The parameter schema is also what [`FormSchema::validate`] enforces.

mod descriptive;
mod parameters;

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::UnderwritingError;
use crate::form_type::FormType;
use crate::record::{decimal_from_number, SubmittedRecord};

/// JSON type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
    /// Name-to-value collection, accepted as an object or a list of entries
    Mapping,
}

impl ParamKind {
    /// JSON-Schema type name
    pub fn json_type(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Integer => "integer",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Object | ParamKind::Mapping => "object",
            ParamKind::Array => "array",
        }
    }

    /// Returns true if the value has this kind
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (ParamKind::String, Value::String(_)) => true,
            (ParamKind::Integer, Value::Number(n)) => {
                n.is_i64() || n.is_u64() || decimal_from_number(n).fract().is_zero()
            }
            (ParamKind::Number, Value::Number(_)) => true,
            (ParamKind::Boolean, Value::Bool(_)) => true,
            (ParamKind::Object, Value::Object(_)) => true,
            (ParamKind::Array, Value::Array(_)) => true,
            (ParamKind::Mapping, Value::Object(_) | Value::Array(_)) => true,
            _ => false,
        }
    }
}

/// A nested property of an object parameter or of an array item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

/// One top-level tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    /// Object properties, or item properties for arrays
    pub children: &'static [ChildSpec],
    /// Kind of free-form entry values: undeclared object keys, or every
    /// value of a mapping given as an object
    pub entries: Option<ParamKind>,
}

impl ParameterSpec {
    pub(crate) const fn scalar(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            children: &[],
            entries: None,
        }
    }

    pub(crate) const fn nested(
        name: &'static str,
        kind: ParamKind,
        description: &'static str,
        children: &'static [ChildSpec],
    ) -> Self {
        Self {
            name,
            kind,
            description,
            children,
            entries: None,
        }
    }

    pub(crate) const fn with_entries(self, kind: ParamKind) -> Self {
        Self {
            entries: Some(kind),
            ..self
        }
    }

    fn to_json(&self) -> Value {
        let mut property = Map::new();
        property.insert("type".into(), json!(self.kind.json_type()));
        property.insert("description".into(), json!(self.description));

        if !self.children.is_empty() {
            let children: Map<String, Value> = self
                .children
                .iter()
                .map(|c| (c.name.to_string(), json!({ "type": c.kind.json_type() })))
                .collect();
            match self.kind {
                ParamKind::Array => {
                    property.insert(
                        "items".into(),
                        json!({ "type": "object", "properties": children }),
                    );
                }
                _ => {
                    property.insert("properties".into(), Value::Object(children));
                }
            }
        }
        if let Some(kind) = self.entries {
            property.insert("additionalProperties".into(), json!({ "type": kind.json_type() }));
        }

        Value::Object(property)
    }
}

/// Static description of one ACORD form
#[derive(Debug, Clone)]
pub struct FormSchema {
    form_type: FormType,
    fields: Value,
    parameters: &'static [ParameterSpec],
}

static SCHEMAS: Lazy<Vec<FormSchema>> = Lazy::new(|| {
    FormType::ALL
        .iter()
        .map(|&form_type| FormSchema {
            form_type,
            fields: descriptive::fields_for(form_type),
            parameters: parameters::parameters_for(form_type),
        })
        .collect()
});

impl FormSchema {
    /// Returns the schema for a form
    pub fn for_form(form_type: FormType) -> &'static FormSchema {
        &SCHEMAS[form_type.index()]
    }

    /// Returns every form schema
    pub fn all() -> &'static [FormSchema] {
        &SCHEMAS
    }

    /// The form this schema describes
    pub fn form_type(&self) -> FormType {
        self.form_type
    }

    /// Human-readable form name
    pub fn name(&self) -> &'static str {
        self.form_type.form_name()
    }

    /// Descriptive field template of the paper form
    pub fn fields(&self) -> &Value {
        &self.fields
    }

    /// Parameters the evaluator consumes
    pub fn parameters(&self) -> &'static [ParameterSpec] {
        self.parameters
    }

    /// Names of the required record fields
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.parameters.iter().map(|p| p.name).collect()
    }

    /// JSON-Schema object for the tool parameters
    pub fn parameter_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .parameters
            .iter()
            .map(|p| (p.name.to_string(), p.to_json()))
            .collect();
        json!({
            "type": "object",
            "properties": properties,
            "required": self.required_fields(),
        })
    }

    /// OpenAI-style function tool definition for this form
    pub fn tool_definition(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.form_type.tool_name(),
                "description": format!(
                    "Underwrite an ACORD {} ({}) submission and return the decision, risk score and premium modifier",
                    self.form_type.acord_number(),
                    self.name()
                ),
                "parameters": self.parameter_schema(),
            }
        })
    }

    /// Checks that every required field is present with its declared type
    ///
    /// Every missing and every mistyped field is reported, not only the
    /// first. Nested properties are type-checked when present; absent
    /// nested properties are allowed.
    pub fn validate(&self, record: &SubmittedRecord) -> Result<(), UnderwritingError> {
        let mut missing = Vec::new();
        let mut invalid = Vec::new();

        for spec in self.parameters {
            let value = match record.get(spec.name) {
                Some(v) if !v.is_null() => v,
                _ => {
                    missing.push(spec.name.to_string());
                    continue;
                }
            };

            if !spec.kind.accepts(value) {
                invalid.push(format!("{} (expected {})", spec.name, spec.kind.json_type()));
                continue;
            }

            check_children(spec, value, &mut invalid);
        }

        if missing.is_empty() && invalid.is_empty() {
            Ok(())
        } else {
            Err(UnderwritingError::Validation {
                form_type: self.form_type,
                missing,
                invalid,
            })
        }
    }
}

fn check_children(spec: &ParameterSpec, value: &Value, invalid: &mut Vec<String>) {
    match (spec.kind, value) {
        (ParamKind::Array | ParamKind::Mapping, Value::Array(items)) if !spec.children.is_empty() => {
            for (i, item) in items.iter().enumerate() {
                let prefix = format!("{}[{}]", spec.name, i);
                match item {
                    Value::Object(object) => check_object(spec.children, &prefix, object, invalid),
                    _ => invalid.push(format!("{} (expected object)", prefix)),
                }
            }
        }
        (ParamKind::Object, Value::Object(object)) => {
            check_object(spec.children, spec.name, object, invalid);
            if let Some(kind) = spec.entries {
                let undeclared = object
                    .iter()
                    .filter(|(key, _)| !spec.children.iter().any(|c| c.name == key.as_str()));
                check_entries(kind, spec.name, undeclared, invalid);
            }
        }
        (ParamKind::Mapping, Value::Object(object)) => {
            if let Some(kind) = spec.entries {
                check_entries(kind, spec.name, object.iter(), invalid);
            }
        }
        _ => {}
    }
}

fn check_entries<'a>(
    kind: ParamKind,
    prefix: &str,
    entries: impl Iterator<Item = (&'a String, &'a Value)>,
    invalid: &mut Vec<String>,
) {
    for (key, value) in entries {
        if !value.is_null() && !kind.accepts(value) {
            invalid.push(format!("{}.{} (expected {})", prefix, key, kind.json_type()));
        }
    }
}

fn check_object(
    children: &[ChildSpec],
    prefix: &str,
    object: &Map<String, Value>,
    invalid: &mut Vec<String>,
) {
    for child in children {
        if let Some(v) = object.get(child.name).filter(|v| !v.is_null()) {
            if !child.kind.accepts(v) {
                invalid.push(format!(
                    "{}.{} (expected {})",
                    prefix,
                    child.name,
                    child.kind.json_type()
                ));
            }
        }
    }
}
