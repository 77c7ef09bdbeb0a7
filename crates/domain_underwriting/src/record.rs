//! Submitted records
//!
//! A [`SubmittedRecord`] is the structured input an LLM tool call or a UI
//! form produces for one ACORD form. It is immutable once built; changing a
//! value means building a new record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::UnderwritingError;

/// Field values submitted for one underwriting request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmittedRecord {
    fields: Map<String, Value>,
}

impl SubmittedRecord {
    /// Creates a record from a field map
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Creates a record from a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self, UnderwritingError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(UnderwritingError::MalformedRecord(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parses a record from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, UnderwritingError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| UnderwritingError::MalformedRecord(e.to_string()))?;
        Self::from_value(value)
    }

    /// Returns the value of a top-level field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns true if the field is present and not null
    pub fn has(&self, field: &str) -> bool {
        self.fields.get(field).is_some_and(|v| !v.is_null())
    }

    /// Returns the submitted field names
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of submitted fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields were submitted
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a copy of this record with one field replaced
    pub fn with_field(&self, field: impl Into<String>, value: Value) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(field.into(), value);
        Self { fields }
    }

    /// Returns a copy of this record without the given field
    pub fn without_field(&self, field: &str) -> Self {
        let mut fields = self.fields.clone();
        fields.remove(field);
        Self { fields }
    }

    /// Returns the record as a JSON value
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    pub(crate) fn scope(&self) -> FieldScope<'_> {
        FieldScope::root(&self.fields)
    }
}

impl TryFrom<Value> for SubmittedRecord {
    type Error = UnderwritingError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// Read-only view over one level of a record, used by the scoring rules
///
/// Missing or null values read as zero or the empty string, matching how
/// list items with partial details are scored. Values of the wrong type are
/// reported with their full path.
#[derive(Debug, Clone)]
pub(crate) struct FieldScope<'a> {
    fields: &'a Map<String, Value>,
    path: String,
}

impl<'a> FieldScope<'a> {
    pub(crate) fn root(fields: &'a Map<String, Value>) -> Self {
        Self {
            fields,
            path: String::new(),
        }
    }

    fn path_of(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.path, field)
        }
    }

    fn value(&self, field: &str) -> Option<&'a Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// Reads a numeric field
    pub(crate) fn number(&self, field: &str) -> Result<Decimal, UnderwritingError> {
        match self.value(field) {
            None => Ok(Decimal::ZERO),
            Some(Value::Number(n)) => Ok(decimal_from_number(n)),
            Some(_) => Err(UnderwritingError::invalid_field(self.path_of(field), "number")),
        }
    }

    /// Reads a text field
    pub(crate) fn text(&self, field: &str) -> Result<&'a str, UnderwritingError> {
        match self.value(field) {
            None => Ok(""),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(UnderwritingError::invalid_field(self.path_of(field), "string")),
        }
    }

    /// Reads a list of objects, one scope per item
    pub(crate) fn items(&self, field: &str) -> Result<Vec<FieldScope<'a>>, UnderwritingError> {
        let list = match self.value(field) {
            None => return Ok(Vec::new()),
            Some(Value::Array(list)) => list,
            Some(_) => return Err(UnderwritingError::invalid_field(self.path_of(field), "array")),
        };

        list.iter()
            .enumerate()
            .map(|(i, item)| {
                let path = format!("{}[{}]", self.path_of(field), i);
                match item {
                    Value::Object(fields) => Ok(FieldScope { fields, path }),
                    _ => Err(UnderwritingError::invalid_field(path, "object")),
                }
            })
            .collect()
    }

    /// Reads a nested object as a scope
    pub(crate) fn object(&self, field: &str) -> Result<Option<FieldScope<'a>>, UnderwritingError> {
        match self.value(field) {
            None => Ok(None),
            Some(Value::Object(fields)) => Ok(Some(FieldScope {
                fields,
                path: self.path_of(field),
            })),
            Some(_) => Err(UnderwritingError::invalid_field(self.path_of(field), "object")),
        }
    }

    /// Reads a name-to-value collection
    ///
    /// Accepts either an object (`{"fire_drills": "Good"}`) or a list of
    /// entries (`[{"program_name": "fire_drills", "effectiveness": "Good"}]`).
    pub(crate) fn entries(
        &self,
        field: &str,
        name_key: &str,
        value_key: &str,
    ) -> Result<Vec<(String, &'a Value)>, UnderwritingError> {
        match self.value(field) {
            None => Ok(Vec::new()),
            Some(Value::Object(map)) => Ok(map
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), v))
                .collect()),
            Some(Value::Array(_)) => {
                let mut entries = Vec::new();
                for item in self.items(field)? {
                    let name = item.text(name_key)?.to_string();
                    if let Some(value) = item.value(value_key) {
                        entries.push((name, value));
                    }
                }
                Ok(entries)
            }
            Some(_) => Err(UnderwritingError::invalid_field(self.path_of(field), "object or array")),
        }
    }

    pub(crate) fn entry_path(&self, field: &str, name: &str) -> String {
        format!("{}.{}", self.path_of(field), name)
    }
}

/// Converts a JSON number to a decimal without going through floats when
/// the number is integral
///
/// Magnitudes beyond the decimal range saturate at `Decimal::MAX` or
/// `Decimal::MIN`, and underflow reads as zero.
pub(crate) fn decimal_from_number(n: &Number) -> Decimal {
    if let Some(i) = n.as_i64() {
        return Decimal::from(i);
    }
    if let Some(u) = n.as_u64() {
        return Decimal::from(u);
    }
    let f = n.as_f64().unwrap_or_default();
    Decimal::try_from(f).unwrap_or_else(|_| saturate(f))
}

fn saturate(f: f64) -> Decimal {
    if f.abs() < 1.0 {
        Decimal::ZERO
    } else if f.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// Short name of a JSON value's type, for error messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn record() -> SubmittedRecord {
        SubmittedRecord::from_value(json!({
            "naics_code": "238110",
            "annual_revenue": 6000000,
            "payroll": 1250000.5,
            "vehicles": [
                { "type": "Truck", "age": 12 },
                { "type": "Van", "value": null }
            ],
            "safety_programs": { "fall_protection": "Excellent", "unused": null }
        }))
        .unwrap()
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        let err = SubmittedRecord::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, UnderwritingError::MalformedRecord(_)));
    }

    #[test]
    fn test_with_field_leaves_original_untouched() {
        let original = record();
        let changed = original.with_field("annual_revenue", json!(1));
        assert_eq!(original.get("annual_revenue"), Some(&json!(6000000)));
        assert_eq!(changed.get("annual_revenue"), Some(&json!(1)));
    }

    #[test]
    fn test_scope_reads_numbers_exactly() {
        let record = record();
        let scope = record.scope();
        assert_eq!(scope.number("annual_revenue").unwrap(), dec!(6000000));
        assert_eq!(scope.number("payroll").unwrap(), dec!(1250000.5));
        assert_eq!(scope.number("absent").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_out_of_range_numbers_saturate() {
        let record = SubmittedRecord::from_value(json!({
            "huge": 1e30,
            "negative": -1e30,
            "tiny": 1e-40
        }))
        .unwrap();
        let scope = record.scope();
        assert_eq!(scope.number("huge").unwrap(), Decimal::MAX);
        assert_eq!(scope.number("negative").unwrap(), Decimal::MIN);
        assert_eq!(scope.number("tiny").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_scope_reports_wrong_types_with_path() {
        let record = record();
        let scope = record.scope();
        let err = scope.number("naics_code").unwrap_err();
        assert_eq!(err.to_string(), "Invalid field naics_code: expected number");

        let vehicles = scope.items("vehicles").unwrap();
        assert_eq!(vehicles.len(), 2);
        let err = vehicles[0].text("age").unwrap_err();
        assert_eq!(err.to_string(), "Invalid field vehicles[0].age: expected string");
        assert_eq!(vehicles[1].number("value").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_entries_accept_object_and_list_forms() {
        let record = record();
        let scope = record.scope();
        let from_object = scope.entries("safety_programs", "program_name", "effectiveness").unwrap();
        assert_eq!(from_object.len(), 1);
        assert_eq!(from_object[0].0, "fall_protection");

        let listed = SubmittedRecord::from_value(json!({
            "safety_programs": [
                { "program_name": "fall_protection", "effectiveness": "Good" },
                { "program_name": "ergonomics" }
            ]
        }))
        .unwrap();
        let from_list = listed
            .scope()
            .entries("safety_programs", "program_name", "effectiveness")
            .unwrap();
        assert_eq!(from_list.len(), 1);
        assert_eq!(from_list[0].1, &json!("Good"));
    }
}
