//! Test Data Builders
//!
//! Start from a form's fixture and change only the fields a test cares about.

use domain_underwriting::{FormType, SubmittedRecord, ToolCall};
use serde_json::{Map, Value};

use crate::fixtures::{BusinessFixtures, RecordFixtures};

/// Builder for submitted records
pub struct RecordBuilder {
    form: FormType,
    fields: Map<String, Value>,
}

impl RecordBuilder {
    /// Starts from the form's low-risk fixture
    pub fn new(form: FormType) -> Self {
        Self::from_value(form, RecordFixtures::low_risk(form))
    }

    /// Starts from the form's high-risk fixture
    pub fn high_risk(form: FormType) -> Self {
        Self::from_value(form, RecordFixtures::high_risk(form))
    }

    /// Starts from an empty record
    pub fn empty(form: FormType) -> Self {
        Self {
            form,
            fields: Map::new(),
        }
    }

    fn from_value(form: FormType, value: Value) -> Self {
        let fields = match value {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        Self { form, fields }
    }

    /// Sets a field
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    /// Removes a field
    pub fn without(mut self, field: &str) -> Self {
        self.fields.remove(field);
        self
    }

    /// Replaces the applicant with a randomly named one
    pub fn with_fake_business(self) -> Self {
        self.with("business_info", BusinessFixtures::fake_business_info())
    }

    /// Form the record is built for
    pub fn form(&self) -> FormType {
        self.form
    }

    pub fn build_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    pub fn build(&self) -> SubmittedRecord {
        SubmittedRecord::new(self.fields.clone())
    }

    /// Wraps the record in a tool call with JSON-string arguments
    pub fn tool_call(&self, id: &str) -> ToolCall {
        ToolCall::new(id, self.form.tool_name(), Value::String(self.build_value().to_string()))
    }
}
