//! Form catalogue DTOs

use domain_underwriting::{FormSchema, FormType};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct FormSummary {
    pub form_type: FormType,
    pub acord_number: u16,
    pub form_name: &'static str,
    pub tool_name: &'static str,
}

impl From<FormType> for FormSummary {
    fn from(form_type: FormType) -> Self {
        Self {
            form_type,
            acord_number: form_type.acord_number(),
            form_name: form_type.form_name(),
            tool_name: form_type.tool_name(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FormDetail {
    #[serde(flatten)]
    pub summary: FormSummary,
    pub required_fields: Vec<&'static str>,
    /// Descriptive template of the paper form
    pub fields: Value,
    /// Function tool definition
    pub tool: Value,
}

impl From<&FormSchema> for FormDetail {
    fn from(schema: &FormSchema) -> Self {
        Self {
            summary: schema.form_type().into(),
            required_fields: schema.required_fields(),
            fields: schema.fields().clone(),
            tool: schema.tool_definition(),
        }
    }
}
