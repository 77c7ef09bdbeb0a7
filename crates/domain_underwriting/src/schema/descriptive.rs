//! Descriptive field templates of the paper ACORD forms
//!
//! Leaf values name a semantic type ("string", "number", "boolean"). These
//! templates are for display and document purposes only and are never
//! enforced at evaluation time.

use serde_json::{Map, Value};

use crate::form_type::FormType;

fn template_source(form_type: FormType) -> &'static str {
    match form_type {
        FormType::GeneralLiability => include_str!("../../forms/acord_125.json"),
        FormType::ContractorsSupplement => include_str!("../../forms/acord_126.json"),
        FormType::BusinessAuto => include_str!("../../forms/acord_127.json"),
        FormType::WorkersComp => include_str!("../../forms/acord_130.json"),
        FormType::Umbrella => include_str!("../../forms/acord_133.json"),
        FormType::CommercialAuto => include_str!("../../forms/acord_137.json"),
        FormType::Property => include_str!("../../forms/acord_140.json"),
        FormType::ComplexWorkersComp => include_str!("../../forms/acord_36.json"),
    }
}

pub(super) fn fields_for(form_type: FormType) -> Value {
    match serde_json::from_str::<Value>(template_source(form_type)) {
        Ok(value @ Value::Object(_)) => value,
        Ok(_) | Err(_) => {
            tracing::error!(form = %form_type, "form template is not a JSON object");
            Value::Object(Map::new())
        }
    }
}
