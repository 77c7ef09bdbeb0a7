//! ACORD form types
//!
//! One variant per supported ACORD form. The variant fixes the form's
//! display name, its tool name, and the threshold family its decisions use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decider::ThresholdFamily;
use crate::error::UnderwritingError;

/// Insurance form types, one per ACORD form identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormType {
    /// ACORD 125 - Commercial Insurance Application
    GeneralLiability,
    /// ACORD 137 - Commercial Auto Coverages/Limits Section
    CommercialAuto,
    /// ACORD 130 - Workers Compensation Application
    WorkersComp,
    /// ACORD 126 - Commercial General Liability Section
    ContractorsSupplement,
    /// ACORD 133 - umbrella limits over underlying policies
    Umbrella,
    /// ACORD 140 - Property Section
    Property,
    /// ACORD 127 - Business Auto Section
    BusinessAuto,
    /// ACORD 36 - workers compensation with safety programs
    ComplexWorkersComp,
}

impl FormType {
    /// Every supported form, in a fixed order
    pub const ALL: [FormType; 8] = [
        FormType::GeneralLiability,
        FormType::ContractorsSupplement,
        FormType::BusinessAuto,
        FormType::WorkersComp,
        FormType::Umbrella,
        FormType::CommercialAuto,
        FormType::Property,
        FormType::ComplexWorkersComp,
    ];

    /// Returns the ACORD form number
    pub fn acord_number(&self) -> u16 {
        match self {
            FormType::GeneralLiability => 125,
            FormType::ContractorsSupplement => 126,
            FormType::BusinessAuto => 127,
            FormType::WorkersComp => 130,
            FormType::Umbrella => 133,
            FormType::CommercialAuto => 137,
            FormType::Property => 140,
            FormType::ComplexWorkersComp => 36,
        }
    }

    /// Returns the human-readable form name printed on the ACORD form
    pub fn form_name(&self) -> &'static str {
        match self {
            FormType::GeneralLiability => "Commercial Insurance Application",
            FormType::ContractorsSupplement => "Commercial General Liability Section",
            FormType::BusinessAuto => "Business Auto Section",
            FormType::WorkersComp => "Workers Compensation Application",
            FormType::Umbrella => "Contractors Supplement",
            FormType::CommercialAuto => "Commercial Auto Coverages/Limits Section",
            FormType::Property => "Property Section",
            FormType::ComplexWorkersComp => "Statement of No Loss",
        }
    }

    /// Returns the function name used when the form is offered as an LLM tool
    pub fn tool_name(&self) -> &'static str {
        match self {
            FormType::GeneralLiability => "underwrite_acord_125",
            FormType::ContractorsSupplement => "underwrite_acord_126",
            FormType::BusinessAuto => "underwrite_acord_127",
            FormType::WorkersComp => "underwrite_acord_130",
            FormType::Umbrella => "underwrite_acord_133",
            FormType::CommercialAuto => "underwrite_acord_137",
            FormType::Property => "underwrite_acord_140",
            FormType::ComplexWorkersComp => "underwrite_acord_36",
        }
    }

    /// Returns the snake_case variant name
    pub fn key(&self) -> &'static str {
        match self {
            FormType::GeneralLiability => "general_liability",
            FormType::ContractorsSupplement => "contractors_supplement",
            FormType::BusinessAuto => "business_auto",
            FormType::WorkersComp => "workers_comp",
            FormType::Umbrella => "umbrella",
            FormType::CommercialAuto => "commercial_auto",
            FormType::Property => "property",
            FormType::ComplexWorkersComp => "complex_workers_comp",
        }
    }

    /// Returns the decision threshold family for this form
    ///
    /// Form 125 scores on a smaller scale and keeps its own lighter
    /// thresholds. The two families are not interchangeable.
    pub fn threshold_family(&self) -> ThresholdFamily {
        match self {
            FormType::GeneralLiability => ThresholdFamily::Light,
            _ => ThresholdFamily::Standard,
        }
    }

    /// Looks up a form by its ACORD number
    pub fn from_acord_number(number: u16) -> Option<FormType> {
        Self::ALL.into_iter().find(|f| f.acord_number() == number)
    }

    /// Looks up a form by its tool name
    pub fn from_tool_name(name: &str) -> Option<FormType> {
        Self::ALL.into_iter().find(|f| f.tool_name() == name)
    }

    /// Position of the form in [`FormType::ALL`]
    pub(crate) fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ACORD {}", self.acord_number())
    }
}

impl FromStr for FormType {
    type Err = UnderwritingError;

    /// Accepts `"130"`, `"acord_130"`, `"ACORD 130"`, a tool name, or the
    /// variant name in snake_case or CamelCase
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(form) = Self::from_tool_name(trimmed) {
            return Ok(form);
        }

        let lowered = trimmed.to_ascii_lowercase();
        let number = lowered
            .strip_prefix("acord")
            .map(|rest| rest.trim_start_matches(['_', '-', ' ']))
            .unwrap_or(lowered.as_str());
        if let Ok(n) = number.parse::<u16>() {
            return Self::from_acord_number(n).ok_or_else(|| UnderwritingError::unknown_form(s));
        }

        let compact: String = lowered.chars().filter(|c| *c != '_').collect();
        Self::ALL
            .into_iter()
            .find(|f| f.key().replace('_', "") == compact)
            .ok_or_else(|| UnderwritingError::unknown_form(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acord_numbers_are_unique() {
        let mut numbers: Vec<u16> = FormType::ALL.iter().map(|f| f.acord_number()).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), FormType::ALL.len());
    }

    #[test]
    fn test_parse_by_number_and_prefix() {
        assert_eq!("130".parse::<FormType>().unwrap(), FormType::WorkersComp);
        assert_eq!("acord_125".parse::<FormType>().unwrap(), FormType::GeneralLiability);
        assert_eq!("ACORD 36".parse::<FormType>().unwrap(), FormType::ComplexWorkersComp);
    }

    #[test]
    fn test_parse_by_name() {
        assert_eq!("business_auto".parse::<FormType>().unwrap(), FormType::BusinessAuto);
        assert_eq!("ComplexWorkersComp".parse::<FormType>().unwrap(), FormType::ComplexWorkersComp);
        assert_eq!("underwrite_acord_140".parse::<FormType>().unwrap(), FormType::Property);
    }

    #[test]
    fn test_parse_unknown_is_error() {
        assert!(matches!(
            "999".parse::<FormType>(),
            Err(UnderwritingError::UnknownFormType(_))
        ));
        assert!(matches!(
            "homeowners".parse::<FormType>(),
            Err(UnderwritingError::UnknownFormType(_))
        ));
    }

    #[test]
    fn test_only_form_125_uses_light_thresholds() {
        for form in FormType::ALL {
            let expected = if form == FormType::GeneralLiability {
                ThresholdFamily::Light
            } else {
                ThresholdFamily::Standard
            };
            assert_eq!(form.threshold_family(), expected, "{form}");
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, form) in FormType::ALL.iter().enumerate() {
            assert_eq!(form.index(), i);
        }
    }
}
