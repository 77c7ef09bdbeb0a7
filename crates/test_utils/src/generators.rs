//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating records that always pass
//! schema validation, so properties exercise scoring rather than rejection.

use domain_underwriting::{FormSchema, FormType, RiskScore};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// Strategy for any form type
pub fn form_type_strategy() -> impl Strategy<Value = FormType> {
    proptest::sample::select(FormType::ALL.to_vec())
}

/// Strategy for risk scores around every decision threshold
pub fn risk_score_strategy() -> impl Strategy<Value = RiskScore> {
    (0u64..300).prop_map(RiskScore::new)
}

/// Strategy for six-digit NAICS codes across high, low and neutral sectors
pub fn naics_strategy() -> impl Strategy<Value = String> {
    (
        proptest::sample::select(vec!["238", "336", "484", "541", "611", "622", "721", "722", "423"]),
        0u32..1000,
    )
        .prop_map(|(prefix, suffix)| format!("{}{:03}", prefix, suffix))
}

/// Strategy for claim severity labels, including unrated ones
pub fn severity_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(vec!["High", "Medium", "Low", "Minor"]).prop_map(str::to_string)
}

/// Strategy for a claims or loss history
pub fn history_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec((2010u32..2025, severity_strategy()), 0..5).prop_map(|items| {
        Value::Array(
            items
                .into_iter()
                .map(|(year, severity)| json!({ "year": year, "severity": severity }))
                .collect(),
        )
    })
}

/// Strategy for one scheduled vehicle
pub fn vehicle_strategy() -> impl Strategy<Value = Value> {
    (
        proptest::sample::select(vec!["Truck", "Heavy Equipment", "Car", "Van", "Trailer"]),
        0u32..30,
        1_000u32..150_000,
    )
        .prop_map(|(kind, age, value)| json!({ "type": kind, "age": age, "value": value }))
}

/// Strategy for one driver
pub fn driver_strategy() -> impl Strategy<Value = Value> {
    (
        16u32..85,
        0u32..40,
        proptest::sample::select(vec!["Clean", "Fair", "Poor"]),
    )
        .prop_map(|(age, experience, record)| json!({ "age": age, "experience": experience, "record": record }))
}

fn underlying_limits_strategy() -> impl Strategy<Value = Value> {
    (0u64..3_000_000, 0u64..3_000_000, 0u64..1_500_000).prop_map(|(gl, auto, employers)| {
        json!({
            "general_liability": gl,
            "auto_liability": auto,
            "employers_liability": employers
        })
    })
}

fn building_strategy() -> impl Strategy<Value = Value> {
    (
        proptest::sample::select(vec!["Frame", "Wood", "Masonry", "Steel", "Concrete"]),
        0u32..120,
        500u32..200_000,
    )
        .prop_map(|(construction, age, square_footage)| {
            json!({ "construction_type": construction, "age": age, "square_footage": square_footage })
        })
}

fn safety_programs_strategy() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(
        "[a-z_]{3,12}",
        proptest::sample::select(vec!["Excellent", "Good", "Average", "Poor"]),
        0..4,
    )
    .prop_map(|programs| {
        Value::Object(
            programs
                .into_iter()
                .map(|(name, effectiveness)| (name, Value::from(effectiveness)))
                .collect(),
        )
    })
}

fn scalars_strategy() -> impl Strategy<Value = Map<String, Value>> {
    (
        (
            proptest::sample::select(vec!["Construction", "Office", "Retail", "Nightclub", "Farm"]),
            proptest::sample::select(vec!["Urban", "Coastal", "Suburban", "Rural", "Mountain"]),
            naics_strategy(),
            0u32..60,
        ),
        (0u32..2500, 0u64..20_000_000, 0u64..80_000_000, 0u32..8),
        (severity_strategy(), 0u64..25_000_000, 0u64..15_000_000),
    )
        .prop_map(
            |(
                (business_type, location, naics, years),
                (employees, revenue, payroll, prior_claims),
                (claim_severity, coverage, umbrella),
            )| {
                let mut fields = Map::new();
                fields.insert("business_type".into(), business_type.into());
                fields.insert("location".into(), location.into());
                fields.insert("naics_code".into(), naics.into());
                fields.insert("years_in_business".into(), years.into());
                fields.insert("number_of_employees".into(), employees.into());
                fields.insert("annual_revenue".into(), revenue.into());
                fields.insert("total_payroll".into(), payroll.into());
                fields.insert("prior_claims".into(), prior_claims.into());
                fields.insert("claim_severity".into(), claim_severity.into());
                fields.insert("requested_coverage".into(), coverage.into());
                fields.insert("requested_umbrella_limit".into(), umbrella.into());
                fields
            },
        )
}

fn nested_strategy() -> impl Strategy<Value = Map<String, Value>> {
    (
        history_strategy(),
        history_strategy(),
        prop::collection::vec(vehicle_strategy(), 0..5),
        prop::collection::vec(driver_strategy(), 0..5),
        underlying_limits_strategy(),
        building_strategy(),
        safety_programs_strategy(),
    )
        .prop_map(|(claims, losses, vehicles, drivers, limits, building, safety)| {
            let mut fields = Map::new();
            fields.insert("claims_history".into(), claims);
            fields.insert("loss_history".into(), losses);
            fields.insert("vehicles".into(), Value::Array(vehicles));
            fields.insert("drivers".into(), Value::Array(drivers));
            fields.insert("underlying_limits".into(), limits);
            fields.insert("building_info".into(), building);
            fields.insert("safety_programs".into(), safety);
            fields
        })
}

/// Strategy for a valid record of one form
///
/// Generates every known field, then keeps only those the form declares.
pub fn record_strategy(form: FormType) -> impl Strategy<Value = Value> {
    (scalars_strategy(), nested_strategy()).prop_map(move |(scalars, nested)| {
        let mut all = scalars;
        all.extend(nested);
        all.insert(
            "business_info".into(),
            json!({ "name": "Generated Co", "address": "1 Generated Way" }),
        );

        let required = FormSchema::for_form(form).required_fields();
        Value::Object(
            all.into_iter()
                .filter(|(name, _)| required.contains(&name.as_str()))
                .collect(),
        )
    })
}

/// Strategy for a form paired with a valid record for it
pub fn form_and_record_strategy() -> impl Strategy<Value = (FormType, Value)> {
    form_type_strategy().prop_flat_map(|form| (Just(form), record_strategy(form)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_underwriting::SubmittedRecord;

    proptest! {
        #[test]
        fn generated_records_pass_validation((form, value) in form_and_record_strategy()) {
            let record = SubmittedRecord::from_value(value).unwrap();
            prop_assert!(FormSchema::for_form(form).validate(&record).is_ok());
        }

        #[test]
        fn naics_codes_have_six_digits(code in naics_strategy()) {
            prop_assert_eq!(code.len(), 6);
            prop_assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
