//! Underwriting Case and Tool Call Tests
//!
//! # Test Organization
//!
//! - `case_lifecycle` - submit / underwrite / report
//! - `premium` - applying the premium modifier
//! - `tool_calls` - assistant-facing dispatch

use core_kernel::{Currency, Money};
use domain_underwriting::{
    tool_definitions, DecisionTier, FormSchema, FormType, SubmittedRecord, ToolCall, ToolDispatcher,
    UnderwritingCase, UnderwritingError,
};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn general_liability() -> Value {
    json!({
        "business_info": { "name": "Quiet Books Ltd", "address": "4 Elm St, Dayton, OH" },
        "business_type": "Office",
        "years_in_business": 12,
        "number_of_employees": 20,
        "annual_revenue": 500000,
        "prior_claims": 0
    })
}

fn workers_comp() -> Value {
    json!({
        "business_info": { "name": "Ridge Roofing", "address": "9 Ridge Rd, Boise, ID" },
        "naics_code": "238160",
        "number_of_employees": 60,
        "total_payroll": 6000000,
        "years_in_business": 5,
        "prior_claims": 1,
        "claim_severity": "High"
    })
}

fn record(value: Value) -> SubmittedRecord {
    SubmittedRecord::from_value(value).unwrap()
}

// ============================================================================
// CASE LIFECYCLE
// ============================================================================

mod case_lifecycle {
    use super::*;

    #[test]
    fn test_submit_then_underwrite() {
        let mut case = UnderwritingCase::new();
        case.submit(FormType::GeneralLiability, record(general_liability()))
            .unwrap();

        let result = case.underwrite().unwrap();
        assert_eq!(result.decision, DecisionTier::Accept);
        assert_eq!(result.risk_score.value(), 0);
        assert_eq!(result.premium_modifier, Some(dec!(0.9)));
        assert!(case.submitted_at().is_some());
    }

    #[test]
    fn test_underwrite_is_idempotent() {
        let mut case = UnderwritingCase::new();
        case.submit(FormType::WorkersComp, record(workers_comp())).unwrap();
        assert_eq!(case.underwrite().unwrap(), case.underwrite().unwrap());
    }

    #[test]
    fn test_underwrite_without_submission() {
        let err = UnderwritingCase::new().underwrite().unwrap_err();
        assert!(matches!(err, UnderwritingError::InvalidState(_)));
        assert!(matches!(
            UnderwritingCase::new().report(),
            Err(UnderwritingError::InvalidState(_))
        ));
    }

    #[test]
    fn test_rejected_first_submission_keeps_case_empty() {
        let mut case = UnderwritingCase::new();
        let incomplete = record(general_liability()).without_field("business_type");

        let err = case.submit(FormType::GeneralLiability, incomplete).unwrap_err();
        assert_eq!(err.missing_fields(), ["business_type"]);
        assert!(!case.is_submitted());
        assert!(matches!(case.underwrite(), Err(UnderwritingError::InvalidState(_))));
    }

    #[test]
    fn test_accepted_submission_always_underwrites() {
        let umbrella = json!({
            "business_info": { "name": "Summit Holdings", "address": "1 Main St, Denver, CO" },
            "naics_code": "541211",
            "number_of_employees": 30,
            "annual_revenue": 2000000,
            "claims_history": [],
            "underlying_limits": {
                "general_liability": 1000000,
                "auto_liability": 1000000,
                "employers_liability": 500000,
                "notes": "n/a"
            },
            "requested_umbrella_limit": 2000000
        });
        let complex = json!({
            "business_info": { "name": "Steelworks Inc", "address": "7 Mill Rd, Gary, IN" },
            "naics_code": "331110",
            "number_of_employees": 800,
            "total_payroll": 1e30,
            "years_in_business": 40,
            "claims_history": [],
            "safety_programs": { "lockout": "Excellent" },
            "requested_coverage": 1e30
        });
        let mut bad_programs = complex.clone();
        bad_programs["safety_programs"] = json!({ "fire": 5 });
        let mut huge_claims = workers_comp();
        huge_claims["prior_claims"] = json!(1e30);

        let mut accepted = 0;
        for (form, value) in [
            (FormType::Umbrella, umbrella.clone()),
            (FormType::ComplexWorkersComp, complex),
            (FormType::ComplexWorkersComp, bad_programs),
            (FormType::WorkersComp, huge_claims),
        ] {
            let mut case = UnderwritingCase::new();
            if case.submit(form, record(value)).is_ok() {
                accepted += 1;
                assert!(case.underwrite().is_ok(), "{form} accepted but failed to underwrite");
            }
        }
        assert_eq!(accepted, 2);

        let err = UnderwritingCase::new()
            .submit(FormType::Umbrella, record(umbrella))
            .unwrap_err();
        assert_eq!(err.invalid_fields(), ["underlying_limits.notes (expected number)"]);
    }

    #[test]
    fn test_resubmission_replaces_form() {
        let mut case = UnderwritingCase::new();
        case.submit(FormType::GeneralLiability, record(general_liability()))
            .unwrap();
        case.submit(FormType::WorkersComp, record(workers_comp())).unwrap();

        assert_eq!(case.form_type(), Some(FormType::WorkersComp));
        assert_eq!(case.underwrite().unwrap().decision, DecisionTier::Decline);
    }

    #[test]
    fn test_case_exposes_form_metadata() {
        let mut case = UnderwritingCase::new();
        case.submit(FormType::WorkersComp, record(workers_comp())).unwrap();

        let schema = case.schema().unwrap();
        assert_eq!(schema.form_type(), FormType::WorkersComp);
        assert!(schema.fields().is_object());
        assert_eq!(
            case.tool_definition().unwrap()["function"]["name"],
            "underwrite_acord_130"
        );
    }

    #[test]
    fn test_report_serializes_breakdown() {
        let mut case = UnderwritingCase::new();
        case.submit(FormType::WorkersComp, record(workers_comp())).unwrap();

        let report = serde_json::to_value(case.report().unwrap()).unwrap();
        assert_eq!(report["form_type"], "workers_comp");
        assert_eq!(report["acord_number"], 130);
        assert_eq!(report["result"]["decision"], "Decline");
        assert_eq!(report["result"]["risk_score"], 100);
        assert!(report["result"]["premium_modifier"].is_null());
        assert_eq!(report["components"][0]["rule"], "industry");
        assert_eq!(report["components"][0]["delta"], 40);
    }
}

// ============================================================================
// PREMIUM
// ============================================================================

mod premium {
    use super::*;

    #[test]
    fn test_accept_discounts_base_premium() {
        let mut case = UnderwritingCase::new();
        case.submit(FormType::GeneralLiability, record(general_liability()))
            .unwrap();
        let result = case.underwrite().unwrap();

        let base = Money::new(dec!(1250.00), Currency::USD);
        let adjusted = result.apply_to(base).unwrap().unwrap();
        assert_eq!(adjusted.amount(), dec!(1125.00));
        assert_eq!(adjusted.currency(), Currency::USD);
    }

    #[test]
    fn test_decline_has_no_premium() {
        let mut case = UnderwritingCase::new();
        case.submit(FormType::WorkersComp, record(workers_comp())).unwrap();
        let result = case.underwrite().unwrap();

        let base = Money::new(dec!(1250.00), Currency::USD);
        assert_eq!(result.apply_to(base).unwrap(), None);
    }
}

// ============================================================================
// TOOL CALLS
// ============================================================================

mod tool_calls {
    use super::*;

    #[test]
    fn test_definitions_match_schemas() {
        let definitions = tool_definitions();
        assert_eq!(definitions.len(), FormSchema::all().len());

        for (definition, schema) in definitions.iter().zip(FormSchema::all()) {
            assert_eq!(definition["type"], "function");
            let required: Vec<&str> = definition["function"]["parameters"]["required"]
                .as_array()
                .unwrap()
                .iter()
                .filter_map(Value::as_str)
                .collect();
            assert_eq!(required, schema.required_fields());
        }
    }

    #[test]
    fn test_dispatch_returns_result_for_call_id() {
        let call = ToolCall::new(
            "call_abc",
            "underwrite_acord_130",
            Value::String(workers_comp().to_string()),
        );
        let output = ToolDispatcher::default().dispatch(&call).unwrap();

        assert_eq!(output.tool_call_id, "call_abc");
        let body: Value = serde_json::from_str(&output.output).unwrap();
        assert_eq!(
            body,
            json!({ "decision": "Decline", "risk_score": 100, "premium_modifier": null })
        );
    }

    #[test]
    fn test_missing_fields_are_returned_to_the_assistant() {
        let call = ToolCall::new(
            "call_def",
            "underwrite_acord_125",
            json!({ "business_type": "Office" }),
        );
        let output = ToolDispatcher::default().dispatch(&call).unwrap();
        let body: Value = serde_json::from_str(&output.output).unwrap();
        let message = body["error"].as_str().unwrap();

        assert!(message.contains("business_info"));
        assert!(message.contains("prior_claims"));
    }

    #[test]
    fn test_dispatch_all_keeps_order() {
        let calls = vec![
            ToolCall::new("1", "underwrite_acord_125", general_liability()),
            ToolCall::new("2", "underwrite_acord_130", workers_comp()),
        ];
        let outputs = ToolDispatcher::default().dispatch_all(&calls).unwrap();
        let ids: Vec<&str> = outputs.iter().map(|o| o.tool_call_id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_tool_call_deserializes_from_assistant_payload() {
        let call: ToolCall = serde_json::from_value(json!({
            "id": "call_1",
            "name": "underwrite_acord_125",
            "arguments": general_liability().to_string()
        }))
        .unwrap();
        assert_eq!(call.record().unwrap(), record(general_liability()));
    }
}
