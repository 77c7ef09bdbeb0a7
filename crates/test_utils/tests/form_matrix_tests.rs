//! Form Matrix Tests
//!
//! Runs every form's fixtures and generated records through the full
//! underwriting flow.

use domain_underwriting::{
    DecisionTier, FormType, RiskEvaluator, SubmittedRecord, ToolDispatcher, UnderwritingCase,
    UnderwritingDecider,
};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use test_utils::*;

#[test]
fn test_low_risk_fixtures_are_accepted() {
    for form in FormType::ALL {
        let mut case = UnderwritingCase::new();
        case.submit(form, RecordFixtures::low_risk_record(form)).unwrap();
        let result = case.underwrite().unwrap();

        assert_decision(&result, DecisionTier::Accept);
        assert_consistent_modifier(&result);
    }
}

#[test]
fn test_high_risk_fixtures_are_declined() {
    for form in FormType::ALL {
        let mut case = UnderwritingCase::new();
        case.submit(form, RecordFixtures::high_risk_record(form)).unwrap();
        let result = case.underwrite().unwrap();

        assert_decision(&result, DecisionTier::Decline);
        assert_consistent_modifier(&result);
    }
}

#[test]
fn test_accepted_premium_is_discounted() {
    let mut case = UnderwritingCase::new();
    case.submit(FormType::Property, RecordFixtures::low_risk_record(FormType::Property))
        .unwrap();
    let result = case.underwrite().unwrap();

    for base in [PremiumFixtures::usd_base(), PremiumFixtures::cad_base()] {
        let adjusted = result.apply_to(base).unwrap().unwrap();
        assert_premium_adjusted(&base, &adjusted, dec!(0.8));
    }
}

#[test]
fn test_missing_fields_are_reported_per_form() {
    let err = UnderwritingCase::new()
        .submit(
            FormType::ComplexWorkersComp,
            RecordBuilder::new(FormType::ComplexWorkersComp)
                .without("safety_programs")
                .without("naics_code")
                .build(),
        )
        .unwrap_err();
    assert_missing_fields(&err, &["naics_code", "safety_programs"]);

    let err = UnderwritingCase::new()
        .submit(FormType::Umbrella, RecordBuilder::empty(FormType::Umbrella).build())
        .unwrap_err();
    assert_eq!(err.missing_fields().len(), 7);
}

#[test]
fn test_fake_applicant_does_not_change_score() {
    let evaluator = RiskEvaluator::standard();
    for form in FormType::ALL {
        let fixed = RecordBuilder::new(form).build();
        let faked = RecordBuilder::new(form).with_fake_business().build();
        assert_eq!(
            evaluator.evaluate(form, &fixed).unwrap(),
            evaluator.evaluate(form, &faked).unwrap()
        );
    }
}

#[test]
fn test_tool_call_error_output() {
    let call = RecordBuilder::new(FormType::BusinessAuto)
        .with("drivers", "three")
        .tool_call("call_x");
    let output = ToolDispatcher::default().dispatch(&call).unwrap();
    assert_tool_error(&output, "drivers (expected array)");
}

proptest! {
    #[test]
    fn prop_generated_records_always_decide((form, value) in form_and_record_strategy()) {
        let mut case = UnderwritingCase::new();
        case.submit(form, SubmittedRecord::from_value(value).unwrap()).unwrap();

        let first = case.underwrite().unwrap();
        let second = case.underwrite().unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            first.decision,
            UnderwritingDecider::decide_with(form.threshold_family(), first.risk_score).decision
        );
    }

    #[test]
    fn prop_tool_dispatch_matches_case((form, value) in form_and_record_strategy()) {
        let builder = value
            .as_object()
            .unwrap()
            .iter()
            .fold(RecordBuilder::empty(form), |b, (k, v)| b.with(k, v.clone()));
        let output = ToolDispatcher::default().dispatch(&builder.tool_call("p")).unwrap();

        let mut case = UnderwritingCase::new();
        case.submit(form, builder.build()).unwrap();
        prop_assert_eq!(output.output, serde_json::to_string(&case.underwrite().unwrap()).unwrap());
    }

    #[test]
    fn prop_decisions_are_total(form in form_type_strategy(), score in risk_score_strategy()) {
        let result = UnderwritingDecider::new().decide(form, score);
        assert_consistent_modifier(&result);
    }
}
