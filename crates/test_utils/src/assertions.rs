//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for underwriting results that
//! give more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_underwriting::{DecisionTier, ToolOutput, UnderwritingError, UnderwritingResult};
use rust_decimal::Decimal;
use serde_json::Value;

/// Asserts the decision tier of a result
///
/// # Panics
///
/// Panics with the score and modifier when the tier differs
pub fn assert_decision(result: &UnderwritingResult, expected: DecisionTier) {
    assert_eq!(
        result.decision, expected,
        "Expected {} but got {} (risk score {}, modifier {:?})",
        expected, result.decision, result.risk_score, result.premium_modifier
    );
}

/// Asserts the tier and modifier agree: a modifier exactly when insurable
pub fn assert_consistent_modifier(result: &UnderwritingResult) {
    assert_eq!(
        result.premium_modifier.is_some(),
        result.decision.is_insurable(),
        "Decision {} carries modifier {:?}",
        result.decision,
        result.premium_modifier
    );
    if let Some(modifier) = result.premium_modifier {
        assert!(modifier > Decimal::ZERO, "Modifier must be positive, got {}", modifier);
    }
}

/// Asserts a validation error names exactly the given missing fields
pub fn assert_missing_fields(err: &UnderwritingError, expected: &[&str]) {
    assert!(
        matches!(err, UnderwritingError::Validation { .. }),
        "Expected a validation error, got {:?}",
        err
    );
    let missing: Vec<&str> = err.missing_fields().iter().map(String::as_str).collect();
    assert_eq!(missing, expected, "Missing fields differ: {}", err);
}

/// Asserts a tool output carries an error message containing `needle`
pub fn assert_tool_error(output: &ToolOutput, needle: &str) {
    let body: Value = serde_json::from_str(&output.output)
        .unwrap_or_else(|e| panic!("Tool output is not JSON ({}): {}", e, output.output));
    let message = body["error"]
        .as_str()
        .unwrap_or_else(|| panic!("Tool output has no error: {}", output.output));
    assert!(
        message.contains(needle),
        "Tool error {:?} does not mention {:?}",
        message,
        needle
    );
}

/// Asserts an adjusted premium equals `base × modifier` to the cent
pub fn assert_premium_adjusted(base: &Money, adjusted: &Money, modifier: Decimal) {
    assert_eq!(adjusted.currency(), base.currency(), "Currency changed");
    assert_eq!(
        adjusted.amount(),
        (base.amount() * modifier).round_dp(base.currency().decimal_places()),
        "Adjusted premium {} is not {} × {}",
        adjusted,
        base,
        modifier
    );
}
