//! Underwriting decisions
//!
//! Maps a clamped risk score to a decision tier and a premium modifier.
//! Two threshold families exist and each form is bound to exactly one.

use core_kernel::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::UnderwritingError;
use crate::evaluator::RiskScore;
use crate::form_type::FormType;

/// Decision tiers, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DecisionTier {
    #[serde(rename = "Accept")]
    Accept,
    #[serde(rename = "Accept with conditions")]
    AcceptWithConditions,
    #[serde(rename = "Decline")]
    Decline,
}

impl DecisionTier {
    /// Returns the label used in tool-call and API responses
    pub fn label(&self) -> &'static str {
        match self {
            DecisionTier::Accept => "Accept",
            DecisionTier::AcceptWithConditions => "Accept with conditions",
            DecisionTier::Decline => "Decline",
        }
    }

    /// Returns true unless the tier is a decline
    pub fn is_insurable(&self) -> bool {
        !matches!(self, DecisionTier::Decline)
    }
}

impl fmt::Display for DecisionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score thresholds shared by a group of forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdFamily {
    /// Accept below 50 at 0.8, conditions below 80 at 1.0, decline from 80
    Standard,
    /// Accept below 20 at 0.9, conditions below 40 at 1.0, decline from 40
    Light,
}

impl ThresholdFamily {
    /// First score that no longer earns a plain accept
    pub fn conditions_from(&self) -> u64 {
        match self {
            ThresholdFamily::Standard => 50,
            ThresholdFamily::Light => 20,
        }
    }

    /// First score that is declined
    pub fn decline_from(&self) -> u64 {
        match self {
            ThresholdFamily::Standard => 80,
            ThresholdFamily::Light => 40,
        }
    }

    /// Premium modifier granted on a plain accept
    pub fn accept_modifier(&self) -> Decimal {
        match self {
            ThresholdFamily::Standard => dec!(0.8),
            ThresholdFamily::Light => dec!(0.9),
        }
    }

    /// Classifies a score into a tier
    ///
    /// `[0, conditions_from)` accepts, `[conditions_from, decline_from)`
    /// accepts with conditions, `[decline_from, ∞)` declines.
    pub fn classify(&self, score: RiskScore) -> DecisionTier {
        let value = score.value();
        if value < self.conditions_from() {
            DecisionTier::Accept
        } else if value < self.decline_from() {
            DecisionTier::AcceptWithConditions
        } else {
            DecisionTier::Decline
        }
    }

    /// Premium modifier for a tier, `None` when declined
    pub fn modifier_for(&self, tier: DecisionTier) -> Option<Decimal> {
        match tier {
            DecisionTier::Accept => Some(self.accept_modifier()),
            DecisionTier::AcceptWithConditions => Some(dec!(1.0)),
            DecisionTier::Decline => None,
        }
    }
}

/// Outcome of underwriting one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnderwritingResult {
    /// Decision tier
    pub decision: DecisionTier,
    /// Clamped risk score
    pub risk_score: RiskScore,
    /// Premium multiplier, absent on decline
    #[serde(with = "rust_decimal::serde::float_option")]
    pub premium_modifier: Option<Decimal>,
}

impl UnderwritingResult {
    /// Applies the premium modifier to a base premium
    ///
    /// Returns `Ok(None)` for a declined risk.
    pub fn apply_to(&self, base_premium: Money) -> Result<Option<Money>, UnderwritingError> {
        match self.premium_modifier {
            Some(modifier) => Ok(Some(base_premium.scale(modifier)?.round_to_currency())),
            None => Ok(None),
        }
    }
}

/// Maps risk scores to decisions using each form's threshold family
#[derive(Debug, Clone, Copy, Default)]
pub struct UnderwritingDecider;

impl UnderwritingDecider {
    /// Creates a decider
    pub fn new() -> Self {
        Self
    }

    /// Decides a score for a form. Total over every score.
    pub fn decide(&self, form_type: FormType, risk_score: RiskScore) -> UnderwritingResult {
        Self::decide_with(form_type.threshold_family(), risk_score)
    }

    /// Decides a score against an explicit threshold family
    pub fn decide_with(family: ThresholdFamily, risk_score: RiskScore) -> UnderwritingResult {
        let decision = family.classify(risk_score);
        UnderwritingResult {
            decision,
            risk_score,
            premium_modifier: family.modifier_for(decision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;

    fn decide(form: FormType, score: u64) -> UnderwritingResult {
        UnderwritingDecider::new().decide(form, RiskScore::new(score))
    }

    #[test]
    fn test_light_boundaries() {
        let form = FormType::GeneralLiability;
        assert_eq!(decide(form, 19).decision, DecisionTier::Accept);
        assert_eq!(decide(form, 20).decision, DecisionTier::AcceptWithConditions);
        assert_eq!(decide(form, 39).decision, DecisionTier::AcceptWithConditions);
        assert_eq!(decide(form, 40).decision, DecisionTier::Decline);
    }

    #[test]
    fn test_standard_boundaries() {
        let form = FormType::Property;
        assert_eq!(decide(form, 0).decision, DecisionTier::Accept);
        assert_eq!(decide(form, 49).decision, DecisionTier::Accept);
        assert_eq!(decide(form, 50).decision, DecisionTier::AcceptWithConditions);
        assert_eq!(decide(form, 79).decision, DecisionTier::AcceptWithConditions);
        assert_eq!(decide(form, 80).decision, DecisionTier::Decline);
    }

    #[test]
    fn test_modifiers_per_family() {
        assert_eq!(decide(FormType::GeneralLiability, 0).premium_modifier, Some(dec!(0.9)));
        assert_eq!(decide(FormType::WorkersComp, 0).premium_modifier, Some(dec!(0.8)));
        assert_eq!(decide(FormType::WorkersComp, 60).premium_modifier, Some(dec!(1.0)));
        assert_eq!(decide(FormType::WorkersComp, 100).premium_modifier, None);
    }

    #[test]
    fn test_result_serializes_modifier_as_number() {
        let json = serde_json::to_value(decide(FormType::GeneralLiability, 0)).unwrap();
        assert_eq!(json["decision"], "Accept");
        assert_eq!(json["risk_score"], 0);
        assert_eq!(json["premium_modifier"].as_f64(), Some(0.9));

        let declined = serde_json::to_value(decide(FormType::Umbrella, 95)).unwrap();
        assert_eq!(declined["decision"], "Decline");
        assert!(declined["premium_modifier"].is_null());

        let conditional = serde_json::to_value(decide(FormType::Umbrella, 55)).unwrap();
        assert_eq!(conditional["decision"], "Accept with conditions");
    }

    #[test]
    fn test_apply_to_base_premium() {
        let base = Money::new(dec!(12000), Currency::USD);
        let accepted = decide(FormType::Property, 10).apply_to(base).unwrap();
        assert_eq!(accepted.map(|m| m.amount()), Some(dec!(9600)));

        let declined = decide(FormType::Property, 90).apply_to(base).unwrap();
        assert!(declined.is_none());
    }
}
