//! Scoring rules
//!
//! A [`RiskRuleSet`] is an ordered list of [`ScoringRule`]s. Each rule reads
//! one attribute of the record (or of every item in a list) through a
//! [`Factor`] and yields a signed score delta. Deltas are summed, so order
//! never changes the total; it is fixed for auditability.
//!
//! Bracket comparisons are strict: `Above` brackets fire when the value is
//! strictly greater than the threshold, `Below` brackets when strictly less.
//! Brackets are tried in table order and the first hit wins.

mod registry;
pub mod tables;

pub use registry::RuleRegistry;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::error::UnderwritingError;
use crate::form_type::FormType;
use crate::record::{decimal_from_number, FieldScope};

/// A set of text labels sharing one delta
pub type Tier = (&'static [&'static str], i64);

/// How a rule turns a record attribute into a delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    /// First bracket whose threshold the value strictly exceeds
    Above {
        field: &'static str,
        brackets: &'static [(i64, i64)],
        otherwise: i64,
    },
    /// First bracket whose threshold the value is strictly below
    Below {
        field: &'static str,
        brackets: &'static [(i64, i64)],
        otherwise: i64,
    },
    /// First band `(low, high, delta)` the value falls outside of
    OutsideBand {
        field: &'static str,
        bands: &'static [(i64, i64, i64)],
        otherwise: i64,
    },
    /// First tier containing the text, optionally compared on a prefix
    Category {
        field: &'static str,
        prefix: Option<usize>,
        tiers: &'static [Tier],
        otherwise: i64,
    },
    /// `count × per_claim` plus an optional kicker, only when count > 0
    ClaimCount {
        field: &'static str,
        per_claim: i64,
        kicker: Option<&'static Factor>,
    },
    /// Sum of the item rules over every object in a list
    EachItem {
        field: &'static str,
        rules: &'static [ScoringRule],
    },
    /// Sum of the nested rules over one object field
    Nested {
        field: &'static str,
        rules: &'static [ScoringRule],
    },
    /// Tier lookup for every value of a name-to-value collection
    EachEntry {
        field: &'static str,
        name_key: &'static str,
        value_key: &'static str,
        tiers: &'static [Tier],
        otherwise: i64,
    },
    /// Fixed delta for every entry whose amount is below its minimum
    Shortfall {
        field: &'static str,
        minimums: &'static [(&'static str, i64)],
        delta: i64,
    },
}

impl Factor {
    /// Field this factor reads
    pub fn field(&self) -> &'static str {
        match *self {
            Factor::Above { field, .. }
            | Factor::Below { field, .. }
            | Factor::OutsideBand { field, .. }
            | Factor::Category { field, .. }
            | Factor::ClaimCount { field, .. }
            | Factor::EachItem { field, .. }
            | Factor::Nested { field, .. }
            | Factor::EachEntry { field, .. }
            | Factor::Shortfall { field, .. } => field,
        }
    }

    pub(crate) fn score(&self, scope: &FieldScope<'_>) -> Result<i64, UnderwritingError> {
        match *self {
            Factor::Above { field, brackets, otherwise } => {
                let value = scope.number(field)?;
                Ok(brackets
                    .iter()
                    .find(|(threshold, _)| value > Decimal::from(*threshold))
                    .map_or(otherwise, |(_, delta)| *delta))
            }
            Factor::Below { field, brackets, otherwise } => {
                let value = scope.number(field)?;
                Ok(brackets
                    .iter()
                    .find(|(threshold, _)| value < Decimal::from(*threshold))
                    .map_or(otherwise, |(_, delta)| *delta))
            }
            Factor::OutsideBand { field, bands, otherwise } => {
                let value = scope.number(field)?;
                Ok(bands
                    .iter()
                    .find(|(low, high, _)| value < Decimal::from(*low) || value > Decimal::from(*high))
                    .map_or(otherwise, |(_, _, delta)| *delta))
            }
            Factor::Category { field, prefix, tiers, otherwise } => {
                let text = scope.text(field)?;
                let key = match prefix {
                    Some(len) => text.get(..len).unwrap_or(text),
                    None => text,
                };
                Ok(tier_delta(tiers, key, otherwise))
            }
            Factor::ClaimCount { field, per_claim, kicker } => {
                let count = scope.number(field)?;
                if count <= Decimal::ZERO {
                    return Ok(0);
                }
                let base = count
                    .checked_mul(Decimal::from(per_claim))
                    .and_then(|total| i64::try_from(total.trunc()).ok())
                    .unwrap_or(if per_claim < 0 { i64::MIN } else { i64::MAX });
                let extra = match kicker {
                    Some(factor) => factor.score(scope)?,
                    None => 0,
                };
                Ok(saturating_sum([base, extra]))
            }
            Factor::EachItem { field, rules } => {
                let mut total = 0i64;
                for item in scope.items(field)? {
                    for rule in rules {
                        total = total.saturating_add(rule.factor.score(&item)?);
                    }
                }
                Ok(total)
            }
            Factor::Nested { field, rules } => {
                let Some(nested) = scope.object(field)? else {
                    return Ok(0);
                };
                let mut total = 0i64;
                for rule in rules {
                    total = total.saturating_add(rule.factor.score(&nested)?);
                }
                Ok(total)
            }
            Factor::EachEntry { field, name_key, value_key, tiers, otherwise } => {
                let mut total = 0i64;
                for (name, value) in scope.entries(field, name_key, value_key)? {
                    let label = value
                        .as_str()
                        .ok_or_else(|| UnderwritingError::invalid_field(scope.entry_path(field, &name), "string"))?;
                    total = total.saturating_add(tier_delta(tiers, label, otherwise));
                }
                Ok(total)
            }
            Factor::Shortfall { field, minimums, delta } => {
                let mut total = 0i64;
                for (name, value) in scope.entries(field, "policy", "limit")? {
                    let Value::Number(n) = value else {
                        return Err(UnderwritingError::invalid_field(scope.entry_path(field, &name), "number"));
                    };
                    let amount = decimal_from_number(n);
                    let minimum = minimums
                        .iter()
                        .find(|(policy, _)| *policy == name)
                        .map_or(0, |(_, minimum)| *minimum);
                    if amount < Decimal::from(minimum) {
                        total = total.saturating_add(delta);
                    }
                }
                Ok(total)
            }
        }
    }
}

/// Labels are matched exactly
fn tier_delta(tiers: &[Tier], key: &str, otherwise: i64) -> i64 {
    tiers
        .iter()
        .find(|(labels, _)| labels.iter().any(|l| *l == key))
        .map_or(otherwise, |(_, delta)| *delta)
}

fn saturating_sum<const N: usize>(values: [i64; N]) -> i64 {
    values.into_iter().fold(0i64, i64::saturating_add)
}

/// A named factor contributing a delta to the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRule {
    pub name: &'static str,
    pub factor: Factor,
}

impl ScoringRule {
    pub const fn new(name: &'static str, factor: Factor) -> Self {
        Self { name, factor }
    }
}

/// Delta contributed by one rule for one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub rule: &'static str,
    pub delta: i64,
}

/// Ordered scoring rules bound to one form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskRuleSet {
    form_type: FormType,
    rules: Vec<ScoringRule>,
}

impl RiskRuleSet {
    /// Creates a rule set
    pub fn new(form_type: FormType, rules: impl Into<Vec<ScoringRule>>) -> Self {
        Self {
            form_type,
            rules: rules.into(),
        }
    }

    /// Standard rule set of a form
    pub fn standard(form_type: FormType) -> Self {
        Self::new(form_type, tables::rules_for(form_type))
    }

    /// Form the rules apply to
    pub fn form_type(&self) -> FormType {
        self.form_type
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[ScoringRule] {
        &self.rules
    }

    /// Top-level record fields the rules read
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        for rule in &self.rules {
            let field = rule.factor.field();
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }

    /// Evaluates every rule, returning one component per rule
    pub(crate) fn components(&self, scope: &FieldScope<'_>) -> Result<Vec<ScoreComponent>, UnderwritingError> {
        self.rules
            .iter()
            .map(|rule| {
                Ok(ScoreComponent {
                    rule: rule.name,
                    delta: rule.factor.score(scope)?,
                })
            })
            .collect()
    }
}
