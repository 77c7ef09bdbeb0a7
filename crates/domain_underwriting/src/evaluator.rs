//! Risk evaluation
//!
//! Validates a record against its form's schema, runs the form's rule set
//! and clamps the summed deltas to a non-negative [`RiskScore`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::error::UnderwritingError;
use crate::form_type::FormType;
use crate::record::SubmittedRecord;
use crate::rules::{RuleRegistry, ScoreComponent};
use crate::schema::FormSchema;

/// Clamped, non-negative risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(u64);

impl RiskScore {
    pub const ZERO: RiskScore = RiskScore(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Clamps a raw sum of deltas at zero
    pub fn clamp(raw: i64) -> Self {
        Self(raw.max(0).unsigned_abs())
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RiskScore> for u64 {
    fn from(score: RiskScore) -> Self {
        score.0
    }
}

/// Full breakdown of one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub form_type: FormType,
    /// Sum of every delta before clamping
    pub raw_score: i64,
    pub score: RiskScore,
    /// One entry per rule, in rule order
    pub components: Vec<ScoreComponent>,
}

/// Computes risk scores from submitted records
///
/// Stateless apart from its rule registry; evaluating the same record twice
/// yields the same score.
#[derive(Debug, Clone)]
pub struct RiskEvaluator {
    registry: Arc<RuleRegistry>,
}

impl Default for RiskEvaluator {
    fn default() -> Self {
        Self::standard()
    }
}

impl RiskEvaluator {
    /// Creates an evaluator over a specific registry
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    /// Creates an evaluator over the shared standard registry
    pub fn standard() -> Self {
        Self::new(RuleRegistry::standard())
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Scores a record and returns the per-rule breakdown
    ///
    /// # Errors
    ///
    /// * `UnknownFormType` if the registry has no rules for the form
    /// * `Validation` if required fields are missing or mistyped
    /// * `InvalidField` if a nested value has the wrong type
    #[instrument(skip(self, record), fields(form = %form_type))]
    pub fn assess(
        &self,
        form_type: FormType,
        record: &SubmittedRecord,
    ) -> Result<RiskAssessment, UnderwritingError> {
        let rule_set = self.registry.get(form_type)?;
        FormSchema::for_form(form_type).validate(record)?;

        let components = rule_set.components(&record.scope())?;
        let raw_score = components
            .iter()
            .fold(0i64, |total, c| total.saturating_add(c.delta));
        let score = RiskScore::clamp(raw_score);

        debug!(raw_score, score = score.value(), "Risk assessed");

        Ok(RiskAssessment {
            form_type,
            raw_score,
            score,
            components,
        })
    }

    /// Computes the clamped risk score of a record
    pub fn evaluate(
        &self,
        form_type: FormType,
        record: &SubmittedRecord,
    ) -> Result<RiskScore, UnderwritingError> {
        self.assess(form_type, record).map(|a| a.score)
    }
}
