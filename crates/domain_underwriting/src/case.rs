//! Underwriting Case Aggregate
//!
//! An underwriting case binds one form to one submitted record and produces
//! the decision for it. It is the unit the API and the tool dispatcher
//! construct and query.
//!
//! # Invariants
//!
//! - A case holds at most one accepted submission; resubmitting replaces it
//! - A rejected submission leaves the previous one untouched
//! - `underwrite` is only available once a submission has been accepted

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use core_kernel::{CaseId, SubmissionId};

use crate::decider::{UnderwritingDecider, UnderwritingResult};
use crate::error::UnderwritingError;
use crate::evaluator::{RiskAssessment, RiskEvaluator};
use crate::form_type::FormType;
use crate::record::SubmittedRecord;
use crate::rules::ScoreComponent;
use crate::schema::FormSchema;

/// A record accepted by a case
#[derive(Debug, Clone)]
struct Submission {
    id: SubmissionId,
    form_type: FormType,
    record: SubmittedRecord,
    submitted_at: DateTime<Utc>,
}

/// Presentation view of an underwritten case
#[derive(Debug, Clone, Serialize)]
pub struct UnderwritingReport {
    pub case_id: CaseId,
    pub submission_id: SubmissionId,
    pub form_type: FormType,
    pub acord_number: u16,
    pub form_name: &'static str,
    pub submitted_at: DateTime<Utc>,
    pub result: UnderwritingResult,
    /// Sum of every rule delta before clamping
    pub raw_score: i64,
    pub components: Vec<ScoreComponent>,
}

/// Underwriting case aggregate root
#[derive(Debug, Clone)]
pub struct UnderwritingCase {
    id: CaseId,
    evaluator: RiskEvaluator,
    decider: UnderwritingDecider,
    submission: Option<Submission>,
}

impl Default for UnderwritingCase {
    fn default() -> Self {
        Self::new()
    }
}

impl UnderwritingCase {
    /// Opens a case backed by the standard rule registry
    pub fn new() -> Self {
        Self::with_evaluator(RiskEvaluator::standard())
    }

    /// Opens a case backed by a specific evaluator
    pub fn with_evaluator(evaluator: RiskEvaluator) -> Self {
        Self {
            id: CaseId::new(),
            evaluator,
            decider: UnderwritingDecider::new(),
            submission: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> CaseId {
        self.id
    }

    /// Form of the accepted submission
    pub fn form_type(&self) -> Option<FormType> {
        self.submission.as_ref().map(|s| s.form_type)
    }

    pub fn form_name(&self) -> Option<&'static str> {
        self.form_type().map(|f| f.form_name())
    }

    /// Schema of the submitted form
    pub fn schema(&self) -> Option<&'static FormSchema> {
        self.form_type().map(FormSchema::for_form)
    }

    /// Tool definition of the submitted form
    pub fn tool_definition(&self) -> Option<Value> {
        self.schema().map(FormSchema::tool_definition)
    }

    pub fn record(&self) -> Option<&SubmittedRecord> {
        self.submission.as_ref().map(|s| &s.record)
    }

    pub fn submission_id(&self) -> Option<SubmissionId> {
        self.submission.as_ref().map(|s| s.id)
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submission.as_ref().map(|s| s.submitted_at)
    }

    pub fn is_submitted(&self) -> bool {
        self.submission.is_some()
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Submits a record for a form
    ///
    /// # Errors
    ///
    /// * `UnknownFormType` if the evaluator has no rules for the form
    /// * `Validation` naming every missing or mistyped field
    pub fn submit(&mut self, form_type: FormType, record: SubmittedRecord) -> Result<SubmissionId, UnderwritingError> {
        if !self.evaluator.registry().contains(form_type) {
            return Err(UnderwritingError::unknown_form(form_type));
        }

        if let Err(err) = FormSchema::for_form(form_type).validate(&record) {
            warn!(case_id = %self.id, form = %form_type, error = %err, "Submission rejected");
            return Err(err);
        }

        let submission = Submission {
            id: SubmissionId::new(),
            form_type,
            record,
            submitted_at: Utc::now(),
        };
        let id = submission.id;
        info!(case_id = %self.id, submission_id = %id, form = %form_type, "Submission accepted");
        self.submission = Some(submission);
        Ok(id)
    }

    /// Evaluates and decides the accepted submission
    ///
    /// Recomputed on every call; nothing is cached.
    pub fn underwrite(&self) -> Result<UnderwritingResult, UnderwritingError> {
        let (submission, assessment) = self.assess()?;
        Ok(self.decider.decide(submission.form_type, assessment.score))
    }

    /// Underwrites the submission and returns the full breakdown
    pub fn report(&self) -> Result<UnderwritingReport, UnderwritingError> {
        let (submission, assessment) = self.assess()?;
        let result = self.decider.decide(submission.form_type, assessment.score);

        info!(
            case_id = %self.id,
            form = %submission.form_type,
            decision = %result.decision,
            risk_score = result.risk_score.value(),
            "Case underwritten"
        );

        Ok(UnderwritingReport {
            case_id: self.id,
            submission_id: submission.id,
            form_type: submission.form_type,
            acord_number: submission.form_type.acord_number(),
            form_name: submission.form_type.form_name(),
            submitted_at: submission.submitted_at,
            result,
            raw_score: assessment.raw_score,
            components: assessment.components,
        })
    }

    fn assess(&self) -> Result<(&Submission, RiskAssessment), UnderwritingError> {
        let submission = self
            .submission
            .as_ref()
            .ok_or_else(|| UnderwritingError::invalid_state("no record has been submitted to this case"))?;
        let assessment = self.evaluator.assess(submission.form_type, &submission.record)?;
        Ok((submission, assessment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn workers_comp() -> SubmittedRecord {
        SubmittedRecord::from_value(json!({
            "business_info": { "name": "Acme Builders", "address": "1 Main St" },
            "naics_code": "238160",
            "number_of_employees": 60,
            "total_payroll": 6000000,
            "years_in_business": 5,
            "prior_claims": 1,
            "claim_severity": "High"
        }))
        .unwrap()
    }

    #[test]
    fn test_underwrite_before_submit_is_invalid_state() {
        let case = UnderwritingCase::new();
        assert!(matches!(case.underwrite(), Err(UnderwritingError::InvalidState(_))));
        assert!(case.form_type().is_none());
    }

    #[test]
    fn test_failed_submit_keeps_previous_submission() {
        let mut case = UnderwritingCase::new();
        let first = case.submit(FormType::WorkersComp, workers_comp()).unwrap();

        let broken = workers_comp().without_field("total_payroll");
        assert!(case.submit(FormType::WorkersComp, broken).is_err());

        assert_eq!(case.submission_id(), Some(first));
        assert!(case.underwrite().is_ok());
    }

    #[test]
    fn test_report_carries_form_metadata() {
        let mut case = UnderwritingCase::new();
        case.submit(FormType::WorkersComp, workers_comp()).unwrap();
        let report = case.report().unwrap();

        assert_eq!(report.acord_number, 130);
        assert_eq!(report.case_id, case.id());
        assert_eq!(report.raw_score, 100);
        assert_eq!(report.components.len(), 5);
        assert_eq!(case.form_name(), Some(FormType::WorkersComp.form_name()));
        assert!(case.tool_definition().is_some());
    }
}
