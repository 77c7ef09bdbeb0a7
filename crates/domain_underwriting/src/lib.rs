//! Commercial Underwriting Domain
//!
//! Rules-based underwriting for eight ACORD commercial insurance forms. A
//! caller submits a structured record for a form; the form's rule table turns
//! it into a risk score, and the form's threshold family turns the score into
//! a decision with a premium modifier.
//!
//! # Architecture
//!
//! - **Forms**: `FormType` and `FormSchema` (descriptive template, tool
//!   parameters, validation)
//! - **Rules**: static per-form tables of `ScoringRule`s held in a shared
//!   `RuleRegistry`
//! - **Services**: `RiskEvaluator` (record → score) and
//!   `UnderwritingDecider` (score → decision)
//! - **Aggregate**: `UnderwritingCase` binds one form to one record
//! - **Adapter**: `ToolDispatcher` answers OpenAI-style function calls
//!
//! # Decision flow
//!
//! ```text
//! SubmittedRecord -> validate -> rules -> clamp -> RiskScore
//!                                                -> Accept | Accept with conditions | Decline
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_underwriting::{FormType, SubmittedRecord, UnderwritingCase};
//!
//! let mut case = UnderwritingCase::new();
//! case.submit(FormType::WorkersComp, SubmittedRecord::from_value(record)?)?;
//! let result = case.underwrite()?;
//! ```

pub mod case;
pub mod decider;
pub mod error;
pub mod evaluator;
pub mod form_type;
pub mod record;
pub mod rules;
pub mod schema;
pub mod tool_call;

pub use case::{UnderwritingCase, UnderwritingReport};
pub use decider::{DecisionTier, ThresholdFamily, UnderwritingDecider, UnderwritingResult};
pub use error::UnderwritingError;
pub use evaluator::{RiskAssessment, RiskEvaluator, RiskScore};
pub use form_type::FormType;
pub use record::SubmittedRecord;
pub use rules::{Factor, RiskRuleSet, RuleRegistry, ScoreComponent, ScoringRule};
pub use schema::{FormSchema, ParamKind, ParameterSpec};
pub use tool_call::{tool_definitions, ToolCall, ToolDispatcher, ToolOutput};
