//! Underwriting handlers

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde_json::Value;

use core_kernel::Money;
use domain_underwriting::{FormType, SubmittedRecord, UnderwritingCase};

use crate::dto::underwriting::{PremiumQuote, UnderwriteParams, UnderwriteResponse};
use crate::{error::ApiError, AppState};

/// Underwrites one record for a form
///
/// The body is the record itself. When `base_premium` is given the
/// response also quotes the adjusted premium.
pub async fn underwrite(
    State(state): State<AppState>,
    Path(form): Path<String>,
    Query(params): Query<UnderwriteParams>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UnderwriteResponse>, ApiError> {
    let form_type: FormType = form.parse()?;
    let Json(body) = body?;
    let record = SubmittedRecord::from_value(body)?;

    let mut case = UnderwritingCase::with_evaluator(state.evaluator.clone());
    case.submit(form_type, record)?;
    let report = case.report()?;

    let premium = match params.base_premium() {
        Some((amount, currency)) => {
            let base = Money::non_negative(amount, currency)
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            Some(PremiumQuote {
                base,
                adjusted: report.result.apply_to(base)?,
            })
        }
        None => None,
    };

    Ok(Json(UnderwriteResponse { report, premium }))
}
