//! Underwriting DTOs

use core_kernel::{Currency, Money};
use domain_underwriting::UnderwritingReport;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Optional query parameters of the underwrite endpoint
#[derive(Debug, Default, Deserialize)]
pub struct UnderwriteParams {
    /// Base premium to adjust by the premium modifier
    pub base_premium: Option<Decimal>,
    /// Currency of the base premium, USD when absent
    pub currency: Option<Currency>,
}

impl UnderwriteParams {
    pub fn base_premium(&self) -> Option<(Decimal, Currency)> {
        self.base_premium
            .map(|amount| (amount, self.currency.unwrap_or(Currency::USD)))
    }
}

#[derive(Debug, Serialize)]
pub struct PremiumQuote {
    pub base: Money,
    /// Absent on decline
    pub adjusted: Option<Money>,
}

#[derive(Debug, Serialize)]
pub struct UnderwriteResponse {
    #[serde(flatten)]
    pub report: UnderwritingReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<PremiumQuote>,
}
