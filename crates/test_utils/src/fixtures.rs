//! Pre-built Test Fixtures
//!
//! Provides ready-to-use records for every form. Each form has a low-risk
//! record that is accepted and a high-risk record that is declined.

use core_kernel::{Currency, Money};
use domain_underwriting::{FormType, SubmittedRecord};
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName};
use fake::faker::company::en::CompanyName;
use fake::Fake;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

/// Fixture for applicant identity
pub struct BusinessFixtures;

impl BusinessFixtures {
    /// A fixed applicant, for assertions on exact output
    pub fn business_info() -> Value {
        json!({
            "name": "Northwind Traders Inc",
            "address": "100 Harbor Way, Seattle, WA"
        })
    }

    /// A randomly named applicant
    pub fn fake_business_info() -> Value {
        let number: String = BuildingNumber().fake();
        let street: String = StreetName().fake();
        let city: String = CityName().fake();
        let state: String = StateAbbr().fake();
        json!({
            "name": CompanyName().fake::<String>(),
            "address": format!("{} {}, {}, {}", number, street, city, state)
        })
    }
}

/// Fixture for premium amounts
pub struct PremiumFixtures;

impl PremiumFixtures {
    /// A typical annual base premium
    pub fn usd_base() -> Money {
        Money::new(dec!(1250.00), Currency::USD)
    }

    /// A base premium in another currency
    pub fn cad_base() -> Money {
        Money::new(dec!(980.00), Currency::CAD)
    }
}

/// Fixture for submitted records
pub struct RecordFixtures;

impl RecordFixtures {
    /// A record the form accepts outright
    pub fn low_risk(form: FormType) -> Value {
        let business_info = BusinessFixtures::business_info();
        match form {
            FormType::GeneralLiability => json!({
                "business_info": business_info,
                "business_type": "Office",
                "years_in_business": 12,
                "number_of_employees": 20,
                "annual_revenue": 500000,
                "prior_claims": 0
            }),
            FormType::ContractorsSupplement => json!({
                "business_info": business_info,
                "business_type": "Office",
                "location": "Rural",
                "annual_revenue": 500000,
                "number_of_employees": 10,
                "years_in_business": 15,
                "prior_claims": 0
            }),
            FormType::BusinessAuto | FormType::CommercialAuto => json!({
                "business_info": business_info,
                "vehicles": [{ "type": "Car", "age": 3, "value": 15000 }],
                "drivers": [{ "age": 40, "experience": 15, "record": "Clean" }],
                "naics_code": "541511",
                "annual_revenue": 1000000,
                "claims_history": [],
                "requested_coverage": 300000
            }),
            FormType::WorkersComp => json!({
                "business_info": business_info,
                "naics_code": "541511",
                "number_of_employees": 10,
                "total_payroll": 400000,
                "years_in_business": 30,
                "prior_claims": 0,
                "claim_severity": "Low"
            }),
            FormType::Umbrella => json!({
                "business_info": business_info,
                "naics_code": "541211",
                "number_of_employees": 30,
                "annual_revenue": 2000000,
                "claims_history": [],
                "underlying_limits": {
                    "general_liability": 1000000,
                    "auto_liability": 1000000,
                    "employers_liability": 1000000
                },
                "requested_umbrella_limit": 1000000
            }),
            FormType::Property => json!({
                "business_info": business_info,
                "location": "Suburban",
                "building_info": { "construction_type": "Steel", "age": 10, "square_footage": 10000 },
                "naics_code": "611310",
                "annual_revenue": 1000000,
                "loss_history": [],
                "requested_coverage": 1000000
            }),
            FormType::ComplexWorkersComp => json!({
                "business_info": business_info,
                "naics_code": "541330",
                "number_of_employees": 50,
                "total_payroll": 5000000,
                "years_in_business": 20,
                "claims_history": [],
                "safety_programs": { "fire_drills": "Excellent", "ergonomics": "Good" },
                "requested_coverage": 1000000
            }),
        }
    }

    /// A record the form declines
    pub fn high_risk(form: FormType) -> Value {
        let business_info = BusinessFixtures::business_info();
        match form {
            FormType::GeneralLiability => json!({
                "business_info": business_info,
                "business_type": "Nightclub",
                "years_in_business": 3,
                "number_of_employees": 60,
                "annual_revenue": 2000000,
                "prior_claims": 2
            }),
            FormType::ContractorsSupplement => json!({
                "business_info": business_info,
                "business_type": "Construction",
                "location": "Urban",
                "annual_revenue": 6000000,
                "number_of_employees": 120,
                "years_in_business": 2,
                "prior_claims": 3
            }),
            FormType::BusinessAuto | FormType::CommercialAuto => json!({
                "business_info": business_info,
                "vehicles": [{ "type": "Truck", "age": 12, "value": 60000 }],
                "drivers": [{ "age": 22, "experience": 3, "record": "Poor" }],
                "naics_code": "484110",
                "annual_revenue": 2000000,
                "claims_history": [{ "year": 2021, "severity": "High" }],
                "requested_coverage": 2000000
            }),
            FormType::WorkersComp => json!({
                "business_info": business_info,
                "naics_code": "238000",
                "number_of_employees": 60,
                "total_payroll": 6000000,
                "years_in_business": 5,
                "prior_claims": 1,
                "claim_severity": "High"
            }),
            FormType::Umbrella => json!({
                "business_info": business_info,
                "naics_code": "238910",
                "number_of_employees": 120,
                "annual_revenue": 12000000,
                "claims_history": [
                    { "year": 2021, "severity": "High" },
                    { "year": 2023, "severity": "High" }
                ],
                "underlying_limits": {
                    "general_liability": 500000,
                    "auto_liability": 500000,
                    "employers_liability": 100000
                },
                "requested_umbrella_limit": 10000000
            }),
            FormType::Property => json!({
                "business_info": business_info,
                "location": "Coastal",
                "building_info": { "construction_type": "Frame", "age": 60, "square_footage": 60000 },
                "naics_code": "721110",
                "annual_revenue": 1000000,
                "loss_history": [],
                "requested_coverage": 12000000
            }),
            FormType::ComplexWorkersComp => json!({
                "business_info": business_info,
                "naics_code": "238220",
                "number_of_employees": 1500,
                "total_payroll": 60000000,
                "years_in_business": 3,
                "claims_history": [{ "year": 2022, "severity": "High" }],
                "safety_programs": {},
                "requested_coverage": 20000000
            }),
        }
    }

    /// Low-risk record as a `SubmittedRecord`
    pub fn low_risk_record(form: FormType) -> SubmittedRecord {
        SubmittedRecord::from_value(Self::low_risk(form)).expect("fixture is an object")
    }

    /// High-risk record as a `SubmittedRecord`
    pub fn high_risk_record(form: FormType) -> SubmittedRecord {
        SubmittedRecord::from_value(Self::high_risk(form)).expect("fixture is an object")
    }
}
