//! Tool parameter tables
//!
//! The exact record fields each form's rule set consumes. All of them are
//! required.

use super::{ChildSpec, ParamKind, ParameterSpec};
use crate::form_type::FormType;

macro_rules! child {
    ($name:literal, $kind:ident) => {
        ChildSpec {
            name: $name,
            kind: ParamKind::$kind,
        }
    };
}

const BUSINESS_INFO: ParameterSpec = ParameterSpec::nested(
    "business_info",
    ParamKind::Object,
    "Applicant business name and address",
    &[child!("name", String), child!("address", String)],
);
const BUSINESS_TYPE: ParameterSpec =
    ParameterSpec::scalar("business_type", ParamKind::String, "Type of business, e.g. Construction, Office, Retail");
const LOCATION: ParameterSpec =
    ParameterSpec::scalar("location", ParamKind::String, "Location category: Urban, Coastal, Suburban or Rural");
const NAICS_CODE: ParameterSpec =
    ParameterSpec::scalar("naics_code", ParamKind::String, "NAICS industry code of the applicant");
const YEARS_IN_BUSINESS: ParameterSpec =
    ParameterSpec::scalar("years_in_business", ParamKind::Integer, "Number of years the business has operated");
const EMPLOYEES: ParameterSpec =
    ParameterSpec::scalar("number_of_employees", ParamKind::Integer, "Total number of employees");
const ANNUAL_REVENUE: ParameterSpec =
    ParameterSpec::scalar("annual_revenue", ParamKind::Number, "Annual revenue in USD");
const TOTAL_PAYROLL: ParameterSpec =
    ParameterSpec::scalar("total_payroll", ParamKind::Number, "Total annual payroll in USD");
const PRIOR_CLAIMS: ParameterSpec =
    ParameterSpec::scalar("prior_claims", ParamKind::Integer, "Number of prior claims");
const CLAIM_SEVERITY: ParameterSpec =
    ParameterSpec::scalar("claim_severity", ParamKind::String, "Severity of prior claims: High, Medium or Low");
const REQUESTED_COVERAGE: ParameterSpec =
    ParameterSpec::scalar("requested_coverage", ParamKind::Number, "Requested coverage limit in USD");
const REQUESTED_UMBRELLA_LIMIT: ParameterSpec = ParameterSpec::scalar(
    "requested_umbrella_limit",
    ParamKind::Number,
    "Requested umbrella coverage limit in USD",
);

const SEVERITY_ITEM: &[ChildSpec] = &[child!("year", Integer), child!("severity", String)];

const CLAIMS_HISTORY: ParameterSpec = ParameterSpec::nested(
    "claims_history",
    ParamKind::Array,
    "Past claims with year and severity (High, Medium, Low)",
    SEVERITY_ITEM,
);
const LOSS_HISTORY: ParameterSpec = ParameterSpec::nested(
    "loss_history",
    ParamKind::Array,
    "Past property losses with year and severity (High, Medium, Low)",
    SEVERITY_ITEM,
);
const VEHICLES: ParameterSpec = ParameterSpec::nested(
    "vehicles",
    ParamKind::Array,
    "Scheduled vehicles with type (Truck, Heavy Equipment, Car, Van), age in years and value in USD",
    &[
        child!("type", String),
        child!("age", Number),
        child!("value", Number),
    ],
);
const DRIVERS: ParameterSpec = ParameterSpec::nested(
    "drivers",
    ParamKind::Array,
    "Drivers with age, years of driving experience and record (Clean, Fair, Poor)",
    &[
        child!("age", Number),
        child!("experience", Number),
        child!("record", String),
    ],
);
const UNDERLYING_LIMITS: ParameterSpec = ParameterSpec::nested(
    "underlying_limits",
    ParamKind::Object,
    "Limits of the underlying policies in USD",
    &[
        child!("general_liability", Number),
        child!("auto_liability", Number),
        child!("employers_liability", Number),
    ],
)
.with_entries(ParamKind::Number);
const BUILDING_INFO: ParameterSpec = ParameterSpec::nested(
    "building_info",
    ParamKind::Object,
    "Building construction type (Frame, Wood, Masonry, Steel), age in years and square footage",
    &[
        child!("construction_type", String),
        child!("age", Number),
        child!("square_footage", Number),
    ],
);
const SAFETY_PROGRAMS: ParameterSpec = ParameterSpec::nested(
    "safety_programs",
    ParamKind::Mapping,
    "Safety programs and their effectiveness (Excellent, Good, Average)",
    &[
        child!("program_name", String),
        child!("effectiveness", String),
    ],
)
.with_entries(ParamKind::String);

static GENERAL_LIABILITY_125: [ParameterSpec; 6] = [
    BUSINESS_INFO,
    BUSINESS_TYPE,
    YEARS_IN_BUSINESS,
    EMPLOYEES,
    ANNUAL_REVENUE,
    PRIOR_CLAIMS,
];

static GENERAL_LIABILITY_126: [ParameterSpec; 7] = [
    BUSINESS_INFO,
    BUSINESS_TYPE,
    LOCATION,
    ANNUAL_REVENUE,
    EMPLOYEES,
    YEARS_IN_BUSINESS,
    PRIOR_CLAIMS,
];

static AUTO: [ParameterSpec; 7] = [
    BUSINESS_INFO,
    VEHICLES,
    DRIVERS,
    NAICS_CODE,
    ANNUAL_REVENUE,
    CLAIMS_HISTORY,
    REQUESTED_COVERAGE,
];

static WORKERS_COMP_130: [ParameterSpec; 7] = [
    BUSINESS_INFO,
    NAICS_CODE,
    EMPLOYEES,
    TOTAL_PAYROLL,
    YEARS_IN_BUSINESS,
    PRIOR_CLAIMS,
    CLAIM_SEVERITY,
];

static UMBRELLA_133: [ParameterSpec; 7] = [
    BUSINESS_INFO,
    NAICS_CODE,
    EMPLOYEES,
    ANNUAL_REVENUE,
    CLAIMS_HISTORY,
    UNDERLYING_LIMITS,
    REQUESTED_UMBRELLA_LIMIT,
];

static PROPERTY_140: [ParameterSpec; 7] = [
    BUSINESS_INFO,
    LOCATION,
    BUILDING_INFO,
    NAICS_CODE,
    ANNUAL_REVENUE,
    LOSS_HISTORY,
    REQUESTED_COVERAGE,
];

static WORKERS_COMP_36: [ParameterSpec; 8] = [
    BUSINESS_INFO,
    NAICS_CODE,
    EMPLOYEES,
    TOTAL_PAYROLL,
    YEARS_IN_BUSINESS,
    CLAIMS_HISTORY,
    SAFETY_PROGRAMS,
    REQUESTED_COVERAGE,
];

pub(super) fn parameters_for(form_type: FormType) -> &'static [ParameterSpec] {
    match form_type {
        FormType::GeneralLiability => &GENERAL_LIABILITY_125,
        FormType::ContractorsSupplement => &GENERAL_LIABILITY_126,
        FormType::BusinessAuto | FormType::CommercialAuto => &AUTO,
        FormType::WorkersComp => &WORKERS_COMP_130,
        FormType::Umbrella => &UMBRELLA_133,
        FormType::Property => &PROPERTY_140,
        FormType::ComplexWorkersComp => &WORKERS_COMP_36,
    }
}
