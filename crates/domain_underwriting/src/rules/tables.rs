//! Standard rule tables, one per form

use super::{Factor, ScoringRule, Tier};
use crate::form_type::FormType;

const SEVERITY_TIERS: &[Tier] = &[(&["High"], 30), (&["Medium"], 20)];

const NAICS_TIERS: &[Tier] = &[(&["238", "336", "622"], 40), (&["541", "611", "721"], 10)];

const AUTO_NAICS_TIERS: &[Tier] = &[(&["238", "336", "484"], 40), (&["541", "611", "722"], 10)];

const fn naics(tiers: &'static [Tier]) -> ScoringRule {
    ScoringRule::new(
        "industry",
        Factor::Category {
            field: "naics_code",
            prefix: Some(3),
            tiers,
            otherwise: 20,
        },
    )
}

const fn above(name: &'static str, field: &'static str, brackets: &'static [(i64, i64)], otherwise: i64) -> ScoringRule {
    ScoringRule::new(name, Factor::Above { field, brackets, otherwise })
}

const SEVERITY_ITEM: &[ScoringRule] = &[ScoringRule::new(
    "severity",
    Factor::Category {
        field: "severity",
        prefix: None,
        tiers: SEVERITY_TIERS,
        otherwise: 10,
    },
)];

const fn severity_history(name: &'static str, field: &'static str) -> ScoringRule {
    ScoringRule::new(name, Factor::EachItem { field, rules: SEVERITY_ITEM })
}

const YEARS_IN_BUSINESS: ScoringRule = above("years_in_business", "years_in_business", &[(10, -10)], 10);

const EMPLOYEES_TIERED: ScoringRule = above("employees", "number_of_employees", &[(100, 20), (50, 10)], 5);

const REVENUE_LARGE: ScoringRule = above("annual_revenue", "annual_revenue", &[(10_000_000, 20), (5_000_000, 10)], 5);

const COVERAGE_LARGE: ScoringRule =
    above("requested_coverage", "requested_coverage", &[(10_000_000, 20), (5_000_000, 10)], 5);

static GENERAL_LIABILITY_125: &[ScoringRule] = &[
    above("years_in_business", "years_in_business", &[(10, -10)], 20),
    above("employees", "number_of_employees", &[(50, 15)], -5),
    above("annual_revenue", "annual_revenue", &[(1_000_000, 10)], -5),
    ScoringRule::new(
        "prior_claims",
        Factor::ClaimCount {
            field: "prior_claims",
            per_claim: 5,
            kicker: None,
        },
    ),
];

static CONTRACTORS_SUPPLEMENT_126: &[ScoringRule] = &[
    ScoringRule::new(
        "business_type",
        Factor::Category {
            field: "business_type",
            prefix: None,
            tiers: &[
                (&["Construction", "Manufacturing", "Nightclub"], 30),
                (&["Office", "Retail", "Restaurant"], 10),
            ],
            otherwise: 20,
        },
    ),
    ScoringRule::new(
        "location",
        Factor::Category {
            field: "location",
            prefix: None,
            tiers: &[(&["Urban", "Coastal"], 20), (&["Suburban", "Rural"], 10)],
            otherwise: 15,
        },
    ),
    above("annual_revenue", "annual_revenue", &[(5_000_000, 20), (1_000_000, 10)], 5),
    EMPLOYEES_TIERED,
    YEARS_IN_BUSINESS,
    ScoringRule::new(
        "prior_claims",
        Factor::ClaimCount {
            field: "prior_claims",
            per_claim: 10,
            kicker: None,
        },
    ),
];

static VEHICLE_RULES: &[ScoringRule] = &[
    ScoringRule::new(
        "vehicle_type",
        Factor::Category {
            field: "type",
            prefix: None,
            tiers: &[(&["Truck", "Heavy Equipment"], 30), (&["Car", "Van"], 10)],
            otherwise: 0,
        },
    ),
    above("vehicle_age", "age", &[(10, 20), (5, 10)], 0),
    above("vehicle_value", "value", &[(50_000, 20), (20_000, 10)], 0),
];

static DRIVER_RULES: &[ScoringRule] = &[
    ScoringRule::new(
        "driver_age",
        Factor::OutsideBand {
            field: "age",
            bands: &[(25, 65, 20), (30, 55, 10)],
            otherwise: 0,
        },
    ),
    ScoringRule::new(
        "driver_experience",
        Factor::Below {
            field: "experience",
            brackets: &[(5, 20), (10, 10)],
            otherwise: 0,
        },
    ),
    ScoringRule::new(
        "driving_record",
        Factor::Category {
            field: "record",
            prefix: None,
            tiers: &[(&["Poor"], 30), (&["Fair"], 10)],
            otherwise: 0,
        },
    ),
];

static AUTO: &[ScoringRule] = &[
    ScoringRule::new(
        "vehicles",
        Factor::EachItem {
            field: "vehicles",
            rules: VEHICLE_RULES,
        },
    ),
    ScoringRule::new(
        "drivers",
        Factor::EachItem {
            field: "drivers",
            rules: DRIVER_RULES,
        },
    ),
    naics(AUTO_NAICS_TIERS),
    REVENUE_LARGE,
    severity_history("claims_history", "claims_history"),
    above("requested_coverage", "requested_coverage", &[(1_000_000, 20), (500_000, 10)], 5),
];

static WORKERS_COMP_130: &[ScoringRule] = &[
    naics(NAICS_TIERS),
    EMPLOYEES_TIERED,
    above("total_payroll", "total_payroll", &[(10_000_000, 20), (5_000_000, 10)], 5),
    YEARS_IN_BUSINESS,
    ScoringRule::new(
        "prior_claims",
        Factor::ClaimCount {
            field: "prior_claims",
            per_claim: 10,
            kicker: Some(&Factor::Category {
                field: "claim_severity",
                prefix: None,
                tiers: &[(&["High"], 20), (&["Medium"], 10)],
                otherwise: 5,
            }),
        },
    ),
];

static UMBRELLA_133: &[ScoringRule] = &[
    naics(NAICS_TIERS),
    EMPLOYEES_TIERED,
    REVENUE_LARGE,
    severity_history("claims_history", "claims_history"),
    ScoringRule::new(
        "underlying_limits",
        Factor::Shortfall {
            field: "underlying_limits",
            minimums: &[
                ("general_liability", 1_000_000),
                ("auto_liability", 1_000_000),
                ("employers_liability", 500_000),
            ],
            delta: 20,
        },
    ),
    above(
        "requested_umbrella_limit",
        "requested_umbrella_limit",
        &[(5_000_000, 20), (1_000_000, 10)],
        5,
    ),
];

static BUILDING_RULES: &[ScoringRule] = &[
    ScoringRule::new(
        "construction_type",
        Factor::Category {
            field: "construction_type",
            prefix: None,
            tiers: &[(&["Frame", "Wood"], 30), (&["Masonry", "Steel"], 10)],
            otherwise: 0,
        },
    ),
    above("building_age", "age", &[(50, 20), (20, 10)], 0),
    above("square_footage", "square_footage", &[(50_000, 20), (20_000, 10)], 0),
];

static PROPERTY_140: &[ScoringRule] = &[
    ScoringRule::new(
        "location",
        Factor::Category {
            field: "location",
            prefix: None,
            tiers: &[(&["Coastal", "Urban"], 30), (&["Suburban", "Rural"], 10)],
            otherwise: 20,
        },
    ),
    ScoringRule::new(
        "building",
        Factor::Nested {
            field: "building_info",
            rules: BUILDING_RULES,
        },
    ),
    naics(NAICS_TIERS),
    REVENUE_LARGE,
    severity_history("loss_history", "loss_history"),
    COVERAGE_LARGE,
];

static WORKERS_COMP_36: &[ScoringRule] = &[
    naics(NAICS_TIERS),
    above(
        "employees",
        "number_of_employees",
        &[(1000, 30), (500, 20), (100, 10)],
        5,
    ),
    above(
        "total_payroll",
        "total_payroll",
        &[(50_000_000, 30), (20_000_000, 20), (10_000_000, 10)],
        5,
    ),
    YEARS_IN_BUSINESS,
    severity_history("claims_history", "claims_history"),
    ScoringRule::new(
        "safety_programs",
        Factor::EachEntry {
            field: "safety_programs",
            name_key: "program_name",
            value_key: "effectiveness",
            tiers: &[(&["Excellent"], -10), (&["Good"], -5)],
            otherwise: 0,
        },
    ),
    COVERAGE_LARGE,
];

/// Standard rules of a form, in evaluation order
pub fn rules_for(form_type: FormType) -> &'static [ScoringRule] {
    match form_type {
        FormType::GeneralLiability => GENERAL_LIABILITY_125,
        FormType::ContractorsSupplement => CONTRACTORS_SUPPLEMENT_126,
        FormType::BusinessAuto | FormType::CommercialAuto => AUTO,
        FormType::WorkersComp => WORKERS_COMP_130,
        FormType::Umbrella => UMBRELLA_133,
        FormType::Property => PROPERTY_140,
        FormType::ComplexWorkersComp => WORKERS_COMP_36,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FormSchema;

    #[test]
    fn test_every_rule_reads_a_declared_parameter() {
        for form in FormType::ALL {
            let schema = FormSchema::for_form(form);
            let declared: Vec<&str> = schema.parameters().iter().map(|p| p.name).collect();
            for rule in rules_for(form) {
                assert!(
                    declared.contains(&rule.factor.field()),
                    "{} reads undeclared field {}",
                    form,
                    rule.factor.field()
                );
            }
        }
    }

    #[test]
    fn test_auto_forms_share_rules() {
        assert_eq!(rules_for(FormType::BusinessAuto), rules_for(FormType::CommercialAuto));
    }
}
