use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::RiskRuleSet;
use crate::error::UnderwritingError;
use crate::form_type::FormType;

static STANDARD: Lazy<Arc<RuleRegistry>> = Lazy::new(|| Arc::new(RuleRegistry::build_standard()));

/// Rule sets by form type
///
/// The standard registry is built once per process and shared; tests and
/// alternative products register their own sets on an empty registry.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rule_sets: HashMap<FormType, Arc<RiskRuleSet>>,
}

impl RuleRegistry {
    /// Creates a registry with no rule sets
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shared registry holding the standard set of every form
    pub fn standard() -> Arc<RuleRegistry> {
        Arc::clone(&STANDARD)
    }

    fn build_standard() -> Self {
        let mut registry = Self::empty();
        for form in FormType::ALL {
            registry.register(RiskRuleSet::standard(form));
        }
        tracing::debug!(forms = registry.rule_sets.len(), "Standard rule registry built");
        registry
    }

    /// Registers a rule set, replacing any previous set for its form
    pub fn register(&mut self, rule_set: RiskRuleSet) {
        self.rule_sets.insert(rule_set.form_type(), Arc::new(rule_set));
    }

    /// Looks up the rule set of a form
    ///
    /// # Errors
    ///
    /// `UnknownFormType` when no set is registered for the form
    pub fn get(&self, form_type: FormType) -> Result<Arc<RiskRuleSet>, UnderwritingError> {
        self.rule_sets
            .get(&form_type)
            .cloned()
            .ok_or_else(|| UnderwritingError::unknown_form(form_type))
    }

    pub fn contains(&self, form_type: FormType) -> bool {
        self.rule_sets.contains_key(&form_type)
    }

    /// Registered forms in canonical order
    pub fn forms(&self) -> Vec<FormType> {
        FormType::ALL.into_iter().filter(|f| self.contains(*f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_covers_every_form() {
        let registry = RuleRegistry::standard();
        assert_eq!(registry.forms(), FormType::ALL.to_vec());
        assert!(Arc::ptr_eq(&registry, &RuleRegistry::standard()));
    }

    #[test]
    fn test_empty_registry_reports_unknown_form() {
        let registry = RuleRegistry::empty();
        let err = registry.get(FormType::Umbrella).unwrap_err();
        assert!(matches!(err, UnderwritingError::UnknownFormType(_)));
    }

    #[test]
    fn test_register_replaces_existing_set() {
        let mut registry = RuleRegistry::empty();
        registry.register(RiskRuleSet::standard(FormType::Property));
        registry.register(RiskRuleSet::new(FormType::Property, Vec::new()));
        assert!(registry.get(FormType::Property).unwrap().rules().is_empty());
    }
}
