//! Registry of the rules and enrichment loaders active in a process
//!
//! Built once at startup from configuration and passed by reference to
//! whatever evaluates cookies. Registration order is retained so that
//! priority ties resolve to whichever plugin was registered first.

use crate::{Cookie, EnrichmentLoader, RegistryError, Rule, RuleAction};
use tracing::debug;

/// Rules and loaders known to the process
#[derive(Default)]
pub struct Registry {
    rules: Vec<Box<dyn Rule>>,
    loaders: Vec<Box<dyn EnrichmentLoader>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateRule`] if the name is taken
    pub fn register_rule(&mut self, rule: Box<dyn Rule>) -> Result<(), RegistryError> {
        if self.rule(rule.name()).is_some() {
            return Err(RegistryError::DuplicateRule(rule.name().to_string()));
        }
        debug!(rule = rule.name(), priority = rule.priority(), "registered rule");
        self.rules.push(rule);
        Ok(())
    }

    /// Register an enrichment loader
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateLoader`] if the name is taken
    pub fn register_loader(
        &mut self,
        loader: Box<dyn EnrichmentLoader>,
    ) -> Result<(), RegistryError> {
        if self.loader(loader.name()).is_some() {
            return Err(RegistryError::DuplicateLoader(loader.name().to_string()));
        }
        debug!(loader = loader.name(), priority = loader.priority(), "registered enrichment loader");
        self.loaders.push(loader);
        Ok(())
    }

    /// Look up a rule by name
    pub fn rule(&self, name: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|r| r.name() == name)
            .map(|r| &**r)
    }

    /// Look up a loader by name
    pub fn loader(&self, name: &str) -> Option<&dyn EnrichmentLoader> {
        self.loaders
            .iter()
            .find(|l| l.name() == name)
            .map(|l| &**l)
    }

    /// Number of registered rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Number of registered loaders
    pub fn loader_count(&self) -> usize {
        self.loaders.len()
    }

    /// Rules ordered by priority, ties in registration order
    pub fn rules_by_priority(&self) -> Vec<&dyn Rule> {
        let mut rules: Vec<&dyn Rule> = self.rules.iter().map(|r| &**r).collect();
        // sort_by_key is stable
        rules.sort_by_key(|r| r.priority());
        rules
    }

    /// Loaders ordered by priority, ties in registration order
    pub fn loaders_by_priority(&self) -> Vec<&dyn EnrichmentLoader> {
        let mut loaders: Vec<&dyn EnrichmentLoader> =
            self.loaders.iter().map(|l| &**l).collect();
        loaders.sort_by_key(|l| l.priority());
        loaders
    }

    /// Loaders willing to enrich the cookie, in the order they should be tried
    pub fn eligible_loaders(&self, cookie: &Cookie) -> Vec<&dyn EnrichmentLoader> {
        self.loaders_by_priority()
            .into_iter()
            .filter(|l| l.can_enrich(cookie))
            .collect()
    }

    /// Run every matching rule against the cookie in priority order
    ///
    /// Stops after the first action that asks for termination.
    pub fn evaluate(&self, cookie: &Cookie) -> Vec<RuleAction> {
        let mut actions = Vec::new();
        for rule in self.rules_by_priority() {
            if !rule.matches(cookie) {
                continue;
            }
            debug!(rule = rule.name(), cookie = %cookie.identifier, "rule matched");
            let action = rule.run(cookie);
            let terminate = action.terminate;
            actions.push(action);
            if terminate {
                break;
            }
        }
        actions
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field("loaders", &self.loaders.iter().map(|l| l.name()).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Enrichment, MetadataSnapshot, Notification, RetrievalError};

    struct FixedRule {
        name: &'static str,
        priority: i32,
        matches: bool,
        terminate: bool,
    }

    impl Rule for FixedRule {
        fn name(&self) -> &str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn matches(&self, _cookie: &Cookie) -> bool {
            self.matches
        }

        fn run(&self, cookie: &Cookie) -> RuleAction {
            let action = RuleAction::notify(
                self.name,
                vec![Notification::new(self.name, self.name).with_data(cookie.identifier.clone())],
            );
            if self.terminate {
                action.terminating()
            } else {
                action
            }
        }
    }

    struct FixedLoader {
        name: &'static str,
        priority: i32,
        eligible: bool,
    }

    impl EnrichmentLoader for FixedLoader {
        fn name(&self) -> &str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn can_enrich(&self, _cookie: &Cookie) -> bool {
            self.eligible
        }

        fn load(&self, _cookie: &Cookie) -> Result<Enrichment, RetrievalError> {
            Ok(Enrichment::new(self.name, 0, MetadataSnapshot::empty()))
        }
    }

    fn rule(name: &'static str, priority: i32, matches: bool, terminate: bool) -> Box<dyn Rule> {
        Box::new(FixedRule {
            name,
            priority,
            matches,
            terminate,
        })
    }

    fn loader(name: &'static str, priority: i32, eligible: bool) -> Box<dyn EnrichmentLoader> {
        Box::new(FixedLoader {
            name,
            priority,
            eligible,
        })
    }

    #[test]
    fn test_duplicate_rule_rejected() {
        let mut registry = Registry::new();
        registry.register_rule(rule("a", 0, true, false)).unwrap();

        let result = registry.register_rule(rule("a", 1, true, false));
        assert_eq!(result, Err(RegistryError::DuplicateRule("a".to_string())));
        assert_eq!(registry.rule_count(), 1);
    }

    #[test]
    fn test_duplicate_loader_rejected() {
        let mut registry = Registry::new();
        registry.register_loader(loader("irods", 0, true)).unwrap();

        let result = registry.register_loader(loader("irods", 0, true));
        assert!(matches!(result, Err(RegistryError::DuplicateLoader(_))));
    }

    #[test]
    fn test_lookup_by_name() {
        let mut registry = Registry::new();
        registry.register_rule(rule("a", 0, true, false)).unwrap();
        registry.register_loader(loader("l", 0, true)).unwrap();

        assert_eq!(registry.rule("a").unwrap().name(), "a");
        assert!(registry.rule("missing").is_none());
        assert_eq!(registry.loader("l").unwrap().name(), "l");
    }

    #[test]
    fn test_priority_ties_keep_registration_order() {
        let mut registry = Registry::new();
        registry.register_loader(loader("second", 1, true)).unwrap();
        registry.register_loader(loader("first_a", 0, true)).unwrap();
        registry.register_loader(loader("first_b", 0, true)).unwrap();

        let names: Vec<&str> = registry
            .loaders_by_priority()
            .iter()
            .map(|l| l.name())
            .collect();
        assert_eq!(names, vec!["first_a", "first_b", "second"]);
    }

    #[test]
    fn test_eligible_loaders_filters() {
        let mut registry = Registry::new();
        registry.register_loader(loader("no", 0, false)).unwrap();
        registry.register_loader(loader("yes", 1, true)).unwrap();

        let cookie = Cookie::new("x");
        let names: Vec<&str> = registry
            .eligible_loaders(&cookie)
            .iter()
            .map(|l| l.name())
            .collect();
        assert_eq!(names, vec!["yes"]);
    }

    #[test]
    fn test_evaluate_runs_matching_rules_in_priority_order() {
        let mut registry = Registry::new();
        registry.register_rule(rule("late", 5, true, false)).unwrap();
        registry.register_rule(rule("skipped", 0, false, false)).unwrap();
        registry.register_rule(rule("early", 1, true, false)).unwrap();

        let actions = registry.evaluate(&Cookie::new("x"));
        let sources: Vec<&str> = actions.iter().map(|a| a.source.as_str()).collect();
        assert_eq!(sources, vec!["early", "late"]);
        assert_eq!(actions[0].notifications[0].data.as_deref(), Some("x"));
    }

    #[test]
    fn test_evaluate_stops_on_terminate() {
        let mut registry = Registry::new();
        registry.register_rule(rule("stop", 0, true, true)).unwrap();
        registry.register_rule(rule("never", 1, true, false)).unwrap();

        let actions = registry.evaluate(&Cookie::new("x"));
        assert_eq!(actions.len(), 1);
        assert!(actions[0].terminate);
    }
}
