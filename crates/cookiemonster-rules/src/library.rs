//! Rules that fire when a data object joins a watched study's sequencing library

use crate::constants::{
    INTERVAL_STUDY_ID, IRODS_STUDY_ID_KEY, IRODS_TARGET_KEY, IRODS_TARGET_LIBRARY_VALUE,
    PAGE_STUDY_ID, STUDY_INTERVAL_RULE_NAME, STUDY_PAGE_RULE_NAME,
};
use crate::{Condition, CorrelationMatcher};
use cookiemonster_domain::{Cookie, Notification, Rule, RuleAction};
use tracing::debug;

/// Matches cookies whose resolved metadata puts them in a given study and
/// marks them as a library target
///
/// One instance exists per watched study; they differ only in name, study
/// identifier and priority.
#[derive(Debug, Clone)]
pub struct LibraryUpdateRule {
    name: String,
    study_id: String,
    priority: i32,
    matcher: CorrelationMatcher,
}

impl LibraryUpdateRule {
    /// Create a rule watching `study_id`
    pub fn new(name: impl Into<String>, study_id: impl Into<String>, priority: i32) -> Self {
        let study_id = study_id.into();
        let matcher = CorrelationMatcher::new(vec![
            Condition::new(IRODS_STUDY_ID_KEY, study_id.clone()),
            Condition::new(IRODS_TARGET_KEY, IRODS_TARGET_LIBRARY_VALUE),
        ]);
        Self {
            name: name.into(),
            study_id,
            priority,
            matcher,
        }
    }

    /// The `study_interval` rule
    pub fn study_interval() -> Self {
        Self::new(STUDY_INTERVAL_RULE_NAME, INTERVAL_STUDY_ID, 0)
    }

    /// The `study_page` rule
    pub fn study_page() -> Self {
        Self::new(STUDY_PAGE_RULE_NAME, PAGE_STUDY_ID, 0)
    }

    /// Study identifier this rule watches
    pub fn study_id(&self) -> &str {
        &self.study_id
    }

    /// The underlying matcher
    pub fn matcher(&self) -> &CorrelationMatcher {
        &self.matcher
    }
}

impl Rule for LibraryUpdateRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn matches(&self, cookie: &Cookie) -> bool {
        self.matcher.matches(cookie.enrichments.view())
    }

    fn run(&self, cookie: &Cookie) -> RuleAction {
        debug!(
            rule = %self.name,
            study_id = %self.study_id,
            cookie = %cookie.identifier,
            "library update detected"
        );
        let notification =
            Notification::new(self.name.as_str(), self.name.as_str()).with_data(cookie.identifier.as_str());
        RuleAction::notify(self.name.as_str(), vec![notification])
    }
}
