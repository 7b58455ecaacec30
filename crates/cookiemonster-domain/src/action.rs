//! Outcomes produced by rules

/// A notification a rule asks the host to dispatch to its receivers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// What the notification is about (e.g., "study_interval")
    pub about: String,

    /// Payload, typically the identifier of the cookie concerned
    pub data: Option<String>,

    /// Name of the rule that raised the notification
    pub sender: String,
}

impl Notification {
    /// Create a notification
    pub fn new(about: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            about: about.into(),
            data: None,
            sender: sender.into(),
        }
    }

    /// Attach a payload
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }
}

/// Result of running a rule against a cookie
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleAction {
    /// Name of the rule that produced this action
    pub source: String,

    /// Notifications to dispatch
    pub notifications: Vec<Notification>,

    /// Whether processing of this cookie should stop after this rule
    pub terminate: bool,
}

impl RuleAction {
    /// An action that only sends notifications and lets processing continue
    pub fn notify(source: impl Into<String>, notifications: Vec<Notification>) -> Self {
        Self {
            source: source.into(),
            notifications,
            terminate: false,
        }
    }

    /// Mark the action as terminating
    pub fn terminating(mut self) -> Self {
        self.terminate = true;
        self
    }
}
