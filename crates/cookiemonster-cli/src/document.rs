//! JSON documents for cookies, enrichments and rule actions
//!
//! ```json
//! {
//!   "identifier": "/seq/1/1.bam",
//!   "enrichments": [
//!     {"source": "irods_update", "timestamp": 1,
//!      "metadata": {"target": ["library"]}}
//!   ]
//! }
//! ```

use cookiemonster_domain::{Cookie, Enrichment, MetadataSnapshot, Notification, RuleAction};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON form of a [`Cookie`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieDocument {
    /// Cookie identifier
    pub identifier: String,

    /// Enrichments in arrival order
    #[serde(default)]
    pub enrichments: Vec<EnrichmentDocument>,
}

/// JSON form of an [`Enrichment`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentDocument {
    /// Producing source
    pub source: String,

    /// Seconds since Unix epoch
    pub timestamp: u64,

    /// Key to values
    #[serde(default)]
    pub metadata: BTreeMap<String, Vec<String>>,
}

/// JSON form of a [`RuleAction`]
#[derive(Debug, Clone, Serialize)]
pub struct RuleActionDocument {
    /// Rule that produced the action
    pub source: String,

    /// Notifications raised
    pub notifications: Vec<NotificationDocument>,

    /// Whether processing stops here
    pub terminate: bool,
}

/// JSON form of a [`Notification`]
#[derive(Debug, Clone, Serialize)]
pub struct NotificationDocument {
    /// Subject
    pub about: String,

    /// Payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Sender
    pub sender: String,
}

impl From<CookieDocument> for Cookie {
    fn from(document: CookieDocument) -> Self {
        let mut cookie = Cookie::new(document.identifier);
        cookie
            .enrichments
            .extend(document.enrichments.into_iter().map(Enrichment::from));
        cookie
    }
}

impl From<EnrichmentDocument> for Enrichment {
    fn from(document: EnrichmentDocument) -> Self {
        let metadata: MetadataSnapshot = document.metadata.into_iter().collect();
        Enrichment::new(document.source, document.timestamp, metadata)
    }
}

impl From<&Enrichment> for EnrichmentDocument {
    fn from(enrichment: &Enrichment) -> Self {
        Self {
            source: enrichment.source.clone(),
            timestamp: enrichment.timestamp,
            metadata: enrichment
                .metadata
                .iter()
                .map(|(key, values)| (key.to_string(), values.iter().cloned().collect()))
                .collect(),
        }
    }
}

impl From<&Cookie> for CookieDocument {
    fn from(cookie: &Cookie) -> Self {
        Self {
            identifier: cookie.identifier.clone(),
            enrichments: cookie.enrichments.iter().map(EnrichmentDocument::from).collect(),
        }
    }
}

impl From<&Notification> for NotificationDocument {
    fn from(notification: &Notification) -> Self {
        Self {
            about: notification.about.clone(),
            data: notification.data.clone(),
            sender: notification.sender.clone(),
        }
    }
}

impl From<&RuleAction> for RuleActionDocument {
    fn from(action: &RuleAction) -> Self {
        Self {
            source: action.source.clone(),
            notifications: action.notifications.iter().map(NotificationDocument::from).collect(),
            terminate: action.terminate,
        }
    }
}
