//! Command implementations.

pub mod check_config;
pub mod enrich;
pub mod evaluate;

pub use check_config::execute_check_config;
pub use enrich::execute_enrich;
pub use evaluate::execute_evaluate;

use crate::document::CookieDocument;
use crate::Result;
use cookiemonster_domain::Cookie;
use std::path::Path;

/// Read a cookie from a JSON file
pub(crate) fn read_cookie(path: &Path) -> Result<Cookie> {
    let contents = std::fs::read_to_string(path)?;
    let document: CookieDocument = serde_json::from_str(&contents)?;
    Ok(document.into())
}
