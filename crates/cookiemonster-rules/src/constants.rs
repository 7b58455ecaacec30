//! iRODS metadata keys, values and study identifiers used by the rules

/// Metadata key holding the study identifier(s) of a data object
pub const IRODS_STUDY_ID_KEY: &str = "study_id";

/// Metadata key holding the sequencing target flag
pub const IRODS_TARGET_KEY: &str = "target";

/// Target value marking a data object as belonging to a sequencing library
pub const IRODS_TARGET_LIBRARY_VALUE: &str = "library";

/// Study identifier watched by the `study_interval` rule
pub const INTERVAL_STUDY_ID: &str = "3765";

/// Study identifier watched by the `study_page` rule
pub const PAGE_STUDY_ID: &str = "3781";

/// Name of the `study_interval` rule
pub const STUDY_INTERVAL_RULE_NAME: &str = "study_interval";

/// Name of the `study_page` rule
pub const STUDY_PAGE_RULE_NAME: &str = "study_page";
