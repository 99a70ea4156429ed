//! Centralized constants for the DSM workspace.
//!
//! This module contains default values and fixed API coordinates used across
//! crates to avoid magic string duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Scheme used when the DSM host is given without one.
pub const DEFAULT_SCHEME: &str = "https";

// =============================================================================
// DSM API Coordinates
// =============================================================================

/// Path of the login endpoint.
pub const LOGIN_PATH: &str = "/provider/session";

/// Prefix of the `Authorization` header value returned by a successful login.
pub const BEARER_PREFIX: &str = "Bearer ";

/// API group serving database cluster resources.
pub const DB_GROUP: &str = "databases.dataservices.vmware.com";

/// API version of the database group.
pub const DB_VERSION: &str = "v1alpha1";

/// API group serving infrastructure resources.
pub const INFRA_GROUP: &str = "infrastructure.dataservices.vmware.com";

/// API version of the infrastructure group.
pub const INFRA_VERSION: &str = "v1alpha1";

/// Namespace every DSM resource lives in.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Database name used for every MySQL-family cluster.
pub const MYSQL_APP_DATABASE: &str = "mysqlappuser_data";

// =============================================================================
// Environment Variables
// =============================================================================

/// Suffix of the per-site DSM user id variable (`{site}_dsm_user_id`).
pub const SITE_USER_ID_SUFFIX: &str = "_dsm_user_id";

/// Suffix of the per-site DSM password variable (`{site}_dsm_password`).
pub const SITE_PASSWORD_SUFFIX: &str = "_dsm_password";

/// Suffix of the per-site DSM hostname variable (`{site}_dsm_hostname`).
pub const SITE_HOSTNAME_SUFFIX: &str = "_dsm_hostname";

/// Number of values a complete DSM parameter list holds (host, user, password).
pub const DSM_PARAM_COUNT: usize = 3;
