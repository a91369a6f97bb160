//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum display name length (after trimming)
pub const MIN_NAME_LENGTH: usize = 1;

/// Maximum display name length (after trimming)
pub const MAX_NAME_LENGTH: usize = 100;

// =============================================================================
// Listing
// =============================================================================

/// Default number of users returned by a list call
pub const DEFAULT_LIST_LIMIT: u64 = 20;

/// Upper bound on users returned by a single list call
pub const MAX_LIST_LIMIT: u64 = 100;
