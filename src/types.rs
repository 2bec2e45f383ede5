//! Public types for the mount-chown API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Request model
// ============================================================================

pub use mount_chown_core::{ChownRequest, Owner, Policy};

// Parser errors, for callers that parse owner or policy values themselves
pub use mount_chown_core::{OwnerParseError, OwnerRangeError, PolicyParseError};

// ============================================================================
// Scanning
// ============================================================================

pub use mount_chown_annotations::{ConfigError, Diagnostic, ScanOptions, ScanReport, Scanner};

// Key grammar
pub use mount_chown_annotations::{ArgumentKind, ANNOTATION_PREFIX};
