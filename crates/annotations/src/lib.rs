//! Scanner for mount-chown annotations.
//!
//! Turns the flat annotation map of a container spec into validated
//! [`ChownRequest`]s keyed by mount point. Scanning runs in two passes:
//!
//! 1. [`aggregate`]: keep keys under the namespace prefix and group their
//!    fragments into one [`PartialRequest`] per request name.
//! 2. [`finalize`]: validate each assembled request and re-key the valid
//!    ones by mount point.
//!
//! Scanning never fails. Anything that cannot be used is dropped with a
//! [`Diagnostic`], which is logged as a `tracing` warning and returned in the
//! [`ScanReport`].
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use mount_chown_annotations::parse_chown_requests;
//!
//! let annotations = HashMap::from([
//!     ("com.launchplatform.oci-hooks.mount-chown.data.mount-point", "/data"),
//!     ("com.launchplatform.oci-hooks.mount-chown.data.owner", "1000:1000"),
//!     ("com.launchplatform.oci-hooks.mount-chown.data.policy", "recursive"),
//! ]);
//!
//! let requests = parse_chown_requests(annotations);
//! assert_eq!(requests["/data"].user(), 1000);
//! assert!(requests["/data"].is_recursive());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod diagnostics;
pub mod finalize;
pub mod keys;
pub mod options;

use std::collections::BTreeMap;

pub use aggregate::{aggregate, Aggregation};
pub use diagnostics::Diagnostic;
pub use finalize::{finalize, validate, Finalized};
pub use keys::{
    annotation_key, parse_annotation_key, AnnotationKey, ArgumentKind, KeyMatch,
    ANNOTATION_PREFIX, MOUNT_POINT_ARG, OWNER_ARG, POLICY_ARG,
};
pub use mount_chown_core::{ChownRequest, Owner, PartialRequest, Policy};
pub use options::{ConfigError, ScanOptions};

/// Result of a full scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Valid requests keyed by mount point.
    pub requests: BTreeMap<String, ChownRequest>,
    /// Everything that was dropped, pass 1 first.
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanReport {
    /// Whether every recognized annotation was used.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Runs both passes with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    /// Create a scanner.
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Scan an annotation map.
    pub fn scan<I, K, V>(&self, annotations: I) -> ScanReport
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let Aggregation {
            requests,
            mut diagnostics,
        } = aggregate(annotations, &self.options);
        let finalized = finalize(requests);
        diagnostics.extend(finalized.diagnostics);
        ScanReport {
            requests: finalized.requests,
            diagnostics,
        }
    }
}

/// Scan with default options and return only the valid requests.
pub fn parse_chown_requests<I, K, V>(annotations: I) -> BTreeMap<String, ChownRequest>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    Scanner::default().scan(annotations).requests
}

/// Decode an OCI `annotations` object.
///
/// Values must be strings, as the runtime spec requires.
pub fn annotations_from_json(json: &str) -> Result<BTreeMap<String, String>, serde_json::Error> {
    serde_json::from_str(json)
}
