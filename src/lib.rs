//! Mount ownership requests from container annotations.
//!
//! An OCI lifecycle hook reads the annotations of a container spec and needs
//! to know which mounts to hand to which user. This crate extracts those
//! requests from the `com.launchplatform.oci-hooks.mount-chown.*` namespace:
//!
//! ```text
//! com.launchplatform.oci-hooks.mount-chown.data.mount-point = /var/lib/data
//! com.launchplatform.oci-hooks.mount-chown.data.owner       = 1000:1000
//! com.launchplatform.oci-hooks.mount-chown.data.policy      = recursive
//! ```
//!
//! Scanning is total: malformed or incomplete annotations are dropped with a
//! [`Diagnostic`](types::Diagnostic) and a `tracing` warning, and the rest of
//! the batch still goes through. Applying the requests is delegated to a
//! [`ChownExecutor`] supplied by the caller.
//!
//! # Example
//!
//! ```
//! use mount_chown::{parse_chown_requests, Policy};
//!
//! let requests = parse_chown_requests([
//!     ("com.launchplatform.oci-hooks.mount-chown.data.mount-point", "/var/lib/data"),
//!     ("com.launchplatform.oci-hooks.mount-chown.data.owner", "1000"),
//!     ("unrelated.annotation", "ignored"),
//! ]);
//!
//! let data = &requests["/var/lib/data"];
//! assert_eq!((data.user(), data.group()), (1000, 0));
//! assert_eq!(data.policy, Policy::Unspecified);
//! ```

#![warn(missing_docs)]

pub mod apply;
pub mod types;

pub use apply::{apply_requests, ApplySummary, ChownExecutor};
pub use mount_chown_annotations::{annotations_from_json, parse_chown_requests};
pub use types::*;
