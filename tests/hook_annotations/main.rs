//! Hook annotation test suite
//!
//! Exercises the public `mount_chown` API the way a lifecycle hook uses it:
//! decode the annotations of a container spec, scan them, and hand the
//! requests to an executor.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test hook_annotations
//! ```

mod test_utils;

mod oci_payload;
mod executor_dispatch;
