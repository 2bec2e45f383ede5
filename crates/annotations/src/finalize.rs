//! Pass 2: validate assembled requests and re-key them by mount point.

use std::collections::BTreeMap;

use mount_chown_core::{ChownRequest, PartialRequest, Policy};

use crate::diagnostics::{report, Diagnostic, LOG_TARGET};

/// Output of pass 2.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Finalized {
    /// Valid requests keyed by mount point.
    pub requests: BTreeMap<String, ChownRequest>,
    /// Requests that were discarded.
    pub diagnostics: Vec<Diagnostic>,
}

/// Check one assembled request.
///
/// Every failing check is reported, not only the first.
pub fn validate(
    partial: PartialRequest,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<ChownRequest> {
    let mut valid = true;

    if partial.mount_point.is_empty() {
        report(
            diagnostics,
            Diagnostic::MissingMountPoint {
                name: partial.name.clone(),
            },
        );
        valid = false;
    }
    if partial.owner.is_none() {
        report(
            diagnostics,
            Diagnostic::MissingOwner {
                name: partial.name.clone(),
            },
        );
        valid = false;
    }
    let policy = match partial.policy.parse::<Policy>() {
        Ok(policy) => Some(policy),
        Err(_) => {
            report(
                diagnostics,
                Diagnostic::InvalidPolicy {
                    name: partial.name.clone(),
                    policy: partial.policy.clone(),
                },
            );
            None
        }
    };

    match (valid, partial.owner, policy) {
        (true, Some(owner), Some(policy)) => Some(ChownRequest {
            name: partial.name,
            mount_point: partial.mount_point,
            owner,
            policy,
        }),
        _ => None,
    }
}

/// Run pass 2 over requests keyed by name.
///
/// Requests are visited in map order; when two names share a mount point the
/// one visited last replaces the other.
pub fn finalize(requests: BTreeMap<String, PartialRequest>) -> Finalized {
    let mut finalized = Finalized::default();
    for partial in requests.into_values() {
        let Some(request) = validate(partial, &mut finalized.diagnostics) else {
            continue;
        };
        if let Some(replaced) = finalized
            .requests
            .insert(request.mount_point.clone(), request)
        {
            tracing::debug!(
                target: LOG_TARGET,
                mount_point = %replaced.mount_point,
                replaced = %replaced.name,
                "mount point claimed by more than one request"
            );
        }
    }
    finalized
}
