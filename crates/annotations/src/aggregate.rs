//! Pass 1: group annotation fragments by request name.
//!
//! Each recognized fragment sets exactly one field of the request it names,
//! so the assembled requests do not depend on the order fragments arrive in.
//! Repeats of the same argument for the same name are last-write-wins.

use std::collections::BTreeMap;

use mount_chown_core::{parse_owner, Owner, PartialRequest};

use crate::diagnostics::{report, Diagnostic, LOG_TARGET};
use crate::keys::{parse_annotation_key, ArgumentKind, KeyMatch};
use crate::options::ScanOptions;

/// Requests assembled by pass 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// Partial requests keyed by name.
    pub requests: BTreeMap<String, PartialRequest>,
    /// Fragments that were skipped.
    pub diagnostics: Vec<Diagnostic>,
}

impl Aggregation {
    /// Apply one annotation to the aggregation.
    ///
    /// Keys outside the namespace are ignored silently. Fragments that are
    /// skipped with a diagnostic never create a request on their own.
    pub fn fold(&mut self, key: &str, value: &str, options: &ScanOptions) {
        let fragment = match parse_annotation_key(key, options.strict_keys) {
            KeyMatch::Foreign => return,
            KeyMatch::Malformed => {
                report(
                    &mut self.diagnostics,
                    Diagnostic::MalformedKey {
                        key: key.to_string(),
                    },
                );
                return;
            }
            KeyMatch::Fragment(fragment) => fragment,
        };
        if let Some(trailing) = fragment.trailing {
            tracing::debug!(
                target: LOG_TARGET,
                key = %key,
                trailing = %trailing,
                "ignoring trailing key segments"
            );
        }

        let name = fragment.name;
        let Some(kind) = fragment.kind() else {
            report(
                &mut self.diagnostics,
                Diagnostic::UnknownArgument {
                    name: name.to_string(),
                    argument: fragment.argument.to_string(),
                },
            );
            return;
        };

        match kind {
            ArgumentKind::MountPoint => {
                self.entry(name).mount_point = value.to_string();
            }
            ArgumentKind::Owner => match parse_owner(value) {
                Err(source) => report(
                    &mut self.diagnostics,
                    Diagnostic::InvalidOwner {
                        name: name.to_string(),
                        source,
                    },
                ),
                Ok((uid, gid)) => match Owner::try_from_ids(uid, gid) {
                    Err(source) => report(
                        &mut self.diagnostics,
                        Diagnostic::OwnerOutOfRange {
                            name: name.to_string(),
                            source,
                        },
                    ),
                    Ok(owner) => self.entry(name).owner = Some(owner),
                },
            },
            ArgumentKind::Policy => {
                self.entry(name).policy = value.to_string();
            }
        }
    }

    fn entry(&mut self, name: &str) -> &mut PartialRequest {
        self.requests
            .entry(name.to_string())
            .or_insert_with(|| PartialRequest::new(name))
    }
}

/// Run pass 1 over `annotations`.
///
/// Accepts any sequence of string pairs; when a key occurs more than once the
/// last occurrence wins.
pub fn aggregate<I, K, V>(annotations: I, options: &ScanOptions) -> Aggregation
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut aggregation = Aggregation::default();
    for (key, value) in annotations {
        aggregation.fold(key.as_ref(), value.as_ref(), options);
    }
    aggregation
}
