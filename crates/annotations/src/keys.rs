//! Annotation key grammar.
//!
//! Recognized keys live under a dotted namespace prefix and use `.` as the
//! separator between the request name and the argument kind:
//!
//! ```text
//! com.launchplatform.oci-hooks.mount-chown.<name>.mount-point = <path>
//! com.launchplatform.oci-hooks.mount-chown.<name>.owner       = <uid>[:<gid>]
//! com.launchplatform.oci-hooks.mount-chown.<name>.policy      = recursive | root-only
//! ```

/// Separator between key segments.
const SEP: char = '.';

/// Namespace prefix shared by all mount-chown annotations.
pub const ANNOTATION_PREFIX: &str = "com.launchplatform.oci-hooks.mount-chown.";

/// Argument literal for the mount destination.
pub const MOUNT_POINT_ARG: &str = "mount-point";
/// Argument literal for the owner specification.
pub const OWNER_ARG: &str = "owner";
/// Argument literal for the application policy.
pub const POLICY_ARG: &str = "policy";

/// The field of a request an annotation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// `<name>.mount-point`
    MountPoint,
    /// `<name>.owner`
    Owner,
    /// `<name>.policy`
    Policy,
}

impl ArgumentKind {
    /// Match an argument literal exactly.
    pub fn parse(arg: &str) -> Option<Self> {
        match arg {
            MOUNT_POINT_ARG => Some(ArgumentKind::MountPoint),
            OWNER_ARG => Some(ArgumentKind::Owner),
            POLICY_ARG => Some(ArgumentKind::Policy),
            _ => None,
        }
    }

    /// The literal used in annotation keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgumentKind::MountPoint => MOUNT_POINT_ARG,
            ArgumentKind::Owner => OWNER_ARG,
            ArgumentKind::Policy => POLICY_ARG,
        }
    }
}

/// A key under the namespace, split into its segments.
///
/// `argument` is the raw second segment; it is not checked against the known
/// argument kinds here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationKey<'a> {
    /// Request name (first segment)
    pub name: &'a str,
    /// Argument kind literal (second segment)
    pub argument: &'a str,
    /// Anything after the second segment, without the leading separator
    pub trailing: Option<&'a str>,
}

impl AnnotationKey<'_> {
    /// The recognized argument kind, if any.
    pub fn kind(&self) -> Option<ArgumentKind> {
        ArgumentKind::parse(self.argument)
    }
}

/// Outcome of matching one input key against the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatch<'a> {
    /// Outside the namespace; ignored without a diagnostic.
    Foreign,
    /// Inside the namespace but not `<name>.<argument>`.
    Malformed,
    /// A request fragment.
    Fragment(AnnotationKey<'a>),
}

/// Match `key` against the annotation grammar.
///
/// With `strict` set, keys with segments after the argument kind are
/// malformed; otherwise those segments are carried in `trailing` and
/// ignored by the scanner.
pub fn parse_annotation_key(key: &str, strict: bool) -> KeyMatch<'_> {
    let Some(rest) = key.strip_prefix(ANNOTATION_PREFIX) else {
        return KeyMatch::Foreign;
    };
    let mut parts = rest.splitn(3, SEP);
    let name = parts.next().unwrap_or_default();
    let Some(argument) = parts.next() else {
        return KeyMatch::Malformed;
    };
    let trailing = parts.next();
    if strict && trailing.is_some() {
        return KeyMatch::Malformed;
    }
    KeyMatch::Fragment(AnnotationKey {
        name,
        argument,
        trailing,
    })
}

/// Build the annotation key for `name` and `kind`.
pub fn annotation_key(name: &str, kind: ArgumentKind) -> String {
    format!("{ANNOTATION_PREFIX}{name}{SEP}{}", kind.as_str())
}
