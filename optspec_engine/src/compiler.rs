use thiserror::Error;

use crate::model::{Action, ValueKind};

mod spec;
mod table;

pub(crate) use spec::OptionSpec;
pub(crate) use table::{ActionTable, OptionDescriptor};

/// Error for an invalid spec string, raised while building an [`crate::OptionParser`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    /// The spec does not follow `alias(|alias)*[=type][marker]`.
    #[error("Invalid option spec '{spec}': {reason}.")]
    Malformed {
        /// The offending spec string.
        spec: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The spec declares a value type other than `=s`, `=i` or `=f`.
    #[error("Invalid option spec '{spec}': unknown value type '={suffix}' (expected one of '=s', '=i', '=f').")]
    UnknownType {
        /// The offending spec string.
        spec: String,
        /// The text following the final `=`.
        suffix: String,
    },

    /// The spec collects values (`@`, `[]`, `%`, `{}`) without declaring their type.
    #[error("Invalid option spec '{spec}': the {action} marker requires a value type ('=s', '=i' or '=f').")]
    MissingType {
        /// The offending spec string.
        spec: String,
        /// The accumulating action.
        action: Action,
    },

    /// The spec counts occurrences (`+`) yet declares a non-integer value type.
    #[error("Invalid option spec '{spec}': a counting option cannot hold {kind} values.")]
    InconsistentType {
        /// The offending spec string.
        spec: String,
        /// The declared value type.
        kind: ValueKind,
    },

    /// An alias maps to a flag already declared by this, or an earlier, spec.
    /// Since the result name is the final alias, this also rejects two specs sharing a result name.
    #[error("Invalid option spec '{spec}': '{flag}' is not unique.")]
    DuplicateOption {
        /// The colliding flag, such as `-i` or `--int`.
        flag: String,
        /// The spec string the collision came from.
        spec: String,
    },

    /// The destination bound to a spec cannot receive that spec's values.
    #[error("Invalid option spec '{spec}': a {destination} destination cannot receive {action} {kind} values.")]
    IncompatibleDestination {
        /// The offending spec string.
        spec: String,
        /// A description of the supplied destination.
        destination: &'static str,
        /// The spec's action.
        action: Action,
        /// The spec's value type.
        kind: ValueKind,
    },
}

/// Derive the flag token for an alias: `-x` for a single character, `--name` otherwise.
pub(crate) fn flag(alias: &str) -> String {
    if alias.chars().count() == 1 {
        format!("-{alias}")
    } else {
        format!("--{alias}")
    }
}
