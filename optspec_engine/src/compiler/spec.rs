use crate::compiler::SpecError;
use crate::model::{Action, ValueKind};

/// A single spec string, broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionSpec {
    pub(crate) aliases: Vec<String>,
    pub(crate) action: Action,
    pub(crate) kind: ValueKind,
    // Niladic options consume no value token; presence alone is the value.
    pub(crate) niladic: bool,
}

impl OptionSpec {
    pub(crate) fn parse(spec: &str) -> Result<Self, SpecError> {
        let (body, action) = split_action(spec);
        let (body, explicit) = split_kind(spec, body)?;

        let (kind, niladic) = match (action, explicit) {
            (Action::Increment, None | Some(ValueKind::Integer)) => (ValueKind::Integer, true),
            (Action::Increment, Some(kind)) => {
                return Err(SpecError::InconsistentType {
                    spec: spec.to_string(),
                    kind,
                });
            }
            (Action::Append | Action::MapInsert, None) => {
                return Err(SpecError::MissingType {
                    spec: spec.to_string(),
                    action,
                });
            }
            (Action::Assign, None) => (ValueKind::Boolean, true),
            (_, Some(kind)) => (kind, false),
        };

        let mut aliases = Vec::default();

        for alias in body.split('|') {
            if alias.is_empty() {
                return Err(SpecError::Malformed {
                    spec: spec.to_string(),
                    reason: "empty alias",
                });
            }

            aliases.push(alias.to_string());
        }

        Ok(Self {
            aliases,
            action,
            kind,
            niladic,
        })
    }

    /// The result name: the final alias.
    pub(crate) fn name(&self) -> &str {
        self.aliases
            .last()
            .expect("internal error - a parsed spec has at least one alias")
    }
}

fn split_action(spec: &str) -> (&str, Action) {
    if let Some(body) = spec.strip_suffix('+') {
        (body, Action::Increment)
    } else if let Some(body) = spec.strip_suffix('@').or_else(|| spec.strip_suffix("[]")) {
        (body, Action::Append)
    } else if let Some(body) = spec.strip_suffix('%').or_else(|| spec.strip_suffix("{}")) {
        (body, Action::MapInsert)
    } else {
        (spec, Action::Assign)
    }
}

fn split_kind<'s>(spec: &str, body: &'s str) -> Result<(&'s str, Option<ValueKind>), SpecError> {
    match body.rsplit_once('=') {
        Some((aliases, suffix)) => {
            let kind = match suffix {
                "s" => ValueKind::String,
                "i" => ValueKind::Integer,
                "f" => ValueKind::Float,
                _ => {
                    return Err(SpecError::UnknownType {
                        spec: spec.to_string(),
                        suffix: suffix.to_string(),
                    });
                }
            };

            // The remaining aliases may not carry another '='.
            if aliases.contains('=') {
                return Err(SpecError::Malformed {
                    spec: spec.to_string(),
                    reason: "an alias may not contain '='",
                });
            }

            Ok((aliases, Some(kind)))
        }
        None => Ok((body, None)),
    }
}
