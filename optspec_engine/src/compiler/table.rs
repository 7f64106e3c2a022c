use std::collections::HashMap;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::Destination;
use crate::compiler::{flag, OptionSpec, SpecError};
use crate::model::{Action, ValueKind};

/// The compiled form of one spec string, shared by all of its aliases.
#[derive(Debug)]
pub(crate) struct OptionDescriptor<'a> {
    pub(crate) spec: String,
    pub(crate) name: String,
    pub(crate) niladic: bool,
    pub(crate) action: Action,
    pub(crate) kind: ValueKind,
    pub(crate) destination: Option<Destination<'a>>,
}

/// Maps each flag token (`-v`, `--verbose`) to the descriptor of the spec that declared it.
#[derive(Debug, Default)]
pub(crate) struct ActionTable<'a> {
    flags: HashMap<String, usize>,
    options: Vec<OptionDescriptor<'a>>,
}

impl<'a> ActionTable<'a> {
    pub(crate) fn compile<S: AsRef<str>>(
        specs: impl IntoIterator<Item = (S, Option<Destination<'a>>)>,
    ) -> Result<Self, SpecError> {
        let mut table = Self::default();

        for (spec, destination) in specs {
            table.register(spec.as_ref(), destination)?;
        }

        Ok(table)
    }

    fn register(
        &mut self,
        spec: &str,
        destination: Option<Destination<'a>>,
    ) -> Result<(), SpecError> {
        let option_spec = OptionSpec::parse(spec)?;

        if let Some(destination) = &destination {
            if !destination.0.accepts(option_spec.action, option_spec.kind) {
                return Err(SpecError::IncompatibleDestination {
                    spec: spec.to_string(),
                    destination: destination.0.describe(),
                    action: option_spec.action,
                    kind: option_spec.kind,
                });
            }
        }

        let flags: Vec<String> = option_spec.aliases.iter().map(|a| flag(a)).collect();

        // Check every alias before inserting any, so a failed spec leaves no trace.
        for (i, f) in flags.iter().enumerate() {
            if self.flags.contains_key(f) || flags[..i].contains(f) {
                return Err(SpecError::DuplicateOption {
                    flag: f.clone(),
                    spec: spec.to_string(),
                });
            }
        }

        let index = self.options.len();
        self.options.push(OptionDescriptor {
            spec: spec.to_string(),
            name: option_spec.name().to_string(),
            niladic: option_spec.niladic,
            action: option_spec.action,
            kind: option_spec.kind,
            destination,
        });

        for f in flags {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Registered '{f}' from spec '{spec}' (option #{index}).");
            }

            self.flags.insert(f, index);
        }

        Ok(())
    }

    pub(crate) fn lookup(&self, flag: &str) -> Option<usize> {
        self.flags.get(flag).copied()
    }

    pub(crate) fn option(&self, index: usize) -> &OptionDescriptor<'a> {
        &self.options[index]
    }

    pub(crate) fn option_mut(&mut self, index: usize) -> &mut OptionDescriptor<'a> {
        &mut self.options[index]
    }

    pub(crate) fn options(&self) -> &[OptionDescriptor<'a>] {
        &self.options
    }
}
