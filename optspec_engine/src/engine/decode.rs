use crate::compiler::OptionDescriptor;
use crate::engine::ParseError;
use crate::model::{Action, Decoded, Value, ValueKind};

impl<'a> OptionDescriptor<'a> {
    /// Decode the raw value given to this option via `flag`.
    /// Map options expect `key=value`, split on the first `=`; only the value is typed.
    pub(crate) fn decode(&self, flag: &str, raw: &str) -> Result<Decoded, ParseError> {
        if self.action == Action::MapInsert {
            let (key, raw_value) = raw.split_once('=').ok_or_else(|| ParseError::MalformedEntry {
                option: flag.to_string(),
                value: raw.to_string(),
            })?;

            Ok(Decoded::Entry {
                key: key.to_string(),
                value: decode_value(self.kind, flag, raw_value)?,
            })
        } else {
            Ok(Decoded::Scalar(decode_value(self.kind, flag, raw)?))
        }
    }
}

fn decode_value(kind: ValueKind, flag: &str, raw: &str) -> Result<Value, ParseError> {
    match kind {
        ValueKind::String => Ok(Value::String(raw.to_string())),
        ValueKind::Integer => {
            raw.parse::<i64>()
                .map(Value::Integer)
                .map_err(|source| ParseError::InvalidInteger {
                    option: flag.to_string(),
                    value: raw.to_string(),
                    source,
                })
        }
        ValueKind::Float => {
            raw.parse::<f64>()
                .map(Value::Float)
                .map_err(|source| ParseError::InvalidFloat {
                    option: flag.to_string(),
                    value: raw.to_string(),
                    source,
                })
        }
        ValueKind::Boolean => {
            unreachable!("internal error - niladic options never receive a value to decode")
        }
    }
}
