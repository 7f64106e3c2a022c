use crate::api::{ResultValue, Results, Target};
use crate::model::{Action, Decoded, Value};

impl<'a> Target<'a> {
    /// Write a decoded value into the caller's destination.
    pub(crate) fn apply(&mut self, name: &str, decoded: Decoded) {
        match (self, decoded) {
            (Target::Counter(count), _) => **count += 1,
            (Target::Scalar(slot), Decoded::Scalar(value)) => slot.assign(value),
            (Target::List(slot), Decoded::Scalar(value)) => slot.push(value),
            (Target::Map(slot), Decoded::Entry { key, value }) => slot.insert(key, value),
            (Target::Action(callback), _) => callback(),
            (Target::Consumer(callback), Decoded::Scalar(value)) => callback(value),
            (Target::Named(callback), Decoded::Scalar(value)) => callback(name, value),
            _ => unreachable!("internal error - destination shape is checked at construction"),
        }
    }
}

impl Results {
    /// Write a decoded value into the result for `name`.
    pub(crate) fn apply(&mut self, name: &str, action: Action, decoded: Decoded) {
        match (action, self.value_mut(name), decoded) {
            (Action::Increment, ResultValue::Integer(count), _) => *count += 1,
            (
                Action::Append,
                ResultValue::StringList(values),
                Decoded::Scalar(Value::String(value)),
            ) => values.push(value),
            (
                Action::Append,
                ResultValue::IntegerList(values),
                Decoded::Scalar(Value::Integer(value)),
            ) => values.push(value),
            (Action::Append, ResultValue::FloatList(values), Decoded::Scalar(Value::Float(value))) => {
                values.push(value)
            }
            (
                Action::MapInsert,
                ResultValue::StringMap(values),
                Decoded::Entry {
                    key,
                    value: Value::String(value),
                },
            ) => {
                values.insert(key, value);
            }
            (
                Action::MapInsert,
                ResultValue::IntegerMap(values),
                Decoded::Entry {
                    key,
                    value: Value::Integer(value),
                },
            ) => {
                values.insert(key, value);
            }
            (
                Action::MapInsert,
                ResultValue::FloatMap(values),
                Decoded::Entry {
                    key,
                    value: Value::Float(value),
                },
            ) => {
                values.insert(key, value);
            }
            (Action::Assign, slot, Decoded::Scalar(value)) => *slot = ResultValue::from(value),
            _ => unreachable!("internal error - result kind is seeded from the same spec"),
        }
    }
}
