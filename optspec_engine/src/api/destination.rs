use std::collections::HashMap;

use crate::model::{Action, Value, ValueKind};
use crate::prelude::{ListTarget, MapTarget, ScalarTarget};

/// A caller-owned location that an option writes into directly.
///
/// Each constructor fixes the shape of the destination once, up front.
/// When the parser is built, the destination is checked against its spec string (see [`crate::SpecError::IncompatibleDestination`]).
///
/// ### Example
/// ```
/// # use optspec_engine as optspec;
/// use optspec::{Destination, OptionParser};
///
/// let mut verbose: i64 = 0;
/// let mut name: String = String::default();
/// let mut parser = OptionParser::direct(vec![
///     ("v|verbose+", Destination::counter(&mut verbose)),
///     ("n|name=s", Destination::scalar(&mut name)),
/// ])
/// .unwrap();
///
/// parser.process_all(&["-v", "--name", "abc", "-v"]).unwrap();
/// drop(parser);
///
/// assert_eq!(verbose, 2);
/// assert_eq!(name, "abc");
/// ```
pub struct Destination<'a>(pub(crate) Target<'a>);

pub(crate) enum Target<'a> {
    Counter(&'a mut i64),
    Scalar(ScalarSlot<'a>),
    List(ListSlot<'a>),
    Map(MapSlot<'a>),
    Action(Box<dyn FnMut() + 'a>),
    Consumer(Box<dyn FnMut(Value) + 'a>),
    Named(Box<dyn FnMut(&str, Value) + 'a>),
}

impl<'a> Destination<'a> {
    /// Count the occurrences of a `+` option.
    pub fn counter(variable: &'a mut i64) -> Self {
        Self(Target::Counter(variable))
    }

    /// Overwrite a variable with the value of an option.
    /// The variable type must match the spec: `String` for `=s`, `i64` for `=i`, `f64` for `=f`, and `bool` for a flag.
    pub fn scalar<T: ScalarTarget>(variable: &'a mut T) -> Self {
        Self(Target::Scalar(variable.bind()))
    }

    /// Append each value of a `@`/`[]` option to a list.
    pub fn list<T: ListTarget>(variable: &'a mut Vec<T>) -> Self {
        Self(Target::List(T::bind(variable)))
    }

    /// Insert each `key=value` pair of a `%`/`{}` option into a map.
    pub fn map<T: MapTarget>(variable: &'a mut HashMap<String, T>) -> Self {
        Self(Target::Map(T::bind(variable)))
    }

    /// Invoke a callback, without arguments, each time the option is seen.
    /// Typically bound to a flag, such as `h|help`.
    pub fn action(callback: impl FnMut() + 'a) -> Self {
        Self(Target::Action(Box::new(callback)))
    }

    /// Invoke a callback with the decoded value each time the option is seen.
    pub fn consumer(callback: impl FnMut(Value) + 'a) -> Self {
        Self(Target::Consumer(Box::new(callback)))
    }

    /// Invoke a callback with the result name and decoded value each time the option is seen.
    pub fn named(callback: impl FnMut(&str, Value) + 'a) -> Self {
        Self(Target::Named(Box::new(callback)))
    }
}

impl<'a> std::fmt::Debug for Destination<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Destination[{}]", self.0.describe())
    }
}

impl<'a> Target<'a> {
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Target::Counter(_) => "counter",
            Target::Scalar(ScalarSlot::String(_)) => "String scalar",
            Target::Scalar(ScalarSlot::Integer(_)) => "Integer scalar",
            Target::Scalar(ScalarSlot::Float(_)) => "Float scalar",
            Target::Scalar(ScalarSlot::Boolean(_)) => "Boolean scalar",
            Target::List(ListSlot::String(_)) => "String list",
            Target::List(ListSlot::Integer(_)) => "Integer list",
            Target::List(ListSlot::Float(_)) => "Float list",
            Target::List(ListSlot::NarrowFloat(_)) => "f32 list",
            Target::Map(MapSlot::String(_)) => "String map",
            Target::Map(MapSlot::Integer(_)) => "Integer map",
            Target::Map(MapSlot::Float(_)) => "Float map",
            Target::Action(_) => "no-argument callback",
            Target::Consumer(_) => "one-argument callback",
            Target::Named(_) => "two-argument callback",
        }
    }

    /// Whether this destination can receive the values of an option with the `action` and `kind`.
    pub(crate) fn accepts(&self, action: Action, kind: ValueKind) -> bool {
        match self {
            Target::Counter(_) => action == Action::Increment,
            Target::Scalar(slot) => action == Action::Assign && slot.kind() == kind,
            Target::List(slot) => action == Action::Append && slot.kind() == kind,
            Target::Map(slot) => action == Action::MapInsert && slot.kind() == kind,
            Target::Action(_) | Target::Consumer(_) | Target::Named(_) => action == Action::Assign,
        }
    }
}

#[doc(hidden)]
#[allow(missing_docs)]
pub enum ScalarSlot<'a> {
    String(&'a mut String),
    Integer(&'a mut i64),
    Float(&'a mut f64),
    Boolean(&'a mut bool),
}

impl<'a> ScalarSlot<'a> {
    fn kind(&self) -> ValueKind {
        match self {
            ScalarSlot::String(_) => ValueKind::String,
            ScalarSlot::Integer(_) => ValueKind::Integer,
            ScalarSlot::Float(_) => ValueKind::Float,
            ScalarSlot::Boolean(_) => ValueKind::Boolean,
        }
    }

    pub(crate) fn assign(&mut self, value: Value) {
        match (self, value) {
            (ScalarSlot::String(variable), Value::String(value)) => **variable = value,
            (ScalarSlot::Integer(variable), Value::Integer(value)) => **variable = value,
            (ScalarSlot::Float(variable), Value::Float(value)) => **variable = value,
            (ScalarSlot::Boolean(variable), Value::Boolean(value)) => **variable = value,
            _ => unreachable!("internal error - scalar slot kind is checked at construction"),
        }
    }
}

#[doc(hidden)]
#[allow(missing_docs)]
pub enum ListSlot<'a> {
    String(&'a mut Vec<String>),
    Integer(&'a mut Vec<i64>),
    Float(&'a mut Vec<f64>),
    NarrowFloat(&'a mut Vec<f32>),
}

impl<'a> ListSlot<'a> {
    fn kind(&self) -> ValueKind {
        match self {
            ListSlot::String(_) => ValueKind::String,
            ListSlot::Integer(_) => ValueKind::Integer,
            ListSlot::Float(_) | ListSlot::NarrowFloat(_) => ValueKind::Float,
        }
    }

    pub(crate) fn push(&mut self, value: Value) {
        match (self, value) {
            (ListSlot::String(list), Value::String(value)) => list.push(value),
            (ListSlot::Integer(list), Value::Integer(value)) => list.push(value),
            (ListSlot::Float(list), Value::Float(value)) => list.push(value),
            // Values are always decoded as f64; narrowing may lose precision.
            (ListSlot::NarrowFloat(list), Value::Float(value)) => list.push(value as f32),
            _ => unreachable!("internal error - list slot kind is checked at construction"),
        }
    }
}

#[doc(hidden)]
#[allow(missing_docs)]
pub enum MapSlot<'a> {
    String(&'a mut HashMap<String, String>),
    Integer(&'a mut HashMap<String, i64>),
    Float(&'a mut HashMap<String, f64>),
}

impl<'a> MapSlot<'a> {
    fn kind(&self) -> ValueKind {
        match self {
            MapSlot::String(_) => ValueKind::String,
            MapSlot::Integer(_) => ValueKind::Integer,
            MapSlot::Float(_) => ValueKind::Float,
        }
    }

    pub(crate) fn insert(&mut self, key: String, value: Value) {
        match (self, value) {
            (MapSlot::String(map), Value::String(value)) => {
                map.insert(key, value);
            }
            (MapSlot::Integer(map), Value::Integer(value)) => {
                map.insert(key, value);
            }
            (MapSlot::Float(map), Value::Float(value)) => {
                map.insert(key, value);
            }
            _ => unreachable!("internal error - map slot kind is checked at construction"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn scalar_assign() {
        let mut variable: String = String::default();
        let mut slot = variable.bind();
        slot.assign(Value::String("abc".to_string()));
        slot.assign(Value::String("def".to_string()));
        assert_eq!(variable, "def");

        let mut variable: bool = false;
        let mut slot = variable.bind();
        slot.assign(Value::Boolean(true));
        assert!(variable);
    }

    #[test]
    #[should_panic]
    fn scalar_assign_mismatch() {
        let mut variable: i64 = 0;
        let mut slot = variable.bind();
        slot.assign(Value::String("abc".to_string()));
    }

    #[test]
    fn list_push() {
        let mut variable: Vec<i64> = vec![0];
        let mut slot = ListTarget::bind(&mut variable);
        slot.push(Value::Integer(2));
        slot.push(Value::Integer(1));
        assert_eq!(variable, vec![0, 2, 1]);
    }

    #[test]
    fn list_push_narrow() {
        let mut variable: Vec<f32> = Vec::default();
        let mut slot = ListTarget::bind(&mut variable);
        slot.push(Value::Float(0.1));
        slot.push(Value::Float(0.2));
        assert_eq!(variable, vec![0.1f32, 0.2f32]);
    }

    #[test]
    fn map_insert_overwrites() {
        let mut variable: HashMap<String, f64> = HashMap::default();
        let mut slot = MapTarget::bind(&mut variable);
        slot.insert("abc".to_string(), Value::Float(1.0));
        slot.insert("key".to_string(), Value::Float(2.0));
        slot.insert("abc".to_string(), Value::Float(3.5));
        assert_eq!(
            variable,
            HashMap::from([("abc".to_string(), 3.5), ("key".to_string(), 2.0)])
        );
    }

    #[rstest]
    #[case(Action::Increment, ValueKind::Integer, true)]
    #[case(Action::Assign, ValueKind::Integer, false)]
    #[case(Action::Append, ValueKind::Integer, false)]
    fn counter_accepts(#[case] action: Action, #[case] kind: ValueKind, #[case] expected: bool) {
        let mut variable: i64 = 0;
        let destination = Destination::counter(&mut variable);
        assert_eq!(destination.0.accepts(action, kind), expected);
    }

    #[rstest]
    #[case(Action::Assign, ValueKind::Float, true)]
    #[case(Action::Assign, ValueKind::Integer, false)]
    #[case(Action::Append, ValueKind::Float, false)]
    #[case(Action::MapInsert, ValueKind::Float, false)]
    fn scalar_accepts(#[case] action: Action, #[case] kind: ValueKind, #[case] expected: bool) {
        let mut variable: f64 = 0.0;
        let destination = Destination::scalar(&mut variable);
        assert_eq!(destination.0.accepts(action, kind), expected);
    }

    #[rstest]
    #[case(Action::Append, ValueKind::Float, true)]
    #[case(Action::Append, ValueKind::Integer, false)]
    #[case(Action::Assign, ValueKind::Float, false)]
    fn narrow_list_accepts(#[case] action: Action, #[case] kind: ValueKind, #[case] expected: bool) {
        let mut variable: Vec<f32> = Vec::default();
        let destination = Destination::list(&mut variable);
        assert_eq!(destination.0.accepts(action, kind), expected);
    }

    #[rstest]
    #[case(ValueKind::String)]
    #[case(ValueKind::Integer)]
    #[case(ValueKind::Float)]
    #[case(ValueKind::Boolean)]
    fn callbacks_accept_assign(#[case] kind: ValueKind) {
        assert!(Destination::action(|| {}).0.accepts(Action::Assign, kind));
        assert!(Destination::consumer(|_| {}).0.accepts(Action::Assign, kind));
        assert!(Destination::named(|_, _| {}).0.accepts(Action::Assign, kind));
        assert!(!Destination::consumer(|_| {}).0.accepts(Action::Append, kind));
    }

    #[test]
    fn debug() {
        let mut variable: HashMap<String, String> = HashMap::default();
        let destination = Destination::map(&mut variable);
        assert_eq!(format!("{destination:?}"), "Destination[String map]");
    }
}
