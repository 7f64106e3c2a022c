use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::compiler::ActionTable;
use crate::model::{Action, Value, ValueKind};

/// Error for reading a [`Results`] entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResultError {
    /// No spec declared this result name.
    #[error("Option '{0}' was not declared.")]
    Undeclared(String),

    /// The result holds a different kind of value than was asked for.
    #[error("Option '{name}' holds a {actual} value, not a {expected} value.")]
    KindMismatch {
        /// The result name.
        name: String,
        /// The kind asked for.
        expected: &'static str,
        /// The kind actually held.
        actual: &'static str,
    },
}

/// The value of one result name in dictionary mode.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum ResultValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    StringList(Vec<String>),
    IntegerList(Vec<i64>),
    FloatList(Vec<f64>),
    StringMap(HashMap<String, String>),
    IntegerMap(HashMap<String, i64>),
    FloatMap(HashMap<String, f64>),
}

impl ResultValue {
    /// The zero value for an option, observable before (or without) it ever being parsed.
    pub(crate) fn zero(action: Action, kind: ValueKind) -> Self {
        match (action, kind) {
            (Action::Increment, _) => ResultValue::Integer(0),
            (Action::Append, ValueKind::String) => ResultValue::StringList(Vec::default()),
            (Action::Append, ValueKind::Integer) => ResultValue::IntegerList(Vec::default()),
            (Action::Append, ValueKind::Float) => ResultValue::FloatList(Vec::default()),
            (Action::MapInsert, ValueKind::String) => ResultValue::StringMap(HashMap::default()),
            (Action::MapInsert, ValueKind::Integer) => ResultValue::IntegerMap(HashMap::default()),
            (Action::MapInsert, ValueKind::Float) => ResultValue::FloatMap(HashMap::default()),
            (Action::Append | Action::MapInsert, ValueKind::Boolean) => {
                unreachable!("internal error - accumulating options always declare a value type")
            }
            (Action::Assign, ValueKind::String) => ResultValue::String(String::default()),
            (Action::Assign, ValueKind::Integer) => ResultValue::Integer(0),
            (Action::Assign, ValueKind::Float) => ResultValue::Float(0.0),
            (Action::Assign, ValueKind::Boolean) => ResultValue::Boolean(false),
        }
    }

    /// The name of this value's kind, as used in [`ResultError::KindMismatch`].
    pub fn kind_name(&self) -> &'static str {
        match self {
            ResultValue::String(_) => "String",
            ResultValue::Integer(_) => "Integer",
            ResultValue::Float(_) => "Float",
            ResultValue::Boolean(_) => "Boolean",
            ResultValue::StringList(_) => "StringList",
            ResultValue::IntegerList(_) => "IntegerList",
            ResultValue::FloatList(_) => "FloatList",
            ResultValue::StringMap(_) => "StringMap",
            ResultValue::IntegerMap(_) => "IntegerMap",
            ResultValue::FloatMap(_) => "FloatMap",
        }
    }
}

impl From<Value> for ResultValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(value) => ResultValue::String(value),
            Value::Integer(value) => ResultValue::Integer(value),
            Value::Float(value) => ResultValue::Float(value),
            Value::Boolean(value) => ResultValue::Boolean(value),
        }
    }
}

impl std::fmt::Display for ResultValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultValue::String(value) => write!(f, "{value}"),
            ResultValue::Integer(value) => write!(f, "{value}"),
            ResultValue::Float(value) => write!(f, "{value}"),
            ResultValue::Boolean(value) => write!(f, "{value}"),
            ResultValue::StringList(values) => write_list(f, values),
            ResultValue::IntegerList(values) => write_list(f, values),
            ResultValue::FloatList(values) => write_list(f, values),
            ResultValue::StringMap(values) => write_map(f, values),
            ResultValue::IntegerMap(values) => write_map(f, values),
            ResultValue::FloatMap(values) => write_map(f, values),
        }
    }
}

fn write_list<T: std::fmt::Display>(
    f: &mut std::fmt::Formatter<'_>,
    values: &[T],
) -> std::fmt::Result {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    write!(f, "[{}]", items.join(", "))
}

fn write_map<T: std::fmt::Display>(
    f: &mut std::fmt::Formatter<'_>,
    values: &HashMap<String, T>,
) -> std::fmt::Result {
    // Sorted, so the rendering is stable.
    let sorted: BTreeMap<&String, &T> = values.iter().collect();
    let items: Vec<String> = sorted.iter().map(|(k, v)| format!("{k}: {v}")).collect();
    write!(f, "{{{}}}", items.join(", "))
}

/// The parsed values of a dictionary mode [`crate::OptionParser`], keyed by result name.
///
/// Every declared result name is present from construction, holding its zero value until parsed:
/// `0` for counters and integers, `0.0` for floats, `false` for flags, `""` for strings, and empty lists/maps.
///
/// ### Example
/// ```
/// # use optspec_engine as optspec;
/// use optspec::OptionParser;
///
/// let mut parser = OptionParser::new(["v|verbose+", "n|name=s"]).unwrap();
/// parser.process_all(&["-v", "-v"]).unwrap();
///
/// let results = parser.results().unwrap();
/// assert_eq!(results.integer("verbose"), Ok(2));
/// assert_eq!(results.string("name"), Ok(""));
/// assert!(results.boolean("verbose").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Results {
    values: BTreeMap<String, ResultValue>,
}

impl Results {
    /// Seed the zero value of every result name in the table.
    /// Result names are unique, since each one is also a flag of the table.
    pub(crate) fn seed(table: &ActionTable<'_>) -> Self {
        let values = table
            .options()
            .iter()
            .map(|option| {
                (
                    option.name.clone(),
                    ResultValue::zero(option.action, option.kind),
                )
            })
            .collect();

        Self { values }
    }

    pub(crate) fn value_mut(&mut self, name: &str) -> &mut ResultValue {
        self.values
            .get_mut(name)
            .expect("internal error - every result name is seeded at construction")
    }

    /// Get the value for a result name, if declared.
    pub fn get(&self, name: &str) -> Option<&ResultValue> {
        self.values.get(name)
    }

    /// Whether a result name was declared.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate over every result, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResultValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    fn value(&self, name: &str) -> Result<&ResultValue, ResultError> {
        self.values
            .get(name)
            .ok_or_else(|| ResultError::Undeclared(name.to_string()))
    }

    /// Get a `=s` result.
    pub fn string(&self, name: &str) -> Result<&str, ResultError> {
        match self.value(name)? {
            ResultValue::String(value) => Ok(value),
            other => Err(mismatch(name, "String", other)),
        }
    }

    /// Get a `=i` or `+` result.
    pub fn integer(&self, name: &str) -> Result<i64, ResultError> {
        match self.value(name)? {
            ResultValue::Integer(value) => Ok(*value),
            other => Err(mismatch(name, "Integer", other)),
        }
    }

    /// Get a `=f` result.
    pub fn float(&self, name: &str) -> Result<f64, ResultError> {
        match self.value(name)? {
            ResultValue::Float(value) => Ok(*value),
            other => Err(mismatch(name, "Float", other)),
        }
    }

    /// Get a flag result.
    pub fn boolean(&self, name: &str) -> Result<bool, ResultError> {
        match self.value(name)? {
            ResultValue::Boolean(value) => Ok(*value),
            other => Err(mismatch(name, "Boolean", other)),
        }
    }

    /// Get a `=s@` result.
    pub fn string_list(&self, name: &str) -> Result<&[String], ResultError> {
        match self.value(name)? {
            ResultValue::StringList(values) => Ok(values),
            other => Err(mismatch(name, "StringList", other)),
        }
    }

    /// Get a `=i@` result.
    pub fn integer_list(&self, name: &str) -> Result<&[i64], ResultError> {
        match self.value(name)? {
            ResultValue::IntegerList(values) => Ok(values),
            other => Err(mismatch(name, "IntegerList", other)),
        }
    }

    /// Get a `=f@` result.
    pub fn float_list(&self, name: &str) -> Result<&[f64], ResultError> {
        match self.value(name)? {
            ResultValue::FloatList(values) => Ok(values),
            other => Err(mismatch(name, "FloatList", other)),
        }
    }

    /// Get a `=s%` result.
    pub fn string_map(&self, name: &str) -> Result<&HashMap<String, String>, ResultError> {
        match self.value(name)? {
            ResultValue::StringMap(values) => Ok(values),
            other => Err(mismatch(name, "StringMap", other)),
        }
    }

    /// Get a `=i%` result.
    pub fn integer_map(&self, name: &str) -> Result<&HashMap<String, i64>, ResultError> {
        match self.value(name)? {
            ResultValue::IntegerMap(values) => Ok(values),
            other => Err(mismatch(name, "IntegerMap", other)),
        }
    }

    /// Get a `=f%` result.
    pub fn float_map(&self, name: &str) -> Result<&HashMap<String, f64>, ResultError> {
        match self.value(name)? {
            ResultValue::FloatMap(values) => Ok(values),
            other => Err(mismatch(name, "FloatMap", other)),
        }
    }
}

fn mismatch(name: &str, expected: &'static str, actual: &ResultValue) -> ResultError {
    ResultError::KindMismatch {
        name: name.to_string(),
        expected,
        actual: actual.kind_name(),
    }
}
