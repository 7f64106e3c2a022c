/// How repeated occurrences of an option combine.
///
/// Selected by the trailing marker of a spec string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `+`: each occurrence adds one to a counter.
    Increment,
    /// `@` or `[]`: each occurrence appends its value to a list.
    Append,
    /// No marker: the final occurrence wins.
    Assign,
    /// `%` or `{}`: each occurrence inserts a `key=value` pair, overwriting repeated keys.
    MapInsert,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The type of value an option carries.
///
/// Selected by the `=s`, `=i` or `=f` suffix of a spec string; options without a suffix are [`ValueKind::Boolean`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `=s`
    String,
    /// `=i`: a base-10 signed 64-bit integer.
    Integer,
    /// `=f`: a 64-bit float.
    Float,
    /// No suffix: presence alone.
    Boolean,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A decoded option value, as handed to callback destinations.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// From a `=s` option.
    String(String),
    /// From a `=i` option.
    Integer(i64),
    /// From a `=f` option.
    Float(f64),
    /// From a niladic option; always `true`.
    Boolean(bool),
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// The string, if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    /// The integer, if this is a [`Value::Integer`].
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// The float, if this is a [`Value::Float`].
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// The boolean, if this is a [`Value::Boolean`].
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(value) => write!(f, "{value}"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Boolean(value) => write!(f, "{value}"),
        }
    }
}

// A value on its way to a destination; map options carry their key alongside.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Decoded {
    Scalar(Value),
    Entry { key: String, value: Value },
}
