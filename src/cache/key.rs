//! Key Builder Module
//!
//! Derives cache keys from arbitrary, possibly nested, argument lists.
//!
//! Leaves are visited depth-first, left to right, and their string forms are
//! joined with [`KEY_DELIMITER`]. The delimiter is not escaped, so an argument
//! that itself contains `~` can collide with a different argument sequence.

use std::fmt;

use serde_json::Value;

// == Constants ==
/// Separator placed between flattened key parts.
pub const KEY_DELIMITER: &str = "~";

// == Key Argument ==
/// A single argument to [`create_key`], either a scalar leaf or a nested list.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyArg {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    List(Vec<KeyArg>),
}

impl KeyArg {
    /// Appends the string form of every leaf under this argument to `out`.
    fn flatten_into(&self, out: &mut Vec<String>) {
        match self {
            KeyArg::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
            leaf => out.push(leaf.to_string()),
        }
    }
}

impl fmt::Display for KeyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyArg::Null => Ok(()),
            KeyArg::Bool(b) => write!(f, "{}", b),
            KeyArg::Int(n) => write!(f, "{}", n),
            KeyArg::UInt(n) => write!(f, "{}", n),
            KeyArg::Float(n) => write!(f, "{}", n),
            KeyArg::Str(s) => f.write_str(s),
            KeyArg::List(_) => {
                let mut parts = Vec::new();
                self.flatten_into(&mut parts);
                f.write_str(&parts.join(KEY_DELIMITER))
            }
        }
    }
}

// == Conversions ==
macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for KeyArg {
            fn from(n: $t) -> Self {
                KeyArg::Int(n as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for KeyArg {
            fn from(n: $t) -> Self {
                KeyArg::UInt(n as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for KeyArg {
    fn from(n: f32) -> Self {
        KeyArg::Float(n as f64)
    }
}

impl From<f64> for KeyArg {
    fn from(n: f64) -> Self {
        KeyArg::Float(n)
    }
}

impl From<bool> for KeyArg {
    fn from(b: bool) -> Self {
        KeyArg::Bool(b)
    }
}

impl From<&str> for KeyArg {
    fn from(s: &str) -> Self {
        KeyArg::Str(s.to_string())
    }
}

impl From<String> for KeyArg {
    fn from(s: String) -> Self {
        KeyArg::Str(s)
    }
}

impl From<&String> for KeyArg {
    fn from(s: &String) -> Self {
        KeyArg::Str(s.clone())
    }
}

impl<T: Into<KeyArg>> From<Option<T>> for KeyArg {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(KeyArg::Null, Into::into)
    }
}

impl<T: Into<KeyArg>> From<Vec<T>> for KeyArg {
    fn from(items: Vec<T>) -> Self {
        KeyArg::List(items.into_iter().map(Into::into).collect())
    }
}

/// JSON arrays become lists; object values become lists in document order.
impl From<&Value> for KeyArg {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => KeyArg::Null,
            Value::Bool(b) => KeyArg::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    KeyArg::Int(i)
                } else if let Some(u) = n.as_u64() {
                    KeyArg::UInt(u)
                } else {
                    KeyArg::Float(n.as_f64().unwrap_or_default())
                }
            }
            Value::String(s) => KeyArg::Str(s.clone()),
            Value::Array(items) => KeyArg::List(items.iter().map(KeyArg::from).collect()),
            Value::Object(map) => KeyArg::List(map.values().map(KeyArg::from).collect()),
        }
    }
}

impl From<Value> for KeyArg {
    fn from(value: Value) -> Self {
        KeyArg::from(&value)
    }
}

// == Create Key ==
/// Flattens `args` depth-first and joins the leaves with `~`.
pub fn create_key(args: &[KeyArg]) -> String {
    let mut parts = Vec::new();
    for arg in args {
        arg.flatten_into(&mut parts);
    }
    parts.join(KEY_DELIMITER)
}

// == Create Key Array ==
/// Joins an already flat sequence of values with `~`, without recursing.
pub fn create_key_array<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(KEY_DELIMITER)
}

/// Builds a cache key from any number of arguments convertible into [`KeyArg`].
///
/// ```
/// use simple_cache::cache_key;
///
/// assert_eq!(cache_key!("user", 42, vec![1, 2]), "user~42~1~2");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($($arg:expr),* $(,)?) => {
        $crate::cache::create_key(&[$($crate::cache::KeyArg::from($arg)),*])
    };
}
