use crate::utils::error::{InspectError, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Library-wide notion of an "empty" value.
///
/// Strings and containers are empty when they hold nothing, `None` and JSON
/// `null` are always empty, scalars never are. Whitespace is content: `" "`
/// is not empty.
pub trait Emptiness {
    fn is_empty_value(&self) -> bool;
}

/// `true` when `value` is null or empty.
pub fn is_null_or_empty<T: Emptiness + ?Sized>(value: Option<&T>) -> bool {
    value.map_or(true, Emptiness::is_empty_value)
}

/// `false` for null, `false` for empty, `true` otherwise.
pub fn is_not_null_or_empty<T: Emptiness + ?Sized>(value: Option<&T>) -> bool {
    !is_null_or_empty(value)
}

macro_rules! never_empty {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Emptiness for $ty {
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_empty!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

macro_rules! empty_by_len {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Emptiness for $ty {
                fn is_empty_value(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

empty_by_len!(
    [] str,
    [] String,
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] BTreeSet<T>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [K, V, S] HashMap<K, V, S>,
);

impl<T: Emptiness> Emptiness for Option<T> {
    fn is_empty_value(&self) -> bool {
        is_null_or_empty(self.as_ref())
    }
}

impl<T: Emptiness + ?Sized> Emptiness for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: Emptiness + ?Sized> Emptiness for Box<T> {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: Emptiness + ?Sized> Emptiness for Rc<T> {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: Emptiness + ?Sized> Emptiness for Arc<T> {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl Emptiness for serde_json::Value {
    fn is_empty_value(&self) -> bool {
        match self {
            serde_json::Value::Null => true,
            serde_json::Value::Bool(_) | serde_json::Value::Number(_) => false,
            serde_json::Value::String(s) => s.is_empty(),
            serde_json::Value::Array(items) => items.is_empty(),
            serde_json::Value::Object(map) => map.is_empty(),
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(InspectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(InspectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InspectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(InspectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
