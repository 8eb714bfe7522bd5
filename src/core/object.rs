//! Object inspection helpers.
//!
//! `None` stands in for a null reference throughout. A value that carries its
//! own null (a nested `None`, JSON `null`) is treated the same way.

use crate::core::kind::{Inspect, Kind};
use crate::utils::error::{InspectError, Result};
use crate::utils::validation::{is_not_null_or_empty, Emptiness};

/// Returns `default_value` when `value` is null or empty, otherwise `value`.
///
/// Unlike [`Option::or`], emptiness also triggers the fallback:
///
/// ```
/// use object_inspect::default_if_null_or_empty;
///
/// assert_eq!(default_if_null_or_empty(None::<&str>, None), None);
/// assert_eq!(default_if_null_or_empty(None, Some("zz")), Some("zz"));
/// assert_eq!(default_if_null_or_empty(Some(""), Some("zz")), Some("zz"));
/// assert_eq!(default_if_null_or_empty(Some("abc"), Some("zz")), Some("abc"));
/// ```
pub fn default_if_null_or_empty<T: Emptiness>(value: Option<T>, default_value: Option<T>) -> Option<T> {
    if is_not_null_or_empty(value.as_ref()) {
        value
    } else {
        default_value
    }
}

/// Whether `value` is exactly a `bool`. Null is not.
pub fn is_boolean<T: Inspect + ?Sized>(value: Option<&T>) -> bool {
    value.is_some_and(|v| v.kind() == Kind::Bool)
}

/// Whether `value` is exactly an `i32`. Other integer widths and floats are not.
pub fn is_integer<T: Inspect + ?Sized>(value: Option<&T>) -> bool {
    value.is_some_and(|v| v.kind() == Kind::I32)
}

/// Whether `value` is an array (`[T; N]`, `[T]` or a JSON array), whatever its
/// element type.
///
/// Unlike the other predicates this one rejects null: callers must check
/// before asking. A type-erased value the tag table cannot identify is
/// rejected as well, since its shape is unknown.
pub fn is_array<T: Inspect + ?Sized>(value: Option<&T>) -> Result<bool> {
    match value.map(|v| v.kind()) {
        None | Some(Kind::Null) => {
            tracing::debug!("is_array rejected a null value");
            Err(InspectError::invalid_argument("value", "value can't be null"))
        }
        Some(Kind::Opaque) => {
            tracing::debug!("is_array rejected a value of unknown type");
            Err(InspectError::invalid_argument(
                "value",
                "value type is not known to the tag table",
            ))
        }
        Some(kind) => Ok(kind == Kind::Array),
    }
}
