//! Runtime type tags.
//!
//! [`Inspect`] reports the concrete shape of a value as a [`Kind`]. Tags are
//! exact: an `i64` is never tagged `i32`, and a `Vec` is a sequence rather than
//! an array.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Null,
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    Str,
    /// Fixed-size arrays and slices.
    Array,
    /// Growable ordered containers such as `Vec`.
    Sequence,
    Set,
    Map,
    /// Anything the tag table does not know.
    Opaque,
}

impl Kind {
    pub fn is_null(self) -> bool {
        self == Kind::Null
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::I128 => "i128",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::U128 => "u128",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Char => "char",
            Kind::Str => "str",
            Kind::Array => "array",
            Kind::Sequence => "sequence",
            Kind::Set => "set",
            Kind::Map => "map",
            Kind::Opaque => "opaque",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A value that can report its runtime type tag.
pub trait Inspect {
    fn kind(&self) -> Kind;
}

macro_rules! scalar_kinds {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }
            }
        )*
    };
}

scalar_kinds!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    char => Char,
    String => Str,
);

macro_rules! fixed_array_of_any {
    ($value:expr, $ty:ty; $($n:literal)*) => {
        false $(|| $value.is::<[$ty; $n]>())*
    };
}

// `TypeId` only matches concrete types, so every shape is listed per element type.
macro_rules! any_kinds {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        fn scalar_kind_of_any(value: &dyn Any) -> Option<Kind> {
            $(
                if value.is::<$ty>() {
                    return Some(Kind::$kind);
                }
                if let Some(opt) = value.downcast_ref::<Option<$ty>>() {
                    return Some(if opt.is_some() { Kind::$kind } else { Kind::Null });
                }
            )*
            None
        }

        fn container_kind_of_any(value: &dyn Any) -> Option<Kind> {
            $(
                if value.is::<Vec<$ty>>() || value.is::<VecDeque<$ty>>() {
                    return Some(Kind::Sequence);
                }
                if value.is::<Box<[$ty]>>()
                    || value.is::<&'static [$ty]>()
                    || fixed_array_of_any!(
                        value, $ty;
                        0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
                        17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
                    )
                {
                    return Some(Kind::Array);
                }
            )*
            None
        }
    };
}

any_kinds!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    char => Char,
    String => Str,
    &'static str => Str,
);

macro_rules! container_kinds {
    ($([$($gen:tt)*] $ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl<$($gen)*> Inspect for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }
            }
        )*
    };
}

container_kinds!(
    [] str => Str,
    [T] [T] => Array,
    [T, const N: usize] [T; N] => Array,
    [T] Vec<T> => Sequence,
    [T] VecDeque<T> => Sequence,
    [T] BTreeSet<T> => Set,
    [T, S] HashSet<T, S> => Set,
    [K, V] BTreeMap<K, V> => Map,
    [K, V, S] HashMap<K, V, S> => Map,
);

impl<T: Inspect> Inspect for Option<T> {
    fn kind(&self) -> Kind {
        self.as_ref().map_or(Kind::Null, Inspect::kind)
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn kind(&self) -> Kind {
        (**self).kind()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn kind(&self) -> Kind {
        (**self).kind()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn kind(&self) -> Kind {
        (**self).kind()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn kind(&self) -> Kind {
        (**self).kind()
    }
}

/// Tags a type-erased value by `TypeId`.
///
/// Recognizes scalars, strings, `Option`s of those (`None` is [`Kind::Null`]),
/// and `Vec`, `VecDeque`, boxed slices, static slices and arrays of up to 32
/// elements over them. Anything else is [`Kind::Opaque`].
pub fn kind_of_any(value: &dyn Any) -> Kind {
    scalar_kind_of_any(value)
        .or_else(|| container_kind_of_any(value))
        .unwrap_or(Kind::Opaque)
}

impl Inspect for dyn Any {
    fn kind(&self) -> Kind {
        kind_of_any(self)
    }
}

impl Inspect for dyn Any + Send + Sync {
    fn kind(&self) -> Kind {
        kind_of_any(self)
    }
}

impl Inspect for serde_json::Value {
    fn kind(&self) -> Kind {
        match self {
            serde_json::Value::Null => Kind::Null,
            serde_json::Value::Bool(_) => Kind::Bool,
            serde_json::Value::Number(n) => number_kind(n),
            serde_json::Value::String(_) => Kind::Str,
            serde_json::Value::Array(_) => Kind::Array,
            serde_json::Value::Object(_) => Kind::Map,
        }
    }
}

// JSON has no integer widths; pick the narrowest tag that holds the value.
fn number_kind(n: &serde_json::Number) -> Kind {
    if let Some(i) = n.as_i64() {
        if i32::try_from(i).is_ok() {
            Kind::I32
        } else {
            Kind::I64
        }
    } else if n.is_u64() {
        Kind::U64
    } else {
        Kind::F64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_tags_are_exact() {
        assert_eq!(true.kind(), Kind::Bool);
        assert_eq!(1i32.kind(), Kind::I32);
        assert_eq!(1i64.kind(), Kind::I64);
        assert_eq!(1u32.kind(), Kind::U32);
        assert_eq!(1.0f64.kind(), Kind::F64);
        assert_eq!('x'.kind(), Kind::Char);
        assert_eq!("x".kind(), Kind::Str);
    }

    #[test]
    fn test_container_tags() {
        assert_eq!([1, 2, 3].kind(), Kind::Array);
        assert_eq!([0i32; 0].kind(), Kind::Array);
        assert_eq!(vec![1].as_slice().kind(), Kind::Array);
        assert_eq!(vec![1].kind(), Kind::Sequence);
        assert_eq!(HashMap::<u8, u8>::new().kind(), Kind::Map);
        assert_eq!(BTreeSet::<u8>::new().kind(), Kind::Set);
    }

    #[test]
    fn test_option_and_pointers_delegate() {
        assert_eq!(None::<bool>.kind(), Kind::Null);
        assert_eq!(Some(7i32).kind(), Kind::I32);
        assert_eq!(Box::new([1u8]).kind(), Kind::Array);
        assert_eq!(Rc::new(false).kind(), Kind::Bool);
    }

    #[test]
    fn test_any_lookup() {
        let values: Vec<Box<dyn Any>> = vec![
            Box::new(true),
            Box::new(5i32),
            Box::new(5i64),
            Box::new(String::from("s")),
            Box::new("s"),
            Box::new(vec![1, 2]),
            Box::new(HashMap::<u8, u8>::new()),
        ];
        let kinds: Vec<Kind> = values.iter().map(|v| (**v).kind()).collect();
        assert_eq!(
            kinds,
            vec![
                Kind::Bool,
                Kind::I32,
                Kind::I64,
                Kind::Str,
                Kind::Str,
                Kind::Sequence,
                Kind::Opaque
            ]
        );
    }

    #[test]
    fn test_any_options_tag_none_as_null() {
        let none: &dyn Any = &None::<bool>;
        let some: &dyn Any = &Some(3i32);
        let none_str: &dyn Any = &None::<String>;

        assert_eq!(none.kind(), Kind::Null);
        assert_eq!(some.kind(), Kind::I32);
        assert_eq!(none_str.kind(), Kind::Null);
    }

    #[test]
    fn test_any_arrays_and_slices() {
        let fixed: &dyn Any = &[1i32, 2, 3];
        let empty: &dyn Any = &[0i32; 0];
        let boxed: Box<dyn Any> = Box::new(vec![1.5f64, 2.5].into_boxed_slice());
        let slice: &'static [u8] = b"abc";
        let erased_slice: &dyn Any = &slice;
        let deque: &dyn Any = &VecDeque::from(vec!['a']);
        let too_long: &dyn Any = &[0u8; 33];

        assert_eq!(fixed.kind(), Kind::Array);
        assert_eq!(empty.kind(), Kind::Array);
        assert_eq!((*boxed).kind(), Kind::Array);
        assert_eq!(erased_slice.kind(), Kind::Array);
        assert_eq!(deque.kind(), Kind::Sequence);
        assert_eq!(too_long.kind(), Kind::Opaque);
    }

    #[test]
    fn test_json_number_widths() {
        assert_eq!(json!(1).kind(), Kind::I32);
        assert_eq!(json!(-2147483648i64).kind(), Kind::I32);
        assert_eq!(json!(2147483648i64).kind(), Kind::I64);
        assert_eq!(json!(u64::MAX).kind(), Kind::U64);
        assert_eq!(json!(1.0).kind(), Kind::F64);
        assert_eq!(json!([]).kind(), Kind::Array);
        assert_eq!(json!(null).kind(), Kind::Null);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Kind::I32).unwrap(), "\"i32\"");
        assert_eq!(Kind::Opaque.to_string(), "opaque");
    }
}
