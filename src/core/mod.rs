pub mod kind;
pub mod object;

pub use kind::{kind_of_any, Inspect, Kind};
pub use object::{default_if_null_or_empty, is_array, is_boolean, is_integer};
