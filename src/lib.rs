pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{InspectSettings, OutputFormat, TomlConfig};

pub use crate::core::{
    default_if_null_or_empty, is_array, is_boolean, is_integer, kind_of_any, Inspect, Kind,
};
pub use crate::domain::model::InspectionReport;
pub use crate::utils::error::{InspectError, Result};
pub use crate::utils::validation::{is_not_null_or_empty, is_null_or_empty, Emptiness};
