use crate::core::kind::{Inspect, Kind};
use crate::core::object::{default_if_null_or_empty, is_array, is_boolean, is_integer};
use crate::utils::error::Result;
use crate::utils::validation::is_null_or_empty;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every helper applied to a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionReport {
    pub value: Value,
    pub kind: Kind,
    pub empty: bool,
    pub boolean: bool,
    pub integer: bool,
    /// `None` when the array check rejected the value, see `error`.
    pub array: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub resolved: Value,
}

impl InspectionReport {
    pub fn from_value(value: Value, default_value: Option<&Value>) -> Self {
        let input = if value.is_null() { None } else { Some(&value) };

        let (array, error) = match is_array(input) {
            Ok(flag) => (Some(flag), None),
            Err(e) => (None, Some(e.to_string())),
        };
        let kind = value.kind();
        let empty = is_null_or_empty(input);
        let boolean = is_boolean(input);
        let integer = is_integer(input);
        let resolved = default_if_null_or_empty(input, default_value)
            .cloned()
            .unwrap_or(Value::Null);

        Self {
            value,
            kind,
            empty,
            boolean,
            integer,
            array,
            error,
            resolved,
        }
    }
}

pub fn inspect_all(values: &[Value], default_value: Option<&Value>) -> Vec<InspectionReport> {
    values
        .iter()
        .map(|value| InspectionReport::from_value(value.clone(), default_value))
        .collect()
}

pub fn render_text(reports: &[InspectionReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let array = match (&report.array, &report.error) {
            (Some(is_array), _) => is_array.to_string(),
            (None, Some(error)) => format!("error ({})", error),
            (None, None) => "-".to_string(),
        };
        out.push_str(&format!(
            "{:<20} kind={:<8} empty={:<5} boolean={:<5} integer={:<5} array={} resolved={}\n",
            report.value.to_string(),
            report.kind,
            report.empty,
            report.boolean,
            report.integer,
            array,
            report.resolved
        ));
    }
    out
}

pub fn render_json(reports: &[InspectionReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
