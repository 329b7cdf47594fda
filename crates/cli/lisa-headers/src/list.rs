//! List command implementation

use anyhow::Result;
use colored::Colorize;
use lc_registry::{ConstantValue, References, Registry};
use serde::Serialize;

#[derive(Serialize)]
struct Entry<'reg> {
    name: &'reg str,
    #[serde(skip_serializing_if = "Option::is_none")]
    alias_of: Option<&'reg str>,
    value: &'reg ConstantValue,
    unit: Option<&'reg str>,
    description: &'reg str,
    error: Option<f64>,
    references: &'reg References,
}

fn entries(registry: &Registry) -> Vec<Entry<'_>> {
    registry
        .iter()
        .map(|(name, constant)| Entry {
            name,
            alias_of: (constant.name != name).then_some(constant.name.as_str()),
            value: &constant.value,
            unit: constant.unit.as_deref(),
            description: &constant.description,
            error: constant.error,
            references: &constant.references,
        })
        .collect()
}

/// Every entry as a pretty-printed JSON array
pub fn format_json(registry: &Registry) -> Result<String> {
    Ok(serde_json::to_string_pretty(&entries(registry))?)
}

/// Every entry as an aligned table
pub fn format_text(registry: &Registry) -> String {
    let mut out = String::new();
    let entries = entries(registry);

    out.push_str(&format!("{} {} constants\n\n", "Listing".green().bold(), entries.len()));
    out.push_str(&format!("{:<26} {:>24}  {:<12} {}\n", "Name", "Value", "Unit", "Description"));
    out.push_str(&"-".repeat(90));
    out.push('\n');

    for entry in &entries {
        let description = match entry.alias_of {
            Some(original) => format!("alias of {original}"),
            None => entry.description.to_string(),
        };
        // Pad before coloring, escape codes would break the alignment
        let name = format!("{:<26}", entry.name);
        out.push_str(&format!(
            "{} {:>24}  {:<12} {}\n",
            name.cyan(),
            entry.value.to_string(),
            entry.unit.unwrap_or("-"),
            description
        ));
    }

    out
}
