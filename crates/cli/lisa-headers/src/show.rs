//! Show command implementation

use anyhow::Result;
use colored::Colorize;
use lc_registry::Registry;

/// Full description of one constant, looked up by name or alias
pub fn describe(registry: &Registry, name: &str) -> Result<String> {
    let constant = registry.lookup(name)?;
    let aliases = registry.aliases_of(name)?;

    let mut lines = vec![
        format!("{} {}", name.cyan().bold(), constant.description),
        format!("  {} {}", "Value:".bold(), constant.value),
        format!("  {} {}", "Unit:".bold(), constant.unit.as_deref().unwrap_or("-")),
    ];
    if let Some(error) = constant.error {
        lines.push(format!("  {} {error}", "Error:".bold()));
    }
    if !aliases.is_empty() {
        lines.push(format!("  {} {}", "Also known as:".bold(), aliases.join(", ")));
    }
    if !constant.references.is_empty() {
        lines.push(format!("  {}", "References:".bold()));
        lines.extend(constant.references.iter().map(|reference| format!("    - {reference}")));
    }

    Ok(lines.join("\n"))
}
