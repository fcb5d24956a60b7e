//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use terrain_api::AppSummary;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a step heading to stderr.
pub fn step(msg: &str) {
    eprintln!("{} {}", "→".cyan(), msg.bold());
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print one search hit as `system_id  id  name`.
pub fn app_row(app: &AppSummary) {
    println!(
        "{} {}  {}",
        format!("{:<6}", app.system_id.as_str()).yellow(),
        app.id,
        app.name().unwrap_or("").bold()
    );
}
