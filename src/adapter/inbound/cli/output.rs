//! Terminal output for CLI commands.
//!
//! Human-readable lines with colored status symbols, or one JSON object per
//! line when `--json` is set.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

/// Output settings taken from global CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit one JSON object per line instead of styled text.
    pub json: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool) -> Self {
        Self { json }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn current() -> OutputConfig {
    match cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn emit(kind: &str, payload: serde_json::Value) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// Apply output settings. Call once, before any output.
pub fn configure(config: OutputConfig) {
    match cell().write() {
        Ok(mut slot) => *slot = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

pub fn section(title: &str) {
    if is_json() {
        emit("section", json!({ "title": title }));
        return;
    }
    println!();
    println!("{}", title.bold());
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    if is_json() {
        emit("field", json!({ "label": label, "value": value }));
        return;
    }
    println!("  {:<14} {}", format!("{label}:").dimmed(), value);
}

/// Print one item of a list.
pub fn item(value: impl Display) {
    let value = value.to_string();
    if is_json() {
        emit("item", json!({ "value": value }));
        return;
    }
    println!("    {} {}", "-".dimmed(), value);
}

pub fn success(message: &str) {
    if is_json() {
        emit("success", json!({ "message": message }));
        return;
    }
    println!("  {} {}", "✓".green(), message);
}

pub fn warning(message: &str) {
    if is_json() {
        emit("warning", json!({ "message": message }));
        return;
    }
    println!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
        return;
    }
    eprintln!("  {} {}", "×".red(), message);
}

/// Print a dimmed hint.
pub fn note(message: &str) {
    if is_json() {
        emit("note", json!({ "message": message }));
        return;
    }
    println!("  {}", message.dimmed());
}

/// Print indented multi-line text.
pub fn lines(content: &str) {
    if is_json() {
        emit("lines", json!({ "content": content }));
        return;
    }
    for line in content.lines() {
        println!("    {line}");
    }
}

/// Emit a structured record. In text mode nothing is printed; callers
/// render the same data with [`field`] and friends.
pub fn record(kind: &str, payload: serde_json::Value) {
    if is_json() {
        emit(kind, payload);
    }
}
