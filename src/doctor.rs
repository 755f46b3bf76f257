//! Doctor - Optional integration checks
//!
//! devbelt is self-contained; doctor reports which optional external
//! integrations (clipboard backends for --copy, watchexec for watch) are
//! available on this machine.

use anyhow::Result;
use colored::Colorize;

use crate::core::clipboard::{SystemClipboard, CLIPBOARD_BACKENDS};
use crate::core::model::{ResultItem, ResultSet, Tool};
use crate::core::render::{emit, EmitOptions, RenderConfig};
use crate::core::util::command_exists;

/// Status of one optional integration
#[derive(Debug, Clone)]
pub struct IntegrationStatus {
    pub name: String,
    pub available: bool,
    pub purpose: &'static str,
    pub notes: Option<String>,
}

impl IntegrationStatus {
    pub fn to_result_item(&self) -> ResultItem {
        let status = if self.available { "✓" } else { "✗" };
        let mut message = format!("{} {} (optional) - {}", status, self.name, self.purpose);
        if let Some(notes) = &self.notes {
            message.push_str(&format!("\n  Note: {}", notes));
        }

        ResultItem::conversion(Tool::Doctor, &self.name, message).with_data(serde_json::json!({
            "available": self.available,
            "purpose": self.purpose,
        }))
    }
}

/// Check all optional integrations
pub fn check_integrations() -> Vec<IntegrationStatus> {
    let mut integrations = Vec::new();

    for backend in CLIPBOARD_BACKENDS {
        integrations.push(IntegrationStatus {
            name: backend.to_string(),
            available: command_exists(backend),
            purpose: "clipboard backend for --copy",
            notes: None,
        });
    }

    integrations.push(IntegrationStatus {
        name: "watchexec".to_string(),
        available: command_exists("watchexec"),
        purpose: "file watching for the watch command",
        notes: Some("Install: brew install watchexec / cargo install watchexec-cli".to_string()),
    });

    integrations
}

/// Run the doctor command
pub fn run_doctor(config: RenderConfig, emit_opts: &EmitOptions) -> Result<()> {
    let integrations = check_integrations();

    let mut result_set = ResultSet::new();
    for integration in &integrations {
        result_set.push(integration.to_result_item());
    }

    emit(&result_set, config, emit_opts)?;

    if !emit_opts.quiet {
        match SystemClipboard::detect().backend() {
            Some(backend) => eprintln!("{}", format!("clipboard: using {}", backend).green()),
            None => eprintln!(
                "{}",
                "clipboard: no backend found, --copy will be a no-op".yellow()
            ),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_integrations_covers_backends_and_watchexec() {
        let integrations = check_integrations();
        let names: Vec<_> = integrations.iter().map(|i| i.name.as_str()).collect();
        for backend in CLIPBOARD_BACKENDS {
            assert!(names.contains(backend));
        }
        assert!(names.contains(&"watchexec"));
    }

    #[test]
    fn test_status_to_result_item() {
        let status = IntegrationStatus {
            name: "xclip".to_string(),
            available: false,
            purpose: "clipboard backend for --copy",
            notes: None,
        };
        let item = status.to_result_item();
        assert_eq!(item.label, Some("xclip".to_string()));
        assert!(item.content.unwrap().starts_with("✗ xclip"));
    }
}
