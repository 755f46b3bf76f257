//! Clipboard sink
//!
//! Write-only access to the system clipboard, behind a trait so tools and
//! tests never depend on the host environment. The system implementation
//! shells out to whichever clipboard utility is installed; a missing
//! backend or failed write is reported to the caller, which treats it as
//! non-fatal.

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

use crate::core::util::command_exists;

/// Write-only clipboard abstraction
pub trait ClipboardSink {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Clipboard utilities probed in order
pub const CLIPBOARD_BACKENDS: &[&str] = &["pbcopy", "wl-copy", "xclip", "xsel"];

/// System clipboard backed by an external utility
pub struct SystemClipboard {
    backend: Option<&'static str>,
}

impl SystemClipboard {
    /// Probe for an installed clipboard utility
    pub fn detect() -> Self {
        Self {
            backend: CLIPBOARD_BACKENDS
                .iter()
                .copied()
                .find(|cmd| command_exists(cmd)),
        }
    }

    pub fn backend(&self) -> Option<&'static str> {
        self.backend
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let Some(backend) = self.backend else {
            bail!(
                "no clipboard utility found (looked for {})",
                CLIPBOARD_BACKENDS.join(", ")
            );
        };

        let mut command = Command::new(backend);
        // xclip writes to the primary selection unless told otherwise
        if backend == "xclip" {
            command.arg("-selection").arg("clipboard");
        }

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to spawn {}", backend))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(text.as_bytes())
                .with_context(|| format!("Failed to pipe output into {}", backend))?;
        }

        let status = child.wait()?;
        if !status.success() {
            bail!("{} exited with {}", backend, status);
        }

        Ok(())
    }
}
