#![deny(missing_docs)]

//! # Output
//!
//! Where command results go: a file (parent directories created) or stdout.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use oasmd_core::{AppError, AppResult};
use serde_json::Value;
use tracing::info;

/// Output flags shared by the JSON-producing commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct JsonOutputArgs {
    /// Write to this file instead of stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Single-line JSON instead of pretty-printed.
    #[clap(long)]
    pub compact: bool,
}

impl JsonOutputArgs {
    /// Serializes `value` and writes it out.
    pub fn write(&self, value: &Value) -> AppResult<()> {
        let text = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        write_text(self.output.as_deref(), &text)
    }
}

/// Writes `text` plus a trailing newline to `path`, or to stdout when absent.
pub fn write_text(path: Option<&Path>, text: &str) -> AppResult<()> {
    let Some(path) = path else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::General(format!("Failed to create output dir: {}", e)))?;
    }
    fs::write(path, format!("{}\n", text))
        .map_err(|e| AppError::General(format!("Failed to write {:?}: {}", path, e)))?;
    info!(path = %path.display(), "wrote output");
    Ok(())
}
