//! Platform clipboard tools.

mod osascript;
mod wl_copy;
mod xclip;

pub use osascript::OsaScript;
pub use wl_copy::WlCopy;
pub use xclip::Xclip;

use std::io::Write;
use std::process::{Command, Stdio};

use super::tool::{CopyTool, CopyToolError};

/// Tools for the current platform, in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    vec![
        Box::new(OsaScript::new()),
        Box::new(WlCopy::new()),
        Box::new(Xclip::new()),
    ]
}

/// Check if a binary is on PATH.
pub(crate) fn tool_exists(binary: &str) -> bool {
    Command::new("which")
        .arg(binary)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run `program args...` with `bytes` on stdin.
pub(crate) fn pipe_to(program: &str, args: &[&str], bytes: &[u8]) -> Result<(), CopyToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CopyToolError::NotFound,
            _ => CopyToolError::Failed(e.to_string()),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(bytes)
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;
        // stdin dropped here so the tool sees EOF
    }

    let output = child
        .wait_with_output()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(CopyToolError::Failed(if stderr.is_empty() {
            format!("{} exited with {}", program, output.status)
        } else {
            stderr
        }))
    }
}
