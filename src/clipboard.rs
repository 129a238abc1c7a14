use std::io::Write;
use std::process::{Command, Stdio};

use crate::app::VALIDATION_MSG;

/// Whether the display currently holds a copyable translation rather
/// than the empty state or the validation placeholder.
pub fn is_copyable(displayed: &str) -> bool {
    !displayed.is_empty() && !displayed.contains(VALIDATION_MSG)
}

/// Copy the displayed translation to the system clipboard. Returns
/// `Ok(false)` without touching the clipboard when the display holds
/// only the placeholder.
pub fn copy_result(displayed: &str) -> Result<bool, Box<dyn std::error::Error>> {
    if !is_copyable(displayed) {
        return Ok(false);
    }
    copy_to_clipboard(displayed)?;
    Ok(true)
}

/// Copy text to the system clipboard.
/// Uses pbcopy on macOS, wl-copy on Wayland, xclip on X11.
fn copy_to_clipboard(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_os = "macos")]
    let (cmd, args): (&str, Vec<&str>) = ("pbcopy", vec![]);

    #[cfg(target_os = "linux")]
    let (cmd, args): (&str, Vec<&str>) = {
        let session_type = std::env::var("XDG_SESSION_TYPE").unwrap_or_default();
        if session_type == "wayland" {
            ("wl-copy", vec![])
        } else {
            ("xclip", vec!["-selection", "clipboard"])
        }
    };

    let mut child = Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("Failed to spawn {cmd}: {e}"))?;

    if let Some(ref mut stdin) = child.stdin {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(format!("{cmd} exited with status {status}").into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_not_copyable() {
        assert!(!is_copyable(""));
        assert!(!is_copyable(VALIDATION_MSG));
    }

    #[test]
    fn translation_is_copyable() {
        assert!(is_copyable("こんにちは"));
    }
}
