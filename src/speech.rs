use std::process::{Command, Stdio};

/// Read text aloud with the platform speech synthesizer. Used as a
/// fallback when the backend returned no audio clip.
/// Uses `say` on macOS and `spd-say` on Linux.
pub fn speak(text: &str, locale: &str) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_os = "macos")]
    let (cmd, args): (&str, Vec<&str>) = {
        let _ = locale; // `say` picks the voice from system settings
        ("say", vec!["-r", "175", text])
    };

    #[cfg(target_os = "linux")]
    let (cmd, args): (&str, Vec<&str>) = {
        // Two-letter language for speech-dispatcher, slightly slowed to
        // match the original's 0.9 speaking rate.
        let lang = &locale[..2];
        ("spd-say", vec!["-l", lang, "-r", "-10", text])
    };

    Command::new(cmd)
        .args(&args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("Failed to spawn {cmd}: {e}"))?;

    Ok(())
}
