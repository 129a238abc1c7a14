const LINE_SHARE_BASE: &str = "https://line.me/R/msg/text/?";

/// Build the LINE deep link that opens the messaging app with the
/// translation prefilled.
pub fn line_share_url(translation: &str) -> String {
    let message =
        format!("Traducción: {translation}\n\nTraducido con Japan Assist – Asistente Japonés");
    format!("{LINE_SHARE_BASE}{}", urlencoding::encode(&message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_targets_line() {
        let url = line_share_url("こんにちは");
        assert!(url.starts_with("https://line.me/R/msg/text/?"));
    }

    #[test]
    fn message_is_fully_percent_encoded() {
        let url = line_share_url("hola mundo");
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
        assert!(url.contains("hola%20mundo"));
    }

    #[test]
    fn template_wraps_the_translation() {
        let url = line_share_url("X");
        let decoded = urlencoding::decode(url.trim_start_matches(LINE_SHARE_BASE)).unwrap();
        assert!(decoded.starts_with("Traducción: X"));
        assert!(decoded.contains("Japan Assist"));
    }
}
