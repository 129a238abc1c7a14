/// Translation direction offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Español → Japonés
    EsJa,
    /// Japonés → Español
    JaEs,
    /// Español → Japonés (hiragana)
    EsJaHiragana,
    /// Español → Japonés (katakana)
    EsJaKatakana,
}

/// All directions, in the order they appear in the drop-down.
pub const ALL: [Direction; 4] = [
    Direction::EsJa,
    Direction::JaEs,
    Direction::EsJaHiragana,
    Direction::EsJaKatakana,
];

impl Direction {
    /// Stable identifier, also the value the original selector used.
    pub fn id(self) -> &'static str {
        match self {
            Direction::EsJa => "es-ja",
            Direction::JaEs => "ja-es",
            Direction::EsJaHiragana => "es-ja-hiragana",
            Direction::EsJaKatakana => "es-ja-katakana",
        }
    }

    /// Label shown in the drop-down.
    pub fn label(self) -> &'static str {
        match self {
            Direction::EsJa => "Español → Japonés",
            Direction::JaEs => "Japonés → Español",
            Direction::EsJaHiragana => "Español → Japonés (hiragana)",
            Direction::EsJaKatakana => "Español → Japonés (katakana)",
        }
    }

    /// Two-letter code sent to the backend.
    pub fn lang(self) -> &'static str {
        lang_from_direction(self.id())
    }

    /// Locale for the platform text-to-speech fallback.
    pub fn speech_locale(self) -> &'static str {
        if self.lang() == "ja" {
            "ja-JP"
        } else {
            "es-ES"
        }
    }

    /// Direction for a drop-down index. Out-of-range falls back to the
    /// first entry rather than failing.
    pub fn from_index(index: u32) -> Direction {
        ALL.get(index as usize).copied().unwrap_or(Direction::EsJa)
    }
}

/// Map a direction identifier to the backend language code.
/// Unrecognized identifiers deliberately default to English.
pub fn lang_from_direction(id: &str) -> &'static str {
    match id {
        "es-ja" | "es-ja-hiragana" | "es-ja-katakana" => "ja",
        "ja-es" => "es",
        _ => "en",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_directions_map_to_documented_codes() {
        assert_eq!(lang_from_direction("es-ja"), "ja");
        assert_eq!(lang_from_direction("ja-es"), "es");
        assert_eq!(lang_from_direction("es-ja-hiragana"), "ja");
        assert_eq!(lang_from_direction("es-ja-katakana"), "ja");
    }

    #[test]
    fn unknown_direction_defaults_to_english() {
        assert_eq!(lang_from_direction("fr-de"), "en");
        assert_eq!(lang_from_direction(""), "en");
    }

    #[test]
    fn enum_variants_map_through_the_table() {
        assert_eq!(Direction::EsJa.lang(), "ja");
        assert_eq!(Direction::JaEs.lang(), "es");
        assert_eq!(Direction::EsJaHiragana.lang(), "ja");
        assert_eq!(Direction::EsJaKatakana.lang(), "ja");
    }

    #[test]
    fn speech_locale_follows_target_language() {
        assert_eq!(Direction::EsJa.speech_locale(), "ja-JP");
        assert_eq!(Direction::EsJaKatakana.speech_locale(), "ja-JP");
        assert_eq!(Direction::JaEs.speech_locale(), "es-ES");
    }

    #[test]
    fn out_of_range_index_falls_back() {
        assert_eq!(Direction::from_index(0), Direction::EsJa);
        assert_eq!(Direction::from_index(3), Direction::EsJaKatakana);
        assert_eq!(Direction::from_index(99), Direction::EsJa);
    }
}
