//! Language auto-detection and the supported-language table.
//!
//! Detection tests the input against an ordered sequence of script-range
//! patterns (compiled once, reused forever) and returns the first match.
//! The Latin-diacritic heuristics at the tail are exactly that —
//! heuristics — so their order is part of the contract: Spanish, French,
//! German, Italian, Portuguese, then plain Latin falls through to the
//! default.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Fallback language when nothing matches (including empty input).
pub const DEFAULT_LANGUAGE: &str = "en";

// ---------------------------------------------------------------------------
// Supported languages
// ---------------------------------------------------------------------------

/// One row of the supported-language table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

/// Languages the translation routes accept as targets.
pub static SUPPORTED_LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo { code: "zh", name: "Chinese", native_name: "中文" },
    LanguageInfo { code: "en", name: "English", native_name: "English" },
    LanguageInfo { code: "ja", name: "Japanese", native_name: "日本語" },
    LanguageInfo { code: "ko", name: "Korean", native_name: "한국어" },
    LanguageInfo { code: "fr", name: "French", native_name: "Français" },
    LanguageInfo { code: "de", name: "German", native_name: "Deutsch" },
    LanguageInfo { code: "es", name: "Spanish", native_name: "Español" },
    LanguageInfo { code: "ru", name: "Russian", native_name: "Русский" },
    LanguageInfo { code: "ar", name: "Arabic", native_name: "العربية" },
    LanguageInfo { code: "pt", name: "Portuguese", native_name: "Português" },
    LanguageInfo { code: "it", name: "Italian", native_name: "Italiano" },
    LanguageInfo { code: "th", name: "Thai", native_name: "ไทย" },
    LanguageInfo { code: "vi", name: "Vietnamese", native_name: "Tiếng Việt" },
];

/// Look up a supported language by code.
pub fn language_info(code: &str) -> Option<&'static LanguageInfo> {
    SUPPORTED_LANGUAGES.iter().find(|l| l.code == code)
}

/// Chinese display name used in translation prompts.
pub fn prompt_language_name(code: &str) -> &'static str {
    match code {
        "zh" => "中文",
        "en" => "英语",
        "ja" => "日语",
        "ko" => "韩语",
        "fr" => "法语",
        "de" => "德语",
        "es" => "西班牙语",
        "ru" => "俄语",
        "ar" => "阿拉伯语",
        "pt" => "葡萄牙语",
        "it" => "意大利语",
        "th" => "泰语",
        "vi" => "越南语",
        _ => "目标语言",
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Ordered (pattern, language) pairs. First match wins.
static DETECTORS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\p{Han}", "zh"),
        (r"[\p{Hiragana}\p{Katakana}]", "ja"),
        (r"\p{Hangul}", "ko"),
        (r"\p{Arabic}", "ar"),
        (r"\p{Cyrillic}", "ru"),
        (r"\p{Thai}", "th"),
        // Vietnamese tone/vowel marks not shared with the western-European
        // sets below.
        (r"[ăđơưạảấầẩẫậắằẳẵặẹẻẽềểễệỉịọỏốồổỗộớờởỡợụủứừửữựỳỵỷỹ]", "vi"),
        (r"[ñ¿¡]", "es"),
        (r"[àâçèéêëîïôùûœ]", "fr"),
        (r"[äöüß]", "de"),
        (r"[ìòÈ]", "it"),
        (r"[ãõ]", "pt"),
    ]
    .into_iter()
    .map(|(pattern, lang)| {
        (
            Regex::new(pattern).expect("valid detection pattern"),
            lang,
        )
    })
    .collect()
});

/// Detect the dominant language of `text`.
///
/// Returns the first detector that matches, or [`DEFAULT_LANGUAGE`] when
/// none do (plain-Latin and empty input both land there).
pub fn detect_language(text: &str) -> &'static str {
    DETECTORS
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, lang)| *lang)
        .unwrap_or(DEFAULT_LANGUAGE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
