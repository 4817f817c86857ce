/// Language codes accepted for YouTube subtitle files.
const LANGUAGES: &[&str] = &[
    "af", "am", "ar", "az", "be", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el",
    "en", "en-GB", "es", "es-419", "es-MX", "et", "eu", "fa", "fa-AF", "ff", "fi", "fil",
    "fr", "fr-CA", "ga", "gl", "gu", "ha", "he", "hi", "hr", "ht", "hu", "hy", "id", "ig",
    "is", "it", "ja", "ka", "kk", "km", "kn", "ko", "ku", "ky", "lo", "lt", "lv", "mg",
    "mk", "ml", "mn", "mr", "ms", "my", "ne", "nl", "no", "ny", "pa", "pl", "ps", "pt",
    "pt-BR", "ro", "ru", "rw", "si", "sk", "sl", "so", "sq", "sr", "sv", "sw", "ta", "te",
    "tg", "th", "ti", "tk", "tr", "uk", "ur", "uz", "vi", "xh", "yo", "zh-CN", "zh-TW",
    "zu",
];

/// Resolves `code` to a supported code, trying the exact code and then its
/// primary subtag (`ar-EG` -> `ar`). Matching ignores ASCII case.
pub fn lookup(code: &str) -> Option<&'static str> {
    find(code).or_else(|| {
        let primary = code.split(['-', '_']).next()?;
        find(primary)
    })
}

fn find(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(code))
        .copied()
}

pub fn is_subtitle_language_supported(code: &str) -> bool {
    lookup(code).is_some()
}
