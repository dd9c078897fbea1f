//! Constants shared by the search UI and the search backend.

/// Display language selected when the page first loads.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Target languages offered by the language selector, as `(code, label)`.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("hi", "Hindi"),
    ("es", "Spanish"),
    ("fr", "French"),
];

/// Name of the remote table holding scheme rows.
pub const SCHEMES_TABLE: &str = "schemes";

pub fn language_label(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}
