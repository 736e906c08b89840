//! Answer matching

/// Compare a given answer against the expected one.
///
/// Both sides are trimmed and compared case-insensitively (Unicode aware,
/// so `"ÁFRICA"` matches `"África"`).
pub fn answers_match(given: &str, expected: &str) -> bool {
    normalize(given) == normalize(expected)
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
