//! Utility helpers shared across the WASM frontend.

use unicode_segmentation::UnicodeSegmentation;

use crate::constants::{AVATAR_COLORS, AVATAR_COLOR_FALLBACK};

/// Read the persisted bearer token, if any.
pub fn current_jwt() -> Option<String> {
    crate::storage::load_token()
}

/// Up to two upper-cased initials from a display name, one per word.
/// Works on grapheme clusters so accented and composed characters survive.
/// Empty names become `"?"`.
pub fn initials(name: &str) -> String {
    let out: String = name
        .split_whitespace()
        .filter_map(|word| word.graphemes(true).next())
        .take(2)
        .collect::<String>()
        .to_uppercase();
    if out.is_empty() {
        "?".to_string()
    } else {
        out
    }
}

/// Deterministic avatar colour class for an author name.
pub fn avatar_class(name: &str) -> &'static str {
    match name.chars().next() {
        Some(c) => AVATAR_COLORS[(c as usize) % AVATAR_COLORS.len()],
        None => AVATAR_COLOR_FALLBACK,
    }
}

/// Case-insensitive substring match used by the comment search.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("maria da silva"), "MD");
        assert_eq!(initials("Ângela"), "Â");
        assert_eq!(initials("  "), "?");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn avatar_colour_is_stable() {
        assert_eq!(avatar_class("Ana"), avatar_class("Ana Paula"));
        assert_eq!(avatar_class(""), AVATAR_COLOR_FALLBACK);
        // 'A' is 65, 65 % 5 == 0.
        assert_eq!(avatar_class("A"), AVATAR_COLORS[0]);
    }

    #[test]
    fn search_ignores_case() {
        assert!(contains_ignore_case("Ótima LIVE", "live"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("abc", "d"));
    }
}
