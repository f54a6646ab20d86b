//! Naming conventions for discovering specs without explicit registration.
//!
//! Names are split into words and compared against keyword lists:
//! - method names split on `_` (`because_the_user_logs_in` → `because`, `the`, ...)
//! - type names split on CamelCase boundaries and `_` (`WhenAddingHTTPSpec` → `When`, `Adding`, `HTTP`, `Spec`)
//! - file and folder names split on `_`, `-` and `.` after the extension is removed
//!
//! A name matches when **any** word equals a keyword, ignoring ASCII case. Whole-word matching means
//! `item_count` is not an assertion even though it starts with `it`.

/// Keywords that mark a type as a spec (a context class).
pub const CLASS_KEYWORDS: &[&str] = &["spec", "specs", "when"];

/// Keywords that mark a file as a test file.
pub const FILE_KEYWORDS: &[&str] = &["test", "tests", "spec", "specs"];

/// Keywords that mark a folder as a test folder.
pub const FOLDER_KEYWORDS: &[&str] = &["test", "tests", "spec", "specs"];

/// Split a snake_case method name into its words. Empty segments are dropped.
pub fn method_words(name: &str) -> Vec<&str> {
    name.split('_').filter(|w| !w.is_empty()).collect()
}

/// Split a type name on CamelCase boundaries and underscores.
///
/// Runs of capitals are kept together as an acronym; the last capital of a run starts a new word when it is
/// followed by a lowercase letter (`HTTPSpec` → `HTTP`, `Spec`).
pub fn type_words(name: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for segment in name.split('_').filter(|s| !s.is_empty()) {
        let chars: Vec<(usize, char)> = segment.char_indices().collect();
        let mut start = 0;
        for i in 1..chars.len() {
            let (idx, cur) = chars[i];
            let prev = chars[i - 1].1;
            let next_is_lower = chars.get(i + 1).is_some_and(|(_, c)| c.is_lowercase());
            let boundary = cur.is_uppercase()
                && (prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower));
            if boundary {
                words.push(&segment[start..idx]);
                start = idx;
            }
        }
        words.push(&segment[start..]);
    }
    words
}

/// Split a file or folder name into words, ignoring a trailing extension.
pub fn path_words(file_name: &str) -> Vec<&str> {
    let stem = match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(dot) => &file_name[..dot],
    };
    stem.split(['_', '-', '.']).filter(|w| !w.is_empty()).collect()
}

/// Whether any word equals any keyword (ASCII case-insensitive).
pub fn any_word_matches<S: AsRef<str>>(words: &[&str], keywords: &[S]) -> bool {
    words
        .iter()
        .any(|w| keywords.iter().any(|k| w.eq_ignore_ascii_case(k.as_ref())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_words() {
        assert_eq!(method_words("it_should_add"), vec!["it", "should", "add"]);
        assert_eq!(method_words("__cleanup__"), vec!["cleanup"]);
        assert!(method_words("").is_empty());
    }

    #[test]
    fn test_type_words_camel_case() {
        assert_eq!(type_words("WhenAddingNumbers"), vec!["When", "Adding", "Numbers"]);
        assert_eq!(type_words("HTTPSpec"), vec!["HTTP", "Spec"]);
        assert_eq!(type_words("Parser2Spec"), vec!["Parser2", "Spec"]);
        assert_eq!(type_words("when_adding"), vec!["when", "adding"]);
        assert_eq!(type_words("Spec"), vec!["Spec"]);
    }

    #[test]
    fn test_path_words() {
        assert_eq!(path_words("test_parser.rs"), vec!["test", "parser"]);
        assert_eq!(path_words("parser-spec"), vec!["parser", "spec"]);
        assert_eq!(path_words(".hidden"), vec!["hidden"]);
    }

    #[test]
    fn test_whole_word_matching() {
        assert!(any_word_matches(&method_words("it_adds"), &["it"]));
        assert!(!any_word_matches(&method_words("item_count"), &["it"]));
        assert!(any_word_matches(&type_words("WhenAdding"), CLASS_KEYWORDS));
        assert!(!any_word_matches(&type_words("Whenever"), CLASS_KEYWORDS));
    }
}
