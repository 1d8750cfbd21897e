use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static NON_ALPHABETIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("Could not parse non-alphabetic regex"));

/// Returns true if the word is non-empty, has no leading or trailing
/// whitespace, and contains nothing but ASCII letters and whitespace.
pub(crate) fn is_alphabetic(word: &str) -> bool {
    let trimmed = word.trim();
    !trimmed.is_empty() && trimmed.len() == word.len() && !NON_ALPHABETIC_REGEX.is_match(word)
}

pub(crate) fn is_capitalized(word: &str) -> bool {
    word.chars().next().map_or(false, char::is_uppercase)
}

pub(crate) fn is_lowercase(word: &str) -> bool {
    !word.chars().any(char::is_uppercase)
}

pub(crate) fn lowercase(word: &str) -> Cow<'_, str> {
    if word.chars().any(char::is_uppercase) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}

/// Upper-cases the first character of `new` if `orig` starts with an
/// upper-case character. Everything after the first character is left
/// alone.
pub(crate) fn fix_case<'a>(orig: &str, new: Cow<'a, str>) -> Cow<'a, str> {
    if !is_capitalized(orig) {
        return new;
    }

    let mut chars = new.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            let mut fixed: String = first.to_uppercase().collect();
            fixed.push_str(chars.as_str());
            Cow::Owned(fixed)
        }
        _ => new,
    }
}

/// Splits a phrase at its last space. The prefix keeps the space, so
/// `prefix + suffix` is always the original phrase.
pub(crate) fn split_suffix_word(word: &str) -> (&str, &str) {
    match word.rfind(' ') {
        Some(idx) => word.split_at(idx + 1),
        None => ("", word),
    }
}

pub(crate) fn ends_with_ignore_case(word: &str, suffix: &str) -> bool {
    word.len() >= suffix.len()
        && word.as_bytes()[word.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}

pub(crate) fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| ends_with_ignore_case(word, s))
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    #[test]
    fn is_alphabetic() {
        let tests = [
            ("dog", true),
            ("Dog", true),
            ("project manager", true),
            ("a", true),
            ("", false),
            (" ", false),
            (" dog", false),
            ("dog ", false),
            ("dog-town", false),
            ("dog's", false),
            ("r2d2", false),
            ("café", false),
        ];
        for test in tests {
            assert_eq!(
                super::is_alphabetic(test.0),
                test.1,
                "is_alphabetic({:?}) = {}",
                test.0,
                test.1,
            );
        }
    }

    #[test]
    fn is_capitalized() {
        assert!(super::is_capitalized("Dog"));
        assert!(super::is_capitalized("DOG"));
        assert!(super::is_capitalized("Émile"));
        assert!(!super::is_capitalized("dog"));
        assert!(!super::is_capitalized(""));
        assert!(!super::is_capitalized(" Dog"));
    }

    #[test]
    fn is_lowercase() {
        let tests = [
            ("dog", true),
            ("dog-town 2", true),
            ("", true),
            ("Dog", false),
            ("dOg", false),
            ("Éese", false),
            ("naïve", true),
        ];
        for test in tests {
            assert_eq!(
                super::is_lowercase(test.0),
                test.1,
                "is_lowercase({}) = {}",
                test.0,
                test.1,
            );
        }
    }

    #[test]
    fn lowercase() {
        assert!(matches!(super::lowercase("dog"), Cow::Borrowed("dog")));
        assert_eq!(super::lowercase("DoG"), "dog");
        assert!(matches!(super::lowercase("dog-town 2"), Cow::Borrowed(_)));
    }

    #[test]
    fn fix_case() {
        let tests = [
            ("dog", "dogs", "dogs"),
            ("Dog", "dogs", "Dogs"),
            ("Dog", "Dogs", "Dogs"),
            ("DOG", "DOGs", "DOGs"),
            ("dog", "Dogs", "Dogs"),
            ("Project manager", "project managers", "Project managers"),
            ("Fungus", "fungi", "Fungi"),
            ("Dog", "", ""),
        ];
        for test in tests {
            assert_eq!(
                super::fix_case(test.0, Cow::Borrowed(test.1)),
                test.2,
                "fix_case({}, {}) = {}",
                test.0,
                test.1,
                test.2,
            );
        }

        let ok = match super::fix_case("dog", Cow::Borrowed("dogs")) {
            Cow::Borrowed(_) => true,
            Cow::Owned(_) => false,
        };
        assert!(ok, "fix_case returns a Cow::Borrowed when it does not make any changes to the new string");
    }

    #[test]
    fn split_suffix_word() {
        let tests = [
            ("dog", ("", "dog")),
            ("project manager", ("project ", "manager")),
            ("senior project manager", ("senior project ", "manager")),
            ("trailing ", ("trailing ", "")),
        ];
        for test in tests {
            assert_eq!(super::split_suffix_word(test.0), test.1);
        }
    }

    #[test]
    fn ends_with_ignore_case() {
        assert!(super::ends_with_ignore_case("Mouse", "OUSE"));
        assert!(super::ends_with_ignore_case("mouse", "mouse"));
        assert!(!super::ends_with_ignore_case("use", "mouse"));
        assert!(!super::ends_with_ignore_case("café", "fe"));
        assert!(super::ends_with_any("WISH", &["ch", "sh", "ss"]));
        assert!(!super::ends_with_any("wisp", &["ch", "sh", "ss"]));
    }
}
