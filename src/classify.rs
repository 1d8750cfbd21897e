//! Predicates that guard the inflection cascade.

use crate::{tables, util};

/// A no-op word is returned unchanged by every inflection: anything that is
/// not purely alphabetic, single characters, and pronouns or determiners.
pub(crate) fn is_no_op(word: &str) -> bool {
    !(util::is_alphabetic(word)
        && word.chars().count() > 1
        && !tables::is_pronoun(&util::lowercase(word)))
}

/// An uninflective word is spelled the same in both forms.
///
/// Capitalized words that end in a lower-case "ese" count as uninflective
/// ("Chinese", "Japanese"), but the same words in lower case do not.
pub(crate) fn is_uninflective(word: &str) -> bool {
    util::ends_with_any(word, tables::UNINFLECTIVE_SUFFIXES)
        || (!util::is_lowercase(word) && word.ends_with("ese"))
        || tables::is_uninflective_word(&util::lowercase(word))
}

#[cfg(test)]
mod tests {
    #[test]
    fn is_no_op() {
        let tests = [
            ("dog", false),
            ("Dog", false),
            ("project manager", false),
            ("a", true),
            ("I", true),
            ("they", true),
            ("They", true),
            ("whoever", true),
            ("", true),
            ("3rd", true),
            ("dog-town", true),
            (" dog", true),
            ("naïve", true),
        ];
        for test in tests {
            assert_eq!(
                super::is_no_op(test.0),
                test.1,
                "is_no_op({:?}) = {}",
                test.0,
                test.1,
            );
        }
    }

    #[test]
    fn is_uninflective() {
        let tests = [
            ("sheep", true),
            ("Sheep", true),
            ("swordfish", true),
            ("REINDEER", true),
            ("Iroquois", true),
            ("arthritis", true),
            ("Buddhism", true),
            ("news", true),
            ("NEWS", true),
            ("information", true),
            ("dog", false),
            ("bus", false),
        ];
        for test in tests {
            assert_eq!(
                super::is_uninflective(test.0),
                test.1,
                "is_uninflective({}) = {}",
                test.0,
                test.1,
            );
        }
    }

    #[test]
    fn only_capitalized_ese_words_are_uninflective() {
        assert!(super::is_uninflective("Chinese"));
        assert!(super::is_uninflective("Japanese"));
        assert!(!super::is_uninflective("chinese"));
        assert!(!super::is_uninflective("cheese"));
        // The "ese" itself has to be lower case.
        assert!(!super::is_uninflective("JAPANESE"));
        assert!(super::is_uninflective("Éese"));
    }
}
