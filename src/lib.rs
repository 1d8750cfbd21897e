// #![deny(missing_docs)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Classify English words as singular or plural and convert between the two
//! forms.
//!
//! The work is done by an ordered cascade of word tables and suffix rules.
//! Irregular words ("child" and "children", "person" and "people") are
//! looked up first, then Latin and Greek forms ("alumna", "index"), and then
//! generic suffix rules ("wish" to "wishes", "city" to "cities"). The first
//! rule that matches wins. If nothing matches, pluralizing appends an "s"
//! and singularizing strips a trailing "s".
//!
//! Some words are never inflected: anything that is not purely alphabetic,
//! single letters, pronouns and determiners ("they", "something"), and
//! words that are spelled the same in both forms ("sheep", "news").
//!
//! For a phrase, only the last word is inflected, so "project manager"
//! becomes "project managers". A word that starts with an upper-case letter
//! keeps it.
//!
//! # Examples
//!
//! ```
//! assert_eq!(en_pluralize::pluralize("Email"), "Emails");
//! assert_eq!(en_pluralize::pluralize("crisis"), "crises");
//! assert_eq!(en_pluralize::singularize("Fungi"), "Fungus");
//! assert!(en_pluralize::is_plural("buses"));
//! ```
//!
//! Callers that need their own overrides should create an engine, either
//! directly as an [English](english::English) or through a
//! [Pluralizer](pluralizer::Pluralizer), which picks an engine by language
//! tag:
//!
//! ```
//! use en_pluralize::pluralizer::Pluralizer;
//!
//! let pluralizer = Pluralizer::default();
//! pluralizer.register_override("octopus", "octopi", "en-US").unwrap();
//! assert_eq!(pluralizer.pluralize("octopus", "en-US").unwrap(), "octopi");
//! ```

mod classify;
mod rules;
mod tables;
mod util;

pub mod english;
pub mod error;
pub mod inflector;
pub mod lookup;
pub mod pluralizer;

pub use error::{Error, Result};
pub use inflector::Inflector;

use once_cell::sync::Lazy;
use pluralizer::Pluralizer;
use std::borrow::Cow;

static DEFAULT: Lazy<Pluralizer> = Lazy::new(Pluralizer::default);

/// Returns the plural of `word` using a shared "en-US" engine. An empty word
/// is returned as is.
pub fn pluralize(word: &str) -> Cow<'_, str> {
    DEFAULT
        .pluralize(word, english::LANGUAGE)
        .unwrap_or(Cow::Borrowed(word))
}

/// Returns the singular of `word` using a shared "en-US" engine. An empty
/// word is returned as is.
pub fn singularize(word: &str) -> Cow<'_, str> {
    DEFAULT
        .singularize(word, english::LANGUAGE)
        .unwrap_or(Cow::Borrowed(word))
}

/// Returns true if `word` is plural for the shared "en-US" engine.
pub fn is_plural(word: &str) -> bool {
    DEFAULT
        .is_plural(word, english::LANGUAGE)
        .unwrap_or(false)
}

/// Returns true if `word` is singular for the shared "en-US" engine.
pub fn is_singular(word: &str) -> bool {
    DEFAULT
        .is_singular(word, english::LANGUAGE)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    #[test]
    fn shared_engine() {
        let tests = [
            ("Email", "Emails"),
            ("company", "companies"),
            ("Project", "Projects"),
            ("Container", "Containers"),
            ("bus", "buses"),
        ];
        for test in tests {
            assert_eq!(super::pluralize(test.0), test.1);
            assert_eq!(super::singularize(test.1), test.0);
            assert!(super::is_singular(test.0), "{} is singular", test.0);
            assert!(super::is_plural(test.1), "{} is plural", test.1);
        }
    }

    #[test]
    fn empty_words() {
        assert_eq!(super::pluralize(""), "");
        assert_eq!(super::singularize(""), "");
        assert!(!super::is_plural(""));
        assert!(!super::is_singular(""));
    }
}
