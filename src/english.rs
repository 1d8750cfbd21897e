//! The English inflection engine.
//!
//! # Examples
//!
//! ```
//! use en_pluralize::english::English;
//! use en_pluralize::inflector::Inflector; // Provides the interesting methods
//!
//! let english = English::new();
//! assert_eq!(english.pluralize("dog"), "dogs");
//! assert_eq!(english.singularize("Mice"), "Mouse");
//! assert_eq!(english.pluralize("project manager"), "project managers");
//!
//! assert!(english.is_singular("crisis"));
//! assert!(english.is_plural("crises"));
//!
//! english.register_override("octopus", "octopodes").unwrap();
//! assert_eq!(english.pluralize("octopus"), "octopodes");
//! ```
use crate::{
    classify,
    error::{self, Result},
    inflector::Inflector,
    lookup::BiMap,
    rules::{self, Direction, PLURAL_RULES, SINGULAR_RULES},
    tables::TABLES,
    util,
};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::borrow::Cow;

/// The tag [English] answers to.
pub const LANGUAGE: &str = "en-US";

/// An English engine. The built-in tables are shared by every instance, but
/// each instance has its own override registry.
#[derive(Debug, Default)]
pub struct English {
    overrides: RwLock<BiMap<String, String>>,
}

impl English {
    pub fn new() -> Self {
        Lazy::force(&TABLES);
        Self::default()
    }

    fn override_plural(&self, singular: &str) -> Option<String> {
        self.overrides.read().second_of(singular).cloned()
    }

    fn override_singular(&self, plural: &str) -> Option<String> {
        self.overrides.read().first_of(plural).cloned()
    }

    fn is_override_singular(&self, word: &str) -> bool {
        self.overrides.read().contains_first(word)
    }

    fn is_override_plural(&self, word: &str) -> bool {
        self.overrides.read().contains_second(word)
    }

    fn convert_to_plural<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if let Some(plural) = self.override_plural(word) {
            return Cow::Owned(plural);
        }
        if classify::is_no_op(word) {
            return Cow::Borrowed(word);
        }

        let (prefix, suffix_word) = util::split_suffix_word(word);
        if classify::is_no_op(suffix_word)
            || classify::is_uninflective(suffix_word)
            || TABLES.is_known_plural(&util::lowercase(suffix_word))
            || self.is_plural(suffix_word)
        {
            return Cow::Borrowed(word);
        }

        let new = match self.override_plural(suffix_word) {
            Some(plural) => Cow::Owned(plural),
            None => rules::inflect(PLURAL_RULES, suffix_word, Direction::ToPlural),
        };
        with_prefix(word, prefix, suffix_word, new)
    }

    fn convert_to_singular<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if let Some(singular) = self.override_singular(word) {
            return Cow::Owned(singular);
        }
        if classify::is_no_op(word) {
            return Cow::Borrowed(word);
        }

        let (prefix, suffix_word) = util::split_suffix_word(word);
        if classify::is_no_op(suffix_word)
            || classify::is_uninflective(suffix_word)
            || TABLES.is_known_singular(&util::lowercase(suffix_word))
        {
            return Cow::Borrowed(word);
        }

        let new = match self.override_singular(suffix_word) {
            Some(singular) => Cow::Owned(singular),
            None => rules::inflect(SINGULAR_RULES, suffix_word, Direction::ToSingular),
        };
        with_prefix(word, prefix, suffix_word, new)
    }
}

fn with_prefix<'a>(
    word: &'a str,
    prefix: &str,
    suffix_word: &str,
    new: Cow<'a, str>,
) -> Cow<'a, str> {
    if new == suffix_word {
        return Cow::Borrowed(word);
    }
    if prefix.is_empty() {
        return new;
    }
    Cow::Owned(format!("{}{}", prefix, new))
}

impl Inflector for English {
    fn language(&self) -> &str {
        LANGUAGE
    }

    fn singularize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let new = self.convert_to_singular(word);
        if word != new {
            return util::fix_case(word, new);
        }
        new
    }

    fn pluralize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let new = self.convert_to_plural(word);
        if word != new {
            return util::fix_case(word, new);
        }
        new
    }

    fn is_singular(&self, word: &str) -> bool {
        if self.is_override_singular(word) {
            return true;
        }
        if self.is_override_plural(word) {
            return false;
        }
        if classify::is_uninflective(word) || TABLES.is_known_singular(&util::lowercase(word)) {
            return true;
        }
        !classify::is_no_op(word) && self.singularize(word) == word
    }

    fn is_plural(&self, word: &str) -> bool {
        if self.is_override_plural(word) {
            return true;
        }
        if self.is_override_singular(word) {
            return false;
        }
        if classify::is_uninflective(word) || TABLES.is_known_plural(&util::lowercase(word)) {
            return true;
        }
        self.singularize(word) != word
    }

    fn register_override(&self, singular: &str, plural: &str) -> Result<()> {
        error::ensure_not_empty(singular, "singular")?;
        error::ensure_not_empty(plural, "plural")?;

        // The check and the insert happen under one write lock.
        self.overrides
            .write()
            .try_insert(singular.to_string(), plural.to_string())?;
        tracing::debug!(singular, plural, "registered inflection override");
        Ok(())
    }
}
