//! The [Pluralizer] facade, which picks an engine by language tag.
//!
//! # Examples
//!
//! ```
//! use en_pluralize::pluralizer::Pluralizer;
//!
//! let pluralizer = Pluralizer::default();
//! assert_eq!(pluralizer.pluralize("box", "en-US").unwrap(), "boxes");
//! assert!(pluralizer.pluralize("box", "fr-FR").is_err());
//! ```
use crate::{
    english::English,
    error::{self, Error, Result},
    inflector::Inflector,
};
use std::{borrow::Cow, fmt};

/// Forwards each call to the engine registered for the requested language.
pub struct Pluralizer {
    engines: Vec<Box<dyn Inflector>>,
}

/// Collects engines for a [Pluralizer]. Created by [Pluralizer::builder].
#[derive(Default)]
pub struct PluralizerBuilder {
    engines: Vec<Box<dyn Inflector>>,
}

impl PluralizerBuilder {
    /// Adds an engine. When two engines serve the same language, the one
    /// added first is used.
    pub fn engine<I: Inflector + 'static>(mut self, engine: I) -> Self {
        self.engines.push(Box::new(engine));
        self
    }

    /// Returns a [Pluralizer] that serves the added engines.
    pub fn build(self) -> Pluralizer {
        Pluralizer {
            engines: self.engines,
        }
    }
}

impl Default for Pluralizer {
    /// A pluralizer with the English engine registered.
    fn default() -> Self {
        Self::builder().engine(English::new()).build()
    }
}

impl fmt::Debug for Pluralizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pluralizer")
            .field("languages", &self.languages().collect::<Vec<_>>())
            .finish()
    }
}

impl Pluralizer {
    /// Returns a builder with no engines.
    pub fn builder() -> PluralizerBuilder {
        PluralizerBuilder::default()
    }

    /// The language tags of the registered engines, in registration order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.engines.iter().map(|e| e.language())
    }

    /// Returns the engine serving `language`. Tags are compared without
    /// regard to ASCII case, so "en-us" finds the "en-US" engine.
    pub fn engine(&self, language: &str) -> Result<&dyn Inflector> {
        error::ensure_not_empty(language, "language")?;
        match self
            .engines
            .iter()
            .find(|e| e.language().eq_ignore_ascii_case(language))
        {
            Some(engine) => Ok(&**engine),
            None => {
                tracing::debug!(language, "no inflection engine for language");
                Err(Error::UnsupportedLanguage(language.to_string()))
            }
        }
    }

    /// See [Inflector::is_plural].
    pub fn is_plural(&self, word: &str, language: &str) -> Result<bool> {
        error::ensure_not_empty(word, "word")?;
        Ok(self.engine(language)?.is_plural(word))
    }

    /// See [Inflector::is_singular].
    pub fn is_singular(&self, word: &str, language: &str) -> Result<bool> {
        error::ensure_not_empty(word, "word")?;
        Ok(self.engine(language)?.is_singular(word))
    }

    /// See [Inflector::pluralize].
    pub fn pluralize<'a>(&self, word: &'a str, language: &str) -> Result<Cow<'a, str>> {
        error::ensure_not_empty(word, "word")?;
        Ok(self.engine(language)?.pluralize(word))
    }

    /// See [Inflector::singularize].
    pub fn singularize<'a>(&self, word: &'a str, language: &str) -> Result<Cow<'a, str>> {
        error::ensure_not_empty(word, "word")?;
        Ok(self.engine(language)?.singularize(word))
    }

    /// Registers an override with the engine for `language`.
    pub fn register_override(&self, singular: &str, plural: &str, language: &str) -> Result<()> {
        error::ensure_not_empty(singular, "singular")?;
        error::ensure_not_empty(plural, "plural")?;
        self.engine(language)?.register_override(singular, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::Pluralizer;
    use crate::{error::Error, inflector::Inflector};
    use std::borrow::Cow;

    #[test]
    fn forwards_to_the_english_engine() {
        let pluralizer = Pluralizer::default();
        assert_eq!(pluralizer.pluralize("Email", "en-US").unwrap(), "Emails");
        assert_eq!(pluralizer.singularize("buses", "en-US").unwrap(), "bus");
        assert!(pluralizer.is_plural("Fungi", "en-US").unwrap());
        assert!(pluralizer.is_singular("Crisis", "en-us").unwrap());
    }

    #[test]
    fn unknown_languages_are_rejected() {
        let pluralizer = Pluralizer::default();
        assert_eq!(
            pluralizer.pluralize("dog", "de-DE"),
            Err(Error::UnsupportedLanguage("de-DE".to_string())),
        );

        let empty = Pluralizer::builder().build();
        assert!(matches!(
            empty.is_plural("dog", "en-US"),
            Err(Error::UnsupportedLanguage(_)),
        ));
    }

    #[test]
    fn empty_arguments_are_rejected() {
        let pluralizer = Pluralizer::default();
        let tests = [
            (pluralizer.pluralize("", "en-US").map(|_| ()), "word"),
            (pluralizer.singularize("", "en-US").map(|_| ()), "word"),
            (pluralizer.is_plural("", "en-US").map(|_| ()), "word"),
            (pluralizer.is_singular("", "en-US").map(|_| ()), "word"),
            (pluralizer.pluralize("dog", "").map(|_| ()), "language"),
            (pluralizer.register_override("", "dogs", "en-US"), "singular"),
            (pluralizer.register_override("dog", "", "en-US"), "plural"),
        ];
        for test in tests {
            assert_eq!(test.0, Err(Error::InvalidArgument { name: test.1 }));
        }
    }

    #[test]
    fn overrides_stick_to_the_engine() {
        let pluralizer = Pluralizer::default();
        pluralizer
            .register_override("octopus", "octopi", "en-US")
            .unwrap();
        assert_eq!(pluralizer.pluralize("octopus", "en-US").unwrap(), "octopi");
        assert!(matches!(
            pluralizer.register_override("octopus", "octopodes", "en-US"),
            Err(Error::DuplicateEntry { .. }),
        ));
        assert_eq!(pluralizer.pluralize("octopus", "en-US").unwrap(), "octopi");
    }

    struct Shouting;

    impl Inflector for Shouting {
        fn language(&self) -> &str {
            "en-US"
        }

        fn singularize<'a>(&self, word: &'a str) -> Cow<'a, str> {
            Cow::Owned(word.to_uppercase())
        }

        fn pluralize<'a>(&self, word: &'a str) -> Cow<'a, str> {
            Cow::Owned(word.to_uppercase())
        }

        fn is_singular(&self, _: &str) -> bool {
            true
        }

        fn is_plural(&self, _: &str) -> bool {
            true
        }

        fn register_override(&self, _: &str, _: &str) -> crate::error::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn first_registered_engine_wins() {
        let pluralizer = Pluralizer::builder()
            .engine(Shouting)
            .engine(crate::english::English::new())
            .build();
        assert_eq!(pluralizer.pluralize("dog", "en-US").unwrap(), "DOG");
        assert_eq!(pluralizer.languages().collect::<Vec<_>>(), vec!["en-US", "en-US"]);
    }
}
