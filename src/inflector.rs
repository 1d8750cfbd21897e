//! Provides the [Inflector] trait, which defines the operations every
//! language engine offers.

use crate::error::Result;
use std::borrow::Cow;

/// This trait is implemented by every language engine. A
/// [Pluralizer](crate::pluralizer::Pluralizer) holds a list of these and
/// forwards each call to the one whose [language](Inflector::language)
/// matches the requested tag.
pub trait Inflector: Send + Sync {
    /// The language tag this engine serves, like "en-US".
    fn language(&self) -> &str;

    /// Returns the singular form of the given word. If the word is already
    /// singular it will return the word as given. Whenever possible this
    /// method avoids allocating a new [String](std::string::String).
    fn singularize<'a>(&self, word: &'a str) -> Cow<'a, str>;

    /// Returns the plural form of the given word. If the word is already
    /// plural it will return the word as given. If the word starts with an
    /// upper-case letter, so will the result, so "dog" becomes "dogs" and
    /// "Dog" becomes "Dogs". Whenever possible this method avoids allocating
    /// a new [String](std::string::String).
    fn pluralize<'a>(&self, word: &'a str) -> Cow<'a, str>;

    /// Returns a boolean indicating whether the word is singular. Note that a
    /// word can be *both* singular and plural, like "sheep".
    fn is_singular(&self, word: &str) -> bool;

    /// Returns a boolean indicating whether the word is plural. Note that a
    /// word can be *both* singular and plural, like "sheep".
    fn is_plural(&self, word: &str) -> bool;

    /// Registers a singular/plural pair that wins over every built-in rule
    /// for this engine. Fails if either word is already registered.
    fn register_override(&self, singular: &str, plural: &str) -> Result<()>;
}
