//! The error type shared by every fallible operation in this crate.

use thiserror::Error;

/// A `Result` alias where the error is always [Error].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// An empty string was given where a word or language tag is required.
    #[error("the {name} argument must not be empty")]
    InvalidArgument { name: &'static str },

    /// The singular or the plural is already part of the override registry.
    #[error("cannot register {singular} => {plural}, one of them is already registered")]
    DuplicateEntry { singular: String, plural: String },

    /// No engine is registered for this language tag.
    #[error("there is no inflection engine for the language {0}")]
    UnsupportedLanguage(String),
}

pub(crate) fn ensure_not_empty(value: &str, name: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument { name });
    }
    Ok(())
}
