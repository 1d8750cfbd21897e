//! Two-way exact-match tables.
//!
//! [BiMap] indexes a set of `(first, second)` pairs in both directions. The
//! override registry uses it with strict insertion, while the built-in word
//! tables are loaded with [BiMap::from_pairs], where the first pair seen for
//! a given value wins. [CaselessLookup] wraps a `BiMap` of static strings and
//! matches lookups without regard to case.

use crate::{
    error::{Error, Result},
    util,
};
use std::{borrow::Borrow, collections::HashMap, fmt::Display, hash::Hash};

#[derive(Debug, Clone)]
pub struct BiMap<A, B> {
    forward: HashMap<A, B>,
    backward: HashMap<B, A>,
}

impl<A, B> Default for BiMap<A, B> {
    fn default() -> Self {
        Self {
            forward: HashMap::new(),
            backward: HashMap::new(),
        }
    }
}

impl<A, B> BiMap<A, B>
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from a list of pairs. When a first value repeats, the
    /// earlier pair is kept. When a second value repeats, the forward
    /// mapping is still added but the reverse lookup keeps pointing at the
    /// first value it was seen with.
    pub fn from_pairs<I: IntoIterator<Item = (A, B)>>(pairs: I) -> Self {
        let mut map = Self::new();
        for (a, b) in pairs {
            if map.forward.contains_key(&a) {
                continue;
            }
            map.forward.insert(a.clone(), b.clone());
            map.backward.entry(b).or_insert(a);
        }
        map
    }

    /// Adds a pair, refusing it if `a` is already a first value or `b` is
    /// already a second value. The map is unchanged on error.
    pub fn try_insert(&mut self, a: A, b: B) -> Result<()>
    where
        A: Display,
        B: Display,
    {
        if self.forward.contains_key(&a) || self.backward.contains_key(&b) {
            return Err(Error::DuplicateEntry {
                singular: a.to_string(),
                plural: b.to_string(),
            });
        }
        self.forward.insert(a.clone(), b.clone());
        self.backward.insert(b, a);
        Ok(())
    }

    pub fn contains_first<Q>(&self, a: &Q) -> bool
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.contains_key(a)
    }

    pub fn contains_second<Q>(&self, b: &Q) -> bool
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backward.contains_key(b)
    }

    /// Returns the first value paired with `b`.
    pub fn first_of<Q>(&self, b: &Q) -> Option<&A>
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backward.get(b)
    }

    /// Returns the second value paired with `a`.
    pub fn second_of<Q>(&self, a: &Q) -> Option<&B>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(a)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn firsts(&self) -> impl Iterator<Item = &A> {
        self.forward.keys()
    }

    pub fn seconds(&self) -> impl Iterator<Item = &B> {
        self.forward.values()
    }
}

/// A case-insensitive two-way table over static word pairs. The pairs are
/// stored exactly as given; only the lookup keys are folded to lower case.
#[derive(Debug)]
pub struct CaselessLookup {
    pairs: BiMap<&'static str, &'static str>,
    folded_firsts: HashMap<String, &'static str>,
    folded_seconds: HashMap<String, &'static str>,
}

impl CaselessLookup {
    pub fn from_pairs(pairs: &'static [(&'static str, &'static str)]) -> Self {
        let pairs = BiMap::from_pairs(pairs.iter().copied());
        let mut folded_firsts = HashMap::new();
        for a in pairs.firsts() {
            folded_firsts.entry(a.to_lowercase()).or_insert(*a);
        }
        let mut folded_seconds = HashMap::new();
        for (b, _) in pairs.backward.iter() {
            folded_seconds.entry(b.to_lowercase()).or_insert(*b);
        }
        Self {
            pairs,
            folded_firsts,
            folded_seconds,
        }
    }

    pub fn contains_first(&self, word: &str) -> bool {
        self.folded_firsts.contains_key(&*util::lowercase(word))
    }

    pub fn contains_second(&self, word: &str) -> bool {
        self.folded_seconds.contains_key(&*util::lowercase(word))
    }

    pub fn first_of(&self, word: &str) -> Option<&'static str> {
        let stored = self.folded_seconds.get(&*util::lowercase(word))?;
        self.pairs.first_of(stored).copied()
    }

    pub fn second_of(&self, word: &str) -> Option<&'static str> {
        let stored = self.folded_firsts.get(&*util::lowercase(word))?;
        self.pairs.second_of(stored).copied()
    }

    pub fn firsts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.firsts().copied()
    }

    pub fn seconds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.seconds().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{BiMap, CaselessLookup};
    use crate::error::Error;

    #[test]
    fn try_insert_rejects_either_side() {
        let mut map: BiMap<String, String> = BiMap::new();
        map.try_insert("octopus".to_string(), "octopi".to_string())
            .unwrap();

        let err = map
            .try_insert("octopus".to_string(), "octopodes".to_string())
            .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateEntry {
                singular: "octopus".to_string(),
                plural: "octopodes".to_string(),
            }
        );

        assert!(map
            .try_insert("octopode".to_string(), "octopi".to_string())
            .is_err());

        assert_eq!(map.len(), 1);
        assert_eq!(map.second_of("octopus").map(String::as_str), Some("octopi"));
        assert_eq!(map.first_of("octopi").map(String::as_str), Some("octopus"));
        assert!(!map.contains_first("octopode"));
    }

    #[test]
    fn try_insert_is_case_sensitive() {
        let mut map: BiMap<String, String> = BiMap::new();
        map.try_insert("cactus".to_string(), "cacti".to_string())
            .unwrap();
        map.try_insert("Cactus".to_string(), "Cacti".to_string())
            .unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn from_pairs_keeps_first_reverse_mapping() {
        let map = BiMap::from_pairs(vec![("am", "are"), ("are", "are"), ("is", "are")]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.second_of("is"), Some(&"are"));
        assert_eq!(map.first_of("are"), Some(&"am"));
    }

    #[test]
    fn from_pairs_keeps_first_forward_mapping() {
        let map = BiMap::from_pairs(vec![("stadium", "stadia"), ("stadium", "stadiums")]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.second_of("stadium"), Some(&"stadia"));
        assert!(!map.contains_second("stadiums"));
    }

    static PAIRS: &[(&str, &str)] = &[("was", "were"), ("were", "were"), ("Goy", "Goyim")];

    #[test]
    fn caseless_lookup() {
        let lookup = CaselessLookup::from_pairs(PAIRS);

        assert!(lookup.contains_first("WAS"));
        assert!(lookup.contains_second("Were"));
        assert_eq!(lookup.first_of("WERE"), Some("was"));
        assert_eq!(lookup.second_of("goy"), Some("Goyim"));
        assert_eq!(lookup.first_of("goyim"), Some("Goy"));
        assert_eq!(lookup.second_of("goyim"), None);
        assert!(!lookup.contains_first("is"));
    }
}
