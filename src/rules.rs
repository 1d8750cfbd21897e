//! The ordered rule lists behind `pluralize` and `singularize`.
//!
//! Each list is walked from the top and the first rule that matches decides
//! the result, so the order of the entries matters: a table of irregular
//! words has to come before the generic suffix rule that would otherwise
//! catch its entries.

use crate::{
    lookup::CaselessLookup,
    tables::{self, Tables},
    util,
};
use std::borrow::Cow;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Direction {
    ToPlural,
    ToSingular,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Table {
    IrregularPlurals,
    AssimilatedClassical,
    Classical,
    OSuffix,
    EndingWithSe,
    EndingWithSis,
    EndingWithSus,
    EndingWithInxAnxYnx,
    IrregularVerbs,
}

impl Table {
    fn lookup(self, tables: &Tables) -> &CaselessLookup {
        match self {
            Table::IrregularPlurals => &tables.irregular_plurals,
            Table::AssimilatedClassical => &tables.assimilated_classical,
            Table::Classical => &tables.classical,
            Table::OSuffix => &tables.o_suffix,
            Table::EndingWithSe => &tables.ending_with_se,
            Table::EndingWithSis => &tables.ending_with_sis,
            Table::EndingWithSus => &tables.ending_with_sus,
            Table::EndingWithInxAnxYnx => &tables.ending_with_inx_anx_ynx,
            Table::IrregularVerbs => &tables.irregular_verbs,
        }
    }
}

#[derive(Debug)]
pub(crate) enum Rule {
    /// Swap the whole word for its counterpart in a table.
    Lookup(Table),
    /// Cut `drop` bytes off a word that ends in one of `endings` and append
    /// `append`. A word that also ends in one of `unless` matches but is
    /// returned as is.
    Suffix {
        endings: &'static [&'static str],
        unless: &'static [&'static str],
        drop: usize,
        append: &'static str,
    },
}

const fn suffix(endings: &'static [&'static str], drop: usize, append: &'static str) -> Rule {
    Rule::Suffix {
        endings,
        unless: &[],
        drop,
        append,
    }
}

pub(crate) static PLURAL_RULES: &[Rule] = &[
    Rule::Lookup(Table::IrregularPlurals),
    suffix(&["man"], 2, "en"),
    suffix(&["louse", "mouse"], 4, "ice"),
    suffix(&["tooth"], 4, "eeth"),
    suffix(&["goose"], 4, "eese"),
    suffix(&["foot"], 3, "eet"),
    suffix(&["zoon"], 3, "oa"),
    suffix(&["cis", "sis", "xis"], 2, "es"),
    Rule::Lookup(Table::AssimilatedClassical),
    Rule::Lookup(Table::Classical),
    suffix(&["trix"], 1, "ces"),
    suffix(&["eau", "ieu"], 0, "x"),
    Rule::Lookup(Table::EndingWithInxAnxYnx),
    suffix(&["ch", "sh", "ss"], 0, "es"),
    Rule::Suffix {
        endings: &["alf", "elf", "olf", "eaf", "arf"],
        unless: &["deaf"],
        drop: 1,
        append: "ves",
    },
    suffix(&["nife", "life", "wife"], 2, "ves"),
    suffix(&["ay", "ey", "iy", "oy", "uy"], 0, "s"),
    suffix(&["y"], 1, "ies"),
    Rule::Lookup(Table::OSuffix),
    suffix(&["ao", "eo", "io", "oo", "uo"], 0, "s"),
    suffix(&["o", "s"], 0, "es"),
    suffix(&["x"], 0, "es"),
];

pub(crate) static SINGULAR_RULES: &[Rule] = &[
    Rule::Lookup(Table::IrregularVerbs),
    Rule::Lookup(Table::IrregularPlurals),
    Rule::Lookup(Table::EndingWithSis),
    Rule::Lookup(Table::EndingWithSe),
    Rule::Lookup(Table::EndingWithSus),
    suffix(&["men"], 2, "an"),
    suffix(&["lice", "mice"], 3, "ouse"),
    suffix(&["teeth"], 4, "ooth"),
    suffix(&["geese"], 4, "oose"),
    suffix(&["feet"], 3, "oot"),
    suffix(&["zoa"], 2, "oon"),
    suffix(&["ches", "shes", "sses"], 2, ""),
    Rule::Lookup(Table::AssimilatedClassical),
    Rule::Lookup(Table::Classical),
    suffix(&["trices"], 3, "x"),
    suffix(&["eaux", "ieux"], 1, ""),
    Rule::Lookup(Table::EndingWithInxAnxYnx),
    suffix(&["alves", "elves", "olves", "eaves", "arves"], 3, "f"),
    suffix(&["nives", "lives", "wives"], 3, "fe"),
    suffix(&["ays", "eys", "iys", "oys", "uys"], 1, ""),
    suffix(&["ies"], 3, "y"),
    Rule::Lookup(Table::OSuffix),
    suffix(&["aos", "eos", "ios", "oos", "uos"], 1, ""),
    suffix(&["ces"], 1, ""),
    suffix(&["ses", "xes"], 2, ""),
    suffix(&["oes"], 2, ""),
    suffix(&["ss"], 0, ""),
    suffix(&["s"], 1, ""),
];

impl Rule {
    pub(crate) fn apply<'a>(
        &self,
        word: &'a str,
        direction: Direction,
        tables: &Tables,
    ) -> Option<Cow<'a, str>> {
        match self {
            Rule::Lookup(table) => {
                let lookup = table.lookup(tables);
                let found = match direction {
                    Direction::ToPlural => lookup.second_of(word),
                    Direction::ToSingular => lookup.first_of(word),
                };
                found.map(Cow::Borrowed)
            }
            Rule::Suffix {
                endings,
                unless,
                drop,
                append,
            } => {
                if !util::ends_with_any(word, endings) {
                    return None;
                }
                if util::ends_with_any(word, unless) || (*drop == 0 && append.is_empty()) {
                    return Some(Cow::Borrowed(word));
                }
                // Every ending is ASCII and at least `drop` bytes long, so
                // this always cuts on a char boundary.
                let stem = &word[..word.len() - drop];
                Some(Cow::Owned(format!("{}{}", stem, append)))
            }
        }
    }
}

/// Runs `word` through `rules` and returns the result of the first rule that
/// matches. When nothing matches, plurals get an "s" and singulars are
/// returned unchanged.
pub(crate) fn inflect<'a>(rules: &[Rule], word: &'a str, direction: Direction) -> Cow<'a, str> {
    let tables = &*tables::TABLES;
    for (idx, rule) in rules.iter().enumerate() {
        if let Some(new) = rule.apply(word, direction, tables) {
            tracing::trace!(word, ?direction, rule = idx, ?new, "inflection rule matched");
            return new;
        }
    }

    tracing::trace!(word, ?direction, "no inflection rule matched");
    match direction {
        Direction::ToPlural => Cow::Owned(format!("{}s", word)),
        Direction::ToSingular => Cow::Borrowed(word),
    }
}
