//! The compiled-in word tables that drive the inflection cascade, plus the
//! lookups derived from them.

use crate::lookup::CaselessLookup;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Nouns whose plural does not follow any suffix rule. These are checked
/// before every suffix rule.
pub(crate) static IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("brother", "brothers"), ("child", "children"), ("cow", "cows"),
    ("ephemeris", "ephemerides"), ("genie", "genies"), ("money", "moneys"),
    ("mongoose", "mongooses"), ("mythos", "mythoi"), ("octopus", "octopuses"), ("ox", "oxen"),
    ("soliloquy", "soliloquies"), ("trilby", "trilbys"), ("crisis", "crises"),
    ("synopsis", "synopses"), ("rose", "roses"), ("gas", "gases"), ("bus", "buses"),
    ("axis", "axes"), ("memo", "memos"), ("casino", "casinos"), ("silo", "silos"),
    ("stereo", "stereos"), ("studio", "studios"), ("lens", "lenses"), ("alias", "aliases"),
    ("pie", "pies"), ("corpus", "corpora"), ("viscus", "viscera"),
    ("hippopotamus", "hippopotami"), ("trace", "traces"), ("person", "people"),
    ("chili", "chilies"), ("analysis", "analyses"), ("basis", "bases"),
    ("neurosis", "neuroses"), ("oasis", "oases"), ("synthesis", "syntheses"),
    ("thesis", "theses"), ("change", "changes"), ("lie", "lies"), ("calorie", "calories"),
    ("freebie", "freebies"), ("case", "cases"), ("house", "houses"), ("valve", "valves"),
    ("cloth", "clothes"), ("tie", "ties"), ("movie", "movies"), ("bonus", "bonuses"),
    ("specimen", "specimens"),
];

/// Latin and Greek nouns whose classical plural is the common one.
pub(crate) static ASSIMILATED_CLASSICAL: &[(&str, &str)] = &[
    ("alumna", "alumnae"), ("alga", "algae"), ("vertebra", "vertebrae"), ("codex", "codices"),
    ("murex", "murices"), ("silex", "silices"), ("aphelion", "aphelia"),
    ("hyperbaton", "hyperbata"), ("perihelion", "perihelia"), ("asyndeton", "asyndeta"),
    ("noumenon", "noumena"), ("phenomenon", "phenomena"), ("criterion", "criteria"),
    ("organon", "organa"), ("prolegomenon", "prolegomena"), ("agendum", "agenda"),
    ("datum", "data"), ("extremum", "extrema"), ("bacterium", "bacteria"),
    ("desideratum", "desiderata"), ("stratum", "strata"), ("candelabrum", "candelabra"),
    ("erratum", "errata"), ("ovum", "ova"), ("forum", "fora"), ("addendum", "addenda"),
    ("stadium", "stadia"), ("automaton", "automata"), ("polyhedron", "polyhedra"),
];

/// Classical plurals, checked after the assimilated ones.
pub(crate) static CLASSICAL: &[(&str, &str)] = &[
    ("stamen", "stamina"), ("foramen", "foramina"), ("lumen", "lumina"),
    ("anathema", "anathemata"), ("enema", "enemata"), ("oedema", "oedemata"),
    ("bema", "bemata"), ("enigma", "enigmata"), ("sarcoma", "sarcomata"),
    ("carcinoma", "carcinomata"), ("gumma", "gummata"), ("schema", "schemata"),
    ("charisma", "charismata"), ("lemma", "lemmata"), ("soma", "somata"),
    ("diploma", "diplomata"), ("lymphoma", "lymphomata"), ("stigma", "stigmata"),
    ("dogma", "dogmata"), ("magma", "magmata"), ("stoma", "stomata"), ("drama", "dramata"),
    ("melisma", "melismata"), ("trauma", "traumata"), ("edema", "edemata"),
    ("miasma", "miasmata"), ("abscissa", "abscissae"), ("formula", "formulae"),
    ("medusa", "medusae"), ("amoeba", "amoebae"), ("hydra", "hydrae"), ("nebula", "nebulae"),
    ("antenna", "antennae"), ("hyperbola", "hyperbolae"), ("nova", "novae"),
    ("aurora", "aurorae"), ("lacuna", "lacunae"), ("parabola", "parabolae"), ("apex", "apices"),
    ("latex", "latices"), ("vertex", "vertices"), ("cortex", "cortices"),
    ("pontifex", "pontifices"), ("vortex", "vortices"), ("index", "indices"),
    ("simplex", "simplices"), ("iris", "irides"), ("clitoris", "clitorides"), ("alto", "alti"),
    ("contralto", "contralti"), ("soprano", "soprani"), ("basso", "bassi"),
    ("crescendo", "crescendi"), ("tempo", "tempi"), ("canto", "canti"), ("solo", "soli"),
    ("aquarium", "aquaria"), ("interregnum", "interregna"), ("quantum", "quanta"),
    ("compendium", "compendia"), ("lustrum", "lustra"), ("rostrum", "rostra"),
    ("consortium", "consortia"), ("maximum", "maxima"), ("spectrum", "spectra"),
    ("cranium", "crania"), ("medium", "media"), ("speculum", "specula"),
    ("curriculum", "curricula"), ("memorandum", "memoranda"), ("stadium", "stadia"),
    ("dictum", "dicta"), ("millenium", "millenia"), ("trapezium", "trapezia"),
    ("emporium", "emporia"), ("minimum", "minima"), ("ultimatum", "ultimata"),
    ("enconium", "enconia"), ("momentum", "momenta"), ("vacuum", "vacua"),
    ("gymnasium", "gymnasia"), ("optimum", "optima"), ("velum", "vela"),
    ("honorarium", "honoraria"), ("phylum", "phyla"), ("focus", "foci"), ("nimbus", "nimbi"),
    ("succubus", "succubi"), ("fungus", "fungi"), ("nucleolus", "nucleoli"), ("torus", "tori"),
    ("genius", "genii"), ("radius", "radii"), ("umbilicus", "umbilici"), ("incubus", "incubi"),
    ("stylus", "styli"), ("uterus", "uteri"), ("stimulus", "stimuli"),
    ("apparatus", "apparatus"), ("impetus", "impetus"), ("prospectus", "prospectus"),
    ("cantus", "cantus"), ("nexus", "nexus"), ("sinus", "sinus"), ("coitus", "coitus"),
    ("plexus", "plexus"), ("status", "status"), ("hiatus", "hiatus"), ("afreet", "afreeti"),
    ("afrit", "afriti"), ("efreet", "efreeti"), ("cherub", "cherubim"), ("goy", "goyim"),
    ("seraph", "seraphim"), ("alumnus", "alumni"),
];

// -o nouns that take a bare "s".
pub(crate) static O_SUFFIX: &[(&str, &str)] = &[
    ("albino", "albinos"), ("generalissimo", "generalissimos"), ("manifesto", "manifestos"),
    ("archipelago", "archipelagos"), ("ghetto", "ghettos"), ("medico", "medicos"),
    ("armadillo", "armadillos"), ("guano", "guanos"), ("octavo", "octavos"),
    ("commando", "commandos"), ("inferno", "infernos"), ("photo", "photos"),
    ("ditto", "dittos"), ("jumbo", "jumbos"), ("pro", "pros"), ("dynamo", "dynamos"),
    ("lingo", "lingos"), ("quarto", "quartos"), ("embryo", "embryos"), ("lumbago", "lumbagos"),
    ("rhino", "rhinos"), ("fiasco", "fiascos"), ("magneto", "magnetos"), ("stylo", "stylos"),
];

/// -se nouns. Only consulted when singularizing, so that "houses" does not
/// lose its "e" to the -ses rule.
pub(crate) static ENDING_WITH_SE: &[(&str, &str)] = &[
    ("house", "houses"), ("case", "cases"), ("enterprise", "enterprises"),
    ("purchase", "purchases"), ("surprise", "surprises"), ("release", "releases"),
    ("disease", "diseases"), ("promise", "promises"), ("refuse", "refuses"),
    ("whose", "whoses"), ("phase", "phases"), ("noise", "noises"), ("nurse", "nurses"),
    ("rose", "roses"), ("franchise", "franchises"), ("supervise", "supervises"),
    ("farmhouse", "farmhouses"), ("suitcase", "suitcases"), ("recourse", "recourses"),
    ("impulse", "impulses"), ("license", "licenses"), ("diocese", "dioceses"),
    ("excise", "excises"), ("demise", "demises"), ("blouse", "blouses"), ("bruise", "bruises"),
    ("misuse", "misuses"), ("curse", "curses"), ("prose", "proses"), ("purse", "purses"),
    ("goose", "gooses"), ("tease", "teases"), ("poise", "poises"), ("vase", "vases"),
    ("fuse", "fuses"), ("muse", "muses"), ("slaughterhouse", "slaughterhouses"),
    ("clearinghouse", "clearinghouses"), ("endonuclease", "endonucleases"),
    ("steeplechase", "steeplechases"), ("metamorphose", "metamorphoses"),
    ("intercourse", "intercourses"), ("commonsense", "commonsenses"),
    ("intersperse", "intersperses"), ("merchandise", "merchandises"),
    ("phosphatase", "phosphatases"), ("summerhouse", "summerhouses"),
    ("watercourse", "watercourses"), ("catchphrase", "catchphrases"),
    ("compromise", "compromises"), ("greenhouse", "greenhouses"), ("lighthouse", "lighthouses"),
    ("paraphrase", "paraphrases"), ("mayonnaise", "mayonnaises"), ("racecourse", "racecourses"),
    ("apocalypse", "apocalypses"), ("courthouse", "courthouses"), ("powerhouse", "powerhouses"),
    ("storehouse", "storehouses"), ("glasshouse", "glasshouses"), ("hypotenuse", "hypotenuses"),
    ("peroxidase", "peroxidases"), ("pillowcase", "pillowcases"), ("roundhouse", "roundhouses"),
    ("streetwise", "streetwises"), ("expertise", "expertises"), ("discourse", "discourses"),
    ("warehouse", "warehouses"), ("staircase", "staircases"), ("workhouse", "workhouses"),
    ("briefcase", "briefcases"), ("clubhouse", "clubhouses"), ("clockwise", "clockwises"),
    ("concourse", "concourses"), ("playhouse", "playhouses"), ("turquoise", "turquoises"),
    ("boathouse", "boathouses"), ("cellulose", "celluloses"), ("epitomise", "epitomises"),
    ("gatehouse", "gatehouses"), ("grandiose", "grandioses"), ("menopause", "menopauses"),
    ("penthouse", "penthouses"), ("racehorse", "racehorses"), ("transpose", "transposes"),
    ("almshouse", "almshouses"), ("customise", "customises"), ("footloose", "footlooses"),
    ("galvanise", "galvanises"), ("princesse", "princesses"), ("universe", "universes"),
    ("workhorse", "workhorses"),
];

pub(crate) static ENDING_WITH_SIS: &[(&str, &str)] = &[
    ("analysis", "analyses"), ("crisis", "crises"), ("basis", "bases"),
    ("atherosclerosis", "atheroscleroses"), ("electrophoresis", "electrophoreses"),
    ("psychoanalysis", "psychoanalyses"), ("photosynthesis", "photosyntheses"),
    ("amniocentesis", "amniocenteses"), ("metamorphosis", "metamorphoses"),
    ("toxoplasmosis", "toxoplasmoses"), ("endometriosis", "endometrioses"),
    ("tuberculosis", "tuberculoses"), ("pathogenesis", "pathogeneses"),
    ("osteoporosis", "osteoporoses"), ("parenthesis", "parentheses"),
    ("anastomosis", "anastomoses"), ("peristalsis", "peristalses"),
    ("hypothesis", "hypotheses"), ("antithesis", "antitheses"), ("apotheosis", "apotheoses"),
    ("thrombosis", "thromboses"), ("diagnosis", "diagnoses"), ("synthesis", "syntheses"),
    ("paralysis", "paralyses"), ("prognosis", "prognoses"), ("cirrhosis", "cirrhoses"),
    ("sclerosis", "scleroses"), ("psychosis", "psychoses"), ("apoptosis", "apoptoses"),
    ("symbiosis", "symbioses"),
];

pub(crate) static ENDING_WITH_SUS: &[(&str, &str)] = &[
    ("consensus", "consensuses"), ("census", "censuses"),
];

pub(crate) static ENDING_WITH_INX_ANX_YNX: &[(&str, &str)] = &[
    ("sphinx", "sphinxes"), ("larynx", "larynges"), ("lynx", "lynxes"),
    ("pharynx", "pharynxes"), ("phalanx", "phalanxes"),
];

pub(crate) static IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "are"), ("are", "are"), ("is", "are"), ("was", "were"), ("were", "were"),
    ("has", "have"), ("have", "have"),
];

/// A word ending in any of these is the same in both forms.
pub(crate) static UNINFLECTIVE_SUFFIXES: &[&str] = &[
    "fish", "ois", "sheep", "deer", "pos", "itis", "ism",
];

pub(crate) static UNINFLECTIVE_WORDS: &[&str] = &[
    "bison", "flounder", "pliers", "bream", "gallows", "proceedings", "breeches", "graffiti",
    "rabies", "britches", "headquarters", "salmon", "carp", "herpes", "scissors", "chassis",
    "high-jinks", "sea-bass", "clippers", "homework", "series", "cod", "innings", "shears",
    "contretemps", "jackanapes", "species", "corps", "mackerel", "swine", "debris", "measles",
    "trout", "diabetes", "mews", "tuna", "djinn", "mumps", "whiting", "eland", "news",
    "wildebeest", "elk", "pincers", "police", "hair", "ice", "chaos", "milk", "cotton",
    "pneumonoultramicroscopicsilicovolcanoconiosis", "information", "aircraft", "scabies",
    "traffic", "corn", "millet", "rice", "hay", "hemp", "tobacco", "cabbage", "okra",
    "broccoli", "asparagus", "lettuce", "beef", "pork", "venison", "mutton", "cattle",
    "offspring", "molasses", "shambles", "shingles",
];

/// Pronouns and determiners are never inflected.
pub(crate) static PRONOUNS: &[&str] = &[
    "i", "we", "you", "he", "she", "they", "it", "me", "us", "him", "her", "them", "myself",
    "ourselves", "yourself", "himself", "herself", "itself", "oneself", "oneselves", "my",
    "our", "your", "his", "their", "its", "mine", "yours", "hers", "theirs", "this", "that",
    "these", "those", "all", "another", "any", "anybody", "anyone", "anything", "both", "each",
    "other", "either", "everyone", "everybody", "everything", "most", "much", "nothing",
    "nobody", "none", "one", "others", "some", "somebody", "someone", "something", "what",
    "whatever", "which", "whichever", "who", "whoever", "whom", "whomever", "whose",
];

/// Table keys that read as plural and must never count as known singulars.
pub(crate) static KNOWN_CONFLICTING_PLURALS: &[&str] = &[
    "they", "them", "their", "have", "were", "yourself", "are",
];

/// Every built-in table as a case-insensitive lookup, plus the sets of
/// words that are known to be singular or plural. Built once and shared by
/// every engine.
#[derive(Debug)]
pub(crate) struct Tables {
    pub(crate) irregular_plurals: CaselessLookup,
    pub(crate) assimilated_classical: CaselessLookup,
    pub(crate) classical: CaselessLookup,
    pub(crate) o_suffix: CaselessLookup,
    pub(crate) ending_with_se: CaselessLookup,
    pub(crate) ending_with_sis: CaselessLookup,
    pub(crate) ending_with_sus: CaselessLookup,
    pub(crate) ending_with_inx_anx_ynx: CaselessLookup,
    pub(crate) irregular_verbs: CaselessLookup,
    known_singular: HashSet<&'static str>,
    known_plural: HashSet<&'static str>,
}

pub(crate) static TABLES: Lazy<Tables> = Lazy::new(Tables::new);

static PRONOUN_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| PRONOUNS.iter().copied().collect());

static UNINFLECTIVE_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| UNINFLECTIVE_WORDS.iter().copied().collect());

impl Tables {
    fn new() -> Self {
        let tables = Self {
            irregular_plurals: CaselessLookup::from_pairs(IRREGULAR_PLURALS),
            assimilated_classical: CaselessLookup::from_pairs(ASSIMILATED_CLASSICAL),
            classical: CaselessLookup::from_pairs(CLASSICAL),
            o_suffix: CaselessLookup::from_pairs(O_SUFFIX),
            ending_with_se: CaselessLookup::from_pairs(ENDING_WITH_SE),
            ending_with_sis: CaselessLookup::from_pairs(ENDING_WITH_SIS),
            ending_with_sus: CaselessLookup::from_pairs(ENDING_WITH_SUS),
            ending_with_inx_anx_ynx: CaselessLookup::from_pairs(ENDING_WITH_INX_ANX_YNX),
            irregular_verbs: CaselessLookup::from_pairs(IRREGULAR_VERBS),
            known_singular: HashSet::new(),
            known_plural: HashSet::new(),
        };

        let known_singular = tables
            .all()
            .iter()
            .copied()
            .flat_map(CaselessLookup::firsts)
            .chain(UNINFLECTIVE_WORDS.iter().copied())
            .filter(|w| !KNOWN_CONFLICTING_PLURALS.contains(w))
            .collect();
        let known_plural = tables
            .all()
            .iter()
            .copied()
            .flat_map(CaselessLookup::seconds)
            .chain(UNINFLECTIVE_WORDS.iter().copied())
            .collect();

        Self {
            known_singular,
            known_plural,
            ..tables
        }
    }

    fn all(&self) -> [&CaselessLookup; 9] {
        [
            &self.irregular_plurals,
            &self.assimilated_classical,
            &self.o_suffix,
            &self.classical,
            &self.irregular_verbs,
            &self.ending_with_se,
            &self.ending_with_sis,
            &self.ending_with_sus,
            &self.ending_with_inx_anx_ynx,
        ]
    }

    /// `lc_word` must already be lower case.
    pub(crate) fn is_known_singular(&self, lc_word: &str) -> bool {
        self.known_singular.contains(lc_word)
    }

    /// `lc_word` must already be lower case.
    pub(crate) fn is_known_plural(&self, lc_word: &str) -> bool {
        self.known_plural.contains(lc_word)
    }
}

pub(crate) fn is_pronoun(lc_word: &str) -> bool {
    PRONOUN_SET.contains(lc_word)
}

pub(crate) fn is_uninflective_word(lc_word: &str) -> bool {
    UNINFLECTIVE_WORD_SET.contains(lc_word)
}
