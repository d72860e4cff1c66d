// Lexicon classifier: turns SALDO-style lexical entries into the two
// word-form sets the segmenter searches over.
//
// The segmenter itself only depends on the two finished sets; everything
// in this module is data preparation. The tag vocabulary follows the
// SALDO morphology export: part-of-speech tags like "nn"/"av"/"vb" and
// compounding-role tags like "c"/"ci"/"cm"/"sms" on individual word forms.

use hashbrown::HashSet;

use crate::segmenter::normalize;

// ---------------------------------------------------------------------------
// Morphosyntactic descriptors
// ---------------------------------------------------------------------------

/// SALDO-style part-of-speech classification of a lexical entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// Common noun ("nn").
    Noun,
    /// Adjective ("av").
    Adjective,
    /// Verb ("vb").
    Verb,
    /// Adverb ("ab").
    Adverb,
    /// Numeral, cardinal or ordinal ("nl").
    Numeral,
    /// Proper noun ("pm").
    ProperNoun,
    /// Pronoun ("pn").
    Pronoun,
    /// Preposition ("pp").
    Preposition,
    /// Conjunction ("kn").
    Conjunction,
    /// Interjection ("in").
    Interjection,
    /// Any other tag (abbreviations, particles, ...).
    Other,
}

impl PartOfSpeech {
    /// Parse a SALDO part-of-speech tag. Unknown tags map to `Other`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "nn" => PartOfSpeech::Noun,
            "av" => PartOfSpeech::Adjective,
            "vb" => PartOfSpeech::Verb,
            "ab" => PartOfSpeech::Adverb,
            "nl" => PartOfSpeech::Numeral,
            "pm" => PartOfSpeech::ProperNoun,
            "pn" => PartOfSpeech::Pronoun,
            "pp" => PartOfSpeech::Preposition,
            "kn" => PartOfSpeech::Conjunction,
            "in" => PartOfSpeech::Interjection,
            _ => PartOfSpeech::Other,
        }
    }
}

/// Compounding role of one written form, from the form-level msd tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompoundRole {
    /// Compound-initial form ("c" or "ci"), e.g. "kyrko" of "kyrka".
    Initial,
    /// Compound-medial form ("cm").
    Medial,
    /// Sammansättningsform ("sms"), a stem used in compounds.
    CompoundStem,
    /// A full standalone form (base form or inflection).
    Full,
}

impl CompoundRole {
    /// Parse a form-level msd tag. Tags that are not compounding-role
    /// markers (case/number/definiteness codes, or empty) mean the form
    /// is a full standalone form.
    pub fn parse(msd: &str) -> Self {
        match msd {
            "c" | "ci" => CompoundRole::Initial,
            "cm" => CompoundRole::Medial,
            "sms" => CompoundRole::CompoundStem,
            _ => CompoundRole::Full,
        }
    }

    /// Whether this form exists only as a compound constituent and may
    /// not stand alone or end a compound.
    pub fn is_compound_only(self) -> bool {
        !matches!(self, CompoundRole::Full)
    }
}

/// One written surface form of a lexical entry, together with its
/// morphosyntactic descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexEntry {
    pub form: String,
    pub pos: PartOfSpeech,
    pub role: CompoundRole,
}

impl LexEntry {
    /// Create an entry from a written form and its raw SALDO tags.
    pub fn new(form: impl Into<String>, pos_tag: &str, msd_tag: &str) -> Self {
        Self {
            form: form.into(),
            pos: PartOfSpeech::parse(pos_tag),
            role: CompoundRole::parse(msd_tag),
        }
    }
}

// ---------------------------------------------------------------------------
// The two word-form sets
// ---------------------------------------------------------------------------

/// The two normalized word-form sets the segmenter searches over.
///
/// - `prefixes`: forms licensed to open or continue a compound before
///   its final element.
/// - `tails`: forms licensed to end a compound or stand alone.
///
/// The sets are not disjoint: a noun with both full and compound forms
/// contributes to both. Immutable in practice after construction and
/// safe to share (`&Lexicon`) across any number of concurrent
/// segmentation calls.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    prefixes: HashSet<String>,
    tails: HashSet<String>,
}

impl Lexicon {
    /// Create an empty lexicon. Valid but useless: every non-trivial
    /// input fails to decompose.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify lexical entries into the two sets.
    ///
    /// - Forms with a compounding role (c/ci/cm/sms) go to the prefix set.
    /// - Full forms of numerals (cardinals and ordinals share the "nl"
    ///   class) and proper nouns go to the prefix set as well; these
    ///   closed classes open compounds without a dedicated compound form
    ///   ("tre", "Addis Abeba").
    /// - Every full form goes to the tail set; compound-only forms do not.
    ///
    /// All forms are normalized on insertion, so membership tests expect
    /// already-normalized input.
    pub fn classify(entries: impl IntoIterator<Item = LexEntry>) -> Self {
        let mut lexicon = Self::new();
        for entry in entries {
            lexicon.insert(&entry);
        }
        lexicon
    }

    /// Insert a single classified entry.
    pub fn insert(&mut self, entry: &LexEntry) {
        let form = normalize(&entry.form);
        if form.is_empty() {
            return;
        }
        if entry.role.is_compound_only() {
            self.prefixes.insert(form);
            return;
        }
        if matches!(entry.pos, PartOfSpeech::Numeral | PartOfSpeech::ProperNoun) {
            self.prefixes.insert(form.clone());
        }
        self.tails.insert(form);
    }

    /// Merge a supplementary list of place-name/territory strings into
    /// the prefix set. Multi-word names keep their embedded spaces.
    pub fn add_place_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let form = normalize(name.as_ref());
            if !form.is_empty() {
                self.prefixes.insert(form);
            }
        }
    }

    /// Membership test against the prefix set. The input must already
    /// be normalized.
    pub fn is_prefix(&self, form: &str) -> bool {
        self.prefixes.contains(form)
    }

    /// Membership test against the tail set. The input must already
    /// be normalized.
    pub fn is_tail(&self, form: &str) -> bool {
        self.tails.contains(form)
    }

    /// Number of distinct prefix forms.
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    /// Number of distinct tail forms.
    pub fn tail_count(&self) -> usize {
        self.tails.len()
    }
}
