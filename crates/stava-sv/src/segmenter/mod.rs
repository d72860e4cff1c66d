// Recursive boundary search for Swedish compound splitting.
//
// The search is a backtracking scan over boundary positions, not a greedy
// or single-pass parse: Swedish compounding is ambiguous and the correct
// split depends on global minimality, so every valid prefix extension
// spawns an independent continuation. Results for a given suffix are
// memoized by start offset, which keeps the worst case polynomial.

mod selector;

pub use selector::select;

use hashbrown::HashMap;

use stava_core::character::{is_vowel, simple_lower};

use crate::lexicon::Lexicon;

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a word for lookup and segmentation: simple-lowercase every
/// character and remove the first hyphen occurrence.
///
/// Only the first hyphen is removed. This keeps multi-word proper-noun
/// prefixes intact: "Addis Abeba-trogen" normalizes to "addis abebatrogen",
/// where the embedded space is preserved and only the hyphen binding the
/// suffix is elided. Substrings of a normalized word are never
/// re-normalized.
pub fn normalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut hyphen_removed = false;
    for c in word.chars() {
        if c == '-' && !hyphen_removed {
            hyphen_removed = true;
            continue;
        }
        out.push(simple_lower(c));
    }
    out
}

/// Length of the minimal onset of `word`: the shortest leading substring
/// consisting of zero or more consonants followed by exactly one vowel.
/// Every boundary candidate must contain at least one vowel, so no prefix
/// shorter than this can be a morpheme. `None` when the slice has no
/// vowel at all.
fn minimal_onset(word: &[char]) -> Option<usize> {
    word.iter().position(|&c| is_vowel(c)).map(|i| i + 1)
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Options bounding the boundary search.
#[derive(Debug, Clone)]
pub struct SegmenterOptions {
    /// Maximum number of candidate segmentations recorded per suffix.
    /// Natural-language compounds rarely yield more than a handful, but
    /// adversarial input over a large lexicon can; once the cap is
    /// reached, remaining extension lengths for that suffix are skipped
    /// and the best-effort set found so far is used.
    pub max_candidates: usize,
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        Self {
            max_candidates: 256,
        }
    }
}

// ---------------------------------------------------------------------------
// The boundary search
// ---------------------------------------------------------------------------

/// Find every candidate segmentation of an already-normalized word.
///
/// Each candidate is an ordered list of parts where all parts but the
/// last are members of the prefix set and the last is a member of the
/// tail set, with the linking-s and doubled-consonant boundary rules
/// applied. Discovery order is shortest-prefix-first, left to right;
/// the selector relies on this order for its final tie-break.
pub fn split(lexicon: &Lexicon, word: &str, options: &SegmenterOptions) -> Vec<Vec<String>> {
    let chars: Vec<char> = word.chars().collect();
    let mut splitter = Splitter {
        lexicon,
        word: &chars,
        max_candidates: options.max_candidates,
        memo: HashMap::new(),
    };
    splitter.split_from(0, true)
}

struct Splitter<'a> {
    lexicon: &'a Lexicon,
    word: &'a [char],
    max_candidates: usize,
    /// Segmentations per suffix start offset, for non-initial suffixes.
    /// Valid because the boundary rules at non-initial positions depend
    /// only on the suffix itself, not on how it was reached.
    memo: HashMap<usize, Vec<Vec<String>>>,
}

impl Splitter<'_> {
    /// Segment `word[start..]`. `initial` is true only for the whole
    /// word: the linking-s rule never applies after the first part, and
    /// only non-initial suffixes are memoized.
    fn split_from(&mut self, start: usize, initial: bool) -> Vec<Vec<String>> {
        if !initial {
            if let Some(cached) = self.memo.get(&start) {
                return cached.clone();
            }
        }

        let word = self.word;
        let suffix = &word[start..];
        let mut found: Vec<Vec<String>> = Vec::new();

        // A suffix without a vowel cannot start a morpheme; this branch
        // of the search yields nothing (siblings may still succeed).
        if let Some(onset) = minimal_onset(suffix) {
            for len in onset..suffix.len() {
                if found.len() >= self.max_candidates {
                    break;
                }
                let prefix: String = suffix[..len].iter().collect();
                if !self.lexicon.is_prefix(&prefix) {
                    continue;
                }
                let rest = &suffix[len..];

                // (a) Linking-s elision: "korv" + "smacka" -> korv+macka.
                // Never applies between the first part and the rest.
                if !initial && rest.len() > 1 && rest[0] == 's' {
                    let tail: String = rest[1..].iter().collect();
                    if self.lexicon.is_tail(&tail) {
                        found.push(vec![prefix.clone(), tail]);
                    }
                }

                // (b) Direct tail match.
                let rest_str: String = rest.iter().collect();
                if self.lexicon.is_tail(&rest_str) {
                    found.push(vec![prefix.clone(), rest_str]);
                }

                // (c) Doubled-consonant restoration: orthography drops one
                // of three identical consonants at the boundary, so
                // "snabb" + "aka" may really be snabb+baka.
                if len >= 2 && suffix[len - 1] == suffix[len - 2] {
                    let restored: String = std::iter::once(suffix[len - 1])
                        .chain(rest.iter().copied())
                        .collect();
                    if self.lexicon.is_tail(&restored) {
                        found.push(vec![prefix.clone(), restored]);
                    }
                }

                // (d) Recursive continuation, for three-or-more-part
                // compounds. Runs regardless of whether (a)-(c) matched.
                for mut sub in self.split_from(start + len, false) {
                    let mut seg = Vec::with_capacity(sub.len() + 1);
                    seg.push(prefix.clone());
                    seg.append(&mut sub);
                    found.push(seg);
                }
            }
        }

        found.truncate(self.max_candidates);
        if !initial {
            self.memo.insert(start, found.clone());
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{LexEntry, Lexicon};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Lexicon from (form, pos, msd) triples.
    fn lexicon(entries: &[(&str, &str, &str)]) -> Lexicon {
        Lexicon::classify(
            entries
                .iter()
                .map(|&(form, pos, msd)| LexEntry::new(form, pos, msd)),
        )
    }

    fn split_all(lexicon: &Lexicon, word: &str) -> Vec<Vec<String>> {
        split(lexicon, word, &SegmenterOptions::default())
    }

    // -- normalize --

    #[test]
    fn normalize_lowercases_swedish_letters() {
        assert_eq!(normalize("H\u{00D6}GSTADIUM"), "h\u{00F6}gstadium");
        assert_eq!(normalize("Sk\u{00E5}ne"), "sk\u{00E5}ne");
    }

    #[test]
    fn normalize_removes_only_first_hyphen() {
        assert_eq!(normalize("Addis Abeba-trogen"), "addis abebatrogen");
        assert_eq!(normalize("tv\u{00E5}-tre-fyra"), "tv\u{00E5}tre-fyra");
    }

    #[test]
    fn normalize_keeps_embedded_spaces() {
        assert_eq!(normalize("addis abeba"), "addis abeba");
    }

    // -- minimal_onset --

    #[test]
    fn onset_runs_through_the_first_vowel() {
        assert_eq!(minimal_onset(&chars("prins")), Some(3)); // "pri"
        assert_eq!(minimal_onset(&chars("aka")), Some(1)); // "a"
        assert_eq!(minimal_onset(&chars("str\u{00E5}le")), Some(4)); // "strå"
    }

    #[test]
    fn onset_missing_when_no_vowel() {
        assert_eq!(minimal_onset(&chars("krt")), None);
        assert_eq!(minimal_onset(&chars("")), None);
    }

    // -- split --

    #[test]
    fn two_part_direct_match() {
        let lex = lexicon(&[
            ("glas", "nn", "c"),
            ("sk\u{00E5}l", "nn", ""),
        ]);
        let found = split_all(&lex, "glassk\u{00E5}l");
        assert_eq!(found, vec![vec!["glas".to_string(), "sk\u{00E5}l".to_string()]]);
    }

    #[test]
    fn linking_s_is_elided_at_inner_boundaries() {
        let lex = lexicon(&[
            ("prins", "nn", "c"),
            ("korv", "nn", "c"),
            ("macka", "nn", ""),
        ]);
        let found = split_all(&lex, "prinskorvsmacka");
        assert_eq!(
            found,
            vec![vec![
                "prins".to_string(),
                "korv".to_string(),
                "macka".to_string()
            ]]
        );
    }

    #[test]
    fn linking_s_does_not_apply_to_first_boundary() {
        // "s" + tail after the very first part must not be stripped:
        // only "sten"+"hus" parses, never "sten"+("s")"tenhus"-style splits.
        let lex = lexicon(&[("sten", "nn", "c"), ("hus", "nn", "")]);
        let found = split_all(&lex, "stenshus");
        // remainder "shus" is not a tail and "hus" via linking-s is
        // blocked at the initial boundary
        assert!(found.is_empty());
    }

    #[test]
    fn doubled_consonant_is_restored() {
        let lex = lexicon(&[("snabb", "av", "c"), ("baka", "vb", "")]);
        let found = split_all(&lex, "snabbaka");
        assert_eq!(found, vec![vec!["snabb".to_string(), "baka".to_string()]]);
    }

    #[test]
    fn discovery_order_is_shortest_prefix_first() {
        // Both "glas"+"sk\u{00E5}l" (len 4) and "glass"+"k\u{00E5}l" (len 5) parse;
        // the shorter prefix must come first.
        let lex = lexicon(&[
            ("glas", "nn", "c"),
            ("glass", "nn", "c"),
            ("sk\u{00E5}l", "nn", ""),
            ("k\u{00E5}l", "nn", ""),
        ]);
        let found = split_all(&lex, "glassk\u{00E5}l");
        assert_eq!(found.len(), 3);
        assert_eq!(found[0], vec!["glas".to_string(), "sk\u{00E5}l".to_string()]);
        assert_eq!(found[1], vec!["glass".to_string(), "k\u{00E5}l".to_string()]);
        // doubled-consonant restoration of "glass" + "k\u{00E5}l" -> "sk\u{00E5}l"
        assert_eq!(found[2], vec!["glass".to_string(), "sk\u{00E5}l".to_string()]);
    }

    #[test]
    fn consonant_only_remainder_fails_that_branch() {
        let lex = lexicon(&[("vin", "nn", "c")]);
        // remainder "st" has no vowel, so no boundary search can start there
        assert!(split_all(&lex, "vinst").is_empty());
    }

    #[test]
    fn multi_word_place_name_prefix() {
        let mut lex = lexicon(&[("trogen", "av", "")]);
        lex.add_place_names(["Addis Abeba"]);
        let found = split_all(&lex, &normalize("Addis Abeba-trogen"));
        assert_eq!(
            found,
            vec![vec!["addis abeba".to_string(), "trogen".to_string()]]
        );
    }

    #[test]
    fn no_candidates_on_empty_lexicon() {
        let lex = Lexicon::new();
        assert!(split_all(&lex, "prinskorvsmacka").is_empty());
    }

    #[test]
    fn full_word_is_never_its_own_prefix() {
        // Extension stops before the full word length, so a word that is
        // only a prefix form cannot "split" into itself plus nothing.
        let lex = lexicon(&[("kyrko", "nn", "c")]);
        assert!(split_all(&lex, "kyrko").is_empty());
    }

    #[test]
    fn candidate_cap_keeps_earliest_discoveries() {
        let lex = lexicon(&[
            ("glas", "nn", "c"),
            ("glass", "nn", "c"),
            ("sk\u{00E5}l", "nn", ""),
            ("k\u{00E5}l", "nn", ""),
        ]);
        let capped = SegmenterOptions { max_candidates: 1 };
        let found = split(&lex, "glassk\u{00E5}l", &capped);
        // three candidates exist uncapped; the cap keeps the first found
        assert_eq!(found, vec![vec!["glas".to_string(), "sk\u{00E5}l".to_string()]]);
    }
}
