// Candidate selection: reduce the set of valid segmentations to one
// deterministic answer.
//
// Two filters, then discovery order decides:
// 1. Fewest parts wins. A less fragmented reading is always preferred.
// 2. Triple-consonant dispreference (after Sjöbergh & Kann): a boundary
//    that would restore three identical consonants in a row is a strong
//    signal the split is wrong ("glass"+"sk\u{00E5}l" for "glassk\u{00E5}l").
//    Disfavored candidates are dropped unless that would drop them all.

/// Select one segmentation from the candidate set, or `None` when the
/// set is empty. Candidates must be in discovery order (shortest prefix
/// first); the first survivor of the filters is returned.
pub fn select(candidates: Vec<Vec<String>>) -> Option<Vec<String>> {
    if candidates.is_empty() {
        return None;
    }

    let min_parts = candidates.iter().map(Vec::len).min()?;
    let minimal: Vec<Vec<String>> = candidates
        .into_iter()
        .filter(|c| c.len() == min_parts)
        .collect();

    if let Some(i) = minimal.iter().position(|c| !restores_triple_consonant(c)) {
        return minimal.into_iter().nth(i);
    }
    // The heuristic alone must never empty the result set.
    minimal.into_iter().next()
}

/// True when some adjacent part boundary would, with the elided
/// consonant restored, produce three identical consonants in a row:
/// the left part ends in a doubled character and the right part starts
/// with that same character.
fn restores_triple_consonant(parts: &[String]) -> bool {
    parts
        .windows(2)
        .any(|pair| boundary_restores_triple(&pair[0], &pair[1]))
}

fn boundary_restores_triple(left: &str, right: &str) -> bool {
    let mut rev = left.chars().rev();
    let (Some(last), Some(second_last)) = (rev.next(), rev.next()) else {
        return false;
    };
    let Some(first) = right.chars().next() else {
        return false;
    };
    last == second_last && last == first
}
