// Swedish character classification and simple case conversion

// ---------------------------------------------------------------------------
// Swedish phonological constants
// ---------------------------------------------------------------------------

/// Swedish vowels (lowercase): a e i o u y å ä ö, plus the diacritic
/// vowels that occur in established loanwords and names ("idé", "à la",
/// "müsli", "entrecôte", "Müller").
const SWEDISH_VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'y', '\u{00E5}', // å
    '\u{00E4}', // ä
    '\u{00F6}', // ö
    '\u{00E9}', // é
    '\u{00E8}', // è
    '\u{00EA}', // ê
    '\u{00EB}', // ë
    '\u{00E1}', // á
    '\u{00E0}', // à
    '\u{00E2}', // â
    '\u{00ED}', // í
    '\u{00EF}', // ï
    '\u{00F3}', // ó
    '\u{00F4}', // ô
    '\u{00FA}', // ú
    '\u{00FC}', // ü
    '\u{00FB}', // û
    '\u{00F8}', // ø
    '\u{00E6}', // æ
];

// ---------------------------------------------------------------------------
// Letter classification
// ---------------------------------------------------------------------------

/// Check whether a character is a letter in the Latin ranges used by
/// Swedish text, including the Latin-1 supplement and Latin Extended-A
/// letters found in loanwords (š, ž, œ).
pub fn is_letter(c: char) -> bool {
    let cp = c as u32;
    (0x41..=0x5A).contains(&cp)         // A-Z
        || (0x61..=0x7A).contains(&cp)  // a-z
        || (0xC0..=0xD6).contains(&cp)  // À-Ö
        || (0xD8..=0xF6).contains(&cp)  // Ø-ö
        || (0xF8..=0x17F).contains(&cp) // ø through Latin Extended-A
}

/// Check whether a character is a Swedish vowel (case-insensitive).
/// Vowels: a, e, i, o, u, y, å, ä, ö plus extended diacritic vowels.
pub fn is_vowel(c: char) -> bool {
    let lower = simple_lower(c);
    SWEDISH_VOWELS.contains(&lower)
}

/// Check whether a character is a Swedish consonant (case-insensitive).
/// Any letter that is not a vowel counts as a consonant, so that
/// loanword consonants like š and ž are handled without an explicit list.
pub fn is_consonant(c: char) -> bool {
    is_letter(c) && !is_vowel(c)
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// One-to-one case mapping via the standard Unicode tables. The std
// to_lowercase / to_uppercase iterators can expand to multiple characters
// for a few codepoints; the simple mapping takes only the first character.
// The Unicode default tables map å/ä/ö and the extended vowels correctly,
// and no locale-dependent path (such as the Turkish dotless i) is involved.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}
