//! Canonical substitutions for common non-IPA look-alikes.

use unicode_normalization::UnicodeNormalization;

/// `(look-alike, canonical IPA)`. Canonical forms are NFD.
const SUBSTITUTIONS: &[(char, &str)] = &[
    ('g', "ɡ"),
    (':', "ː"),
    ('ǝ', "ə"),
    ('ɚ', "ə˞"),
    ('ɝ', "ɜ˞"),
    ('ʦ', "t\u{0361}s"),
    ('ʣ', "d\u{0361}z"),
    ('ʧ', "t\u{0361}ʃ"),
    ('ʤ', "d\u{0361}ʒ"),
    ('ʨ', "t\u{0361}ɕ"),
    ('ʥ', "d\u{0361}ʑ"),
    ('’', "ʼ"),
    ('\'', "ʼ"),
    ('ʻ', "ʼ"),
    ('ɩ', "ɪ"),
    ('ɷ', "ʊ"),
    ('ʚ', "ɞ"),
    ('ɼ', "r\u{031D}"),
];

/// Canonical replacement for `c`, if it is a known look-alike.
pub fn substitute(c: char) -> Option<&'static str> {
    SUBSTITUTIONS
        .iter()
        .find_map(|&(from, to)| (from == c).then_some(to))
}

/// Replace every known look-alike in `s`.
pub fn replace_substitutes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match substitute(c) {
            Some(to) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}

/// NFD-normalize `s`, optionally applying the substitution table afterwards.
pub fn normalise(s: &str, replace: bool) -> String {
    let decomposed: String = s.nfd().collect();
    if replace {
        replace_substitutes(&decomposed)
    } else {
        decomposed
    }
}
