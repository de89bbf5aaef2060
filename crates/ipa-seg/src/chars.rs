//! Character-level classification for IPA text.
//!
//! All predicates expect NFD input: precomposed letters such as `ã` must be
//! decomposed into base letter + combining mark before classification.

/// Combining Diacritical Marks block (U+0300..U+036F).
fn is_combining(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c) || ('\u{1DC0}'..='\u{1DFF}').contains(&c)
}

/// Spacing modifier letters and superscripts used as IPA diacritics.
/// These are alphabetic in Unicode but never start a segment.
fn is_modifier_letter(c: char) -> bool {
    ('\u{02B0}'..='\u{02FF}').contains(&c)
        || ('\u{1D2C}'..='\u{1D6A}').contains(&c)
        || ('\u{1D9B}'..='\u{1DBF}').contains(&c)
        || ('\u{2070}'..='\u{209F}').contains(&c)
        || ('\u{A700}'..='\u{A71F}').contains(&c)
}

/// A base letter: anything alphabetic that is not a modifier letter or a
/// combining mark. Covers Latin, IPA Extensions, the Greek letters IPA
/// borrows (`β θ χ`) and the click letters (`ǃ ǀ ǁ ǂ`).
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !is_modifier_letter(c) && !is_combining(c)
}

/// Ties joining two letters into one segment (`t͡s`, `t͜s`).
pub fn is_tie_bar(c: char) -> bool {
    matches!(c, '\u{0361}' | '\u{035C}')
}

pub fn is_stress(c: char) -> bool {
    matches!(c, 'ˈ' | 'ˌ')
}

pub fn is_length(c: char) -> bool {
    matches!(c, 'ː' | 'ˑ')
}

/// Tone letters (˥ ˦ ˧ ˨ ˩) and the Modifier Tone Letters block.
pub fn is_tone(c: char) -> bool {
    ('\u{02E5}'..='\u{02E9}').contains(&c) || ('\u{A700}'..='\u{A71F}').contains(&c)
}

/// Pre-nasalization marks, written before the consonant they modify.
pub fn is_prenasal(c: char) -> bool {
    matches!(c, 'ⁿ' | 'ᵐ' | 'ᵑ')
}

/// Marks that modify the segment they attach to: combining marks (other than
/// tie bars) and modifier letters (other than stress, length and tone).
pub fn is_diacritic(c: char) -> bool {
    if is_tie_bar(c) || is_stress(c) || is_length(c) || is_tone(c) {
        return false;
    }
    is_combining(c) || is_modifier_letter(c)
}
