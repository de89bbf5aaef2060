use crate::chars::{
    is_diacritic, is_length, is_letter, is_prenasal, is_stress, is_tie_bar, is_tone,
};
use crate::replace::normalise;

/// Knobs for [`Segmenter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Substitute common non-IPA look-alikes before segmenting.
    pub replace: bool,
    /// Keep tone letters attached to the preceding segment.
    pub tones: bool,
    /// Emit characters outside the IPA as standalone segments instead of
    /// dropping them.
    pub unknown: bool,
}

/// Splits IPA text into segments, one per phonetic unit.
///
/// A letter opens a new segment; a tie bar pulls the following letter into
/// the open segment (`t͡s`); diacritics and length marks attach to the open
/// segment; pre-nasal marks attach forward to the letter they precede.
/// Stress marks, syllable dots and whitespace close the open segment and are
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    options: SegmentOptions,
}

impl Segmenter {
    pub fn new(options: SegmentOptions) -> Self {
        Self { options }
    }

    /// NFD-normalize a single pre-segmented token, applying substitutions if
    /// the segmenter was configured with `replace`.
    pub fn normalise_token(&self, token: &str) -> String {
        normalise(token, self.options.replace)
    }

    pub fn tokenise(&self, text: &str) -> Vec<String> {
        let text = normalise(text, self.options.replace);
        let chars: Vec<char> = text.chars().collect();

        let mut segments: Vec<String> = Vec::new();
        // Whether the last segment still accepts marks.
        let mut open = false;
        let mut joining = false;
        let mut prefix = String::new();

        for (ix, &c) in chars.iter().enumerate() {
            let after_tie = joining;
            joining = false;

            if is_letter(c) {
                match segments.last_mut() {
                    Some(last) if open && after_tie => last.push(c),
                    _ => {
                        let mut segment = std::mem::take(&mut prefix);
                        segment.push(c);
                        segments.push(segment);
                    }
                }
                open = true;
            } else if is_tie_bar(c) {
                if let (true, Some(last)) = (open, segments.last_mut()) {
                    last.push(c);
                    joining = true;
                }
            } else if is_prenasal(c) && chars.get(ix + 1).is_some_and(|&next| is_letter(next)) {
                prefix.push(c);
            } else if is_diacritic(c) || is_length(c) {
                match segments.last_mut() {
                    Some(last) if open => last.push(c),
                    _ if self.options.unknown => segments.push(c.to_string()),
                    _ => {}
                }
            } else if is_tone(c) {
                if let (true, true, Some(last)) = (self.options.tones, open, segments.last_mut()) {
                    last.push(c);
                }
            } else if is_stress(c) || c == '.' || c.is_whitespace() {
                open = false;
            } else if self.options.unknown {
                segments.push(c.to_string());
                open = false;
            }
        }

        segments
    }
}

/// Segment `text` with the given options.
pub fn tokenise(text: &str, options: SegmentOptions) -> Vec<String> {
    Segmenter::new(options).tokenise(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str) -> Vec<String> {
        tokenise(
            text,
            SegmentOptions {
                replace: true,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_plain_letters() {
        assert_eq!(seg("vɔda"), vec!["v", "ɔ", "d", "a"]);
    }

    #[test]
    fn test_empty() {
        assert!(seg("").is_empty());
        assert!(seg("ˈ").is_empty());
    }

    #[test]
    fn test_tie_bar_joins_affricate() {
        assert_eq!(seg("sɫɤnt͡sɛ"), vec!["s", "ɫ", "ɤ", "n", "t\u{0361}s", "ɛ"]);
    }

    #[test]
    fn test_diacritics_attach() {
        assert_eq!(seg("zɛmʲa"), vec!["z", "ɛ", "mʲ", "a"]);
        assert_eq!(seg("kʼa"), vec!["kʼ", "a"]);
        assert_eq!(seg("\u{e3}"), vec!["a\u{0303}"]);
        assert_eq!(seg("ʃtaɪ̯n"), vec!["ʃ", "t", "a", "ɪ\u{032F}", "n"]);
    }

    #[test]
    fn test_length_attaches_stress_dropped() {
        assert_eq!(seg("ˈwɔːtə"), vec!["w", "ɔː", "t", "ə"]);
    }

    #[test]
    fn test_prenasal_attaches_forward() {
        assert_eq!(seg("ⁿdʲa"), vec!["ⁿdʲ", "a"]);
        assert_eq!(seg("aⁿda"), vec!["a", "ⁿd", "a"]);
    }

    #[test]
    fn test_replace() {
        assert_eq!(seg("ga:"), vec!["ɡ", "aː"]);
        let raw = tokenise("ga", SegmentOptions::default());
        assert_eq!(raw, vec!["g", "a"]);
    }

    #[test]
    fn test_unknown_and_tones() {
        let opts = SegmentOptions {
            tones: true,
            unknown: true,
            ..Default::default()
        };
        assert_eq!(tokenise("ma˥5", opts), vec!["m", "a˥", "5"]);
        assert_eq!(seg("ma˥5"), vec!["m", "a"]);
    }

    #[test]
    fn test_whitespace_separates() {
        assert_eq!(seg("a b"), vec!["a", "b"]);
    }
}
