use std::sync::OnceLock;

use ipa_seg::{SegmentOptions, Segmenter};

use crate::settings::settings;

/// The IPA-side collaborator: splits raw IPA into segments and classifies
/// the characters inside a segment.
pub trait IpaSegmenter: Send + Sync {
    /// Split one word of IPA text into segments.
    fn segment(&self, word: &str) -> Vec<String>;
    fn is_letter(&self, c: char) -> bool;
    fn is_tie_bar(&self, c: char) -> bool;
    /// Canonicalize a pre-segmented token (Unicode normalization plus known
    /// substitutions).
    fn normalise_token(&self, token: &str) -> String;
}

impl IpaSegmenter for Segmenter {
    fn segment(&self, word: &str) -> Vec<String> {
        self.tokenise(word)
    }

    fn is_letter(&self, c: char) -> bool {
        ipa_seg::is_letter(c)
    }

    fn is_tie_bar(&self, c: char) -> bool {
        ipa_seg::is_tie_bar(c)
    }

    fn normalise_token(&self, token: &str) -> String {
        Segmenter::normalise_token(self, token)
    }
}

/// The segmenter configured by the `[segmenter]` settings section.
pub fn default_segmenter() -> &'static Segmenter {
    static INSTANCE: OnceLock<Segmenter> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let s = &settings().segmenter;
        Segmenter::new(SegmentOptions {
            replace: s.replace,
            tones: s.tones,
            unknown: s.unknown,
        })
    })
}
