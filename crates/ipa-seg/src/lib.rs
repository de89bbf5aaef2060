//! IPA segmentation: splits IPA transcriptions into one string per phonetic
//! unit and classifies the characters they are made of.

pub mod chars;
pub mod replace;
mod tokenise;

pub use chars::{is_diacritic, is_letter, is_tie_bar};
pub use replace::normalise;
pub use tokenise::{tokenise, SegmentOptions, Segmenter};
