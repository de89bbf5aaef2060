//! Conversion between IPA and ASJP transcriptions.
//!
//! The functions at the crate root use the global chart and the default
//! segmenter. `encode`, `decode` and `tokenize` expose the same operations
//! over an explicit `&Chart`.

pub mod api;
pub mod chart;
pub mod decode;
pub mod encode;
mod error;
pub mod segmenter;
mod sequence;
pub mod settings;
#[cfg(test)]
mod tests;
pub mod tokenize;
pub mod trace_init;

pub use chart::{Chart, ChartError};
pub use error::{ConvertError, Symbol};
pub use segmenter::IpaSegmenter;
pub use sequence::Sequence;

use segmenter::default_segmenter;

/// Convert IPA text or IPA tokens to ASJP.
pub fn ipa2asjp(input: Sequence) -> Result<Sequence, ConvertError> {
    encode::ipa2asjp(Chart::global(), default_segmenter(), input)
}

/// Convert ASJP text or ASJP tokens to IPA.
pub fn asjp2ipa(input: Sequence) -> Result<Sequence, ConvertError> {
    decode::asjp2ipa(Chart::global(), input)
}

/// Split an ASJP string into tokens.
pub fn tokenise(text: &str) -> Result<Vec<String>, ConvertError> {
    tokenize::tokenise(Chart::global(), text)
}

/// Alternative spelling of [`tokenise`].
pub fn tokenize(text: &str) -> Result<Vec<String>, ConvertError> {
    tokenise(text)
}
