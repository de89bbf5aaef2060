//! IPA → ASJP.

use tracing::{debug, debug_span};

use crate::chart::Chart;
use crate::error::ConvertError;
use crate::segmenter::IpaSegmenter;
use crate::sequence::Sequence;

/// Suffix of a two-letter juxtaposed token.
pub const JUXTA_PAIR: char = '~';
/// Suffix of a three-letter juxtaposed token.
pub const JUXTA_TRIPLE: char = '$';

/// Convert one segmented IPA token into one ASJP token.
///
/// Every letter must have a chart mapping. A tie bar makes the following
/// letter replace the previous symbol with the affricate's symbol when the
/// pair has a chart entry, and juxtapose it otherwise (`k͡p`); a mark
/// that forms a chart key with the letter before it (`n̪`) does the same.
/// Other characters with a chart entry (secondary articulations, `ʼ`,
/// nasalization) are appended; the rest are ignored.
pub fn convert_ipa_token(
    chart: &Chart,
    segmenter: &dyn IpaSegmenter,
    token: &str,
) -> Result<String, ConvertError> {
    let invalid = || ConvertError::InvalidToken(token.to_string());
    let chars: Vec<char> = token.chars().collect();
    let mut output: Vec<char> = Vec::with_capacity(chars.len());

    for (ix, &c) in chars.iter().enumerate() {
        if segmenter.is_letter(c) {
            if ix > 1 && segmenter.is_tie_bar(chars[ix - 1]) {
                let key: String = [chars[ix - 2], c].iter().collect();
                if let Some(symbol) = chart.ipa_symbol(&key) {
                    *output.last_mut().ok_or_else(invalid)? = symbol;
                    continue;
                }
            }
            let mut buf = [0u8; 4];
            output.push(chart.ipa_symbol(c.encode_utf8(&mut buf)).ok_or_else(invalid)?);
            continue;
        }

        if ix > 0 && segmenter.is_letter(chars[ix - 1]) {
            let key: String = [chars[ix - 1], c].iter().collect();
            if let (Some(symbol), Some(last)) = (chart.ipa_symbol(&key), output.last_mut()) {
                *last = symbol;
                continue;
            }
        }

        let mut buf = [0u8; 4];
        if let Some(symbol) = chart.ipa_symbol(c.encode_utf8(&mut buf)) {
            output.push(symbol);
        }
    }

    finalize(chart, output).ok_or_else(invalid)
}

/// Apply the size/suffix rule: `letter`, `letter diacritic`,
/// `letter letter ~` or `letter letter letter $`.
fn finalize(chart: &Chart, output: Vec<char>) -> Option<String> {
    if output.iter().any(|&c| chart.is_diacritic(c)) {
        return match output.as_slice() {
            [letter, mark] if !chart.is_diacritic(*letter) && chart.is_diacritic(*mark) => {
                Some(output.iter().collect())
            }
            _ => None,
        };
    }

    let suffix = match output.len() {
        1 => None,
        2 => Some(JUXTA_PAIR),
        3 => Some(JUXTA_TRIPLE),
        _ => return None,
    };
    Some(output.into_iter().chain(suffix).collect())
}

/// Convert IPA to ASJP.
///
/// Text is split on whitespace; each word is segmented and its tokens are
/// concatenated, words are joined with a single space. Token lists are
/// normalized token by token and converted element-wise.
pub fn ipa2asjp(
    chart: &Chart,
    segmenter: &dyn IpaSegmenter,
    input: Sequence,
) -> Result<Sequence, ConvertError> {
    match input {
        Sequence::Text(text) => {
            let _span = debug_span!("ipa2asjp", len = text.len()).entered();
            let mut words = Vec::new();
            for word in text.split_whitespace() {
                let mut asjp = String::new();
                for token in segmenter.segment(word) {
                    asjp.push_str(&convert_ipa_token(chart, segmenter, &token)?);
                }
                words.push(asjp);
            }
            debug!(words = words.len());
            Ok(Sequence::Text(words.join(" ")))
        }
        Sequence::Tokens(tokens) => {
            let _span = debug_span!("ipa2asjp", tokens = tokens.len()).entered();
            tokens
                .iter()
                .map(|token| {
                    convert_ipa_token(chart, segmenter, &segmenter.normalise_token(token))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Sequence::Tokens)
        }
    }
}
