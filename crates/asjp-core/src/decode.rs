//! ASJP → IPA.

use tracing::debug_span;

use crate::chart::Chart;
use crate::encode::{JUXTA_PAIR, JUXTA_TRIPLE};
use crate::error::ConvertError;
use crate::sequence::Sequence;
use crate::tokenize::tokenise;

/// Convert one ASJP token into IPA.
///
/// The trailing character decides the token's shape: a diacritic needs
/// exactly one letter before it, `~` two letters, `$` three. Letters of a
/// juxtaposed token read from the juxtaposition table first.
pub fn convert_asjp_token(chart: &Chart, token: &str) -> Result<String, ConvertError> {
    let invalid = || ConvertError::InvalidToken(token.to_string());
    let chars: Vec<char> = token.chars().collect();

    let (letters, juxtaposed, diacritic) = match chars.as_slice() {
        [] => return Err(invalid()),
        [letter] => {
            return chart
                .asjp_letter(*letter)
                .map(str::to_string)
                .ok_or_else(invalid)
        }
        [rest @ .., last] => {
            let (required, juxtaposed, diacritic) = if let Some(ipa) = chart.asjp_diacritic(*last)
            {
                (2, false, Some(ipa))
            } else if *last == JUXTA_PAIR {
                (3, true, None)
            } else if *last == JUXTA_TRIPLE {
                (4, true, None)
            } else {
                return Err(invalid());
            };
            if chars.len() != required {
                return Err(invalid());
            }
            (rest, juxtaposed, diacritic)
        }
    };

    let mut ipa = String::new();
    for &letter in letters {
        let mapped = juxtaposed
            .then(|| chart.juxta_letter(letter))
            .flatten()
            .or_else(|| chart.asjp_letter(letter))
            .ok_or_else(invalid)?;
        ipa.push_str(mapped);
    }
    if let Some(mark) = diacritic {
        ipa.push_str(mark);
    }
    Ok(ipa)
}

/// Convert ASJP to IPA.
///
/// Text is split on whitespace, each word is tokenized and its decoded
/// tokens concatenated; words are joined with a single space. Token lists
/// are decoded element-wise.
pub fn asjp2ipa(chart: &Chart, input: Sequence) -> Result<Sequence, ConvertError> {
    match input {
        Sequence::Text(text) => {
            let _span = debug_span!("asjp2ipa", len = text.len()).entered();
            let mut words = Vec::new();
            for word in text.split_whitespace() {
                let mut ipa = String::new();
                for token in tokenise(chart, word)? {
                    ipa.push_str(&convert_asjp_token(chart, &token)?);
                }
                words.push(ipa);
            }
            Ok(Sequence::Text(words.join(" ")))
        }
        Sequence::Tokens(tokens) => {
            let _span = debug_span!("asjp2ipa", tokens = tokens.len()).entered();
            tokens
                .iter()
                .map(|token| convert_asjp_token(chart, token))
                .collect::<Result<Vec<_>, _>>()
                .map(Sequence::Tokens)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(asjp: &str) -> Result<String, ConvertError> {
        convert_asjp_token(Chart::global(), asjp)
    }

    #[test]
    fn test_bare_letters() {
        assert_eq!(token("E").unwrap(), "ɛ");
        assert_eq!(token("c").unwrap(), "t\u{0361}s");
        assert_eq!(token("4").unwrap(), "n\u{032A}");
        assert_eq!(token("y").unwrap(), "j");
    }

    #[test]
    fn test_diacritic_suffix() {
        assert_eq!(token("a*").unwrap(), "a\u{0303}");
        assert_eq!(token("k\"").unwrap(), "kʼ");
    }

    #[test]
    fn test_juxtaposed_prefers_juxta_table() {
        assert_eq!(token("my~").unwrap(), "mʲ");
        assert_eq!(token("kw~").unwrap(), "kʷ");
        assert_eq!(token("ndy$").unwrap(), "ⁿdʲ");
    }

    #[test]
    fn test_invalid_shapes() {
        for bad in ["", "~", "*", "ab", "a~", "aa*", "abc~", "ab$", "abcd$", "kw", "K", "a+"] {
            assert!(
                matches!(token(bad), Err(ConvertError::InvalidToken(_))),
                "{bad:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_unmapped_letter_in_juxtaposition() {
        assert!(matches!(token("kK~"), Err(ConvertError::InvalidToken(_))));
    }

    #[test]
    fn test_text() {
        let out = asjp2ipa(Chart::global(), Sequence::Text("zEmy~a  voda".into())).unwrap();
        assert_eq!(out, Sequence::Text("zɛmʲa voda".into()));
    }

    #[test]
    fn test_text_propagates_tokenizer_error() {
        let err = asjp2ipa(Chart::global(), Sequence::Text("voda *a".into())).unwrap_err();
        assert!(matches!(err, ConvertError::InWord { ref word, .. } if word == "*a"));
    }

    #[test]
    fn test_tokens() {
        let input = Sequence::Tokens(vec!["S".into(), "t".into(), "a*".into()]);
        let out = asjp2ipa(Chart::global(), input).unwrap();
        assert_eq!(out, Sequence::Tokens(vec!["ʃ".into(), "t".into(), "a\u{0303}".into()]));
    }
}
