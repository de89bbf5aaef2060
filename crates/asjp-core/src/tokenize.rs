//! ASJP tokenization.
//!
//! Re-segments an ASJP string into the tokens the encoder produced. Letters
//! are pushed as they come; a diacritic extends the top token; `~` and `$`
//! fold the top two or three tokens back into one token. One pass, no
//! backtracking.

use tracing::{debug, debug_span};

use crate::chart::Chart;
use crate::encode::{JUXTA_PAIR, JUXTA_TRIPLE};
use crate::error::{ConvertError, Symbol};

/// Completed tokens of the word being scanned.
#[derive(Debug, Default)]
struct TokenStack {
    tokens: Vec<String>,
}

impl TokenStack {
    fn push_letter(&mut self, letter: char) {
        self.tokens.push(letter.to_string());
    }

    /// Append a diacritic to the top token.
    fn modify_top(&mut self, mark: char) -> Result<(), ConvertError> {
        let top = self.tokens.len().checked_sub(1);
        match top {
            Some(ix) => {
                self.tokens[ix].push(mark);
                Ok(())
            }
            None => Err(ConvertError::WordInitialModifier(Symbol::new(mark))),
        }
    }

    /// Replace the top `count` tokens with their concatenation plus `marker`.
    /// The merged token is not validated here; the decoder rejects
    /// malformed shapes.
    fn merge_top(&mut self, count: usize, marker: char) -> Result<(), ConvertError> {
        let start = self
            .tokens
            .len()
            .checked_sub(count)
            .ok_or_else(|| ConvertError::AmbiguousMarker(Symbol::new(marker)))?;

        let mut merged: String = self.tokens.drain(start..).collect();
        merged.push(marker);
        self.tokens.push(merged);
        Ok(())
    }

    fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

/// Tokenize a single word (no whitespace).
fn tokenise_word(chart: &Chart, word: &str) -> Result<Vec<String>, ConvertError> {
    let mut stack = TokenStack::default();

    for c in word.chars() {
        if c == JUXTA_PAIR {
            stack.merge_top(2, c)?;
        } else if c == JUXTA_TRIPLE {
            stack.merge_top(3, c)?;
        } else if chart.is_diacritic(c) {
            stack.modify_top(c)?;
        } else if chart.is_letter(c) {
            stack.push_letter(c);
        } else {
            return Err(ConvertError::UnknownSymbol(Symbol::new(c)));
        }
    }

    Ok(stack.into_tokens())
}

/// Split an ASJP string into tokens. Words are separated by whitespace; an
/// error inside a word is reported together with that word.
pub fn tokenise(chart: &Chart, text: &str) -> Result<Vec<String>, ConvertError> {
    let _span = debug_span!("tokenise", len = text.len()).entered();
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        let word_tokens = tokenise_word(chart, word).map_err(|e| ConvertError::InWord {
            word: word.to_string(),
            source: Box::new(e),
        })?;
        tokens.extend(word_tokens);
    }
    debug!(tokens = tokens.len());
    Ok(tokens)
}

/// Alternative spelling of [`tokenise`].
pub fn tokenize(chart: &Chart, text: &str) -> Result<Vec<String>, ConvertError> {
    tokenise(chart, text)
}
