use std::fmt;

/// Errors raised while converting between IPA and ASJP.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("expected {expected}, found {found}")]
    Type {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid token: {0:?}")]
    InvalidToken(String),

    #[error("unknown symbol: {0}")]
    UnknownSymbol(Symbol),

    #[error("juxtaposition marker without enough letters to merge: {0}")]
    AmbiguousMarker(Symbol),

    #[error("modifier at the start of a word: {0}")]
    WordInitialModifier(Symbol),

    #[error("in word {word:?}: {source}")]
    InWord {
        word: String,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    /// The innermost error, looking through `InWord` annotations.
    pub fn root(&self) -> &ConvertError {
        match self {
            ConvertError::InWord { source, .. } => source.root(),
            other => other,
        }
    }
}

/// An offending character together with its Unicode name, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub ch: char,
    pub name: String,
}

impl Symbol {
    pub fn new(ch: char) -> Self {
        let name = unicode_names2::name(ch)
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("U+{:04X}", ch as u32));
        Self { ch, name }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self.ch, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_carries_unicode_name() {
        let s = Symbol::new('~');
        assert_eq!(s.name, "TILDE");
        assert_eq!(s.to_string(), "'~' (TILDE)");
    }

    #[test]
    fn in_word_display_and_root() {
        let err = ConvertError::InWord {
            word: "a~".to_string(),
            source: Box::new(ConvertError::AmbiguousMarker(Symbol::new('~'))),
        };
        assert!(err.to_string().starts_with("in word \"a~\""));
        assert!(matches!(err.root(), ConvertError::AmbiguousMarker(_)));
    }
}
