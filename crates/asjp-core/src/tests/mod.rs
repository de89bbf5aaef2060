
use crate::Sequence;

pub(super) fn text(seq: Sequence) -> String {
    match seq {
        Sequence::Text(s) => s,
        other => panic!("expected text, got {other:?}"),
    }
}

pub(super) fn tokens(seq: Sequence) -> Vec<String> {
    match seq {
        Sequence::Tokens(t) => t,
        other => panic!("expected tokens, got {other:?}"),
    }
}
