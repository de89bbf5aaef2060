//! The IPA ⇄ ASJP correspondence chart.
//!
//! Built once from a tab-separated data file into four read-only tables.
//! `Chart::global()` serves the embedded chart (or one installed through
//! `Chart::init_custom`) for the top-level conversion functions; everything
//! else takes a `&Chart` explicitly.

use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;
use unicode_normalization::UnicodeNormalization;

pub const DEFAULT_CHART: &str = include_str!("../data/chart.tsv");

static CUSTOM_CHART: OnceLock<String> = OnceLock::new();

/// Placeholder base used in the data file to display combining marks.
const DOTTED_CIRCLE: char = '\u{25CC}';

const FLAG_CANONICAL: &str = "✓";
const FLAG_DIACRITIC: &str = "+";
const FLAG_JUXTA: &str = "=";

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("chart defines no canonical letters")]
    Empty,
    #[error("chart already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Default)]
pub struct Chart {
    ipa_to_asjp: HashMap<String, char>,
    asjp_letters: HashMap<char, String>,
    asjp_diacritics: HashMap<char, String>,
    asjp_juxta_letters: HashMap<char, String>,
}

enum Flag {
    None,
    Canonical,
    Diacritic,
    Juxta,
}

impl Chart {
    /// Set custom chart text before the first `global()` call.
    pub fn init_custom(content: String) -> Result<(), ChartError> {
        // Validate eagerly
        if Chart::parse(&content).asjp_letters.is_empty() {
            return Err(ChartError::Empty);
        }
        CUSTOM_CHART
            .set(content)
            .map_err(|_| ChartError::AlreadyInitialized)
    }

    /// Get or initialize the global chart.
    pub fn global() -> &'static Chart {
        static INSTANCE: OnceLock<Chart> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let text = CUSTOM_CHART
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_CHART);
            Chart::parse(text)
        })
    }

    /// Read a chart file. Only a missing or unreadable file is an error;
    /// malformed lines are skipped.
    pub fn load(path: &Path) -> Result<Chart, ChartError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Chart::parse(&content))
    }

    /// Parse chart text: `IPA \t ASJP [\t FLAG]` per line, `#` comments.
    pub fn parse(text: &str) -> Chart {
        let mut chart = Chart::default();
        let mut skipped = 0usize;

        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            let Some((ipa, asjp, flag)) = parse_fields(&fields) else {
                debug!(line, "skipping malformed chart line");
                skipped += 1;
                continue;
            };

            chart.ipa_to_asjp.insert(lookup_key(&ipa), asjp);
            match flag {
                Flag::None => {}
                Flag::Canonical => {
                    chart.asjp_letters.insert(asjp, ipa);
                }
                Flag::Diacritic => {
                    chart.asjp_diacritics.insert(asjp, ipa);
                }
                Flag::Juxta => {
                    chart.asjp_juxta_letters.insert(asjp, ipa);
                }
            }
        }

        debug!(
            ipa = chart.ipa_to_asjp.len(),
            letters = chart.asjp_letters.len(),
            diacritics = chart.asjp_diacritics.len(),
            juxta = chart.asjp_juxta_letters.len(),
            skipped,
            "chart loaded"
        );
        chart
    }

    /// ASJP symbol for an IPA key (NFD, tie bars removed).
    pub fn ipa_symbol(&self, key: &str) -> Option<char> {
        self.ipa_to_asjp.get(key).copied()
    }

    /// Canonical IPA for a bare ASJP letter.
    pub fn asjp_letter(&self, letter: char) -> Option<&str> {
        self.asjp_letters.get(&letter).map(String::as_str)
    }

    /// IPA diacritic for an ASJP diacritic suffix.
    pub fn asjp_diacritic(&self, mark: char) -> Option<&str> {
        self.asjp_diacritics.get(&mark).map(String::as_str)
    }

    /// IPA reading of an ASJP letter inside a juxtaposed token.
    pub fn juxta_letter(&self, letter: char) -> Option<&str> {
        self.asjp_juxta_letters.get(&letter).map(String::as_str)
    }

    pub fn is_letter(&self, c: char) -> bool {
        self.asjp_letters.contains_key(&c)
    }

    pub fn is_diacritic(&self, c: char) -> bool {
        self.asjp_diacritics.contains_key(&c)
    }

    /// ASJP letters with a canonical reading, sorted.
    pub fn letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.asjp_letters.keys().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// ASJP diacritic suffixes, sorted.
    pub fn diacritics(&self) -> Vec<char> {
        let mut marks: Vec<char> = self.asjp_diacritics.keys().copied().collect();
        marks.sort_unstable();
        marks
    }

    /// Every `(IPA key, ASJP symbol)` pair used for encoding.
    pub fn ipa_entries(&self) -> impl Iterator<Item = (&str, char)> {
        self.ipa_to_asjp.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Split fields into `(ipa, asjp, flag)`, or `None` for a malformed line.
fn parse_fields(fields: &[&str]) -> Option<(String, char, Flag)> {
    let ipa: String = fields.first()?.chars().filter(|&c| c != DOTTED_CIRCLE).collect();
    if ipa.is_empty() {
        return None;
    }
    let asjp = single_ascii(fields.get(1)?)?;
    let flag = match fields.get(2).map(|f| f.trim()) {
        None | Some("") => Flag::None,
        Some(FLAG_CANONICAL) => Flag::Canonical,
        Some(FLAG_DIACRITIC) => Flag::Diacritic,
        Some(FLAG_JUXTA) => Flag::Juxta,
        Some(_) => return None,
    };
    Some((ipa.nfd().collect(), asjp, flag))
}

fn single_ascii(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_graphic() => Some(c),
        _ => None,
    }
}

/// Encoding key: tie bars are dropped so affricates are keyed by their two
/// letters (`t͡s` → `ts`).
fn lookup_key(ipa: &str) -> String {
    ipa.chars().filter(|&c| !ipa_seg::is_tie_bar(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flags_into_tables() {
        let chart = Chart::parse("a\ta\t✓\nɐ\ta\nʷ\tw\t=\nʼ\t\"\t+\n");
        assert_eq!(chart.ipa_symbol("a"), Some('a'));
        assert_eq!(chart.ipa_symbol("ɐ"), Some('a'));
        assert_eq!(chart.ipa_symbol("ʷ"), Some('w'));
        assert_eq!(chart.asjp_letter('a'), Some("a"));
        assert_eq!(chart.juxta_letter('w'), Some("ʷ"));
        assert_eq!(chart.asjp_diacritic('"'), Some("ʼ"));
        assert!(chart.is_letter('a'));
        assert!(!chart.is_letter('w'));
        assert!(chart.is_diacritic('"'));
    }

    #[test]
    fn parse_skips_comments_and_malformed_lines() {
        let text = "# comment\n\n   \nonlyone\nab\tcd\t✓\nx\tx\t?\n\tq\t✓\nk\tk\t✓\n";
        let chart = Chart::parse(text);
        assert_eq!(chart.letters(), vec!['k']);
        assert_eq!(chart.ipa_entries().count(), 1);
    }

    #[test]
    fn parse_strips_dotted_circle_and_tie_bar() {
        let chart = Chart::parse("\u{25CC}\u{0303}\t*\t+\nt\u{0361}s\tc\t✓\n");
        assert_eq!(chart.ipa_symbol("\u{0303}"), Some('*'));
        assert_eq!(chart.asjp_diacritic('*'), Some("\u{0303}"));
        assert_eq!(chart.ipa_symbol("ts"), Some('c'));
        assert_eq!(chart.asjp_letter('c'), Some("t\u{0361}s"));
    }

    #[test]
    fn parse_normalizes_keys_to_nfd() {
        let chart = Chart::parse("\u{e7}\tx\n");
        assert_eq!(chart.ipa_symbol("c\u{0327}"), Some('x'));
    }

    #[test]
    fn default_chart_is_consistent() {
        let chart = Chart::global();
        assert!(chart.letters().len() > 40);
        assert_eq!(chart.diacritics(), vec!['"', '*']);
        for (ipa, asjp) in chart.ipa_entries() {
            assert!(
                chart.is_letter(asjp) || chart.is_diacritic(asjp),
                "{ipa:?} maps to {asjp:?}, which has no canonical reading"
            );
        }
        for letter in chart.letters() {
            assert!(!chart.is_diacritic(letter));
            assert!(!matches!(letter, '~' | '$'));
        }
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.tsv");
        std::fs::write(&path, "p\tp\t✓\n").unwrap();
        let chart = Chart::load(&path).unwrap();
        assert_eq!(chart.asjp_letter('p'), Some("p"));
    }

    #[test]
    fn load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Chart::load(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, ChartError::Io(_)));
    }

    #[test]
    fn init_custom_rejects_empty_chart() {
        let err = Chart::init_custom("# nothing here\n".to_string()).unwrap_err();
        assert!(matches!(err, ChartError::Empty));
    }
}
