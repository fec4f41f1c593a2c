use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::policy::PolicyAction;
use crate::lexicon::tables::{
    ACTION_TABLE, DATA_FIELD_TABLE, DIRECT_IDENTIFIER_TABLE, ROLE_TABLE,
};

/// Build the word-boundary pattern for a single surface form.
///
/// Underscores in the form match any run of whitespace or underscores
/// (including none), so "patient_record" matches "patient record",
/// "patient_record", and "patientrecord". Matching is case-insensitive and
/// must respect word boundaries on both ends.
fn surface_form_pattern(form: &str) -> String {
    let flexible = form
        .split('_')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"[\s_]*");
    format!(r"(?i)\b{flexible}\b")
}

/// A single lexicon entry: precompiled matcher plus its canonical tag.
struct LexiconEntry<T> {
    matcher: Regex,
    tag: T,
}

/// An ordered lexicon with one precompiled matcher per surface form.
///
/// Iteration order is the table's declaration order; many surface forms may
/// collapse to one canonical tag.
pub struct Lexicon<T: Copy> {
    entries: Vec<LexiconEntry<T>>,
}

impl<T: Copy + PartialEq> Lexicon<T> {
    /// Compile a lexicon from an ordered surface-form table.
    fn from_table(table: &[(&str, T)]) -> Self {
        let entries = table
            .iter()
            .map(|(form, tag)| LexiconEntry {
                matcher: Regex::new(&surface_form_pattern(form))
                    .unwrap_or_else(|e| panic!("invalid lexicon pattern for '{form}': {e}")),
                tag: *tag,
            })
            .collect();
        Self { entries }
    }

    /// All canonical tags whose surface forms occur in the text, deduplicated,
    /// in first-detected order.
    pub fn scan(&self, text: &str) -> Vec<T> {
        let mut found = Vec::new();
        for entry in &self.entries {
            if entry.matcher.is_match(text) && !found.contains(&entry.tag) {
                found.push(entry.tag);
            }
        }
        found
    }

    /// First canonical tag whose surface form occurs in the text, probing
    /// entries in declaration order.
    pub fn first_match(&self, text: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|entry| entry.matcher.is_match(text))
            .map(|entry| entry.tag)
    }
}

lazy_static! {
    static ref ROLES: Lexicon<&'static str> = Lexicon::from_table(ROLE_TABLE);
    static ref DATA_FIELDS: Lexicon<&'static str> = Lexicon::from_table(DATA_FIELD_TABLE);
    static ref ACTIONS: Lexicon<PolicyAction> = Lexicon::from_table(ACTION_TABLE);
    static ref DIRECT_IDENTIFIERS: Lexicon<&'static str> =
        Lexicon::from_table(DIRECT_IDENTIFIER_TABLE);
}

/// Process-wide role lexicon.
pub fn roles() -> &'static Lexicon<&'static str> {
    &ROLES
}

/// Process-wide data-field lexicon.
pub fn data_fields() -> &'static Lexicon<&'static str> {
    &DATA_FIELDS
}

/// Process-wide action lexicon.
pub fn actions() -> &'static Lexicon<PolicyAction> {
    &ACTIONS
}

/// Process-wide direct-identifier lexicon for the secondary restricted-field pass.
pub fn direct_identifiers() -> &'static Lexicon<&'static str> {
    &DIRECT_IDENTIFIERS
}
