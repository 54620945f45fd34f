//! Term filtering over enumerated entries.

use crate::entry::Entry;

/// Return `true` if every term equals one of the entry's identifiers.
///
/// Matching is exact and case-sensitive. Each term is checked on its own, so a
/// repeated term is satisfied by a single field. No terms matches everything.
pub fn matches<S: AsRef<str>>(entry: &Entry, terms: &[S]) -> bool {
    let identifiers = entry.identifiers();
    terms
        .iter()
        .all(|term| identifiers.contains(&term.as_ref()))
}

/// Lazily keep the entries that match all `terms`, in input order.
pub fn filter_iter<'a, I, S>(entries: I, terms: &'a [S]) -> impl Iterator<Item = Entry> + 'a
where
    I: IntoIterator<Item = Entry>,
    I::IntoIter: 'a,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter(move |entry| matches(entry, terms))
}

/// Keep the entries that match all `terms`, in input order.
pub fn filter_entries<S: AsRef<str>>(entries: &[Entry], terms: &[S]) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| matches(entry, terms))
        .cloned()
        .collect()
}
