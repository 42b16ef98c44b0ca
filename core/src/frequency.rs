use crate::tokenizer::{tokenize_with, CharPolicy};
use std::collections::HashMap;

/// Global token counts across a batch of titles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
}

impl FrequencyTable {
    pub fn new() -> Self { Self::default() }

    /// Count for `token`, 0 when it was never seen.
    pub fn get(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn add_tokens<I: IntoIterator<Item = String>>(&mut self, tokens: I) {
        for token in tokens {
            *self.counts.entry(token).or_insert(0) += 1;
        }
    }

    pub fn len(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    /// Sum of all counts, i.e. the number of qualifying tokens in the batch.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// The `n` most frequent tokens, highest count first, ties by token.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}

pub fn build_frequency_table<I, S>(titles: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_frequency_table_with(titles, CharPolicy::Unicode)
}

pub fn build_frequency_table_with<I, S>(titles: I, policy: CharPolicy) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = FrequencyTable::new();
    for title in titles {
        table.add_tokens(tokenize_with(title.as_ref(), policy));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeats_within_and_across_titles() {
        let table = build_frequency_table(["Rust rust", "RUST!"]);
        assert_eq!(table.get("rust"), 3);
        assert_eq!(table.len(), 1);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn absent_and_short_tokens_are_zero() {
        let table = build_frequency_table(["a b c", "ok go"]);
        assert_eq!(table.get("a"), 0);
        assert_eq!(table.get("missing"), 0);
        assert_eq!(table.get("ok"), 1);
        assert!(table.iter().all(|(t, _)| t.chars().count() >= 2));
    }

    #[test]
    fn independent_of_order() {
        let a = build_frequency_table(["one two", "two three"]);
        let b = build_frequency_table(["two three", "one two"]);
        assert_eq!(a, b);
    }

    #[test]
    fn most_common_breaks_ties_by_token() {
        let table = build_frequency_table(["bb aa cc cc"]);
        assert_eq!(table.most_common(2), vec![("cc", 2), ("aa", 1)]);
        assert!(FrequencyTable::new().most_common(3).is_empty());
    }
}
