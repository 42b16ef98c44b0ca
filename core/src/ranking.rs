use crate::frequency::{build_frequency_table_with, FrequencyTable};
use crate::tokenizer::{tokenize_with, CharPolicy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredTitle {
    pub title: String,
    pub weight: u64,
}

/// Scored titles, heaviest first; equal weights keep input order.
pub type RankedList = Vec<ScoredTitle>;

pub fn score(title: &str, table: &FrequencyTable) -> u64 {
    score_with(title, table, CharPolicy::Unicode)
}

/// Sum of the global count of every token in `title`, repeats included.
pub fn score_with(title: &str, table: &FrequencyTable, policy: CharPolicy) -> u64 {
    tokenize_with(title, policy)
        .iter()
        .map(|token| table.get(token) as u64)
        .sum()
}

/// Weights for every title in input order, without sorting.
pub fn weigh<S: AsRef<str>>(titles: &[S], table: &FrequencyTable, policy: CharPolicy) -> Vec<ScoredTitle> {
    titles
        .iter()
        .map(|t| {
            let title = t.as_ref();
            ScoredTitle { title: title.to_string(), weight: score_with(title, table, policy) }
        })
        .collect()
}

pub fn rank<S: AsRef<str>>(titles: &[S]) -> RankedList {
    rank_with(titles, CharPolicy::Unicode)
}

/// Build the table over the whole batch, then score and stable-sort descending.
pub fn rank_with<S: AsRef<str>>(titles: &[S], policy: CharPolicy) -> RankedList {
    let table = build_frequency_table_with(titles.iter().map(|t| t.as_ref()), policy);
    rank_with_table(titles, &table, policy)
}

/// Rank against a table already built from the same `titles`.
pub fn rank_with_table<S: AsRef<str>>(titles: &[S], table: &FrequencyTable, policy: CharPolicy) -> RankedList {
    let mut scored = weigh(titles, table, policy);
    // Vec::sort_by is stable
    scored.sort_by(|a, b| b.weight.cmp(&a.weight));
    tracing::debug!(titles = scored.len(), unique_tokens = table.len(), total_tokens = table.total(), "ranked titles");
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::build_frequency_table;

    #[test]
    fn score_sums_repeats() {
        let table = build_frequency_table(["go go go", "go home"]);
        assert_eq!(table.get("go"), 4);
        assert_eq!(score("go go go", &table), 12);
        assert_eq!(score("go home", &table), 5);
    }

    #[test]
    fn unknown_tokens_score_zero() {
        let table = build_frequency_table(["alpha beta"]);
        assert_eq!(score("gamma delta", &table), 0);
        assert_eq!(score("", &table), 0);
    }

    #[test]
    fn weigh_keeps_input_order() {
        let titles = ["low", "high high"];
        let table = build_frequency_table(titles);
        let weighed = weigh(&titles, &table, CharPolicy::Unicode);
        assert_eq!(weighed[0], ScoredTitle { title: "low".into(), weight: 1 });
        assert_eq!(weighed[1], ScoredTitle { title: "high high".into(), weight: 4 });
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank(&["zeta one", "alpha two", "mid mid"]);
        let titles: Vec<&str> = ranked.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["mid mid", "zeta one", "alpha two"]);
    }

    #[test]
    fn prebuilt_table_matches_rank() {
        let titles = ["storm hits coast", "coast guard", "storm storm"];
        let table = build_frequency_table(titles);
        assert_eq!(rank_with_table(&titles, &table, CharPolicy::Unicode), rank(&titles));
    }

    #[test]
    fn empty_input() {
        let empty: [&str; 0] = [];
        assert!(rank(&empty).is_empty());
    }
}
