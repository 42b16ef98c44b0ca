use newsrank_core::{CharPolicy, FrequencyTable, ScoredTitle};
use serde::Serialize;

/// How many of the most frequent tokens a report lists.
pub const TOP_TOKENS: usize = 10;

/// `"<title> (<weight>)"` per line. `limit == 0` means no limit.
pub fn render_text(list: &[ScoredTitle], limit: usize) -> String {
    let take = if limit == 0 { list.len() } else { limit };
    list.iter()
        .take(take)
        .map(|s| format!("{} ({})", s.title, s.weight))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCount {
    pub token: String,
    pub count: u32,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// URL or input path the titles came from.
    pub source: String,
    pub generated_at: String,
    pub policy: CharPolicy,
    pub titles: usize,
    pub unique_tokens: usize,
    pub top_tokens: Vec<TokenCount>,
    pub entries: &'a [ScoredTitle],
}

impl<'a> Report<'a> {
    pub fn new(
        source: impl Into<String>,
        policy: CharPolicy,
        titles: usize,
        table: &FrequencyTable,
        entries: &'a [ScoredTitle],
    ) -> Self {
        let generated_at = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_default();
        let top_tokens = table
            .most_common(TOP_TOKENS)
            .into_iter()
            .map(|(token, count)| TokenCount { token: token.to_string(), count })
            .collect();
        Self {
            source: source.into(),
            generated_at,
            policy,
            titles,
            unique_tokens: table.len(),
            top_tokens,
            entries,
        }
    }
}

pub fn render_json(report: &Report<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
