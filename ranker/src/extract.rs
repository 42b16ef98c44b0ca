use crate::config::parse_selector;
use anyhow::Result;
use scraper::Html;

/// Text of every element matching `selector`, in document order.
///
/// Whitespace inside a title is collapsed; elements with no text are skipped.
pub fn extract_titles(html: &str, selector: &str) -> Result<Vec<String>> {
    let sel = parse_selector(selector)?;
    let doc = Html::parse_document(html);
    let titles: Vec<String> = doc
        .select(&sel)
        .map(|n| n.text().collect::<String>())
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|t| !t.is_empty())
        .collect();
    if titles.is_empty() {
        tracing::warn!(selector, "selector matched no titles");
    }
    Ok(titles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <article><h2 class="story-heading"><a href="/1">Trump goes
            to Japan</a></h2></article>
        <article><h2 class="story-heading"><a href="/2"> Shooting in <b>Texas</b> </a></h2></article>
        <article><h2 class="story-heading"><a href="/3">   </a></h2></article>
        <aside><h2 class="story-heading"><a href="/4">Not an article</a></h2></aside>
    </body></html>"#;

    #[test]
    fn extracts_in_document_order() {
        let titles = extract_titles(PAGE, "body article > .story-heading > a").unwrap();
        assert_eq!(titles, vec!["Trump goes to Japan", "Shooting in Texas"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(extract_titles(PAGE, "h5").unwrap().is_empty());
        assert!(extract_titles("", "a").unwrap().is_empty());
    }

    #[test]
    fn bad_selector_errors() {
        assert!(extract_titles(PAGE, "::::").is_err());
    }
}
