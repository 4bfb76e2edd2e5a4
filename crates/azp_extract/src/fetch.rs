use scraper::{ElementRef, Html, Selector};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; azpress/0.1; +https://azalerts.nl)";

/// Downloads a page and returns its body, or `None` when the URL does not
/// yield usable HTML (non-success status, non-text content type).
///
/// Transport errors are logged and reported as `None` as well: the caller
/// treats an unreachable article the same as an empty one.
pub async fn fetch_url(client: &reqwest::Client, url: &str) -> Option<String> {
    let response = match client.get(url).header("User-Agent", USER_AGENT).send().await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!("fetch failed for {}: {}", url, e);
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::warn!("fetch for {} returned {}", url, response.status());
        return None;
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_lowercase();
    if !content_type.is_empty() && !content_type.contains("html") && !content_type.contains("text")
    {
        tracing::warn!("fetch for {} returned content type {:?}", url, content_type);
        return None;
    }

    match response.text().await {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::warn!("failed to read body for {}: {}", url, e);
            None
        }
    }
}

/// Extracts the article body text from an HTML document.
///
/// Prefers paragraphs inside `<article>`; falls back to all `<p>` elements
/// that are not part of page chrome. Returns an empty string when nothing
/// usable is found.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let article_paragraphs = Selector::parse("article p").unwrap();
    let paragraphs: Vec<String> = document
        .select(&article_paragraphs)
        .filter_map(paragraph_text)
        .collect();
    if !paragraphs.is_empty() {
        return paragraphs.join("\n\n");
    }

    let all_paragraphs = Selector::parse("p").unwrap();
    document
        .select(&all_paragraphs)
        .filter(|el| !in_page_chrome(el))
        .filter_map(|el| paragraph_text(el))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn paragraph_text(el: ElementRef) -> Option<String> {
    let text = el.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn in_page_chrome(el: &ElementRef) -> bool {
    el.ancestors().filter_map(ElementRef::wrap).any(|ancestor| {
        matches!(
            ancestor.value().name(),
            "nav" | "header" | "footer" | "aside" | "form"
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_prefers_article_body() {
        let html = r#"
            <html><body>
            <nav><p>Menu item</p></nav>
            <article><p>Eerste alinea.</p><p>Tweede alinea.</p></article>
            <footer><p>Colofon</p></footer>
            </body></html>
        "#;
        let text = extract_text(html);
        assert_eq!(text, "Eerste alinea.\n\nTweede alinea.");
    }

    #[test]
    fn test_extract_falls_back_to_loose_paragraphs() {
        let html = r#"
            <html><body>
            <nav><p>Menu item</p></nav>
            <div><p>Losse alinea buiten een article.</p></div>
            </body></html>
        "#;
        let text = extract_text(html);
        assert_eq!(text, "Losse alinea buiten een article.");
    }

    #[test]
    fn test_extract_empty_document() {
        assert_eq!(extract_text("<html><body></body></html>"), "");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("PSV wint van AZ"), 4);
        assert_eq!(word_count("  "), 0);
    }
}
