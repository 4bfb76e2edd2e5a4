pub mod brand;
pub mod fetch;

pub use brand::{brand_alias, publisher_name};
pub use fetch::{extract_text, fetch_url, word_count};

pub mod prelude {
    pub use super::{brand_alias, extract_text, fetch_url, publisher_name, word_count};
    pub use azp_core::{Error, Result, SourceArticle};
}

/// Builds a [`azp_core::SourceArticle`] from a URL and its extracted text.
pub fn source_article(url: &str, extracted_text: String) -> azp_core::SourceArticle {
    let name = publisher_name(url);
    let alias = brand_alias(&name);
    azp_core::SourceArticle {
        url: url.to_string(),
        extracted_text,
        publisher_name: name,
        publisher_alias: alias,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_article_resolves_brand() {
        let article = source_article("https://www.vi.nl/artikel", "tekst".to_string());
        assert_eq!(article.publisher_name, "Voetbal International");
        assert_eq!(article.publisher_alias, "VI");
    }
}
