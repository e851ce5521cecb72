pub mod naver;
pub mod press;

/// Common utilities for scrapers
pub(crate) mod utils {
    use nt_core::{Error, Result};
    use url::Url;

    /// Inline markup the search API leaves in titles and descriptions.
    /// `&amp;` is decoded last so already-decoded text is not decoded twice.
    const MARKUP: [(&str, &str); 7] = [
        ("<b>", ""),
        ("</b>", ""),
        ("&quot;", "\""),
        ("&apos;", "'"),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&amp;", "&"),
    ];

    pub fn clean_markup(text: &str) -> String {
        MARKUP
            .iter()
            .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
    }

    pub fn parse_url(url: &str) -> Result<Url> {
        Url::parse(url).map_err(|e| Error::Scraping(format!("Failed to parse URL: {}", e)))
    }
}
