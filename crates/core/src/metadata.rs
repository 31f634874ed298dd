use crate::Document;
use crate::report::SocialLink;

/// Author shown when the page names none.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Longest byline text accepted from an author-classed element.
const MAX_BYLINE_CHARS: usize = 50;

/// Recognised social platform domains, in reporting order.
pub const SOCIAL_PLATFORMS: [&str; 5] = ["twitter.com", "linkedin.com", "instagram.com", "facebook.com", "github.com"];

impl Document {
    /// Extract author with priority fallback:
    /// 1. Meta `author` content
    /// 2. First `span`, `a` or `div` whose class contains "author" (any case)
    ///    and whose trimmed text is shorter than 50 characters
    /// 3. [`UNKNOWN_AUTHOR`]
    pub fn extract_author(&self) -> String {
        if let Some(author) = self.meta_content("author") {
            return author;
        }

        for el in self.select_all("span, a, div") {
            let is_byline = el
                .attr("class")
                .is_some_and(|class| class.to_lowercase().contains("author"));
            if !is_byline {
                continue;
            }

            let text = el.text();
            let text = text.trim();
            if text.chars().count() < MAX_BYLINE_CHARS {
                return text.to_string();
            }
        }

        UNKNOWN_AUTHOR.to_string()
    }

    /// Links to recognised social platforms, first link per platform, in
    /// document order.
    ///
    /// Domains are matched as substrings of the raw `href`. The platform name
    /// is the capitalized domain prefix, e.g. `Linkedin` for linkedin.com.
    pub fn social_links(&self) -> Vec<SocialLink> {
        let mut links: Vec<SocialLink> = Vec::new();
        let mut found = [false; SOCIAL_PLATFORMS.len()];

        for anchor in self.select_all("a[href]") {
            let Some(href) = anchor.attr("href") else { continue };

            for (i, domain) in SOCIAL_PLATFORMS.iter().enumerate() {
                if !found[i] && href.contains(domain) {
                    found[i] = true;
                    links.push(SocialLink { platform: platform_name(domain), url: href.to_string() });
                }
            }
        }

        links
    }
}

/// `"linkedin.com"` becomes `"Linkedin"`.
fn platform_name(domain: &str) -> String {
    let prefix = domain.split('.').next().unwrap_or(domain);
    let mut chars = prefix.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
