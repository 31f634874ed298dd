//! HTML parsing and DOM queries.
//!
//! This module provides the [`Document`] and [`Element`] types used by every
//! DOM inspection in the analysis: meta tags, headings, images and links.
//!
//! # Example
//!
//! ```rust
//! use pagegrade_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <head><meta name="description" content="A short page"></head>
//!         <body><h1>Title</h1><script>ignored()</script></body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse_stripped(html);
//! assert_eq!(doc.meta_content("description"), Some("A short page".to_string()));
//! assert!(!doc.text_content().contains("ignored"));
//! ```

use scraper::{Html, Selector};

use crate::preprocess::preprocess_html;
use crate::{PagegradeError, Result};

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string as-is.
    ///
    /// Parsing never fails; malformed markup is repaired by the HTML5 parser.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Parses HTML after removing `<script>` and `<style>` elements.
    ///
    /// This is the form the analyzer works on, so that neither code nor CSS
    /// leaks into the extracted text.
    pub fn parse_stripped(html: &str) -> Self {
        let cleaned = preprocess_html(html);
        Self::parse(&cleaned)
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`PagegradeError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pagegrade_core::parse::Document;
    ///
    /// let doc = Document::parse(r#"<p class="content">First</p><p class="content">Second</p>"#);
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = Selector::parse(selector)
            .map_err(|e| PagegradeError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects elements, treating an invalid selector as "no matches".
    ///
    /// Used for the fixed selectors of the built-in checks.
    pub fn select_all(&'_ self, selector: &str) -> Vec<Element<'_>> {
        self.select(selector).unwrap_or_default()
    }

    /// Gets the element for `<meta name="...">`, if present.
    pub fn meta(&'_ self, name: &str) -> Option<Element<'_>> {
        self.select_all(&format!("meta[name=\"{}\"]", name)).into_iter().next()
    }

    /// Gets the `content` attribute of `<meta name="...">`.
    ///
    /// Returns `None` when the tag is absent or carries no content attribute.
    pub fn meta_content(&self, name: &str) -> Option<String> {
        self.meta(name)
            .and_then(|el| el.attr("content").map(|content| content.to_string()))
    }

    /// Gets all text content from the document.
    ///
    /// Text nodes are concatenated without separators, in document order.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// A wrapper around scraper's ElementRef.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}
