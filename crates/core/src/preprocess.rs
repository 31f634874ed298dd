//! Markup cleanup ahead of text extraction.

/// Removes `<script>` and `<style>` elements, whose content is never visible text.
///
/// Falls back to the untouched input if the rewriter rejects the markup.
pub fn preprocess_html(html: &str) -> String {
    let mut output = String::new();
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: vec![
                lol_html::element!("script", |el| {
                    el.remove();
                    Ok(())
                }),
                lol_html::element!("style", |el| {
                    el.remove();
                    Ok(())
                }),
            ],
            ..Default::default()
        },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    if rewriter.write(html.as_bytes()).is_err() {
        tracing::warn!("html rewriter rejected input, using raw markup");
        return html.to_string();
    }

    if rewriter.end().is_err() {
        tracing::warn!("html rewriter failed to finish, using raw markup");
        return html.to_string();
    }

    if output.is_empty() { html.to_string() } else { output }
}
