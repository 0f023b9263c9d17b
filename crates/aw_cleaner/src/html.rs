use scraper::{Html, Node};

/// Elements whose text never reaches the reader.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Parse `input` as an HTML document and keep only its visible text.
///
/// The parser is tolerant: plain text comes back unchanged and malformed
/// markup yields whatever text html5ever recovers. Text nodes are joined
/// without separators.
pub fn strip_html(input: &str) -> String {
    let document = Html::parse_document(input);
    let mut text = String::with_capacity(input.len());

    for node in document.tree.root().descendants() {
        if let Node::Text(content) = node.value() {
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .map(|element| HIDDEN_ELEMENTS.contains(&element.name()))
                    .unwrap_or(false)
            });
            if !hidden {
                text.push_str(content);
            }
        }
    }

    text
}
