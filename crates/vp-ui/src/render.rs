//! Plain-text rendering of what a reader currently sees

use vp_core::INACTIVE_LINK_CLASS;
use vp_dom::{Document, DomError};

/// Displayed rows of a table body, one line per row
pub fn render_table(doc: &Document, body: &str) -> Result<Vec<String>, DomError> {
    let mut lines = Vec::new();
    for row in doc.children(body)? {
        if doc.is_displayed(row)? {
            let element = doc.element(row)?;
            let attributes: Vec<String> = element
                .attributes()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect();
            if attributes.is_empty() {
                lines.push(format!("{} {}", element.id, element.text).trim_end().to_string());
            } else {
                lines.push(format!("{} {} [{}]", element.id, element.text, attributes.join(" ")));
            }
        }
    }
    Ok(lines)
}

/// Visible links of a link row; the inactive ones are bracketed
pub fn render_links(doc: &Document, link_div: &str) -> Result<String, DomError> {
    let mut parts = Vec::new();
    for link in doc.children(link_div)? {
        let element = doc.element(link)?;
        if element.hidden {
            continue;
        }
        if element.has_class(INACTIVE_LINK_CLASS) {
            parts.push(format!("[{}]", element.text));
        } else {
            parts.push(element.text.clone());
        }
    }
    Ok(parts.join(" "))
}
