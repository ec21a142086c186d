use crawler::traits::ElementHandle;
use tracing::{debug, trace};

/// Trimmed text of an element, `None` when it is empty or unreadable.
pub(crate) fn element_to_text<E: ElementHandle>(element: &E) -> Option<String> {
    match element.text() {
        Ok(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Err(err) => {
            debug!("Failed to read element text: {err}");
            None
        }
    }
}

/// Trimmed, non-empty attribute value.
pub(crate) fn element_extract_attr<E: ElementHandle>(element: &E, attr_name: &str) -> Option<String> {
    match element.attribute(attr_name) {
        Ok(Some(value)) => {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Ok(None) => {
            trace!("Element has no attribute {attr_name}");
            None
        }
        Err(err) => {
            debug!("Failed to read attribute {attr_name}: {err}");
            None
        }
    }
}

pub(crate) fn extract_element_from_element<E: ElementHandle>(
    element: &E,
    selector: &str,
) -> Option<E> {
    match element.find_one(selector) {
        Ok(found) => found,
        Err(err) => {
            debug!("Failed to query '{selector}' inside element: {err}");
            None
        }
    }
}
