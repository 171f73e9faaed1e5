//! Smooth in-page navigation between landing sections

use crate::core::content::SectionId;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Why a scroll request did nothing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrollError {
    #[error("no document available")]
    NoDocument,
    #[error("no element with id '{0}'")]
    SectionNotFound(String),
}

/// Smooth-scroll the element with `id` into view.
///
/// A missing element leaves the page untouched.
#[cfg(not(feature = "ssr"))]
pub fn scroll_to_id(id: &str) -> Result<(), ScrollError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ScrollError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| ScrollError::SectionNotFound(id.to_string()))?;

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// There is nothing to scroll while rendering on the server
#[cfg(feature = "ssr")]
pub fn scroll_to_id(_id: &str) -> Result<(), ScrollError> {
    Err(ScrollError::NoDocument)
}

/// Scroll to a landing section, logging misses instead of failing
pub fn scroll_to_section(section: SectionId) {
    if let Err(e) = scroll_to_id(section.as_str()) {
        leptos::logging::warn!("Skipping scroll to '{}': {}", section, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::sections;

    #[test]
    fn test_no_document_on_server() {
        assert_eq!(scroll_to_id("signup"), Err(ScrollError::NoDocument));
    }

    #[test]
    fn test_scroll_to_section_is_noop_without_document() {
        // Must not panic when nothing can be scrolled
        scroll_to_section(sections::SIGNUP);
        scroll_to_section(sections::CRISIS);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ScrollError::SectionNotFound("pricing".to_string()).to_string(),
            "no element with id 'pricing'"
        );
        assert_eq!(ScrollError::NoDocument.to_string(), "no document available");
    }
}
