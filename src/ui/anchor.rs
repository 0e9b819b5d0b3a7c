//! Smooth scrolling for in-page anchors

/// Element id named by an in-page `href`.
/// `"#"` alone and non-fragment links have no target.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that lands the target just below the fixed header
#[inline]
pub fn scroll_target(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HEADER_OFFSET;

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#section-2"), Some("section-2"));
        assert_eq!(fragment_id("#faq"), Some("faq"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("/pricing#plans"), None);
    }

    #[test]
    fn test_scroll_target_subtracts_header() {
        assert_eq!(scroll_target(1200.0, HEADER_OFFSET), 1120.0);
        // Targets near the top may go negative; the browser clamps
        assert_eq!(scroll_target(40.0, HEADER_OFFSET), -40.0);
    }
}
