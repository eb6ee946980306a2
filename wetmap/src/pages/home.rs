//! Landing page content.

/// Dashboard title.
pub const TITLE: &str = "Visualizing Wetland Inundation Dynamics";

/// The static landing page. No map, no controls.
#[derive(Debug, Default)]
pub struct HomePage;

impl HomePage {
    /// Create the landing page.
    pub fn new() -> Self {
        Self
    }

    /// Page title.
    pub fn title(&self) -> &'static str {
        TITLE
    }

    /// Introductory body text.
    pub fn body(&self) -> &'static str {
        "An interactive dashboard for exploring wetland easements: click an \
         easement to inspect it, draw a region to build satellite imagery \
         time series, and analyze surface water dynamics over time."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page_has_title_and_body() {
        let page = HomePage::new();
        assert_eq!(page.title(), TITLE);
        assert!(!page.body().is_empty());
    }
}
