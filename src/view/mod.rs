//! Page model module
//!
//! This module holds the in-memory page the front-end renders into. It mirrors
//! the markup of the search page: a search form, the show list container and
//! the episode panel. Views own the records they render, there is no separate
//! model layer.

mod episode_list;
mod show_list;

pub use episode_list::{EpisodeListView, format_episode};
pub use show_list::{EntryKey, ShowEntry, ShowListView};

/// Escapes text for insertion into HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            c => result.push(c),
        }
    }
    result
}

/// The whole search page: form, show list and episode panel.
#[derive(Debug, Default)]
pub struct Page {
    /// Rendered search results (`#showsList`)
    pub shows: ShowListView,
    /// Episode panel of the selected show (`#episodesArea`)
    pub episodes: EpisodeListView,
}

impl Page {
    /// Creates an empty page with a hidden episode panel
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the complete HTML document
    ///
    /// `term` is echoed into the search field so a saved page shows what was
    /// searched for.
    pub fn to_html(&self, term: &str) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"utf-8\">\n");
        html.push_str("  <title>TV Show Search</title>\n");
        html.push_str("</head>\n<body>\n");
        html.push_str("<main class=\"container\">\n");

        html.push_str("<form id=\"searchForm\" class=\"form-inline\">\n");
        html.push_str(&format!(
            "  <input id=\"searchForm-term\" class=\"form-control\" placeholder=\"Show title\" value=\"{}\">\n",
            escape_html(term)
        ));
        html.push_str("  <button class=\"btn btn-primary\">Go!</button>\n");
        html.push_str("</form>\n");

        html.push_str(&self.shows.to_html());
        html.push_str(&self.episodes.to_html());

        html.push_str("</main>\n</body>\n</html>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Plain text"), "Plain text");
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
    }

    #[test]
    fn test_new_page_has_hidden_empty_panel() {
        let page = Page::new();
        let html = page.to_html("");

        assert!(page.shows.is_empty());
        assert!(!page.episodes.is_visible());
        assert!(html.contains("id=\"searchForm\""));
        assert!(html.contains("<div id=\"showsList\" class=\"row\">"));
        assert!(html.contains("<section id=\"episodesArea\" style=\"display: none\">"));
    }

    #[test]
    fn test_search_term_is_escaped_in_form() {
        let html = Page::new().to_html("\"><img src=x>");
        assert!(html.contains("value=\"&quot;&gt;&lt;img src=x&gt;\""));
    }
}
