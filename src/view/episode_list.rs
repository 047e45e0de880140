use super::escape_html;
use crate::directory::Episode;

/// Episode panel (`#episodesArea`) with its list (`#episodesList`).
///
/// The panel starts hidden. Rendering episodes always makes it visible,
/// even when the list is empty.
#[derive(Debug, Default)]
pub struct EpisodeListView {
    episodes: Vec<Episode>,
    visible: bool,
}

impl EpisodeListView {
    /// Replaces the listed episodes and shows the panel
    pub fn render(&mut self, episodes: Vec<Episode>) {
        self.episodes = episodes;
        self.visible = true;
    }

    /// Hides the panel without touching its contents
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The text of every list line, in render order
    pub fn lines(&self) -> Vec<String> {
        self.episodes.iter().map(format_episode).collect()
    }

    /// Renders the panel section including its list
    pub fn to_html(&self) -> String {
        let mut html = if self.visible {
            String::from("<section id=\"episodesArea\">\n")
        } else {
            String::from("<section id=\"episodesArea\" style=\"display: none\">\n")
        };
        html.push_str("  <h2>Episodes</h2>\n");
        html.push_str("  <ul id=\"episodesList\">\n");
        for line in self.lines() {
            html.push_str(&format!("    <li>{}</li>\n", escape_html(&line)));
        }
        html.push_str("  </ul>\n</section>\n");
        html
    }
}

/// Formats an episode as `{name} (season {season}, number {number})`
pub fn format_episode(episode: &Episode) -> String {
    let number = episode
        .number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "?".to_string());
    format!(
        "{} (season {}, number {})",
        episode.name, episode.season, number
    )
}
