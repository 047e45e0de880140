use super::escape_html;
use crate::directory::Show;
use std::fmt;

/// Identity of one rendered show entry.
///
/// The generation changes with every render of the list, so a key taken from
/// an earlier search result never resolves against a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub generation: u64,
    pub index: usize,
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.generation, self.index)
    }
}

/// A show together with the key of the entry it was rendered into
#[derive(Debug, Clone, PartialEq)]
pub struct ShowEntry {
    pub key: EntryKey,
    pub show: Show,
}

/// Scrollable list of search results (`#showsList`).
#[derive(Debug, Default)]
pub struct ShowListView {
    generation: u64,
    entries: Vec<ShowEntry>,
}

impl ShowListView {
    /// Replaces the displayed shows with `shows`, keeping their order
    ///
    /// Returns the generation the new entries belong to.
    pub fn render(&mut self, shows: Vec<Show>) -> u64 {
        self.generation += 1;
        let generation = self.generation;

        self.entries = shows
            .into_iter()
            .enumerate()
            .map(|(index, show)| ShowEntry {
                key: EntryKey { generation, index },
                show,
            })
            .collect();

        generation
    }

    /// Looks up the show behind a rendered entry
    pub fn get(&self, key: EntryKey) -> Option<&Show> {
        if key.generation != self.generation {
            return None;
        }
        self.entries.get(key.index).map(|entry| &entry.show)
    }

    pub fn entries(&self) -> &[ShowEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the `#showsList` container with one card per show
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div id=\"showsList\" class=\"row\">\n");
        for entry in &self.entries {
            html.push_str(&render_entry(entry));
        }
        html.push_str("</div>\n");
        html
    }
}

/// Renders a single show card.
///
/// Every piece of service-provided text is escaped. The summary arrives as
/// markup, it is reduced to plain text first.
fn render_entry(entry: &ShowEntry) -> String {
    let show = &entry.show;
    let name = escape_html(&show.name);
    let summary = escape_html(nanohtml2text::html2text(&show.summary).trim());

    format!(
        r#"  <div data-show-id="{id}" data-entry="{key}" class="Show col-md-12 col-lg-6 mb-4">
    <div class="media">
      <img src="{image}" alt="{name}" class="w-25 me-3">
      <div class="media-body">
        <h5 class="text-primary">{name}</h5>
        <div><small>{summary}</small></div>
        <button class="btn btn-outline-light btn-sm Show-getEpisodes">Episodes</button>
      </div>
    </div>
  </div>
"#,
        id = escape_html(&show.id.to_string()),
        key = entry.key,
        image = escape_html(&show.image),
        name = name,
        summary = summary,
    )
}
