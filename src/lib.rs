//! show_finder - Search a tv show directory and browse episode lists
//!
//! This library provides a small front-end over the TVMaze directory: a search
//! renders a list of shows, and picking a show renders its episodes. The page
//! is kept in memory and can be rendered to HTML at any time.

mod controller;
mod directory;
mod view;

use controller::Session;
use std::sync::Arc;
use thiserror::Error;

pub use controller::{EpisodeController, EpisodeLoad, SearchController, SearchState};
pub use directory::{
    DEFAULT_BASE_URL, DEFAULT_PLACEHOLDER_IMAGE, DirectoryConfig, DirectoryError, Episode,
    EpisodeId, Show, ShowDirectory, ShowId, TvMazeDirectory,
};
pub use view::{
    EntryKey, EpisodeListView, Page, ShowEntry, ShowListView, escape_html, format_episode,
};

/// Top-level error type for show_finder operations
#[derive(Debug, Error)]
pub enum ShowFinderError {
    /// Error while querying the directory service
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// The clicked entry is not part of the currently rendered show list
    #[error("No rendered show entry {0}, the list was replaced")]
    UnknownEntry(EntryKey),
}

/// One browsing session: a directory, a page and the controllers acting on it.
///
/// All methods take `&self`, so a `Frontend` can be shared between threads
/// when the directory is `Send + Sync`.
///
/// # Examples
///
/// ```no_run
/// use show_finder::{Frontend, TvMazeDirectory};
///
/// let frontend = Frontend::new(TvMazeDirectory::new());
/// frontend.submit_search("batman").unwrap();
///
/// if let Some(entry) = frontend.entries().first() {
///     frontend.click_episodes(entry.key).unwrap();
/// }
///
/// println!("{}", frontend.to_html("batman"));
/// ```
pub struct Frontend<D> {
    session: Arc<Session<D>>,
    search: SearchController<D>,
    episodes: EpisodeController<D>,
}

impl<D: ShowDirectory> Frontend<D> {
    /// Creates a session with an empty page
    pub fn new(directory: D) -> Self {
        let session = Arc::new(Session::new(directory));
        Self {
            search: SearchController::new(session.clone()),
            episodes: EpisodeController::new(session.clone()),
            session,
        }
    }

    /// Submits the search form
    ///
    /// Returns the number of rendered shows.
    pub fn submit_search(&self, term: &str) -> Result<usize, ShowFinderError> {
        self.search.submit(term)
    }

    /// Clicks the "Episodes" action of a rendered show entry
    pub fn click_episodes(&self, entry: EntryKey) -> Result<EpisodeLoad, ShowFinderError> {
        self.episodes.click(entry)
    }

    pub fn search_state(&self) -> SearchState {
        self.search.state()
    }

    /// The currently rendered show entries
    pub fn entries(&self) -> Vec<ShowEntry> {
        self.session.page.lock().shows.entries().to_vec()
    }

    /// Text lines of the episode panel, or None while the panel is hidden
    pub fn visible_episodes(&self) -> Option<Vec<String>> {
        let page = self.session.page.lock();
        page.episodes
            .is_visible()
            .then(|| page.episodes.lines())
    }

    /// Renders the complete page, echoing `term` into the search field
    pub fn to_html(&self, term: &str) -> String {
        self.session.page.lock().to_html(term)
    }
}
