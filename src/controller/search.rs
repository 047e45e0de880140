use super::Session;
use crate::ShowFinderError;
use crate::directory::ShowDirectory;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{info, warn};

/// Whether a search is currently running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Searching,
}

/// Handles search form submissions.
///
/// Searches are not ordered against each other: when two overlap, the one
/// that completes last determines the list.
pub struct SearchController<D> {
    session: Arc<Session<D>>,
    in_flight: AtomicUsize,
}

impl<D: ShowDirectory> SearchController<D> {
    pub(crate) fn new(session: Arc<Session<D>>) -> Self {
        Self {
            session,
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn state(&self) -> SearchState {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            SearchState::Searching
        } else {
            SearchState::Idle
        }
    }

    /// Runs a search and renders its results.
    ///
    /// On success the episode panel is hidden and any episode request still
    /// in flight is superseded. On failure the page is left untouched.
    ///
    /// # Returns
    ///
    /// The number of rendered shows
    pub fn submit(&self, term: &str) -> Result<usize, ShowFinderError> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let result = self.session.directory.search(term);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let shows = result.map_err(|e| {
            warn!(term, error = %e, "Search failed");
            e
        })?;
        let count = shows.len();

        let mut page = self.session.page.lock();
        self.session.selection.invalidate();
        page.episodes.hide();
        page.shows.render(shows);

        info!(term, count, "Rendered search results");
        Ok(count)
    }
}
