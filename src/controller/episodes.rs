use super::Session;
use crate::ShowFinderError;
use crate::directory::{Show, ShowDirectory};
use crate::view::EntryKey;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of an "Episodes" click
#[derive(Debug, Clone, PartialEq)]
pub enum EpisodeLoad {
    /// The episodes were rendered and the panel is visible
    Rendered { show: Show, count: usize },
    /// A newer click or search superseded this request, its response was dropped
    Superseded { show: Show },
}

/// Handles clicks on the "Episodes" action of rendered show entries.
pub struct EpisodeController<D> {
    session: Arc<Session<D>>,
}

impl<D: ShowDirectory> EpisodeController<D> {
    pub(crate) fn new(session: Arc<Session<D>>) -> Self {
        Self { session }
    }

    /// Loads and renders the episodes of the show behind `entry`.
    ///
    /// The show is resolved from the rendered entry map, not from markup.
    /// Each click takes a fresh request token; the response is only rendered
    /// if no other click or search happened in the meantime.
    ///
    /// # Errors
    ///
    /// `UnknownEntry` if the key does not belong to the current show list (no
    /// request is issued in that case), or the directory error of a failed fetch.
    pub fn click(&self, entry: EntryKey) -> Result<EpisodeLoad, ShowFinderError> {
        // Resolving the key and issuing the token share one critical section
        // with the search render, which invalidates tokens under the same lock
        let (show, token) = {
            let page = self.session.page.lock();
            let show = page
                .shows
                .get(entry)
                .cloned()
                .ok_or(ShowFinderError::UnknownEntry(entry))?;
            let token = self.session.selection.begin(show.id);
            (show, token)
        };

        debug!(show = %show.id, %entry, "Loading episodes");

        let episodes = self.session.directory.episodes(token.show).map_err(|e| {
            warn!(show = %show.id, error = %e, "Episode fetch failed");
            e
        })?;

        let mut page = self.session.page.lock();
        if !self.session.selection.is_current(token) {
            debug!(show = %show.id, "Discarding superseded episode list");
            return Ok(EpisodeLoad::Superseded { show });
        }

        let count = episodes.len();
        page.episodes.render(episodes);
        info!(show = %show.id, count, "Rendered episode list");

        Ok(EpisodeLoad::Rendered { show, count })
    }
}
