//! Controllers module
//!
//! This module wires user actions to the directory and the page: submitting a
//! search and clicking the "Episodes" action of a rendered show. Both
//! controllers share one session, consisting of the directory backend, the
//! page and the episode request tokens.

mod episodes;
mod search;

pub use episodes::{EpisodeController, EpisodeLoad};
pub use search::{SearchController, SearchState};

use crate::directory::ShowId;
use crate::view::Page;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// State shared by both controllers
pub(crate) struct Session<D> {
    pub directory: D,
    pub page: Mutex<Page>,
    pub selection: Selection,
}

impl<D> Session<D> {
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            page: Mutex::new(Page::new()),
            selection: Selection::default(),
        }
    }
}

/// Ticket for one episode request.
///
/// Only the most recently issued token may render its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RequestToken {
    serial: u64,
    pub show: ShowId,
}

/// Issues request tokens and tracks which one is current
#[derive(Debug, Default)]
pub(crate) struct Selection {
    current: AtomicU64,
}

impl Selection {
    /// Issues a new token for `show`, superseding all earlier ones
    pub fn begin(&self, show: ShowId) -> RequestToken {
        let serial = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        RequestToken { serial, show }
    }

    /// Supersedes all outstanding tokens without issuing a new one
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current.load(Ordering::SeqCst) == token.serial
    }
}
