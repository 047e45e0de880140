//! Data structures and traits for querying a tv show directory.
//!
//! This module provides the records returned by a directory service (shows and
//! their episodes), the errors a lookup can fail with, and the trait every
//! directory backend implements.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeDirectory;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Image shown for shows the directory has no artwork for
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://tinyurl.com/tv-missing";

/// Base URL of the public TVMaze API
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Errors that can occur while talking to the directory service.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The request never produced an HTTP response (DNS, refused connection, timeout)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The service answered with a non-success status or an unexpected payload
    #[error("Directory service error: {0}")]
    ServiceError(String),
}

impl DirectoryError {
    /// Returns true for transport failures, false for errors reported by the service
    pub fn is_network(&self) -> bool {
        matches!(self, DirectoryError::NetworkError(_))
    }
}

/// Opaque identifier of a show as issued by the directory service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(pub u64);

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of an episode as issued by the directory service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(pub u64);

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tv series as found by a directory search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Identifier used to request the episode list
    pub id: ShowId,
    /// Display name of the series
    pub name: String,
    /// Summary exactly as delivered by the service (may contain markup)
    pub summary: String,
    /// Artwork URL, never empty
    pub image: String,
}

/// Represents a single episode of a tv series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: EpisodeId,
    /// The episode title
    pub name: String,
    /// The season number this episode belongs to
    pub season: u32,
    /// Position within the season (specials have none)
    pub number: Option<u32>,
}

/// Connection settings for a directory backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Base URL all endpoint paths are appended to
    pub base_url: String,
    /// Image URL substituted when a show comes without artwork
    pub placeholder_image: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// Trait for services that can look up shows and their episodes.
///
/// Implementors issue exactly one request per call and never cache, so
/// repeated calls with the same argument always reach the service.
pub trait ShowDirectory {
    /// Searches for shows matching a free-text term.
    ///
    /// # Arguments
    ///
    /// * `term` - The raw search term as entered by the user
    ///
    /// # Returns
    ///
    /// The matching shows in the order the service ranked them
    fn search(&self, term: &str) -> Result<Vec<Show>, DirectoryError>;

    /// Fetches the complete episode list of one show.
    ///
    /// # Arguments
    ///
    /// * `show` - The identifier of the show, as returned by `search`
    ///
    /// # Returns
    ///
    /// All episodes in the order the service lists them
    fn episodes(&self, show: ShowId) -> Result<Vec<Episode>, DirectoryError>;
}
