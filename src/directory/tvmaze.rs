/// TVMaze directory implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeImage, TvMazeSearchResult};
use super::{
    DirectoryConfig, DirectoryError, Episode, EpisodeId, Show, ShowDirectory, ShowId,
};
use reqwest::blocking::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Show directory backed by the TVMaze API.
///
/// Uses the `/search/shows` endpoint for searches and
/// `/shows/{id}/episodes` for episode lists. No authentication is needed.
pub struct TvMazeDirectory {
    client: reqwest::blocking::Client,
    base_url: String,
    placeholder_image: String,
}

impl TvMazeDirectory {
    /// Creates a new TVMaze directory talking to the public API.
    pub fn new() -> Self {
        Self::with_config(DirectoryConfig::default())
    }

    /// Creates a TVMaze directory with custom connection settings.
    ///
    /// A trailing slash on the base URL is ignored.
    pub fn with_config(config: DirectoryConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            placeholder_image: config.placeholder_image,
        }
    }

    /// Picks the artwork URL for a show, falling back to the placeholder.
    fn select_image(&self, image: Option<TvMazeImage>) -> String {
        image
            .and_then(|img| {
                img.medium
                    .filter(|url| !url.is_empty())
                    .or(img.original.filter(|url| !url.is_empty()))
            })
            .unwrap_or_else(|| self.placeholder_image.clone())
    }

    /// Converts a TVMaze search hit to our internal Show structure.
    fn convert_show(&self, result: TvMazeSearchResult) -> Show {
        let show = result.show;
        Show {
            id: ShowId(show.id),
            name: show.name,
            summary: show.summary.unwrap_or_default(),
            image: self.select_image(show.image),
        }
    }

    /// Converts a TVMaze episode to our internal Episode structure.
    fn convert_episode(tvmaze_episode: TvMazeEpisode) -> Episode {
        Episode {
            id: EpisodeId(tvmaze_episode.id),
            name: tvmaze_episode.name.unwrap_or_else(|| "Unknown".to_string()),
            season: tvmaze_episode.season,
            number: tvmaze_episode.number,
        }
    }

    /// Checks the status of a response and parses its JSON body.
    fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, DirectoryError> {
        if !response.status().is_success() {
            return Err(DirectoryError::ServiceError(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json()
            .map_err(|e| DirectoryError::ServiceError(format!("malformed response: {}", e)))
    }

    fn send(&self, request: reqwest::blocking::RequestBuilder) -> Result<Response, DirectoryError> {
        request.send().map_err(|e| {
            warn!(error = %e, "Directory request failed");
            DirectoryError::NetworkError(e.to_string())
        })
    }
}

impl Default for TvMazeDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowDirectory for TvMazeDirectory {
    fn search(&self, term: &str) -> Result<Vec<Show>, DirectoryError> {
        let url = format!("{}/search/shows", self.base_url);
        debug!(%url, term, "Searching shows");

        // The term travels as a query parameter, reqwest takes care of the encoding
        let response = self.send(self.client.get(&url).query(&[("q", term)]))?;
        let results: Vec<TvMazeSearchResult> = Self::read_json(response)?;

        debug!(count = results.len(), "Search returned");
        Ok(results
            .into_iter()
            .map(|result| self.convert_show(result))
            .collect())
    }

    fn episodes(&self, show: ShowId) -> Result<Vec<Episode>, DirectoryError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show);
        debug!(%url, "Fetching episode list");

        let response = self.send(self.client.get(&url))?;
        let episodes: Vec<TvMazeEpisode> = Self::read_json(response)?;

        debug!(count = episodes.len(), show = %show, "Episode list returned");
        Ok(episodes.into_iter().map(Self::convert_episode).collect())
    }
}
