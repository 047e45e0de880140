//! End-to-end tests of the search page against a mocked TVMaze API

use serde_json::json;
use show_finder::{
    DEFAULT_PLACEHOLDER_IMAGE, DirectoryConfig, EpisodeLoad, Frontend, SearchState,
    ShowFinderError, ShowId, TvMazeDirectory,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Runs `session` against a frontend talking to the mock server
async fn with_frontend<T, F>(server: &MockServer, session: F) -> T
where
    T: Send + 'static,
    F: FnOnce(&Frontend<TvMazeDirectory>) -> T + Send + 'static,
{
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let frontend = Frontend::new(TvMazeDirectory::with_config(DirectoryConfig {
            base_url: uri,
            ..DirectoryConfig::default()
        }));
        session(&frontend)
    })
    .await
    .unwrap()
}

async fn mount_batman(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .and(query_param("q", "batman"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"show": {"id": 1, "name": "Batman", "summary": "<p>Dark</p>", "image": null}}
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shows/1/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "name": "Pilot", "season": 1, "number": 1}
        ])))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_batman_search_renders_single_entry() {
    let server = MockServer::start().await;
    mount_batman(&server).await;

    let (count, state, html) = with_frontend(&server, |frontend| {
        let count = frontend.submit_search("batman").unwrap();
        (count, frontend.search_state(), frontend.to_html("batman"))
    })
    .await;

    assert_eq!(count, 1);
    assert_eq!(state, SearchState::Idle);
    assert_eq!(html.matches("class=\"Show ").count(), 1);
    assert!(html.contains("data-show-id=\"1\""));
    assert!(html.contains(&format!("src=\"{}\"", DEFAULT_PLACEHOLDER_IMAGE)));
    assert!(html.contains("<small>Dark</small>"));
    assert!(!html.contains("<p>Dark</p>"));
    assert!(html.contains("<section id=\"episodesArea\" style=\"display: none\">"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_episode_click_shows_panel_with_lines() {
    let server = MockServer::start().await;
    mount_batman(&server).await;

    let (outcome, lines, html) = with_frontend(&server, |frontend| {
        frontend.submit_search("batman").unwrap();
        let entry = frontend.entries()[0].key;
        let outcome = frontend.click_episodes(entry).unwrap();
        (outcome, frontend.visible_episodes(), frontend.to_html("batman"))
    })
    .await;

    assert!(matches!(outcome, EpisodeLoad::Rendered { count: 1, ref show } if show.id == ShowId(1)));
    assert_eq!(lines, Some(vec!["Pilot (season 1, number 1)".to_string()]));
    assert!(html.contains("<section id=\"episodesArea\">"));
    assert!(html.contains("<li>Pilot (season 1, number 1)</li>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_new_search_hides_episode_panel_and_retires_old_entries() {
    let server = MockServer::start().await;
    mount_batman(&server).await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .and(query_param("q", "robin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"show": {"id": 2, "name": "Robin", "summary": null, "image": null}},
            {"show": {"id": 3, "name": "Robin Hood", "summary": null, "image": null}}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shows/3/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 30, "name": "Sherwood", "season": 1, "number": 1}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    with_frontend(&server, |frontend| {
        frontend.submit_search("batman").unwrap();
        let old_entry = frontend.entries()[0].key;
        frontend.click_episodes(old_entry).unwrap();
        assert!(frontend.visible_episodes().is_some());

        frontend.submit_search("robin").unwrap();
        assert!(frontend.visible_episodes().is_none());

        // The key from the first search no longer points anywhere
        assert!(matches!(
            frontend.click_episodes(old_entry),
            Err(ShowFinderError::UnknownEntry(_))
        ));

        let robin_hood = frontend.entries()[1].key;
        frontend.click_episodes(robin_hood).unwrap();
        assert_eq!(
            frontend.visible_episodes(),
            Some(vec!["Sherwood (season 1, number 1)".to_string()])
        );
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_search_keeps_rendered_list() {
    let server = MockServer::start().await;
    mount_batman(&server).await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .and(query_param("q", "broken"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    with_frontend(&server, |frontend| {
        frontend.submit_search("batman").unwrap();
        let err = frontend.submit_search("broken").unwrap_err();

        assert!(err.to_string().contains("HTTP 503"));
        assert_eq!(frontend.search_state(), SearchState::Idle);
        assert_eq!(frontend.entries().len(), 1);
        assert_eq!(frontend.entries()[0].show.name, "Batman");
    })
    .await;
}
