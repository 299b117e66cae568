//! Integration tests for the paged harvest loop

use std::collections::BTreeSet;

use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scraper::{PageScraper, ScraperConfig, ScraperError};

const MARKER: &str = "operator-name";

fn key(filler: char) -> String {
    format!("AIzaSy{}", filler.to_string().repeat(33))
}

fn config_for(server: &MockServer) -> ScraperConfig {
    let raw = format!(
        r#"{{
            "base_url": "{}",
            "cookies": {{ "session": "abc123" }},
            "login_marker": "{MARKER}"
        }}"#,
        server.uri()
    );
    serde_json::from_str(&raw).unwrap()
}

/// Catch-all page with no keys; mounted last so explicit pages win
async fn mount_empty_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nothing here</html>"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_harvest_walks_pages_until_keys_run_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("page", "1"))
        .and(query_param("status", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "<html>{MARKER} <td>{}</td><td>{}</td></html>",
            key('a'),
            key('b')
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("<html><td>{}</td></html>", key('c'))),
        )
        .mount(&server)
        .await;
    mount_empty_pages(&server).await;

    let scraper = PageScraper::new(config_for(&server));
    let mut found = BTreeSet::new();
    scraper.harvest(&mut found).await.unwrap();

    let keys: Vec<String> = found.into_iter().collect();
    assert_eq!(keys, vec![key('a'), key('b'), key('c')]);
}

#[tokio::test]
async fn test_harvest_fails_login_check_without_marker() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("<html>please sign in {}</html>", key('a'))),
        )
        .mount(&server)
        .await;

    let scraper = PageScraper::new(config_for(&server));
    let mut found = BTreeSet::new();
    let result = scraper.harvest(&mut found).await;

    assert!(matches!(result, Err(ScraperError::LoginFailed { .. })));
    // The login check runs before extraction; nothing is harvested.
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_harvest_treats_error_pages_as_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "<html>{MARKER} <td>{}</td></html>",
            key('a')
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_empty_pages(&server).await;

    let scraper = PageScraper::new(config_for(&server));
    let mut found = BTreeSet::new();
    scraper.harvest(&mut found).await.unwrap();

    assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![key('a')]);
}

#[tokio::test]
async fn test_harvest_dedupes_across_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "<html>{MARKER} <td>{}</td></html>",
            key('a')
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("<html><td>{}</td></html>", key('a'))),
        )
        .mount(&server)
        .await;
    mount_empty_pages(&server).await;

    let scraper = PageScraper::new(config_for(&server));
    let mut found = BTreeSet::new();
    scraper.harvest(&mut found).await.unwrap();

    assert_eq!(found.len(), 1);
}
