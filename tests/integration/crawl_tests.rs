//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and drive the
//! crawl loop end-to-end against them.

use arxiv_harvest::config::{Config, CrawlerConfig};
use arxiv_harvest::crawler::{run_crawl, Coordinator, HttpFetcher};
use arxiv_harvest::state::StopReason;
use arxiv_harvest::storage::{read_link_log, FsPageStore, PageStore};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Listing page whose next-page control points at `next` (if any)
fn listing_page(label: &str, next: Option<&str>) -> String {
    let nav = match next {
        Some(href) => format!(
            r#"<nav class="pagination"><a class="pagination-next" href="{}">Next</a></nav>"#,
            href
        ),
        None => String::new(),
    };
    format!(
        r#"<html><body>{nav}<ol><li class="arxiv-result"><p class="title">{label}</p></li></ol></body></html>"#
    )
}

/// Writes the seed page and returns a config pointing at the mock server
fn create_test_config(tmp: &TempDir, origin: &str, seed: &str) -> Config {
    let seed_path = tmp.path().join("1.html");
    std::fs::write(&seed_path, seed).unwrap();

    Config {
        crawler: CrawlerConfig {
            seed_page: seed_path.to_string_lossy().into_owned(),
            output_dir: tmp.path().join("pages").to_string_lossy().into_owned(),
            link_log: tmp.path().join("page_links.txt").to_string_lossy().into_owned(),
            site_origin: origin.to_string(),
            delay_ms: 10, // Very short for testing
            user_agent: "TestBot/1.0".to_string(),
            request_timeout_secs: Some(5),
        },
        ..Config::default()
    }
}

fn stored_pages(tmp: &TempDir) -> Vec<String> {
    FsPageStore::new(tmp.path().join("pages"))
        .list_pages("html")
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[tokio::test]
async fn test_full_crawl_follows_page_chain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let tmp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/search/"))
        .and(query_param("start", "50"))
        .and(header("user-agent", "TestBot/1.0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(listing_page("two", Some("/search/?query=q-bio&amp;amp;start=100"))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/"))
        .and(query_param("start", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page("three", None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(
        &tmp,
        &base_url,
        &listing_page("one", Some("/search/?query=q-bio&amp;amp;start=50")),
    );

    let summary = run_crawl(&config).await.expect("crawl should succeed");

    assert_eq!(summary.stop_reason, StopReason::NoNextPage);
    assert!(summary.is_complete());
    assert_eq!(summary.pages_stored, 3);
    assert_eq!(
        stored_pages(&tmp),
        vec!["page_0001.html", "page_0002.html", "page_0003.html"]
    );

    let expected_links = vec![
        format!("{}/search/?query=q-bio&start=50", base_url),
        format!("{}/search/?query=q-bio&start=100", base_url),
    ];
    assert_eq!(summary.visited_links, expected_links);
    assert_eq!(
        read_link_log(&tmp.path().join("page_links.txt")).unwrap(),
        expected_links
    );

    let third = std::fs::read_to_string(tmp.path().join("pages").join("page_0003.html")).unwrap();
    assert_eq!(third, listing_page("three", None));
}

#[tokio::test]
async fn test_seed_page_is_copied_verbatim() {
    let mock_server = MockServer::start().await;
    let tmp = TempDir::new().unwrap();
    let seed = "<html><body>  seed with   odd spacing &amp; no next link </body></html>";

    let config = create_test_config(&tmp, &mock_server.uri(), seed);
    let summary = run_crawl(&config).await.unwrap();

    assert_eq!(summary.pages_stored, 1);
    assert!(summary.visited_links.is_empty());
    assert_eq!(
        std::fs::read_to_string(tmp.path().join("pages").join("page_0001.html")).unwrap(),
        seed
    );
    assert_eq!(
        std::fs::read_to_string(tmp.path().join("page_links.txt")).unwrap(),
        ""
    );

    let received = mock_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_non_200_status_stops_crawl() {
    let mock_server = MockServer::start().await;
    let tmp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/p2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page("two", Some("/p3"))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/p3"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&tmp, &mock_server.uri(), &listing_page("one", Some("/p2")));
    let summary = run_crawl(&config).await.unwrap();

    assert_eq!(summary.stop_reason, StopReason::HttpStatus(503));
    assert_eq!(summary.pages_stored, 2);
    assert_eq!(stored_pages(&tmp), vec!["page_0001.html", "page_0002.html"]);
    assert_eq!(
        read_link_log(&tmp.path().join("page_links.txt")).unwrap(),
        vec![
            format!("{}/p2", mock_server.uri()),
            format!("{}/p3", mock_server.uri())
        ]
    );
}

#[tokio::test]
async fn test_other_success_codes_are_not_success() {
    let mock_server = MockServer::start().await;
    let tmp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/p2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&tmp, &mock_server.uri(), &listing_page("one", Some("/p2")));
    let summary = run_crawl(&config).await.unwrap();

    assert_eq!(summary.stop_reason, StopReason::HttpStatus(204));
    assert_eq!(stored_pages(&tmp), vec!["page_0001.html"]);
}

#[tokio::test]
async fn test_unmatched_route_404_stops_crawl() {
    let mock_server = MockServer::start().await;
    let tmp = TempDir::new().unwrap();

    let config = create_test_config(&tmp, &mock_server.uri(), &listing_page("one", Some("/missing")));
    let summary = run_crawl(&config).await.unwrap();

    assert_eq!(summary.stop_reason, StopReason::HttpStatus(404));
    assert_eq!(summary.pages_stored, 1);
}

#[tokio::test]
async fn test_transport_error_stops_crawl() {
    let tmp = TempDir::new().unwrap();

    // Reserve a port, then release it so nothing is listening there
    let origin = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let config = create_test_config(&tmp, &origin, &listing_page("one", Some("/p2")));
    let summary = run_crawl(&config).await.unwrap();

    assert!(matches!(summary.stop_reason, StopReason::Transport(_)));
    assert_eq!(summary.pages_stored, 1);
    assert_eq!(summary.visited_links, vec![format!("{}/p2", origin)]);
}

#[tokio::test]
async fn test_coordinator_with_explicit_parts() {
    let mock_server = MockServer::start().await;
    let tmp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/p2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page("two", None)))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&tmp, &mock_server.uri(), &listing_page("one", Some("/p2")));
    let fetcher = HttpFetcher::from_config(&config.crawler).unwrap();
    let store = FsPageStore::create(tmp.path().join("pages")).unwrap();

    let mut coordinator = Coordinator::new(config.crawler.clone(), fetcher, store);
    let summary = coordinator.run().await.unwrap();

    assert_eq!(summary.pages_stored, 2);
    assert_eq!(coordinator.store().list_pages("html").unwrap().len(), 2);
}
