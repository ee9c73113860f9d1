//! Integration tests for the auto-pagination engine.
//!
//! These tests run a synthetic API server with wiremock and drive the
//! eager, lazy and callback traversals across multiple pages, checking
//! completeness, ordering, limits and terminal states.

use std::ops::ControlFlow;

use futures::TryStreamExt;
use relay_api::rest::ListOptions;
use relay_api::{AccountSid, AuthToken, Client, HostUrl, RelayConfig};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT_SID: &str = "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
const RECORDS_PATH: &str = "/v1/Accounts/ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Usage/Records";

/// Builds a client whose stable API host points at the mock server.
fn client_for(server: &MockServer) -> Client {
    let config = RelayConfig::builder()
        .account_sid(AccountSid::new(ACCOUNT_SID).unwrap())
        .auth_token(AuthToken::new("auth-token").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .preview_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Client::new(config)
}

/// One usage record payload with a recognizable category.
fn record(n: usize) -> Value {
    json!({
        "account_sid": ACCOUNT_SID,
        "category": format!("category-{n}"),
        "count": n.to_string(),
        "count_unit": "events",
        "usage": n.to_string(),
        "usage_unit": "events"
    })
}

/// A list response body for the given page of records.
fn page_body(
    server_uri: &str,
    page: u64,
    records: Vec<Value>,
    next_token: Option<&str>,
    previous_token: Option<&str>,
) -> Value {
    let base = format!("{server_uri}{RECORDS_PATH}");
    json!({
        "records": records,
        "meta": {
            "page": page,
            "page_size": 2,
            "first_page_url": format!("{base}?PageSize=2&Page=0"),
            "previous_page_url": previous_token.map(|t| format!("{base}?PageSize=2&PageToken={t}")),
            "next_page_url": next_token.map(|t| format!("{base}?PageSize=2&PageToken={t}")),
            "url": format!("{base}?PageSize=2&Page={page}"),
            "key": "records"
        }
    })
}

/// Mounts three pages holding five records: [0, 1], [2, 3], [4].
///
/// Page 0 answers requests carrying `PageSize=2`; the following pages match
/// on their opaque `PageToken`, the way real cursor URLs do.
async fn mount_five_records(server: &MockServer) {
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .and(query_param("PageSize", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&uri, 0, vec![record(0), record(1)], Some("pg1"), None)),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .and(query_param("PageToken", "pg1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            &uri,
            1,
            vec![record(2), record(3)],
            Some("pg2"),
            Some("pg0"),
        )))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .and(query_param("PageToken", "pg2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            &uri,
            2,
            vec![record(4)],
            None,
            Some("pg1"),
        )))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_returns_all_records_in_server_order() {
    let server = MockServer::start().await;
    mount_five_records(&server).await;
    let client = client_for(&server);

    let records = client
        .account()
        .usage()
        .records()
        .list(Default::default(), ListOptions::new().page_size(2))
        .await
        .unwrap();

    assert_eq!(records.len(), 5);
    let categories: Vec<_> = records
        .iter()
        .map(|r| r.category.clone().unwrap())
        .collect();
    assert_eq!(
        categories,
        vec![
            "category-0",
            "category-1",
            "category-2",
            "category-3",
            "category-4"
        ]
    );
}

#[tokio::test]
async fn test_stream_visits_the_same_records_in_the_same_order() {
    let server = MockServer::start().await;
    mount_five_records(&server).await;
    let client = client_for(&server);

    let records = client.account().usage().records();
    let stream = records.stream(Default::default(), ListOptions::new().page_size(2));
    futures::pin_mut!(stream);

    let mut categories = Vec::new();
    while let Some(record) = stream.try_next().await.unwrap() {
        categories.push(record.category.clone().unwrap());
    }

    assert_eq!(
        categories,
        vec![
            "category-0",
            "category-1",
            "category-2",
            "category-3",
            "category-4"
        ]
    );
}

#[tokio::test]
async fn test_list_with_limit_truncates_without_error() {
    let server = MockServer::start().await;
    mount_five_records(&server).await;
    let client = client_for(&server);

    let records = client
        .account()
        .usage()
        .records()
        .list(Default::default(), ListOptions::new().page_size(2).limit(3))
        .await
        .unwrap();

    assert_eq!(records.len(), 3);
    let categories: Vec<_> = records
        .iter()
        .map(|r| r.category.clone().unwrap())
        .collect();
    assert_eq!(categories, vec!["category-0", "category-1", "category-2"]);
}

#[tokio::test]
async fn test_empty_terminal_page_yields_no_instances_and_no_error() {
    let server = MockServer::start().await;
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_body(&uri, 0, vec![], None, None)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let records = client.account().usage().records();

    let all = records
        .list(Default::default(), ListOptions::new())
        .await
        .unwrap();
    assert!(all.is_empty());

    // each() terminates cleanly as well, without invoking the callback
    let mut calls = 0;
    records
        .each(Default::default(), ListOptions::new(), |_, _| {
            calls += 1;
            ControlFlow::Continue(())
        })
        .await
        .unwrap();
    assert_eq!(calls, 0);
}

#[tokio::test]
async fn test_each_delivers_remaining_counts_under_a_limit() {
    let server = MockServer::start().await;
    mount_five_records(&server).await;
    let client = client_for(&server);

    let mut seen = Vec::new();
    client
        .account()
        .usage()
        .records()
        .each(
            Default::default(),
            ListOptions::new().page_size(2).limit(4),
            |record, remaining| {
                seen.push((record.category.clone().unwrap(), remaining));
                ControlFlow::Continue(())
            },
        )
        .await
        .unwrap();

    assert_eq!(
        seen,
        vec![
            ("category-0".to_string(), Some(3)),
            ("category-1".to_string(), Some(2)),
            ("category-2".to_string(), Some(1)),
            ("category-3".to_string(), Some(0)),
        ]
    );
}

#[tokio::test]
async fn test_each_callback_can_terminate_early() {
    let server = MockServer::start().await;
    mount_five_records(&server).await;
    let client = client_for(&server);

    let mut seen = 0;
    client
        .account()
        .usage()
        .records()
        .each(
            Default::default(),
            ListOptions::new().page_size(2),
            |_, _| {
                seen += 1;
                if seen == 2 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            },
        )
        .await
        .unwrap();

    assert_eq!(seen, 2);
}

#[tokio::test]
async fn test_page_navigation_follows_stored_urls() {
    let server = MockServer::start().await;
    mount_five_records(&server).await;
    let client = client_for(&server);

    let records = client.account().usage().records();
    let first = records.page(&Default::default(), Some(2)).await.unwrap();

    assert_eq!(first.len(), 2);
    assert!(first.has_more());
    assert_eq!(first.meta().page, 0);
    assert_eq!(first.meta().key, "records");

    let second = first.next_page().await.unwrap().unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(second.meta().page, 1);

    let third = second.next_page().await.unwrap().unwrap();
    assert_eq!(third.len(), 1);
    assert!(!third.has_more());

    // Advancing past the last page is the no-op sentinel, not an error
    assert!(third.next_page().await.unwrap().is_none());

    // And the previous link walks back
    let back = third.previous_page().await.unwrap().unwrap();
    assert_eq!(back.meta().page, 1);
}

#[tokio::test]
async fn test_page_reflects_what_the_server_returned_not_the_hint() {
    let server = MockServer::start().await;
    let uri = server.uri();

    // The server ignores the hint and returns three records
    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .and(query_param("PageSize", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            &uri,
            0,
            vec![record(0), record(1), record(2)],
            None,
            None,
        )))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .account()
        .usage()
        .records()
        .page(&Default::default(), Some(50))
        .await
        .unwrap();

    assert_eq!(page.len(), 3);
}

#[tokio::test]
async fn test_stream_is_restartable_per_call() {
    let server = MockServer::start().await;
    mount_five_records(&server).await;
    let client = client_for(&server);

    let records = client.account().usage().records();

    for _ in 0..2 {
        let stream = records.stream(Default::default(), ListOptions::new().page_size(2));
        futures::pin_mut!(stream);

        // Each call starts over from the first page
        let first = stream.try_next().await.unwrap().unwrap();
        assert_eq!(first.category.as_deref(), Some("category-0"));
    }
}
