mod common;

use common::*;
use httpmock::prelude::*;
use scout_cves::errors::ScoutError;
use scout_cves::graphql::ScoutClient;
use scout_cves::models::Severity;
use scout_cves::reporting::generate_report_data;

#[tokio::test]
async fn test_end_to_end_single_image() {
    let server = MockServer::start_async().await;
    let images = server
        .mock_async(|when, then| {
            when.method(POST).path(GRAPHQL_PATH).body_contains("streamImages");
            then.status(200).json_body(stream_page(vec![image("sha256:abc", "x")], 1));
        })
        .await;
    let vulns = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GRAPHQL_PATH)
                .body_contains("imageVulnerabilitiesByDigest")
                .json_body_partial(r#"{"variables":{"organization":"acme","digest":"sha256:abc"}}"#);
            then.status(200).json_body(vulnerabilities(vec![vec![
                vuln("CVE-1", "HIGH", Some(0.42)),
                vuln("CVE-2", "LOW", None),
            ]]));
        })
        .await;

    let config = config_for(&server);
    let client = ScoutClient::new(&config).unwrap();
    let results = generate_report_data(&client, &config).await.unwrap();

    images.assert_hits_async(1).await;
    vulns.assert_hits_async(1).await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].cve_id, "CVE-1");
    assert_eq!(results[0].digest, "sha256:abc");
    assert_eq!(results[0].repo_name, "x");
    assert_eq!(results[0].severity, Severity::High);
    assert_eq!(results[0].epss_score, Some(0.42));
    assert_eq!(results[0].summary, "CVE-1 description");
}

#[tokio::test]
async fn test_pagination_over_http() {
    let server = MockServer::start_async().await;
    let first: Vec<_> = (0..25).map(|i| image(&format!("sha256:{:03}", i), "app")).collect();
    let second: Vec<_> = (25..30).map(|i| image(&format!("sha256:{:03}", i), "app")).collect();

    let page_one = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GRAPHQL_PATH)
                .body_contains(r#""variables":{"organization":"acme","pageSize":25}"#);
            then.status(200).json_body(stream_page(first, 30));
        })
        .await;
    let page_two = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GRAPHQL_PATH)
                .body_contains("streamImages")
                .json_body_partial(r#"{"variables":{"page":2}}"#);
            then.status(200).json_body(stream_page(second, 30));
        })
        .await;
    let vulns = server
        .mock_async(|when, then| {
            when.method(POST).path(GRAPHQL_PATH).body_contains("imageVulnerabilitiesByDigest");
            then.status(200).json_body(vulnerabilities(vec![vec![vuln("CVE-2024-3094", "CRITICAL", None)]]));
        })
        .await;

    let config = config_for(&server);
    let client = ScoutClient::new(&config).unwrap();
    let results = generate_report_data(&client, &config).await.unwrap();

    page_one.assert_hits_async(1).await;
    page_two.assert_hits_async(1).await;
    vulns.assert_hits_async(30).await;
    assert_eq!(results.len(), 30);
    assert_eq!(results[0].digest, "sha256:000");
    assert_eq!(results[29].digest, "sha256:029");
}

#[tokio::test]
async fn test_empty_organization_is_no_data() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GRAPHQL_PATH).body_contains("streamImages");
            then.status(200).json_body(stream_page(vec![], 0));
        })
        .await;
    let vulns = server
        .mock_async(|when, then| {
            when.method(POST).path(GRAPHQL_PATH).body_contains("imageVulnerabilitiesByDigest");
            then.status(200).json_body(vulnerabilities(vec![]));
        })
        .await;

    let config = config_for(&server);
    let client = ScoutClient::new(&config).unwrap();
    let result = generate_report_data(&client, &config).await;

    assert!(matches!(result, Err(ScoutError::NoData(_))));
    assert_eq!(vulns.hits_async().await, 0);
}

#[tokio::test]
async fn test_unauthorized_aborts_assembly() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GRAPHQL_PATH);
            then.status(401);
        })
        .await;

    let config = config_for(&server);
    let client = ScoutClient::new(&config).unwrap();
    let result = generate_report_data(&client, &config).await;
    assert!(matches!(result, Err(ScoutError::Authentication(_))));
}
