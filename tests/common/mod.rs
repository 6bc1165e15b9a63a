#![allow(dead_code)]

use httpmock::prelude::*;
use serde_json::{json, Value};
use scout_cves::config::ScoutConfig;

pub const GRAPHQL_PATH: &str = "/v1/graphql";
pub const TOKEN: &str = "dckr_pat_test_token";

pub fn config_for(server: &MockServer) -> ScoutConfig {
    ScoutConfig {
        organization: Some("acme".into()),
        token: Some(TOKEN.into()),
        endpoint: server.url(GRAPHQL_PATH),
        ..Default::default()
    }
}

pub fn image(digest: &str, repo: &str) -> Value {
    json!({ "digest": digest, "repository": { "hostName": "hub.docker.com", "repoName": repo } })
}

pub fn stream_page(items: Vec<Value>, total_count: usize) -> Value {
    json!({ "data": { "streamImages": { "items": items, "paging": { "totalCount": total_count } } } })
}

pub fn vuln(id: &str, severity: &str, epss: Option<f64>) -> Value {
    json!({
        "sourceId": id,
        "description": format!("{} description", id),
        "cvss": { "severity": severity, "score": 7.5 },
        "epss": epss.map(|score| json!({ "score": score, "percentile": 0.9 }))
    })
}

pub fn vulnerabilities(packages: Vec<Vec<Value>>) -> Value {
    let packages: Vec<Value> = packages
        .into_iter()
        .enumerate()
        .map(|(i, vulns)| json!({ "purl": format!("pkg:generic/dep{}@1.0", i), "vulnerabilities": vulns }))
        .collect();
    json!({ "data": { "imageVulnerabilitiesByDigest": { "vulnerabilities": packages } } })
}
