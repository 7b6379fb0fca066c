//! Shared fixtures for the integration tests

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const RELEASES_PATH: &str = "/repos/yafatek/mxp-protocol/releases";

/// A release record shaped like the GitHub releases API returns it
pub fn github_release(tag: &str, published_at: &str, body: &str) -> Value {
    json!({
        "url": format!("https://api.github.com/repos/yafatek/mxp-protocol/releases/{tag}"),
        "html_url": format!("https://github.com/yafatek/mxp-protocol/releases/tag/{tag}"),
        "id": 1,
        "tag_name": tag,
        "name": format!("MXP {tag}"),
        "draft": false,
        "prerelease": false,
        "created_at": published_at,
        "published_at": published_at,
        "author": { "login": "mxp-bot" },
        "assets": [],
        "body": body
    })
}

/// Starts a server answering the releases path with `response`
pub async fn releases_server(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RELEASES_PATH))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), RELEASES_PATH)
}
