use contracts::domain::a001_jira_issue::{IssueSearchQuery, JiraIssue};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, with_plugin_headers};

/// Search Jira issues through the plugin server
pub async fn search_issues(query: &IssueSearchQuery) -> Result<Vec<JiraIssue>, String> {
    let query_string =
        serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;
    let url = format!("{}?{}", api_url("/get-search-issues"), query_string);

    let response = with_plugin_headers(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Search failed: HTTP {}", response.status()));
    }

    response
        .json::<Vec<JiraIssue>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
