use contracts::domain::a002_attach_comment::AttachCommentRequest;
use contracts::shared::error::AttachIssueError;
use gloo_net::http::Request;
use std::rc::Rc;

use super::ui::modal::CreateIssueFn;
use crate::shared::api_utils::{api_url, with_plugin_headers};

/// Attach a chat message as a comment on an existing Jira issue
pub async fn attach_comment_to_issue(request: AttachCommentRequest) -> Result<(), AttachIssueError> {
    let response = with_plugin_headers(Request::post(&api_url("/attach-comment-to-issue")))
        .json(&request)
        .map_err(|e| AttachIssueError::Transport(format!("failed to encode request: {}", e)))?
        .send()
        .await
        .map_err(|e| AttachIssueError::Transport(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AttachIssueError::from_response(status, &body))
}

/// Create operation wired to the plugin server, for hosts that do not supply their own.
pub fn plugin_create_fn() -> CreateIssueFn {
    Rc::new(|request| Box::pin(attach_comment_to_issue(request)))
}
