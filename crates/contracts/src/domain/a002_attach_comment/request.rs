use serde::{Deserialize, Serialize};

/// Body of `POST /attach-comment-to-issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachCommentRequest {
    pub post_id: String,
    pub current_team: String,
    #[serde(rename = "issueKey")]
    pub issue_key: String,
}

impl AttachCommentRequest {
    /// The key is sent exactly as the form holds it.
    pub fn new(
        post_id: impl Into<String>,
        current_team: impl Into<String>,
        issue_key: impl Into<String>,
    ) -> Self {
        Self {
            post_id: post_id.into(),
            current_team: current_team.into(),
            issue_key: issue_key.into(),
        }
    }
}
