use serde::{Deserialize, Serialize};

/// Chat message being attached to an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub message: String,
}

/// Team the user is currently viewing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_ignores_unknown_fields() {
        let post: Post = serde_json::from_str(
            r#"{"id":"p1","message":"hello","channel_id":"c1","create_at":1}"#,
        )
        .unwrap();
        assert_eq!(post.id, "p1");
        assert_eq!(post.message, "hello");
    }
}
