use contracts::domain::a003_chat_context::Post;
use leptos::prelude::*;

/// Visibility of the Attach Message to Jira Issue modal and the post it is open for.
#[derive(Clone, Copy)]
pub struct AttachIssueModalService {
    visible: RwSignal<bool>,
    post: RwSignal<Option<Post>>,
}

impl AttachIssueModalService {
    pub fn new() -> Self {
        Self {
            visible: RwSignal::new(false),
            post: RwSignal::new(None),
        }
    }

    /// Show the modal for a post
    pub fn open(&self, post: Post) {
        log::debug!("Opening attach modal for post {}", post.id);
        self.post.set(Some(post));
        self.visible.set(true);
    }

    /// Hide the modal; the post is forgotten with it
    pub fn close(&self) {
        self.visible.set(false);
        self.post.set(None);
    }

    pub fn visible(&self) -> Signal<bool> {
        self.visible.into()
    }

    pub fn post(&self) -> Signal<Option<Post>> {
        self.post.into()
    }
}

impl Default for AttachIssueModalService {
    fn default() -> Self {
        Self::new()
    }
}
