use super::state::FormState;
use crate::domain::a001_jira_issue::ui::issue_selector::IssueSelectorState;
use crate::shared::validator::Validator;
use contracts::domain::a001_jira_issue::IssueKey;
use contracts::domain::a002_attach_comment::AttachCommentRequest;
use contracts::domain::a003_chat_context::{Post, Team};
use contracts::shared::error::AttachIssueError;
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

pub type CreateFuture = Pin<Box<dyn Future<Output = Result<(), AttachIssueError>>>>;

/// Create operation supplied by the modal's owner.
pub type CreateIssueFn = Rc<dyn Fn(AttachCommentRequest) -> CreateFuture>;

pub const MISSING_POST_MESSAGE: &str = "There is no message to attach.";

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field failed validation; nothing was sent.
    Invalid,
    /// A request was already in flight; nothing was sent.
    AlreadySubmitting,
    MissingPost,
    Attached,
    Failed(String),
    /// The modal was reset while the request was in flight; its result was dropped.
    Stale,
}

/// ViewModel for the attach-to-issue form
#[derive(Clone, Copy)]
pub struct AttachIssueViewModel {
    pub form: RwSignal<FormState>,
    pub selector: IssueSelectorState,
    /// Bumped on every reset; a create result is applied only if it still matches.
    generation: RwSignal<u64>,
}

impl AttachIssueViewModel {
    pub fn new() -> Self {
        let form = RwSignal::new(FormState::default());
        let value = Signal::derive(move || form.with(|f| f.issue_key.clone()));
        Self {
            form,
            selector: IssueSelectorState::new(value, true),
            generation: RwSignal::new(0),
        }
    }

    /// Validity providers of this form.
    pub fn validator(&self) -> Validator {
        Validator::new().with_field(self.selector)
    }

    pub fn on_issue_key_change(&self, new_value: Option<String>) {
        self.form.update(|f| f.issue_key = new_value);
    }

    pub fn on_search_terms_change(&self, terms: String) {
        self.form.update(|f| f.text_search_terms = terms);
    }

    /// Back to defaults; any in-flight create result will be dropped.
    pub fn reset(&self) {
        self.form.update(FormState::reset);
        self.selector.reset();
        self.generation.update(|g| *g += 1);
    }

    pub fn on_visibility_change(&self, visible: bool) {
        if visible {
            self.reset();
        }
    }

    pub fn on_close(&self, close: Callback<()>) {
        self.reset();
        close.run(());
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get_untracked() == generation
    }

    /// Validate, send the create request and apply its result.
    pub async fn submit(
        &self,
        validator: &Validator,
        post: Option<Post>,
        team: Team,
        create: CreateIssueFn,
        close: Callback<()>,
    ) -> SubmitOutcome {
        if self.form.with_untracked(|f| f.submitting) {
            return SubmitOutcome::AlreadySubmitting;
        }

        if !validator.validate() {
            return SubmitOutcome::Invalid;
        }

        let key = self
            .form
            .with_untracked(|f| f.issue_key.clone())
            .filter(|key| IssueKey::is_valid(key));
        let Some(key) = key else {
            return SubmitOutcome::Invalid;
        };

        let Some(post) = post else {
            self.form
                .update(|f| f.error = Some(MISSING_POST_MESSAGE.to_string()));
            return SubmitOutcome::MissingPost;
        };

        let request = AttachCommentRequest::new(post.id, team.name, key.clone());
        let generation = self.generation.get_untracked();
        self.form.update(|f| {
            f.start_submit();
        });

        let result = create(request).await;

        if !self.is_current(generation) {
            log::debug!("Dropped attach result for {}: modal was closed", key);
            return SubmitOutcome::Stale;
        }

        match result {
            Ok(()) => {
                self.on_close(close);
                SubmitOutcome::Attached
            }
            Err(e) => {
                let message = e.to_string();
                log::warn!("Failed to attach message to {}: {}", key, message);
                self.form.update(|f| f.fail_submit(message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }
}

impl Default for AttachIssueViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn post() -> Option<Post> {
        Some(Post {
            id: "post1".to_string(),
            message: "Login page is down".to_string(),
        })
    }

    fn team() -> Team {
        Team {
            name: "team-a".to_string(),
        }
    }

    fn counting_close() -> (Callback<()>, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let close = Callback::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (close, count)
    }

    fn recording_create(
        result: Result<(), AttachIssueError>,
    ) -> (CreateIssueFn, Rc<RefCell<Vec<AttachCommentRequest>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorded = calls.clone();
        let create: CreateIssueFn = Rc::new(move |request| {
            recorded.borrow_mut().push(request);
            let result = result.clone();
            Box::pin(async move { result })
        });
        (create, calls)
    }

    #[test]
    fn test_invalid_selector_does_not_call_create() {
        let vm = AttachIssueViewModel::new();
        let (create, calls) = recording_create(Ok(()));
        let (close, closed) = counting_close();

        let outcome = block_on(vm.submit(&vm.validator(), post(), team(), create, close));

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(calls.borrow().is_empty());
        assert_eq!(closed.load(Ordering::SeqCst), 0);
        assert_eq!(vm.form.get_untracked(), FormState::default());
        assert!(vm.selector.validation_error.get_untracked().is_some());
    }

    #[test]
    fn test_valid_submit_calls_create_once_and_closes() {
        let vm = AttachIssueViewModel::new();
        vm.on_issue_key_change(Some("PROJ-12".to_string()));
        vm.on_search_terms_change("login".to_string());
        let (create, calls) = recording_create(Ok(()));
        let (close, closed) = counting_close();

        let outcome = block_on(vm.submit(&vm.validator(), post(), team(), create, close));

        assert_eq!(outcome, SubmitOutcome::Attached);
        assert_eq!(
            *calls.borrow(),
            vec![AttachCommentRequest {
                post_id: "post1".to_string(),
                current_team: "team-a".to_string(),
                issue_key: "PROJ-12".to_string(),
            }]
        );
        assert_eq!(closed.load(Ordering::SeqCst), 1);
        assert_eq!(vm.form.get_untracked(), FormState::default());
    }

    #[test]
    fn test_request_carries_key_as_selected() {
        let vm = AttachIssueViewModel::new();
        vm.on_issue_key_change(Some("proj-12".to_string()));
        let (create, calls) = recording_create(Ok(()));
        let (close, _) = counting_close();

        let outcome = block_on(vm.submit(&vm.validator(), post(), team(), create, close));

        assert_eq!(outcome, SubmitOutcome::Attached);
        assert_eq!(calls.borrow()[0].issue_key, "proj-12");
    }

    #[test]
    fn test_failed_create_keeps_modal_open() {
        let vm = AttachIssueViewModel::new();
        vm.on_issue_key_change(Some("PROJ-12".to_string()));
        let (create, _) = recording_create(Err(AttachIssueError::Rejected {
            message: "Issue is closed".to_string(),
        }));
        let (close, closed) = counting_close();

        let outcome = block_on(vm.submit(&vm.validator(), post(), team(), create, close));

        assert_eq!(outcome, SubmitOutcome::Failed("Issue is closed".to_string()));
        let form = vm.form.get_untracked();
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("Issue is closed"));
        assert_eq!(form.issue_key.as_deref(), Some("PROJ-12"));
        assert_eq!(closed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_second_submit_while_submitting_is_ignored() {
        let vm = AttachIssueViewModel::new();
        vm.on_issue_key_change(Some("PROJ-12".to_string()));
        vm.form.update(|f| f.submitting = true);
        let (create, calls) = recording_create(Ok(()));
        let (close, _) = counting_close();

        let outcome = block_on(vm.submit(&vm.validator(), post(), team(), create, close));

        assert_eq!(outcome, SubmitOutcome::AlreadySubmitting);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_missing_post_sets_error() {
        let vm = AttachIssueViewModel::new();
        vm.on_issue_key_change(Some("PROJ-12".to_string()));
        let (create, calls) = recording_create(Ok(()));
        let (close, _) = counting_close();

        let outcome = block_on(vm.submit(&vm.validator(), None, team(), create, close));

        assert_eq!(outcome, SubmitOutcome::MissingPost);
        assert!(calls.borrow().is_empty());
        assert_eq!(
            vm.form.get_untracked().error.as_deref(),
            Some(MISSING_POST_MESSAGE)
        );
        assert!(!vm.form.get_untracked().submitting);
    }

    #[test]
    fn test_result_after_close_is_dropped() {
        let vm = AttachIssueViewModel::new();
        vm.on_issue_key_change(Some("PROJ-12".to_string()));
        let (close, closed) = counting_close();

        // The user cancels while the request is in flight, then it fails.
        let create: CreateIssueFn = Rc::new(move |_| {
            Box::pin(async move {
                vm.on_close(close);
                Err(AttachIssueError::Transport("timeout".to_string()))
            })
        });

        let outcome = block_on(vm.submit(&vm.validator(), post(), team(), create, close));

        assert_eq!(outcome, SubmitOutcome::Stale);
        assert_eq!(vm.form.get_untracked(), FormState::default());
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_close_resets_before_callback() {
        let vm = AttachIssueViewModel::new();
        vm.on_issue_key_change(Some("PROJ-12".to_string()));
        vm.form.update(|f| f.error = Some("boom".to_string()));

        let seen = Arc::new(std::sync::Mutex::new(None));
        let seen_in_close = seen.clone();
        let form = vm.form;
        let close = Callback::new(move |_| {
            *seen_in_close.lock().unwrap() = Some(form.get_untracked());
        });

        vm.on_close(close);
        vm.on_close(close);

        assert_eq!(*seen.lock().unwrap(), Some(FormState::default()));
        assert_eq!(vm.form.get_untracked(), FormState::default());
    }

    #[test]
    fn test_issue_key_change_updates_only_key() {
        let vm = AttachIssueViewModel::new();
        vm.on_search_terms_change("login".to_string());
        vm.form.update(|f| f.error = Some("boom".to_string()));
        let before = vm.form.get_untracked();

        vm.on_issue_key_change(Some("PROJ-4".to_string()));

        let after = vm.form.get_untracked();
        assert_eq!(
            after,
            FormState {
                issue_key: Some("PROJ-4".to_string()),
                ..before
            }
        );
    }

    #[test]
    fn test_opening_resets_state() {
        let vm = AttachIssueViewModel::new();
        vm.on_issue_key_change(Some("PROJ-4".to_string()));
        vm.on_visibility_change(false);
        assert_eq!(vm.form.get_untracked().issue_key.as_deref(), Some("PROJ-4"));

        vm.on_visibility_change(true);
        assert_eq!(vm.form.get_untracked(), FormState::default());
    }
}
