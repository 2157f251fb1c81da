use contracts::domain::a001_jira_issue::{IssueKey, IssueSearchQuery, JiraIssue};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::domain::a001_jira_issue::api;
use crate::shared::validator::Validate;

/// Delay between the last keystroke and the search request.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_KEY_MESSAGE: &str = "Invalid issue key.";

/// Check a selector value. `Err` carries the message shown under the field.
pub fn check_value(required: bool, value: Option<&str>) -> Result<(), &'static str> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None if required => Err(REQUIRED_MESSAGE),
        None => Ok(()),
        Some(v) if IssueKey::is_valid(v) => Ok(()),
        Some(_) => Err(INVALID_KEY_MESSAGE),
    }
}

/// State of the issue selector, owned by the form that renders it.
///
/// Also the selector's validity provider: the form adds it to its
/// [`Validator`](crate::shared::validator::Validator).
#[derive(Clone, Copy)]
pub struct IssueSelectorState {
    pub required: bool,
    pub value: Signal<Option<String>>,
    pub validation_error: RwSignal<Option<String>>,
    pub suggestions: RwSignal<Vec<JiraIssue>>,
    pub loading: RwSignal<bool>,
    pub search_error: RwSignal<Option<String>>,
    search_seq: RwSignal<u64>,
}

impl IssueSelectorState {
    pub fn new(value: Signal<Option<String>>, required: bool) -> Self {
        Self {
            required,
            value,
            validation_error: RwSignal::new(None),
            suggestions: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            search_error: RwSignal::new(None),
            search_seq: RwSignal::new(0),
        }
    }

    /// Clear everything the selector shows, e.g. when the form is reset.
    pub fn reset(&self) {
        self.validation_error.set(None);
        self.suggestions.set(Vec::new());
        self.loading.set(false);
        self.search_error.set(None);
        // Drops any search still in flight.
        self.search_seq.update(|seq| *seq += 1);
    }

    /// A value was picked; a pending required-field message no longer applies.
    pub fn on_selected(&self) {
        self.validation_error.set(None);
        self.suggestions.set(Vec::new());
    }

    /// Parse a term typed into the search box as a key the user can pick directly.
    pub fn typed_key(term: &str) -> Option<IssueKey> {
        IssueKey::parse(term).ok()
    }

    /// Start a new search and return its sequence number.
    pub fn begin_search(&self) -> u64 {
        let mut next = 0;
        self.search_seq.update(|seq| {
            *seq += 1;
            next = *seq;
        });
        next
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.search_seq.get_untracked() == seq
    }

    /// Apply a search response unless a newer search has started since.
    pub fn apply_search_result(&self, seq: u64, result: Result<Vec<JiraIssue>, String>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.loading.set(false);
        match result {
            Ok(issues) => {
                self.suggestions.set(issues);
                self.search_error.set(None);
            }
            Err(e) => {
                log::warn!("Jira issue search failed: {}", e);
                self.suggestions.set(Vec::new());
                self.search_error.set(Some(e));
            }
        }
        true
    }

    /// Debounced search for the text typed into the selector.
    pub async fn search(self, term: String) {
        let seq = self.begin_search();
        TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
        if !self.is_current(seq) {
            return;
        }

        let Some(query) = IssueSearchQuery::for_term(&term) else {
            self.apply_search_result(seq, Ok(Vec::new()));
            return;
        };

        self.loading.set(true);
        let result = api::search_issues(&query).await;
        if !self.apply_search_result(seq, result) {
            log::debug!("Dropped stale search results for `{}`", term);
        }
    }
}

impl Validate for IssueSelectorState {
    fn validate(&self) -> bool {
        let value = self.value.get_untracked();
        match check_value(self.required, value.as_deref()) {
            Ok(()) => {
                self.validation_error.set(None);
                true
            }
            Err(message) => {
                self.validation_error.set(Some(message.to_string()));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_jira_issue::IssueFields;

    fn issue(key: &str) -> JiraIssue {
        JiraIssue {
            key: key.to_string(),
            fields: IssueFields::default(),
        }
    }

    #[test]
    fn test_check_value() {
        assert_eq!(check_value(true, None), Err(REQUIRED_MESSAGE));
        assert_eq!(check_value(true, Some("  ")), Err(REQUIRED_MESSAGE));
        assert_eq!(check_value(false, None), Ok(()));
        assert_eq!(check_value(true, Some("PROJ-1")), Ok(()));
        assert_eq!(check_value(false, Some("not a key")), Err(INVALID_KEY_MESSAGE));
    }

    #[test]
    fn test_validate_sets_and_clears_message() {
        let value = RwSignal::new(None::<String>);
        let state = IssueSelectorState::new(value.into(), true);

        assert!(!state.validate());
        assert_eq!(
            state.validation_error.get_untracked().as_deref(),
            Some(REQUIRED_MESSAGE)
        );

        value.set(Some("PROJ-3".to_string()));
        assert!(state.validate());
        assert_eq!(state.validation_error.get_untracked(), None);
    }

    #[test]
    fn test_stale_search_result_is_dropped() {
        let state = IssueSelectorState::new(RwSignal::new(None::<String>).into(), true);
        let first = state.begin_search();
        let second = state.begin_search();

        assert!(!state.apply_search_result(first, Ok(vec![issue("OLD-1")])));
        assert!(state.suggestions.get_untracked().is_empty());

        assert!(state.apply_search_result(second, Ok(vec![issue("NEW-1")])));
        assert_eq!(state.suggestions.get_untracked(), vec![issue("NEW-1")]);
    }

    #[test]
    fn test_search_error_is_shown() {
        let state = IssueSelectorState::new(RwSignal::new(None::<String>).into(), false);
        let seq = state.begin_search();
        state.loading.set(true);

        assert!(state.apply_search_result(seq, Err("Search failed: HTTP 500".to_string())));
        assert!(!state.loading.get_untracked());
        assert_eq!(
            state.search_error.get_untracked().as_deref(),
            Some("Search failed: HTTP 500")
        );
    }

    #[test]
    fn test_reset_invalidates_pending_search() {
        let state = IssueSelectorState::new(RwSignal::new(None::<String>).into(), true);
        let seq = state.begin_search();
        state.validation_error.set(Some(REQUIRED_MESSAGE.to_string()));

        state.reset();
        assert!(!state.is_current(seq));
        assert_eq!(state.validation_error.get_untracked(), None);
    }

    #[test]
    fn test_typed_key() {
        assert_eq!(
            IssueSelectorState::typed_key("abc-9").map(|k| k.to_string()),
            Some("ABC-9".to_string())
        );
        assert!(IssueSelectorState::typed_key("login bug").is_none());
    }
}
