//! Attach Message to Jira Issue modal
//!
//! MVVM split as elsewhere in the webapp:
//! - state.rs: plain form state and its transitions
//! - view_model.rs: signals, submit/close commands
//! - view.rs: Leptos component (pure UI)

mod state;
mod view;
mod view_model;

pub use state::{submit_label, FormState};
pub use view::AttachIssueModal;
pub use view_model::{
    AttachIssueViewModel, CreateFuture, CreateIssueFn, SubmitOutcome, MISSING_POST_MESSAGE,
};
