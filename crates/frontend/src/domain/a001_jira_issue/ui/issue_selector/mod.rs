//! Jira issue selector
//!
//! - view_model.rs: selector state, search sequencing, validation
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::IssueSelector;
pub use view_model::{check_value, IssueSelectorState, INVALID_KEY_MESSAGE, REQUIRED_MESSAGE};
