pub mod issue_key;
pub mod search;

pub use issue_key::{IssueKey, IssueKeyError};
pub use search::{IssueFields, IssueSearchQuery, JiraIssue};
