use super::issue_key::IssueKey;
use serde::{Deserialize, Serialize};

/// Fields requested from Jira for every search hit.
pub const SEARCH_FIELDS: &str = "key,summary";

/// Query string for `GET /get-search-issues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSearchQuery {
    pub jql: String,
    pub fields: String,
    pub q: String,
}

impl IssueSearchQuery {
    /// Build a search for free text typed into the selector.
    ///
    /// Returns `None` for blank input. A term that is itself an issue key also
    /// matches that issue directly, so pasting `PROJ-12` finds it even when the
    /// text index does not.
    pub fn for_term(term: &str) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }

        let text_clause = format!("text ~ \"{}\"", escape_jql(term));
        let jql = match IssueKey::parse(term) {
            Ok(key) => format!("issueKey IN ({key}) OR {text_clause} ORDER BY updated DESC"),
            Err(_) => format!("{text_clause} ORDER BY updated DESC"),
        };

        Some(Self {
            jql,
            fields: SEARCH_FIELDS.to_string(),
            q: term.to_string(),
        })
    }
}

fn escape_jql(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: String,
}

/// Search hit as returned by the Jira REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

impl JiraIssue {
    /// Option label shown in the selector, e.g. `PROJ-1: Broken login`.
    pub fn label(&self) -> String {
        if self.fields.summary.is_empty() {
            self.key.clone()
        } else {
            format!("{}: {}", self.key, self.fields.summary)
        }
    }
}
