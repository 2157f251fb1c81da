pub mod a001_jira_issue;
pub mod a002_attach_comment;
pub mod a003_chat_context;
