pub mod issue_selector;
