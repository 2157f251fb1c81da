pub mod global_context;
pub mod modal_service;

pub use global_context::HostContext;
pub use modal_service::AttachIssueModalService;
