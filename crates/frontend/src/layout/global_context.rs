use super::modal_service::AttachIssueModalService;
use crate::shared::theme::ThemeContext;
use contracts::domain::a003_chat_context::{PluginTheme, Team};
use leptos::prelude::*;
use std::cell::RefCell;

/// Everything the chat client hands the plugin: the modal, current team and theme.
#[derive(Clone, Copy)]
pub struct HostContext {
    pub modal: AttachIssueModalService,
    pub team: RwSignal<Team>,
    pub theme: ThemeContext,
}

impl HostContext {
    pub fn new() -> Self {
        Self {
            modal: AttachIssueModalService::new(),
            team: RwSignal::new(Team::default()),
            theme: ThemeContext::new(PluginTheme::default()),
        }
    }

    pub fn set_team(&self, team: Team) {
        log::debug!("Current team is now `{}`", team.name);
        self.team.set(team);
    }
}

impl Default for HostContext {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static HOST: RefCell<Option<HostContext>> = const { RefCell::new(None) };
}

/// Register the context the `wasm_bindgen` entry points talk to.
///
/// Only the first context is kept; returns `false` if one was already installed.
pub fn install_host(ctx: HostContext) -> bool {
    HOST.with(|host| {
        let mut host = host.borrow_mut();
        if host.is_some() {
            return false;
        }
        *host = Some(ctx);
        true
    })
}

/// The installed context, if `start` has run.
pub fn host() -> Option<HostContext> {
    HOST.with(|host| *host.borrow())
}
