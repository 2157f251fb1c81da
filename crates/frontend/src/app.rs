use crate::domain::a002_attach_comment::api::plugin_create_fn;
use crate::domain::a002_attach_comment::ui::modal::AttachIssueModal;
use crate::layout::HostContext;
use leptos::prelude::*;

#[component]
pub fn App(host: HostContext) -> impl IntoView {
    provide_context(host);
    provide_context(host.modal);
    provide_context(host.theme);

    let modal = host.modal;

    view! {
        <AttachIssueModal
            close=Callback::new(move |_| modal.close())
            create=plugin_create_fn()
            post=modal.post()
            current_team=host.team
            theme=host.theme.theme
            visible=modal.visible()
        />
    }
}
