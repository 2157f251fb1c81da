use super::state::submit_label;
use super::view_model::{AttachIssueViewModel, CreateIssueFn};
use crate::domain::a001_jira_issue::ui::issue_selector::IssueSelector;
use crate::shared::modal::Modal;
use crate::shared::theme::{modal_body_style, modal_footer_style};
use contracts::domain::a003_chat_context::{PluginTheme, Post, Team};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::{Button, ButtonAppearance, ButtonType, Textarea};

/// Modal that attaches a chat message to an existing Jira issue.
#[component]
pub fn AttachIssueModal(
    /// Called after the modal reset itself (cancel, Escape, successful attach)
    close: Callback<()>,
    /// Sends the attach request
    create: CreateIssueFn,
    /// Message being attached
    #[prop(into)]
    post: Signal<Option<Post>>,
    #[prop(into)]
    current_team: Signal<Team>,
    #[prop(into)]
    theme: Signal<PluginTheme>,
    #[prop(into)]
    visible: Signal<bool>,
) -> impl IntoView {
    let vm = AttachIssueViewModel::new();

    Effect::new(move |prev: Option<bool>| {
        let now = visible.get();
        if prev != Some(now) {
            vm.on_visibility_change(now);
        }
        now
    });

    let handle_close = Callback::new(move |_| vm.on_close(close));

    // Kept out of the reactive closures below, which must be `Send`.
    let create = StoredValue::new_local(create);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let validator = vm.validator();
        let post = post.get_untracked();
        let team = current_team.get_untracked();
        let create = create.with_value(Rc::clone);
        spawn_local(async move {
            vm.submit(&validator, post, team, create, close).await;
        });
    };

    let submitting = Signal::derive(move || vm.form.with(|f| f.submitting));
    let message = RwSignal::new(String::new());
    Effect::new(move |_| {
        message.set(post.get().map(|p| p.message).unwrap_or_default());
    });

    move || {
        if !visible.get() {
            return None;
        }
        Some(view! {
            <Modal
                title="Attach Message to Jira Issue"
                on_close=handle_close
                modal_class="modal--scroll modal--large"
            >
                <form role="form" on:submit=handle_submit>
                    <div class="modal-body" style=move || modal_body_style(&theme.get())>
                        <IssueSelector
                            state=vm.selector
                            on_change=Callback::new(move |value| vm.on_issue_key_change(value))
                            search_terms=Signal::derive(move || vm.form.with(|f| f.text_search_terms.clone()))
                            on_search_terms_change=Callback::new(move |terms| vm.on_search_terms_change(terms))
                            error=Signal::derive(move || vm.form.with(|f| f.error.clone()))
                            theme=theme
                        />
                        <div class="form__group">
                            <label class="form__label">{"Message Attached to Jira Issue"}</label>
                            <Textarea value=message attr:readonly=true attr:rows=5 />
                        </div>
                    </div>
                    <div class="modal-footer" style=modal_footer_style()>
                        <Button
                            button_type=ButtonType::Button
                            appearance=ButtonAppearance::Transparent
                            on_click=move |_| handle_close.run(())
                        >
                            {"Cancel"}
                        </Button>
                        <Button
                            button_type=ButtonType::Submit
                            appearance=ButtonAppearance::Primary
                            loading=submitting
                            disabled=submitting
                        >
                            {move || submit_label(submitting.get())}
                        </Button>
                    </div>
                </form>
            </Modal>
        })
    }
}
