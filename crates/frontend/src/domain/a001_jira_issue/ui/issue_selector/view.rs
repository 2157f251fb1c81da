use super::view_model::IssueSelectorState;
use crate::shared::icons::icon;
use crate::shared::theme::error_text_style;
use contracts::domain::a003_chat_context::PluginTheme;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

/// Picks the Jira issue a message is attached to.
///
/// Free text is searched against the plugin server; a typed issue key can be
/// picked directly with Enter.
#[component]
pub fn IssueSelector(
    /// Selector state; also registered with the form's validator
    state: IssueSelectorState,
    /// Called with the picked key, or `None` when cleared
    on_change: Callback<Option<String>>,
    /// Current text of the search box
    #[prop(into)]
    search_terms: Signal<String>,
    /// Called on every edit of the search box
    on_search_terms_change: Callback<String>,
    /// Error from the last submit, shown under the field
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(into)]
    theme: Signal<PluginTheme>,
) -> impl IntoView {
    Effect::new(move |_| {
        let term = search_terms.get();
        spawn_local(state.search(term));
    });

    let select = move |key: String| {
        on_change.run(Some(key));
        state.on_selected();
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        // Keep Enter from submitting the surrounding form while searching.
        ev.prevent_default();
        if let Some(key) = IssueSelectorState::typed_key(&search_terms.get_untracked()) {
            select(key.to_string());
        }
    };

    let shown_error = move || {
        state
            .validation_error
            .get()
            .or_else(|| error.get())
            .or_else(|| state.search_error.get())
    };

    view! {
        <div class="form__group jira-issue-selector">
            <label class="form__label" for="jira-issue-search">
                {"Jira Issue"}
                {state.required.then(|| view! { <span class="form__required">{"*"}</span> })}
            </label>

            {move || state.value.get().map(|key| view! {
                <div class="jira-issue-selector__value">
                    <span>{key}</span>
                    <button
                        type="button"
                        class="button button--icon"
                        aria-label="Clear"
                        on:click=move |_| on_change.run(None)
                    >
                        {icon("x")}
                    </button>
                </div>
            })}

            <div class="jira-issue-selector__search">
                {icon("search")}
                <input
                    type="text"
                    id="jira-issue-search"
                    class="form__input"
                    autocomplete="off"
                    placeholder="Search for issues containing text..."
                    prop:value=move || search_terms.get()
                    on:input=move |ev| on_search_terms_change.run(event_target_value(&ev))
                    on:keydown=handle_keydown
                />
                <Show when=move || state.loading.get()>
                    <Spinner />
                </Show>
            </div>

            <Show when=move || !state.suggestions.get().is_empty()>
                <ul class="jira-issue-selector__options" role="listbox">
                    {move || state.suggestions.get().into_iter().map(|issue| {
                        let label = issue.label();
                        let key = issue.key;
                        view! {
                            <li
                                class="jira-issue-selector__option"
                                role="option"
                                on:click=move |_| select(key.clone())
                            >
                                {label}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>

            {move || shown_error().map(|e| view! {
                <div class="form__error" style=move || error_text_style(&theme.get())>{e}</div>
            })}
        </div>
    }
}
