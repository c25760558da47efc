//! Session history, newest first. Selecting an entry brings it back into the
//! viewer without a network call.

use crate::shared::date_utils::format_history_time;
use crate::shared::icons::icon;
use crate::studio::controller::use_studio;
use leptos::prelude::*;

#[component]
pub fn HistoryList() -> impl IntoView {
    let studio = use_studio();
    let entries = move || studio.session.with(|s| s.history().to_vec());
    let current_id = move || studio.session.with(|s| s.current().map(|a| a.id));

    view! {
        <section class="sidebar__section sidebar__section--history">
            <div class="sidebar__section-header">
                {icon("history")}
                <span>"History"</span>
            </div>
            <Show
                when=move || !entries().is_empty()
                fallback=|| {
                    view! { <p class="history__empty">"Nothing generated yet."</p> }
                }
            >
                <ul class="history">
                    <For each=entries key=|artifact| artifact.id let:artifact>
                        {
                            let id = artifact.id;
                            view! {
                                <li>
                                    <button
                                        class=move || {
                                            if current_id() == Some(id) {
                                                "history__item history__item--active"
                                            } else {
                                                "history__item"
                                            }
                                        }
                                        on:click=move |_| studio.select_from_history(id)
                                    >
                                        <span class="history__label">
                                            {artifact.prompt_label.clone()}
                                        </span>
                                        <span class="history__time">
                                            {format_history_time(&artifact.created_at)}
                                        </span>
                                    </button>
                                </li>
                            }
                        }
                    </For>
                </ul>
            </Show>
        </section>
    }
}
