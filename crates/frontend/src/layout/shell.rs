//! Responsive two-pane layout: collapsible sidebar with the input panel,
//! main pane with the viewer.
//!
//! What the main pane renders is derived from (status, current artifact):
//! loading without a result shows the full-screen indicator, any state with a
//! result keeps the preview up (including refine-in-progress and errors), and
//! everything else is the call-to-action empty state.

use crate::layout::error_toast::ErrorToast;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::viewport;
use crate::studio::controller::use_studio;
use crate::studio::ui::{InputPanel, PreviewPanel};
use contracts::studio::GenerationStatus;
use leptos::prelude::*;

#[component]
pub fn Shell() -> impl IntoView {
    let studio = use_studio();
    let session = studio.session;

    let status = move || session.with(|s| s.status());
    let has_current = move || session.with(|s| s.current().is_some());

    view! {
        <div class="app">
            <aside class=move || {
                if studio.sidebar_open.get() {
                    "app__sidebar"
                } else {
                    "app__sidebar app__sidebar--closed"
                }
            }>
                <InputPanel />
            </aside>

            <main class="app__main">
                <button
                    class="app__sidebar-toggle"
                    title=move || {
                        if studio.sidebar_open.get() { "Hide sidebar" } else { "Show sidebar" }
                    }
                    on:click=move |_| studio.toggle_sidebar()
                >
                    {move || icon(if studio.sidebar_open.get() { "panel-close" } else { "panel-open" })}
                </button>

                <ErrorToast />

                {move || {
                    if has_current() {
                        view! { <PreviewPanel /> }.into_any()
                    } else if status() == GenerationStatus::Loading {
                        view! { <LoadingState /> }.into_any()
                    } else {
                        view! { <EmptyState /> }.into_any()
                    }
                }}
            </main>
        </div>
    }
}

/// Full-screen indicator for a generate call without a previous result.
#[component]
fn LoadingState() -> impl IntoView {
    let studio = use_studio();

    view! {
        <div class="state state--loading">
            <div class="state__spinner"></div>
            <h3 class="state__title">"Generating Vectors"</h3>
            <p class="state__hint">
                {move || format!("Using {}...", studio.config.get().display_name())}
            </p>
        </div>
    }
}

/// Call-to-action shown while there is nothing to display.
#[component]
fn EmptyState() -> impl IntoView {
    let studio = use_studio();

    view! {
        <div class="state state--empty">
            <div class="state__frame">"+"</div>
            <h2 class="state__title">"Ready to Create"</h2>
            <p class="state__hint">
                {if viewport::is_narrow() {
                    "Tap the menu button to start designing."
                } else {
                    "Use the panel on the left to describe your idea or upload a reference image."
                }}
            </p>
            <Show when=|| viewport::is_narrow()>
                <Button on_click=Callback::new(move |_| studio.open_sidebar())>
                    "Start Creating"
                </Button>
            </Show>
        </div>
    }
}
