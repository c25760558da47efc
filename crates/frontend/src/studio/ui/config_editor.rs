//! Collapsible editor for the provider/model/credential configuration.
//!
//! Every edit is written straight through the controller, which persists the
//! record to localStorage before the signal updates.

use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use crate::studio::controller::use_studio;
use leptos::prelude::*;

#[component]
pub fn ConfigEditor() -> impl IntoView {
    let studio = use_studio();
    let open = RwSignal::new(false);

    let provider = Signal::derive(move || studio.config.get().provider);
    let model = Signal::derive(move || studio.config.get().model);
    let api_key = Signal::derive(move || studio.config.get().api_key);

    let set_provider = Callback::new(move |value: String| {
        let mut config = studio.config.get_untracked();
        config.provider = value;
        studio.update_config(config);
    });
    let set_model = Callback::new(move |value: String| {
        let mut config = studio.config.get_untracked();
        config.model = value;
        studio.update_config(config);
    });
    let set_api_key = Callback::new(move |value: String| {
        let mut config = studio.config.get_untracked();
        config.api_key = value;
        studio.update_config(config);
    });

    view! {
        <section class="sidebar__section">
            <button
                class="sidebar__section-header"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("settings")}
                <span>"Model Settings"</span>
            </button>
            <Show when=move || open.get()>
                <Select
                    label="Provider"
                    value=provider
                    options=vec![("google", "Google Gemini"), ("openai", "OpenAI")]
                    on_change=set_provider
                />
                <Input
                    label="Model"
                    value=model
                    on_input=set_model
                    placeholder="gemini-2.0-flash"
                />
                <Input
                    label="API Key"
                    value=api_key
                    on_input=set_api_key
                    input_type="password"
                    placeholder="Paste your key"
                />
            </Show>
        </section>
    }
}
