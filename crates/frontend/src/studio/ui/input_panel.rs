//! Sidebar input panel: prompt, reference image, model settings and history.

use super::config_editor::ConfigEditor;
use super::history_list::HistoryList;
use crate::shared::components::ui::{Button, Textarea};
use crate::shared::icons::icon;
use crate::studio::controller::use_studio;
use contracts::studio::{GenerationRequest, ImagePayload};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

const FILE_INPUT_ID: &str = "reference-image-input";

/// Reference image staged for the next generate call.
#[derive(Clone, PartialEq, Eq)]
struct UploadedImage {
    payload: ImagePayload,
    filename: String,
}

#[component]
pub fn InputPanel() -> impl IntoView {
    let studio = use_studio();
    let prompt = RwSignal::new(String::new());
    let image: RwSignal<Option<UploadedImage>> = RwSignal::new(None);

    let is_loading = move || studio.session.with(|s| s.status().is_loading());

    let handle_generate = Callback::new(move |_: ()| {
        let request = GenerationRequest {
            prompt: prompt.get_untracked(),
            image: image.get_untracked().map(|upload| upload.payload),
        };
        studio.generate(request);
    });

    // Read the selected file into a base64 data URL, then stage it.
    let handle_file_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        let filename = file.name();

        let Ok(reader) = web_sys::FileReader::new() else {
            log::warn!("FileReader is not available");
            return;
        };
        let reader_handle = reader.clone();
        let onload = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let url = reader_handle.result().ok().and_then(|v| v.as_string());
            match url.as_deref().and_then(ImagePayload::from_data_url) {
                Some(payload) => image.set(Some(UploadedImage {
                    payload,
                    filename: filename.clone(),
                })),
                None => log::warn!("selected file did not produce a base64 data URL"),
            }
        }) as Box<dyn FnMut(_)>);
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        if reader.read_as_data_url(&file).is_err() {
            log::warn!("failed to read the selected file");
        }
        // Allow re-selecting the same file later.
        input.set_value("");
    };

    let open_file_picker = Callback::new(move |_: leptos::ev::MouseEvent| {
        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(FILE_INPUT_ID))
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
        {
            input.click();
        }
    });

    view! {
        <div class="sidebar">
            <header class="sidebar__brand">
                {icon("sparkles")}
                <h1 class="sidebar__title">"Vectora Studio"</h1>
            </header>

            <section class="sidebar__section">
                <Textarea
                    label="Describe your vector"
                    value=prompt
                    on_input=Callback::new(move |value| prompt.set(value))
                    on_submit=handle_generate
                    placeholder="A minimalist fox logo, flat colors... (Ctrl+Enter)"
                    rows=4
                    disabled=Signal::derive(is_loading)
                />

                <input
                    type="file"
                    id=FILE_INPUT_ID
                    accept="image/png,image/jpeg,image/webp"
                    style="display: none;"
                    on:change=handle_file_change
                />

                {move || {
                    image
                        .get()
                        .map(|upload| {
                            view! {
                                <div class="sidebar__attachment">
                                    {icon("image")}
                                    <span class="sidebar__attachment-name">{upload.filename}</span>
                                    <button
                                        class="sidebar__attachment-remove"
                                        title="Remove image"
                                        on:click=move |_| image.set(None)
                                    >
                                        {icon("close")}
                                    </button>
                                </div>
                            }
                        })
                }}

                <div class="sidebar__actions">
                    <Button
                        variant="secondary"
                        title="Attach a reference image"
                        disabled=Signal::derive(is_loading)
                        on_click=open_file_picker
                    >
                        {icon("image")}
                        " Image"
                    </Button>
                    <Button
                        disabled=Signal::derive(is_loading)
                        on_click=Callback::new(move |_| handle_generate.run(()))
                    >
                        {icon("sparkles")}
                        {move || if is_loading() { " Generating..." } else { " Generate" }}
                    </Button>
                </div>
            </section>

            <ConfigEditor />
            <HistoryList />
        </div>
    }
}
