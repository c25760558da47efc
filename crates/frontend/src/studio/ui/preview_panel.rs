//! Viewer for the current artifact: rendered markup, copy/download actions
//! and the refine bar.

use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::components::ui::{Button, Textarea};
use crate::shared::date_utils::format_full_time;
use crate::shared::download::download_svg;
use crate::shared::icons::icon;
use crate::studio::controller::use_studio;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long the copy button shows its confirmation check mark.
const COPY_FEEDBACK_MS: u32 = 1500;

#[component]
pub fn PreviewPanel() -> impl IntoView {
    let studio = use_studio();
    let refine_text = RwSignal::new(String::new());
    let copied = RwSignal::new(false);

    let current = move || studio.session.with(|s| s.current().cloned());
    let is_loading = move || studio.session.with(|s| s.status().is_loading());

    let handle_refine = Callback::new(move |_: ()| {
        let instruction = refine_text.get_untracked();
        let instruction = instruction.trim();
        if instruction.is_empty() {
            return;
        }
        refine_text.set(String::new());
        studio.refine(instruction.to_string());
    });

    view! {
        {move || {
            current()
                .map(|artifact| {
                    let copy_content = artifact.content.clone();
                    let download_content = artifact.content.clone();
                    let download_name = artifact.download_filename();

                    let handle_copy = Callback::new(move |_: leptos::ev::MouseEvent| {
                        copy_to_clipboard(&copy_content, move || {
                            copied.set(true);
                            spawn_local(async move {
                                TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                                copied.set(false);
                            });
                        });
                    });
                    let handle_download = Callback::new(move |_: leptos::ev::MouseEvent| {
                        if let Err(e) = download_svg(&download_content, &download_name) {
                            log::warn!("download failed: {}", e);
                        }
                    });

                    view! {
                        <div class="preview">
                            <header class="preview__header">
                                <div class="preview__meta">
                                    <h3 class="preview__label">{artifact.prompt_label.clone()}</h3>
                                    <span class="preview__time">
                                        {format_full_time(&artifact.created_at)}
                                    </span>
                                </div>
                                <div class="preview__actions">
                                    <Button
                                        variant="ghost"
                                        title="Copy SVG markup"
                                        on_click=handle_copy
                                    >
                                        {move || icon(if copied.get() { "check" } else { "copy" })}
                                    </Button>
                                    <Button
                                        variant="ghost"
                                        title="Download as .svg"
                                        on_click=handle_download
                                    >
                                        {icon("download")}
                                    </Button>
                                </div>
                            </header>

                            <div class="preview__canvas" inner_html=artifact.content.clone()></div>

                            <Show when=is_loading>
                                <div class="preview__overlay">
                                    <div class="state__spinner"></div>
                                    <span>"Refining..."</span>
                                </div>
                            </Show>

                            <footer class="preview__refine">
                                <Textarea
                                    value=refine_text
                                    on_input=Callback::new(move |value| refine_text.set(value))
                                    on_submit=handle_refine
                                    placeholder="Refine this vector... (Ctrl+Enter)"
                                    rows=2
                                    disabled=Signal::derive(is_loading)
                                />
                                <Button
                                    disabled=Signal::derive(is_loading)
                                    on_click=Callback::new(move |_| handle_refine.run(()))
                                >
                                    {icon("sparkles")}
                                    " Refine"
                                </Button>
                            </footer>
                        </div>
                    }
                })
        }}
    }
}
