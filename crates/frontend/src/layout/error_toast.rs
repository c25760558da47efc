use crate::shared::icons::icon;
use crate::studio::controller::use_studio;
use leptos::prelude::*;

/// Transient error notification over the main pane.
///
/// Visible exactly while the session carries an error; the controller's
/// timer auto-dismisses it after 3 seconds, the close button does so
/// immediately. Either way the session settles back to the last good state.
#[component]
pub fn ErrorToast() -> impl IntoView {
    let studio = use_studio();
    let error = move || studio.session.with(|s| s.error().cloned());

    view! {
        {move || {
            error()
                .map(|err| {
                    view! {
                        <div class="toast toast--error">
                            <span class="toast__icon">{icon("alert")}</span>
                            <div class="toast__body">
                                <h4 class="toast__title">{err.message}</h4>
                                <p class="toast__details">{err.details}</p>
                            </div>
                            <button
                                class="toast__dismiss"
                                title="Dismiss"
                                on:click=move |_| studio.session.update(|s| s.dismiss_error())
                            >
                                {icon("close")}
                            </button>
                        </div>
                    }
                })
        }}
    }
}
