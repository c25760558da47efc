use crate::layout::Shell;
use crate::studio::controller::StudioController;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the StudioController to the whole app via context. It loads
    // the persisted model configuration on construction.
    provide_context(StudioController::new());

    view! {
        <Shell />
    }
}
