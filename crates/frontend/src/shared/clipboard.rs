//! Copying text to the system clipboard via the Web Clipboard API.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the clipboard, invoking `on_success` when the browser
/// accepts the write. The clipboard is best-effort; failures are ignored.
pub fn copy_to_clipboard<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            if wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                .await
                .is_ok()
            {
                on_success();
            }
        }
    });
}
