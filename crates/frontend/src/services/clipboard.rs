//! Clipboard access

use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Copy `text` to the system clipboard.
///
/// Fails silently: a missing window or a denied permission only shows up
/// in the debug log.
pub fn copy_to_clipboard(text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let promise = window.navigator().clipboard().write_text(text);
    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            tracing::debug!(?err, "clipboard write rejected");
        }
    });
}
