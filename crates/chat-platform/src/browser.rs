//! Small DOM helpers: file download and colour-scheme detection.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use chat_types::{ChatError, Result, config::Theme};

fn js_err(e: wasm_bindgen::JsValue) -> ChatError {
    ChatError::JsInterop(format!("{:?}", e))
}

/// Offer `content` to the user as a plain-text file named `filename`.
pub fn download_text(filename: &str, content: &str) -> Result<()> {
    let window = web_sys::window()
        .ok_or_else(|| ChatError::JsInterop("No window object".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ChatError::JsInterop("No document".to_string()))?;

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let options = BlobPropertyBag::new();
    options.set_type("text/plain;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| ChatError::JsInterop("Element is not an anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(js_err)?;
    log::info!("Exported {} ({} bytes)", filename, content.len());
    Ok(())
}

/// The browser's `prefers-color-scheme`, if it can be read.
pub fn system_theme() -> Option<Theme> {
    let query = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()??;
    Some(if query.matches() { Theme::Dark } else { Theme::Light })
}
