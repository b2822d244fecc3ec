use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Offer `text` as a file download through a temporary object URL.
pub fn download_text(filename: &str, text: &str, mime: &str) -> Result<(), String> {
    let document = gloo_utils::document();

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "blob: failed to create".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "url: create_object_url failed".to_string())?;

    let a = document
        .create_element("a")
        .map_err(|_| "document: create_element failed".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "document: anchor cast failed".to_string())?;

    a.set_href(&url);
    a.set_download(filename);

    // Some browsers ignore clicks on anchors outside the document
    let body = gloo_utils::body();
    body.append_child(&a)
        .map_err(|_| "body: append_child failed".to_string())?;
    a.click();
    let _ = body.remove_child(&a);

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

/// Current time as an ISO-8601 string, from the browser clock.
pub fn today_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}
