//! Read a submitted `<form>` the way the browser's `FormData` sees it.
//!
//! Requires a browser environment; only compiled with `hydrate`.

use wasm_bindgen::JsValue;

/// All successful controls of `form` as `(name, value)` in document order.
///
/// Non-string entries (file inputs) are skipped.
///
/// # Errors
///
/// Returns the browser's error text if `FormData` cannot be built or iterated.
pub fn form_entries(form: &web_sys::HtmlFormElement) -> Result<Vec<(String, String)>, String> {
    let data = web_sys::FormData::new_with_form(form).map_err(js_error)?;
    let Some(iter) = js_sys::try_iter(&data).map_err(js_error)? else {
        return Err("FormData is not iterable".to_owned());
    };

    let mut entries = Vec::new();
    for item in iter {
        let pair = js_sys::Array::from(&item.map_err(js_error)?);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            entries.push((name, value));
        }
    }
    Ok(entries)
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
