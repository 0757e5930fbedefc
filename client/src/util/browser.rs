//! Location and clipboard access.

/// Page URL without query or fragment, used as the base of share links.
pub fn current_base_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return String::new();
        };
        match (location.origin(), location.pathname()) {
            (Ok(origin), Ok(path)) => format!("{origin}{path}"),
            _ => String::new(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns a description of the failure when there is no window or the
/// browser refuses the write (for example, outside a secure context).
pub async fn copy_text(text: String) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let promise = window.navigator().clipboard().write_text(&text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("clipboard unavailable".to_owned())
    }
}
