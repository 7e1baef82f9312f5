use thiserror::Error;

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no {0} element")]
    MissingElement(&'static str),
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl EffectError {
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn js(context: &'static str, value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::JSON::stringify(&value)
                    .ok()
                    .and_then(|text| text.as_string())
            })
            .unwrap_or_else(|| "unknown JavaScript error".to_string());

        Self::Js { context, message }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("typewriter needs at least one non-empty phrase")]
    NoPhrases,
}
