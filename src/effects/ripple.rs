use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

use super::{create_html_element, query_all, set_style};
use crate::error::EffectError;
use crate::motion::ripple::{Rect, Ripple, RIPPLE_KEYFRAMES};

const BUTTONS: &str = ".btn";
const KEYFRAMES_STYLE_ID: &str = "portfolio-fx-ripple";

/// Adds the shared `@keyframes ripple` rule once per document.
pub fn inject_keyframes(document: &Document) -> Result<(), EffectError> {
    if document.get_element_by_id(KEYFRAMES_STYLE_ID).is_some() {
        return Ok(());
    }

    let head = document.head().ok_or(EffectError::MissingElement("head"))?;
    let style = create_html_element(document, "style")?;
    style.set_id(KEYFRAMES_STYLE_ID);
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    head.append_child(&style)
        .map_err(|err| EffectError::js("appendChild", err))?;
    Ok(())
}

pub fn install(document: &Document, duration_ms: u32) -> Vec<EventListener> {
    query_all(document, BUTTONS)
        .into_iter()
        .map(|button| {
            let owner = document.clone();
            let host = button.clone();
            EventListener::new(&button, "click", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let bounds = host.get_bounding_client_rect();
                let ripple = Ripple::at(
                    Rect {
                        left: bounds.left(),
                        top: bounds.top(),
                        width: bounds.width(),
                        height: bounds.height(),
                    },
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                );

                let overlay = match create_html_element(&owner, "span") {
                    Ok(overlay) => overlay,
                    Err(err) => {
                        tracing::debug!(%err, "ripple not created");
                        return;
                    }
                };
                if overlay.set_attribute("style", &ripple.css(duration_ms)).is_err() {
                    return;
                }

                set_style(&host, "position", "relative");
                set_style(&host, "overflow", "hidden");
                if host.append_child(&overlay).is_err() {
                    return;
                }

                let delay_ms = Ripple::removal_delay_ms(duration_ms);
                Timeout::new(delay_ms, move || overlay.remove()).forget();
            })
        })
        .collect()
}
