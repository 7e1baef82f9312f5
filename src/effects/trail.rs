use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::{create_html_element, set_style};
use crate::error::EffectError;
use crate::motion::trail::{dot_css, TrailQueue};

/// Cursor trail. Faded dots stay attached until they are evicted by newer
/// ones or the trail is uninstalled.
pub struct CursorTrail {
    _listener: EventListener,
    dots: Rc<RefCell<TrailQueue<HtmlElement>>>,
}

impl CursorTrail {
    pub fn install(
        document: &Document,
        capacity: usize,
        fade_delay_ms: u32,
    ) -> Result<Self, EffectError> {
        let body = document.body().ok_or(EffectError::MissingElement("body"))?;
        let dots = Rc::new(RefCell::new(TrailQueue::new(capacity)));

        let owner = document.clone();
        let queue = dots.clone();
        let listener = EventListener::new(document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let dot = match create_html_element(&owner, "div") {
                Ok(dot) => dot,
                Err(err) => {
                    tracing::debug!(%err, "trail dot not created");
                    return;
                }
            };
            if dot
                .set_attribute("style", &dot_css(event.client_x(), event.client_y()))
                .is_err()
            {
                return;
            }

            let admitted = queue.borrow_mut().admit(dot.clone(), |dot| {
                match body.append_child(dot) {
                    Ok(_) => true,
                    Err(err) => {
                        tracing::debug!(err = ?err, "trail dot not attached");
                        false
                    }
                }
            });
            match admitted {
                Ok(Some(oldest)) => oldest.remove(),
                Ok(None) => {}
                Err(_) => return,
            }

            Timeout::new(fade_delay_ms, move || {
                set_style(&dot, "opacity", "0");
                set_style(&dot, "transform", "scale(0)");
            })
            .forget();
        });

        Ok(Self {
            _listener: listener,
            dots,
        })
    }
}

impl Drop for CursorTrail {
    fn drop(&mut self) {
        for dot in self.dots.borrow_mut().drain() {
            dot.remove();
        }
    }
}
