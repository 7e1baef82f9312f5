use gloo::events::EventListener;
use web_sys::{Document, Window};

const LOADED_CLASS: &str = "loaded";

pub fn announce() {
    tracing::info!("👋 Welcome to my portfolio!");
    tracing::info!("Built with passion by Harinath Annavarapu");
    tracing::info!("Interested in collaborating? Let's connect!");
}

/// Marks `body` once the page has finished loading. If that already happened
/// before the effects were installed the class is added right away.
pub fn install_load_marker(window: &Window, document: &Document) -> Option<EventListener> {
    if document.ready_state() == "complete" {
        mark_loaded(document);
        return None;
    }

    let document = document.clone();
    Some(EventListener::once(window, "load", move |_| {
        mark_loaded(&document);
    }))
}

fn mark_loaded(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    if body.class_list().add_1(LOADED_CLASS).is_ok() {
        tracing::info!("✅ Portfolio loaded successfully!");
    }
}
