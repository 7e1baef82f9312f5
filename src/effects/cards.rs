use gloo::events::EventListener;
use web_sys::Document;

use super::{query_all, set_style};

const PROJECT_CARDS: &str = ".project-card";
const LIFTED: &str = "translateY(-10px) scale(1.02)";
const RESTING: &str = "translateY(0) scale(1)";

pub fn install(document: &Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    for card in query_all(document, PROJECT_CARDS) {
        let hovered = card.clone();
        listeners.push(EventListener::new(&card, "mouseenter", move |_| {
            set_style(&hovered, "transform", LIFTED);
        }));

        let left = card.clone();
        listeners.push(EventListener::new(&card, "mouseleave", move |_| {
            set_style(&left, "transform", RESTING);
        }));
    }

    listeners
}
