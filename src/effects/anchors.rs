use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::query_all;
use crate::motion::scroll::anchor_click;

const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";

pub fn install(document: &Document) -> Vec<EventListener> {
    query_all(document, IN_PAGE_ANCHORS)
        .into_iter()
        .map(|anchor| {
            let document = document.clone();
            let link = anchor.clone();
            EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let href = link.get_attribute("href");
                    let click = anchor_click(href.as_deref(), |selector| {
                        document.query_selector(selector).ok().flatten()
                    });
                    if click.prevent_default {
                        event.prevent_default();
                    }
                    match click.target {
                        Some(target) => smooth_scroll_to(&target),
                        None => tracing::debug!(href = ?href, "anchor has no target"),
                    }
                },
            )
        })
        .collect()
}

fn smooth_scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
