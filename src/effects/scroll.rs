use gloo::events::EventListener;
use web_sys::{Document, Window};

use super::{query, query_all, scroll_y, set_style};
use crate::motion::scroll::{active_section, link_is_active, parallax_transform, NavbarLook};

const BACKGROUND: &str = ".bg-animation";
const NAVBAR: &str = "nav";
const SECTIONS: &str = ".section";
const NAV_LINKS: &str = ".nav-links a";
const ACTIVE_CLASS: &str = "active";

pub fn install_parallax(window: &Window, document: &Document, factor: f64) -> Option<EventListener> {
    let background = query(document, BACKGROUND)?;
    let scrolled = window.clone();

    Some(EventListener::new(window, "scroll", move |_| {
        set_style(
            &background,
            "transform",
            &parallax_transform(scroll_y(&scrolled), factor),
        );
    }))
}

pub fn install_navbar(window: &Window, document: &Document, threshold: f64) -> Option<EventListener> {
    let Some(navbar) = query(document, NAVBAR) else {
        tracing::debug!("no navbar; background switch disabled");
        return None;
    };
    let scrolled = window.clone();

    Some(EventListener::new(window, "scroll", move |_| {
        let look = NavbarLook::for_offset(scroll_y(&scrolled), threshold);
        set_style(&navbar, "background", look.background());
        set_style(&navbar, "box-shadow", look.box_shadow());
    }))
}

pub fn install_active_nav(window: &Window, document: &Document, offset: f64) -> Option<EventListener> {
    let sections = query_all(document, SECTIONS);
    let links = query_all(document, NAV_LINKS);
    if sections.is_empty() || links.is_empty() {
        return None;
    }
    let scrolled = window.clone();

    Some(EventListener::new(window, "scroll", move |_| {
        let positions: Vec<(Option<String>, f64)> = sections
            .iter()
            .map(|section| (section.get_attribute("id"), f64::from(section.offset_top())))
            .collect();
        let active = active_section(
            scroll_y(&scrolled),
            positions.iter().map(|(id, top)| (id.as_deref(), *top)),
            offset,
        );

        for link in &links {
            let class_list = link.class_list();
            let _ = class_list.remove_1(ACTIVE_CLASS);
            let href = link.get_attribute("href").unwrap_or_default();
            if link_is_active(&href, active) {
                let _ = class_list.add_1(ACTIVE_CLASS);
            }
        }
    }))
}
