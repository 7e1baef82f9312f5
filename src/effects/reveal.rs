use web_sys::{Document, Window};

use super::observer::VisibilityWatcher;
use super::{query_all, set_style};
use crate::error::EffectError;
use crate::watch::WatchOptions;

const FADE_IN_TARGETS: &str = ".skill-card, .project-card, .contact-item";
const LAZY_TARGETS: &str = ".skill-card, .project-card";
const LOADED_CLASS: &str = "loaded";

/// Cards start hidden 30px low and ease into place whenever they enter the
/// viewport.
pub fn install_fade_in(
    window: &Window,
    document: &Document,
) -> Result<Option<VisibilityWatcher>, EffectError> {
    let targets = query_all(document, FADE_IN_TARGETS);
    if targets.is_empty() {
        return Ok(None);
    }

    let Some(watcher) = VisibilityWatcher::new(window, &WatchOptions::reveal(), |element| {
        set_style(element, "opacity", "1");
        set_style(element, "transform", "translateY(0)");
    })?
    else {
        tracing::debug!("no IntersectionObserver; cards stay visible without fade-in");
        return Ok(None);
    };

    for target in &targets {
        set_style(target, "opacity", "0");
        set_style(target, "transform", "translateY(30px)");
        set_style(target, "transition", "all 0.6s ease-out");
        watcher.watch(target);
    }

    Ok(Some(watcher))
}

pub fn install_lazy_loaded(
    window: &Window,
    document: &Document,
) -> Result<Option<VisibilityWatcher>, EffectError> {
    let targets = query_all(document, LAZY_TARGETS);
    if targets.is_empty() {
        return Ok(None);
    }

    let Some(watcher) = VisibilityWatcher::new(window, &WatchOptions::lazy(), |element| {
        if element.class_list().add_1(LOADED_CLASS).is_err() {
            tracing::debug!("could not mark element loaded");
        }
    })?
    else {
        return Ok(None);
    };

    for target in &targets {
        watcher.watch(target);
    }

    Ok(Some(watcher))
}
