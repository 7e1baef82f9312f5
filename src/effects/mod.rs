//! Binds the motion state machines to the live document.
//!
//! Every component is an independent sibling. [`Effects::install`] wires
//! them all up and the returned value owns every listener, timer and
//! observer; dropping it tears the page decoration down again.

mod anchors;
mod cards;
mod counters;
mod driver;
mod hue;
mod observer;
mod page;
mod reveal;
mod ripple;
mod scroll;
mod trail;
mod typewriter;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::{EffectsConfig, CONFIG_ELEMENT_ID};
use crate::error::{ConfigError, EffectError};

use self::counters::StatCounters;
use self::driver::Driver;
use self::observer::VisibilityWatcher;
use self::trail::CursorTrail;

pub struct Effects {
    listeners: Vec<EventListener>,
    drivers: Vec<Driver>,
    watchers: Vec<VisibilityWatcher>,
    trail: Option<CursorTrail>,
    counters: Option<StatCounters>,
}

impl Effects {
    pub fn install(config: &EffectsConfig) -> Result<Self, EffectError> {
        let window = web_sys::window().ok_or(EffectError::MissingWindow)?;
        let document = window.document().ok_or(EffectError::MissingDocument)?;

        page::announce();

        let reduced_motion = config.skips_continuous_motion(prefers_reduced_motion(&window));
        if reduced_motion {
            tracing::info!("reduced motion requested; cursor trail, parallax and hue rotation are off");
        }

        let mut effects = Self {
            listeners: Vec::new(),
            drivers: Vec::new(),
            watchers: Vec::new(),
            trail: None,
            counters: None,
        };

        effects.listeners.extend(anchors::install(&document));
        effects.watchers.extend(reveal::install_fade_in(&window, &document)?);

        if !reduced_motion {
            effects
                .listeners
                .extend(scroll::install_parallax(&window, &document, config.parallax_factor));
            effects
                .drivers
                .extend(hue::install(&document, config.hue_interval_ms));
            match CursorTrail::install(&document, config.trail_capacity, config.trail_fade_delay_ms)
            {
                Ok(trail) => effects.trail = Some(trail),
                Err(err) => tracing::warn!(%err, "cursor trail disabled"),
            }
        }

        effects
            .listeners
            .extend(scroll::install_navbar(&window, &document, config.navbar_threshold_px));
        effects.drivers.extend(typewriter::install(&document, config));

        if let Err(err) = ripple::inject_keyframes(&document) {
            tracing::warn!(%err, "ripple keyframes not injected");
        }
        effects
            .listeners
            .extend(ripple::install(&document, config.ripple_duration_ms));

        effects.counters = StatCounters::install(
            &window,
            &document,
            config.counter_steps,
            config.counter_interval_ms,
        )?;
        effects.listeners.extend(cards::install(&document));
        effects
            .watchers
            .extend(reveal::install_lazy_loaded(&window, &document)?);
        effects.listeners.extend(scroll::install_active_nav(
            &window,
            &document,
            config.active_nav_offset_px,
        ));
        effects.listeners.extend(page::install_load_marker(&window, &document));

        tracing::debug!(
            listeners = effects.listeners.len(),
            timers = effects.drivers.len(),
            watchers = effects.watchers.len(),
            "effects installed"
        );
        Ok(effects)
    }
}

impl Drop for Effects {
    fn drop(&mut self) {
        let running = self.drivers.iter().filter(|driver| driver.is_running()).count();
        tracing::debug!(
            listeners = self.listeners.len(),
            running_timers = running,
            watchers = self.watchers.len(),
            trail = self.trail.is_some(),
            running_counters = self.counters.as_ref().map_or(0, StatCounters::running),
            "effects uninstalled"
        );
    }
}

/// Reads the optional JSON settings block. A broken block falls back to the
/// defaults and hands back the error so it can be logged once logging is up.
pub fn load_config() -> (EffectsConfig, Option<ConfigError>) {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(text) = text.filter(|text| !text.trim().is_empty()) else {
        return (EffectsConfig::default(), None);
    };

    match EffectsConfig::from_json(&text) {
        Ok(config) => (config, None),
        Err(err) => (EffectsConfig::default(), Some(err)),
    }
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        tracing::debug!(selector, "invalid selector");
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if element.style().set_property(property, value).is_err() {
        tracing::debug!(property, value, "style update rejected");
    }
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn create_html_element(document: &Document, tag: &str) -> Result<HtmlElement, EffectError> {
    document
        .create_element(tag)
        .map_err(|err| EffectError::js("createElement", err))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| EffectError::Js {
            context: "createElement",
            message: format!("<{tag}> is not an HTML element"),
        })
}
