use web_sys::Document;

use super::driver::Driver;
use super::{query, set_style};
use crate::motion::hue::HueRotation;

const BACKGROUND: &str = ".bg-animation";

pub fn install(document: &Document, interval_ms: u32) -> Option<Driver> {
    let background = query(document, BACKGROUND)?;

    Some(Driver::start(
        HueRotation::new(interval_ms),
        interval_ms,
        move |filter: &String| set_style(&background, "filter", filter),
    ))
}
