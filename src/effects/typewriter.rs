use web_sys::Document;

use super::driver::Driver;
use super::query;
use crate::config::EffectsConfig;
use crate::motion::typewriter::Typewriter;

const ROLE_TEXT: &str = ".role";

pub fn install(document: &Document, config: &EffectsConfig) -> Option<Driver> {
    let role = query(document, ROLE_TEXT)?;
    let typewriter = Typewriter::new(config.roles.clone(), config.typewriter)?;

    Some(Driver::start(
        typewriter,
        config.typewriter_start_delay_ms,
        move |text: &String| role.set_text_content(Some(text)),
    ))
}
