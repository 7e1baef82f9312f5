use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Window};

use super::driver::Driver;
use super::observer::VisibilityWatcher;
use super::query_all;
use crate::error::EffectError;
use crate::motion::counter::CounterRamp;
use crate::watch::WatchOptions;

const STAT_NUMBERS: &str = ".stat-number";

/// Counts each stat up from zero the first time it is half visible.
pub struct StatCounters {
    _watcher: VisibilityWatcher,
    ramps: Rc<RefCell<Vec<Driver>>>,
}

impl StatCounters {
    pub fn install(
        window: &Window,
        document: &Document,
        steps: u32,
        interval_ms: u32,
    ) -> Result<Option<Self>, EffectError> {
        let targets = query_all(document, STAT_NUMBERS);
        if targets.is_empty() {
            return Ok(None);
        }

        let ramps = Rc::new(RefCell::new(Vec::new()));
        let started = ramps.clone();
        let watcher = VisibilityWatcher::new(window, &WatchOptions::counters(), move |element| {
            let text = element.text_content().unwrap_or_default();
            let Some(ramp) = CounterRamp::new(&text, steps, interval_ms) else {
                tracing::debug!(text, "stat is not numeric; left as is");
                return;
            };

            let display = element.clone();
            started.borrow_mut().push(Driver::start(
                ramp,
                interval_ms,
                move |frame: &String| display.set_text_content(Some(frame)),
            ));
        })?;

        let Some(watcher) = watcher else {
            return Ok(None);
        };
        for target in &targets {
            watcher.watch(target);
        }

        Ok(Some(Self {
            _watcher: watcher,
            ramps,
        }))
    }

    pub fn running(&self) -> usize {
        self.ramps
            .borrow()
            .iter()
            .filter(|driver| driver.is_running())
            .count()
    }
}
