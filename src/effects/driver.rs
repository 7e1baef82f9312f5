use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::motion::Animation;

/// Steps an [`Animation`] on browser timeouts until it finishes or the
/// driver is dropped. A dropped driver stops at its next wake-up.
pub struct Driver {
    running: Rc<Cell<bool>>,
}

impl Driver {
    pub fn start<A, F>(mut animation: A, initial_delay_ms: u32, mut apply: F) -> Self
    where
        A: Animation + 'static,
        F: FnMut(&A::Frame) + 'static,
    {
        let running = Rc::new(Cell::new(true));
        let alive = running.clone();

        spawn_local(async move {
            let mut delay_ms = initial_delay_ms;
            loop {
                TimeoutFuture::new(delay_ms).await;
                if !alive.get() {
                    break;
                }

                let tick = animation.tick();
                apply(tick.frame());
                match tick.delay_ms() {
                    Some(next) => delay_ms = next,
                    None => {
                        alive.set(false);
                        break;
                    }
                }
            }
        });

        Self { running }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        self.running.set(false);
    }
}
