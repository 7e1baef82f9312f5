//! Decorative motion for the portfolio page.
//!
//! The `motion` and `watch` modules hold target-independent state machines
//! that are stepped by the browser layer in `effects`. Everything touching the
//! DOM is compiled for `wasm32` only.

pub mod config;
pub mod error;
pub mod logging;
pub mod motion;
pub mod watch;

#[cfg(target_arch = "wasm32")]
mod effects;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(target_arch = "wasm32")]
pub use effects::Effects;

#[cfg(target_arch = "wasm32")]
pub fn run() {
    frontend::run();
}
