//! Timer-driven state machines and the pure geometry behind each effect.
//!
//! Nothing here knows about the DOM or about real time: a host calls
//! [`Animation::tick`], applies the returned frame and waits for the delay it
//! asks for. Tests step the machines directly.

pub mod counter;
pub mod hue;
pub mod ripple;
pub mod scroll;
pub mod trail;
pub mod typewriter;

#[derive(Clone, Debug, PartialEq)]
pub enum Tick<F> {
    Continue { frame: F, delay_ms: u32 },
    Done { frame: F },
}

impl<F> Tick<F> {
    pub fn frame(&self) -> &F {
        match self {
            Self::Continue { frame, .. } | Self::Done { frame } => frame,
        }
    }

    pub fn delay_ms(&self) -> Option<u32> {
        match self {
            Self::Continue { delay_ms, .. } => Some(*delay_ms),
            Self::Done { .. } => None,
        }
    }
}

pub trait Animation {
    type Frame;

    fn tick(&mut self) -> Tick<Self::Frame>;
}
