use super::{Animation, Tick};

const FULL_TURN: u16 = 360;

#[derive(Clone, Debug)]
pub struct HueRotation {
    hue: u16,
    interval_ms: u32,
}

impl HueRotation {
    pub fn new(interval_ms: u32) -> Self {
        Self { hue: 0, interval_ms }
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }
}

impl Animation for HueRotation {
    type Frame = String;

    fn tick(&mut self) -> Tick<String> {
        self.hue = (self.hue + 1) % FULL_TURN;
        Tick::Continue {
            frame: hue_filter(self.hue),
            delay_ms: self.interval_ms,
        }
    }
}

pub fn hue_filter(hue: u16) -> String {
    format!("hue-rotate({hue}deg)")
}
