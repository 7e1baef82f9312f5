pub const RIPPLE_KEYFRAMES: &str = "
    @keyframes ripple {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }
";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub diameter: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Circle covering the larger side of `host`, centred on the click point.
    pub fn at(host: Rect, client_x: f64, client_y: f64) -> Self {
        let diameter = host.width.max(host.height);
        Self {
            diameter,
            left: client_x - host.left - diameter / 2.0,
            top: client_y - host.top - diameter / 2.0,
        }
    }

    /// Delay before the overlay is detached: once its animation has played.
    pub fn removal_delay_ms(duration_ms: u32) -> u32 {
        duration_ms
    }

    pub fn css(&self, duration_ms: u32) -> String {
        format!(
            "width: {d}px; height: {d}px; left: {left}px; top: {top}px; position: absolute; \
             border-radius: 50%; background: rgba(255, 255, 255, 0.5); transform: scale(0); \
             animation: ripple {secs}s ease-out; pointer-events: none;",
            d = self.diameter,
            left = self.left,
            top = self.top,
            secs = f64::from(duration_ms) / 1_000.0,
        )
    }
}
