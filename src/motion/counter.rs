use super::{Animation, Tick};

/// Ramps a displayed number from zero up to the value it was rendered with.
#[derive(Clone, Debug)]
pub struct CounterRamp {
    original: String,
    target: f64,
    increment: f64,
    current: f64,
    percentage: bool,
    interval_ms: u32,
}

impl CounterRamp {
    /// Returns `None` when the text does not start with an integer.
    pub fn new(text: &str, steps: u32, interval_ms: u32) -> Option<Self> {
        let target = leading_integer(text)?;

        Some(Self {
            original: text.to_string(),
            target,
            increment: target / f64::from(steps.max(1)),
            current: 0.0,
            percentage: text.contains('%'),
            interval_ms,
        })
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Animation for CounterRamp {
    type Frame = String;

    fn tick(&mut self) -> Tick<String> {
        self.current += self.increment;
        if self.current >= self.target {
            return Tick::Done {
                frame: self.original.clone(),
            };
        }

        let suffix = if self.percentage { '%' } else { '+' };
        Tick::Continue {
            frame: format!("{}{suffix}", self.current.floor()),
            delay_ms: self.interval_ms,
        }
    }
}

/// Integer prefix of `text`: optional leading whitespace, optional sign, then
/// at least one ASCII digit. Anything after the digits is ignored. Long digit
/// runs lose precision instead of failing.
pub fn leading_integer(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: f64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(ramp: &mut CounterRamp) -> Vec<String> {
        let mut frames = Vec::new();
        loop {
            match ramp.tick() {
                Tick::Continue { frame, .. } => frames.push(frame),
                Tick::Done { frame } => {
                    frames.push(frame);
                    return frames;
                }
            }
            assert!(frames.len() < 1_000, "ramp must terminate");
        }
    }

    #[test]
    fn leading_integer_parses_prefix_only() {
        assert_eq!(leading_integer("50+"), Some(50.0));
        assert_eq!(leading_integer("98%"), Some(98.0));
        assert_eq!(leading_integer("  12 projects"), Some(12.0));
        assert_eq!(leading_integer("1,200"), Some(1.0));
        assert_eq!(leading_integer("-7"), Some(-7.0));
        assert_eq!(leading_integer("years"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn ramp_uses_plus_suffix_then_restores_original_text() {
        let mut ramp = CounterRamp::new("50+", 50, 30).expect("numeric text");
        let frames = run_to_completion(&mut ramp);

        assert_eq!(frames.first().map(String::as_str), Some("1+"));
        assert_eq!(frames.last().map(String::as_str), Some("50+"));
        assert!(frames.len() >= 50);
    }

    #[test]
    fn percentage_keeps_its_suffix_during_the_ramp() {
        let mut ramp = CounterRamp::new("100%", 50, 30).expect("numeric text");
        let frames = run_to_completion(&mut ramp);

        assert_eq!(frames[0], "2%");
        assert!(frames[..frames.len() - 1].iter().all(|frame| frame.ends_with('%')));
        assert_eq!(frames.last().map(String::as_str), Some("100%"));
    }

    #[test]
    fn bare_number_gains_a_plus_only_mid_ramp() {
        let mut ramp = CounterRamp::new("10", 50, 30).expect("numeric text");
        let frames = run_to_completion(&mut ramp);

        assert_eq!(frames[0], "0+");
        assert_eq!(frames.last().map(String::as_str), Some("10"));
    }

    #[test]
    fn zero_completes_on_the_first_tick() {
        let mut ramp = CounterRamp::new("0", 50, 30).expect("numeric text");
        assert_eq!(ramp.tick(), Tick::Done { frame: "0".to_string() });
    }

    #[test]
    fn non_numeric_text_is_not_animated() {
        assert!(CounterRamp::new("∞", 50, 30).is_none());
    }

    #[test]
    fn ticks_are_spaced_by_the_interval() {
        let mut ramp = CounterRamp::new("25", 50, 30).expect("numeric text");
        assert_eq!(ramp.tick().delay_ms(), Some(30));
        assert_eq!(ramp.target(), 25.0);
    }

    #[test]
    fn very_long_numbers_are_still_ramped() {
        let mut ramp = CounterRamp::new("12345678901234567890+", 50, 30).expect("numeric text");
        assert_eq!(ramp.target(), 12_345_678_901_234_567_890.0);

        let frames = run_to_completion(&mut ramp);
        assert!(frames[0].ends_with('+'));
        assert!(!frames[0].contains('e'));
        assert_eq!(frames.last().map(String::as_str), Some("12345678901234567890+"));
    }
}
