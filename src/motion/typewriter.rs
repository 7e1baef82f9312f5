use super::{Animation, Tick};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_full_ms: u32,
    pub hold_empty_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausingFull,
    Deleting,
    PausingEmpty,
}

/// Types each phrase one character at a time, holds it, deletes it, then
/// moves on to the next phrase, forever.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    offset: usize,
    phase: Phase,
    timing: TypewriterTiming,
}

impl Typewriter {
    /// Returns `None` when there is nothing to type.
    pub fn new(phrases: Vec<String>, timing: TypewriterTiming) -> Option<Self> {
        let phrases: Vec<String> = phrases
            .into_iter()
            .filter(|phrase| !phrase.is_empty())
            .collect();
        if phrases.is_empty() {
            return None;
        }

        Some(Self {
            phrases,
            index: 0,
            offset: 0,
            phase: Phase::Typing,
            timing,
        })
    }

    pub fn phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn visible_text(&self) -> &str {
        char_prefix(self.phrase(), self.offset)
    }

    fn phrase_len(&self) -> usize {
        self.phrase().chars().count()
    }
}

impl Animation for Typewriter {
    type Frame = String;

    fn tick(&mut self) -> Tick<String> {
        let delay_ms = match self.phase {
            Phase::Typing | Phase::PausingEmpty => {
                let len = self.phrase_len();
                self.offset = (self.offset + 1).min(len);
                if self.offset == len {
                    self.phase = Phase::PausingFull;
                    self.timing.hold_full_ms
                } else {
                    self.phase = Phase::Typing;
                    self.timing.type_ms
                }
            }
            Phase::Deleting | Phase::PausingFull => {
                self.offset = self.offset.saturating_sub(1);
                if self.offset == 0 {
                    self.phase = Phase::PausingEmpty;
                    self.timing.hold_empty_ms
                } else {
                    self.phase = Phase::Deleting;
                    self.timing.delete_ms
                }
            }
        };

        let frame = self.visible_text().to_string();
        if self.phase == Phase::PausingEmpty {
            self.index = (self.index + 1) % self.phrases.len();
        }

        Tick::Continue { frame, delay_ms }
    }
}

fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMING: TypewriterTiming = TypewriterTiming {
        type_ms: 100,
        delete_ms: 50,
        hold_full_ms: 2_000,
        hold_empty_ms: 500,
    };

    fn phrases(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn frames(typewriter: &mut Typewriter, count: usize) -> Vec<(String, u32)> {
        (0..count)
            .map(|_| match typewriter.tick() {
                Tick::Continue { frame, delay_ms } => (frame, delay_ms),
                Tick::Done { .. } => panic!("typewriter never finishes"),
            })
            .collect()
    }

    #[test]
    fn phrases_cycle_in_order_typed_then_deleted() {
        let mut typewriter =
            Typewriter::new(phrases(&["A", "BB", "CCC"]), TIMING).expect("non-empty phrases");

        let texts: Vec<String> = frames(&mut typewriter, 17)
            .into_iter()
            .map(|(text, _)| text)
            .collect();

        assert_eq!(
            texts,
            vec![
                "A", "", "B", "BB", "B", "", "C", "CC", "CCC", "CC", "C", "", "A", "", "B", "BB",
                "B",
            ]
        );
    }

    #[test]
    fn delays_follow_typing_hold_and_delete_speeds() {
        let mut typewriter = Typewriter::new(phrases(&["Hi"]), TIMING).expect("non-empty phrases");

        let delays: Vec<u32> = frames(&mut typewriter, 5)
            .into_iter()
            .map(|(_, delay)| delay)
            .collect();

        assert_eq!(delays, vec![100, 2_000, 50, 500, 100]);
    }

    #[test]
    fn offset_stays_within_the_active_phrase() {
        let mut typewriter =
            Typewriter::new(phrases(&["Rust", "", "wasm ✨"]), TIMING).expect("non-empty phrases");

        for _ in 0..200 {
            typewriter.tick();
            assert!(typewriter.offset() <= typewriter.phrase().chars().count());
        }
    }

    #[test]
    fn phases_move_through_the_full_cycle() {
        let mut typewriter = Typewriter::new(phrases(&["AB"]), TIMING).expect("non-empty phrases");
        assert_eq!(typewriter.phase(), Phase::Typing);

        typewriter.tick();
        assert_eq!(typewriter.phase(), Phase::Typing);
        typewriter.tick();
        assert_eq!(typewriter.phase(), Phase::PausingFull);
        typewriter.tick();
        assert_eq!(typewriter.phase(), Phase::Deleting);
        typewriter.tick();
        assert_eq!(typewriter.phase(), Phase::PausingEmpty);
        assert_eq!(typewriter.index(), 0);
    }

    #[test]
    fn multibyte_phrases_are_typed_per_character() {
        let mut typewriter = Typewriter::new(phrases(&["né"]), TIMING).expect("non-empty phrases");

        assert_eq!(typewriter.tick().frame(), "n");
        assert_eq!(typewriter.tick().frame(), "né");
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        assert!(Typewriter::new(Vec::new(), TIMING).is_none());
        assert!(Typewriter::new(phrases(&[""]), TIMING).is_none());
    }
}
